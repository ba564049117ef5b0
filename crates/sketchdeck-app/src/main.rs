//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting SketchDeck");

    let config = sketchdeck_app::load_config();
    if let Err(e) = pollster::block_on(sketchdeck_app::App::run(config)) {
        log::error!("Event loop error: {e}");
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
