//! UI components using egui.

use egui::{
    Color32, Context, CornerRadius, CursorIcon, Frame, Rect, Sense, Stroke, StrokeKind, Ui, vec2,
};
use kurbo::Point;
use peniko::Color;
use sketchdeck_core::{ChartKind, PanelId, PointerEvent, Tool, to_hex};
use sketchdeck_widgets::{
    ColorSwatch, TabBar, TextButton, ToggleButton, card_frame, chart_labels, circular_gauge,
    counter_display, from_color32, heading, progress_bar, section_label, separator, swatch_grid,
    theme, to_color32,
};

use crate::app::DeckPanel;

const APP_TITLE: &str = "DJS - Développement Frontend Javascript";
const APP_SUBTITLE: &str = "Module 40.102 - Haute École Arc Ingénierie";
const FOOTER: &str = "© 2025 - Module DJS - Responsable: Marc Schaefer";
const FOOTER_DETAILS: &str =
    "Crédits ECTS: 2 | Volume: 50h (20h enseignement + 30h travail personnel)";

const CONCEPTS: [(&str, [&str; 4]); 4] = [
    (
        "Canvas HTML5",
        [
            "Dessin 2D en temps réel",
            "Manipulation pixel par pixel",
            "Animations fluides",
            "Jeux et visualisations",
        ],
    ),
    (
        "Chart.js",
        [
            "Graphiques interactifs",
            "Animations automatiques",
            "Responsive design",
            "Thèmes personnalisables",
        ],
    ),
    ("Événements Canvas", ["mousedown/mouseup", "mousemove", "touchstart/touchend", "touchmove"]),
    ("Formes 2D", ["Rectangles et carrés", "Cercles et arcs", "Lignes et courbes", "Polygones"]),
];

/// Height reserved for the chart.
const CHART_HEIGHT: f32 = 300.0;

/// Actions triggered from the UI, applied by the app after the egui pass.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Switch the active panel.
    SelectPanel(PanelId),
    /// Change the drawing tool.
    SetTool(Tool),
    /// Change the stamp color for later stamps.
    SetStampColor(Color),
    /// Clear the drawing surface.
    ClearCanvas,
    /// Raw pointer input, in UI points.
    Pointer(PointerEvent),
    /// Rebuild the chart as another kind.
    SetChartKind(ChartKind),
    /// Fill the chart with random values.
    RandomizeChart,
    /// Set the counter display back to 0.
    ResetCounter,
    /// Show or hide the swatch grid.
    TogglePicker,
    /// Pick a swatch.
    PickColor(Color),
}

/// Layout results of the last UI pass.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Where the drawing surface sits this frame.
    pub canvas_rect: Option<Rect>,
    /// Where the chart sits this frame.
    pub chart_rect: Option<Rect>,
}

/// Render the whole UI and return the triggered actions, in order.
pub fn render_ui(
    ctx: &Context,
    ui_state: &mut UiState,
    active: PanelId,
    panel: &DeckPanel,
) -> Vec<UiAction> {
    let mut actions = Vec::new();
    ui_state.canvas_rect = None;
    ui_state.chart_rect = None;

    egui::TopBottomPanel::top("header")
        .frame(Frame::new().fill(theme::PAGE_BG).inner_margin(egui::Margin::same(12)))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(APP_TITLE).size(24.0).strong().color(theme::TEXT));
            section_label(ui, APP_SUBTITLE);
            ui.add_space(8.0);
            let tabs: Vec<(PanelId, &str)> =
                PanelId::ALL.iter().map(|id| (*id, id.title())).collect();
            if let Some(id) = TabBar::new(&tabs, active).show(ui) {
                actions.push(UiAction::SelectPanel(id));
            }
        });

    egui::TopBottomPanel::bottom("footer")
        .frame(Frame::new().fill(theme::PAGE_BG).inner_margin(egui::Margin::same(8)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                section_label(ui, FOOTER);
                section_label(ui, FOOTER_DETAILS);
            });
        });

    // Transparent so the scenes painted beneath show through.
    egui::CentralPanel::default()
        .frame(Frame::NONE.inner_margin(egui::Margin::same(12)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .drag_to_scroll(false)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    heading(ui, active.title());
                    section_label(ui, active.summary());
                    ui.add_space(12.0);

                    if active == PanelId::Widgets {
                        render_widgets_panel(ui, ui_state, panel, &mut actions);
                    } else {
                        card_frame(theme::CARD_BG).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(egui::RichText::new(active.summary()).color(theme::TEXT));
                        });
                    }
                });
        });

    actions
}

fn render_widgets_panel(
    ui: &mut Ui,
    ui_state: &mut UiState,
    panel: &DeckPanel,
    actions: &mut Vec<UiAction>,
) {
    render_canvas_card(ui, ui_state, panel, actions);
    ui.add_space(12.0);
    render_chart_card(ui, ui_state, panel, actions);
    ui.add_space(12.0);

    card_frame(theme::CARD_BG).show(ui, |ui| {
        ui.set_width(ui.available_width());
        heading(ui, "Widgets interactifs");
        ui.columns(2, |columns| {
            section_label(&mut columns[0], "Barres de progression");
            for bar in panel.progress_bars() {
                progress_bar(
                    &mut columns[0],
                    &bar.label,
                    &bar.value_text(),
                    bar.fill_fraction() as f32,
                    to_color32(bar.color),
                );
            }

            section_label(&mut columns[1], "Jauge circulaire");
            circular_gauge(&mut columns[1], panel.gauge());
        });

        separator(ui);
        ui.columns(2, |columns| {
            section_label(&mut columns[0], "Compteur animé");
            counter_display(&mut columns[0], panel.counter().displayed());
            columns[0].vertical_centered(|ui| {
                if TextButton::new("Réinitialiser").show(ui) {
                    actions.push(UiAction::ResetCounter);
                }
            });

            section_label(&mut columns[1], "Sélecteur de couleurs");
            render_color_picker(&mut columns[1], panel, actions);
        });
    });
    ui.add_space(12.0);

    card_frame(theme::CARD_BG).show(ui, |ui| {
        ui.set_width(ui.available_width());
        heading(ui, "Concepts Canvas et Graphisme 2D");
        ui.columns(CONCEPTS.len(), |columns| {
            for (column, (title, items)) in columns.iter_mut().zip(CONCEPTS) {
                column.label(egui::RichText::new(title).strong().color(theme::ACCENT));
                for item in items {
                    column.label(egui::RichText::new(format!("• {item}")).color(theme::TEXT));
                }
            }
        });
    });
}

fn render_canvas_card(
    ui: &mut Ui,
    ui_state: &mut UiState,
    panel: &DeckPanel,
    actions: &mut Vec<UiAction>,
) {
    let surface = panel.surface();

    card_frame(Color32::TRANSPARENT).show(ui, |ui| {
        ui.set_width(ui.available_width());
        heading(ui, "Canvas de dessin");

        ui.horizontal_wrapped(|ui| {
            for tool in Tool::ALL {
                if ToggleButton::new(tool.label(), surface.tool() == tool).show(ui) {
                    actions.push(UiAction::SetTool(tool));
                }
            }

            let mut color = to_color32(surface.color());
            let alpha = egui::color_picker::Alpha::Opaque;
            if egui::color_picker::color_edit_button_srgba(ui, &mut color, alpha).changed() {
                actions.push(UiAction::SetStampColor(from_color32(color)));
            }

            if TextButton::new("Effacer").danger().show(ui) {
                actions.push(UiAction::ClearCanvas);
            }
        });
        ui.add_space(12.0);

        let size = surface.size();
        let size = vec2(size.width as f32, size.height as f32);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let hovered = response.hovered();
        response.on_hover_cursor(CursorIcon::Crosshair);
        if !surface.is_ready() {
            // Raster not attached yet, show the bare background.
            ui.painter().rect_filled(rect, CornerRadius::ZERO, to_color32(surface.background()));
        }
        ui.painter().rect_stroke(
            rect.expand(2.0),
            CornerRadius::same(8),
            Stroke::new(2.0, theme::ACCENT),
            StrokeKind::Outside,
        );
        ui_state.canvas_rect = Some(rect);
        actions.extend(pointer_events(ui.ctx(), hovered).into_iter().map(UiAction::Pointer));

        ui.add_space(12.0);
        let count = format!("Éléments dessinés: {}", surface.stamp_count());
        ui.label(egui::RichText::new(count).color(theme::TEXT));
    });
}

fn render_chart_card(
    ui: &mut Ui,
    ui_state: &mut UiState,
    panel: &DeckPanel,
    actions: &mut Vec<UiAction>,
) {
    let chart = panel.chart();

    card_frame(Color32::TRANSPARENT).show(ui, |ui| {
        ui.set_width(ui.available_width());
        heading(ui, "Graphiques interactifs");

        ui.horizontal(|ui| {
            let mut kind = chart.kind();
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for option in chart.registry().kinds() {
                        ui.selectable_value(&mut kind, *option, option.label());
                    }
                });
            if kind != chart.kind() {
                actions.push(UiAction::SetChartKind(kind));
            }

            if TextButton::new("Données aléatoires").show(ui) {
                actions.push(UiAction::RandomizeChart);
            }
        });
        ui.add_space(12.0);

        let size = vec2(ui.available_width(), CHART_HEIGHT);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        ui_state.chart_rect = Some(rect);
        if let Some(instance) = chart.instance() {
            chart_labels(ui.painter(), rect.min, instance.layout());
        }
    });
}

fn render_color_picker(ui: &mut Ui, panel: &DeckPanel, actions: &mut Vec<UiAction>) {
    let picker = panel.color_picker();
    let selected = to_color32(picker.selected());
    let hex = to_hex(picker.selected());

    ui.horizontal(|ui| {
        let (clicked, _) = ColorSwatch::new(selected, &hex)
            .selected(true)
            .size(vec2(sketchdeck_widgets::sizing::LARGE, sketchdeck_widgets::sizing::LARGE))
            .show(ui);
        if clicked {
            actions.push(UiAction::TogglePicker);
        }
        ui.label(egui::RichText::new(&hex).color(theme::TEXT));
    });

    if picker.is_grid_visible() {
        ui.add_space(8.0);
        let colors: Vec<Color32> = picker.swatches().iter().map(|c| to_color32(*c)).collect();
        let labels: Vec<String> = picker.swatches().iter().map(|c| to_hex(*c)).collect();
        if let Some(index) = swatch_grid(ui, &colors, &labels, selected, 4) {
            actions.push(UiAction::PickColor(picker.swatches()[index]));
        }
    }
}

/// Primary-button pointer input of this frame, in order.
///
/// Presses are dropped unless the canvas is hovered, so clicks on popups
/// floating above it never start a stroke.
fn pointer_events(ctx: &Context, canvas_hovered: bool) -> Vec<PointerEvent> {
    ctx.input(|input| map_pointer_events(&input.events, canvas_hovered))
}

fn map_pointer_events(events: &[egui::Event], canvas_hovered: bool) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                let position = to_point(*pos);
                match pressed {
                    true if canvas_hovered => Some(PointerEvent::Down { position }),
                    true => None,
                    false => Some(PointerEvent::Up { position }),
                }
            }
            egui::Event::PointerMoved(pos) => Some(PointerEvent::Move { position: to_point(*pos) }),
            _ => None,
        })
        .collect()
}

fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(x: f32, y: f32, button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_pointer_events_keep_order() {
        let events = vec![
            button(10.0, 20.0, egui::PointerButton::Primary, true),
            egui::Event::PointerMoved(egui::pos2(15.0, 25.0)),
            button(15.0, 25.0, egui::PointerButton::Primary, false),
        ];
        let mapped = map_pointer_events(&events, true);
        assert_eq!(
            mapped,
            vec![
                PointerEvent::Down { position: Point::new(10.0, 20.0) },
                PointerEvent::Move { position: Point::new(15.0, 25.0) },
                PointerEvent::Up { position: Point::new(15.0, 25.0) },
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_dropped() {
        let events = vec![
            button(10.0, 20.0, egui::PointerButton::Primary, true),
            button(10.0, 20.0, egui::PointerButton::Primary, false),
        ];
        let mapped = map_pointer_events(&events, false);
        assert_eq!(mapped, vec![PointerEvent::Up { position: Point::new(10.0, 20.0) }]);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let events = vec![button(10.0, 20.0, egui::PointerButton::Secondary, true)];
        assert!(map_pointer_events(&events, true).is_empty());
    }

    #[test]
    fn test_to_point() {
        let point = to_point(egui::pos2(12.5, 40.0));
        assert_eq!(point, Point::new(12.5, 40.0));
    }
}
