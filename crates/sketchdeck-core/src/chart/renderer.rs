//! Chart instance lifecycle.
//!
//! The chart library cannot change a chart's kind in place, so every
//! configuration change destroys the live instance before creating the next
//! one. At most one instance is alive per renderer.

use std::sync::OnceLock;

use rand::Rng;
use thiserror::Error;

use super::config::{ChartConfig, ChartKind, ChartOptions};

/// Chart errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Chart surface is not ready")]
    SurfaceNotReady,
    #[error("Chart has no data series")]
    NoSeries,
    #[error("Series length mismatch: expected {expected} values, got {actual}")]
    SeriesLength { expected: usize, actual: usize },
}

/// Process-wide registration of chart primitives.
///
/// Performed once; a [`ChartRenderer`] can only be built from the registry
/// reference returned by [`ChartRegistry::init`].
#[derive(Debug)]
pub struct ChartRegistry {
    kinds: Vec<ChartKind>,
}

static REGISTRY: OnceLock<ChartRegistry> = OnceLock::new();

impl ChartRegistry {
    /// Register all chart primitives. Later calls return the same registry.
    pub fn init() -> &'static ChartRegistry {
        REGISTRY.get_or_init(|| {
            log::debug!("Registering chart primitives: {:?}", ChartKind::ALL);
            ChartRegistry { kinds: ChartKind::ALL.to_vec() }
        })
    }

    /// Registered kinds, in selector order.
    pub fn kinds(&self) -> &[ChartKind] {
        &self.kinds
    }
}

/// External chart library contract.
pub trait ChartBackend {
    /// Live chart handle bound to the backend's target surface.
    type Instance;

    /// Create a chart for `config`.
    fn create(
        &mut self,
        config: &ChartConfig,
        options: &ChartOptions,
    ) -> Result<Self::Instance, ChartError>;

    /// Replace the instance's data in place and redraw it. The kind is unchanged.
    fn update(&mut self, instance: &mut Self::Instance, config: &ChartConfig);

    /// Release the instance and everything bound to it.
    fn destroy(&mut self, instance: Self::Instance);
}

/// Owns a single chart instance and keeps it in sync with its configuration.
pub struct ChartRenderer<B: ChartBackend> {
    registry: &'static ChartRegistry,
    backend: B,
    config: ChartConfig,
    instance: Option<B::Instance>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    /// Create an unmounted renderer.
    pub fn new(registry: &'static ChartRegistry, backend: B, config: ChartConfig) -> Self {
        Self {
            registry,
            backend,
            config,
            instance: None,
        }
    }

    /// Create the chart instance for `config`.
    ///
    /// When the target surface is not ready the call is a silent no-op and
    /// the renderer stays unmounted.
    pub fn mount(&mut self, config: ChartConfig) -> Result<(), ChartError> {
        self.config = config;
        self.rebuild()
    }

    /// Destroy the live instance and create a new one for `config`.
    pub fn reconfigure(&mut self, config: ChartConfig) -> Result<(), ChartError> {
        self.config = config;
        self.rebuild()
    }

    /// Switch to another kind, keeping the current data.
    pub fn set_kind(&mut self, kind: ChartKind) -> Result<(), ChartError> {
        let config = self.config.clone().with_kind(kind);
        self.reconfigure(config)
    }

    /// Replace the values of the first series in place and redraw.
    pub fn update_series(&mut self, values: Vec<f64>) -> Result<(), ChartError> {
        let expected = self.config.labels.len();
        let series = self.config.series.first_mut().ok_or(ChartError::NoSeries)?;
        if values.len() != expected {
            return Err(ChartError::SeriesLength { expected, actual: values.len() });
        }
        series.values = values;
        self.redraw();
        Ok(())
    }

    /// Replace the first series with random integers in `[0, 100)`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<(), ChartError> {
        let values = self
            .config
            .labels
            .iter()
            .map(|_| f64::from(rng.random_range(0..100u32)))
            .collect();
        self.update_series(values)
    }

    /// Ask the backend to redraw the live instance from the current configuration.
    pub fn redraw(&mut self) {
        if let Some(instance) = self.instance.as_mut() {
            self.backend.update(instance, &self.config);
        }
    }

    /// Destroy the live instance. Calling it again is a no-op.
    pub fn unmount(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.backend.destroy(instance);
            log::debug!("Chart destroyed");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    pub fn registry(&self) -> &'static ChartRegistry {
        self.registry
    }

    pub fn instance(&self) -> Option<&B::Instance> {
        self.instance.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn rebuild(&mut self) -> Result<(), ChartError> {
        // Destroy must complete before the next create.
        self.unmount();

        if self.config.series.is_empty() {
            return Err(ChartError::NoSeries);
        }

        let options = ChartOptions::for_kind(self.config.kind);
        match self.backend.create(&self.config, &options) {
            Ok(instance) => {
                log::debug!("Chart created ({})", self.config.kind.name());
                self.instance = Some(instance);
                Ok(())
            }
            Err(ChartError::SurfaceNotReady) => {
                log::debug!("Chart surface not ready, skipping create");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl<B: ChartBackend> Drop for ChartRenderer<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}
