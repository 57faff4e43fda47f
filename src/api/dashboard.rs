use std::time::Duration;

use crate::core::{CandidatePools, ChartSpec, LoadedDataset, Selection, Viewport};
use crate::error::DashboardResult;
use crate::extensions::DashboardPlugin;
use crate::render::ChartSurface;

use super::{DashboardConfig, ResizeCoalescer};

/// Session controller for one benchmark chart.
///
/// `Dashboard` owns the loaded dataset, the current selection, the derived
/// candidate pools and the surface the chart is drawn on. Every operation
/// runs to completion (state change, re-derivation, re-projection, render)
/// before returning.
pub struct Dashboard<S: ChartSurface> {
    pub(super) surface: S,
    pub(super) config: DashboardConfig,
    pub(super) dataset: Option<LoadedDataset>,
    pub(super) selection: Selection,
    pub(super) candidates: CandidatePools,
    pub(super) chart: Option<ChartSpec>,
    pub(super) load_failure: Option<String>,
    pub(super) resize: ResizeCoalescer,
    pub(super) plugins: Vec<Box<dyn DashboardPlugin>>,
}

impl<S: ChartSurface> Dashboard<S> {
    pub fn new(surface: S, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self {
            surface,
            selection: Selection::new(config.initial_metric, config.initial_threading),
            resize: ResizeCoalescer::new(Duration::from_millis(config.resize_debounce_ms)),
            config,
            dataset: None,
            candidates: CandidatePools::default(),
            chart: None,
            load_failure: None,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&LoadedDataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tests and styles selectable under the current threading mode.
    #[must_use]
    pub fn candidates(&self) -> &CandidatePools {
        &self.candidates
    }

    /// Chart most recently handed to the surface.
    #[must_use]
    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.as_ref()
    }

    /// CPU brand of the loaded dataset.
    #[must_use]
    pub fn processor_label(&self) -> Option<&str> {
        let dataset = self.dataset.as_ref()?;
        Some(
            dataset
                .dataset()
                .cpu_brand()
                .unwrap_or(&self.config.unknown_cpu_label),
        )
    }

    #[must_use]
    pub fn updated(&self) -> Option<&str> {
        self.dataset.as_ref()?.updated()
    }

    /// Failure message after an unsuccessful load, otherwise the processor label.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.load_failure.as_deref().or_else(|| self.processor_label())
    }

    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.load_failure.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
