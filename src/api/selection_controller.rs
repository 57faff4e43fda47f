use tracing::{debug, trace, warn};

use crate::core::{
    ChartSpec, LoadedDataset, Metric, Selection, SelectionField, ThreadingMode, derive_candidates,
    project,
};
use crate::error::DashboardResult;
use crate::extensions::PluginEvent;
use crate::render::ChartSurface;

use super::Dashboard;

impl<S: ChartSurface> Dashboard<S> {
    /// Selects a test and re-projects.
    ///
    /// The name is not checked against the candidate pool; a name no run
    /// offers simply produces an empty chart.
    pub fn select_test(&mut self, test: impl Into<String>) -> DashboardResult<()> {
        let selection = self.selection.clone().with_test(test);
        self.apply_update(None, selection, Some(SelectionField::Test), false)
    }

    /// Selects a fill style and re-projects.
    pub fn select_style(&mut self, style: impl Into<String>) -> DashboardResult<()> {
        let selection = self.selection.clone().with_style(style);
        self.apply_update(None, selection, Some(SelectionField::Style), false)
    }

    pub fn select_metric(&mut self, metric: Metric) -> DashboardResult<()> {
        let selection = self.selection.clone().with_metric(metric);
        self.apply_update(None, selection, Some(SelectionField::Metric), false)
    }

    /// Switches the threading filter, re-derives the candidate pools and
    /// falls back to the first candidate for any selection the new pools no
    /// longer offer.
    pub fn select_threading(&mut self, threading: ThreadingMode) -> DashboardResult<()> {
        let selection = self.selection.clone().with_threading(threading);
        self.apply_update(None, selection, Some(SelectionField::Threading), true)
    }

    /// Stages a session change, renders its chart and only then commits it.
    ///
    /// `dataset` replaces the session dataset when given. When the surface
    /// fails to render, the previous chart is redrawn and the dataset,
    /// selection, candidate pools and chart all keep their prior values.
    pub(super) fn apply_update(
        &mut self,
        dataset: Option<LoadedDataset>,
        mut selection: Selection,
        changed: Option<SelectionField>,
        rederive: bool,
    ) -> DashboardResult<()> {
        let Some(active) = dataset.as_ref().or(self.dataset.as_ref()) else {
            self.selection = selection;
            if let Some(field) = changed {
                self.selection_changed(field);
            }
            return Ok(());
        };

        let mut reconciled = Vec::new();
        let candidates = rederive.then(|| {
            let pools = derive_candidates(active, selection.threading);
            reconciled = selection.reconcile(&pools);
            pools
        });
        let chart = project(active, &selection);

        if let Some(spec) = &chart {
            self.present(spec)?;
        }

        if let Some(dataset) = dataset {
            let runs_len = dataset.profiles().len();
            debug!(
                runs_len,
                sizes_len = dataset.sizes().map_or(0, <[String]>::len),
                processor = dataset.processor_label(),
                "loaded benchmark dataset"
            );
            self.dataset = Some(dataset);
            self.load_failure = None;
            self.emit_plugin_event(PluginEvent::DatasetLoaded { runs_len });
        }

        self.selection = selection;
        if let Some(field) = changed {
            self.selection_changed(field);
        }

        if let Some(pools) = candidates {
            debug!(
                threading = %self.selection.threading,
                tests_len = pools.tests.len(),
                styles_len = pools.styles.len(),
                "derived candidate pools"
            );
            self.emit_plugin_event(PluginEvent::CandidatesUpdated {
                tests_len: pools.tests.len(),
                styles_len: pools.styles.len(),
            });
            self.candidates = pools;
        }
        for field in reconciled {
            self.selection_changed(field);
        }

        match chart {
            Some(spec) => {
                let rows = spec.row_count();
                let series = spec.series.len();
                self.chart = Some(spec);
                self.emit_plugin_event(PluginEvent::ChartRendered { rows, series });
            }
            None => {
                trace!("selection incomplete; chart left unchanged");
                self.emit_plugin_event(PluginEvent::ChartSkipped);
            }
        }
        Ok(())
    }

    /// Replaces the surface content with `spec`.
    ///
    /// On failure the surface is handed the current chart again.
    fn present(&mut self, spec: &ChartSpec) -> DashboardResult<()> {
        self.surface.dispose();
        let Err(err) = self.surface.render(spec) else {
            return Ok(());
        };
        warn!(error = %err, "chart surface failed to render; keeping previous chart");
        if let Some(previous) = &self.chart {
            if let Err(restore_err) = self.surface.render(previous) {
                warn!(error = %restore_err, "failed to restore previous chart");
            }
        }
        Err(err)
    }

    fn selection_changed(&mut self, field: SelectionField) {
        trace!(
            ?field,
            test = self.selection.test.as_deref(),
            style = self.selection.style.as_deref(),
            metric = %self.selection.metric,
            threading = %self.selection.threading,
            "selection changed"
        );
        self.emit_plugin_event(PluginEvent::SelectionChanged { field });
    }
}
