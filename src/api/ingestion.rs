use tracing::warn;

use crate::core::{Dataset, LoadedDataset};
use crate::error::{DashboardError, DashboardResult};
use crate::extensions::PluginEvent;
use crate::render::ChartSurface;

use super::Dashboard;

impl<S: ChartSurface> Dashboard<S> {
    /// Accepts the session dataset, or reports its absence.
    ///
    /// On success the candidate pools are re-derived, the selection is
    /// reconciled against them and the initial chart is rendered. A missing
    /// dataset is reported through `display_label` and plugins; the previous
    /// dataset, selection and chart stay in place. They also stay in place
    /// when the surface cannot render the new chart.
    pub fn load(&mut self, dataset: Option<Dataset>) -> DashboardResult<()> {
        let Some(dataset) = dataset else {
            return Err(self.report_load_failure(DashboardError::MissingDataset));
        };

        let selection = self.selection.clone();
        self.apply_update(Some(LoadedDataset::new(dataset)), selection, None, true)
    }

    /// Parses `source` as dataset JSON or as a `data.js` script and loads it.
    pub fn load_source_str(&mut self, source: &str) -> DashboardResult<()> {
        match Dataset::from_source_str(source) {
            Ok(dataset) => self.load(Some(dataset)),
            Err(err) => Err(self.report_load_failure(err)),
        }
    }

    fn report_load_failure(&mut self, err: DashboardError) -> DashboardError {
        warn!(error = %err, "dataset load failed; keeping previous state");
        self.load_failure = Some(self.config.missing_data_label.clone());
        self.emit_plugin_event(PluginEvent::LoadFailed);
        err
    }
}
