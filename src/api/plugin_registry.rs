use crate::error::{DashboardError, DashboardResult};
use crate::extensions::{DashboardPlugin, PluginContext, PluginEvent};
use crate::render::ChartSurface;

use super::Dashboard;

impl<S: ChartSurface> Dashboard<S> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn DashboardPlugin>) -> DashboardResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(DashboardError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(DashboardError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    #[must_use]
    pub fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            has_dataset: self.dataset.is_some(),
            metric: self.selection.metric,
            threading: self.selection.threading,
            test_candidates: self.candidates.tests.len(),
            style_candidates: self.candidates.styles.len(),
            chart_rows: self.chart.as_ref().map_or(0, |chart| chart.row_count()),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
