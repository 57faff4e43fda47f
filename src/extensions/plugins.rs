use serde::{Deserialize, Serialize};

use crate::core::{Metric, SelectionField, ThreadingMode, Viewport};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub has_dataset: bool,
    pub metric: Metric,
    pub threading: ThreadingMode,
    pub test_candidates: usize,
    pub style_candidates: usize,
    pub chart_rows: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    DatasetLoaded { runs_len: usize },
    LoadFailed,
    CandidatesUpdated { tests_len: usize, styles_len: usize },
    SelectionChanged { field: SelectionField },
    ChartRendered { rows: usize, series: usize },
    ChartSkipped,
    Resized { width: u32, height: u32 },
}

/// Observer hook for selection UIs and other adapters.
///
/// Plugins see every state transition in order and can read the session
/// context, but cannot mutate the dashboard.
pub trait DashboardPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
