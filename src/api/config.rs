use serde::{Deserialize, Serialize};

use crate::core::{Metric, ThreadingMode, UNKNOWN_CPU_LABEL, Viewport};
use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;
pub const MISSING_DATA_LABEL: &str = "No default data";

/// Startup configuration of a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    pub initial_metric: Metric,
    pub initial_threading: ThreadingMode,
    /// Quiet window before a coalesced resize request is applied.
    pub resize_debounce_ms: u64,
    /// Processor label used when the dataset carries no CPU brand.
    pub unknown_cpu_label: String,
    /// Status label shown after a failed dataset load.
    pub missing_data_label: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            initial_metric: Metric::Time,
            initial_threading: ThreadingMode::Single,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            unknown_cpu_label: UNKNOWN_CPU_LABEL.to_owned(),
            missing_data_label: MISSING_DATA_LABEL.to_owned(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_metric(mut self, metric: Metric) -> Self {
        self.initial_metric = metric;
        self
    }

    #[must_use]
    pub fn with_initial_threading(mut self, threading: ThreadingMode) -> Self {
        self.initial_threading = threading;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_unknown_cpu_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_cpu_label = label.into();
        self
    }

    #[must_use]
    pub fn with_missing_data_label(mut self, label: impl Into<String>) -> Self {
        self.missing_data_label = label.into();
        self
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }
}
