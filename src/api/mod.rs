mod config;
mod dashboard;
mod ingestion;
mod plugin_registry;
mod resize;
mod selection_controller;
mod snapshot;

pub use config::{DEFAULT_RESIZE_DEBOUNCE_MS, DashboardConfig, MISSING_DATA_LABEL};
pub use dashboard::Dashboard;
pub use resize::ResizeCoalescer;
pub use snapshot::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshot, DashboardSnapshotJsonContractV1,
};
