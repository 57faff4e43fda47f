//! Renderer-free dashboard logic: dataset model, candidate derivation and
//! chart projection.

pub mod candidates;
pub mod catalog;
pub mod color;
pub mod dataset;
pub mod metric;
pub mod palette;
pub mod projection;
pub mod run_profile;
pub mod selection;
pub mod threading;
pub mod types;
pub mod value_format;

pub use candidates::{CandidatePools, derive_candidates};
pub use catalog::{STYLE_ORDER, TEST_ORDER};
pub use color::Color;
pub use dataset::{CpuInfo, Dataset, DatasetOptions, LoadedDataset, Record, Run, UNKNOWN_CPU_LABEL};
pub use metric::Metric;
pub use palette::{fallback_color, renderer_border_color, renderer_color};
pub use projection::{ChartSpec, SizeSeries, project};
pub use run_profile::{RunProfile, ThreadingMarker, renderer_identity};
pub use selection::{Selection, SelectionField};
pub use threading::ThreadingMode;
pub use types::Viewport;
pub use value_format::ValueFormat;
