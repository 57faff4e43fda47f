//! benchview: selection state and chart projection for 2D renderer
//! benchmark dashboards.
//!
//! The crate keeps the pure logic (`core`) apart from the session controller
//! (`api`) and the drawing seam (`render`), so every derivation and projection
//! rule can be exercised without a graphical environment.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig};
pub use error::{DashboardError, DashboardResult};
