mod bar_layout;
mod frame;
mod null_surface;
mod primitives;

pub use bar_layout::{BarChartStyle, ValueLabelFormatterFn, build_bar_chart_frame};
pub use frame::RenderFrame;
pub use null_surface::NullSurface;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::core::{ChartSpec, Viewport};
use crate::error::DashboardResult;

/// Contract implemented by anything that can display a projected chart.
///
/// The dashboard calls `dispose` before every `render`, so a surface only
/// ever shows one chart. `resize` adapts the current chart in place.
pub trait ChartSurface {
    fn dispose(&mut self);
    fn render(&mut self, spec: &ChartSpec) -> DashboardResult<()>;
    fn resize(&mut self, viewport: Viewport) -> DashboardResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
