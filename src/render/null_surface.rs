use crate::core::{ChartSpec, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::render::bar_layout::value_label_text;
use crate::render::{BarChartStyle, ChartSurface, ValueLabelFormatterFn, build_bar_chart_frame};

/// Headless surface used by tests and non-graphical hosts.
///
/// It still lays out and validates every frame so invalid geometry is caught
/// without a real backend, and keeps counters for assertions.
#[derive(Default)]
pub struct NullSurface {
    pub viewport: Viewport,
    pub style: BarChartStyle,
    pub render_count: usize,
    pub dispose_count: usize,
    pub resize_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_value_labels: Vec<String>,
    chart: Option<ChartSpec>,
    formatter: Option<ValueLabelFormatterFn>,
}

impl NullSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_label_formatter(mut self, formatter: ValueLabelFormatterFn) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Chart currently shown, `None` after `dispose` or before the first render.
    #[must_use]
    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.as_ref()
    }
}

impl ChartSurface for NullSurface {
    fn dispose(&mut self) {
        if self.chart.take().is_some() {
            self.dispose_count += 1;
        }
    }

    fn render(&mut self, spec: &ChartSpec) -> DashboardResult<()> {
        let frame =
            build_bar_chart_frame(spec, self.viewport, &self.style, self.formatter.as_ref())?;
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_value_labels = value_labels(spec, self.formatter.as_ref());
        self.chart = Some(spec.clone());
        self.render_count += 1;
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> DashboardResult<()> {
        match &self.chart {
            Some(spec) => {
                build_bar_chart_frame(spec, viewport, &self.style, self.formatter.as_ref())?
                    .validate()?;
            }
            None if !viewport.is_valid() => {
                return Err(DashboardError::InvalidViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
            None => {}
        }
        self.viewport = viewport;
        self.resize_count += 1;
        Ok(())
    }
}

/// Value labels in draw order: row by row, one per size series.
fn value_labels(spec: &ChartSpec, formatter: Option<&ValueLabelFormatterFn>) -> Vec<String> {
    (0..spec.row_count())
        .flat_map(|row| {
            spec.series
                .iter()
                .filter_map(move |series| series.values.get(row).copied().flatten())
        })
        .filter(|value| value.is_finite())
        .map(|value| value_label_text(spec, value, formatter))
        .filter(|text| !text.is_empty())
        .collect()
}
