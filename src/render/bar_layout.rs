use std::sync::Arc;

use crate::core::{ChartSpec, Color, ValueFormat, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Pluggable per-bar value label formatter.
pub type ValueLabelFormatterFn = Arc<dyn Fn(f64, ValueFormat) -> String + Send + Sync + 'static>;

const VALUE_AXIS_TICKS: usize = 4;
const MAX_MARGIN_SHARE: f64 = 0.6;

/// Geometry and typography of the horizontal bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChartStyle {
    pub text_color: Color,
    pub grid_color: Color,
    pub title_font_px: f64,
    pub row_label_font_px: f64,
    pub value_font_px: f64,
    pub tick_font_px: f64,
    pub padding_left_px: f64,
    pub padding_right_px: f64,
    pub label_column_px: f64,
    pub title_height_px: f64,
    pub axis_height_px: f64,
    /// Fraction of each row left empty around its bar group.
    pub row_gap_ratio: f64,
    pub bar_border_width: f64,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            text_color: Color::rgb(1.0, 1.0, 1.0),
            grid_color: Color::rgba(1.0, 1.0, 1.0, 0.25),
            title_font_px: 18.0,
            row_label_font_px: 14.0,
            value_font_px: 11.0,
            tick_font_px: 12.0,
            padding_left_px: 10.0,
            padding_right_px: 60.0,
            label_column_px: 140.0,
            title_height_px: 36.0,
            axis_height_px: 24.0,
            row_gap_ratio: 0.2,
            bar_border_width: 1.0,
        }
    }
}

/// Lays out one horizontal bar group per chart row, one bar per size series.
///
/// Value labels come from `formatter` when given, otherwise from the chart's
/// own `ValueFormat`. Missing points produce no bar and no label. Any valid
/// viewport lays out; fixed margins shrink when they would not fit.
pub fn build_bar_chart_frame(
    spec: &ChartSpec,
    viewport: Viewport,
    style: &BarChartStyle,
    formatter: Option<&ValueLabelFormatterFn>,
) -> DashboardResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(DashboardError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    // Margins shrink together on small viewports so the plot area never collapses.
    let horizontal = margin_scale(
        style.padding_left_px + style.label_column_px + style.padding_right_px,
        width,
    );
    let vertical = margin_scale(style.title_height_px + style.axis_height_px, height);
    let plot_left = (style.padding_left_px + style.label_column_px) * horizontal;
    let plot_right = width - style.padding_right_px * horizontal;
    let title_height = style.title_height_px * vertical;
    let plot_top = title_height;
    let plot_bottom = height - style.axis_height_px * vertical;
    let plot_width = plot_right - plot_left;
    let plot_height = plot_bottom - plot_top;

    let mut frame = RenderFrame::new(viewport).with_text(TextPrimitive::new(
        spec.title.clone(),
        width / 2.0,
        title_height * 0.2,
        style.title_font_px,
        style.text_color,
        TextHAlign::Center,
    ));

    let value_max = spec
        .max_value()
        .filter(|max| *max > 0.0)
        .unwrap_or(1.0);
    let value_to_x = |value: f64| plot_left + (value.max(0.0) / value_max).min(1.0) * plot_width;

    for tick in 0..=VALUE_AXIS_TICKS {
        let value = value_max * tick as f64 / VALUE_AXIS_TICKS as f64;
        let x = value_to_x(value);
        frame = frame
            .with_line(LinePrimitive::new(
                x,
                plot_top,
                x,
                plot_bottom,
                1.0,
                style.grid_color,
            ))
            .with_text(TextPrimitive::new(
                spec.value_format.format_tick(round_tick(value)),
                x,
                plot_bottom + 4.0,
                style.tick_font_px,
                style.text_color,
                TextHAlign::Center,
            ));
    }

    let row_count = spec.row_count();
    if row_count == 0 {
        return Ok(frame);
    }

    let row_height = plot_height / row_count as f64;
    let group_height = row_height * (1.0 - style.row_gap_ratio);
    let bar_height = group_height / spec.series.len().max(1) as f64;

    for (row, label) in spec.labels.iter().enumerate() {
        let row_top = plot_top + row_height * row as f64;
        let group_top = row_top + (row_height - group_height) / 2.0;
        if !label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                plot_left - 8.0,
                row_top + row_height / 2.0 - style.row_label_font_px / 2.0,
                style.row_label_font_px,
                style.text_color,
                TextHAlign::Right,
            ));
        }

        let fill = spec.colors.get(row).copied().unwrap_or(style.grid_color);
        let border = spec.border_colors.get(row).copied().unwrap_or(fill);
        for (series_index, series) in spec.series.iter().enumerate() {
            let Some(value) = series.values.get(row).copied().flatten() else {
                continue;
            };
            if !value.is_finite() {
                continue;
            }
            let bar_top = group_top + bar_height * series_index as f64;
            let bar_right = value_to_x(value);
            frame.rects.push(
                RectPrimitive::new(plot_left, bar_top, bar_right - plot_left, bar_height, fill)
                    .with_border(style.bar_border_width, border),
            );

            let text = value_label_text(spec, value, formatter);
            if text.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                text,
                bar_right + 4.0,
                bar_top + bar_height / 2.0 - style.value_font_px / 2.0,
                style.value_font_px,
                style.text_color,
                TextHAlign::Left,
            ));
        }
    }

    Ok(frame)
}

pub(crate) fn value_label_text(
    spec: &ChartSpec,
    value: f64,
    formatter: Option<&ValueLabelFormatterFn>,
) -> String {
    match formatter {
        Some(formatter) => formatter(value, spec.value_format),
        None => spec.value_format.format_value(value),
    }
}

/// Factor applied to fixed margins so they take at most `MAX_MARGIN_SHARE`
/// of `available` pixels.
fn margin_scale(margins: f64, available: f64) -> f64 {
    let budget = available * MAX_MARGIN_SHARE;
    if margins > budget && margins > 0.0 {
        budget / margins
    } else {
        1.0
    }
}

fn round_tick(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
