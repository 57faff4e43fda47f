use std::sync::Arc;

use approx::assert_relative_eq;
use benchview::DashboardError;
use benchview::core::{
    Dataset, LoadedDataset, Metric, Record, Run, Selection, ThreadingMode, ValueFormat, Viewport,
    project,
};
use benchview::render::{
    BarChartStyle, ChartSurface, NullSurface, TextHAlign, ValueLabelFormatterFn,
    build_bar_chart_frame,
};

fn chart(metric: Metric) -> benchview::core::ChartSpec {
    let dataset = LoadedDataset::new(Dataset::new(
        vec!["8x8".to_owned(), "256x256".to_owned()],
        vec![
            Run::new(
                "blend2d ST",
                vec![Record::new("FillRectA", "Solid", vec![2_000.0, 4.0])],
            ),
            Run::new(
                "cairo ST",
                vec![Record::new("FillRectA", "Solid", vec![500.0])],
            ),
        ],
    ));
    let selection = Selection::new(metric, ThreadingMode::Single)
        .with_test("FillRectA")
        .with_style("Solid");
    project(&dataset, &selection).expect("chart")
}

#[test]
fn bar_frame_contains_title_grid_rows_and_value_labels() {
    let spec = chart(Metric::Time);
    let frame = build_bar_chart_frame(
        &spec,
        Viewport::new(1000, 600),
        &BarChartStyle::default(),
        None,
    )
    .expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.lines.len(), 5);
    // cairo has no sample for the second size
    assert_eq!(frame.rects.len(), 3);

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts[0], "Time of 1000 render calls");
    assert!(texts.contains(&"blend2d ST"));
    assert!(texts.contains(&"cairo ST"));
    assert!(texts.contains(&"0.50 ms"));
    assert!(texts.contains(&"250 ms"));
    assert!(texts.contains(&"2.0 ms"));
    assert_eq!(frame.texts.len(), 1 + 5 + 2 + 3);

    let row_label = frame
        .texts
        .iter()
        .find(|text| text.text == "cairo ST")
        .expect("row label");
    assert_eq!(row_label.h_align, TextHAlign::Right);
}

#[test]
fn longest_bar_spans_the_plot_width() {
    let spec = chart(Metric::Time);
    let style = BarChartStyle::default();
    let frame = build_bar_chart_frame(&spec, Viewport::new(1000, 600), &style, None)
        .expect("frame");

    let plot_width = 1000.0 - style.padding_right_px - style.padding_left_px - style.label_column_px;
    let widest = frame
        .rects
        .iter()
        .map(|rect| rect.width)
        .fold(0.0, f64::max);
    assert_relative_eq!(widest, plot_width, epsilon = 1e-9);

    for rect in &frame.rects {
        assert_relative_eq!(rect.border_width, style.bar_border_width);
        assert_relative_eq!(rect.border_color.alpha, 1.0);
        assert_relative_eq!(rect.fill_color.alpha, 0.8);
    }
}

#[test]
fn custom_formatter_replaces_value_labels() {
    let spec = chart(Metric::Rate);
    let formatter: ValueLabelFormatterFn =
        Arc::new(|value: f64, format: ValueFormat| match format.metric {
            Metric::Rate => format!("{value:.0} calls/ms"),
            Metric::Time => String::new(),
        });
    let frame = build_bar_chart_frame(
        &spec,
        Viewport::new(1000, 600),
        &BarChartStyle::default(),
        Some(&formatter),
    )
    .expect("frame");

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts[0], "Render calls per 1ms");
    assert!(texts.contains(&"2000 calls/ms"));
    assert!(texts.contains(&"500 calls/ms"));
}

#[test]
fn empty_formatter_output_suppresses_labels() {
    let spec = chart(Metric::Time);
    let formatter: ValueLabelFormatterFn = Arc::new(|_: f64, _: ValueFormat| String::new());
    let mut surface = NullSurface::new(Viewport::new(1000, 600)).with_value_label_formatter(formatter);
    surface.render(&spec).expect("render");

    assert_eq!(surface.last_rect_count, 3);
    assert_eq!(surface.last_text_count, 1 + 5 + 2);
    assert!(surface.last_value_labels.is_empty());
}

#[test]
fn zero_sized_viewports_are_rejected() {
    let spec = chart(Metric::Time);
    let style = BarChartStyle::default();

    let err = build_bar_chart_frame(&spec, Viewport::new(0, 600), &style, None)
        .expect_err("zero width");
    assert!(matches!(err, DashboardError::InvalidViewport { .. }));
    let err = build_bar_chart_frame(&spec, Viewport::new(600, 0), &style, None)
        .expect_err("zero height");
    assert!(matches!(err, DashboardError::InvalidViewport { .. }));
}

#[test]
fn narrow_viewports_shrink_margins_instead_of_failing() {
    let spec = chart(Metric::Time);
    let style = BarChartStyle::default();

    for viewport in [
        Viewport::new(200, 600),
        Viewport::new(120, 40),
        Viewport::new(1, 1),
    ] {
        let frame = build_bar_chart_frame(&spec, viewport, &style, None).expect("frame");
        frame.validate().expect("valid frame");
        assert_eq!(frame.rects.len(), 3);

        let width = f64::from(viewport.width);
        let widest = frame.rects.iter().map(|rect| rect.width).fold(0.0, f64::max);
        assert!(widest > 0.0);
        assert_relative_eq!(widest, width * 0.4, epsilon = 1e-9);
    }
}

#[test]
fn null_surface_tracks_dispose_and_resize() {
    let spec = chart(Metric::Time);
    let mut surface = NullSurface::new(Viewport::new(1000, 600));

    surface.dispose();
    assert_eq!(surface.dispose_count, 0);

    surface.render(&spec).expect("render");
    surface.resize(Viewport::new(800, 500)).expect("resize");
    assert_eq!(surface.viewport, Viewport::new(800, 500));
    assert_eq!(surface.chart(), Some(&spec));

    surface.dispose();
    assert_eq!(surface.dispose_count, 1);
    assert!(surface.chart().is_none());
    assert_eq!(surface.render_count, 1);
}
