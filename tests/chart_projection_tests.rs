use approx::assert_relative_eq;
use benchview::core::{
    Dataset, LoadedDataset, Metric, Record, Run, Selection, ThreadingMode, fallback_color,
    project, renderer_border_color, renderer_color,
};

fn two_renderer_dataset() -> LoadedDataset {
    LoadedDataset::new(Dataset::new(
        vec!["128".to_owned(), "256".to_owned()],
        vec![
            Run::new(
                "blend2d ST",
                vec![Record::new("FillRectA", "Solid", vec![100.0, 50.0])],
            ),
            Run::new(
                "cairo ST",
                vec![Record::new("FillRectA", "Solid", vec![20.0, 10.0])],
            ),
        ],
    ))
}

fn fill_rect_solid() -> Selection {
    Selection::default().with_test("FillRectA").with_style("Solid")
}

#[test]
fn time_metric_end_to_end() {
    let spec = project(&two_renderer_dataset(), &fill_rect_solid()).expect("chart");

    assert_eq!(spec.labels, vec!["blend2d ST", "cairo ST"]);
    assert_eq!(spec.series.len(), 2);
    assert_eq!(spec.series[0].label, "128");
    assert_eq!(spec.series[0].values, vec![Some(10.0), Some(50.0)]);
    assert_eq!(spec.series[1].label, "256");
    assert_eq!(spec.series[1].values, vec![Some(20.0), Some(100.0)]);
    assert_eq!(
        spec.colors,
        vec![renderer_color("blend2d"), renderer_color("cairo")]
    );
    assert_eq!(
        spec.border_colors,
        vec![renderer_border_color("blend2d"), renderer_border_color("cairo")]
    );
    assert_eq!(spec.metric(), Metric::Time);
    assert_eq!(spec.title, "Time of 1000 render calls");
}

#[test]
fn rate_metric_passes_values_through() {
    let selection = fill_rect_solid().with_metric(Metric::Rate);
    let spec = project(&two_renderer_dataset(), &selection).expect("chart");

    assert_eq!(spec.series[0].values, vec![Some(100.0), Some(20.0)]);
    assert_eq!(spec.series[1].values, vec![Some(50.0), Some(10.0)]);
    assert_eq!(spec.title, "Render calls per 1ms");
}

#[test]
fn zero_throughput_maps_to_zero_time() {
    let dataset = LoadedDataset::new(Dataset::new(
        vec!["64".to_owned(), "128".to_owned()],
        vec![Run::new(
            "skia ST",
            vec![Record::new("FillRectA", "Solid", vec![0.0, 3.0])],
        )],
    ));
    let spec = project(&dataset, &fill_rect_solid()).expect("chart");

    assert_eq!(spec.series[0].values, vec![Some(0.0)]);
    let value = spec.series[1].values[0].expect("value");
    assert_relative_eq!(value, 1000.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn runs_without_matching_record_are_omitted() {
    let dataset = LoadedDataset::new(Dataset::new(
        vec!["128".to_owned()],
        vec![
            Run::new("agg ST", vec![Record::new("FillRectU", "Solid", vec![5.0])]),
            Run::new("juce ST", vec![Record::new("FillRectA", "Solid", vec![5.0])]),
        ],
    ));
    let spec = project(&dataset, &fill_rect_solid()).expect("chart");
    assert_eq!(spec.labels, vec!["juce ST"]);
}

#[test]
fn short_rcpms_leaves_missing_points() {
    let dataset = LoadedDataset::new(Dataset::new(
        vec!["8".to_owned(), "16".to_owned(), "32".to_owned()],
        vec![Run::new(
            "blend2d ST",
            vec![Record::new("FillRectA", "Solid", vec![10.0])],
        )],
    ));
    let spec = project(&dataset, &fill_rect_solid().with_metric(Metric::Rate)).expect("chart");

    assert_eq!(spec.series[0].values, vec![Some(10.0)]);
    assert_eq!(spec.series[1].values, vec![None]);
    assert_eq!(spec.series[2].values, vec![None]);
}

#[test]
fn null_samples_plot_as_zero_time_or_missing_rate() {
    let dataset = LoadedDataset::new(
        Dataset::from_json_str(
            r#"{
                "options": {"sizes": ["8", "16"]},
                "runs": [{"name": "agg ST", "records": [
                    {"test": "FillRectA", "style": "Solid", "rcpms": [null, 4]}
                ]}]
            }"#,
        )
        .expect("dataset with null sample"),
    );

    let time = project(&dataset, &fill_rect_solid()).expect("chart");
    assert_eq!(time.series[0].values, vec![Some(0.0)]);
    assert_eq!(time.series[1].values, vec![Some(250.0)]);

    let rate = project(&dataset, &fill_rect_solid().with_metric(Metric::Rate)).expect("chart");
    assert_eq!(rate.series[0].values, vec![None]);
    assert_eq!(rate.series[1].values, vec![Some(4.0)]);
}

#[test]
fn colors_depend_only_on_renderer_identity() {
    let dataset = LoadedDataset::new(Dataset::new(
        vec!["128".to_owned()],
        vec![
            Run::new("Blend2D ST", vec![Record::new("FillRectA", "Solid", vec![1.0])]),
            Run::new("blend2d 4T", vec![Record::new("FillRectA", "Solid", vec![1.0])]),
            Run::new(
                "unknownengine 2T",
                vec![Record::new("FillRectA", "Solid", vec![1.0])],
            ),
        ],
    ));
    let spec = project(
        &dataset,
        &fill_rect_solid().with_threading(ThreadingMode::Multi),
    )
    .expect("chart");

    assert_eq!(spec.labels.len(), 3);
    assert_eq!(spec.colors[0], spec.colors[1]);
    assert_eq!(spec.colors[0], renderer_color("blend2d"));
    assert_eq!(spec.colors[2], fallback_color());
}

#[test]
fn projection_is_skipped_without_full_selection() {
    let dataset = two_renderer_dataset();
    assert!(project(&dataset, &Selection::default()).is_none());
    assert!(project(&dataset, &Selection::default().with_test("FillRectA")).is_none());
    assert!(project(&dataset, &Selection::default().with_style("Solid")).is_none());
}

#[test]
fn projection_is_skipped_for_malformed_dataset() {
    let mut dataset = Dataset::new(Vec::new(), Vec::new());
    dataset.options = None;
    assert!(project(&LoadedDataset::new(dataset), &fill_rect_solid()).is_none());

    let mut dataset = Dataset::new(vec!["128".to_owned()], Vec::new());
    dataset.runs = None;
    assert!(project(&LoadedDataset::new(dataset), &fill_rect_solid()).is_none());
}

#[test]
fn max_value_ignores_missing_points() {
    let dataset = LoadedDataset::new(Dataset::new(
        vec!["8".to_owned(), "16".to_owned()],
        vec![
            Run::new("agg ST", vec![Record::new("FillRectA", "Solid", vec![4.0])]),
            Run::new("skia ST", vec![Record::new("FillRectA", "Solid", vec![2.0, 8.0])]),
        ],
    ));
    let spec = project(&dataset, &fill_rect_solid().with_metric(Metric::Rate)).expect("chart");
    assert_eq!(spec.max_value(), Some(8.0));
}
