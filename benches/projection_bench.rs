use benchview::core::{
    Dataset, LoadedDataset, Metric, Record, Run, Selection, TEST_ORDER, ThreadingMode, Viewport,
    derive_candidates, project,
};
use benchview::render::{BarChartStyle, build_bar_chart_frame};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const RENDERERS: [&str; 7] = [
    "blend2d", "agg", "cairo", "skia", "vello-cpu", "tiny-skia", "juce",
];
const STYLES: [&str; 5] = ["Solid", "Linear", "Radial", "Conic", "Pattern"];

fn generated_dataset() -> LoadedDataset {
    let sizes: Vec<String> = [8, 16, 32, 64, 128, 256]
        .iter()
        .map(|size| format!("{size}x{size}"))
        .collect();
    let runs = RENDERERS
        .iter()
        .flat_map(|renderer| {
            ["ST", "2T", "4T", "8T"]
                .iter()
                .map(move |threads| format!("{renderer} {threads}"))
        })
        .enumerate()
        .map(|(run_index, name)| {
            let records = TEST_ORDER
                .iter()
                .flat_map(|test| STYLES.iter().map(move |style| (*test, *style)))
                .enumerate()
                .map(|(cell, (test, style))| {
                    let base = 1.0 + ((run_index * 31 + cell * 7) % 997) as f64;
                    Record::new(test, style, (0..6).map(|i| base * (i + 1) as f64).collect())
                })
                .collect();
            Run::new(name, records)
        })
        .collect();
    LoadedDataset::new(Dataset::new(sizes, runs))
}

fn bench_derive_candidates(c: &mut Criterion) {
    let dataset = generated_dataset();

    c.bench_function("derive_candidates_multi", |b| {
        b.iter(|| {
            let _ = derive_candidates(black_box(&dataset), black_box(ThreadingMode::Multi));
        })
    });
}

fn bench_project_chart(c: &mut Criterion) {
    let dataset = generated_dataset();
    let selection = Selection::new(Metric::Time, ThreadingMode::Multi)
        .with_test("FillPolyNZi40")
        .with_style("Radial");

    c.bench_function("project_chart_multi_time", |b| {
        b.iter(|| {
            let _ = project(black_box(&dataset), black_box(&selection)).expect("chart");
        })
    });
}

fn bench_bar_frame_layout(c: &mut Criterion) {
    let dataset = generated_dataset();
    let selection = Selection::new(Metric::Rate, ThreadingMode::Multi)
        .with_test("FillRectA")
        .with_style("Solid");
    let spec = project(&dataset, &selection).expect("chart");
    let style = BarChartStyle::default();

    c.bench_function("bar_frame_layout_28_rows", |b| {
        b.iter(|| {
            let _ = build_bar_chart_frame(
                black_box(&spec),
                Viewport::new(1920, 1080),
                &style,
                None,
            )
            .expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_derive_candidates,
    bench_project_chart,
    bench_bar_frame_layout
);
criterion_main!(benches);
