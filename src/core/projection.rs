use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::color::Color;
use super::dataset::{LoadedDataset, Run};
use super::metric::Metric;
use super::palette::{renderer_border_color, renderer_color};
use super::run_profile::RunProfile;
use super::selection::Selection;
use super::value_format::ValueFormat;

/// Bars for one canvas size, aligned with `ChartSpec::labels`.
///
/// A `None` value marks a run whose `rcpms` is shorter than the size list,
/// or a `null` sample under the rate metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// Everything a rendering surface needs to draw one benchmark chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Run names, one bar group per entry.
    pub labels: Vec<String>,
    /// One series per entry of `options.sizes`.
    pub series: Vec<SizeSeries>,
    /// Fill color per run.
    pub colors: Vec<Color>,
    /// Border color per run.
    pub border_colors: Vec<Color>,
    pub title: String,
    pub value_format: ValueFormat,
}

impl ChartSpec {
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.value_format.metric
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest plotted value across all series, ignoring missing points.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().flatten())
            .filter(|value| value.is_finite())
            .map(|value| OrderedFloat(*value))
            .max()
            .map(OrderedFloat::into_inner)
    }
}

struct ProjectedRow<'a> {
    label: &'a str,
    renderer: &'a str,
    values: SmallVec<[Option<f64>; 8]>,
}

/// Projects the dataset onto the chart described by `selection`.
///
/// Returns `None` when test or style is unset, or when the dataset lacks
/// `runs` or `options.sizes`. Runs without a record for the selected
/// `(test, style)` are left out of the chart.
#[must_use]
pub fn project(dataset: &LoadedDataset, selection: &Selection) -> Option<ChartSpec> {
    let test = selection.test.as_deref()?;
    let style = selection.style.as_deref()?;
    let sizes = dataset.sizes()?;
    let runs: Vec<(&Run, &RunProfile)> = dataset.profiled_runs_for(selection.threading)?.collect();
    let metric = selection.metric;

    let rows = project_rows(&runs, test, style, metric);

    let series = sizes
        .iter()
        .enumerate()
        .map(|(size_index, size)| SizeSeries {
            label: size.clone(),
            values: rows
                .iter()
                .map(|row| row.values.get(size_index).copied().flatten())
                .collect(),
        })
        .collect();

    let spec = ChartSpec {
        labels: rows.iter().map(|row| row.label.to_owned()).collect(),
        series,
        colors: rows.iter().map(|row| renderer_color(row.renderer)).collect(),
        border_colors: rows
            .iter()
            .map(|row| renderer_border_color(row.renderer))
            .collect(),
        title: metric.title().to_owned(),
        value_format: ValueFormat::new(metric),
    };
    trace!(
        test,
        style,
        metric = %metric,
        threading = %selection.threading,
        rows = spec.row_count(),
        "projected chart"
    );
    Some(spec)
}

fn project_row<'a>(
    (run, profile): (&'a Run, &'a RunProfile),
    test: &str,
    style: &str,
    metric: Metric,
) -> Option<ProjectedRow<'a>> {
    let record = run.find_record(test, style)?;
    Some(ProjectedRow {
        label: &run.name,
        renderer: profile.renderer(),
        values: record
            .rcpms
            .iter()
            .map(|sample| metric.convert_sample(*sample))
            .collect(),
    })
}

#[cfg(not(feature = "parallel-projection"))]
fn project_rows<'a>(
    runs: &[(&'a Run, &'a RunProfile)],
    test: &str,
    style: &str,
    metric: Metric,
) -> Vec<ProjectedRow<'a>> {
    runs.iter()
        .filter_map(|entry| project_row(*entry, test, style, metric))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_rows<'a>(
    runs: &[(&'a Run, &'a RunProfile)],
    test: &str,
    style: &str,
    metric: Metric,
) -> Vec<ProjectedRow<'a>> {
    use rayon::prelude::*;

    runs.par_iter()
        .filter_map(|entry| project_row(*entry, test, style, metric))
        .collect()
}
