use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::run_profile::RunProfile;
use super::threading::ThreadingMode;

pub const UNKNOWN_CPU_LABEL: &str = "Unknown CPU";

/// Hardware description attached to a benchmark dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetOptions {
    /// Canvas size labels; every chart has one series per entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

/// One (test, style) measurement inside a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub test: String,
    pub style: String,
    /// Render calls per millisecond, index-aligned with `options.sizes`.
    /// `null` samples are kept as `None`.
    #[serde(default)]
    pub rcpms: Vec<Option<f64>>,
}

impl Record {
    #[must_use]
    pub fn new(test: impl Into<String>, style: impl Into<String>, rcpms: Vec<f64>) -> Self {
        Self::with_samples(test, style, rcpms.into_iter().map(Some).collect())
    }

    /// Builds a record whose samples may be missing.
    #[must_use]
    pub fn with_samples(
        test: impl Into<String>,
        style: impl Into<String>,
        rcpms: Vec<Option<f64>>,
    ) -> Self {
        Self {
            test: test.into(),
            style: style.into(),
            rcpms,
        }
    }
}

/// One benchmark execution series for a renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub name: String,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Run {
    #[must_use]
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// First record matching `(test, style)`.
    #[must_use]
    pub fn find_record(&self, test: &str, style: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.test == test && record.style == style)
    }
}

/// Benchmark dataset as produced by the external benchmark tooling.
///
/// Every top-level section is optional so that partially generated files
/// still load; consumers treat absent sections as "nothing to show".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<DatasetOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Run>>,
}

impl Dataset {
    #[must_use]
    pub fn new(sizes: Vec<String>, runs: Vec<Run>) -> Self {
        Self {
            cpu: None,
            updated: None,
            options: Some(DatasetOptions { sizes: Some(sizes) }),
            runs: Some(runs),
        }
    }

    #[must_use]
    pub fn with_cpu_brand(mut self, brand: impl Into<String>) -> Self {
        self.cpu = Some(CpuInfo {
            brand: Some(brand.into()),
        });
        self
    }

    #[must_use]
    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DashboardError::MalformedDataset(format!("failed to parse dataset json: {e}"))
        })
    }

    /// Parses the `data.js` form: `const NAME = { ... };`.
    pub fn from_script_str(input: &str) -> DashboardResult<Self> {
        let body = strip_script_assignment(input).ok_or_else(|| {
            DashboardError::MalformedDataset(
                "dataset script must assign an object literal".to_owned(),
            )
        })?;
        Self::from_json_str(body)
    }

    /// Accepts raw JSON first, then the script wrapper.
    pub fn from_source_str(input: &str) -> DashboardResult<Self> {
        match Self::from_json_str(input) {
            Ok(dataset) => Ok(dataset),
            Err(json_err) => Self::from_script_str(input).map_err(|_| json_err),
        }
    }

    #[must_use]
    pub fn sizes(&self) -> Option<&[String]> {
        self.options.as_ref()?.sizes.as_deref()
    }

    #[must_use]
    pub fn runs(&self) -> Option<&[Run]> {
        self.runs.as_deref()
    }

    #[must_use]
    pub fn cpu_brand(&self) -> Option<&str> {
        self.cpu
            .as_ref()?
            .brand
            .as_deref()
            .filter(|brand| !brand.is_empty())
    }
}

fn strip_script_assignment(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    let (head, rest) = trimmed.split_once('=')?;
    if head.contains('{') {
        return None;
    }
    let rest = rest.trim();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    if rest.starts_with('{') && rest.ends_with('}') {
        Some(rest)
    } else {
        None
    }
}

/// Dataset accepted for a session, with run profiles parsed once.
///
/// The dataset is never mutated after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    dataset: Dataset,
    profiles: Vec<RunProfile>,
}

impl LoadedDataset {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let profiles = dataset
            .runs()
            .unwrap_or_default()
            .iter()
            .map(|run| RunProfile::parse(&run.name))
            .collect();
        Self { dataset, profiles }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn sizes(&self) -> Option<&[String]> {
        self.dataset.sizes()
    }

    #[must_use]
    pub fn profiles(&self) -> &[RunProfile] {
        &self.profiles
    }

    /// Processor label shown in place of the dataset picker.
    #[must_use]
    pub fn processor_label(&self) -> &str {
        self.dataset.cpu_brand().unwrap_or(UNKNOWN_CPU_LABEL)
    }

    #[must_use]
    pub fn updated(&self) -> Option<&str> {
        self.dataset.updated.as_deref()
    }

    /// Parsed form of `updated`, when it is RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.updated()?.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Runs admitted by `mode` with their profiles, in dataset order.
    ///
    /// Candidate derivation and chart projection both go through this
    /// iterator, so they always see the same runs.
    pub fn profiled_runs_for(
        &self,
        mode: ThreadingMode,
    ) -> Option<impl Iterator<Item = (&Run, &RunProfile)> + '_> {
        let runs = self.dataset.runs()?;
        Some(
            runs.iter()
                .zip(self.profiles.iter())
                .filter(move |(_, profile)| mode.admits(profile)),
        )
    }

    /// Runs admitted by `mode`, in dataset order.
    pub fn runs_for(&self, mode: ThreadingMode) -> Option<impl Iterator<Item = &Run> + '_> {
        Some(self.profiled_runs_for(mode)?.map(|(run, _)| run))
    }
}

impl From<Dataset> for LoadedDataset {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}
