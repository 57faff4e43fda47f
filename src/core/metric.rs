use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Quantity plotted on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Milliseconds needed for 1000 render calls.
    #[default]
    Time,
    /// Raw render calls per millisecond.
    Rate,
}

impl Metric {
    pub const ALL: [Self; 2] = [Self::Time, Self::Rate];

    /// Converts one `rcpms` sample into the plotted value.
    ///
    /// Zero (or negative) throughput maps to zero time.
    #[must_use]
    pub fn convert(self, rcpms: f64) -> f64 {
        match self {
            Self::Time => {
                if rcpms > 0.0 {
                    1000.0 / rcpms
                } else {
                    0.0
                }
            }
            Self::Rate => rcpms,
        }
    }

    /// Converts a possibly missing sample.
    ///
    /// A missing sample counts as zero throughput under time, so it plots as
    /// zero; under rate it stays a missing point.
    #[must_use]
    pub fn convert_sample(self, rcpms: Option<f64>) -> Option<f64> {
        match (self, rcpms) {
            (Self::Time, sample) => Some(self.convert(sample.unwrap_or(0.0))),
            (Self::Rate, sample) => sample,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Time => "Time of 1000 render calls",
            Self::Rate => "Render calls per 1ms",
        }
    }

    /// Suffix appended to value and tick labels.
    #[must_use]
    pub const fn unit_suffix(self) -> Option<&'static str> {
        match self {
            Self::Time => Some(" ms"),
            Self::Rate => None,
        }
    }

    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Rate => "Render Calls",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Rate => "rate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "rate" | "rcpms" => Ok(Self::Rate),
            other => Err(DashboardError::InvalidData(format!(
                "unknown metric `{other}` (expected `time` or `rate`)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_conversion_handles_zero_throughput() {
        assert_eq!(Metric::Time.convert(50.0), 20.0);
        assert_eq!(Metric::Time.convert(0.0), 0.0);
        assert_eq!(Metric::Rate.convert(0.0), 0.0);
        assert_eq!(Metric::Rate.convert(50.0), 50.0);
    }

    #[test]
    fn missing_samples_follow_metric() {
        assert_eq!(Metric::Time.convert_sample(None), Some(0.0));
        assert_eq!(Metric::Time.convert_sample(Some(4.0)), Some(250.0));
        assert_eq!(Metric::Rate.convert_sample(None), None);
        assert_eq!(Metric::Rate.convert_sample(Some(4.0)), Some(4.0));
    }

    #[test]
    fn parses_metric_aliases() {
        assert_eq!("rcpms".parse::<Metric>().expect("metric"), Metric::Rate);
        assert_eq!(" Time ".parse::<Metric>().expect("metric"), Metric::Time);
        assert!("speed".parse::<Metric>().is_err());
    }
}
