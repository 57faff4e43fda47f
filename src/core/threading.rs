use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

use super::run_profile::RunProfile;

/// Coarse run filter: single-threaded versus any threading designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadingMode {
    #[default]
    Single,
    Multi,
}

impl ThreadingMode {
    pub const ALL: [Self; 2] = [Self::Single, Self::Multi];

    /// Whether a run with `profile` is visible under this mode.
    ///
    /// Runs without any threading marker count as single-threaded.
    #[must_use]
    pub fn admits(self, profile: &RunProfile) -> bool {
        match self {
            Self::Single => profile.is_single_threaded_candidate(),
            Self::Multi => profile.is_multi_threaded_candidate(),
        }
    }

    /// Caption of the selection button for this mode.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Single => "Single-Threaded",
            Self::Multi => "Multi-Threaded",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for ThreadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreadingMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "st" => Ok(Self::Single),
            "multi" | "mt" => Ok(Self::Multi),
            other => Err(DashboardError::InvalidData(format!(
                "unknown threading mode `{other}` (expected `single` or `multi`)"
            ))),
        }
    }
}
