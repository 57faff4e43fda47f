use serde::{Deserialize, Serialize};

use super::candidates::CandidatePools;
use super::metric::Metric;
use super::threading::ThreadingMode;

/// Which selection field changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionField {
    Test,
    Style,
    Metric,
    Threading,
}

/// Current filter selection of a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub test: Option<String>,
    pub style: Option<String>,
    pub metric: Metric,
    pub threading: ThreadingMode,
}

impl Selection {
    #[must_use]
    pub fn new(metric: Metric, threading: ThreadingMode) -> Self {
        Self {
            test: None,
            style: None,
            metric,
            threading,
        }
    }

    #[must_use]
    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = Some(test.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_threading(mut self, threading: ThreadingMode) -> Self {
        self.threading = threading;
        self
    }

    /// Keeps test/style when still offered by `pools`, otherwise falls back
    /// to the first candidate (or `None` for an empty pool).
    ///
    /// Returns the fields whose value changed.
    pub fn reconcile(&mut self, pools: &CandidatePools) -> Vec<SelectionField> {
        let mut changed = Vec::new();
        let test = reconcile_field(self.test.as_deref(), &pools.tests);
        if test != self.test {
            self.test = test;
            changed.push(SelectionField::Test);
        }
        let style = reconcile_field(self.style.as_deref(), &pools.styles);
        if style != self.style {
            self.style = style;
            changed.push(SelectionField::Style);
        }
        changed
    }
}

fn reconcile_field(current: Option<&str>, pool: &[String]) -> Option<String> {
    match current {
        Some(value) if pool.iter().any(|candidate| candidate == value) => Some(value.to_owned()),
        _ => pool.first().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pools(tests: &[&str], styles: &[&str]) -> CandidatePools {
        CandidatePools {
            tests: tests.iter().map(|s| (*s).to_owned()).collect(),
            styles: styles.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn default_selection_matches_initial_session_state() {
        let selection = Selection::default();
        assert_eq!(selection.metric, Metric::Time);
        assert_eq!(selection.threading, ThreadingMode::Single);
        assert!(selection.test.is_none());
        assert!(selection.style.is_none());
    }

    #[test]
    fn reconcile_keeps_valid_and_replaces_stale_values() {
        let mut selection = Selection::default()
            .with_test("FillRectA")
            .with_style("Radial");
        let changed = selection.reconcile(&pools(&["FillRectU", "FillRectA"], &["Solid"]));
        assert_eq!(selection.test.as_deref(), Some("FillRectA"));
        assert_eq!(selection.style.as_deref(), Some("Solid"));
        assert_eq!(changed, vec![SelectionField::Style]);
    }

    #[test]
    fn reconcile_clears_on_empty_pool() {
        let mut selection = Selection::default().with_test("FillRectA").with_style("Solid");
        let changed = selection.reconcile(&CandidatePools::default());
        assert!(selection.test.is_none());
        assert!(selection.style.is_none());
        assert_eq!(changed, vec![SelectionField::Test, SelectionField::Style]);
    }
}
