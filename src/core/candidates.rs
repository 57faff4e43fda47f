use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::catalog::{STYLE_ORDER, TEST_ORDER, order_by_catalog};
use super::dataset::LoadedDataset;
use super::threading::ThreadingMode;

/// Selectable tests and styles under one threading filter, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidatePools {
    pub tests: Vec<String>,
    pub styles: Vec<String>,
}

impl CandidatePools {
    #[must_use]
    pub fn contains_test(&self, test: &str) -> bool {
        self.tests.iter().any(|candidate| candidate == test)
    }

    #[must_use]
    pub fn contains_style(&self, style: &str) -> bool {
        self.styles.iter().any(|candidate| candidate == style)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.styles.is_empty()
    }
}

/// Collects the distinct tests and styles of runs admitted by `mode`.
///
/// Catalog entries come first in catalog order; names the catalog does not
/// know follow in encounter order. A dataset without `runs` yields empty pools.
#[must_use]
pub fn derive_candidates(dataset: &LoadedDataset, mode: ThreadingMode) -> CandidatePools {
    let Some(runs) = dataset.runs_for(mode) else {
        return CandidatePools::default();
    };

    let mut tests = IndexSet::new();
    let mut styles = IndexSet::new();
    for run in runs {
        for record in &run.records {
            tests.insert(record.test.as_str());
            styles.insert(record.style.as_str());
        }
    }

    CandidatePools {
        tests: order_by_catalog(&tests, &TEST_ORDER),
        styles: order_by_catalog(&styles, &STYLE_ORDER),
    }
}
