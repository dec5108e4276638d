use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-load bookkeeping: every raw row is classified as accepted or dropped
/// exactly once, so `accepted + dropped == total_raw` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStatistics {
    /// Data rows read from the source, before any filtering.
    pub total_raw: usize,
    pub accepted: usize,
    pub dropped: usize,
    /// Label-code breakdown of the accepted set.
    pub class_distribution: BTreeMap<i64, usize>,
}
