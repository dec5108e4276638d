use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated view of one prediction batch.
///
/// `reputation_index` is `(positive - negative) / total`, rounded to three
/// decimals; exactly `0.0` for an empty batch. Always within `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_messages: usize,
    /// Predicted-label counts keyed by class name. Only names that actually
    /// occur in the batch appear.
    pub distribution: BTreeMap<String, usize>,
    pub reputation_index: f64,
}
