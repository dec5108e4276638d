//! Aggregation of predicted labels into a [`Report`].
//!
//! Predictions are paired with records positionally; the caller keeps the
//! prediction array in the same order as the record collection it was
//! derived from. Unlike the loader's filter stage, nothing here is dropped
//! silently: an unknown prediction code fails the whole call.

use std::collections::BTreeMap;

use thiserror::Error;

use senti_model::{LabelVocabulary, NEGATIVE_LABEL, POSITIVE_LABEL, Report, ValidatedRecord};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("length mismatch: {predictions} prediction(s) for {records} record(s)")]
    LengthMismatch { predictions: usize, records: usize },

    #[error("prediction code {0} has no name in the active vocabulary")]
    UnknownLabel(i64),
}

/// Build a report from one prediction batch.
///
/// The vocabulary must be the one the records were loaded with; it defines
/// both the code-to-name mapping and which classes exist.
pub fn build_report(
    predictions: &[i64],
    records: &[ValidatedRecord],
    vocabulary: &LabelVocabulary,
) -> Result<Report, ReportError> {
    if predictions.len() != records.len() {
        return Err(ReportError::LengthMismatch {
            predictions: predictions.len(),
            records: records.len(),
        });
    }

    let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
    for &code in predictions {
        let name = vocabulary
            .name_for(code)
            .ok_or(ReportError::UnknownLabel(code))?;
        *distribution.entry(name.to_string()).or_default() += 1;
    }

    let total_messages = predictions.len();
    let reputation_index = if total_messages > 0 {
        let positive = distribution.get(POSITIVE_LABEL).copied().unwrap_or(0) as i64;
        let negative = distribution.get(NEGATIVE_LABEL).copied().unwrap_or(0) as i64;
        round3((positive - negative) as f64 / total_messages as f64)
    } else {
        0.0
    };

    Ok(Report {
        total_messages,
        distribution,
        reputation_index,
    })
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
