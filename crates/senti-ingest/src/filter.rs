//! Content validation of candidate records.

use senti_model::{CandidateRecord, LoadOptions, ValidatedRecord};

use crate::error::DropReason;

/// Apply the content policy to a candidate.
///
/// Rejections are ordinary per-row outcomes; exceptions are reserved for
/// structural failures upstream. An accepted record carries the candidate's
/// fields unchanged.
pub fn check_candidate(
    candidate: CandidateRecord,
    options: &LoadOptions,
) -> Result<ValidatedRecord, DropReason> {
    if candidate.text.is_empty() {
        return Err(DropReason::EmptyText);
    }
    if candidate.text.chars().count() < options.min_text_length {
        return Err(DropReason::TextTooShort);
    }
    if !options.vocabulary.is_acceptable(candidate.label) {
        return Err(DropReason::UnknownLabel);
    }
    Ok(candidate.into_validated())
}
