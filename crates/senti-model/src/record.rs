use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a source row.
///
/// Taken from the `id` column when the source provides one, otherwise the
/// zero-based row ordinal within the load. Ordinals match source row order
/// exactly, so positional pairing with a prediction array stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Ordinal(usize),
    Column(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal(ordinal) => write!(f, "{ordinal}"),
            Self::Column(value) => f.write_str(value),
        }
    }
}

/// A parsed row that has not yet passed the validation policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub id: RecordId,
    pub text: String,
    pub label: i64,
    /// `None` means the source had no date column under the unset policy;
    /// `Some("")` is an empty date cell.
    pub date: Option<String>,
}

impl CandidateRecord {
    /// Promote to a validated record. Callers must have checked the content
    /// rules first; the fields pass through unchanged.
    pub fn into_validated(self) -> ValidatedRecord {
        ValidatedRecord {
            id: self.id,
            text: self.text,
            label: self.label,
            date: self.date,
        }
    }
}

/// A record that passed every content rule of the active policy.
///
/// Invariants: `text` meets the configured minimum length and `label` is a
/// member of the vocabulary's acceptable code set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub id: RecordId,
    pub text: String,
    pub label: i64,
    pub date: Option<String>,
}
