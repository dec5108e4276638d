use std::path::{Path, PathBuf};

use thiserror::Error;

/// Structural failures that abort a load. Per-row content problems are not
/// errors; see [`DropReason`].
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unsupported file extension {extension:?} (expected .csv, .xlsx, or .xls)")]
    UnsupportedFormat { extension: String },

    #[error("malformed input in {}: {reason}", path.display())]
    MalformedInput {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("missing required column(s) {missing:?}; header row has {found:?}")]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },
}

impl IngestError {
    pub(crate) fn malformed(
        path: &Path,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MalformedInput {
            path: path.to_path_buf(),
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn malformed_plain(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.to_path_buf(),
            reason: reason.into(),
            source: None,
        }
    }
}

/// Why a row was rejected. A per-row outcome counted by the loader, never an
/// abort: the rest of the batch keeps loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("text is empty")]
    EmptyText,
    #[error("text is shorter than the minimum length")]
    TextTooShort,
    #[error("label is not in the active vocabulary")]
    UnknownLabel,
    #[error("label does not parse as an integer code")]
    UnparseableLabel,
}
