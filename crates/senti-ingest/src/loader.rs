//! The loader facade: extension dispatch plus the schema → normalize →
//! filter pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use senti_model::{IdSource, LoadOptions, LoadStatistics, ValidatedRecord};

use crate::csv_table::read_csv_table;
use crate::error::IngestError;
use crate::filter::check_candidate;
use crate::normalize::normalize_row;
use crate::schema::resolve_schema;
use crate::sheet::read_sheet_table;
use crate::table::RawTable;

/// Recognized source formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Sheet,
}

impl SourceFormat {
    /// Classify a path by extension (case-insensitive). Unknown extensions
    /// are rejected here, before any parsing attempt.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("");
        if extension.eq_ignore_ascii_case("csv") {
            Ok(Self::Csv)
        } else if extension.eq_ignore_ascii_case("xlsx") || extension.eq_ignore_ascii_case("xls") {
            Ok(Self::Sheet)
        } else {
            Err(IngestError::UnsupportedFormat {
                extension: extension.to_string(),
            })
        }
    }
}

/// Validated records plus the statistics of the load that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<ValidatedRecord>,
    pub stats: LoadStatistics,
}

/// A loader is bound to exactly one vocabulary and policy set at
/// construction; the two source variants never share an instance.
#[derive(Debug, Clone)]
pub struct Loader {
    options: LoadOptions,
}

impl Loader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load, normalize, and validate a tabular file.
    ///
    /// Structural problems (missing file, unknown extension, unparseable
    /// content, missing required columns) fail the whole call. Content
    /// problems are per-row: a bad row is counted and skipped, never
    /// aborting the batch.
    pub fn load(&self, path: &Path) -> Result<LoadOutcome, IngestError> {
        if !path.exists() {
            return Err(IngestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let format = SourceFormat::from_path(path)?;
        let table = match format {
            SourceFormat::Csv => read_csv_table(path)?,
            SourceFormat::Sheet => read_sheet_table(path)?,
        };
        let outcome = self.load_table(&table)?;
        info!(
            path = %path.display(),
            vocabulary = self.options.vocabulary.id(),
            total_raw = outcome.stats.total_raw,
            accepted = outcome.stats.accepted,
            dropped = outcome.stats.dropped,
            "load complete"
        );
        debug!(distribution = ?outcome.stats.class_distribution, "class distribution");
        Ok(outcome)
    }

    /// Run the format-independent part of the pipeline over an already-read
    /// table. `load` dispatches to a format reader and then lands here.
    pub fn load_table(&self, table: &RawTable) -> Result<LoadOutcome, IngestError> {
        let require_id = self.options.id_source == IdSource::Column;
        let fields = resolve_schema(&table.headers, require_id)?;

        let mut records = Vec::new();
        let mut dropped = 0usize;
        let mut class_distribution: BTreeMap<i64, usize> = BTreeMap::new();

        for (ordinal, row) in table.rows.iter().enumerate() {
            let candidate = match normalize_row(row, &fields, &self.options, ordinal) {
                Ok(candidate) => candidate,
                Err(reason) => {
                    dropped += 1;
                    debug!(row = ordinal, %reason, "row dropped");
                    continue;
                }
            };
            match check_candidate(candidate, &self.options) {
                Ok(record) => {
                    *class_distribution.entry(record.label).or_default() += 1;
                    records.push(record);
                }
                Err(reason) => {
                    dropped += 1;
                    debug!(row = ordinal, %reason, "row dropped");
                }
            }
        }

        let stats = LoadStatistics {
            total_raw: table.rows.len(),
            accepted: records.len(),
            dropped,
            class_distribution,
        };
        Ok(LoadOutcome { records, stats })
    }
}
