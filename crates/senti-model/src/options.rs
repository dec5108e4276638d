use crate::vocabulary::LabelVocabulary;

/// Default minimum accepted text length, in characters.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 5;

/// Date filled in for sources without a date column under
/// [`DatePolicy::FixedDefault`].
pub const DEFAULT_DATE: &str = "1970-01-01";

/// Where record ids come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdSource {
    /// The `id` column is required; schema resolution fails without it.
    Column,
    /// The `id` column is optional: used when present, otherwise each record
    /// gets its zero-based row ordinal.
    #[default]
    Ordinal,
}

/// What `date` resolves to when the source has no date column.
///
/// The two source variants of this system historically disagreed here; both
/// behaviors are kept as explicit choices rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    /// Leave `date` unset (`None`).
    #[default]
    Unset,
    /// Fill the fixed literal [`DEFAULT_DATE`].
    FixedDefault,
}

/// Policy bundle bound to a loader at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub min_text_length: usize,
    pub vocabulary: LabelVocabulary,
    pub id_source: IdSource,
    pub date_policy: DatePolicy,
}

impl LoadOptions {
    pub fn new(vocabulary: LabelVocabulary) -> Self {
        Self {
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            vocabulary,
            id_source: IdSource::default(),
            date_policy: DatePolicy::default(),
        }
    }

    /// The CSV variant: named sentiment labels, mandatory `id` column, no
    /// date defaulting.
    pub fn csv_sentiment() -> Self {
        Self::new(LabelVocabulary::sentiment3()).with_id_source(IdSource::Column)
    }

    /// The spreadsheet variant: numeric polarity codes, ordinal ids, fixed
    /// default date when the column is missing.
    pub fn sheet_polarity() -> Self {
        Self::new(LabelVocabulary::polarity2())
            .with_id_source(IdSource::Ordinal)
            .with_date_policy(DatePolicy::FixedDefault)
    }

    #[must_use]
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    #[must_use]
    pub fn with_id_source(mut self, id_source: IdSource) -> Self {
        self.id_source = id_source;
        self
    }

    #[must_use]
    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.date_policy = date_policy;
        self
    }
}
