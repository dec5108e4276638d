//! Raw row to candidate record conversion.

use senti_model::{CandidateRecord, DEFAULT_DATE, DatePolicy, LabelEncoding, LoadOptions, RecordId};

use crate::error::DropReason;
use crate::schema::FieldMap;

/// Convert one raw row into a [`CandidateRecord`].
///
/// Label handling depends on the vocabulary's encoding: named labels are
/// trimmed, lowercased, and looked up; numeric labels are parsed as `i64`.
/// A failed lookup or parse is reported as a [`DropReason`], not an error;
/// the filter stage makes the final accept/reject call so every row is
/// classified exactly once.
///
/// `ordinal` is the zero-based position of the row within the load and is
/// used as the record id when the source has no id column.
pub fn normalize_row(
    row: &[String],
    fields: &FieldMap,
    options: &LoadOptions,
    ordinal: usize,
) -> Result<CandidateRecord, DropReason> {
    let text = cell(row, fields.text).trim().to_string();

    let raw_label = cell(row, fields.label).trim();
    let label = match options.vocabulary.encoding() {
        LabelEncoding::Named => options
            .vocabulary
            .code_for(raw_label)
            .ok_or(DropReason::UnknownLabel)?,
        LabelEncoding::Numeric => raw_label
            .parse::<i64>()
            .map_err(|_| DropReason::UnparseableLabel)?,
    };

    let id = match fields.id {
        Some(idx) => RecordId::Column(cell(row, idx).trim().to_string()),
        None => RecordId::Ordinal(ordinal),
    };

    // Date cells pass through verbatim; only a missing column is subject
    // to the date policy. An empty cell is not a missing column.
    let date = match (fields.date, options.date_policy) {
        (Some(idx), _) => Some(cell(row, idx).to_string()),
        (None, DatePolicy::FixedDefault) => Some(DEFAULT_DATE.to_string()),
        (None, DatePolicy::Unset) => None,
    };

    Ok(CandidateRecord {
        id,
        text,
        label,
        date,
    })
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use senti_model::{IdSource, LabelVocabulary, LoadOptions};

    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn named_labels_are_lowercased_before_lookup() {
        let fields = FieldMap {
            text: 0,
            label: 1,
            id: None,
            date: None,
        };
        let options = LoadOptions::new(LabelVocabulary::sentiment3());
        let candidate = normalize_row(&row(&["Fine", " POSITIVE "]), &fields, &options, 3).unwrap();
        assert_eq!(candidate.label, 2);
        assert_eq!(candidate.id, RecordId::Ordinal(3));
        assert_eq!(candidate.date, None);
    }

    #[test]
    fn numeric_labels_must_parse_as_integers() {
        let fields = FieldMap {
            text: 0,
            label: 1,
            id: None,
            date: None,
        };
        let options = LoadOptions::sheet_polarity();
        assert_eq!(
            normalize_row(&row(&["msg", "1.5"]), &fields, &options, 0),
            Err(DropReason::UnparseableLabel)
        );
        let candidate = normalize_row(&row(&["msg", "1"]), &fields, &options, 0).unwrap();
        assert_eq!(candidate.label, 1);
    }

    #[test]
    fn id_column_wins_over_ordinal() {
        let fields = FieldMap {
            text: 0,
            label: 1,
            id: Some(2),
            date: None,
        };
        let options = LoadOptions::new(LabelVocabulary::sentiment3()).with_id_source(IdSource::Column);
        let candidate =
            normalize_row(&row(&["msg", "neutral", "m-17"]), &fields, &options, 5).unwrap();
        assert_eq!(candidate.id, RecordId::Column("m-17".to_string()));
    }

    #[test]
    fn date_policy_applies_only_without_a_date_column() {
        let with_date = FieldMap {
            text: 0,
            label: 1,
            id: None,
            date: Some(2),
        };
        let without_date = FieldMap {
            text: 0,
            label: 1,
            id: None,
            date: None,
        };
        let options = LoadOptions::sheet_polarity();

        // Empty cell in an existing column is preserved, not defaulted.
        let candidate = normalize_row(&row(&["msg", "0", ""]), &with_date, &options, 0).unwrap();
        assert_eq!(candidate.date, Some(String::new()));

        let candidate = normalize_row(&row(&["msg", "0"]), &without_date, &options, 0).unwrap();
        assert_eq!(candidate.date, Some(DEFAULT_DATE.to_string()));

        let unset = LoadOptions::new(LabelVocabulary::polarity2());
        let candidate = normalize_row(&row(&["msg", "0"]), &without_date, &unset, 0).unwrap();
        assert_eq!(candidate.date, None);
    }
}
