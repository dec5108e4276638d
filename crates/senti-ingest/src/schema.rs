//! Header-row resolution.

use crate::error::IngestError;

pub const TEXT_COLUMN: &str = "text";
pub const LABEL_COLUMN: &str = "label";
pub const ID_COLUMN: &str = "id";
pub const DATE_COLUMN: &str = "date";

/// Resolved column positions for the logical record fields. `id` and `date`
/// stay `None` when the source simply lacks those columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub text: usize,
    pub label: usize,
    pub id: Option<usize>,
    pub date: Option<usize>,
}

/// Match headers against the required column set.
///
/// Headers are compared after trimming whitespace and any stray BOM;
/// matching is case-sensitive on content. `require_id` adds `id` to the
/// required set (the strict CSV variant); optional columns are picked up
/// when present and their absence is never an error. Pure function.
pub fn resolve_schema(headers: &[String], require_id: bool) -> Result<FieldMap, IngestError> {
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim().trim_matches('\u{feff}').trim() == name)
    };

    let text = position(TEXT_COLUMN);
    let label = position(LABEL_COLUMN);
    let id = position(ID_COLUMN);
    let date = position(DATE_COLUMN);

    let mut missing = Vec::new();
    if text.is_none() {
        missing.push(TEXT_COLUMN.to_string());
    }
    if label.is_none() {
        missing.push(LABEL_COLUMN.to_string());
    }
    if require_id && id.is_none() {
        missing.push(ID_COLUMN.to_string());
    }

    match (missing.is_empty(), text, label) {
        (true, Some(text), Some(label)) => Ok(FieldMap {
            text,
            label,
            id,
            date,
        }),
        _ => Err(IngestError::Schema {
            missing,
            found: headers.iter().map(|header| header.trim().to_string()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_required_and_optional_columns() {
        let fields = resolve_schema(&headers(&["id", "date", "text", "label"]), true).unwrap();
        assert_eq!(fields.text, 2);
        assert_eq!(fields.label, 3);
        assert_eq!(fields.id, Some(0));
        assert_eq!(fields.date, Some(1));
    }

    #[test]
    fn optional_column_absence_is_not_an_error() {
        let fields = resolve_schema(&headers(&["text", "label"]), false).unwrap();
        assert_eq!(fields.id, None);
        assert_eq!(fields.date, None);
    }

    #[test]
    fn missing_required_columns_are_all_named() {
        let error = resolve_schema(&headers(&["body", "date"]), true).unwrap_err();
        match error {
            IngestError::Schema { missing, found } => {
                assert_eq!(missing, vec!["text", "label", "id"]);
                assert_eq!(found, vec!["body", "date"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn headers_are_matched_whitespace_insensitively() {
        let fields = resolve_schema(&headers(&[" text ", "\u{feff}label"]), false).unwrap();
        assert_eq!(fields.text, 0);
        assert_eq!(fields.label, 1);
    }

    #[test]
    fn matching_is_case_sensitive_on_content() {
        let error = resolve_schema(&headers(&["Text", "label"]), false).unwrap_err();
        assert!(matches!(error, IngestError::Schema { .. }));
    }
}
