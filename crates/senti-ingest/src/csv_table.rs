//! Delimited-text reading.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::IngestError;
use crate::table::{RawTable, normalize_cell, normalize_header};

/// Read a CSV file into a [`RawTable`].
///
/// The header row is mandatory. Rows are padded or truncated to the header
/// width and fully blank rows are skipped. The reader releases the file
/// handle on every exit path, including parse failures mid-file.
pub fn read_csv_table(path: &Path) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::malformed(path, "cannot open csv reader", error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::malformed(path, "cannot read csv header row", error))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| IngestError::malformed(path, "cannot parse csv record", error))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_headers_and_rows() {
        let (_dir, path) = write_csv("text,label,id\nhello there,positive,1\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.headers, vec!["text", "label", "id"]);
        assert_eq!(table.rows, vec![vec!["hello there", "positive", "1"]]);
    }

    #[test]
    fn strips_utf8_bom_from_first_header() {
        let (_dir, path) = write_csv("\u{feff}text,label\nsome message,neutral\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.headers, vec!["text", "label"]);
    }

    #[test]
    fn pads_short_rows_and_skips_blank_ones() {
        let (_dir, path) = write_csv("text,label,id\nonly text\n\nfull row,negative,9\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["only text", "", ""]);
        assert_eq!(table.rows[1], vec!["full row", "negative", "9"]);
    }

    #[test]
    fn invalid_utf8_is_malformed_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, b"text,label\n\xff\xfe\xfd,positive\n").unwrap();
        let error = read_csv_table(&path).unwrap_err();
        assert!(matches!(error, IngestError::MalformedInput { .. }));
    }
}
