//! Spreadsheet reading via `calamine`.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::IngestError;
use crate::table::{RawTable, normalize_header};

/// Read the first worksheet of an `.xlsx`/`.xls` workbook into a
/// [`RawTable`]: first row is the header row, the rest is data.
pub fn read_sheet_table(path: &Path) -> Result<RawTable, IngestError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|error| IngestError::malformed(path, "cannot open workbook", error))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::malformed_plain(path, "workbook has no worksheets"))?
        .map_err(|error| IngestError::malformed(path, "cannot read first worksheet", error))?;
    Ok(table_from_range(&range))
}

/// Convert a worksheet range into the common tabular form.
pub(crate) fn table_from_range(range: &Range<Data>) -> RawTable {
    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return RawTable::default();
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell)))
        .collect();

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut cells = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            cells.push(row.get(idx).map(cell_to_string).unwrap_or_default());
        }
        if cells.iter().all(String::is_empty) {
            continue;
        }
        rows.push(cells);
    }

    RawTable { headers, rows }
}

/// Render a cell as the string the normalizer sees. Integral floats render
/// without a decimal point so numeric label cells survive integer parsing;
/// a float with a fractional part keeps it and the row fails that parse.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if value.fract() == 0.0 => format!("{}", *value as i64),
        other => other.to_string(),
    }
}
