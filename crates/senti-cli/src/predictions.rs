//! Reading classifier output from disk.
//!
//! The classifier itself is external; its contract is one integer
//! prediction per accepted record, in record order. The on-disk form is a
//! plain text file with one integer per line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read one integer prediction per line. Blank lines are skipped;
/// surrounding whitespace is ignored.
pub fn read_predictions(path: &Path) -> Result<Vec<i64>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read predictions file: {}", path.display()))?;

    let mut predictions = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<i64>().with_context(|| {
            format!(
                "{}:{}: not an integer prediction: {trimmed:?}",
                path.display(),
                index + 1
            )
        })?;
        predictions.push(value);
    }
    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_predictions(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("predictions.txt");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_one_integer_per_line() {
        let (_dir, path) = write_predictions("0\n2\n1\n");
        assert_eq!(read_predictions(&path).unwrap(), vec![0, 2, 1]);
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        let (_dir, path) = write_predictions("  0 \n\n1\n\n");
        assert_eq!(read_predictions(&path).unwrap(), vec![0, 1]);
    }

    #[test]
    fn non_integer_line_is_an_error() {
        let (_dir, path) = write_predictions("0\npositive\n");
        let error = read_predictions(&path).unwrap_err();
        assert!(error.to_string().contains(":2:"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_predictions(&dir.path().join("absent.txt")).is_err());
    }
}
