//! Reader for whitespace-separated `x1 x2 label` files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use holdout::Record;
use tracing::{debug, instrument};

/// Errors from opening or parsing an input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The underlying CSV reader failed (I/O or invalid UTF-8).
    #[error("could not read line {line}")]
    Csv { line: u64, source: csv::Error },

    /// A line did not hold two finite floats and an integer label.
    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// Reads one record per line from `path`.
///
/// See [`read_records`] for the format.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_records_from_path(path: &Path) -> Result<Vec<Record<i64, f64>>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Parses records from `reader`.
///
/// Each line holds `x1 x2 label` separated by spaces: two finite floats and
/// an integer. Runs of spaces are allowed, blank lines and lines starting with
/// `#` are skipped. There is no header.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record<i64, f64>>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let row = result.map_err(|source| InputError::Csv {
            line: source.position().map_or(index as u64 + 1, |p| p.line()),
            source,
        })?;
        let line = row.position().map_or(index as u64 + 1, |p| p.line());

        // Repeated delimiters show up as empty fields.
        let fields: Vec<&str> = row.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(InputError::Malformed {
                line,
                reason: format!("expected 3 fields (x1 x2 label), got {}", fields.len()),
            });
        }

        let x1 = parse_feature(fields[0], "x1", line)?;
        let x2 = parse_feature(fields[1], "x2", line)?;
        let label = fields[2].parse::<i64>().map_err(|e| InputError::Malformed {
            line,
            reason: format!("could not parse label {:?}: {}", fields[2], e),
        })?;
        records.push(Record::new(x1, x2, label));
    }

    debug!(records = records.len(), "parsed input");
    Ok(records)
}

fn parse_feature(field: &str, name: &str, line: u64) -> Result<f64, InputError> {
    let value = field.parse::<f64>().map_err(|e| InputError::Malformed {
        line,
        reason: format!("could not parse {name} {field:?}: {e}"),
    })?;
    if !value.is_finite() {
        return Err(InputError::Malformed {
            line,
            reason: format!("{name} must be finite, got {field:?}"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_records() {
        let data = "1.5 2 1\n-0.25 3e2 2\n0 0 -4\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].features(), [1.5, 2.0]);
        assert_eq!(*records[0].label(), 1);
        assert_eq!(records[1].features(), [-0.25, 300.0]);
        assert_eq!(*records[2].label(), -4);
        assert!(records.iter().all(|r| r.prediction().is_none()));
    }

    #[test]
    fn test_tolerates_extra_spaces_blank_lines_and_comments() {
        let data = "# x1 x2 label\n  1  2   3 \n\n4 5 6\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].features(), [1.0, 2.0]);
        assert_eq!(*records[1].label(), 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let data = "1 2 1\n3 4\n";
        match read_records(data.as_bytes()) {
            Err(InputError::Malformed { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3 fields"), "{reason}");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_label() {
        let data = "1 2 one\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 1, .. }));
        assert!(err.to_string().starts_with("line 1: could not parse label"));
    }

    #[test]
    fn test_non_finite_feature() {
        let err = read_records("NaN 2 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 1, .. }));
        let err = read_records("1 inf 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_read_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0 1").unwrap();
        writeln!(file, "5 5 2").unwrap();
        let records = read_records_from_path(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = read_records_from_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
    }
}
