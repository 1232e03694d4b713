//! Reads the campus CSV export into raw user rows.
//!
//! Header names map straight onto [`RawUserRow`]; unknown columns are
//! ignored and rows that fail to deserialize are skipped with a warning.
//! An I/O failure mid-stream aborts the read instead.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use backend_domain::RawUserRow;

pub fn read_user_rows(path: &Path) -> Result<Vec<RawUserRow>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    rows_from_reader(file)
}

pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawUserRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize::<RawUserRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            // A failed underlying read means the file is truncated or gone;
            // a partial import must not look like a complete one.
            Err(err) if err.is_io_error() => {
                return Err(err).with_context(|| format!("reading csv row {}", index + 1))
            }
            Err(err) => warn!(row = index + 1, error = %err, "skipping malformed csv row"),
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_missing_columns() {
        let data = "\
entity_id,name,role,email
E1,Alice,staff,alice@example.edu
E2,Bob,,
";
        let rows = rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entity_id.as_deref(), Some("E1"));
        assert_eq!(rows[0].role.as_deref(), Some("staff"));
        // Empty csv fields come through as None.
        assert_eq!(rows[1].role, None);
        assert_eq!(rows[1].student_id, None);
    }

    #[test]
    fn ignores_unknown_columns() {
        let data = "\
entity_id,shoe_size,role
E1,42,student
";
        let rows = rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entity_id.as_deref(), Some("E1"));
    }

    #[test]
    fn empty_file_yields_no_rows() {
        let rows = rows_from_reader("entity_id,role\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    /// Hands out a valid header plus one row, then fails like a vanished
    /// file would.
    struct TruncatedReader {
        data: std::io::Cursor<&'static [u8]>,
    }

    impl Read for TruncatedReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(std::io::Error::other("device disconnected"));
            }
            Ok(n)
        }
    }

    #[test]
    fn mid_stream_read_failure_aborts() {
        let reader = TruncatedReader {
            data: std::io::Cursor::new(b"entity_id,role\nE1,student\n"),
        };
        let err = rows_from_reader(reader).unwrap_err();
        assert!(err.to_string().contains("reading csv row"));
    }
}
