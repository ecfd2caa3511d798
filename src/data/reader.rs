//! Plain-text point file reader.

use super::Point;
use crate::error::{PointplotError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Point data reader.
///
/// Reads files with one record per line, each record holding exactly two
/// floating-point fields separated by whitespace.
#[derive(Debug)]
pub struct PointReader;

impl PointReader {
    /// Read a point data file into an ordered list of points.
    ///
    /// The file handle is held only for the duration of the parse. A record
    /// that does not hold exactly two numeric fields fails the whole read.
    pub fn read_file(path: &Path) -> Result<Vec<Point>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PointplotError::file_not_found(path),
            _ => PointplotError::Io(e),
        })?;
        let reader = BufReader::new(file);

        let mut points = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            points.push(Self::parse_record(path, idx + 1, &line?)?);
        }

        Ok(points)
    }

    fn parse_record(path: &Path, line: usize, record: &str) -> Result<Point> {
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(PointplotError::malformed_record(
                path,
                line,
                format!("expected 2 fields, found {}", fields.len()),
            ));
        }

        let x = Self::parse_field(path, line, fields[0])?;
        let y = Self::parse_field(path, line, fields[1])?;
        Ok(Point::new(x, y))
    }

    fn parse_field(path: &Path, line: usize, field: &str) -> Result<f64> {
        field.parse::<f64>().map_err(|_| {
            PointplotError::malformed_record(path, line, format!("not a number: '{}'", field))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_data(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_records_in_file_order() {
        let file = write_data("0 0\n1 1\n2.5 -3.5\n");
        let points = PointReader::read_file(file.path()).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[1], Point::new(1.0, 1.0));
        assert_eq!(points[2], Point::new(2.5, -3.5));
    }

    #[test]
    fn accepts_runs_of_spaces_between_fields() {
        let file = write_data("1.5   2.0\n");
        let points = PointReader::read_file(file.path()).unwrap();
        assert_eq!(points, vec![Point::new(1.5, 2.0)]);
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let err = PointReader::read_file(Path::new("no_such_points.txt")).unwrap_err();
        assert!(matches!(err, PointplotError::FileNotFound { .. }));
        assert!(err.to_string().contains("no_such_points.txt"));
    }

    #[test]
    fn non_numeric_field_names_the_line() {
        let file = write_data("1 2\nfoo 4\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        match err {
            PointplotError::MalformedRecord { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("foo"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn short_record_is_malformed() {
        let file = write_data("1.0\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PointplotError::MalformedRecord { line: 1, .. }
        ));
    }

    #[test]
    fn extra_fields_are_malformed() {
        let file = write_data("1 2 3\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("expected 2 fields, found 3"));
    }

    #[test]
    fn blank_line_is_malformed() {
        let file = write_data("1 2\n\n3 4\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PointplotError::MalformedRecord { line: 2, .. }
        ));
    }
}
