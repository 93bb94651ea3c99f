// Position log (.pos) file loader
use crate::application::position_source::{FormatError, LoadError, PositionSource};
use crate::domain::position::EcefObservation;
use std::path::Path;

/// GPST, x-ecef(m), y-ecef(m), z-ecef(m), Q, ns, sdx(m), sdy(m), sdz(m),
/// sdxy(m), sdyz(m), sdzx(m), age(s), ratio
pub const POS_FIELD_COUNT: usize = 14;

const COORDINATE_COLUMNS: [&str; 3] = ["x-ecef(m)", "y-ecef(m)", "z-ecef(m)"];

#[derive(Debug, Clone, Default)]
pub struct PosFileLoader;

impl PosFileLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse the contents of a position log. `path` is only used in errors.
    pub fn parse(path: &Path, contents: &str) -> Result<Vec<EcefObservation>, FormatError> {
        let lines: Vec<&str> = contents.lines().collect();

        // Header lines are skipped without looking at them
        let start = lines
            .iter()
            .position(|line| line.starts_with(|c: char| c.is_ascii_digit()))
            .ok_or_else(|| FormatError::MissingDataSection { path: path.to_path_buf() })?;

        let mut observations = Vec::with_capacity(lines.len() - start);
        for (idx, line) in lines.iter().enumerate().skip(start) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            let line_no = idx + 1;
            if fields.len() != POS_FIELD_COUNT {
                return Err(FormatError::FieldCount {
                    path: path.to_path_buf(),
                    line: line_no,
                    expected: POS_FIELD_COUNT,
                    found: fields.len(),
                });
            }

            let mut coords = [0.0f64; 3];
            for (i, &column) in COORDINATE_COLUMNS.iter().enumerate() {
                let raw = fields[i + 1];
                coords[i] = raw.parse().map_err(|_| FormatError::InvalidNumber {
                    path: path.to_path_buf(),
                    line: line_no,
                    column,
                    value: raw.to_string(),
                })?;
            }

            observations.push(EcefObservation::new(fields[0].to_string(), coords[0], coords[1], coords[2]));
        }

        Ok(observations)
    }
}

impl PositionSource for PosFileLoader {
    fn load(&self, path: &Path) -> Result<Vec<EcefObservation>, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(path, &contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "\
% program   : RTKPOST ver.2.4.3
% inp file  : rover.obs
%  GPST                  x-ecef(m)      y-ecef(m)      z-ecef(m)   Q  ns   sdx(m)   sdy(m)   sdz(m)  sdxy(m)  sdyz(m)  sdzx(m) age(s)  ratio
";

    const ROW_1: &str = "2024/03/05T10:00:00.000   3655333.8470   1403901.0670   5018038.0470   1   9   0.0040   0.0030   0.0050   0.0010   0.0020   0.0010   0.00   12.3";
    const ROW_2: &str = "2024/03/05T10:00:01.000   3655333.8490   1403901.0650   5018038.0510   1   9   0.0040   0.0030   0.0050   0.0010   0.0020   0.0010   0.00   12.5";

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gnss-positions-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_skips_header_and_keeps_four_columns() {
        let path = write_temp("two_rows.pos", &format!("{}{}\n{}\n", HEADER, ROW_1, ROW_2));
        let rows = PosFileLoader::new().load(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            EcefObservation::new("2024/03/05T10:00:00.000".to_string(), 3655333.8470, 1403901.0670, 5018038.0470)
        );
        assert_eq!(rows[1].gpst, "2024/03/05T10:00:01.000");
        assert_eq!(rows[1].z, 5018038.0510);
    }

    #[test]
    fn test_blank_lines_in_data_are_ignored() {
        let contents = format!("{}{}\n\n   \n{}\n", HEADER, ROW_1, ROW_2);
        let rows = PosFileLoader::parse(Path::new("blank.pos"), &contents).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_header_must_start_with_digit_to_count_as_data() {
        // Indented digits are still header
        let contents = format!("  2024 not data\n{}\n", ROW_1);
        let rows = PosFileLoader::parse(Path::new("indent.pos"), &contents).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_thirteen_fields_is_format_error() {
        let short = ROW_2.rsplit_once(' ').unwrap().0;
        let contents = format!("{}{}\n{}\n", HEADER, ROW_1, short);
        let err = PosFileLoader::parse(Path::new("short.pos"), &contents).unwrap_err();

        match err {
            FormatError::FieldCount { line, expected, found, .. } => {
                assert_eq!(line, 5);
                assert_eq!(expected, 14);
                assert_eq!(found, 13);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_data_section_is_format_error() {
        let err = PosFileLoader::parse(Path::new("empty.pos"), HEADER).unwrap_err();
        assert!(matches!(err, FormatError::MissingDataSection { .. }));
        assert!(err.to_string().starts_with("empty.pos:"));
    }

    #[test]
    fn test_unparsable_coordinate_is_format_error() {
        let bad = ROW_1.replace("1403901.0670", "14039O1.0670");
        let err = PosFileLoader::parse(Path::new("bad.pos"), &bad).unwrap_err();

        match err {
            FormatError::InvalidNumber { line, column, value, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, "y-ecef(m)");
                assert_eq!(value, "14039O1.0670");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PosFileLoader::new()
            .load(Path::new("/nonexistent/gnss-positions/none.pos"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
