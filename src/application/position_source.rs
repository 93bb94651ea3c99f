// Source trait for raw position logs
use crate::domain::position::EcefObservation;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A position log that does not follow the 14-column solution layout
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{}: no data section (no line starts with a digit)", path.display())]
    MissingDataSection { path: PathBuf },

    #[error("{}:{line}: expected {expected} fields, found {found}", path.display())]
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: invalid {column} value '{value}'", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub trait PositionSource: Send + Sync {
    /// Read one log file into observations, in file order
    fn load(&self, path: &Path) -> Result<Vec<EcefObservation>, LoadError>;
}
