use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamFileError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parameter file ended before a value for {field}")]
    MissingValue { field: &'static str },

    #[error("line {line}: {text:?} is not a valid value for {field}")]
    InvalidValue {
        field: &'static str,
        line: usize,
        text: String,
    },

    #[error("{label} gate is {found}, expected the fixed value {expected}")]
    LiteralMismatch {
        label: &'static str,
        expected: f64,
        found: f64,
    },
}

impl ParamFileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
