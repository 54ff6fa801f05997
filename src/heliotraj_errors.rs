use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliotrajError {
    #[error("no entry in {dir} matches pattern: {pattern}")]
    NotFound { dir: Utf8PathBuf, pattern: String },

    #[error("{matches:?} all match pattern {pattern} in {dir}, expected exactly one")]
    Ambiguous {
        dir: Utf8PathBuf,
        pattern: String,
        matches: Vec<String>,
    },

    #[error("time columns are missing and the index is not time-typed")]
    MissingTimeColumns,

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("invalid numeric field '{value}' in {path}")]
    InvalidNumericField { value: String, path: Utf8PathBuf },

    #[error("row with {found} fields in {path}, header has {expected}")]
    RowLength {
        path: Utf8PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] hifitime::HifitimeError),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for HeliotrajError {
    fn eq(&self, other: &Self) -> bool {
        use HeliotrajError::*;
        match (self, other) {
            (
                NotFound { dir, pattern },
                NotFound {
                    dir: d2,
                    pattern: p2,
                },
            ) => dir == d2 && pattern == p2,
            (
                Ambiguous {
                    dir,
                    pattern,
                    matches,
                },
                Ambiguous {
                    dir: d2,
                    pattern: p2,
                    matches: m2,
                },
            ) => dir == d2 && pattern == p2 && matches == m2,
            (MissingTimeColumns, MissingTimeColumns) => true,
            (MissingColumn(a), MissingColumn(b)) => a == b,
            (
                InvalidNumericField { value, path },
                InvalidNumericField {
                    value: v2,
                    path: p2,
                },
            ) => value == v2 && path == p2,
            (
                RowLength {
                    path,
                    expected,
                    found,
                },
                RowLength {
                    path: p2,
                    expected: e2,
                    found: f2,
                },
            ) => path == p2 && expected == e2 && found == f2,
            // Not comparable, equal if same variant
            (InvalidTimestamp(_), InvalidTimestamp(_)) => true,
            (IoError(_), IoError(_)) => true,
            _ => false,
        }
    }
}
