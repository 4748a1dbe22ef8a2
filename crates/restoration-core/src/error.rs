use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {field} = {value} (expected {expected})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("health weights must sum to 1.0 and be non-negative, got sum {sum}")]
    InvalidWeights { sum: f64 },

    #[error("trend threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("invalid carbon tables: {0}")]
    InvalidTables(String),

    #[error("land health history is empty")]
    EmptyHistory,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
