use std::path::PathBuf;

use crate::literal::LiteralError;
use crate::projection::ProjectionError;

/// Why a single matching log line could not become a row
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("line contains '{marker}' but no '{prefix}' follows it")]
    MissingPrefix { marker: String, prefix: String },

    #[error("invalid mapping literal")]
    Literal(#[from] LiteralError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("{} not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Malformed record at line {line}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ExtractError {
    /// True for the one failure the CLI reports without a non-zero exit
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, ExtractError::InputNotFound { .. })
    }
}
