//! Error types for transform math and the demo surface around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by matrix arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Left operand column count does not match right operand row count.
    #[error("cannot multiply matrices: lhs has {lhs_cols} columns, rhs has {rhs_rows} rows")]
    DimensionMismatch {
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
    },
}

/// Errors surfaced by the binary: config loading, PNG export, the window.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "im-io")]
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("window error: {0}")]
    Ui(String),
}
