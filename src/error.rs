use thiserror::Error;

use crate::domain::Bounds;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors surfaced by the grid and the pattern codecs.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid bounds: xmin={xmin} xmax={xmax} ymin={ymin} ymax={ymax}")]
    InvalidBounds {
        xmin: i64,
        xmax: i64,
        ymin: i64,
        ymax: i64,
    },
    #[error("cell ({x}, {y}) lies outside the window {bounds}")]
    OutOfBounds { x: i64, y: i64, bounds: Bounds },
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
    #[error("{operation} is not supported by the {codec} codec")]
    Unsupported {
        codec: &'static str,
        operation: &'static str,
    },
    #[error("invalid rulestring `{0}`")]
    InvalidRule(String),
    #[error("no pattern codec for `{0}`")]
    UnknownFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LifeError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Invalid bounds or a coordinate outside the window.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::InvalidBounds { .. } | Self::OutOfBounds { .. })
    }

    /// Malformed pattern text.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
