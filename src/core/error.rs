//! Recoverable errors.
//!
//! Only input problems and output failures are errors. Out-of-range cell
//! access and reads of unrecorded generations are contract violations and
//! panic instead.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file ended before both grid dimensions were read.
    #[error("missing grid dimensions")]
    MissingDimensions,

    /// A dimension token is not a non-negative integer.
    #[error("invalid grid dimension {0:?}")]
    InvalidDimension(String),

    /// A dimension is zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    /// The bordered grid would exceed [`Grid::MAX_CELLS`](crate::core::Grid::MAX_CELLS).
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    /// No live-cell character after the dimensions.
    #[error("missing live cell character")]
    MissingLiveChar,

    /// Fewer grid lines than declared rows.
    #[error("expected {expected} grid rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    /// Unrecognized color name.
    #[error("unknown color {0:?}")]
    UnknownColor(String),

    /// The configuration file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any error surfaced by the crate.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A render collaborator failed to write.
    #[error("render failed")]
    Render(#[from] std::io::Error),
}

/// Crate result alias.
pub type Result<T, E = LifeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::MissingRows { expected: 3, found: 1 }.to_string(),
            "expected 3 grid rows, found 1"
        );
        assert_eq!(
            ConfigError::InvalidDimension("x".into()).to_string(),
            "invalid grid dimension \"x\""
        );
    }

    #[test]
    fn test_too_large_message() {
        assert_eq!(
            ConfigError::TooLarge { rows: 1, cols: usize::MAX }.to_string(),
            format!("grid of 1x{} cells is too large", usize::MAX)
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: LifeError = ConfigError::MissingLiveChar.into();
        assert!(matches!(err, LifeError::Config(ConfigError::MissingLiveChar)));
        assert_eq!(err.to_string(), "missing live cell character");
    }
}
