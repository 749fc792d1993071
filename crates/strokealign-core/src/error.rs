//! Error types for alignment operations.

use crate::entities::HandleType;
use thiserror::Error;

/// Alignment errors.
///
/// Every variant is scoped to a single operation. Most of them mean the
/// operation is simply not applicable to the current context; only
/// [`AlignError::UnsupportedHandle`] is a cancellation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    #[error("Nothing selected")]
    NoSelection,
    #[error("No annotation stroke available")]
    NoStroke,
    #[error("No active viewport")]
    NoViewport,
    #[error("Point could not be projected through the viewport")]
    ProjectionFailed,
    #[error("Unsupported handle types ({left:?}, {right:?}); supported handle modes: Vector, Auto")]
    UnsupportedHandle { left: HandleType, right: HandleType },
    #[error("Influence must be within [0, 1], got {0}")]
    InvalidInfluence(f64),
    #[error("No valid cases found: {0}")]
    UnsupportedMode(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AlignError {
    /// Whether this error cancels the operation rather than making it a no-op.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AlignError::UnsupportedHandle { .. })
    }
}

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_class() {
        let err = AlignError::UnsupportedHandle {
            left: HandleType::Free,
            right: HandleType::Auto,
        };
        assert!(err.is_cancellation());
        assert!(!AlignError::NoStroke.is_cancellation());
        assert!(!AlignError::NoViewport.is_cancellation());
    }

    #[test]
    fn test_display() {
        let err = AlignError::InvalidInfluence(1.5);
        assert_eq!(err.to_string(), "Influence must be within [0, 1], got 1.5");
    }
}
