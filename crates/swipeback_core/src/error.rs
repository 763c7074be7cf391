//! Swipe error types

use thiserror::Error;

use crate::events::PointerId;

/// Errors raised by configuration setters and the drag tracker
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwipeError {
    /// Close threshold outside the open interval (0, 1)
    #[error("Threshold value should be between 0 and 1.0, got {0}")]
    InvalidThreshold(f32),

    /// Drag sensitivity outside (0, 1]
    #[error("Sensitivity should be greater than 0 and at most 1.0, got {0}")]
    InvalidSensitivity(f32),

    /// Edge size fraction outside (0, 1]
    #[error("Edge percent should be greater than 0 and at most 1.0, got {0}")]
    InvalidEdgePercent(f32),

    /// A move referenced a pointer whose down event was never recorded
    #[error("No motion history for pointer {pointer_id}")]
    PointerIndexOutOfBounds { pointer_id: PointerId },
}

/// Result type for swipe operations
pub type Result<T> = std::result::Result<T, SwipeError>;

/// Validate a close threshold, which must lie strictly inside (0, 1)
pub fn check_threshold(threshold: f32) -> Result<f32> {
    if threshold > 0.0 && threshold < 1.0 {
        Ok(threshold)
    } else {
        Err(SwipeError::InvalidThreshold(threshold))
    }
}

/// Validate a drag sensitivity, which must lie in (0, 1]
pub fn check_sensitivity(sensitivity: f32) -> Result<f32> {
    if sensitivity > 0.0 && sensitivity <= 1.0 {
        Ok(sensitivity)
    } else {
        Err(SwipeError::InvalidSensitivity(sensitivity))
    }
}

/// Validate an edge size fraction, which must lie in (0, 1]
pub fn check_edge_percent(percent: f32) -> Result<f32> {
    if percent > 0.0 && percent <= 1.0 {
        Ok(percent)
    } else {
        Err(SwipeError::InvalidEdgePercent(percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds_are_exclusive() {
        assert_eq!(check_threshold(0.5), Ok(0.5));
        assert_eq!(check_threshold(1.0), Err(SwipeError::InvalidThreshold(1.0)));
        assert_eq!(check_threshold(0.0), Err(SwipeError::InvalidThreshold(0.0)));
        assert!(check_threshold(-0.2).is_err());
        assert!(check_threshold(f32::NAN).is_err());
    }

    #[test]
    fn test_sensitivity_allows_one() {
        assert_eq!(check_sensitivity(1.0), Ok(1.0));
        assert!(check_sensitivity(0.0).is_err());
        assert!(check_sensitivity(1.5).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SwipeError::InvalidThreshold(1.0);
        assert_eq!(
            err.to_string(),
            "Threshold value should be between 0 and 1.0, got 1"
        );

        let err = SwipeError::PointerIndexOutOfBounds { pointer_id: 3 };
        assert_eq!(err.to_string(), "No motion history for pointer 3");
    }
}
