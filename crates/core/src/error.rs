//! Error types for Vitrine
//!
//! Style resolution never fails: invalid colors, dimensions and padding tags
//! degrade to documented defaults. Errors only surface from strict parsing
//! and from misconfigured input value ownership.

use thiserror::Error;

/// The main error type for Vitrine
#[derive(Debug, Error)]
pub enum KitError {
    // ========================================================================
    // Parse Errors
    // ========================================================================
    /// Color string is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid hex color: '{0}'")]
    InvalidColor(String),

    /// Unknown visual status tag
    #[error("Invalid status: '{0}' (expected default, error, success or warning)")]
    InvalidStatus(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// An input tried to switch between controlled and uncontrolled ownership
    #[error("Input '{field}' cannot switch from {from} to {to} after construction")]
    ModeSwitch {
        field: String,
        from: &'static str,
        to: &'static str,
    },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl KitError {
    /// Create an invalid color error
    pub fn invalid_color(color: impl Into<String>) -> Self {
        KitError::InvalidColor(color.into())
    }

    /// Create an invalid status error
    pub fn invalid_status(status: impl Into<String>) -> Self {
        KitError::InvalidStatus(status.into())
    }

    /// Create a mode switch error
    pub fn mode_switch(field: impl Into<String>, from: &'static str, to: &'static str) -> Self {
        KitError::ModeSwitch {
            field: field.into(),
            from,
            to,
        }
    }

    /// Check if this error came from parsing a single value
    pub fn is_parse(&self) -> bool {
        matches!(self, KitError::InvalidColor(_) | KitError::InvalidStatus(_))
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, KitError::ModeSwitch { .. })
    }
}

/// Result type alias using KitError
pub type KitResult<T> = Result<T, KitError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_error() {
        let err = KitError::invalid_color("red");
        assert!(err.is_parse());
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "Invalid hex color: 'red'");
    }

    #[test]
    fn test_invalid_status_error() {
        let err = KitError::invalid_status("danger");
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "Invalid status: 'danger' (expected default, error, success or warning)"
        );
    }

    #[test]
    fn test_mode_switch_error() {
        let err = KitError::mode_switch("email", "controlled", "uncontrolled");
        assert!(err.is_config());
        assert!(!err.is_parse());
        assert_eq!(
            err.to_string(),
            "Input 'email' cannot switch from controlled to uncontrolled after construction"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: KitError = json_err.into();
        assert!(!err.is_parse());
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
