//! Hex color validation
//!
//! Colors are accepted only in the `#RGB`, `#RRGGBB` and `#RRGGBBAA` forms.
//! Validation is purely syntactic: no normalization, no named colors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{KitError, KitResult};

// ============================================================================
// Palette
// ============================================================================

/// Fallback background color
pub const WHITE: &str = "#FFFFFF";

/// Default text color
pub const DEFAULT_TEXT: &str = "#111827";

/// Fallback border color
pub const NEUTRAL_BORDER: &str = "#E5E7EB";

/// Border color for the error status
pub const ERROR_RED: &str = "#DC2626";

/// Border color for the success status
pub const SUCCESS_GREEN: &str = "#16A34A";

/// Border color for the warning status
pub const WARNING_AMBER: &str = "#D97706";

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("hex color pattern is valid")
});

/// Check whether `input` is a 3, 6 or 8 digit hex color
///
/// # Example
///
/// ```rust
/// use vitrine_core::color::is_valid_hex;
///
/// assert!(is_valid_hex("#fff"));
/// assert!(is_valid_hex("#FFEECC80"));
/// assert!(!is_valid_hex("#1234"));
/// assert!(!is_valid_hex("red"));
/// ```
pub fn is_valid_hex(input: &str) -> bool {
    HEX_PATTERN.is_match(input)
}

/// Return `candidate` if it is a valid hex color, otherwise `fallback`
pub fn hex_or<'a>(candidate: &'a str, fallback: &'a str) -> &'a str {
    if is_valid_hex(candidate) {
        candidate
    } else {
        fallback
    }
}

// ============================================================================
// HexColor
// ============================================================================

/// A color string known to pass [`is_valid_hex`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a color, keeping the original spelling
    pub fn parse(input: &str) -> KitResult<Self> {
        if is_valid_hex(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(KitError::invalid_color(input))
        }
    }

    /// Parse `candidate`, falling back to `fallback` when it is not a valid color
    pub fn or(candidate: &str, fallback: &HexColor) -> Self {
        Self::parse(candidate).unwrap_or_else(|_| fallback.clone())
    }

    /// The color as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex digits (3, 6 or 8)
    pub fn digits(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether the color carries an alpha channel
    pub fn has_alpha(&self) -> bool {
        self.digits() == 8
    }
}

impl FromStr for HexColor {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = KitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_hex(&value) {
            Ok(Self(value))
        } else {
            Err(KitError::InvalidColor(value))
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
