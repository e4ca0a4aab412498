//! Core types shared by the container and input resolvers
//!
//! This module contains the visual status tag, padding scale, pixel
//! dimensions and the class token list used to compose structural classes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::color::{ERROR_RED, SUCCESS_GREEN, WARNING_AMBER};
use crate::error::KitError;

// ============================================================================
// Visual Status
// ============================================================================

/// Visual status of a component, drives the border color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualStatus {
    /// Use the caller-supplied border color
    #[default]
    Default,
    Error,
    Success,
    Warning,
}

impl VisualStatus {
    /// Fixed border color for this status, `None` for [`VisualStatus::Default`]
    pub fn border_color(&self) -> Option<&'static str> {
        match self {
            VisualStatus::Default => None,
            VisualStatus::Error => Some(ERROR_RED),
            VisualStatus::Success => Some(SUCCESS_GREEN),
            VisualStatus::Warning => Some(WARNING_AMBER),
        }
    }

    /// Tag name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualStatus::Default => "default",
            VisualStatus::Error => "error",
            VisualStatus::Success => "success",
            VisualStatus::Warning => "warning",
        }
    }

    /// Get all statuses
    pub fn all() -> &'static [VisualStatus] {
        &[
            VisualStatus::Default,
            VisualStatus::Error,
            VisualStatus::Success,
            VisualStatus::Warning,
        ]
    }
}

impl FromStr for VisualStatus {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(VisualStatus::Default),
            "error" => Ok(VisualStatus::Error),
            "success" => Ok(VisualStatus::Success),
            "warning" => Ok(VisualStatus::Warning),
            other => Err(KitError::invalid_status(other)),
        }
    }
}

impl std::fmt::Display for VisualStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Container padding scale
///
/// Unknown tags read from configuration fall back to [`PaddingSize::Md`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaddingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl PaddingSize {
    /// Map a tag to a size, unknown tags become `Md`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "sm" => PaddingSize::Sm,
            "lg" => PaddingSize::Lg,
            _ => PaddingSize::Md,
        }
    }

    /// Spacing class token
    pub fn class(&self) -> &'static str {
        match self {
            PaddingSize::Sm => "p-3",
            PaddingSize::Md => "p-4",
            PaddingSize::Lg => "p-6",
        }
    }
}

impl From<String> for PaddingSize {
    fn from(tag: String) -> Self {
        PaddingSize::from_tag(&tag)
    }
}

impl From<&str> for PaddingSize {
    fn from(tag: &str) -> Self {
        PaddingSize::from_tag(tag)
    }
}

// ============================================================================
// Dimensions
// ============================================================================

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)")
        .expect("leading number pattern is valid")
});

/// A pixel dimension given either as a number or as text
///
/// Text is read the way a browser's `parseFloat` reads it: leading
/// whitespace is skipped and the longest numeric prefix is used, so
/// `"2.5rem"` is 2.5 and `"abc"` is unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl Dimension {
    /// Pixel value, never negative; unparsable or non-finite input is 0
    pub fn pixels(&self) -> f64 {
        let raw = match self {
            Dimension::Number(n) => *n,
            Dimension::Text(text) => parse_leading_float(text).unwrap_or(0.0),
        };

        if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
    }

    /// CSS length in pixels, e.g. `"2.5px"`
    pub fn to_px(&self) -> String {
        format!("{}px", format_css_number(self.pixels()))
    }
}

/// Shortest decimal form, switching to exponent notation outside
/// `[1e-6, 1e21)` the way CSS values are usually serialized
fn format_css_number(value: f64) -> String {
    if value == 0.0 || (1e-6..1e21).contains(&value) {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Number(0.0)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Number(value)
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension::Number(value as f64)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Text(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Text(value)
    }
}

/// Parse the longest numeric prefix of `text`
fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let prefix = LEADING_NUMBER.find(trimmed)?.as_str();

    match prefix.trim_start_matches(['+', '-']) {
        "Infinity" => Some(if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }),
        _ => prefix.parse::<f64>().ok(),
    }
}

// ============================================================================
// Class Tokens
// ============================================================================

/// Ordered list of class tokens
///
/// Empty tokens are dropped and repeated tokens keep their first position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every whitespace-separated token in `classes`
    pub fn push(&mut self, classes: &str) -> &mut Self {
        for token in classes.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
        self
    }

    /// Add `classes` only when `condition` holds
    pub fn push_if(&mut self, condition: bool, classes: &str) -> &mut Self {
        if condition {
            self.push(classes);
        }
        self
    }

    /// Check whether a token is present
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Tokens in insertion order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether the list has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = ClassList::new();
        list.push(classes);
        list
    }
}

// ============================================================================
// Tests
// ============================================================================
