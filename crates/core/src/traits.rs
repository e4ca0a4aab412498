//! Core traits for Vitrine
//!
//! This module defines the behaviour shared by component configurations:
//! turning a configuration into render-ready output, and loading
//! configurations from JSON.

use crate::container::{ContainerConfig, ResolvedContainer};
use crate::error::KitResult;
use crate::input::InputConfig;
use crate::style::ResolvedStyle;
use crate::types::ClassList;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Resolvable Trait
// ============================================================================

/// Trait for configurations that resolve to a styled surface
///
/// Resolution is pure and infallible: invalid values degrade to defaults.
///
/// # Example
///
/// ```rust
/// use vitrine_core::{ContainerConfig, Resolvable, VisualStatus};
///
/// let config = ContainerConfig::new().with_status(VisualStatus::Error);
/// let surface = config.resolve_surface();
/// assert_eq!(surface.style.border_color, "#DC2626");
/// ```
pub trait Resolvable {
    /// Inline style of the outer surface
    fn surface_style(&self) -> ResolvedStyle;

    /// Class tokens of the outer surface
    fn surface_classes(&self) -> ClassList;

    /// Style and classes together
    fn resolve_surface(&self) -> ResolvedContainer {
        ResolvedContainer {
            style: self.surface_style(),
            classes: self.surface_classes(),
        }
    }
}

impl Resolvable for ContainerConfig {
    fn surface_style(&self) -> ResolvedStyle {
        self.resolve_style()
    }

    fn surface_classes(&self) -> ClassList {
        self.resolve_classes()
    }
}

impl Resolvable for InputConfig {
    fn surface_style(&self) -> ResolvedStyle {
        self.resolve_style()
    }

    fn surface_classes(&self) -> ClassList {
        self.resolve_wrapper_classes()
    }
}

// ============================================================================
// JsonConfig Trait
// ============================================================================

/// Trait for configurations that can be stored as JSON
///
/// Missing fields take their documented defaults.
pub trait JsonConfig: Serialize + DeserializeOwned + Sized {
    /// Save to a JSON string
    fn to_json(&self) -> KitResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> KitResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

impl JsonConfig for ContainerConfig {}

impl JsonConfig for InputConfig {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VisualStatus;

    #[test]
    fn test_resolvable_container() {
        let surface = ContainerConfig::default().resolve_surface();
        assert_eq!(surface.style.border_radius, "12px");
        assert!(surface.classes.contains("shadow-md"));
    }

    #[test]
    fn test_resolvable_input() {
        let surface = InputConfig::default()
            .with_status(VisualStatus::Success)
            .resolve_surface();
        assert_eq!(surface.style.border_color, "#16A34A");
        assert!(surface.classes.contains("shadow-none"));
    }

    #[test]
    fn test_json_round_trip_keeps_config() {
        let config = ContainerConfig::new().with_hover(true).full_width();
        let json = config.to_json().unwrap();
        assert_eq!(ContainerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let config = InputConfig::from_json("{}").unwrap();
        assert_eq!(config, InputConfig::default());
    }

    #[test]
    fn test_json_invalid_status_is_error() {
        let err = InputConfig::from_json(r#"{ "status": "danger" }"#).unwrap_err();
        assert!(err.to_string().contains("JSON serialization error"));
    }
}
