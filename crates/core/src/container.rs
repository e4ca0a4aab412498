//! Container style resolution
//!
//! Maps a [`ContainerConfig`] to an inline style and an ordered list of
//! structural class tokens. Nothing here fails: invalid colors, dimensions
//! and padding tags resolve to safe defaults.

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_TEXT, NEUTRAL_BORDER, WHITE};
use crate::style::{ResolvedStyle, StyleOverride, SurfaceInputs};
use crate::types::{ClassList, Dimension, PaddingSize, VisualStatus};

/// Base classes every container carries
pub const CONTAINER_BASE_CLASSES: &str = "relative transition duration-150";

/// Shadow token when the shadow is on
pub const SHADOW_CLASS: &str = "shadow-md";

/// Shadow token when the shadow is off
pub const NO_SHADOW_CLASS: &str = "shadow-none";

/// Lift applied on hover
pub const HOVER_LIFT_CLASS: &str = "hover:-translate-y-0.5";

/// Larger shadow applied on hover when the shadow is on
pub const HOVER_SHADOW_CLASS: &str = "hover:shadow-lg";

/// Width token for full-width containers
pub const FULL_WIDTH_CLASS: &str = "w-full";

/// Appearance and layout configuration of a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Background color, must be a hex color or white is used
    pub bg_color: String,
    /// Text color, passed through unchanged
    pub text_color: String,
    /// Border color, must be a hex color or neutral gray is used
    pub border_color: String,
    /// Border width in pixels
    pub border_size: Dimension,
    /// Corner radius in pixels
    pub rounded: Dimension,
    pub shadow: bool,
    pub status: VisualStatus,
    pub hover: bool,
    pub padding: PaddingSize,
    pub full_width: bool,
    /// Extra class tokens appended after the computed ones
    pub class: String,
    /// Style fields that win over computed ones
    pub style: StyleOverride,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            bg_color: WHITE.to_string(),
            text_color: DEFAULT_TEXT.to_string(),
            border_color: NEUTRAL_BORDER.to_string(),
            border_size: Dimension::Number(1.0),
            rounded: Dimension::Number(12.0),
            shadow: true,
            status: VisualStatus::Default,
            hover: false,
            padding: PaddingSize::Md,
            full_width: false,
            class: String::new(),
            style: StyleOverride::default(),
        }
    }
}

/// Output of container resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContainer {
    pub style: ResolvedStyle,
    pub classes: ClassList,
}

impl ContainerConfig {
    /// Create a container config with default appearance
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status
    pub fn with_status(mut self, status: VisualStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the padding size
    pub fn with_padding(mut self, padding: impl Into<PaddingSize>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Enable or disable the hover effect
    pub fn with_hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    /// Enable or disable the shadow
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Stretch to the full available width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Resolve the inline style
    pub fn resolve_style(&self) -> ResolvedStyle {
        ResolvedStyle::resolve(&SurfaceInputs {
            bg_color: &self.bg_color,
            text_color: &self.text_color,
            border_color: &self.border_color,
            border_size: &self.border_size,
            rounded: &self.rounded,
            status: self.status,
        })
        .merge(&self.style)
    }

    /// Resolve the structural class tokens
    pub fn resolve_classes(&self) -> ClassList {
        let mut classes = ClassList::from(CONTAINER_BASE_CLASSES);
        classes
            .push(if self.shadow {
                SHADOW_CLASS
            } else {
                NO_SHADOW_CLASS
            })
            .push_if(self.hover, HOVER_LIFT_CLASS)
            .push_if(self.hover && self.shadow, HOVER_SHADOW_CLASS)
            .push(self.padding.class())
            .push_if(self.full_width, FULL_WIDTH_CLASS)
            .push(&self.class);
        classes
    }

    /// Resolve both style and classes
    pub fn resolve(&self) -> ResolvedContainer {
        ResolvedContainer {
            style: self.resolve_style(),
            classes: self.resolve_classes(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_resolution() {
        let resolved = ContainerConfig::default().resolve();
        assert_eq!(resolved.style.background_color, "#FFFFFF");
        assert_eq!(resolved.style.color, "#111827");
        assert_eq!(resolved.style.border_color, "#E5E7EB");
        assert_eq!(resolved.style.border_width, "1px");
        assert_eq!(resolved.style.border_radius, "12px");
        assert_eq!(
            resolved.classes.to_string(),
            "relative transition duration-150 shadow-md p-4"
        );
    }

    #[test]
    fn test_error_status_overrides_border() {
        for border in ["#00FF00", "#abc", "not-a-color", ""] {
            let config = ContainerConfig {
                border_color: border.to_string(),
                status: VisualStatus::Error,
                ..Default::default()
            };
            assert_eq!(config.resolve_style().border_color, "#DC2626");
        }
    }

    #[test]
    fn test_invalid_background_falls_back_to_white() {
        let config = ContainerConfig {
            bg_color: "notacolor".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_style().background_color, "#FFFFFF");
    }

    #[test]
    fn test_invalid_border_falls_back_to_gray() {
        let config = ContainerConfig {
            border_color: "#12".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_style().border_color, "#E5E7EB");
    }

    #[test]
    fn test_border_size_parsing() {
        let config = ContainerConfig {
            border_size: Dimension::from("abc"),
            rounded: Dimension::from("2.5"),
            ..Default::default()
        };
        let style = config.resolve_style();
        assert_eq!(style.border_width, "0px");
        assert_eq!(style.border_radius, "2.5px");

        let config = ContainerConfig {
            border_size: Dimension::from("2.5"),
            ..Default::default()
        };
        assert_eq!(config.resolve_style().border_width, "2.5px");
    }

    #[test]
    fn test_shadow_tokens() {
        let classes = ContainerConfig::new().with_shadow(false).resolve_classes();
        assert!(classes.contains("shadow-none"));
        assert!(!classes.contains("shadow-md"));
    }

    #[test]
    fn test_hover_tokens() {
        let classes = ContainerConfig::new().with_hover(true).resolve_classes();
        assert!(classes.contains("hover:-translate-y-0.5"));
        assert!(classes.contains("hover:shadow-lg"));

        let classes = ContainerConfig::new()
            .with_hover(true)
            .with_shadow(false)
            .resolve_classes();
        assert!(classes.contains("hover:-translate-y-0.5"));
        assert!(!classes.contains("hover:shadow-lg"));

        let classes = ContainerConfig::new().with_hover(false).resolve_classes();
        assert!(!classes.contains("hover:-translate-y-0.5"));
        assert!(!classes.contains("hover:shadow-lg"));
    }

    #[test]
    fn test_padding_and_width_tokens() {
        let classes = ContainerConfig::new()
            .with_padding("lg")
            .full_width()
            .resolve_classes();
        assert!(classes.contains("p-6"));
        assert!(classes.contains("w-full"));

        let classes = ContainerConfig::new().with_padding("xxl").resolve_classes();
        assert!(classes.contains("p-4"));
    }

    #[test]
    fn test_caller_classes_are_appended_and_deduped() {
        let config = ContainerConfig {
            class: "card p-4 card".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_classes().to_string(),
            "relative transition duration-150 shadow-md p-4 card"
        );
    }

    #[test]
    fn test_style_override_wins() {
        let config = ContainerConfig {
            status: VisualStatus::Warning,
            style: StyleOverride {
                border_color: Some("#000000".to_string()),
                background_color: Some("transparent".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let style = config.resolve_style();
        assert_eq!(style.border_color, "#000000");
        assert_eq!(style.background_color, "transparent");
    }

    #[test]
    fn test_config_from_json() {
        let config: ContainerConfig = serde_json::from_str(
            r#"{ "status": "success", "padding": "sm", "border_size": "2", "hover": true }"#,
        )
        .unwrap();
        assert_eq!(config.status, VisualStatus::Success);
        assert_eq!(config.padding, PaddingSize::Sm);
        assert!(config.shadow);

        let resolved = config.resolve();
        assert_eq!(resolved.style.border_color, "#16A34A");
        assert_eq!(resolved.style.border_width, "2px");
        assert!(resolved.classes.contains("p-3"));
    }
}
