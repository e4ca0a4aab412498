//! Inline style records
//!
//! A [`ResolvedStyle`] is recomputed from configuration on every change and
//! rendered to an inline `style` attribute. Callers may pass a
//! [`StyleOverride`]; it is merged last and wins over every computed field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::{hex_or, NEUTRAL_BORDER, WHITE};
use crate::types::{Dimension, VisualStatus};

/// Border style emitted by every component
pub const BORDER_STYLE: &str = "solid";

/// Resolved inline style of a component surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub background_color: String,
    pub color: String,
    pub border_color: String,
    pub border_width: String,
    pub border_style: String,
    pub border_radius: String,
    /// Extra declarations carried over from a [`StyleOverride`]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// Caller-supplied style fields that replace computed ones
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_radius: Option<String>,
    /// Any other CSS declarations, keyed by property name
    pub extra: BTreeMap<String, String>,
}

impl StyleOverride {
    /// Create an empty override
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary CSS declaration
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(property.into(), value.into());
        self
    }

    /// Whether the override changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Surface inputs shared by the container and the input wrapper
pub struct SurfaceInputs<'a> {
    pub bg_color: &'a str,
    pub text_color: &'a str,
    pub border_color: &'a str,
    pub border_size: &'a Dimension,
    pub rounded: &'a Dimension,
    pub status: VisualStatus,
}

impl ResolvedStyle {
    /// Resolve a surface style
    ///
    /// Background and border colors go through hex validation, falling back
    /// to white and neutral gray. A non-default status replaces the border
    /// color. Text color is passed through as given.
    pub fn resolve(inputs: &SurfaceInputs<'_>) -> Self {
        let border_color = inputs
            .status
            .border_color()
            .unwrap_or(inputs.border_color);

        Self {
            background_color: hex_or(inputs.bg_color, WHITE).to_string(),
            color: inputs.text_color.to_string(),
            border_color: hex_or(border_color, NEUTRAL_BORDER).to_string(),
            border_width: inputs.border_size.to_px(),
            border_style: BORDER_STYLE.to_string(),
            border_radius: inputs.rounded.to_px(),
            extra: BTreeMap::new(),
        }
    }

    /// Apply `overrides` on top of this style
    pub fn merge(mut self, overrides: &StyleOverride) -> Self {
        let fields = [
            (&mut self.background_color, &overrides.background_color),
            (&mut self.color, &overrides.color),
            (&mut self.border_color, &overrides.border_color),
            (&mut self.border_width, &overrides.border_width),
            (&mut self.border_style, &overrides.border_style),
            (&mut self.border_radius, &overrides.border_radius),
        ];
        for (field, replacement) in fields {
            if let Some(value) = replacement {
                *field = value.clone();
            }
        }

        for (property, value) in &overrides.extra {
            self.extra.insert(property.clone(), value.clone());
        }
        self
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "background-color: {}; color: {}; border-color: {}; border-width: {}; border-style: {}; border-radius: {};",
            self.background_color,
            self.color,
            self.border_color,
            self.border_width,
            self.border_style,
            self.border_radius,
        );
        for (property, value) in &self.extra {
            css.push_str(&format!(" {}: {};", property, value));
        }
        css
    }
}

// ============================================================================
// Tests
// ============================================================================
