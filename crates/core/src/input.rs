//! Input field value ownership and affordances
//!
//! An [`InputController`] owns the text of an input when nobody else does,
//! tracks the password reveal toggle, and derives which trailing buttons are
//! visible. Whether the value is owned by the caller or by the controller is
//! decided once at construction and encoded in [`InputValue`].

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_TEXT, NEUTRAL_BORDER, WHITE};
use crate::error::{KitError, KitResult};
use crate::style::{ResolvedStyle, StyleOverride, SurfaceInputs};
use crate::types::{ClassList, Dimension, VisualStatus};

// ============================================================================
// Constants
// ============================================================================

/// Field type that enables the reveal toggle
pub const PASSWORD_TYPE: &str = "password";

/// Field type used while a password is revealed
pub const TEXT_TYPE: &str = "text";

/// Key that submits the field
pub const ENTER_KEY: &str = "Enter";

/// Accessible label of the clear button
pub const CLEAR_LABEL: &str = "Clear";

/// Accessible label of the reveal button while content is hidden
pub const SHOW_LABEL: &str = "Show content";

/// Accessible label of the reveal button while content is visible
pub const HIDE_LABEL: &str = "Hide content";

/// Base classes of the input wrapper
pub const WRAPPER_BASE_CLASSES: &str = "relative flex items-center transition duration-150";

/// Base classes of the text field itself
pub const FIELD_BASE_CLASSES: &str = "flex-1 bg-transparent outline-none px-2 py-2";

/// Classes of the auxiliary error line
pub const ERROR_TEXT_CLASSES: &str = "mt-1 text-xs text-red-600";

// ============================================================================
// Configuration
// ============================================================================

/// Appearance and behaviour configuration of an input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Declared field type (`text`, `password`, `email`, ...)
    pub field_type: String,
    pub placeholder: String,
    pub name: Option<String>,
    /// Wrapper background color, must be a hex color or white is used
    pub bg_color: String,
    /// Text color, passed through unchanged
    pub text_color: String,
    /// Border color, must be a hex color or neutral gray is used
    pub border_color: String,
    pub border_size: Dimension,
    pub rounded: Dimension,
    pub shadow: bool,
    pub status: VisualStatus,
    /// Shown below the field when the status is `error`
    pub error_text: String,
    /// Show the reveal toggle on password fields
    pub eye_button: bool,
    /// Show a clear button while the field has content
    pub clear_button: bool,
    pub disabled: bool,
    pub read_only: bool,
    /// Extra classes for the wrapper
    pub class: String,
    /// Extra classes for the text field
    pub input_class: String,
    /// Wrapper style fields that win over computed ones
    pub style: StyleOverride,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            field_type: TEXT_TYPE.to_string(),
            placeholder: String::new(),
            name: None,
            bg_color: WHITE.to_string(),
            text_color: DEFAULT_TEXT.to_string(),
            border_color: NEUTRAL_BORDER.to_string(),
            border_size: Dimension::Number(1.0),
            rounded: Dimension::Number(12.0),
            shadow: false,
            status: VisualStatus::Default,
            error_text: String::new(),
            eye_button: false,
            clear_button: false,
            disabled: false,
            read_only: false,
            class: String::new(),
            input_class: String::new(),
            style: StyleOverride::default(),
        }
    }
}

impl InputConfig {
    /// Create an input config with default appearance
    pub fn new() -> Self {
        Self::default()
    }

    /// Password field with the reveal toggle enabled
    pub fn password() -> Self {
        Self {
            field_type: PASSWORD_TYPE.to_string(),
            eye_button: true,
            ..Self::default()
        }
    }

    /// Set the declared field type
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: VisualStatus) -> Self {
        self.status = status;
        self
    }

    /// Enable or disable the clear button
    pub fn with_clear_button(mut self, enabled: bool) -> Self {
        self.clear_button = enabled;
        self
    }

    /// Set the error line text
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Resolve the wrapper style
    ///
    /// Background and border colors are validated the same way as for
    /// containers.
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

    /// Resolve the wrapper class tokens
    pub fn resolve_wrapper_classes(&self) -> ClassList {
        let mut classes = ClassList::from(WRAPPER_BASE_CLASSES);
        classes
            .push(if self.shadow { "shadow-md" } else { "shadow-none" })
            .push(&self.class);
        classes
    }

    /// Error line to render below the field, if any
    pub fn error_text(&self) -> Option<&str> {
        if self.status == VisualStatus::Error && !self.error_text.is_empty() {
            Some(&self.error_text)
        } else {
            None
        }
    }

    /// Whether the reveal toggle applies to this field
    pub fn reveal_enabled(&self) -> bool {
        self.eye_button && self.field_type == PASSWORD_TYPE
    }
}

// ============================================================================
// Value Ownership
// ============================================================================

/// Who owns the text of an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    /// The caller supplies every value and feeds changes back in
    Controlled(String),
    /// The controller holds the text itself
    Uncontrolled(String),
}

impl InputValue {
    /// Pick the ownership mode from the caller's props
    ///
    /// A supplied `value` means controlled; otherwise the controller owns
    /// the text, seeded from `default_value`.
    pub fn from_props(value: Option<String>, default_value: Option<String>) -> Self {
        match value {
            Some(value) => InputValue::Controlled(value),
            None => InputValue::Uncontrolled(default_value.unwrap_or_default()),
        }
    }

    /// Current text
    pub fn as_str(&self) -> &str {
        match self {
            InputValue::Controlled(value) | InputValue::Uncontrolled(value) => value,
        }
    }

    /// Whether the caller owns the value
    pub fn is_controlled(&self) -> bool {
        matches!(self, InputValue::Controlled(_))
    }

    fn mode_name(&self) -> &'static str {
        if self.is_controlled() {
            "controlled"
        } else {
            "uncontrolled"
        }
    }
}

/// Value change reported to the caller
///
/// Clearing the field produces the same event as typing it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

impl ChangeEvent {
    /// Create a change event
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Result of a key press on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The submit callback should run
    Submit,
    /// Nothing to do
    Ignore,
}

/// Trailing space reserved in the text field for action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingReserve {
    None,
    /// Room for one button
    Single,
    /// Room for both buttons
    Double,
}

impl TrailingReserve {
    /// Padding class token, empty when nothing is reserved
    pub fn class(&self) -> &'static str {
        match self {
            TrailingReserve::None => "",
            TrailingReserve::Single => "pr-9",
            TrailingReserve::Double => "pr-16",
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Per-instance state of an input field
#[derive(Debug, Clone, PartialEq)]
pub struct InputController {
    config: InputConfig,
    value: InputValue,
    show_secret: bool,
}

impl InputController {
    /// Create a controller, fixing the ownership mode for its lifetime
    pub fn new(config: InputConfig, value: Option<String>, default_value: Option<String>) -> Self {
        Self {
            config,
            value: InputValue::from_props(value, default_value),
            show_secret: false,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Replace the configuration, keeping value and reveal state
    pub fn set_config(&mut self, config: InputConfig) {
        self.config = config;
    }

    /// Current text
    pub fn current_value(&self) -> &str {
        self.value.as_str()
    }

    /// Whether the caller owns the value
    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Feed the caller's latest `value` prop back in
    ///
    /// Controlled inputs take the new value. Uncontrolled inputs ignore a
    /// missing value. A change in presence would switch modes and is
    /// rejected; the controller keeps its original mode.
    pub fn sync_external(&mut self, external: Option<&str>) -> KitResult<()> {
        match (self.is_controlled(), external) {
            (true, Some(value)) => {
                if let InputValue::Controlled(current) = &mut self.value {
                    if current.as_str() != value {
                        *current = value.to_string();
                    }
                }
                Ok(())
            }
            (false, None) => Ok(()),
            (true, None) => Err(self.mode_switch("uncontrolled")),
            (false, Some(_)) => Err(self.mode_switch("controlled")),
        }
    }

    /// Handle a keystroke that produced `value`
    ///
    /// Uncontrolled inputs store the value; both modes report it.
    pub fn handle_input(&mut self, value: impl Into<String>) -> ChangeEvent {
        let value = value.into();
        if let InputValue::Uncontrolled(held) = &mut self.value {
            held.clone_from(&value);
        }
        ChangeEvent { value }
    }

    /// Handle a key press by key name
    pub fn handle_key(&self, key: &str) -> KeyAction {
        if key == ENTER_KEY {
            KeyAction::Submit
        } else {
            KeyAction::Ignore
        }
    }

    /// Clear the field
    ///
    /// Returns `None` when the clear button is not visible.
    pub fn clear(&mut self) -> Option<ChangeEvent> {
        if !self.show_clear() {
            return None;
        }
        Some(self.handle_input(String::new()))
    }

    /// Flip the password reveal toggle, returning the new state
    pub fn toggle_secret(&mut self) -> bool {
        self.show_secret = !self.show_secret;
        self.show_secret
    }

    /// Whether the password is currently revealed
    pub fn show_secret(&self) -> bool {
        self.show_secret
    }

    /// Whether the reveal toggle is visible
    pub fn reveal_enabled(&self) -> bool {
        self.config.reveal_enabled()
    }

    /// Whether the clear button is visible
    pub fn show_clear(&self) -> bool {
        self.config.clear_button
            && !self.current_value().is_empty()
            && !self.config.disabled
            && !self.config.read_only
    }

    /// Field type to render
    pub fn effective_type(&self) -> &str {
        if self.reveal_enabled() {
            if self.show_secret {
                TEXT_TYPE
            } else {
                PASSWORD_TYPE
            }
        } else {
            &self.config.field_type
        }
    }

    /// Trailing space to reserve for visible buttons
    pub fn trailing_reserve(&self) -> TrailingReserve {
        match (self.reveal_enabled(), self.show_clear()) {
            (true, true) => TrailingReserve::Double,
            (true, false) | (false, true) => TrailingReserve::Single,
            (false, false) => TrailingReserve::None,
        }
    }

    /// Accessible label of the reveal button
    pub fn reveal_label(&self) -> &'static str {
        if self.show_secret {
            HIDE_LABEL
        } else {
            SHOW_LABEL
        }
    }

    /// Horizontal position class of the reveal button
    pub fn reveal_position_class(&self) -> &'static str {
        if self.show_clear() { "right-8" } else { "right-2" }
    }

    /// Class tokens of the text field
    pub fn field_classes(&self, has_leading: bool) -> ClassList {
        let mut classes = ClassList::from(FIELD_BASE_CLASSES);
        classes
            .push(self.trailing_reserve().class())
            .push_if(has_leading, "pl-2")
            .push(&self.config.input_class);
        classes
    }

    fn mode_switch(&self, to: &'static str) -> KitError {
        let field = self
            .config
            .name
            .clone()
            .unwrap_or_else(|| self.config.field_type.clone());
        KitError::mode_switch(field, self.value.mode_name(), to)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn uncontrolled(config: InputConfig) -> InputController {
        InputController::new(config, None, None)
    }

    #[test]
    fn test_mode_from_props() {
        assert!(InputValue::from_props(Some("a".into()), None).is_controlled());
        assert!(InputValue::from_props(Some(String::new()), Some("b".into())).is_controlled());
        assert_eq!(
            InputValue::from_props(None, Some("seed".into())),
            InputValue::Uncontrolled("seed".into())
        );
        assert_eq!(
            InputValue::from_props(None, None),
            InputValue::Uncontrolled(String::new())
        );
    }

    #[test]
    fn test_uncontrolled_input_stores_value() {
        let mut input = uncontrolled(InputConfig::new());
        let event = input.handle_input("hello");
        assert_eq!(event, ChangeEvent::new("hello"));
        assert_eq!(input.current_value(), "hello");
    }

    #[test]
    fn test_controlled_input_reports_without_storing() {
        let mut input = InputController::new(InputConfig::new(), Some("fixed".into()), None);
        let event = input.handle_input("fixed!");
        assert_eq!(event.value, "fixed!");
        assert_eq!(input.current_value(), "fixed");

        input.sync_external(Some("fixed!")).unwrap();
        assert_eq!(input.current_value(), "fixed!");
    }

    #[test]
    fn test_mode_switch_is_rejected() {
        let mut input = InputController::new(InputConfig::new(), Some("x".into()), None);
        let err = input.sync_external(None).unwrap_err();
        assert!(err.is_config());
        assert!(input.is_controlled());
        assert_eq!(input.current_value(), "x");

        let mut input = uncontrolled(InputConfig::new());
        assert!(input.sync_external(Some("y")).is_err());
        assert!(!input.is_controlled());
        assert!(input.sync_external(None).is_ok());
    }

    #[test]
    fn test_clear_uncontrolled_without_initial_value() {
        let mut input = uncontrolled(InputConfig::new().with_clear_button(true));
        assert_eq!(input.clear(), None);

        input.handle_input("abc");
        let event = input.clear().unwrap();
        assert_eq!(event.value, "");
        assert_eq!(input.current_value(), "");
    }

    #[test]
    fn test_clear_controlled_reports_empty_value() {
        let config = InputConfig::new().with_clear_button(true);
        let mut input = InputController::new(config, Some("abc".into()), None);
        assert_eq!(input.clear(), Some(ChangeEvent::new("")));
        assert_eq!(input.current_value(), "abc");
    }

    #[test]
    fn test_clear_matches_manual_empty_edit() {
        let config = InputConfig::new().with_clear_button(true);
        let mut typed = InputController::new(config.clone(), None, Some("abc".into()));
        let mut cleared = InputController::new(config, None, Some("abc".into()));
        assert_eq!(Some(typed.handle_input("")), cleared.clear());
    }

    #[test]
    fn test_enter_key_submits() {
        let input = uncontrolled(InputConfig::new());
        assert_eq!(input.handle_key("Enter"), KeyAction::Submit);
        assert_eq!(input.handle_key("a"), KeyAction::Ignore);
        assert_eq!(input.handle_key("enter"), KeyAction::Ignore);
    }

    #[test]
    fn test_password_reveal_toggle() {
        let mut input = uncontrolled(InputConfig::password());
        assert_eq!(input.effective_type(), "password");
        assert_eq!(input.reveal_label(), "Show content");

        assert!(input.toggle_secret());
        assert_eq!(input.effective_type(), "text");
        assert_eq!(input.reveal_label(), "Hide content");

        assert!(!input.toggle_secret());
        assert_eq!(input.effective_type(), "password");
    }

    #[test]
    fn test_reveal_requires_password_and_eye_button() {
        let mut input = uncontrolled(InputConfig::new().with_type("email"));
        input.toggle_secret();
        assert!(!input.reveal_enabled());
        assert_eq!(input.effective_type(), "email");

        let mut config = InputConfig::password();
        config.eye_button = false;
        let mut input = uncontrolled(config);
        input.toggle_secret();
        assert_eq!(input.effective_type(), "password");
    }

    #[test]
    fn test_clear_visibility_combinations() {
        for clear_button in [false, true] {
            for has_value in [false, true] {
                for disabled in [false, true] {
                    for read_only in [false, true] {
                        let config = InputConfig {
                            clear_button,
                            disabled,
                            read_only,
                            ..Default::default()
                        };
                        let seed = if has_value { "x" } else { "" };
                        let input = InputController::new(config, None, Some(seed.into()));
                        assert_eq!(
                            input.show_clear(),
                            clear_button && has_value && !disabled && !read_only,
                            "clear={clear_button} value={has_value} disabled={disabled} read_only={read_only}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_trailing_reserve() {
        let input = uncontrolled(InputConfig::new());
        assert_eq!(input.trailing_reserve(), TrailingReserve::None);

        let input = uncontrolled(InputConfig::password());
        assert_eq!(input.trailing_reserve(), TrailingReserve::Single);
        assert_eq!(input.reveal_position_class(), "right-2");

        let config = InputConfig::new().with_clear_button(true);
        let input = InputController::new(config, None, Some("x".into()));
        assert_eq!(input.trailing_reserve(), TrailingReserve::Single);

        let config = InputConfig::password().with_clear_button(true);
        let input = InputController::new(config, None, Some("secret".into()));
        assert_eq!(input.trailing_reserve(), TrailingReserve::Double);
        assert_eq!(input.trailing_reserve().class(), "pr-16");
        assert_eq!(input.reveal_position_class(), "right-8");
    }

    #[test]
    fn test_field_classes() {
        let config = InputConfig {
            input_class: "font-mono".to_string(),
            ..InputConfig::password()
        };
        let input = uncontrolled(config);
        assert_eq!(
            input.field_classes(true).to_string(),
            "flex-1 bg-transparent outline-none px-2 py-2 pr-9 pl-2 font-mono"
        );
        assert!(!input.field_classes(false).contains("pl-2"));
    }

    #[test]
    fn test_error_text() {
        let config = InputConfig::new().with_error_text("Required");
        assert_eq!(config.error_text(), None);

        let config = config.with_status(VisualStatus::Error);
        assert_eq!(config.error_text(), Some("Required"));

        let config = InputConfig::new().with_status(VisualStatus::Error);
        assert_eq!(config.error_text(), None);
    }

    #[test]
    fn test_wrapper_style_validates_colors() {
        let config = InputConfig {
            bg_color: "notacolor".to_string(),
            border_color: "#GGG".to_string(),
            text_color: "inherit".to_string(),
            ..Default::default()
        };
        let style = config.resolve_style();
        assert_eq!(style.background_color, "#FFFFFF");
        assert_eq!(style.border_color, "#E5E7EB");
        assert_eq!(style.color, "inherit");

        let style = config.with_status(VisualStatus::Warning).resolve_style();
        assert_eq!(style.border_color, "#D97706");
    }

    #[test]
    fn test_wrapper_classes() {
        let config = InputConfig {
            class: "mb-2".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_wrapper_classes().to_string(),
            "relative flex items-center transition duration-150 shadow-none mb-2"
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: InputConfig =
            serde_json::from_str(r#"{ "field_type": "password", "eye_button": true }"#).unwrap();
        let input = uncontrolled(config);
        assert!(input.reveal_enabled());
        assert_eq!(input.config().border_size.to_px(), "1px");
    }
}
