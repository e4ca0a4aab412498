//! # Input Field Component
//!
//! A styled single-line input with optional password reveal and clear
//! buttons, leading/trailing decorations and an error line.
//!
//! ## Value Ownership
//!
//! Passing `value` makes the field controlled: the caller owns the text and
//! must feed every [`ChangeEvent`] back in. Without `value` the field keeps
//! its own text, seeded from `default_value`. The mode is fixed on the first
//! render.

use dioxus::prelude::*;
use vitrine_core::input::{CLEAR_LABEL, ERROR_TEXT_CLASSES};
use vitrine_core::{ChangeEvent, InputConfig, KeyAction};

use crate::components::icons::{CloseIcon, EyeIcon, EyeSlashIcon};
use crate::hooks::use_input_controller;

// ============================================================================
// Input Field Component
// ============================================================================

/// Properties for InputField component
#[derive(Props, Clone, PartialEq)]
pub struct InputFieldProps {
    /// Appearance and behaviour
    #[props(default)]
    pub config: InputConfig,

    /// Controlled value
    #[props(default)]
    pub value: Option<String>,

    /// Initial value of an uncontrolled field
    #[props(default)]
    pub default_value: Option<String>,

    /// Change handler, also called with an empty value on clear
    #[props(default)]
    pub on_change: Option<EventHandler<ChangeEvent>>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: Option<EventHandler<KeyboardEvent>>,

    /// Decoration before the text
    #[props(default)]
    pub leading: Option<Element>,

    /// Decoration after the text
    #[props(default)]
    pub trailing: Option<Element>,

    /// Attributes forwarded to the `input` element
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Styled input field
#[component]
pub fn InputField(props: InputFieldProps) -> Element {
    let controller = use_input_controller(
        props.config.clone(),
        props.value.clone(),
        props.default_value.clone(),
    );
    let view = controller.view();
    let config = view.config();

    let wrapper = config.resolve_wrapper_classes().to_string();
    let wrapper_style = config.resolve_style().to_css();
    let field_class = view.field_classes(props.leading.is_some()).to_string();
    let field_type = view.effective_type().to_string();
    let current = view.current_value().to_string();
    let text_color = config.text_color.clone();
    let placeholder = (!config.placeholder.is_empty()).then(|| config.placeholder.clone());
    let name = config.name.clone();
    let disabled = config.disabled;
    let read_only = config.read_only;
    let error_text = config.error_text().map(str::to_string);

    let show_clear = view.show_clear();
    let show_reveal = view.reveal_enabled();
    let show_secret = view.show_secret();
    let reveal_label = view.reveal_label();
    let reveal_class = build_action_class(view.reveal_position_class());
    let clear_class = build_action_class("right-2");
    let action_style = build_action_style(&text_color);

    let on_change = props.on_change;
    let on_enter = props.on_enter;

    let handle_input = {
        let controller = controller.clone();
        move |e: FormEvent| {
            let event = controller.input(e.value());
            if let Some(handler) = on_change {
                handler.call(event);
            }
        }
    };

    let handle_keydown = {
        let controller = controller.clone();
        move |e: KeyboardEvent| {
            if controller.key(&e.key().to_string()) == KeyAction::Submit {
                if let Some(handler) = on_enter {
                    handler.call(e);
                }
            }
        }
    };

    let handle_clear = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            if let Some(event) = controller.clear() {
                if let Some(handler) = on_change {
                    handler.call(event);
                }
            }
        }
    };

    let handle_reveal = move |_: MouseEvent| {
        controller.toggle_secret();
    };

    rsx! {
        div {
            class: "w-full",

            div {
                class: "{wrapper}",
                style: "{wrapper_style}",

                // Leading decoration
                if let Some(leading) = props.leading.clone() {
                    span {
                        class: "ml-2 inline-flex items-center text-gray-500",
                        {leading}
                    }
                }

                input {
                    class: "{field_class}",
                    r#type: "{field_type}",
                    name: name,
                    placeholder: placeholder,
                    value: "{current}",
                    disabled: disabled,
                    readonly: read_only,
                    style: "color: {text_color};",
                    oninput: handle_input,
                    onkeydown: handle_keydown,
                    ..props.attributes,
                }

                // Clear button
                if show_clear {
                    button {
                        r#type: "button",
                        class: "{clear_class}",
                        style: "{action_style}",
                        aria_label: CLEAR_LABEL,
                        onclick: handle_clear,
                        CloseIcon {}
                    }
                }

                // Reveal toggle
                if show_reveal {
                    button {
                        r#type: "button",
                        class: "{reveal_class}",
                        style: "{action_style}",
                        aria_label: reveal_label,
                        onclick: handle_reveal,
                        if show_secret {
                            EyeSlashIcon {}
                        } else {
                            EyeIcon {}
                        }
                    }
                }

                // Trailing decoration
                if let Some(trailing) = props.trailing.clone() {
                    span {
                        class: "mr-2 inline-flex items-center text-gray-500",
                        {trailing}
                    }
                }
            }

            // Error line
            if let Some(error) = error_text {
                p {
                    class: ERROR_TEXT_CLASSES,
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build the class string of a trailing action button
fn build_action_class(position: &str) -> String {
    let classes = [
        "absolute",
        "top-1/2",
        "-translate-y-1/2",
        position,
        "flex",
        "items-center",
        "justify-center",
        "p-0",
        "m-0",
        "border-0",
        "bg-transparent",
        "focus:outline-none",
        "hover:outline-none",
        "active:outline-none",
        "focus:ring-0",
    ];

    classes.join(" ")
}

/// Build the inline style of a trailing action button
fn build_action_style(text_color: &str) -> String {
    format!(
        "color: {}; background: transparent; border: none; outline: none; box-shadow: none; -webkit-appearance: none; appearance: none;",
        text_color
    )
}

// ============================================================================
// Tests
// ============================================================================
