//! # Container Component
//!
//! A styled box whose inline style and classes come from a
//! [`ContainerConfig`]. Unrecognized attributes are forwarded to the
//! rendered `div`.
//!
//! ## Resolution
//!
//! - Background and border colors must be hex colors, otherwise white and
//!   neutral gray are used
//! - A non-default status replaces the border color
//! - Caller style overrides win over everything computed

use dioxus::prelude::*;
use vitrine_core::ContainerConfig;

/// Properties for Container component
#[derive(Props, Clone, PartialEq)]
pub struct ContainerProps {
    /// Appearance and layout
    #[props(default)]
    pub config: ContainerConfig,

    /// Click handler
    #[props(default)]
    pub on_click: Option<EventHandler<MouseEvent>>,

    /// Attributes forwarded to the rendered element
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,

    /// Nested content
    pub children: Element,
}

/// Styled container
#[component]
pub fn Container(props: ContainerProps) -> Element {
    let resolved = props.config.resolve();
    let class = resolved.classes.to_string();
    let style = resolved.style.to_css();

    match props.on_click {
        Some(handler) => rsx! {
            div {
                class: "{class}",
                style: "{style}",
                onclick: move |e: MouseEvent| handler.call(e),
                ..props.attributes,
                {props.children}
            }
        },
        None => rsx! {
            div {
                class: "{class}",
                style: "{style}",
                ..props.attributes,
                {props.children}
            }
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
