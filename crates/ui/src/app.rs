//! Gallery Application for Vitrine
//!
//! This module contains the root Dioxus component of the desktop gallery.
//! It renders every container status and padding, and input fields in
//! controlled, uncontrolled, password and error modes.

use dioxus::prelude::*;
use vitrine_core::{
    ChangeEvent, ContainerConfig, InputConfig, JsonConfig, PaddingSize, StyleOverride,
    VisualStatus,
};

use crate::components::{Container, InputField};

/// Container loaded from JSON to show config files in use
const THEMED_CARD_JSON: &str = r##"{
    "bg_color": "#0F172A",
    "text_color": "#F8FAFC",
    "border_color": "#334155",
    "border_size": "2",
    "rounded": 16,
    "hover": true,
    "padding": "lg"
}"##;

// ============================================================================
// Main App Component
// ============================================================================

/// Root gallery component
#[component]
pub fn Gallery() -> Element {
    use_effect(|| {
        tracing::info!("Vitrine gallery initialized");
    });

    rsx! {
        main {
            class: "gallery p-6",

            h1 { class: "gallery-title", "Vitrine" }

            ContainerSection {}
            InputSection {}
        }
    }
}

// ============================================================================
// Container Section
// ============================================================================

/// Containers in every status and padding size
#[component]
fn ContainerSection() -> Element {
    let mut clicks = use_signal(|| 0u32);

    let themed = match ContainerConfig::from_json(THEMED_CARD_JSON) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load themed card config: {}", err);
            ContainerConfig::default()
        }
    };

    rsx! {
        section {
            class: "gallery-section",

            h2 { "Containers" }

            div {
                class: "gallery-grid",

                for status in VisualStatus::all() {
                    Container {
                        key: "{status}",
                        config: ContainerConfig::new().with_status(*status),
                        "Status: {status}"
                    }
                }
            }

            div {
                class: "gallery-grid",

                for padding in [PaddingSize::Sm, PaddingSize::Md, PaddingSize::Lg] {
                    Container {
                        config: ContainerConfig::new().with_padding(padding).with_shadow(false),
                        "Padding "
                        {padding.class()}
                    }
                }
            }

            Container {
                config: ContainerConfig::new().with_hover(true).full_width(),
                on_click: move |_: MouseEvent| clicks += 1,
                "Hover and click me ({clicks} clicks)"
            }

            Container {
                config: ContainerConfig {
                    bg_color: "notacolor".to_string(),
                    border_size: "abc".into(),
                    style: StyleOverride::new().with("margin-top", "12px"),
                    ..Default::default()
                },
                "Invalid background and border size fall back to defaults"
            }

            Container {
                config: themed,
                "Loaded from JSON"
            }
        }
    }
}

// ============================================================================
// Input Section
// ============================================================================

/// Input fields in each ownership mode
#[component]
fn InputSection() -> Element {
    let mut email = use_signal(String::new);
    let mut submitted = use_signal(String::new);

    let email_status = if email.read().is_empty() || email.read().contains('@') {
        VisualStatus::Default
    } else {
        VisualStatus::Error
    };

    rsx! {
        section {
            class: "gallery-section",

            h2 { "Inputs" }

            InputField {
                config: InputConfig {
                    placeholder: "Uncontrolled with clear button".to_string(),
                    clear_button: true,
                    ..Default::default()
                },
                default_value: "Edit me".to_string(),
            }

            InputField {
                config: InputConfig {
                    field_type: "email".to_string(),
                    name: Some("email".to_string()),
                    placeholder: "you@example.com".to_string(),
                    clear_button: true,
                    error_text: "Enter a valid email address".to_string(),
                    ..InputConfig::new().with_status(email_status)
                },
                value: email.read().clone(),
                on_change: move |e: ChangeEvent| email.set(e.value),
                on_enter: move |_: KeyboardEvent| submitted.set(email.read().clone()),
                leading: rsx! { "@" },
            }

            if !submitted.read().is_empty() {
                p { class: "gallery-note", "Submitted: {submitted}" }
            }

            InputField {
                config: InputConfig {
                    placeholder: "Password".to_string(),
                    clear_button: true,
                    shadow: true,
                    ..InputConfig::password()
                },
            }

            InputField {
                config: InputConfig {
                    read_only: true,
                    clear_button: true,
                    status: VisualStatus::Success,
                    ..Default::default()
                },
                default_value: "Read-only, no clear button".to_string(),
                trailing: rsx! { "✓" },
            }
        }
    }
}
