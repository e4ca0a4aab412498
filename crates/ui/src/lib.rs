//! # Vitrine UI
//!
//! Dioxus components for Vitrine.
//!
//! This crate renders the decisions made by `vitrine_core`:
//!
//! - `Container`: a styled box driven by `ContainerConfig`
//! - `InputField`: a text input with reveal and clear buttons driven by
//!   `InputConfig` and an `InputController`
//! - `Gallery`: a desktop showcase of both components
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export the core crate for convenience
pub use vitrine_core;

pub use app::Gallery;
pub use components::{Container, ContainerProps, InputField, InputFieldProps};
pub use hooks::{UseInputController, use_input_controller};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Vitrine";

/// Application display title
pub const TITLE: &str = "Vitrine - Component Gallery";

/// CSS utility classes used by the components
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the gallery desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     vitrine_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_config(TITLE, 1100.0, 800.0);
}

/// Launch with custom configuration
///
/// Allows specifying custom window size and title.
pub fn launch_with_config(title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{} ({}x{})", NAME, VERSION, width, height);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 360.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(Gallery);
}

/// Startup banner printed by the gallery binary
pub fn banner() -> String {
    let rule = "═".repeat(59);
    let blank = format!("║{}║", " ".repeat(59));
    let heading = format!("{} v{}", NAME, VERSION);

    [
        format!("╔{}╗", rule),
        blank.clone(),
        format!("║   {:<56}║", heading),
        format!("║   {:<56}║", "Styled containers and input fields"),
        blank,
        format!("╚{}╝", rule),
    ]
    .join("\n")
}

/// Get the embedded CSS styles
///
/// Hosts embedding the components in their own window need these rules.
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
