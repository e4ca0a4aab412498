//! # UI Components
//!
//! Reusable Dioxus components for Vitrine.
//!
//! This module provides:
//! - **Container**: Styled box with status-driven border and hover lift
//! - **InputField**: Text input with password reveal and clear buttons
//! - **Icons**: Inline SVG icons used by the input field

// ============================================================================
// Module Declarations
// ============================================================================

pub mod container;
pub mod icons;
pub mod input_field;

// ============================================================================
// Re-exports
// ============================================================================

pub use container::{Container, ContainerProps};
pub use icons::{CloseIcon, EyeIcon, EyeSlashIcon};
pub use input_field::{InputField, InputFieldProps};
