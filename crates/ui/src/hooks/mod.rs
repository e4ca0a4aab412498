//! # UI Hooks
//!
//! Custom Dioxus hooks for Vitrine components.
//!
//! This module provides reusable hooks for managing:
//! - Input value ownership and affordance state

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_input;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_input::{UseInputController, use_input_controller};
