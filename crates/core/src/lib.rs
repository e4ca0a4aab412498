//! # Vitrine Core
//!
//! Framework-independent logic behind the Vitrine components.
//!
//! This crate provides the decision logic the UI layer renders from:
//!
//! - **Color**: hex color validation (`#RGB`, `#RRGGBB`, `#RRGGBBAA`)
//! - **Container**: appearance config to inline style and class tokens
//! - **Input**: value ownership, reveal/clear affordances and field layout
//! - **Errors**: `KitError` and `KitResult` for strict parsing and misconfiguration
//!

pub mod color;
pub mod container;
pub mod error;
pub mod input;
pub mod style;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use color::{HexColor, is_valid_hex};
pub use container::{ContainerConfig, ResolvedContainer};
pub use error::{KitError, KitResult};
pub use input::{
    ChangeEvent, InputConfig, InputController, InputValue, KeyAction, TrailingReserve,
};
pub use style::{ResolvedStyle, StyleOverride};
pub use traits::{JsonConfig, Resolvable};
pub use types::{ClassList, Dimension, PaddingSize, VisualStatus};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Source repository
pub const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
