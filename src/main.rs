//! Vitrine Gallery
//!
//! Desktop showcase of the Vitrine components.
//!
//! This is the main entry point for the Dioxus Desktop application.
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .pretty()
        .init();

    tracing::info!(
        core = vitrine_core::VERSION,
        "Launching {}",
        vitrine_ui::TITLE
    );

    // Print startup banner
    println!();
    println!("{}", vitrine_ui::banner());
    println!();

    // Launch the Dioxus desktop application
    vitrine_ui::launch();
}
