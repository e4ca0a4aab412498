//! # Input Controller Hook
//!
//! Keeps an [`InputController`] alive across renders of an input field.
//!
//! The controller is created once, so the controlled/uncontrolled mode is
//! fixed by the props of the first render. Later renders apply the current
//! config and controlled value to a snapshot instead of writing the signal
//! from the component body.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use vitrine_core::{ChangeEvent, InputConfig, InputController, KeyAction};

/// Handle returned by [`use_input_controller`]
#[derive(Clone, PartialEq)]
pub struct UseInputController {
    state: Signal<InputController>,
    config: InputConfig,
    value: Option<String>,
    mode_warned: Rc<Cell<bool>>,
}

/// Create or reuse the controller of the calling input component
pub fn use_input_controller(
    config: InputConfig,
    value: Option<String>,
    default_value: Option<String>,
) -> UseInputController {
    let state = use_signal({
        let config = config.clone();
        let value = value.clone();
        move || {
            tracing::debug!(controlled = value.is_some(), "Creating input controller");
            InputController::new(config, value, default_value)
        }
    });
    let mode_warned = use_hook(|| Rc::new(Cell::new(false)));

    UseInputController {
        state,
        config,
        value,
        mode_warned,
    }
}

impl UseInputController {
    /// Snapshot of the controller with the latest props applied
    ///
    /// Subscribes the calling component to controller changes.
    pub fn view(&self) -> InputController {
        let mut view = self.state.read().clone();
        self.apply_props(&mut view);
        view
    }

    /// Record a keystroke that produced `value`
    pub fn input(&self, value: String) -> ChangeEvent {
        self.update(|controller| controller.handle_input(value))
    }

    /// Clear the field, `None` when the clear button is hidden
    pub fn clear(&self) -> Option<ChangeEvent> {
        let event = self.update(InputController::clear);
        if event.is_some() {
            tracing::debug!("Input cleared");
        }
        event
    }

    /// Flip the password reveal toggle
    pub fn toggle_secret(&self) -> bool {
        let shown = self.update(InputController::toggle_secret);
        tracing::debug!(shown, "Password reveal toggled");
        shown
    }

    /// Classify a key press without touching state
    pub fn key(&self, key: &str) -> KeyAction {
        self.state.peek().handle_key(key)
    }

    fn update<R>(&self, f: impl FnOnce(&mut InputController) -> R) -> R {
        let mut state = self.state;
        let mut controller = state.write();
        self.apply_props(&mut *controller);
        f(&mut *controller)
    }

    fn apply_props(&self, controller: &mut InputController) {
        sync_props(controller, &self.config, self.value.as_deref(), &self.mode_warned);
    }
}

/// Bring a controller up to date with the latest props
///
/// A rejected mode switch is logged the first time only. Returns whether
/// this call logged it.
fn sync_props(
    controller: &mut InputController,
    config: &InputConfig,
    value: Option<&str>,
    mode_warned: &Cell<bool>,
) -> bool {
    if controller.config() != config {
        controller.set_config(config.clone());
    }
    match controller.sync_external(value) {
        Err(err) if !mode_warned.replace(true) => {
            tracing::warn!("{}", err);
            true
        }
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
