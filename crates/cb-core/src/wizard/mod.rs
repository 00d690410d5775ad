//! Settings wizard: a paged inline menu driven by a pure state machine.

pub mod action;
pub mod callback;
pub mod event;
pub mod messages;
pub mod render;
pub mod state;
pub mod state_machine;

pub use action::WizardAction;
pub use event::{ClearField, EditField, StyleTag, ToggleSwitch, WizardEvent};
pub use state::{MenuPage, WizardState};
pub use state_machine::WizardStateMachine;
