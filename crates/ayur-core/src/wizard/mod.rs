//! Ingredient authoring wizard.
//!
//! A five-step form modeled as a pure state machine: events in, side-effect
//! actions out. The orchestrator in the application layer executes the
//! actions and feeds persistence results back as events.

pub mod action;
pub mod draft;
pub mod error;
pub mod event;
pub mod state_machine;
pub mod step;
pub mod validate;

pub use action::WizardAction;
pub use draft::IngredientDraft;
pub use error::WizardError;
pub use event::{BenefitsEvent, GeneralEvent, OtherEvent, PropertiesEvent, WizardEvent};
pub use state_machine::WizardStateMachine;
pub use step::WizardStep;
