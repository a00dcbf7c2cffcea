//! # ayur-core
//!
//! Core domain models and business logic for the ingredient admin console.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod ids;
pub mod ingredient;
pub mod media;
pub mod ports;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use ids::IngredientId;
pub use ingredient::{IngredientRecord, IngredientStatus, IngredientSummary};
pub use media::{DataUri, ImageUpload, MimeType};
pub use wizard::{WizardEvent, WizardStateMachine, WizardStep};
