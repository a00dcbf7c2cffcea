//! # ayur-app
//!
//! Application layer for the ingredient admin console: use cases over the
//! catalog repository, the wizard orchestrator, and the event bus views
//! subscribe to for resynchronization.

pub mod builder;
pub mod event;
pub mod usecases;

pub use builder::{App, AppBuilder};
pub use event::{AppEvent, AppEventBus};
