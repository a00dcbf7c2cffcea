pub mod orchestrator;

pub use orchestrator::{WizardOrchestrator, WizardSnapshot};
