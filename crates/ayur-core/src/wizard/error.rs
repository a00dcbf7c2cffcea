use serde::{Deserialize, Serialize};

/// User-visible wizard errors.
///
/// All of these are recoverable: the draft is never discarded on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum WizardError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Please select a valid image file")]
    InvalidImage,
    #[error("Failed to submit form. Please try again.")]
    SubmitFailed,
}
