use serde::{Deserialize, Serialize};

use crate::media::DataUri;

/// Classical property fields, all free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyurvedicProperties {
    #[serde(default)]
    pub rasa: String,
    #[serde(default)]
    pub veerya: String,
    #[serde(default)]
    pub guna: String,
    #[serde(default)]
    pub vipaka: String,
}

/// A named formulation the ingredient appears in, with an optional inline icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formulation {
    #[serde(default)]
    pub icon: Option<DataUri>,
    #[serde(default)]
    pub text: String,
}

impl Formulation {
    pub fn named(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    /// A formulation with neither text nor icon carries no information.
    pub fn is_blank(&self) -> bool {
        self.icon.is_none() && self.text.is_empty()
    }
}
