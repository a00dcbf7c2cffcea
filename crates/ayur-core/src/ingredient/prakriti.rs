use serde::{Deserialize, Serialize};

/// The three dosha axes an ingredient is rated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoshaAxis {
    Vata,
    Kapha,
    Pitta,
}

/// How an ingredient influences one dosha.
///
/// Wire names follow the authoring form's option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoshaInfluence {
    Balanced,
    #[serde(rename = "Mildly Increasing")]
    MildlyIncreasing,
    Unbalanced,
    Aggravate,
}

impl std::fmt::Display for DoshaInfluence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoshaInfluence::Balanced => write!(f, "Balanced"),
            DoshaInfluence::MildlyIncreasing => write!(f, "Mildly Increasing"),
            DoshaInfluence::Unbalanced => write!(f, "Unbalanced"),
            DoshaInfluence::Aggravate => write!(f, "Aggravate"),
        }
    }
}

/// Per-axis influence plus a free-text reason for each axis.
///
/// An axis may legitimately stay unset while authoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrakritiImpact {
    #[serde(default)]
    pub vata: Option<DoshaInfluence>,
    #[serde(default)]
    pub vata_reason: String,
    #[serde(default)]
    pub kapha: Option<DoshaInfluence>,
    #[serde(default)]
    pub kapha_reason: String,
    #[serde(default)]
    pub pitta: Option<DoshaInfluence>,
    #[serde(default)]
    pub pitta_reason: String,
}

impl PrakritiImpact {
    pub fn set_influence(&mut self, axis: DoshaAxis, influence: Option<DoshaInfluence>) {
        match axis {
            DoshaAxis::Vata => self.vata = influence,
            DoshaAxis::Kapha => self.kapha = influence,
            DoshaAxis::Pitta => self.pitta = influence,
        }
    }

    pub fn set_reason(&mut self, axis: DoshaAxis, reason: String) {
        match axis {
            DoshaAxis::Vata => self.vata_reason = reason,
            DoshaAxis::Kapha => self.kapha_reason = reason,
            DoshaAxis::Pitta => self.pitta_reason = reason,
        }
    }

    pub fn influence(&self, axis: DoshaAxis) -> Option<DoshaInfluence> {
        match axis {
            DoshaAxis::Vata => self.vata,
            DoshaAxis::Kapha => self.kapha,
            DoshaAxis::Pitta => self.pitta,
        }
    }
}
