use crate::ingredient::{DoshaAxis, DoshaInfluence, PlantPart};
use crate::media::ImageUpload;
use crate::wizard::WizardStep;

/// Events that drive the wizard.
///
/// Navigation and submission are top-level; per-step field edits are grouped
/// by the step that owns them.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Advance one step (clamped at Overview).
    Next,
    /// Retreat one step (clamped at General information).
    Previous,
    /// Direct transition to any step; no prior-step validation is required.
    JumpTo { step: WizardStep },
    /// Abandon the draft and leave the wizard.
    Cancel,
    /// Validate and hand the aggregated draft to the orchestrator.
    Submit,
    /// Persistence result fed back by the orchestrator.
    PersistSucceeded,
    PersistFailed,

    General(GeneralEvent),
    Benefits(BenefitsEvent),
    Properties(PropertiesEvent),
    Other(OtherEvent),
}

/// Step 1: scalar fields and the ingredient image.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneralEvent {
    SetName(String),
    SetScientificName(String),
    SetSanskritName(String),
    SetDescription(String),
    /// Encode-or-reject: non-image files surface an error and leave the
    /// prior image untouched.
    AttachImage(ImageUpload),
}

/// Step 2: why-items, benefit-items and the prakriti axes.
#[derive(Debug, Clone, PartialEq)]
pub enum BenefitsEvent {
    AddWhyItem,
    SetWhyItem { index: usize, value: String },
    RemoveWhyItem { index: usize },
    AddBenefitItem,
    SetBenefitItem { index: usize, value: String },
    RemoveBenefitItem { index: usize },
    SetDoshaInfluence {
        axis: DoshaAxis,
        influence: Option<DoshaInfluence>,
    },
    SetDoshaReason { axis: DoshaAxis, reason: String },
}

/// Step 3: classical properties, formulations and therapeutic uses.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesEvent {
    SetRasa(String),
    SetVeerya(String),
    SetGuna(String),
    SetVipaka(String),
    AddFormulation,
    SetFormulationText { index: usize, value: String },
    /// Same encode-or-reject rule as the Step-1 image.
    SetFormulationIcon { index: usize, upload: ImageUpload },
    RemoveFormulation { index: usize },
    AddTherapeuticUse,
    SetTherapeuticUse { index: usize, value: String },
    RemoveTherapeuticUse { index: usize },
}

/// Step 4: plant-part staging plus two free-text fields.
#[derive(Debug, Clone, PartialEq)]
pub enum OtherEvent {
    StagePlantPart(Option<PlantPart>),
    StageDescription(String),
    /// Promote the staging pair into the list (both halves required).
    AddPlantPart,
    ClearStaged,
    RemovePlantPart { index: usize },
    SetBestCombinedWith(String),
    SetGeographicalLocations(String),
}
