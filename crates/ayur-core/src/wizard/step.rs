use serde::{Deserialize, Serialize};

/// The five ordered wizard steps.
///
/// Navigation clamps at both ends; any step may be jumped to directly, so the
/// read-only Overview is always reachable for preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    GeneralInformation,
    Benefits,
    Properties,
    Other,
    Overview,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::GeneralInformation
    }
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::GeneralInformation,
        WizardStep::Benefits,
        WizardStep::Properties,
        WizardStep::Other,
        WizardStep::Overview,
    ];

    /// 1-based position, as shown by the progress indicator.
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::GeneralInformation => 1,
            WizardStep::Benefits => 2,
            WizardStep::Properties => 3,
            WizardStep::Other => 4,
            WizardStep::Overview => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        WizardStep::ALL.into_iter().find(|step| step.index() == index)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::GeneralInformation => "General information",
            WizardStep::Benefits => "Benefits",
            WizardStep::Properties => "Properties",
            WizardStep::Other => "Other",
            WizardStep::Overview => "Overview",
        }
    }

    /// Advance one step, no-op past the last.
    pub fn next(self) -> Self {
        WizardStep::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Retreat one step, no-op before the first.
    pub fn previous(self) -> Self {
        match self.index() {
            1 => self,
            index => WizardStep::from_index(index - 1).unwrap_or(self),
        }
    }
}
