//! Wizard state machine.
//!
//! Holds the current step, the draft under edit and the latest user-visible
//! error. Driven exclusively through [`WizardStateMachine::apply`]: events in,
//! side-effect actions out. Unknown or out-of-range operations are no-ops.

use crate::wizard::event::{BenefitsEvent, GeneralEvent, OtherEvent, PropertiesEvent};
use crate::wizard::{
    validate, IngredientDraft, WizardAction, WizardError, WizardEvent, WizardStep,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardStateMachine {
    step: WizardStep,
    draft: IngredientDraft,
    error: Option<WizardError>,
}

impl WizardStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &IngredientDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub fn apply(&mut self, event: WizardEvent) -> Vec<WizardAction> {
        match event {
            WizardEvent::Next => {
                self.step = self.step.next();
                Vec::new()
            }
            WizardEvent::Previous => {
                self.step = self.step.previous();
                Vec::new()
            }
            WizardEvent::JumpTo { step } => {
                self.step = step;
                Vec::new()
            }
            WizardEvent::Cancel => vec![WizardAction::NavigateToCatalog],
            WizardEvent::Submit => match validate::validate(&self.draft) {
                Ok(()) => {
                    self.error = None;
                    vec![WizardAction::SubmitDraft {
                        draft: self.draft.clone(),
                    }]
                }
                Err(error) => {
                    // stay on the current step; no auto-navigation
                    self.error = Some(error);
                    Vec::new()
                }
            },
            WizardEvent::PersistSucceeded => {
                self.error = None;
                vec![WizardAction::NavigateToCatalog]
            }
            WizardEvent::PersistFailed => {
                // draft stays intact; the user may retry
                self.error = Some(WizardError::SubmitFailed);
                Vec::new()
            }
            WizardEvent::General(event) => {
                self.apply_general(event);
                Vec::new()
            }
            WizardEvent::Benefits(event) => {
                self.apply_benefits(event);
                Vec::new()
            }
            WizardEvent::Properties(event) => {
                self.apply_properties(event);
                Vec::new()
            }
            WizardEvent::Other(event) => {
                self.apply_other(event);
                Vec::new()
            }
        }
    }

    fn apply_general(&mut self, event: GeneralEvent) {
        match event {
            GeneralEvent::SetName(value) => self.draft.name = value,
            GeneralEvent::SetScientificName(value) => self.draft.scientific_name = value,
            GeneralEvent::SetSanskritName(value) => self.draft.sanskrit_name = value,
            GeneralEvent::SetDescription(value) => self.draft.description = value,
            GeneralEvent::AttachImage(upload) => match upload.into_data_uri() {
                Ok(uri) => {
                    self.draft.image = Some(uri);
                    self.error = None;
                }
                Err(_) => {
                    // prior image state stays untouched
                    self.error = Some(WizardError::InvalidImage);
                }
            },
        }
    }

    fn apply_benefits(&mut self, event: BenefitsEvent) {
        match event {
            BenefitsEvent::AddWhyItem => self.draft.push_why_item(),
            BenefitsEvent::SetWhyItem { index, value } => self.draft.set_why_item(index, value),
            BenefitsEvent::RemoveWhyItem { index } => self.draft.remove_why_item(index),
            BenefitsEvent::AddBenefitItem => self.draft.push_benefit_item(),
            BenefitsEvent::SetBenefitItem { index, value } => {
                self.draft.set_benefit_item(index, value)
            }
            BenefitsEvent::RemoveBenefitItem { index } => self.draft.remove_benefit_item(index),
            BenefitsEvent::SetDoshaInfluence { axis, influence } => {
                self.draft.prakriti.set_influence(axis, influence)
            }
            BenefitsEvent::SetDoshaReason { axis, reason } => {
                self.draft.prakriti.set_reason(axis, reason)
            }
        }
    }

    fn apply_properties(&mut self, event: PropertiesEvent) {
        match event {
            PropertiesEvent::SetRasa(value) => self.draft.properties.rasa = value,
            PropertiesEvent::SetVeerya(value) => self.draft.properties.veerya = value,
            PropertiesEvent::SetGuna(value) => self.draft.properties.guna = value,
            PropertiesEvent::SetVipaka(value) => self.draft.properties.vipaka = value,
            PropertiesEvent::AddFormulation => self.draft.push_formulation(),
            PropertiesEvent::SetFormulationText { index, value } => {
                self.draft.set_formulation_text(index, value)
            }
            PropertiesEvent::SetFormulationIcon { index, upload } => {
                match upload.into_data_uri() {
                    Ok(uri) => {
                        self.draft.set_formulation_icon(index, uri);
                        self.error = None;
                    }
                    Err(_) => {
                        self.error = Some(WizardError::InvalidImage);
                    }
                }
            }
            PropertiesEvent::RemoveFormulation { index } => self.draft.remove_formulation(index),
            PropertiesEvent::AddTherapeuticUse => self.draft.push_therapeutic_use(),
            PropertiesEvent::SetTherapeuticUse { index, value } => {
                self.draft.set_therapeutic_use(index, value)
            }
            PropertiesEvent::RemoveTherapeuticUse { index } => {
                self.draft.remove_therapeutic_use(index)
            }
        }
    }

    fn apply_other(&mut self, event: OtherEvent) {
        match event {
            OtherEvent::StagePlantPart(part) => self.draft.staged_part = part,
            OtherEvent::StageDescription(value) => self.draft.staged_description = value,
            OtherEvent::AddPlantPart => self.draft.add_staged_plant_part(),
            OtherEvent::ClearStaged => self.draft.clear_staged_plant_part(),
            OtherEvent::RemovePlantPart { index } => self.draft.remove_plant_part(index),
            OtherEvent::SetBestCombinedWith(value) => self.draft.best_combined_with = value,
            OtherEvent::SetGeographicalLocations(value) => {
                self.draft.geographical_locations = value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WizardStateMachine;
    use crate::media::ImageUpload;
    use crate::wizard::event::{BenefitsEvent, GeneralEvent, PropertiesEvent};
    use crate::wizard::{WizardAction, WizardError, WizardEvent, WizardStep};

    fn filled_machine() -> WizardStateMachine {
        let mut machine = WizardStateMachine::new();
        machine.apply(WizardEvent::General(GeneralEvent::SetName("Giloy".into())));
        machine.apply(WizardEvent::General(GeneralEvent::SetScientificName(
            "Tinospora cordifolia".into(),
        )));
        machine.apply(WizardEvent::General(GeneralEvent::SetSanskritName(
            "गुडूची".into(),
        )));
        machine
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut machine = WizardStateMachine::new();
        assert!(machine.apply(WizardEvent::Previous).is_empty());
        assert_eq!(machine.step(), WizardStep::GeneralInformation);

        for _ in 0..10 {
            machine.apply(WizardEvent::Next);
        }
        assert_eq!(machine.step(), WizardStep::Overview);
    }

    #[test]
    fn jump_to_always_succeeds_and_is_idempotent() {
        let mut machine = WizardStateMachine::new();
        for from in WizardStep::ALL {
            for to in WizardStep::ALL {
                machine.apply(WizardEvent::JumpTo { step: from });
                machine.apply(WizardEvent::JumpTo { step: to });
                assert_eq!(machine.step(), to);
                let before = machine.clone();
                assert!(machine.apply(WizardEvent::JumpTo { step: to }).is_empty());
                assert_eq!(machine, before);
            }
        }
    }

    #[test]
    fn submit_without_required_fields_sets_error_and_emits_nothing() {
        let mut machine = WizardStateMachine::new();
        machine.apply(WizardEvent::General(GeneralEvent::SetScientificName(
            "Foo".into(),
        )));
        machine.apply(WizardEvent::General(GeneralEvent::SetSanskritName(
            "Bar".into(),
        )));
        machine.apply(WizardEvent::JumpTo {
            step: WizardStep::Overview,
        });

        let actions = machine.apply(WizardEvent::Submit);
        assert!(actions.is_empty());
        assert_eq!(machine.error(), Some(&WizardError::MissingRequiredFields));
        // no auto-navigation
        assert_eq!(machine.step(), WizardStep::Overview);
    }

    #[test]
    fn submit_with_required_fields_emits_the_draft() {
        let mut machine = filled_machine();
        let actions = machine.apply(WizardEvent::Submit);
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            WizardAction::SubmitDraft { draft } => assert_eq!(draft.name, "Giloy"),
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(machine.error(), None);
    }

    #[test]
    fn persist_results_drive_navigation_or_error() {
        let mut machine = filled_machine();
        machine.apply(WizardEvent::Submit);

        let mut failed = machine.clone();
        assert!(failed.apply(WizardEvent::PersistFailed).is_empty());
        assert_eq!(failed.error(), Some(&WizardError::SubmitFailed));
        assert_eq!(failed.draft().name, "Giloy", "draft survives failure");

        let actions = machine.apply(WizardEvent::PersistSucceeded);
        assert_eq!(actions, vec![WizardAction::NavigateToCatalog]);
    }

    #[test]
    fn cancel_navigates_away_without_touching_the_draft() {
        let mut machine = filled_machine();
        let actions = machine.apply(WizardEvent::Cancel);
        assert_eq!(actions, vec![WizardAction::NavigateToCatalog]);
        assert_eq!(machine.draft().name, "Giloy");
    }

    #[test]
    fn invalid_image_is_rejected_and_prior_image_survives() {
        let mut machine = WizardStateMachine::new();
        machine.apply(WizardEvent::General(GeneralEvent::AttachImage(
            ImageUpload::new("leaf.png", "image/png", vec![1, 2, 3]),
        )));
        let prior = machine.draft().image.clone();
        assert!(prior.is_some());

        machine.apply(WizardEvent::General(GeneralEvent::AttachImage(
            ImageUpload::new("notes.txt", "text/plain", vec![4]),
        )));
        assert_eq!(machine.error(), Some(&WizardError::InvalidImage));
        assert_eq!(machine.draft().image, prior);

        // a valid retry clears the error
        machine.apply(WizardEvent::General(GeneralEvent::AttachImage(
            ImageUpload::new("leaf.jpg", "image/jpeg", vec![5]),
        )));
        assert_eq!(machine.error(), None);
    }

    #[test]
    fn formulation_icon_follows_the_same_reject_rule() {
        let mut machine = WizardStateMachine::new();
        machine.apply(WizardEvent::Properties(PropertiesEvent::SetFormulationIcon {
            index: 0,
            upload: ImageUpload::new("doc.pdf", "application/pdf", vec![1]),
        }));
        assert_eq!(machine.error(), Some(&WizardError::InvalidImage));
        assert_eq!(machine.draft().formulations[0].icon, None);

        machine.apply(WizardEvent::Properties(PropertiesEvent::SetFormulationIcon {
            index: 0,
            upload: ImageUpload::new("icon.png", "image/png", vec![2]),
        }));
        assert!(machine.draft().formulations[0].icon.is_some());
    }

    #[test]
    fn benefit_collection_operations_apply_in_order() {
        let mut machine = WizardStateMachine::new();
        machine.apply(WizardEvent::Benefits(BenefitsEvent::SetBenefitItem {
            index: 0,
            value: "Calms the nervous system".into(),
        }));
        machine.apply(WizardEvent::Benefits(BenefitsEvent::AddBenefitItem));
        machine.apply(WizardEvent::Benefits(BenefitsEvent::SetBenefitItem {
            index: 1,
            value: "Reduces cholesterol".into(),
        }));
        machine.apply(WizardEvent::Benefits(BenefitsEvent::RemoveBenefitItem {
            index: 0,
        }));
        assert_eq!(
            machine.draft().benefit_items,
            vec!["Reduces cholesterol".to_string()]
        );
    }
}
