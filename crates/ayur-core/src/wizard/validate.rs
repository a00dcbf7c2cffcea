//! Per-step validation table.
//!
//! Only General information carries a real rule today; every other step maps
//! to [`always_valid`], so future steps can opt into stricter rules without
//! touching the state machine.

use crate::wizard::{IngredientDraft, WizardError, WizardStep};

pub type StepValidator = fn(&IngredientDraft) -> Result<(), WizardError>;

pub fn validator_for(step: WizardStep) -> StepValidator {
    match step {
        WizardStep::GeneralInformation => general_information,
        _ => always_valid,
    }
}

/// Run every step's validator against the aggregated draft.
pub fn validate(draft: &IngredientDraft) -> Result<(), WizardError> {
    for step in WizardStep::ALL {
        validator_for(step)(draft)?;
    }
    Ok(())
}

fn always_valid(_draft: &IngredientDraft) -> Result<(), WizardError> {
    Ok(())
}

fn general_information(draft: &IngredientDraft) -> Result<(), WizardError> {
    let required = [&draft.name, &draft.scientific_name, &draft.sanskrit_name];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(WizardError::MissingRequiredFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::wizard::{IngredientDraft, WizardError};

    #[test]
    fn validate_requires_the_three_step_one_names() {
        let mut draft = IngredientDraft::default();
        draft.scientific_name = "Foo".into();
        draft.sanskrit_name = "Bar".into();
        assert_eq!(validate(&draft), Err(WizardError::MissingRequiredFields));

        draft.name = "Khus Khus".into();
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn validate_ignores_every_other_field() {
        let mut draft = IngredientDraft::default();
        draft.name = "Khus Khus".into();
        draft.scientific_name = "Vetiveria zizanioides".into();
        draft.sanskrit_name = "उशीर".into();
        // everything else blank, including description
        assert_eq!(validate(&draft), Ok(()));
    }
}
