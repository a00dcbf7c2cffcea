use serde::{Deserialize, Serialize};

use crate::ids::IngredientId;
use crate::ingredient::{
    AyurvedicProperties, Formulation, IngredientRecord, IngredientStatus, PlantPart, PlantPartUse,
    PrakritiImpact,
};
use crate::media::DataUri;

/// The in-progress, not-yet-persisted ingredient being authored.
///
/// Repeatable string collections may hold blank entries while editing; they
/// are compacted only by [`IngredientDraft::materialize`]. The Step-4 staging
/// pair lives here too and is promoted into `plant_parts` only when both
/// halves are filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub name: String,
    pub scientific_name: String,
    pub sanskrit_name: String,
    pub description: String,
    pub image: Option<DataUri>,

    pub why_items: Vec<String>,
    pub prakriti: PrakritiImpact,
    pub benefit_items: Vec<String>,

    pub properties: AyurvedicProperties,
    pub formulations: Vec<Formulation>,
    pub therapeutic_uses: Vec<String>,

    pub staged_part: Option<PlantPart>,
    pub staged_description: String,
    pub plant_parts: Vec<PlantPartUse>,
    pub best_combined_with: String,
    pub geographical_locations: String,
}

impl Default for IngredientDraft {
    /// A fresh draft opens with one blank entry in every repeatable list,
    /// ready to type into.
    fn default() -> Self {
        Self {
            name: String::new(),
            scientific_name: String::new(),
            sanskrit_name: String::new(),
            description: String::new(),
            image: None,
            why_items: vec![String::new()],
            prakriti: PrakritiImpact::default(),
            benefit_items: vec![String::new()],
            properties: AyurvedicProperties::default(),
            formulations: vec![Formulation::default()],
            therapeutic_uses: vec![String::new()],
            staged_part: None,
            staged_description: String::new(),
            plant_parts: Vec::new(),
            best_combined_with: String::new(),
            geographical_locations: String::new(),
        }
    }
}

impl IngredientDraft {
    // --- repeatable string collections -------------------------------------

    pub fn push_why_item(&mut self) {
        self.why_items.push(String::new());
    }

    pub fn set_why_item(&mut self, index: usize, value: String) {
        set_at(&mut self.why_items, index, value);
    }

    pub fn remove_why_item(&mut self, index: usize) {
        remove_at(&mut self.why_items, index);
    }

    pub fn push_benefit_item(&mut self) {
        self.benefit_items.push(String::new());
    }

    pub fn set_benefit_item(&mut self, index: usize, value: String) {
        set_at(&mut self.benefit_items, index, value);
    }

    pub fn remove_benefit_item(&mut self, index: usize) {
        remove_at(&mut self.benefit_items, index);
    }

    pub fn push_therapeutic_use(&mut self) {
        self.therapeutic_uses.push(String::new());
    }

    pub fn set_therapeutic_use(&mut self, index: usize, value: String) {
        set_at(&mut self.therapeutic_uses, index, value);
    }

    pub fn remove_therapeutic_use(&mut self, index: usize) {
        remove_at(&mut self.therapeutic_uses, index);
    }

    // --- formulations -------------------------------------------------------

    pub fn push_formulation(&mut self) {
        self.formulations.push(Formulation::default());
    }

    pub fn set_formulation_text(&mut self, index: usize, value: String) {
        if let Some(formulation) = self.formulations.get_mut(index) {
            formulation.text = value;
        }
    }

    pub fn set_formulation_icon(&mut self, index: usize, icon: DataUri) {
        if let Some(formulation) = self.formulations.get_mut(index) {
            formulation.icon = Some(icon);
        }
    }

    pub fn remove_formulation(&mut self, index: usize) {
        remove_at(&mut self.formulations, index);
    }

    // --- plant-part staging -------------------------------------------------

    /// Promote the staging pair into the list.
    ///
    /// Only fires when a part is selected and the description is non-blank;
    /// on success both staging fields are cleared.
    pub fn add_staged_plant_part(&mut self) {
        let Some(part) = self.staged_part else {
            return;
        };
        if self.staged_description.trim().is_empty() {
            return;
        }
        self.plant_parts.push(PlantPartUse {
            part,
            description: std::mem::take(&mut self.staged_description),
        });
        self.staged_part = None;
    }

    pub fn clear_staged_plant_part(&mut self) {
        self.staged_part = None;
        self.staged_description.clear();
    }

    pub fn remove_plant_part(&mut self, index: usize) {
        remove_at(&mut self.plant_parts, index);
    }

    // --- final payload ------------------------------------------------------

    /// Build the final record from the aggregated draft.
    ///
    /// Blank entries are filtered out of the string collections here, and
    /// only here; formulations with neither text nor icon are dropped the
    /// same way. Name and description fall back to placeholders when blank.
    pub fn materialize(
        &self,
        id: IngredientId,
        status: IngredientStatus,
        color: String,
        icon: String,
    ) -> IngredientRecord {
        IngredientRecord {
            id,
            name: fallback(&self.name, "Untitled Ingredient"),
            description: fallback(&self.description, "—"),
            status,
            color,
            icon,
            scientific_name: self.scientific_name.clone(),
            sanskrit_name: self.sanskrit_name.clone(),
            image: self.image.clone(),
            why_items: compact(&self.why_items),
            prakriti: self.prakriti.clone(),
            benefit_items: compact(&self.benefit_items),
            properties: self.properties.clone(),
            formulations: self
                .formulations
                .iter()
                .filter(|formulation| !formulation.is_blank())
                .cloned()
                .collect(),
            therapeutic_uses: compact(&self.therapeutic_uses),
            plant_parts: self.plant_parts.clone(),
            best_combined_with: self.best_combined_with.clone(),
            geographical_locations: self.geographical_locations.clone(),
        }
    }
}

fn set_at(items: &mut [String], index: usize, value: String) {
    if let Some(slot) = items.get_mut(index) {
        *slot = value;
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

fn compact(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .cloned()
        .collect()
}

fn fallback(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::IngredientDraft;
    use crate::ids::IngredientId;
    use crate::ingredient::{IngredientStatus, PlantPart};

    fn materialized(draft: &IngredientDraft) -> crate::ingredient::IngredientRecord {
        draft.materialize(
            IngredientId::new(7),
            IngredientStatus::Active,
            "#fef3c7".into(),
            "🍃".into(),
        )
    }

    #[test]
    fn collections_reflect_exactly_the_operations_applied() {
        let mut draft = IngredientDraft::default();
        draft.set_why_item(0, "first".into());
        draft.push_why_item();
        draft.set_why_item(1, "second".into());
        draft.push_why_item();
        draft.remove_why_item(1);
        assert_eq!(draft.why_items, vec!["first".to_string(), String::new()]);

        // out-of-range operations are no-ops
        draft.set_why_item(9, "ignored".into());
        draft.remove_why_item(9);
        assert_eq!(draft.why_items, vec!["first".to_string(), String::new()]);
    }

    #[test]
    fn collections_may_reach_zero_length() {
        let mut draft = IngredientDraft::default();
        draft.remove_benefit_item(0);
        assert!(draft.benefit_items.is_empty());
    }

    #[test]
    fn blanks_survive_editing_and_are_compacted_at_materialize_time() {
        let mut draft = IngredientDraft::default();
        draft.set_why_item(0, "keep me".into());
        draft.push_why_item();
        draft.push_why_item();
        draft.set_why_item(2, "also kept".into());
        assert_eq!(draft.why_items.len(), 3);

        let record = materialized(&draft);
        assert_eq!(
            record.why_items,
            vec!["keep me".to_string(), "also kept".to_string()]
        );
        // the draft itself is untouched
        assert_eq!(draft.why_items.len(), 3);
    }

    #[test]
    fn blank_formulations_are_dropped_from_the_payload() {
        let mut draft = IngredientDraft::default();
        draft.push_formulation();
        draft.set_formulation_text(1, "Chitrakadi Vati".into());
        let record = materialized(&draft);
        assert_eq!(record.formulations.len(), 1);
        assert_eq!(record.formulations[0].text, "Chitrakadi Vati");
    }

    #[test]
    fn staged_plant_part_promotes_only_when_both_halves_are_filled() {
        let mut draft = IngredientDraft::default();

        draft.staged_description = "Digestion".into();
        draft.add_staged_plant_part();
        assert!(draft.plant_parts.is_empty(), "no part selected");

        draft.staged_part = Some(PlantPart::Root);
        draft.staged_description = "   ".into();
        draft.add_staged_plant_part();
        assert!(draft.plant_parts.is_empty(), "blank description");

        draft.staged_description = "Digestion".into();
        draft.add_staged_plant_part();
        assert_eq!(draft.plant_parts.len(), 1);
        assert_eq!(draft.plant_parts[0].part, PlantPart::Root);
        assert_eq!(draft.staged_part, None);
        assert!(draft.staged_description.is_empty());
    }

    #[test]
    fn clear_staged_leaves_the_promoted_list_alone() {
        let mut draft = IngredientDraft::default();
        draft.staged_part = Some(PlantPart::Bark);
        draft.staged_description = "External use".into();
        draft.add_staged_plant_part();

        draft.staged_part = Some(PlantPart::Pulp);
        draft.staged_description = "discard".into();
        draft.clear_staged_plant_part();

        assert_eq!(draft.plant_parts.len(), 1);
        assert_eq!(draft.staged_part, None);
    }

    #[test]
    fn materialize_applies_placeholders_for_blank_name_and_description() {
        let draft = IngredientDraft::default();
        let record = materialized(&draft);
        assert_eq!(record.name, "Untitled Ingredient");
        assert_eq!(record.description, "—");
    }
}
