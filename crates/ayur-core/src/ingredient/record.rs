use serde::{Deserialize, Serialize};

use crate::ids::IngredientId;
use crate::ingredient::{
    AyurvedicProperties, Formulation, IngredientStatus, IngredientSummary, PlantPartUse,
    PrakritiImpact,
};
use crate::media::DataUri;

/// The full persisted catalog entry.
///
/// This is the single authoritative shape: the wizard writes it in whole, the
/// list view projects it down to [`IngredientSummary`], and the detail view
/// reads it back field by field. Detail fields default so that older
/// summary-only payloads still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: IngredientId,
    pub name: String,
    pub description: String,
    pub status: IngredientStatus,
    pub color: String,
    pub icon: String,

    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub sanskrit_name: String,
    #[serde(default)]
    pub image: Option<DataUri>,
    #[serde(default)]
    pub why_items: Vec<String>,
    #[serde(default)]
    pub prakriti: PrakritiImpact,
    #[serde(default)]
    pub benefit_items: Vec<String>,
    #[serde(default)]
    pub properties: AyurvedicProperties,
    #[serde(default)]
    pub formulations: Vec<Formulation>,
    #[serde(default)]
    pub therapeutic_uses: Vec<String>,
    #[serde(default)]
    pub plant_parts: Vec<PlantPartUse>,
    #[serde(default)]
    pub best_combined_with: String,
    #[serde(default)]
    pub geographical_locations: String,
}

impl IngredientRecord {
    /// Project down to the list-view summary.
    pub fn summary(&self) -> IngredientSummary {
        IngredientSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            color: self.color.clone(),
            icon: self.icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ingredient::seed::seed_catalog;
    use crate::ingredient::IngredientRecord;

    #[test]
    fn wire_format_uses_the_historical_names() {
        let record = &seed_catalog()[0];
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["status"], "Active");
        assert_eq!(json["prakriti"]["pitta"], "Unbalanced");
        assert_eq!(json["plant_parts"][1]["part"], "Root Bark");
    }

    #[test]
    fn summary_only_payloads_still_parse() {
        let json = r##"{
            "id": 99,
            "name": "Tulsi",
            "description": "Holy basil",
            "status": "Inactive",
            "color": "#bbf7d0",
            "icon": "🌱"
        }"##;
        let record: IngredientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Tulsi");
        assert!(record.why_items.is_empty());
        assert!(record.image.is_none());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = &seed_catalog()[2];
        let json = serde_json::to_string(record).unwrap();
        let parsed: IngredientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, record);
    }
}
