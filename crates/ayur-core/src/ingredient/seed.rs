//! Default catalog contents.
//!
//! Used whenever the persisted catalog is absent or unparseable; the store
//! writes this set back before returning it.

use crate::ids::IngredientId;
use crate::ingredient::{
    AyurvedicProperties, DoshaInfluence, Formulation, IngredientRecord, IngredientStatus,
    PlantPart, PlantPartUse, PrakritiImpact,
};

/// The fixed five-entry seed set, ids 1 through 5, all Active.
pub fn seed_catalog() -> Vec<IngredientRecord> {
    vec![
        seed_record(
            1,
            "Khus Khus",
            "A versatile herb that enhances fertility and aids in treating insomnia. It has a calming...",
            "#fef3c7",
            "🌾",
        ),
        seed_record(
            2,
            "Rakta Chandan",
            "Also known as Red Sandalwood, this herb is prized for its skin-enhancing properties. It...",
            "#fecaca",
            "🌿",
        ),
        seed_record(
            3,
            "Swarn Bhashm",
            "A metallic preparation in Ayurveda, believed to enhance stamina, strength, and overa...",
            "#fed7aa",
            "✨",
        ),
        seed_record(
            4,
            "Giloy",
            "A powerful immunomodulator that boosts overall immunity. It also aids in digestion a...",
            "#bbf7d0",
            "🌱",
        ),
        seed_record(
            5,
            "Bhringraj",
            "Known as the \"King of Hair\", this herb is renowned for preventing hair loss and treating...",
            "#fde68a",
            "🍃",
        ),
    ]
}

fn seed_record(id: i64, name: &str, description: &str, color: &str, icon: &str) -> IngredientRecord {
    IngredientRecord {
        id: IngredientId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        status: IngredientStatus::Active,
        color: color.to_string(),
        icon: icon.to_string(),
        scientific_name: "Plumbago zeylanica".to_string(),
        sanskrit_name: "चित्रक".to_string(),
        image: None,
        why_items: vec![
            "Helps lower blood sugar and boosts digestion".to_string(),
            "Speeds wound healing with antioxidant and antimicrobial properties".to_string(),
            "Used in medicines for indigestion".to_string(),
        ],
        prakriti: PrakritiImpact {
            vata: Some(DoshaInfluence::Balanced),
            vata_reason: "none".to_string(),
            kapha: Some(DoshaInfluence::Balanced),
            kapha_reason: "none".to_string(),
            pitta: Some(DoshaInfluence::Unbalanced),
            pitta_reason: "if taken in excessive amount".to_string(),
        },
        benefit_items: vec![
            "Calms the nervous system and reduces anxiety".to_string(),
            "Reduces cholesterol and supports weight loss".to_string(),
            "Manages diabetes by lowering blood sugar levels".to_string(),
            "Beneficial in hemorrhoids of Vata origin".to_string(),
        ],
        properties: AyurvedicProperties {
            rasa: "Katu (Pungent)".to_string(),
            veerya: "Ushna (Hot)".to_string(),
            guna: "Laghu (Light), Ruksha (Dry), Tikna (Sharp)".to_string(),
            vipaka: "Katu (Pungent)".to_string(),
        },
        formulations: vec![
            Formulation::named("Chitrak Haritaki"),
            Formulation::named("Chitrakadi Vati"),
            Formulation::named("Kalyanagulam"),
            Formulation::named("Chitrakadi Churna"),
        ],
        therapeutic_uses: vec![
            "Agnimandya".to_string(),
            "Grahani Rog".to_string(),
            "Udara Shula".to_string(),
            "Gudasotha".to_string(),
        ],
        plant_parts: vec![
            PlantPartUse {
                part: PlantPart::Root,
                description: "Digestion, skin conditions, manage blood sugar level".to_string(),
            },
            PlantPartUse {
                part: PlantPart::RootBark,
                description: "Manage obesity, metabolism and assist in weight loss".to_string(),
            },
            PlantPartUse {
                part: PlantPart::Leaf,
                description: "Used externally for skin conditions and wounds".to_string(),
            },
        ],
        best_combined_with: "Pippali, Haritaki, Guggulu, Punarnava, Amla, Giloy".to_string(),
        geographical_locations:
            "Tropical and subtropical regions worldwide, including India and Srilanka.".to_string(),
    }
}
