//! Ingredient domain model.
//!
//! The catalog persists full [`IngredientRecord`]s; the list view renders
//! their [`IngredientSummary`] projection.

pub mod palette;
pub mod plant_part;
pub mod prakriti;
pub mod properties;
pub mod record;
pub mod seed;
pub mod status;
pub mod summary;

pub use plant_part::{PlantPart, PlantPartUse};
pub use prakriti::{DoshaAxis, DoshaInfluence, PrakritiImpact};
pub use properties::{AyurvedicProperties, Formulation};
pub use record::IngredientRecord;
pub use status::IngredientStatus;
pub use summary::IngredientSummary;
