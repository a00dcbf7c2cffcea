use serde::{Deserialize, Serialize};

use crate::ids::IngredientId;
use crate::ingredient::IngredientStatus;

/// The minimal projection of a catalog entry the list view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSummary {
    pub id: IngredientId,
    pub name: String,
    pub description: String,
    pub status: IngredientStatus,
    pub color: String,
    pub icon: String,
}

impl IngredientSummary {
    /// Case-insensitive substring match over name OR description.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
