use serde::{Deserialize, Serialize};

/// Publication status of a catalog entry.
///
/// Serialized as `"Active"` / `"Inactive"`, the catalog's historical wire
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientStatus {
    Active,
    Inactive,
}

impl Default for IngredientStatus {
    fn default() -> Self {
        IngredientStatus::Active
    }
}

impl std::fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngredientStatus::Active => write!(f, "Active"),
            IngredientStatus::Inactive => write!(f, "Inactive"),
        }
    }
}
