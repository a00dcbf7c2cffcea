use serde::{Deserialize, Serialize};

use crate::ids::IngredientId;
use crate::ingredient::IngredientStatus;

/// Change notifications emitted after every catalog mutation.
///
/// Views subscribe to these and resynchronize their snapshot; between
/// notifications a snapshot may be stale (last writer wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    Appended { id: IngredientId },
    Removed { id: IngredientId },
    StatusChanged {
        id: IngredientId,
        status: IngredientStatus,
    },
    Reloaded,
}
