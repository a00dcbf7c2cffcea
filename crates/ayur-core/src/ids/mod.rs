//! Identifier types for catalog entries.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog ingredient.
///
/// Ids are milliseconds-derived integers, matching the catalog's historical
/// key format. Uniqueness within the catalog is an invariant; [`IngredientId::mint`]
/// upholds it even when two submissions land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IngredientId(pub i64);

impl IngredientId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    /// Mint a fresh id from a wall-clock reading, bumped past every id already
    /// present in the catalog.
    pub fn mint(now_ms: i64, existing: impl IntoIterator<Item = IngredientId>) -> Self {
        let max_existing = existing.into_iter().map(|id| id.0).max();
        match max_existing {
            Some(max) if max >= now_ms => Self(max + 1),
            _ => Self(now_ms),
        }
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for IngredientId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::IngredientId;

    #[test]
    fn mint_uses_clock_when_catalog_is_behind() {
        let existing = vec![IngredientId::new(1), IngredientId::new(5)];
        assert_eq!(IngredientId::mint(1_000, existing), IngredientId::new(1_000));
    }

    #[test]
    fn mint_bumps_past_colliding_ids() {
        let existing = vec![IngredientId::new(1_000)];
        assert_eq!(
            IngredientId::mint(1_000, existing),
            IngredientId::new(1_001)
        );
    }

    #[test]
    fn mint_on_empty_catalog_is_the_clock_reading() {
        assert_eq!(IngredientId::mint(42, []), IngredientId::new(42));
    }
}
