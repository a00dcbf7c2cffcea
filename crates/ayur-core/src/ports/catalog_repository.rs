//! Catalog repository port.
//!
//! The single authoritative persistence interface for the ingredient catalog.
//! All operations are whole-collection: writes replace the persisted sequence
//! in full, and concurrent writers are last-write-wins.

use anyhow::Result;
use async_trait::async_trait;

use crate::ids::IngredientId;
use crate::ingredient::{IngredientRecord, IngredientStatus};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Return the current ordered catalog.
    ///
    /// When no persisted data exists, or the persisted data is unparseable,
    /// the implementation atomically reinitializes to the fixed seed set,
    /// persists it, and returns it.
    async fn load(&self) -> Result<Vec<IngredientRecord>>;

    /// Append one record and persist the full sequence.
    async fn append(&self, record: &IngredientRecord) -> Result<()>;

    /// Remove the matching record and persist the remainder.
    ///
    /// Removing an unknown id is a no-op.
    async fn remove(&self, id: IngredientId) -> Result<()>;

    /// Replace one record's status in place and persist the full sequence.
    ///
    /// An unknown id is a no-op.
    async fn set_status(&self, id: IngredientId, status: IngredientStatus) -> Result<()>;
}
