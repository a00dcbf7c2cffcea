//! Use case for resolving one catalog entry in full.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, warn, Instrument};

use ayur_core::ids::IngredientId;
use ayur_core::ingredient::IngredientRecord;
use ayur_core::ports::CatalogRepository;

/// Resolve the full record for the detail view.
///
/// The repository is the single source of truth; an unknown id yields
/// `Ok(None)`, which the view renders as an explicit not-found state.
pub struct GetIngredientDetail {
    repository: Arc<dyn CatalogRepository>,
}

impl GetIngredientDetail {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: IngredientId) -> Result<Option<IngredientRecord>> {
        let span = info_span!("usecase.get_ingredient_detail.execute", %id);

        async {
            let records = self.repository.load().await?;
            let record = records.into_iter().find(|record| record.id == id);
            match &record {
                Some(record) => info!(%id, name = %record.name, "detail resolved"),
                None => warn!(%id, "ingredient not found"),
            }
            Ok(record)
        }
        .instrument(span)
        .await
    }
}
