//! Use case for listing the catalog.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ayur_core::ingredient::IngredientSummary;
use ayur_core::ports::CatalogRepository;

/// Load the catalog and project it down to list-view summaries.
///
/// Search and pagination over the returned summaries are the caller's
/// concern ([`ayur_core::catalog::CatalogListState`]).
pub struct ListIngredients {
    repository: Arc<dyn CatalogRepository>,
}

impl ListIngredients {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<IngredientSummary>> {
        let span = info_span!("usecase.list_ingredients.execute");

        async {
            let records = self.repository.load().await?;
            let summaries: Vec<IngredientSummary> =
                records.iter().map(|record| record.summary()).collect();
            info!(count = summaries.len(), "catalog listed");
            Ok(summaries)
        }
        .instrument(span)
        .await
    }
}
