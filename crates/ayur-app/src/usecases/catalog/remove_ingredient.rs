//! Use case for removing a catalog entry.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ayur_core::catalog::CatalogEvent;
use ayur_core::ids::IngredientId;
use ayur_core::ports::CatalogRepository;

use crate::event::{AppEvent, AppEventBus};

pub struct RemoveIngredient {
    repository: Arc<dyn CatalogRepository>,
    events: AppEventBus,
}

impl RemoveIngredient {
    pub fn new(repository: Arc<dyn CatalogRepository>, events: AppEventBus) -> Self {
        Self { repository, events }
    }

    pub async fn execute(&self, id: IngredientId) -> Result<()> {
        let span = info_span!("usecase.remove_ingredient.execute", %id);

        async {
            self.repository.remove(id).await?;
            info!(%id, "ingredient removed");
            self.events
                .publish(AppEvent::CatalogChanged(CatalogEvent::Removed { id }));
            Ok(())
        }
        .instrument(span)
        .await
    }
}
