//! Use case for toggling a catalog entry's status.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ayur_core::catalog::CatalogEvent;
use ayur_core::ids::IngredientId;
use ayur_core::ingredient::IngredientStatus;
use ayur_core::ports::CatalogRepository;

use crate::event::{AppEvent, AppEventBus};

/// Persist a status change made from the detail view.
///
/// Callers update their local copy optimistically; the published event lets
/// every other open view refresh its snapshot.
pub struct SetIngredientStatus {
    repository: Arc<dyn CatalogRepository>,
    events: AppEventBus,
}

impl SetIngredientStatus {
    pub fn new(repository: Arc<dyn CatalogRepository>, events: AppEventBus) -> Self {
        Self { repository, events }
    }

    pub async fn execute(&self, id: IngredientId, status: IngredientStatus) -> Result<()> {
        let span = info_span!("usecase.set_ingredient_status.execute", %id, %status);

        async {
            self.repository.set_status(id, status).await?;
            info!(%id, %status, "status updated");
            self.events
                .publish(AppEvent::CatalogChanged(CatalogEvent::StatusChanged {
                    id,
                    status,
                }));
            Ok(())
        }
        .instrument(span)
        .await
    }
}
