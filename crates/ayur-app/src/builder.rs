//! Application wiring.

use std::sync::Arc;

use ayur_core::ports::{CatalogRepository, ClockPort};

use crate::event::AppEventBus;
use crate::usecases::{
    GetIngredientDetail, ListIngredients, RemoveIngredient, SetIngredientStatus,
    WizardOrchestrator,
};

/// Builder for assembling the application.
pub struct AppBuilder {
    repository: Option<Arc<dyn CatalogRepository>>,
    clock: Option<Arc<dyn ClockPort>>,
    events: Option<AppEventBus>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            clock: None,
            events: None,
        }
    }

    pub fn with_repository(mut self, repository: Arc<dyn CatalogRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_events(mut self, events: AppEventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> anyhow::Result<App> {
        Ok(App {
            repository: self
                .repository
                .ok_or_else(|| anyhow::anyhow!("CatalogRepository is required"))?,
            clock: self
                .clock
                .ok_or_else(|| anyhow::anyhow!("ClockPort is required"))?,
            events: self.events.unwrap_or_default(),
        })
    }
}

/// The assembled application; hands out use cases over shared ports.
pub struct App {
    repository: Arc<dyn CatalogRepository>,
    clock: Arc<dyn ClockPort>,
    events: AppEventBus,
}

impl App {
    pub fn events(&self) -> AppEventBus {
        self.events.clone()
    }

    pub fn list_ingredients(&self) -> ListIngredients {
        ListIngredients::new(self.repository.clone())
    }

    pub fn remove_ingredient(&self) -> RemoveIngredient {
        RemoveIngredient::new(self.repository.clone(), self.events.clone())
    }

    pub fn get_ingredient_detail(&self) -> GetIngredientDetail {
        GetIngredientDetail::new(self.repository.clone())
    }

    pub fn set_ingredient_status(&self) -> SetIngredientStatus {
        SetIngredientStatus::new(self.repository.clone(), self.events.clone())
    }

    /// A fresh wizard, one per authoring session.
    pub fn wizard(&self) -> WizardOrchestrator {
        WizardOrchestrator::new(
            self.repository.clone(),
            self.clock.clone(),
            self.events.clone(),
        )
    }
}
