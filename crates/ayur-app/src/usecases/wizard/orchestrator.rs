//! Wizard orchestrator.
//!
//! Coordinates the pure wizard state machine and its side effects: minting
//! the id, choosing the display color, materializing the draft, writing it
//! through the repository and publishing navigation/change events. Results
//! are fed back into the machine as events, so the machine alone decides
//! what happens next.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, Instrument};

use ayur_core::catalog::CatalogEvent;
use ayur_core::ids::IngredientId;
use ayur_core::ingredient::{palette, IngredientStatus};
use ayur_core::ports::{CatalogRepository, ClockPort};
use ayur_core::wizard::{
    IngredientDraft, WizardAction, WizardError, WizardEvent, WizardStateMachine, WizardStep,
};

use crate::event::{AppEvent, AppEventBus};

/// What a front end needs to render the wizard after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub draft: IngredientDraft,
    pub error: Option<WizardError>,
}

pub struct WizardOrchestrator {
    machine: Mutex<WizardStateMachine>,
    repository: Arc<dyn CatalogRepository>,
    clock: Arc<dyn ClockPort>,
    events: AppEventBus,
}

impl WizardOrchestrator {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        clock: Arc<dyn ClockPort>,
        events: AppEventBus,
    ) -> Self {
        Self {
            machine: Mutex::new(WizardStateMachine::new()),
            repository,
            clock,
            events,
        }
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        let machine = self.machine.lock().await;
        snapshot_of(&machine)
    }

    /// Apply one event and run any resulting side effects to completion.
    ///
    /// The machine lock is held for the whole dispatch, serializing
    /// concurrent calls so duplicate actions cannot interleave.
    pub async fn dispatch(&self, event: WizardEvent) -> Result<WizardSnapshot> {
        let mut machine = self.machine.lock().await;

        let span = info_span!("usecase.wizard_orchestrator.dispatch");
        async {
            let mut pending = vec![event];
            while let Some(event) = pending.pop() {
                debug!(step = ?machine.step(), event = ?event_name(&event), "wizard transition");
                let actions = machine.apply(event);
                let follow_ups = self.execute_actions(actions).await;
                pending.extend(follow_ups);
            }
            Ok(snapshot_of(&machine))
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Vec<WizardEvent> {
        let mut follow_ups = Vec::new();
        for action in actions {
            match action {
                WizardAction::SubmitDraft { draft } => match self.persist_draft(&draft).await {
                    Ok(id) => {
                        info!(%id, "ingredient persisted");
                        self.events
                            .publish(AppEvent::CatalogChanged(CatalogEvent::Appended { id }));
                        follow_ups.push(WizardEvent::PersistSucceeded);
                    }
                    Err(err) => {
                        error!(error = %err, "persisting ingredient failed");
                        follow_ups.push(WizardEvent::PersistFailed);
                    }
                },
                WizardAction::NavigateToCatalog => {
                    self.events.publish(AppEvent::NavigateToCatalog);
                }
            }
        }
        follow_ups
    }

    async fn persist_draft(&self, draft: &IngredientDraft) -> Result<IngredientId> {
        let existing = self.repository.load().await?;
        let id = IngredientId::mint(
            self.clock.now_ms(),
            existing.iter().map(|record| record.id),
        );
        let color = palette::random_color(&mut rand::rng()).to_string();
        let record = draft.materialize(
            id,
            IngredientStatus::Active,
            color,
            palette::DEFAULT_ICON.to_string(),
        );
        self.repository.append(&record).await?;
        Ok(id)
    }
}

fn snapshot_of(machine: &WizardStateMachine) -> WizardSnapshot {
    WizardSnapshot {
        step: machine.step(),
        draft: machine.draft().clone(),
        error: machine.error().cloned(),
    }
}

fn event_name(event: &WizardEvent) -> &'static str {
    match event {
        WizardEvent::Next => "Next",
        WizardEvent::Previous => "Previous",
        WizardEvent::JumpTo { .. } => "JumpTo",
        WizardEvent::Cancel => "Cancel",
        WizardEvent::Submit => "Submit",
        WizardEvent::PersistSucceeded => "PersistSucceeded",
        WizardEvent::PersistFailed => "PersistFailed",
        WizardEvent::General(_) => "General",
        WizardEvent::Benefits(_) => "Benefits",
        WizardEvent::Properties(_) => "Properties",
        WizardEvent::Other(_) => "Other",
    }
}
