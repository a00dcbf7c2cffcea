use crate::wizard::IngredientDraft;

/// Side-effects produced by wizard transitions.
///
/// The machine stays pure; the orchestrator executes these and feeds results
/// back as events.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// Materialize and persist the validated draft.
    SubmitDraft { draft: IngredientDraft },
    /// Leave the wizard for the catalog list.
    NavigateToCatalog,
}
