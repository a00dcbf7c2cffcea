pub mod catalog;
pub mod wizard;

pub use catalog::{
    GetIngredientDetail, ListIngredients, RemoveIngredient, SetIngredientStatus,
};
pub use wizard::WizardOrchestrator;
