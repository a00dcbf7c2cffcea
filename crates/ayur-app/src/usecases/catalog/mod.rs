pub mod get_ingredient_detail;
pub mod list_ingredients;
pub mod remove_ingredient;
pub mod set_ingredient_status;

pub use get_ingredient_detail::GetIngredientDetail;
pub use list_ingredients::ListIngredients;
pub use remove_ingredient::RemoveIngredient;
pub use set_ingredient_status::SetIngredientStatus;
