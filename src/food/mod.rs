//! Food purchases: what was bought, where, and for how much.

mod core;
mod create;
mod delete;
mod edit;
mod form;
mod list;

pub use core::{Food, FoodState};
pub use create::{create_food_endpoint, get_new_food_page};
pub use delete::{delete_food_endpoint, get_delete_food_page};
pub use edit::{get_edit_food_page, update_food_endpoint};
pub use form::FoodForm;
pub use list::get_foods_page;
