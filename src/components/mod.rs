//! UI Components
//!
//! Leptos components for the food dashboard.

mod header;
mod food_card;
mod food_form;
mod modal_add_food;
mod modal_edit_food;

pub use header::Header;
pub use food_card::FoodCard;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
