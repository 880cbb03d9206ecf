//! Dish resource: menu items that can be listed, created, read, and updated
//! (never deleted)

pub mod chain;
pub mod handlers;
pub mod model;

pub use chain::DishContext;
pub use model::Dish;
