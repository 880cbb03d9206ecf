//! Seed data loaded into the in-memory stores at startup
//!
//! The JSON files are embedded at compile time; `AppState::seeded` wires them
//! into fresh stores.

use crate::dishes::model::Dish;
use crate::orders::model::Order;
use anyhow::{Context, Result};

/// The seed dishes
pub fn dishes() -> Result<Vec<Dish>> {
    serde_json::from_str(include_str!("dishes.json")).context("Failed to parse dish seed data")
}

/// The seed orders
pub fn orders() -> Result<Vec<Order>> {
    serde_json::from_str(include_str!("orders.json")).context("Failed to parse order seed data")
}
