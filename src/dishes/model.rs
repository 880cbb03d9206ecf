//! Dish entity

use crate::core::store::Keyed;
use serde::{Deserialize, Serialize};

/// A menu dish as stored and served by the API
///
/// The identifier is immutable once assigned; updates merge the remaining
/// fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Always >= 1
    pub price: i64,
    pub image_url: String,
}

impl Keyed for Dish {
    fn key(&self) -> &str {
        &self.id
    }
}
