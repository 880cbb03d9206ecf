//! Order entity and status lifecycle

use crate::core::store::Keyed;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A delivery order as stored and served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderItem>,
}

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

/// One line of an order: a dish reference and how many of it
///
/// Callers typically send the full dish object alongside the quantity; the
/// flattened map carries those extra fields through round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    /// Always >= 1
    pub quantity: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lifecycle status of an order
///
/// Transitions only move forward; `Delivered` is terminal. Deletion is
/// permitted from `Pending` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Parse a status string as it appears on the wire
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Position in the lifecycle, used to rule out backward transitions
    fn rank(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::OutForDelivery => 2,
            OrderStatus::Delivered => 3,
        }
    }

    /// No further transitions are permitted from a terminal status
    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    /// Whether an order may move from `self` to `next`
    ///
    /// Self-transitions are allowed for non-terminal statuses so an
    /// unchanged PUT is idempotent.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        !self.is_terminal() && next.rank() >= self.rank()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}
