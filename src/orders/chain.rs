//! Validation chain for the order resource
//!
//! Stage order mirrors the routes: lookup → id-match guard → validator →
//! lifecycle guard → handler. Stages share an [`OrderContext`] and
//! short-circuit with [`ApiError`].

use crate::core::error::ApiError;
use crate::core::fields::non_empty_str;
use crate::core::id::IdGenerator;
use crate::core::store::Store;
use crate::orders::model::{Order, OrderItem, OrderStatus};
use serde_json::Value;

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Which mutating operation the validator is normalizing for
///
/// Identifier assignment differs: create always generates a fresh id, update
/// always carries the route id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
}

/// Per-request state threaded through the order chain
pub struct OrderContext {
    route_id: Option<String>,
    body: Value,
    found: Option<(usize, Order)>,
    normalized: Option<Order>,
}

impl OrderContext {
    /// Start a chain for a request with an optional `{order_id}` route
    /// segment and the raw `data` payload
    pub fn new(route_id: Option<String>, body: Value) -> Self {
        Self {
            route_id,
            body,
            found: None,
            normalized: None,
        }
    }

    /// Existence guard: resolve the route id to the stored order and its
    /// position in the collection
    pub async fn lookup(&mut self, store: &dyn Store<Order>) -> Result<(), ApiError> {
        let id = self.route_id.as_deref().unwrap_or_default();
        match store.find_indexed(id).await? {
            Some(found) => {
                self.found = Some(found);
                Ok(())
            }
            None => Err(ApiError::NotFound(format!("Order does not exist: {id}."))),
        }
    }

    /// Guard: a body id, when present, must equal the route id
    ///
    /// An empty-string body id counts as absent.
    pub fn check_id_matches_route(&self) -> Result<(), ApiError> {
        if let Some(body_id) = non_empty_str(&self.body, "id") {
            if self.route_id.as_deref() != Some(body_id) {
                return Err(ApiError::BadRequest(format!(
                    "Order id does not match route id. Order: {}, Route: {}",
                    body_id,
                    self.route_id.as_deref().unwrap_or_default()
                )));
            }
        }
        Ok(())
    }

    /// Validator: shape-check the payload and compute the normalized order
    ///
    /// Every dish line must carry an integer quantity >= 1. A missing status
    /// defaults to pending on create and is rejected on update; an
    /// unrecognized status is always rejected.
    pub fn validate(&mut self, ids: &IdGenerator, op: WriteOp) -> Result<(), ApiError> {
        let Some(deliver_to) = non_empty_str(&self.body, "deliverTo") else {
            return Err(ApiError::BadRequest(
                "Order must include a deliverTo".to_string(),
            ));
        };
        let Some(mobile_number) = non_empty_str(&self.body, "mobileNumber") else {
            return Err(ApiError::BadRequest(
                "Order must include a mobileNumber".to_string(),
            ));
        };

        let dishes_value = match self.body.get("dishes") {
            Some(value) if !value.is_null() => value,
            _ => {
                return Err(ApiError::BadRequest(
                    "Order must include a dish".to_string(),
                ));
            }
        };
        let items_value = match dishes_value.as_array() {
            Some(items) if !items.is_empty() => items,
            _ => {
                return Err(ApiError::BadRequest(
                    "Order must include at least one dish".to_string(),
                ));
            }
        };

        let mut dishes = Vec::with_capacity(items_value.len());
        for (i, item) in items_value.iter().enumerate() {
            let quantity = match item.get("quantity").and_then(Value::as_i64) {
                Some(quantity) if quantity >= 1 => quantity,
                _ => {
                    return Err(ApiError::BadRequest(format!(
                        "Dish {i} must have a quantity that is an integer greater than 0"
                    )));
                }
            };

            let mut extra = item.as_object().cloned().unwrap_or_default();
            extra.remove("quantity");
            let dish_id = match extra.get("dishId").and_then(Value::as_str) {
                Some(dish_id) => {
                    let dish_id = dish_id.to_string();
                    extra.remove("dishId");
                    Some(dish_id)
                }
                None => None,
            };

            dishes.push(OrderItem {
                dish_id,
                quantity,
                extra,
            });
        }

        let status = match non_empty_str(&self.body, "status") {
            Some(status) => match OrderStatus::parse(status) {
                Some(status) => status,
                None => return Err(ApiError::BadRequest(STATUS_MESSAGE.to_string())),
            },
            None => match op {
                WriteOp::Create => OrderStatus::Pending,
                WriteOp::Update => return Err(ApiError::BadRequest(STATUS_MESSAGE.to_string())),
            },
        };

        let id = match op {
            WriteOp::Create => ids.next_id(),
            WriteOp::Update => self
                .route_id
                .clone()
                .ok_or_else(|| ApiError::Internal("order update without a route id".to_string()))?,
        };

        self.normalized = Some(Order {
            id,
            deliver_to: deliver_to.to_string(),
            mobile_number: mobile_number.to_string(),
            status,
            dishes,
        });
        Ok(())
    }

    /// Lifecycle guard for updates: delivered is terminal and the status may
    /// only move forward
    pub fn check_update_allowed(&self) -> Result<(), ApiError> {
        let stored = self.found()?.1.status;
        let next = self.normalized()?.status;

        if stored.is_terminal() {
            return Err(ApiError::BadRequest(
                "A delivered order cannot be changed".to_string(),
            ));
        }
        if !stored.can_advance_to(next) {
            return Err(ApiError::BadRequest(format!(
                "Order status can not change from {stored} to {next}"
            )));
        }
        Ok(())
    }

    /// Lifecycle guard for deletion: only pending orders may be deleted
    pub fn check_delete_allowed(&self) -> Result<(), ApiError> {
        if self.found()?.1.status != OrderStatus::Pending {
            return Err(ApiError::BadRequest(
                "An order cannot be deleted unless it is pending".to_string(),
            ));
        }
        Ok(())
    }

    /// The position and order resolved by [`lookup`](Self::lookup)
    pub fn found(&self) -> Result<&(usize, Order), ApiError> {
        self.found
            .as_ref()
            .ok_or_else(|| ApiError::Internal("order lookup stage did not run".to_string()))
    }

    /// The normalized order computed by [`validate`](Self::validate)
    pub fn normalized(&self) -> Result<&Order, ApiError> {
        self.normalized
            .as_ref()
            .ok_or_else(|| ApiError::Internal("order validation stage did not run".to_string()))
    }
}

/// Merge the stored order with the normalized payload, new fields winning
///
/// The id is immutable once assigned.
pub fn merge(found: &Order, incoming: &Order) -> Result<Order, ApiError> {
    if incoming.id != found.id {
        return Err(ApiError::BadRequest(format!(
            "You can not change existing order id {} to {}",
            found.id, incoming.id
        )));
    }
    Ok(Order {
        id: found.id.clone(),
        ..incoming.clone()
    })
}
