//! Validation chain for the dish resource
//!
//! Stages run in order (existence guard, validator, handler) and share a
//! [`DishContext`]. Each stage records what it derived for the stages after
//! it; any stage can short-circuit the rest by returning an [`ApiError`].

use crate::core::error::ApiError;
use crate::core::fields::{integer, non_empty_str};
use crate::core::id::IdGenerator;
use crate::core::store::Store;
use crate::dishes::model::Dish;
use serde_json::Value;

/// Per-request state threaded through the dish chain
pub struct DishContext {
    route_id: Option<String>,
    body: Value,
    found: Option<Dish>,
    normalized: Option<Dish>,
}

impl DishContext {
    /// Start a chain for a request with an optional `{dish_id}` route segment
    /// and the raw `data` payload
    pub fn new(route_id: Option<String>, body: Value) -> Self {
        Self {
            route_id,
            body,
            found: None,
            normalized: None,
        }
    }

    /// Existence guard: resolve the route id against the store
    ///
    /// Fails with 404 when no dish has that id.
    pub async fn lookup(&mut self, store: &dyn Store<Dish>) -> Result<(), ApiError> {
        let id = self.route_id.as_deref().unwrap_or_default();
        match store.find(id).await? {
            Some(dish) => {
                self.found = Some(dish);
                Ok(())
            }
            None => Err(ApiError::NotFound(format!("Dish does not exist: {id}."))),
        }
    }

    /// Validator: shape-check the payload and compute the normalized dish
    ///
    /// The effective id is the route id when present, otherwise a freshly
    /// generated one. An empty-string body id counts as absent.
    pub fn validate(&mut self, ids: &IdGenerator) -> Result<(), ApiError> {
        if let Some(body_id) = non_empty_str(&self.body, "id") {
            if self.route_id.as_deref() != Some(body_id) {
                return Err(ApiError::BadRequest(format!(
                    "Dish id does not match route id. Dish: {}, Route: {}",
                    body_id,
                    self.route_id.as_deref().unwrap_or_default()
                )));
            }
        }

        let Some(name) = non_empty_str(&self.body, "name") else {
            return Err(ApiError::BadRequest("Dish must include a name".to_string()));
        };
        let Some(description) = non_empty_str(&self.body, "description") else {
            return Err(ApiError::BadRequest(
                "Dish must include a description".to_string(),
            ));
        };

        let price = match integer(&self.body, "price") {
            Some(price) if price >= 0 => price,
            _ => {
                return Err(ApiError::BadRequest(
                    "Dish must have a price that is an integer greater than 0".to_string(),
                ));
            }
        };
        // Zero slips past the integer test above; the original API still
        // rejected it with its required-field message, and so do we.
        if price == 0 {
            return Err(ApiError::BadRequest(
                "Dish must include a price".to_string(),
            ));
        }

        let Some(image_url) = non_empty_str(&self.body, "image_url") else {
            return Err(ApiError::BadRequest(
                "Dish must include a image_url".to_string(),
            ));
        };

        let id = match &self.route_id {
            Some(route_id) => route_id.clone(),
            None => ids.next_id(),
        };

        self.normalized = Some(Dish {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_url: image_url.to_string(),
        });
        Ok(())
    }

    /// The dish resolved by [`lookup`](Self::lookup)
    pub fn found(&self) -> Result<&Dish, ApiError> {
        self.found
            .as_ref()
            .ok_or_else(|| ApiError::Internal("dish lookup stage did not run".to_string()))
    }

    /// The normalized dish computed by [`validate`](Self::validate)
    pub fn normalized(&self) -> Result<&Dish, ApiError> {
        self.normalized
            .as_ref()
            .ok_or_else(|| ApiError::Internal("dish validation stage did not run".to_string()))
    }
}

/// Merge the stored dish with the normalized payload, new fields winning
///
/// The id is immutable once assigned; a normalized id differing from the
/// stored one is rejected.
pub fn merge(found: &Dish, incoming: &Dish) -> Result<Dish, ApiError> {
    if incoming.id != found.id {
        return Err(ApiError::BadRequest(format!(
            "You can not change existing dish id {} to {}",
            found.id, incoming.id
        )));
    }
    Ok(Dish {
        id: found.id.clone(),
        ..incoming.clone()
    })
}
