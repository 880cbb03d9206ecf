//! Application state and router assembly
//!
//! Produces a fully configured axum `Router` with the resource routes,
//! health checks, a JSON 404 fallback, and CORS/trace layers.

use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::error::ApiError;
use crate::core::id::IdGenerator;
use crate::core::store::{InMemoryStore, Store};
use crate::data;
use crate::dishes::{self, model::Dish};
use crate::orders::{self, model::Order};

/// Application state shared across handlers
///
/// Holds the two injected stores and the identifier generator both resource
/// chains draw from.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn Store<Dish>>,
    pub orders: Arc<dyn Store<Order>>,
    pub ids: IdGenerator,
}

impl AppState {
    /// State with empty stores (used by tests for isolation)
    pub fn new() -> Self {
        Self {
            dishes: Arc::new(InMemoryStore::<Dish>::new()),
            orders: Arc::new(InMemoryStore::<Order>::new()),
            ids: IdGenerator::new(),
        }
    }

    /// State with stores pre-seeded from the embedded data files
    pub fn seeded() -> anyhow::Result<Self> {
        Ok(Self {
            dishes: Arc::new(InMemoryStore::with_items(data::dishes()?)),
            orders: Arc::new(InMemoryStore::with_items(data::orders()?)),
            ids: IdGenerator::new(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route(
            "/dishes",
            get(dishes::handlers::list).post(dishes::handlers::create),
        )
        .route(
            "/dishes/{dish_id}",
            get(dishes::handlers::read).put(dishes::handlers::update),
        )
        .route(
            "/orders",
            get(orders::handlers::list).post(orders::handlers::create),
        )
        .route(
            "/orders/{order_id}",
            get(orders::handlers::read)
                .put(orders::handlers::update)
                .delete(orders::handlers::destroy),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

/// JSON 404 for routes outside the table
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Not found: {}", uri.path()))
}
