//! # GrubDash API
//!
//! A small REST API for a food delivery service, managing two resources
//! (dishes and orders) over in-memory stores.
//!
//! ## Architecture
//!
//! Each resource is served by a chain of stages executed before the terminal
//! handler:
//!
//! - **Existence guard**: resolves the route id against the store, or fails
//!   with 404.
//! - **Validator**: shape-checks the request payload and computes a normalized
//!   entity, assigning an identifier when the payload carries none.
//! - **Lifecycle guard** (orders only): checks status-transition legality.
//! - **Handler**: performs the list/create/read/update/delete and writes the
//!   response.
//!
//! Stages share a per-request context struct and short-circuit with
//! [`ApiError`](core::error::ApiError), which renders as an HTTP response with
//! an `{"error": message}` body.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let state = AppState::seeded()?;
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod dishes;
pub mod orders;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::core::{
        envelope::{DataBody, RequestBody},
        error::ApiError,
        id::IdGenerator,
        store::{InMemoryStore, Keyed, Store},
    };
    pub use crate::dishes::model::Dish;
    pub use crate::orders::model::{Order, OrderItem, OrderStatus};
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
