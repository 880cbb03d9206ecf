//! HTTP handlers for the dish resource
//!
//! Each handler runs its chain stages in order and short-circuits on the
//! first failure via `?`. Dishes are never deleted.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::core::envelope::{DataBody, RequestBody};
use crate::core::error::ApiError;
use crate::dishes::chain::{self, DishContext};
use crate::dishes::model::Dish;
use crate::server::AppState;

/// GET /dishes
pub async fn list(State(state): State<AppState>) -> Result<Json<DataBody<Vec<Dish>>>, ApiError> {
    let dishes = state.dishes.list().await?;
    Ok(Json(DataBody { data: dishes }))
}

/// POST /dishes
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<RequestBody>,
) -> Result<(StatusCode, Json<DataBody<Dish>>), ApiError> {
    let mut ctx = DishContext::new(None, body.data);
    ctx.validate(&state.ids)?;

    let dish = state.dishes.append(ctx.normalized()?.clone()).await?;
    Ok((StatusCode::CREATED, Json(DataBody { data: dish })))
}

/// GET /dishes/{dish_id}
pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataBody<Dish>>, ApiError> {
    let mut ctx = DishContext::new(Some(dish_id), Value::Null);
    ctx.lookup(state.dishes.as_ref()).await?;

    Ok(Json(DataBody {
        data: ctx.found()?.clone(),
    }))
}

/// PUT /dishes/{dish_id}
pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    Json(body): Json<RequestBody>,
) -> Result<Json<DataBody<Dish>>, ApiError> {
    let mut ctx = DishContext::new(Some(dish_id), body.data);
    ctx.lookup(state.dishes.as_ref()).await?;
    ctx.validate(&state.ids)?;

    let merged = chain::merge(ctx.found()?, ctx.normalized()?)?;
    state.dishes.replace(&merged.id, merged.clone()).await?;

    Ok(Json(DataBody { data: merged }))
}
