//! HTTP handlers for the order resource

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::core::envelope::{DataBody, RequestBody};
use crate::core::error::ApiError;
use crate::orders::chain::{self, OrderContext, WriteOp};
use crate::orders::model::Order;
use crate::server::AppState;

/// GET /orders
pub async fn list(State(state): State<AppState>) -> Result<Json<DataBody<Vec<Order>>>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(DataBody { data: orders }))
}

/// POST /orders
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<RequestBody>,
) -> Result<(StatusCode, Json<DataBody<Order>>), ApiError> {
    let mut ctx = OrderContext::new(None, body.data);
    ctx.validate(&state.ids, WriteOp::Create)?;

    let order = state.orders.append(ctx.normalized()?.clone()).await?;
    Ok((StatusCode::CREATED, Json(DataBody { data: order })))
}

/// GET /orders/{order_id}
pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<DataBody<Order>>, ApiError> {
    let mut ctx = OrderContext::new(Some(order_id), Value::Null);
    ctx.lookup(state.orders.as_ref()).await?;

    let (_, order) = ctx.found()?;
    Ok(Json(DataBody {
        data: order.clone(),
    }))
}

/// PUT /orders/{order_id}
pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(body): Json<RequestBody>,
) -> Result<Json<DataBody<Order>>, ApiError> {
    let mut ctx = OrderContext::new(Some(order_id), body.data);
    ctx.lookup(state.orders.as_ref()).await?;
    ctx.check_id_matches_route()?;
    ctx.validate(&state.ids, WriteOp::Update)?;
    ctx.check_update_allowed()?;

    let (_, found) = ctx.found()?;
    let merged = chain::merge(found, ctx.normalized()?)?;
    state.orders.replace(&merged.id, merged.clone()).await?;

    Ok(Json(DataBody { data: merged }))
}

/// DELETE /orders/{order_id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut ctx = OrderContext::new(Some(order_id), Value::Null);
    ctx.lookup(state.orders.as_ref()).await?;
    ctx.check_delete_allowed()?;

    let (index, _) = ctx.found()?;
    if let Some(deleted) = state.orders.splice(*index).await? {
        tracing::debug!(order_id = %deleted.id, "order deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
