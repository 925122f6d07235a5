//! Order handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CustomerId, NewOrder, Order, OrderId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub name: String,
    pub cost: Decimal,
    pub customer_id: i32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            name: request.name,
            cost: request.cost,
            customer_id: CustomerId(request.customer_id),
        }
    }
}

/// Request body for updating an order: the full record, id included
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub id: i32,
    pub name: String,
    pub cost: Decimal,
    pub customer_id: i32,
}

impl From<UpdateOrderRequest> for Order {
    fn from(request: UpdateOrderRequest) -> Self {
        Order {
            id: OrderId(request.id),
            name: request.name,
            cost: request.cost,
            customer_id: CustomerId(request.customer_id),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub id: i32,
    pub name: String,
    /// Serialized as a decimal string, e.g. "12.50"
    pub cost: Decimal,
    pub customer_id: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.0,
            name: order.name,
            cost: order.cost,
            customer_id: order.customer_id.0,
        }
    }
}

/// GET /get-orders/
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.list().await?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// GET /get-order-by-id/:id
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state
        .order_service
        .get(&OrderId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

    Ok(Json(order.into()))
}

/// POST /create-order/
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = state.order_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// PUT /update-order/
pub async fn update_order(
    State(state): State<AppState>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.update(request.into()).await?;

    Ok(Json(order.into()))
}

/// GET /get-orders-by-customer-id/:id
///
/// An empty list when the customer has no orders (or does not exist).
pub async fn list_orders_by_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state
        .order_service
        .list_by_customer(&CustomerId(id))
        .await?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
