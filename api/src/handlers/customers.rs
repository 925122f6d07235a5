//! Customer handlers
//!
//! Endpoints for customer CRUD and the customer-with-orders view.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::orders::OrderResponse;
use crate::domain::entities::{Customer, CustomerId, CustomerWithOrders, NewCustomer};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing customers
#[derive(Debug, Deserialize)]
pub struct ListCustomersQuery {
    #[serde(default)]
    pub offset: u64,
    /// 0 means no limit
    #[serde(default)]
    pub limit: u64,
}

/// Request body for creating a customer (the id is assigned by the store)
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub address: String,
    pub email: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            name: request.name,
            address: request.address,
            email: request.email,
        }
    }
}

/// Request body for updating a customer: the full record, id included
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
}

impl From<UpdateCustomerRequest> for Customer {
    fn from(request: UpdateCustomerRequest) -> Self {
        Customer {
            id: CustomerId(request.id),
            name: request.name,
            address: request.address,
            email: request.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id.0,
            name: customer.name,
            address: customer.address,
            email: customer.email,
        }
    }
}

/// Customer fields plus its embedded orders
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerWithOrdersResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub orders: Vec<OrderResponse>,
}

impl From<CustomerWithOrders> for CustomerWithOrdersResponse {
    fn from(value: CustomerWithOrders) -> Self {
        CustomerWithOrdersResponse {
            id: value.customer.id.0,
            name: value.customer.name,
            address: value.customer.address,
            email: value.customer.email,
            orders: value.orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /get-customers/
///
/// List customers in insertion order, paged by `offset` and `limit`.
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state
        .customer_service
        .list(query.offset, query.limit)
        .await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// GET /get-customer-by-id/:id
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customer_service
        .get(&CustomerId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;

    Ok(Json(customer.into()))
}

/// POST /create-customer/
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let customer = state.customer_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// PUT /update-customer/
///
/// Overwrite the customer named by the body's `id`. Unknown ids are a 404.
pub async fn update_customer(
    State(state): State<AppState>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.customer_service.update(request.into()).await?;

    Ok(Json(customer.into()))
}

/// PUT /customers/:id
///
/// Same as `update_customer`, with the id taken from the path.
pub async fn replace_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = NewCustomer::from(request).with_id(CustomerId(id));
    let customer = state.customer_service.update(customer).await?;

    Ok(Json(customer.into()))
}

/// DELETE /customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.customer_service.delete(&CustomerId(id)).await?;

    Ok(Json(MessageResponse {
        message: "Customer deleted".to_string(),
    }))
}

/// GET /get-customer-with-orders/:id
///
/// Responds with `null` rather than 404 when the customer does not exist.
pub async fn get_customer_with_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<CustomerWithOrdersResponse>>, AppError> {
    let result = state
        .customer_service
        .get_with_orders(&CustomerId(id))
        .await?;

    Ok(Json(result.map(Into::into)))
}
