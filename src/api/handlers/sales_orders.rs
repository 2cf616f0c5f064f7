use super::{parse_id, write_outcome, MessageResponse};
use crate::api::errors::{bad_request, ApiError};
use crate::constants::*;
use crate::db::{Database, NewSalesOrder, SalesOrder, SalesOrderRepository};
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Extension, Path},
    Json,
};
use tracing::{error, warn};

/// Lists every sales order
#[axum::debug_handler]
pub async fn list_orders(
    Extension(database): Extension<Database>,
) -> Result<Json<Vec<SalesOrder>>, ApiError> {
    database
        .run(|conn| SalesOrderRepository::new(conn).list_orders())
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list sales orders: {}", e);
            bad_request(ORDER_LIST_FAILED)
        })
}

/// Registers a new sales order
///
/// The body carries `dataPedido`, `valorPedido`, `id_cliente` and `id_carro`.
/// The referenced client and car are not looked up.
#[axum::debug_handler]
pub async fn create_order(
    Extension(database): Extension<Database>,
    payload: Result<Json<NewSalesOrder>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(new_order) = payload.map_err(|e| {
        warn!("Rejected sales order payload: {}", e);
        bad_request(ORDER_CREATE_FAILED)
    })?;

    let result = database
        .run(move |conn| SalesOrderRepository::new(conn).insert_order(&new_order))
        .await;

    write_outcome(
        "Create sales order",
        result,
        ORDER_CREATED,
        ORDER_NOT_CREATED,
        ORDER_CREATE_FAILED,
    )
}

/// Removes the order identified by the `idPedidoVenda` path segment
#[axum::debug_handler]
pub async fn remove_order(
    Path(raw_id): Path<String>,
    Extension(database): Extension<Database>,
) -> Result<Json<MessageResponse>, ApiError> {
    let order_id = parse_id(&raw_id, ORDER_REMOVE_FAILED)?;

    let result = database
        .run(move |conn| SalesOrderRepository::new(conn).remove_order(order_id))
        .await;

    write_outcome(
        &format!("Remove sales order {}", order_id),
        result,
        ORDER_REMOVED,
        ORDER_NOT_REMOVED,
        ORDER_REMOVE_FAILED,
    )
}

#[axum::debug_handler]
pub async fn update_order(
    Path(raw_id): Path<String>,
    Extension(database): Extension<Database>,
    payload: Result<Json<NewSalesOrder>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let order_id = parse_id(&raw_id, ORDER_UPDATE_FAILED)?;
    let Json(changes) = payload.map_err(|e| {
        warn!("Rejected sales order payload: {}", e);
        bad_request(ORDER_UPDATE_FAILED)
    })?;

    let result = database
        .run(move |conn| SalesOrderRepository::new(conn).update_order(order_id, &changes))
        .await;

    write_outcome(
        &format!("Update sales order {}", order_id),
        result,
        ORDER_UPDATED,
        ORDER_NOT_UPDATED,
        ORDER_UPDATE_FAILED,
    )
}
