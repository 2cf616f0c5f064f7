//! API routes configuration module

use crate::api::errors::{bad_request, ApiError};
use crate::api::handlers::*;
use crate::constants::UNSUPPORTED_REQUEST;
use crate::db::Database;
use axum::{
    http::StatusCode,
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Extension, Router,
};

/// Creates and configures the API router with all routes
///
/// Unknown paths and unsupported methods are answered like any other failure,
/// a 400 with a JSON message.
///
/// # Arguments
/// * `database` - Database connection pool to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(database: Database) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/lista/carros", get(list_cars))
        .route("/novo/carro", post(create_car))
        .route("/delete/carro/:idCarro", delete(remove_car))
        .route("/atualizar/carro/:idCarro", put(update_car))
        .route("/lista/clientes", get(list_clients))
        .route("/novo/clientes", post(create_client))
        .route("/delete/cliente/:idCliente", delete(remove_client))
        .route("/atualizar/cliente/:idCliente", put(update_client))
        .route("/lista/pedidos", get(list_orders))
        .route("/novo/pedidos", post(create_order))
        .route("/delete/pedido/:idPedidoVenda", delete(remove_order))
        .route("/atualizar/pedido/:idPedidoVenda", put(update_order))
        .fallback(unsupported_request)
        .layer(map_response(reject_method_not_allowed))
        .layer(Extension(database))
}

async fn unsupported_request() -> ApiError {
    bad_request(UNSUPPORTED_REQUEST)
}

/// Rewrites axum's empty 405 into the JSON 400 used everywhere else
async fn reject_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        bad_request(UNSUPPORTED_REQUEST).into_response()
    } else {
        response
    }
}
