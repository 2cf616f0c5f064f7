use super::{parse_id, write_outcome, MessageResponse};
use crate::api::errors::{bad_request, ApiError};
use crate::constants::*;
use crate::db::{Client, ClientRepository, Database, NewClient};
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Extension, Path},
    Json,
};
use tracing::{error, warn};

/// Lists every client
#[axum::debug_handler]
pub async fn list_clients(
    Extension(database): Extension<Database>,
) -> Result<Json<Vec<Client>>, ApiError> {
    database
        .run(|conn| ClientRepository::new(conn).list_clients())
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list clients: {}", e);
            bad_request(CLIENT_LIST_FAILED)
        })
}

/// Registers a new client from a `nome` / `cpf` / `telefone` body
#[axum::debug_handler]
pub async fn create_client(
    Extension(database): Extension<Database>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(new_client) = payload.map_err(|e| {
        warn!("Rejected client payload: {}", e);
        bad_request(CLIENT_CREATE_FAILED)
    })?;

    let result = database
        .run(move |conn| ClientRepository::new(conn).insert_client(&new_client))
        .await;

    write_outcome(
        "Create client",
        result,
        CLIENT_CREATED,
        CLIENT_NOT_CREATED,
        CLIENT_CREATE_FAILED,
    )
}

#[axum::debug_handler]
pub async fn remove_client(
    Path(raw_id): Path<String>,
    Extension(database): Extension<Database>,
) -> Result<Json<MessageResponse>, ApiError> {
    let client_id = parse_id(&raw_id, CLIENT_REMOVE_FAILED)?;

    let result = database
        .run(move |conn| ClientRepository::new(conn).remove_client(client_id))
        .await;

    write_outcome(
        &format!("Remove client {}", client_id),
        result,
        CLIENT_REMOVED,
        CLIENT_NOT_REMOVED,
        CLIENT_REMOVE_FAILED,
    )
}

#[axum::debug_handler]
pub async fn update_client(
    Path(raw_id): Path<String>,
    Extension(database): Extension<Database>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let client_id = parse_id(&raw_id, CLIENT_UPDATE_FAILED)?;
    let Json(changes) = payload.map_err(|e| {
        warn!("Rejected client payload: {}", e);
        bad_request(CLIENT_UPDATE_FAILED)
    })?;

    let result = database
        .run(move |conn| ClientRepository::new(conn).update_client(client_id, &changes))
        .await;

    write_outcome(
        &format!("Update client {}", client_id),
        result,
        CLIENT_UPDATED,
        CLIENT_NOT_UPDATED,
        CLIENT_UPDATE_FAILED,
    )
}
