use super::{parse_id, write_outcome, MessageResponse};
use crate::api::errors::{bad_request, ApiError};
use crate::constants::*;
use crate::db::{Car, CarRepository, Database, NewCar};
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Extension, Path},
    Json,
};
use tracing::{error, warn};

/// Lists every car
///
/// # Returns
/// * `Result<Json<Vec<Car>>, ApiError>` - All cars, or a 400 if the database fails
#[axum::debug_handler]
pub async fn list_cars(
    Extension(database): Extension<Database>,
) -> Result<Json<Vec<Car>>, ApiError> {
    database
        .run(|conn| CarRepository::new(conn).list_cars())
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list cars: {}", e);
            bad_request(CAR_LIST_FAILED)
        })
}

/// Registers a new car
///
/// # Arguments
/// * `database` - Database connection pool
/// * `payload` - JSON body with `marca`, `modelo`, `ano` and `cor`
///
/// # Returns
/// * `Result<Json<MessageResponse>, ApiError>` - Success message, or a 400 when
///   the body is malformed or nothing was stored
#[axum::debug_handler]
pub async fn create_car(
    Extension(database): Extension<Database>,
    payload: Result<Json<NewCar>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(new_car) = payload.map_err(|e| {
        warn!("Rejected car payload: {}", e);
        bad_request(CAR_CREATE_FAILED)
    })?;

    let result = database
        .run(move |conn| CarRepository::new(conn).insert_car(&new_car))
        .await;

    write_outcome(
        "Create car",
        result,
        CAR_CREATED,
        CAR_NOT_CREATED,
        CAR_CREATE_FAILED,
    )
}

/// Removes the car identified by the `idCarro` path segment
#[axum::debug_handler]
pub async fn remove_car(
    Path(raw_id): Path<String>,
    Extension(database): Extension<Database>,
) -> Result<Json<MessageResponse>, ApiError> {
    let car_id = parse_id(&raw_id, CAR_REMOVE_FAILED)?;

    let result = database
        .run(move |conn| CarRepository::new(conn).remove_car(car_id))
        .await;

    write_outcome(
        &format!("Remove car {}", car_id),
        result,
        CAR_REMOVED,
        CAR_NOT_REMOVED,
        CAR_REMOVE_FAILED,
    )
}

/// Replaces the attributes of the car identified by the `idCarro` path segment
#[axum::debug_handler]
pub async fn update_car(
    Path(raw_id): Path<String>,
    Extension(database): Extension<Database>,
    payload: Result<Json<NewCar>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let car_id = parse_id(&raw_id, CAR_UPDATE_FAILED)?;
    let Json(changes) = payload.map_err(|e| {
        warn!("Rejected car payload: {}", e);
        bad_request(CAR_UPDATE_FAILED)
    })?;

    let result = database
        .run(move |conn| CarRepository::new(conn).update_car(car_id, &changes))
        .await;

    write_outcome(
        &format!("Update car {}", car_id),
        result,
        CAR_UPDATED,
        CAR_NOT_UPDATED,
        CAR_UPDATE_FAILED,
    )
}
