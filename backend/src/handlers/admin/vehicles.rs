use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::str::FromStr;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        user::User,
        vehicle::{AdminVehicleListQuery, Vehicle, VehiclePayload, VehicleQuery, VehicleStatus},
    },
    state::AppState,
    types::VehicleId,
};

/// Every vehicle regardless of status, newest first.
pub async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(q): Query<AdminVehicleListQuery>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    ensure_admin(&user)?;
    let status = parse_status_filter(q.status.as_deref())?;
    let vehicles = state
        .vehicles
        .list(&state.pool, VehicleQuery::admin_listing(status))
        .await?;
    Ok(Json(vehicles))
}

pub async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<VehiclePayload>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    ensure_admin(&user)?;
    payload.validate()?;

    let vehicle = Vehicle::from_payload(payload);
    let created = state.vehicles.create(&state.pool, &vehicle).await?;
    tracing::info!(vehicle_id = %created.id, admin_id = %user.id, "vehicle created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Whole-record update; concurrent edits resolve as last write wins.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(vehicle_id): Path<String>,
    Json(payload): Json<VehiclePayload>,
) -> Result<Json<Vehicle>, AppError> {
    ensure_admin(&user)?;
    let id = parse_vehicle_id(&vehicle_id)?;
    payload.validate()?;

    let mut vehicle = state.vehicles.find_by_id(&state.pool, id).await?;
    vehicle.apply(payload);
    let updated = state.vehicles.update(&state.pool, &vehicle).await?;
    tracing::info!(vehicle_id = %updated.id, admin_id = %user.id, "vehicle updated");
    Ok(Json(updated))
}

pub async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    ensure_admin(&user)?;
    let id = parse_vehicle_id(&vehicle_id)?;

    state.vehicles.delete(&state.pool, id).await?;
    tracing::info!(vehicle_id = %id, admin_id = %user.id, "vehicle deleted");
    Ok(Json(json!({"message": "Vehicle deleted", "id": id})))
}

fn ensure_admin(user: &User) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Forbidden".into()))
    }
}

fn parse_vehicle_id(raw: &str) -> Result<VehicleId, AppError> {
    VehicleId::from_str(raw).map_err(|_| AppError::BadRequest("Invalid vehicle ID".into()))
}

/// Empty or `all` means no status constraint.
fn parse_status_filter(raw: Option<&str>) -> Result<Option<VehicleStatus>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => VehicleStatus::from_str(value)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Unknown vehicle status: {}", value))),
    }
}
