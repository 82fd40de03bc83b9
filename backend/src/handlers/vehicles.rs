//! Public, unauthenticated vehicle endpoints backing the marketing site.

use axum::{
    extract::{Path, State},
    Json,
};
use std::str::FromStr;

use crate::{
    error::AppError,
    models::vehicle::{Vehicle, VehicleQuery},
    state::AppState,
    types::VehicleId,
};

/// Available vehicles only, featured first then newest.
pub async fn list_available_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let vehicles = state
        .vehicles
        .list(&state.pool, VehicleQuery::public_listing())
        .await?;
    Ok(Json(vehicles))
}

pub async fn get_available_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let id = VehicleId::from_str(&vehicle_id)
        .map_err(|_| AppError::BadRequest("Invalid vehicle ID".into()))?;
    let vehicle = state.vehicles.find_by_id(&state.pool, id).await?;
    if !vehicle.status.is_public() {
        return Err(AppError::NotFound("Vehicle not found".into()));
    }
    Ok(Json(vehicle))
}
