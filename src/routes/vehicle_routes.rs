use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::VehicleController;
use crate::dto::api_response::MessageResponse;
use crate::dto::vehicle_dto::VehicleRequest;
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

// GET usa la patente; PUT y DELETE usan el id numérico
pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:key",
            get(get_vehicle_by_plate)
                .put(update_vehicle)
                .delete(delete_vehicle),
        )
}

fn controller(state: &AppState) -> VehicleController {
    VehicleController::new(state.repositories.vehicles.clone())
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn get_vehicle_by_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    Ok(Json(controller(&state).get_by_plate(&plate).await?))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(MessageResponse::ok("Vehículo eliminado correctamente")))
}
