use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::MaintenanceController;
use crate::dto::api_response::MessageResponse;
use crate::dto::maintenance_dto::MaintenanceEventRequest;
use crate::models::{EventFilters, MaintenanceEvent, MaintenanceType};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/types", get(list_types))
        .route(
            "/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
}

fn controller(state: &AppState) -> MaintenanceController {
    MaintenanceController::new(state.repositories.maintenance.clone())
}

async fn list_events(
    State(state): State<AppState>,
    Query(filters): Query<EventFilters>,
) -> Result<Json<Vec<MaintenanceEvent>>, AppError> {
    Ok(Json(controller(&state).list(filters).await?))
}

async fn list_types(State(state): State<AppState>) -> Result<Json<Vec<MaintenanceType>>, AppError> {
    Ok(Json(controller(&state).list_types().await?))
}

async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MaintenanceEvent>, AppError> {
    Ok(Json(controller(&state).get_by_id(id).await?))
}

async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<MaintenanceEventRequest>,
) -> Result<Json<MaintenanceEvent>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<MaintenanceEventRequest>,
) -> Result<Json<MaintenanceEvent>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(MessageResponse::ok("Mantención eliminada correctamente")))
}
