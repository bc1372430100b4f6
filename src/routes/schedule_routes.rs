use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ScheduleController;
use crate::dto::api_response::MessageResponse;
use crate::dto::schedule_dto::ScheduleRequest;
use crate::models::MaintenanceSchedule;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
}

fn controller(state: &AppState) -> ScheduleController {
    ScheduleController::new(state.repositories.schedules.clone())
}

async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceSchedule>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MaintenanceSchedule>, AppError> {
    Ok(Json(controller(&state).get_by_id(id).await?))
}

async fn create_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<MaintenanceSchedule>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<MaintenanceSchedule>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(MessageResponse::ok("Programación eliminada correctamente")))
}
