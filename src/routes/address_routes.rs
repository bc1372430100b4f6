use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::AddressController;
use crate::dto::address_dto::AddressRequest;
use crate::models::Address;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_address_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route("/:id", get(get_address))
}

fn controller(state: &AppState) -> AddressController {
    AddressController::new(state.repositories.addresses.clone())
}

async fn list_addresses(State(state): State<AppState>) -> Result<Json<Vec<Address>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Address>, AppError> {
    Ok(Json(controller(&state).get_by_id(id).await?))
}

async fn create_address(
    State(state): State<AppState>,
    Json(request): Json<AddressRequest>,
) -> Result<Json<Address>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}
