use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::SupplierController;
use crate::dto::api_response::MessageResponse;
use crate::dto::supplier_dto::SupplierRequest;
use crate::models::SupplierWithAddress;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_supplier_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/:id",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

fn controller(state: &AppState) -> SupplierController {
    SupplierController::new(state.repositories.suppliers.clone())
}

async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupplierWithAddress>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SupplierWithAddress>, AppError> {
    Ok(Json(controller(&state).get_by_id(id).await?))
}

async fn create_supplier(
    State(state): State<AppState>,
    Json(request): Json<SupplierRequest>,
) -> Result<Json<SupplierWithAddress>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SupplierRequest>,
) -> Result<Json<SupplierWithAddress>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(MessageResponse::ok("Proveedor eliminado correctamente")))
}
