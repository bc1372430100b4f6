//! Rutas HTTP
//!
//! Un router por grupo de recursos, montados sobre el router principal.

pub mod address_routes;
pub mod maintenance_routes;
pub mod report_routes;
pub mod schedule_routes;
pub mod supplier_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Router principal de la API
pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/suppliers", supplier_routes::create_supplier_router())
        .nest("/addresses", address_routes::create_address_router())
        .nest("/maintenance-events", maintenance_routes::create_maintenance_router())
        .nest("/schedules", schedule_routes::create_schedule_router())
        .nest("/reports", report_routes::create_report_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "¡API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
