use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::controllers::{ReportController, ReportOutput};
use crate::dto::report_dto::ReportQuery;
use crate::models::ReportFilters;
use crate::services::report_chart::CHART_CONTENT_TYPE;
use crate::services::report_export::SPREADSHEET_CONTENT_TYPE;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/", post(generate_report))
}

async fn generate_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    Json(filters): Json<ReportFilters>,
) -> Result<Response, AppError> {
    let controller = ReportController::new(state.repositories.reports.clone());

    let response = match controller.generate(filters, query).await? {
        ReportOutput::Rows(rows) => Json(rows).into_response(),
        ReportOutput::Spreadsheet { filename, bytes } => {
            let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
                .map_err(|e| AppError::Internal(e.to_string()))?;
            (
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static(SPREADSHEET_CONTENT_TYPE)),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        ReportOutput::Chart(svg) => (
            [(header::CONTENT_TYPE, HeaderValue::from_static(CHART_CONTENT_TYPE))],
            svg,
        )
            .into_response(),
    };

    Ok(response)
}
