use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::dto::report_dto::ReportQuery;
use crate::models::{ReportFilters, ReportRow};
use crate::repositories::ReportRepository;
use crate::services::{report_chart, report_export};
use crate::utils::errors::{AppError, AppResult};

/// Resultado del endpoint de reportes según el modo solicitado
#[derive(Debug)]
pub enum ReportOutput {
    Rows(Vec<ReportRow>),
    Spreadsheet { filename: String, bytes: Vec<u8> },
    Chart(String),
}

pub struct ReportController {
    repository: Arc<dyn ReportRepository>,
}

impl ReportController {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn rows(&self, filters: &ReportFilters) -> AppResult<Vec<ReportRow>> {
        let records = self.repository.records(filters).await?;
        Ok(records.into_iter().map(ReportRow::from).collect())
    }

    /// Planilla tiene prioridad sobre gráfico; sin flags se devuelven las filas
    pub async fn generate(&self, filters: ReportFilters, query: ReportQuery) -> AppResult<ReportOutput> {
        let rows = self.rows(&filters).await?;
        info!("📊 Reporte generado con {} filas", rows.len());

        if query.export_excel {
            let bytes = report_export::write_spreadsheet(&rows)?;
            let filename = report_export::spreadsheet_filename(Local::now().naive_local());
            return Ok(ReportOutput::Spreadsheet { filename, bytes });
        }

        if query.generate_chart {
            if rows.is_empty() {
                return Err(AppError::NotFound("No hay datos para graficar".to_string()));
            }
            let totals = report_chart::cost_by_type(&rows);
            let svg = report_chart::render_bar_chart(&totals)?;
            return Ok(ReportOutput::Chart(svg));
        }

        Ok(ReportOutput::Rows(rows))
    }
}
