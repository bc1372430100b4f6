use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::ReportRepository;
use crate::models::{ReportFilters, ReportRecord};
use crate::utils::errors::{database_error, AppResult};

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Construye la consulta del reporte con los filtros presentes
fn build_report_query(filters: &ReportFilters) -> QueryBuilder<'_, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        SELECT e.id, v.plate, t.name AS type_name, s.name AS supplier_name, e.date, e.cost
        FROM maintenance_events e
        INNER JOIN vehicles v ON v.id = e.vehicle_id
        INNER JOIN maintenance_types t ON t.id = e.type_id
        INNER JOIN suppliers s ON s.id = e.supplier_id
        WHERE TRUE
        "#,
    );

    if let Some(from) = filters.date_from {
        query.push(" AND e.date >= ").push_bind(from);
    }
    if let Some(to) = filters.date_to {
        query.push(" AND e.date <= ").push_bind(to);
    }
    if let Some(plate) = &filters.plate {
        query.push(" AND v.plate = ").push_bind(plate);
    }
    if let Some(type_name) = &filters.maintenance_type {
        query.push(" AND t.name = ").push_bind(type_name);
    }
    if let Some(supplier) = &filters.supplier {
        query.push(" AND s.name = ").push_bind(supplier);
    }
    query.push(" ORDER BY e.date, e.id");

    query
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn records(&self, filters: &ReportFilters) -> AppResult<Vec<ReportRecord>> {
        build_report_query(filters)
            .build_query_as::<ReportRecord>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error generando reporte", e))
    }
}
