use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::MaintenanceRepository;
use crate::models::{EventFilters, MaintenanceEvent, MaintenanceEventData, MaintenanceType};
use crate::utils::errors::{database_error, AppResult};

const EVENT_COLUMNS: &str =
    "id, vehicle_id, type_id, description, date, odometer, cost, supplier_id";

pub struct PgMaintenanceRepository {
    pool: PgPool,
}

impl PgMaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceRepository for PgMaintenanceRepository {
    async fn list(&self, filters: &EventFilters) -> AppResult<Vec<MaintenanceEvent>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM maintenance_events WHERE TRUE",
            EVENT_COLUMNS
        ));

        if let Some(from) = filters.date_from {
            query.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = filters.date_to {
            query.push(" AND date <= ").push_bind(to);
        }
        query.push(" ORDER BY date, id");

        query
            .build_query_as::<MaintenanceEvent>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listando mantenciones", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<MaintenanceEvent>> {
        sqlx::query_as::<_, MaintenanceEvent>(&format!(
            "SELECT {} FROM maintenance_events WHERE id = $1",
            EVENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error buscando mantención", e))
    }

    async fn max_odometer(&self, vehicle_id: i32) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(odometer) FROM maintenance_events WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error obteniendo último kilometraje", e))
    }

    async fn create(&self, data: MaintenanceEventData) -> AppResult<MaintenanceEvent> {
        sqlx::query_as::<_, MaintenanceEvent>(&format!(
            r#"
            INSERT INTO maintenance_events
                (vehicle_id, type_id, description, date, odometer, cost, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(data.vehicle_id)
        .bind(data.type_id)
        .bind(data.description)
        .bind(data.date)
        .bind(data.odometer)
        .bind(data.cost)
        .bind(data.supplier_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error creando mantención", e))
    }

    async fn update(&self, id: i32, data: MaintenanceEventData) -> AppResult<Option<MaintenanceEvent>> {
        sqlx::query_as::<_, MaintenanceEvent>(&format!(
            r#"
            UPDATE maintenance_events
            SET vehicle_id = $2, type_id = $3, description = $4, date = $5,
                odometer = $6, cost = $7, supplier_id = $8
            WHERE id = $1
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(id)
        .bind(data.vehicle_id)
        .bind(data.type_id)
        .bind(data.description)
        .bind(data.date)
        .bind(data.odometer)
        .bind(data.cost)
        .bind(data.supplier_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error actualizando mantención", e))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM maintenance_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando mantención", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_types(&self) -> AppResult<Vec<MaintenanceType>> {
        sqlx::query_as::<_, MaintenanceType>("SELECT id, name FROM maintenance_types ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error obteniendo tipos de mantención", e))
    }
}
