use async_trait::async_trait;
use sqlx::PgPool;

use super::ScheduleRepository;
use crate::models::{MaintenanceSchedule, ScheduleData};
use crate::utils::errors::{database_error, AppResult};

const SCHEDULE_COLUMNS: &str = "id, vehicle_id, type_id, km_frequency, month_frequency, \
     last_date, last_odometer, next_estimated_date, next_estimated_odometer";

pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    async fn list(&self) -> AppResult<Vec<MaintenanceSchedule>> {
        sqlx::query_as::<_, MaintenanceSchedule>(&format!(
            "SELECT {} FROM maintenance_schedules ORDER BY id",
            SCHEDULE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Error listando programaciones", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<MaintenanceSchedule>> {
        sqlx::query_as::<_, MaintenanceSchedule>(&format!(
            "SELECT {} FROM maintenance_schedules WHERE id = $1",
            SCHEDULE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error buscando programación", e))
    }

    async fn create(&self, data: ScheduleData) -> AppResult<MaintenanceSchedule> {
        sqlx::query_as::<_, MaintenanceSchedule>(&format!(
            r#"
            INSERT INTO maintenance_schedules
                (vehicle_id, type_id, km_frequency, month_frequency, last_date,
                 last_odometer, next_estimated_date, next_estimated_odometer)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            SCHEDULE_COLUMNS
        ))
        .bind(data.vehicle_id)
        .bind(data.type_id)
        .bind(data.km_frequency)
        .bind(data.month_frequency)
        .bind(data.last_date)
        .bind(data.last_odometer)
        .bind(data.next_estimated_date)
        .bind(data.next_estimated_odometer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error creando programación", e))
    }

    async fn update(&self, id: i32, data: ScheduleData) -> AppResult<Option<MaintenanceSchedule>> {
        sqlx::query_as::<_, MaintenanceSchedule>(&format!(
            r#"
            UPDATE maintenance_schedules
            SET vehicle_id = $2, type_id = $3, km_frequency = $4, month_frequency = $5,
                last_date = $6, last_odometer = $7, next_estimated_date = $8,
                next_estimated_odometer = $9
            WHERE id = $1
            RETURNING {}
            "#,
            SCHEDULE_COLUMNS
        ))
        .bind(id)
        .bind(data.vehicle_id)
        .bind(data.type_id)
        .bind(data.km_frequency)
        .bind(data.month_frequency)
        .bind(data.last_date)
        .bind(data.last_odometer)
        .bind(data.next_estimated_date)
        .bind(data.next_estimated_odometer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error actualizando programación", e))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM maintenance_schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando programación", e))?;

        Ok(result.rows_affected() > 0)
    }
}
