use async_trait::async_trait;
use sqlx::PgPool;

use super::VehicleRepository;
use crate::models::{Vehicle, VehicleData};
use crate::utils::errors::{database_error, AppResult};

const VEHICLE_COLUMNS: &str = "id, plate, make, model, year, odometer";

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles ORDER BY id",
            VEHICLE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Error listando vehículos", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE id = $1",
            VEHICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error buscando vehículo", e))
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE plate = $1",
            VEHICLE_COLUMNS
        ))
        .bind(plate)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error buscando vehículo por patente", e))
    }

    async fn create(&self, data: VehicleData) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles (plate, make, model, year, odometer)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(data.plate)
        .bind(data.make)
        .bind(data.model)
        .bind(data.year)
        .bind(data.odometer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error creando vehículo", e))
    }

    async fn update(&self, id: i32, data: VehicleData) -> AppResult<Option<Vehicle>> {
        sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            UPDATE vehicles
            SET plate = $2, make = $3, model = $4, year = $5, odometer = $6
            WHERE id = $1
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(id)
        .bind(data.plate)
        .bind(data.make)
        .bind(data.model)
        .bind(data.year)
        .bind(data.odometer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error actualizando vehículo", e))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando vehículo", e))?;

        Ok(result.rows_affected() > 0)
    }
}
