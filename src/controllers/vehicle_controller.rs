use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::VehicleRequest;
use crate::models::{Vehicle, VehicleData};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.list().await
    }

    pub async fn get_by_plate(&self, plate: &str) -> AppResult<Vehicle> {
        self.repository
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado.".to_string()))
    }

    pub async fn create(&self, request: VehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        let data = VehicleData::from(request);

        // Verificación previa; la restricción UNIQUE de la tabla cubre la carrera
        if self.repository.find_by_plate(&data.plate).await?.is_some() {
            return Err(conflict_error("Vehículo", "patente", &data.plate));
        }

        let vehicle = self.repository.create(data).await?;
        info!("🚗 Vehículo creado: {} (id {})", vehicle.plate, vehicle.id);
        Ok(vehicle)
    }

    /// Reemplaza el registro completo con los valores del payload
    pub async fn update(&self, id: i32, request: VehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(id, request.into())
            .await?
            .ok_or_else(|| not_found_error("Vehículo", id))?;

        info!("🚗 Vehículo actualizado: {} (id {})", vehicle.plate, vehicle.id);
        Ok(vehicle)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehículo", id));
        }
        info!("🗑️ Vehículo eliminado (id {})", id);
        Ok(())
    }
}
