use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::schedule_dto::ScheduleRequest;
use crate::models::MaintenanceSchedule;
use crate::repositories::ScheduleRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct ScheduleController {
    repository: Arc<dyn ScheduleRepository>,
}

impl ScheduleController {
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceSchedule>> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceSchedule> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Programación", id))
    }

    pub async fn create(&self, request: ScheduleRequest) -> AppResult<MaintenanceSchedule> {
        request.validate()?;
        let schedule = self.repository.create(request.into()).await?;
        info!("📅 Programación creada (id {}, vehículo {:?})", schedule.id, schedule.vehicle_id);
        Ok(schedule)
    }

    pub async fn update(&self, id: i32, request: ScheduleRequest) -> AppResult<MaintenanceSchedule> {
        request.validate()?;
        let schedule = self
            .repository
            .update(id, request.into())
            .await?
            .ok_or_else(|| not_found_error("Programación", id))?;
        info!("📅 Programación actualizada (id {})", schedule.id);
        Ok(schedule)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Programación", id));
        }
        info!("🗑️ Programación eliminada (id {})", id);
        Ok(())
    }
}
