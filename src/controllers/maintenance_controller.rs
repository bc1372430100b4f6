use std::sync::Arc;

use tracing::{info, warn};

use crate::dto::maintenance_dto::MaintenanceEventRequest;
use crate::models::{EventFilters, MaintenanceEvent, MaintenanceEventData, MaintenanceType};
use crate::repositories::MaintenanceRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{ensure_not_future, require, today};

pub struct MaintenanceController {
    repository: Arc<dyn MaintenanceRepository>,
}

/// Campos obligatorios en el orden en que se verifican; la descripción es opcional
fn validate_request(request: MaintenanceEventRequest) -> AppResult<MaintenanceEventData> {
    let vehicle_id = require(request.vehicle_id, "vehicle_id")?;
    let type_id = require(request.type_id, "type_id")?;
    let date = require(request.date, "date")?;
    let odometer = require(request.odometer, "odometer")?;
    let cost = require(request.cost, "cost")?;
    let supplier_id = require(request.supplier_id, "supplier_id")?;

    ensure_not_future(date, today())?;

    Ok(MaintenanceEventData {
        vehicle_id,
        type_id,
        description: request.description,
        date,
        odometer,
        cost,
        supplier_id,
    })
}

impl MaintenanceController {
    pub fn new(repository: Arc<dyn MaintenanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filters: EventFilters) -> AppResult<Vec<MaintenanceEvent>> {
        self.repository.list(&filters).await
    }

    pub async fn list_types(&self) -> AppResult<Vec<MaintenanceType>> {
        self.repository.list_types().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceEvent> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Mantención", id))
    }

    /// El kilometraje no puede ser menor al máximo registrado para el vehículo
    pub async fn create(&self, request: MaintenanceEventRequest) -> AppResult<MaintenanceEvent> {
        let data = validate_request(request)?;

        if let Some(last) = self.repository.max_odometer(data.vehicle_id).await? {
            if data.odometer < last {
                warn!(
                    "⚠️ Kilometraje {} menor al último registrado {} (vehículo {})",
                    data.odometer, last, data.vehicle_id
                );
                return Err(AppError::Validation(format!(
                    "El kilometraje debe ser mayor o igual al último registrado: {} km.",
                    last
                )));
            }
        }

        let data_vehicle = data.vehicle_id;
        let event = self.repository.create(data).await?;
        info!(
            "🔧 Mantención registrada (id {}, vehículo {}, {} km)",
            event.id, data_vehicle, event.odometer
        );
        Ok(event)
    }

    /// Reemplaza la mantención completa. Solo se compara contra el
    /// kilometraje guardado en esta misma mantención.
    pub async fn update(&self, id: i32, request: MaintenanceEventRequest) -> AppResult<MaintenanceEvent> {
        let data = validate_request(request)?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Mantención", id))?;

        if data.odometer < current.odometer {
            return Err(AppError::Validation(format!(
                "El kilometraje no puede ser menor al actual registrado: {} km.",
                current.odometer
            )));
        }

        let event = self
            .repository
            .update(id, data)
            .await?
            .ok_or_else(|| not_found_error("Mantención", id))?;

        info!("🔧 Mantención actualizada (id {})", event.id);
        Ok(event)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Mantención", id));
        }
        info!("🗑️ Mantención eliminada (id {})", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressAssignment, SupplierData, VehicleData};
    use crate::repositories::Repositories;
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;

    /// Vehículos 1 y 2, proveedor 1
    async fn controller() -> MaintenanceController {
        let repos = Repositories::in_memory();
        for plate in ["AA11", "BB22"] {
            repos
                .vehicles
                .create(VehicleData {
                    plate: plate.to_string(),
                    make: "Toyota".to_string(),
                    model: "Hilux".to_string(),
                    year: 2020,
                    odometer: 0,
                })
                .await
                .unwrap();
        }
        repos
            .suppliers
            .create(SupplierData {
                name: "Taller Sur".to_string(),
                phone: "123".to_string(),
                email: "taller@example.com".to_string(),
                address: AddressAssignment::Keep,
            })
            .await
            .unwrap();
        MaintenanceController::new(repos.maintenance)
    }

    fn request(vehicle_id: i32, date: NaiveDate, odometer: i32) -> MaintenanceEventRequest {
        MaintenanceEventRequest {
            vehicle_id: Some(vehicle_id),
            type_id: Some(1),
            description: Some("Cambio de filtro".to_string()),
            date: Some(date),
            odometer: Some(odometer),
            cost: Some(Decimal::new(45990, 0)),
            supplier_id: Some(1),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("se esperaba error de validación, llegó {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_named() {
        let controller = controller().await;

        let mut payload = request(1, date(2024, 1, 1), 100);
        payload.odometer = None;
        let msg = message(controller.create(payload).await.unwrap_err());
        assert!(msg.contains("'odometer'"));

        // El primer campo faltante en orden es el que se informa
        let msg = message(
            controller
                .create(MaintenanceEventRequest::default())
                .await
                .unwrap_err(),
        );
        assert!(msg.contains("'vehicle_id'"));
    }

    #[tokio::test]
    async fn test_future_date_is_rejected() {
        let controller = controller().await;
        let tomorrow = today() + Duration::days(1);

        let msg = message(controller.create(request(1, tomorrow, 100)).await.unwrap_err());
        assert!(msg.contains("futura"));

        // Hoy sí es válido
        assert!(controller.create(request(1, today(), 100)).await.is_ok());
    }

    #[tokio::test]
    async fn test_odometer_cannot_go_below_vehicle_maximum() {
        let controller = controller().await;
        controller.create(request(1, date(2024, 1, 1), 5000)).await.unwrap();
        controller.create(request(1, date(2024, 2, 1), 8000)).await.unwrap();

        let msg = message(
            controller
                .create(request(1, date(2024, 3, 1), 7999))
                .await
                .unwrap_err(),
        );
        assert!(msg.contains("8000"));

        // Igual al máximo es aceptado; otro vehículo no se ve afectado
        assert!(controller.create(request(1, date(2024, 3, 1), 8000)).await.is_ok());
        assert!(controller.create(request(2, date(2024, 3, 1), 10)).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_compares_against_own_odometer() {
        let controller = controller().await;
        let first = controller.create(request(1, date(2024, 1, 1), 5000)).await.unwrap();
        controller.create(request(1, date(2024, 2, 1), 9000)).await.unwrap();

        // 4999 < 5000 propio, aunque ninguna otra regla lo impediría
        let msg = message(
            controller
                .update(first.id, request(1, date(2024, 1, 1), 4999))
                .await
                .unwrap_err(),
        );
        assert!(msg.contains("5000"));

        // 6000 queda bajo el máximo del vehículo (9000) pero no bajo el propio
        let updated = controller
            .update(first.id, request(1, date(2024, 1, 2), 6000))
            .await
            .unwrap();
        assert_eq!(updated.odometer, 6000);
        assert_eq!(updated.date, date(2024, 1, 2));
    }

    #[tokio::test]
    async fn test_update_checks_order() {
        let controller = controller().await;
        let tomorrow = today() + Duration::days(1);

        // Fecha futura se reporta antes que el id inexistente
        assert!(matches!(
            controller.update(77, request(1, tomorrow, 1)).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            controller.update(77, request(1, date(2024, 1, 1), 1)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_with_inclusive_date_range() {
        let controller = controller().await;
        controller.create(request(1, date(2024, 1, 1), 1)).await.unwrap();
        controller.create(request(1, date(2024, 6, 1), 2)).await.unwrap();
        controller.create(request(1, date(2024, 9, 1), 3)).await.unwrap();

        let all = controller.list(EventFilters::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let bounded = controller
            .list(EventFilters {
                date_from: Some(date(2024, 6, 1)),
                date_to: Some(date(2024, 9, 1)),
            })
            .await
            .unwrap();
        assert_eq!(bounded.iter().map(|e| e.odometer).collect::<Vec<_>>(), vec![2, 3]);

        let until = controller
            .list(EventFilters {
                date_from: None,
                date_to: Some(date(2024, 1, 1)),
            })
            .await
            .unwrap();
        assert_eq!(until.len(), 1);
    }

    #[tokio::test]
    async fn test_list_types_and_delete() {
        let controller = controller().await;
        let types = controller.list_types().await.unwrap();
        assert_eq!(types.len(), 5);
        assert_eq!(types[0].name, "Cambio de aceite");

        let event = controller.create(request(1, date(2024, 1, 1), 1)).await.unwrap();
        controller.delete(event.id).await.unwrap();
        assert!(matches!(
            controller.get_by_id(event.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_references_are_rejected() {
        let controller = controller().await;

        for payload in [
            request(99, date(2024, 1, 1), 1),
            MaintenanceEventRequest {
                type_id: Some(99),
                ..request(1, date(2024, 1, 1), 1)
            },
            MaintenanceEventRequest {
                supplier_id: Some(99),
                ..request(1, date(2024, 1, 1), 1)
            },
        ] {
            let msg = message(controller.create(payload).await.unwrap_err());
            assert!(msg.contains("referencia inexistente"));
        }
        assert!(controller.list(EventFilters::default()).await.unwrap().is_empty());
    }
}
