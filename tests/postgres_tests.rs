//! Repositorios PostgreSQL contra una base real.
//!
//! Requieren `DATABASE_URL`; se ejecutan con `cargo test -- --ignored`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use fleet_maintenance::controllers::{
    MaintenanceController, ReportController, SupplierController, VehicleController,
};
use fleet_maintenance::dto::maintenance_dto::MaintenanceEventRequest;
use fleet_maintenance::dto::supplier_dto::SupplierRequest;
use fleet_maintenance::dto::vehicle_dto::VehicleRequest;
use fleet_maintenance::models::ReportFilters;
use fleet_maintenance::repositories::Repositories;
use fleet_maintenance::utils::errors::AppError;

fn vehicle(plate: &str) -> VehicleRequest {
    VehicleRequest {
        plate: plate.to_string(),
        make: "Toyota".to_string(),
        model: "Hilux".to_string(),
        year: 2020,
        odometer: 0,
    }
}

fn supplier(name: &str) -> SupplierRequest {
    SupplierRequest {
        name: name.to_string(),
        phone: "123".to_string(),
        email: "taller@example.com".to_string(),
        address_id: None,
        new_address: None,
    }
}

fn event(vehicle_id: i32, supplier_id: i32, date: NaiveDate) -> MaintenanceEventRequest {
    MaintenanceEventRequest {
        vehicle_id: Some(vehicle_id),
        type_id: Some(1),
        description: None,
        date: Some(date),
        odometer: Some(1000),
        cost: Some(Decimal::new(30000, 0)),
        supplier_id: Some(supplier_id),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requiere DATABASE_URL"]
async fn test_vehicle_with_events_is_deleted(pool: PgPool) {
    let repos = Repositories::postgres(pool);
    let vehicles = VehicleController::new(repos.vehicles.clone());
    let suppliers = SupplierController::new(repos.suppliers.clone());
    let maintenance = MaintenanceController::new(repos.maintenance.clone());
    let reports = ReportController::new(repos.reports.clone());

    let aa = vehicles.create(vehicle("AA11")).await.unwrap();
    let bb = vehicles.create(vehicle("BB22")).await.unwrap();
    let taller = suppliers.create(supplier("Taller Sur")).await.unwrap();
    let first = maintenance
        .create(event(aa.id, taller.id, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
        .await
        .unwrap();
    let second = maintenance
        .create(event(bb.id, taller.id, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
        .await
        .unwrap();

    vehicles.delete(aa.id).await.unwrap();

    let orphan = maintenance.get_by_id(first.id).await.unwrap();
    assert_eq!(orphan.vehicle_id, None);

    let rows = reports.rows(&ReportFilters::default()).await.unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![second.id]);
    assert_eq!(rows[0].vehicle_plate, "BB22");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requiere DATABASE_URL"]
async fn test_unknown_references_are_rejected(pool: PgPool) {
    let repos = Repositories::postgres(pool);
    let suppliers = SupplierController::new(repos.suppliers.clone());
    let maintenance = MaintenanceController::new(repos.maintenance.clone());

    let mut linked = supplier("Otro");
    linked.address_id = Some(999);
    assert!(matches!(
        suppliers.create(linked).await,
        Err(AppError::Validation(_))
    ));

    let taller = suppliers.create(supplier("Taller Sur")).await.unwrap();
    assert!(matches!(
        maintenance
            .create(event(999, taller.id, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .await,
        Err(AppError::Validation(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requiere DATABASE_URL"]
async fn test_report_filters(pool: PgPool) {
    let repos = Repositories::postgres(pool);
    let vehicles = VehicleController::new(repos.vehicles.clone());
    let suppliers = SupplierController::new(repos.suppliers.clone());
    let maintenance = MaintenanceController::new(repos.maintenance.clone());
    let reports = ReportController::new(repos.reports.clone());

    let aa = vehicles.create(vehicle("AA11")).await.unwrap();
    let bb = vehicles.create(vehicle("BB22")).await.unwrap();
    let taller = suppliers.create(supplier("Taller Sur")).await.unwrap();
    let e1 = maintenance
        .create(event(aa.id, taller.id, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
        .await
        .unwrap();
    let e2 = maintenance
        .create(event(bb.id, taller.id, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
        .await
        .unwrap();

    let ids = |rows: Vec<fleet_maintenance::models::ReportRow>| rows.iter().map(|r| r.id).collect::<Vec<_>>();

    let by_plate = reports
        .rows(&ReportFilters {
            plate: Some("AA11".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ids(by_plate), vec![e1.id]);

    let by_type = reports
        .rows(&ReportFilters {
            maintenance_type: Some("Cambio de aceite".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ids(by_type), vec![e1.id, e2.id]);

    let from_march = reports
        .rows(&ReportFilters {
            date_from: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ids(from_march), vec![e2.id]);
}
