//! Repositorios
//!
//! Interfaces de persistencia por entidad, con implementación PostgreSQL
//! (`Pg*Repository`) y un almacén en memoria para tests y ejecución local.

pub mod address_repository;
pub mod maintenance_repository;
pub mod memory;
pub mod report_repository;
pub mod schedule_repository;
pub mod supplier_repository;
pub mod vehicle_repository;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{
    Address, EventFilters, MaintenanceEvent, MaintenanceEventData, MaintenanceSchedule,
    MaintenanceType, NewAddress, ReportFilters, ReportRecord, ScheduleData, Supplier,
    SupplierData, SupplierWithAddress, Vehicle, VehicleData,
};
use crate::utils::errors::AppResult;

pub use address_repository::PgAddressRepository;
pub use maintenance_repository::PgMaintenanceRepository;
pub use memory::InMemoryStore;
pub use report_repository::PgReportRepository;
pub use schedule_repository::PgScheduleRepository;
pub use supplier_repository::PgSupplierRepository;
pub use vehicle_repository::PgVehicleRepository;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>>;

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>>;

    async fn create(&self, data: VehicleData) -> AppResult<Vehicle>;

    /// Reemplaza todos los campos; `None` si el id no existe
    async fn update(&self, id: i32, data: VehicleData) -> AppResult<Option<Vehicle>>;

    /// `false` si el id no existe
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Address>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>>;

    async fn create(&self, data: NewAddress) -> AppResult<Address>;
}

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Proveedores con su dirección resuelta en una sola consulta
    async fn list(&self) -> AppResult<Vec<SupplierWithAddress>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<SupplierWithAddress>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Supplier>>;

    /// Persiste la dirección inline (si viene) y el proveedor de forma atómica
    async fn create(&self, data: SupplierData) -> AppResult<SupplierWithAddress>;

    async fn update(&self, id: i32, data: SupplierData) -> AppResult<Option<SupplierWithAddress>>;

    async fn count_events(&self, id: i32) -> AppResult<i64>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn list(&self, filters: &EventFilters) -> AppResult<Vec<MaintenanceEvent>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<MaintenanceEvent>>;

    /// Máximo kilometraje registrado entre las mantenciones del vehículo
    async fn max_odometer(&self, vehicle_id: i32) -> AppResult<Option<i32>>;

    async fn create(&self, data: MaintenanceEventData) -> AppResult<MaintenanceEvent>;

    async fn update(&self, id: i32, data: MaintenanceEventData) -> AppResult<Option<MaintenanceEvent>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;

    async fn list_types(&self) -> AppResult<Vec<MaintenanceType>>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<MaintenanceSchedule>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<MaintenanceSchedule>>;

    async fn create(&self, data: ScheduleData) -> AppResult<MaintenanceSchedule>;

    async fn update(&self, id: i32, data: ScheduleData) -> AppResult<Option<MaintenanceSchedule>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Join mantenciones → vehículos → tipos → proveedores con filtros AND
    async fn records(&self, filters: &ReportFilters) -> AppResult<Vec<ReportRecord>>;
}

/// Conjunto de repositorios compartido por los handlers
#[derive(Clone)]
pub struct Repositories {
    pub vehicles: Arc<dyn VehicleRepository>,
    pub addresses: Arc<dyn AddressRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
    pub maintenance: Arc<dyn MaintenanceRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            addresses: Arc::new(PgAddressRepository::new(pool.clone())),
            suppliers: Arc::new(PgSupplierRepository::new(pool.clone())),
            maintenance: Arc::new(PgMaintenanceRepository::new(pool.clone())),
            schedules: Arc::new(PgScheduleRepository::new(pool.clone())),
            reports: Arc::new(PgReportRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryStore::new()))
    }

    /// Todos los repositorios comparten el mismo almacén en memoria
    pub fn from_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            vehicles: store.clone(),
            addresses: store.clone(),
            suppliers: store.clone(),
            maintenance: store.clone(),
            schedules: store.clone(),
            reports: store,
        }
    }
}
