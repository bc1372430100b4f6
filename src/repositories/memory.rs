//! Almacén en memoria
//!
//! Implementa todos los repositorios sobre tablas en memoria protegidas
//! por un único `RwLock`. Reproduce la semántica del esquema PostgreSQL
//! (unicidad, claves foráneas, `ON DELETE SET NULL` de vehículos, joins
//! internos, filtros inclusivos, orden por id) y se usa en tests y con
//! `STORAGE_BACKEND=memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    AddressRepository, MaintenanceRepository, ReportRepository, ScheduleRepository,
    SupplierRepository, VehicleRepository,
};
use crate::models::maintenance::DEFAULT_MAINTENANCE_TYPES;
use crate::models::{
    Address, AddressAssignment, EventFilters, MaintenanceEvent, MaintenanceEventData,
    MaintenanceSchedule, MaintenanceType, NewAddress, ReportFilters, ReportRecord, ScheduleData,
    Supplier, SupplierData, SupplierWithAddress, Vehicle, VehicleData,
};
use crate::utils::errors::{conflict_error, reference_error, AppResult};

/// Tabla con clave autoincremental
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn replace(&mut self, id: i32, build: impl FnOnce(i32) -> T) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = build(id);
        Some(slot.clone())
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Debug, Default)]
struct Tables {
    addresses: Table<Address>,
    vehicles: Table<Vehicle>,
    suppliers: Table<Supplier>,
    types: Table<MaintenanceType>,
    events: Table<MaintenanceEvent>,
    schedules: Table<MaintenanceSchedule>,
}

impl Tables {
    fn supplier_with_address(&self, supplier: Supplier) -> SupplierWithAddress {
        let address = supplier
            .address_id
            .and_then(|address_id| self.addresses.get(address_id));
        SupplierWithAddress::new(supplier, address)
    }

    fn resolve_address(
        &mut self,
        assignment: AddressAssignment,
        current: Option<i32>,
        context: &str,
    ) -> AppResult<Option<i32>> {
        match assignment {
            AddressAssignment::Keep => Ok(current),
            AddressAssignment::Link(id) if self.addresses.rows.contains_key(&id) => Ok(Some(id)),
            AddressAssignment::Link(_) => Err(reference_error(context)),
            AddressAssignment::Create(new_address) => {
                let address = self.addresses.insert_with(|id| new_address.into_address(id));
                Ok(Some(address.id))
            }
        }
    }

    fn check_event_references(&self, data: &MaintenanceEventData, context: &str) -> AppResult<()> {
        if self.vehicles.rows.contains_key(&data.vehicle_id)
            && self.types.rows.contains_key(&data.type_id)
            && self.suppliers.rows.contains_key(&data.supplier_id)
        {
            return Ok(());
        }
        Err(reference_error(context))
    }

    fn check_schedule_references(&self, data: &ScheduleData, context: &str) -> AppResult<()> {
        let type_ok = data
            .type_id
            .map_or(true, |type_id| self.types.rows.contains_key(&type_id));
        if self.vehicles.rows.contains_key(&data.vehicle_id) && type_ok {
            return Ok(());
        }
        Err(reference_error(context))
    }
}

pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Almacén vacío con los tipos de mantención por defecto
    pub fn new() -> Self {
        let mut tables = Tables::default();
        for name in DEFAULT_MAINTENANCE_TYPES {
            tables.types.insert_with(|id| MaintenanceType {
                id,
                name: name.to_string(),
            });
        }
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl VehicleRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.tables.read().await.vehicles.all())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        Ok(self.tables.read().await.vehicles.get(id))
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        let tables = self.tables.read().await;
        Ok(tables.vehicles.rows.values().find(|v| v.plate == plate).cloned())
    }

    async fn create(&self, data: VehicleData) -> AppResult<Vehicle> {
        let mut tables = self.tables.write().await;
        if tables.vehicles.rows.values().any(|v| v.plate == data.plate) {
            return Err(conflict_error("Vehículo", "patente", &data.plate));
        }
        Ok(tables.vehicles.insert_with(|id| data.into_vehicle(id)))
    }

    async fn update(&self, id: i32, data: VehicleData) -> AppResult<Option<Vehicle>> {
        let mut tables = self.tables.write().await;
        if tables
            .vehicles
            .rows
            .values()
            .any(|v| v.id != id && v.plate == data.plate)
        {
            return Err(conflict_error("Vehículo", "patente", &data.plate));
        }
        Ok(tables.vehicles.replace(id, |id| data.into_vehicle(id)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.vehicles.remove(id) {
            return Ok(false);
        }

        // ON DELETE SET NULL
        for event in tables.events.rows.values_mut() {
            if event.vehicle_id == Some(id) {
                event.vehicle_id = None;
            }
        }
        for schedule in tables.schedules.rows.values_mut() {
            if schedule.vehicle_id == Some(id) {
                schedule.vehicle_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl AddressRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<Address>> {
        Ok(self.tables.read().await.addresses.all())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        Ok(self.tables.read().await.addresses.get(id))
    }

    async fn create(&self, data: NewAddress) -> AppResult<Address> {
        let mut tables = self.tables.write().await;
        Ok(tables.addresses.insert_with(|id| data.into_address(id)))
    }
}

#[async_trait]
impl SupplierRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<SupplierWithAddress>> {
        let tables = self.tables.read().await;
        Ok(tables
            .suppliers
            .all()
            .into_iter()
            .map(|s| tables.supplier_with_address(s))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<SupplierWithAddress>> {
        let tables = self.tables.read().await;
        Ok(tables
            .suppliers
            .get(id)
            .map(|s| tables.supplier_with_address(s)))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Supplier>> {
        let tables = self.tables.read().await;
        Ok(tables.suppliers.rows.values().find(|s| s.name == name).cloned())
    }

    async fn create(&self, data: SupplierData) -> AppResult<SupplierWithAddress> {
        let mut tables = self.tables.write().await;
        if tables.suppliers.rows.values().any(|s| s.name == data.name) {
            return Err(conflict_error("Proveedor", "nombre", &data.name));
        }

        let address_id = tables.resolve_address(data.address, None, "Error creando proveedor")?;
        let supplier = tables.suppliers.insert_with(|id| Supplier {
            id,
            name: data.name,
            phone: data.phone,
            email: data.email,
            address_id,
        });
        Ok(tables.supplier_with_address(supplier))
    }

    async fn update(&self, id: i32, data: SupplierData) -> AppResult<Option<SupplierWithAddress>> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.suppliers.get(id) else {
            return Ok(None);
        };
        if tables
            .suppliers
            .rows
            .values()
            .any(|s| s.id != id && s.name == data.name)
        {
            return Err(conflict_error("Proveedor", "nombre", &data.name));
        }

        let address_id =
            tables.resolve_address(data.address, current.address_id, "Error actualizando proveedor")?;
        let supplier = tables.suppliers.replace(id, |id| Supplier {
            id,
            name: data.name,
            phone: data.phone,
            email: data.email,
            address_id,
        });
        Ok(supplier.map(|s| tables.supplier_with_address(s)))
    }

    async fn count_events(&self, id: i32) -> AppResult<i64> {
        let tables = self.tables.read().await;
        let count = tables
            .events
            .rows
            .values()
            .filter(|e| e.supplier_id == Some(id))
            .count();
        Ok(count as i64)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.events.rows.values().any(|e| e.supplier_id == Some(id)) {
            return Err(reference_error("Error eliminando proveedor"));
        }
        Ok(tables.suppliers.remove(id))
    }
}

#[async_trait]
impl MaintenanceRepository for InMemoryStore {
    async fn list(&self, filters: &EventFilters) -> AppResult<Vec<MaintenanceEvent>> {
        let tables = self.tables.read().await;
        let mut events: Vec<MaintenanceEvent> = tables
            .events
            .rows
            .values()
            .filter(|e| filters.matches(e.date))
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.date, e.id));
        Ok(events)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<MaintenanceEvent>> {
        Ok(self.tables.read().await.events.get(id))
    }

    async fn max_odometer(&self, vehicle_id: i32) -> AppResult<Option<i32>> {
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .rows
            .values()
            .filter(|e| e.vehicle_id == Some(vehicle_id))
            .map(|e| e.odometer)
            .max())
    }

    async fn create(&self, data: MaintenanceEventData) -> AppResult<MaintenanceEvent> {
        let mut tables = self.tables.write().await;
        tables.check_event_references(&data, "Error creando mantención")?;
        Ok(tables.events.insert_with(|id| data.into_event(id)))
    }

    async fn update(&self, id: i32, data: MaintenanceEventData) -> AppResult<Option<MaintenanceEvent>> {
        let mut tables = self.tables.write().await;
        if !tables.events.rows.contains_key(&id) {
            return Ok(None);
        }
        tables.check_event_references(&data, "Error actualizando mantención")?;
        Ok(tables.events.replace(id, |id| data.into_event(id)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables.write().await.events.remove(id))
    }

    async fn list_types(&self) -> AppResult<Vec<MaintenanceType>> {
        Ok(self.tables.read().await.types.all())
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<MaintenanceSchedule>> {
        Ok(self.tables.read().await.schedules.all())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<MaintenanceSchedule>> {
        Ok(self.tables.read().await.schedules.get(id))
    }

    async fn create(&self, data: ScheduleData) -> AppResult<MaintenanceSchedule> {
        let mut tables = self.tables.write().await;
        tables.check_schedule_references(&data, "Error creando programación")?;
        Ok(tables.schedules.insert_with(|id| data.into_schedule(id)))
    }

    async fn update(&self, id: i32, data: ScheduleData) -> AppResult<Option<MaintenanceSchedule>> {
        let mut tables = self.tables.write().await;
        if !tables.schedules.rows.contains_key(&id) {
            return Ok(None);
        }
        tables.check_schedule_references(&data, "Error actualizando programación")?;
        Ok(tables.schedules.replace(id, |id| data.into_schedule(id)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables.write().await.schedules.remove(id))
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn records(&self, filters: &ReportFilters) -> AppResult<Vec<ReportRecord>> {
        let tables = self.tables.read().await;
        let mut records = Vec::new();

        for event in tables.events.rows.values() {
            // Join interno: se omiten mantenciones sin vehículo, tipo o proveedor
            let Some(vehicle) = event
                .vehicle_id
                .and_then(|vehicle_id| tables.vehicles.rows.get(&vehicle_id))
            else {
                continue;
            };
            let Some(kind) = tables.types.rows.get(&event.type_id) else {
                continue;
            };
            let Some(supplier) = event
                .supplier_id
                .and_then(|supplier_id| tables.suppliers.rows.get(&supplier_id))
            else {
                continue;
            };

            let date_ok = EventFilters {
                date_from: filters.date_from,
                date_to: filters.date_to,
            }
            .matches(event.date);
            let plate_ok = filters.plate.as_ref().map_or(true, |p| &vehicle.plate == p);
            let type_ok = filters
                .maintenance_type
                .as_ref()
                .map_or(true, |t| &kind.name == t);
            let supplier_ok = filters.supplier.as_ref().map_or(true, |s| &supplier.name == s);

            if date_ok && plate_ok && type_ok && supplier_ok {
                records.push(ReportRecord {
                    id: event.id,
                    plate: vehicle.plate.clone(),
                    type_name: kind.name.clone(),
                    supplier_name: Some(supplier.name.clone()),
                    date: event.date,
                    cost: event.cost,
                });
            }
        }

        records.sort_by_key(|r| (r.date, r.id));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn vehicle(plate: &str) -> VehicleData {
        VehicleData {
            plate: plate.to_string(),
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: 2020,
            odometer: 0,
        }
    }

    fn event(vehicle_id: i32, supplier_id: i32, day: u32) -> MaintenanceEventData {
        MaintenanceEventData {
            vehicle_id,
            type_id: 1,
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            odometer: 1000,
            cost: Decimal::new(1500, 0),
            supplier_id,
        }
    }

    #[tokio::test]
    async fn test_duplicate_plate_is_conflict() {
        let store = InMemoryStore::new();
        VehicleRepository::create(&store, vehicle("AA11")).await.unwrap();

        let err = VehicleRepository::create(&store, vehicle("AA11")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(VehicleRepository::list(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_report_skips_orphans_and_sorts_by_date() {
        let store = InMemoryStore::new();
        let keep = VehicleRepository::create(&store, vehicle("AA11")).await.unwrap();
        let gone = VehicleRepository::create(&store, vehicle("BB22")).await.unwrap();
        let supplier = SupplierRepository::create(
            &store,
            SupplierData {
                name: "Taller".to_string(),
                phone: "123".to_string(),
                email: "taller@example.com".to_string(),
                address: AddressAssignment::Keep,
            },
        )
        .await
        .unwrap();

        MaintenanceRepository::create(&store, event(keep.id, supplier.id, 20)).await.unwrap();
        MaintenanceRepository::create(&store, event(keep.id, supplier.id, 5)).await.unwrap();
        MaintenanceRepository::create(&store, event(gone.id, supplier.id, 1)).await.unwrap();
        VehicleRepository::delete(&store, gone.id).await.unwrap();

        let records = store.records(&ReportFilters::default()).await.unwrap();
        let days: Vec<_> = records.iter().map(|r| r.date.format("%d").to_string()).collect();
        assert_eq!(days, vec!["05", "20"]);
    }

    #[tokio::test]
    async fn test_default_types_are_seeded() {
        let store = InMemoryStore::new();
        let types = store.list_types().await.unwrap();
        assert_eq!(types.len(), DEFAULT_MAINTENANCE_TYPES.len());
        assert_eq!(types[0].name, "Cambio de aceite");
    }
}
