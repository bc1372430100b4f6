//! Modelos del sistema
//!
//! Registros persistidos, mapeados a las tablas PostgreSQL de la flota.

pub mod address;
pub mod maintenance;
pub mod report;
pub mod schedule;
pub mod supplier;
pub mod vehicle;

pub use address::{Address, NewAddress};
pub use maintenance::{EventFilters, MaintenanceEvent, MaintenanceEventData, MaintenanceType};
pub use report::{ReportFilters, ReportRecord, ReportRow};
pub use schedule::{MaintenanceSchedule, ScheduleData};
pub use supplier::{AddressAssignment, Supplier, SupplierData, SupplierWithAddress};
pub use vehicle::{Vehicle, VehicleData};
