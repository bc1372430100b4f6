//! Controladores
//!
//! Reglas de negocio de cada recurso sobre los repositorios.

pub mod address_controller;
pub mod maintenance_controller;
pub mod report_controller;
pub mod schedule_controller;
pub mod supplier_controller;
pub mod vehicle_controller;

pub use address_controller::AddressController;
pub use maintenance_controller::MaintenanceController;
pub use report_controller::{ReportController, ReportOutput};
pub use schedule_controller::ScheduleController;
pub use supplier_controller::SupplierController;
pub use vehicle_controller::VehicleController;
