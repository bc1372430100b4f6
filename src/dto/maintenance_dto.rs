use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

// Payload de una mantención. Los campos obligatorios llegan como Option
// para poder responder con el nombre del campo faltante.
#[derive(Debug, Default, Deserialize)]
pub struct MaintenanceEventRequest {
    pub vehicle_id: Option<i32>,
    pub type_id: Option<i32>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub odometer: Option<i32>,
    pub cost: Option<Decimal>,
    pub supplier_id: Option<i32>,
}
