//! Modelos de mantenciones: tipos y eventos

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tipos sembrados por la migración inicial
pub const DEFAULT_MAINTENANCE_TYPES: [&str; 5] = [
    "Cambio de aceite",
    "Frenos",
    "Neumáticos",
    "Revisión técnica",
    "Mantención general",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceType {
    pub id: i32,
    pub name: String,
}

/// Mantención realizada a un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceEvent {
    pub id: i32,
    pub vehicle_id: Option<i32>,
    pub type_id: i32,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub odometer: i32,
    pub cost: Option<Decimal>,
    pub supplier_id: Option<i32>,
}

/// Datos validados de una mantención
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceEventData {
    pub vehicle_id: i32,
    pub type_id: i32,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub odometer: i32,
    pub cost: Decimal,
    pub supplier_id: i32,
}

impl MaintenanceEventData {
    pub fn into_event(self, id: i32) -> MaintenanceEvent {
        MaintenanceEvent {
            id,
            vehicle_id: Some(self.vehicle_id),
            type_id: self.type_id,
            description: self.description,
            date: self.date,
            odometer: self.odometer,
            cost: Some(self.cost),
            supplier_id: Some(self.supplier_id),
        }
    }
}

/// Rango de fechas inclusivo para listar mantenciones
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl EventFilters {
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.date_from.map_or(true, |from| date >= from)
            && self.date_to.map_or(true, |to| date <= to)
    }
}
