//! Modelo de programación de mantenciones
//!
//! Registro recordatorio: los valores estimados los entrega el cliente
//! y se guardan tal cual.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceSchedule {
    pub id: i32,
    pub vehicle_id: Option<i32>,
    pub type_id: Option<i32>,
    pub km_frequency: Option<i32>,
    pub month_frequency: Option<i32>,
    pub last_date: Option<NaiveDate>,
    pub last_odometer: Option<i32>,
    pub next_estimated_date: Option<NaiveDate>,
    pub next_estimated_odometer: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleData {
    pub vehicle_id: i32,
    pub type_id: Option<i32>,
    pub km_frequency: Option<i32>,
    pub month_frequency: Option<i32>,
    pub last_date: Option<NaiveDate>,
    pub last_odometer: Option<i32>,
    pub next_estimated_date: Option<NaiveDate>,
    pub next_estimated_odometer: Option<i32>,
}

impl ScheduleData {
    pub fn into_schedule(self, id: i32) -> MaintenanceSchedule {
        MaintenanceSchedule {
            id,
            vehicle_id: Some(self.vehicle_id),
            type_id: self.type_id,
            km_frequency: self.km_frequency,
            month_frequency: self.month_frequency,
            last_date: self.last_date,
            last_odometer: self.last_odometer,
            next_estimated_date: self.next_estimated_date,
            next_estimated_odometer: self.next_estimated_odometer,
        }
    }
}
