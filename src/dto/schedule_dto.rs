use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::ScheduleData;

// Payload para crear o reemplazar una programación
#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleRequest {
    pub vehicle_id: i32,
    pub type_id: Option<i32>,
    #[validate(range(min = 0))]
    pub km_frequency: Option<i32>,
    #[validate(range(min = 0))]
    pub month_frequency: Option<i32>,
    pub last_date: Option<NaiveDate>,
    pub last_odometer: Option<i32>,
    pub next_estimated_date: Option<NaiveDate>,
    pub next_estimated_odometer: Option<i32>,
}

impl From<ScheduleRequest> for ScheduleData {
    fn from(request: ScheduleRequest) -> Self {
        Self {
            vehicle_id: request.vehicle_id,
            type_id: request.type_id,
            km_frequency: request.km_frequency,
            month_frequency: request.month_frequency,
            last_date: request.last_date,
            last_odometer: request.last_odometer,
            next_estimated_date: request.next_estimated_date,
            next_estimated_odometer: request.next_estimated_odometer,
        }
    }
}
