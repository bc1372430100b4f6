use serde::Deserialize;
use validator::Validate;

use crate::models::VehicleData;

// Payload para crear o reemplazar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleRequest {
    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub plate: String,

    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub make: String,

    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub odometer: i32,
}

impl From<VehicleRequest> for VehicleData {
    fn from(request: VehicleRequest) -> Self {
        Self {
            plate: request.plate,
            make: request.make,
            model: request.model,
            year: request.year,
            odometer: request.odometer,
        }
    }
}
