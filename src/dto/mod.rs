//! DTOs de entrada y salida de la API

pub mod address_dto;
pub mod api_response;
pub mod maintenance_dto;
pub mod report_dto;
pub mod schedule_dto;
pub mod supplier_dto;
pub mod vehicle_dto;
