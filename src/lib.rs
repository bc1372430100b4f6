//! Backend de mantención de flota
//!
//! Vehículos, proveedores, direcciones, mantenciones, programaciones y
//! reportes expuestos como API JSON sobre Axum.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
