//! Middleware del sistema
//!
//! CORS para el frontend.

pub mod cors;

pub use cors::cors_middleware;
