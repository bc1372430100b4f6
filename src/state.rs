//! Estado compartido de la aplicación
//!
//! Repositorios y configuración disponibles para todos los handlers de Axum.

use crate::config::EnvironmentConfig;
use crate::repositories::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(repositories: Repositories, config: EnvironmentConfig) -> Self {
        Self {
            repositories,
            config,
        }
    }
}
