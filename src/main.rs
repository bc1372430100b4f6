use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fleet_maintenance::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use fleet_maintenance::database::DatabaseConnection;
use fleet_maintenance::repositories::Repositories;
use fleet_maintenance::routes::create_router;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🔧 Fleet Maintenance - API de mantención de flota");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    info!("🌍 Entorno: {}", config.environment);

    let repositories = match config.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let connection = match DatabaseConnection::connect(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            Repositories::postgres(connection.pool().clone())
        }
        StorageBackend::Memory => {
            if !config.is_development() {
                warn!("⚠️ Almacenamiento en memoria fuera de desarrollo; los datos se pierden al reiniciar");
            }
            info!("🧪 Usando almacenamiento en memoria");
            Repositories::in_memory()
        }
    };

    let addr = config.server_addr();
    let app = create_router(AppState::new(repositories, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Estado de la API");
    info!("🚗 Vehículos:");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   POST /vehicles - Crear vehículo");
    info!("   GET  /vehicles/:plate - Obtener vehículo por patente");
    info!("   PUT  /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");
    info!("🏭 Proveedores:");
    info!("   GET|POST /suppliers, GET|PUT|DELETE /suppliers/:id");
    info!("📍 Direcciones:");
    info!("   GET|POST /addresses, GET /addresses/:id");
    info!("🛠️ Mantenciones:");
    info!("   GET|POST /maintenance-events, GET /maintenance-events/types");
    info!("   GET|PUT|DELETE /maintenance-events/:id");
    info!("📅 Programaciones:");
    info!("   GET|POST /schedules, GET|PUT|DELETE /schedules/:id");
    info!("📊 Reportes:");
    info!("   POST /reports?export_excel=&generate_chart=");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
