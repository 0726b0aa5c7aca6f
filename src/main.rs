use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use al_aksha_backoffice::clients::{RemoteEndpoint, SheetsClient};
use al_aksha_backoffice::config::app::{APP_NAME, APP_VERSION};
use al_aksha_backoffice::config::environment::EnvironmentConfig;
use al_aksha_backoffice::repositories::LocalRepository;
use al_aksha_backoffice::storage::{FileStore, KeyValueStore, MemoryStore, RedisStore, StorageBackend};
use al_aksha_backoffice::utils::clock::{Clock, SystemClock};
use al_aksha_backoffice::{create_router, ApiFacade, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Invalid configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🛡️ {} v{}", APP_NAME, APP_VERSION);
    info!("================================================");
    if config.is_development() {
        info!("🔧 Modo desarrollo");
    }
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se acepta cualquier origen");
    }

    let store = build_store(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let local = Arc::new(LocalRepository::new(store, clock.clone()));

    let remote: Option<Arc<dyn RemoteEndpoint>> = match &config.api_url {
        Some(url) => {
            let client = SheetsClient::new(url.clone(), config.remote_timeout)?;
            info!("🌐 Endpoint remoto: {}", client.base_url());
            Some(Arc::new(client))
        }
        None => {
            warn!("⚠️ API_URL no configurada: se usa solo el almacenamiento local");
            None
        }
    };

    let facade = Arc::new(ApiFacade::new(remote, local));
    info!("💾 Almacenamiento: {}", facade.storage_type());

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server_url()))?;
    let app = create_router(AppState::new(facade, config, clock));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("   GET  /api?action=... - Lecturas");
    info!("   POST /api - Escrituras {{action, data}}");
    info!("   GET  /api/system - Información del sistema");
    info!("   GET  /api/dashboard - Estadísticas");
    info!("   GET  /api/vessel-orders/report - Informe agrupado");
    info!("   POST /api/vessel-orders/calculate - Cálculo de días e importes");

    let listener = tokio::net::TcpListener::bind(addr).await?;
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

async fn build_store(config: &EnvironmentConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => {
            warn!("⚠️ Almacenamiento en memoria: los datos se pierden al reiniciar");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File => Arc::new(
            FileStore::new(&config.data_dir)
                .await
                .with_context(|| format!("Cannot open data dir {}", config.data_dir.display()))?,
        ),
        StorageBackend::Redis => Arc::new(
            RedisStore::connect(&config.redis_url)
                .await
                .context("Cannot connect to Redis")?,
        ),
    };
    Ok(store)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
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
