//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del proceso (tras cargar `.env` con
//! dotenvy). Todas las variables tienen un valor por defecto razonable.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::storage::StorageBackend;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Endpoint remoto; `None` significa solo almacenamiento local
    pub api_url: Option<String>,
    pub remote_timeout: Duration,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub redis_url: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            api_url: None,
            remote_timeout: Duration::from_secs(30),
            storage_backend: StorageBackend::File,
            data_dir: PathBuf::from("./data"),
            redis_url: "redis://localhost:6379".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
        }
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", port))?,
            None => defaults.port,
        };

        let remote_timeout = match var("REMOTE_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .with_context(|| format!("REMOTE_TIMEOUT_SECS must be a valid number, got '{}'", secs))?,
            ),
            None => defaults.remote_timeout,
        };

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(backend) => backend.parse().map_err(|e: String| anyhow!(e))?,
            None => defaults.storage_backend,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(level) => level
                .parse()
                .map_err(|_| anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error"))?,
            None => defaults.log_level,
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: var("HOST").unwrap_or(defaults.host),
            api_url: var("API_URL"),
            remote_timeout,
            storage_backend,
            data_dir: var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            redis_url: var("REDIS_URL").unwrap_or(defaults.redis_url),
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
