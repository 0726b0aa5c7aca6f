//! Almacenamiento clave-valor local
//!
//! Equivalente en servidor al almacenamiento del navegador: cada entidad se
//! guarda como un único blob JSON (lista de registros) bajo su clave.

pub mod file_store;
pub mod memory_store;
pub mod redis_store;

use async_trait::async_trait;
use thiserror::Error;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

/// Errores de los backends de almacenamiento
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Operaciones de un almacén clave-valor de blobs de texto
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Leer el blob guardado bajo `key`; `None` si no existe
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Sobrescribir el blob guardado bajo `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Nombre del backend, para logs y `/api/system`
    fn backend_name(&self) -> &'static str;
}

/// Backends disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}
