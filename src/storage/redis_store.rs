//! Almacén sobre Redis, con ConnectionManager para reconexión automática

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info};

use super::{KeyValueStore, StorageError};

#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
    namespace: String,
}

impl RedisStore {
    /// Conectar y comprobar la conexión con PING
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        info!("🔗 Conectando a Redis: {}", redis_url);

        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");
        Ok(Self {
            manager,
            namespace: "al_aksha_backoffice".to_string(),
        })
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(self.make_key(key)).await?;
        debug!("📥 Redis GET {} ({})", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.manager.clone();
        let _: () = conn.set(self.make_key(key), value).await?;
        debug!("💾 Redis SET {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.manager.clone();
        let removed: i64 = conn.del(self.make_key(key)).await?;
        debug!("🗑️ Redis DEL {} (eliminados: {})", key, removed);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
