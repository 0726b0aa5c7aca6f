//! Repositorio local
//!
//! Implementa todo el vocabulario de acciones sobre un `KeyValueStore`,
//! con el mismo contrato CRUD que el endpoint remoto. Los campos derivados
//! (`dutyDays`, `revenue`, `totalAmount`...) se guardan tal cual llegan.

use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::dto::ApiResponse;
use crate::models::record::{field_key, integer_from_value, shallow_merge, value_as_key};
use crate::models::{Action, Entity};
use crate::repositories::dispatch_table::{self, Handler};
use crate::services::dashboard_service::{self, DashboardSnapshot};
use crate::storage::{KeyValueStore, StorageError};
use crate::utils::clock::Clock;
use crate::utils::dates::iso_timestamp;
use crate::utils::ids::generate_id;

pub const MSG_ADDED: &str = "Added successfully";
pub const MSG_UPDATED: &str = "Updated successfully";
pub const MSG_DELETED: &str = "Deleted successfully";
pub const MSG_NOT_FOUND: &str = "Record not found";

pub struct LocalRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    // Serializa los ciclos leer-modificar-escribir
    write_lock: Mutex<()>,
}

impl LocalRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Resolver una acción por nombre
    pub async fn execute(&self, action: &str, data: &Value) -> ApiResponse {
        match action.parse::<Action>() {
            Ok(action) => self.handle(action, data).await,
            Err(e) => ApiResponse::error(e.to_string()),
        }
    }

    /// Resolver una acción tipada. Nunca falla: los errores viajan en la respuesta.
    pub async fn handle(&self, action: Action, data: &Value) -> ApiResponse {
        let Some((entity, handler)) = dispatch_table::lookup(action) else {
            return ApiResponse::error(format!("Unknown action: {}", action));
        };
        debug!("🗄️ Acción local {} ({:?})", action, handler);

        let result = match (entity, handler) {
            (_, Handler::Dashboard) => self.dashboard().await,
            (Some(entity), Handler::ListAll) => self.load_list(entity).await.map(list_response),
            (Some(entity), Handler::ByDate) => self.by_date(entity, data).await,
            (Some(entity), Handler::ByField(field)) => self.by_field(entity, field, data).await,
            (Some(entity), Handler::ByOptionalField(field)) => {
                if data.get(field).and_then(value_as_key).is_some_and(|v| !v.is_empty()) {
                    self.by_field(entity, field, data).await
                } else {
                    self.load_list(entity).await.map(list_response)
                }
            }
            (Some(entity), Handler::ByMonthYear) => self.by_month_year(entity, data).await,
            (Some(entity), Handler::Add) => self.add(entity, data).await,
            (Some(entity), Handler::Update) => self.update(entity, data).await,
            (Some(entity), Handler::Delete) => self.delete(entity, data).await,
            (None, _) => return ApiResponse::error(format!("Unknown action: {}", action)),
        };

        result.unwrap_or_else(|e| {
            error!("❌ Error de almacenamiento en {}: {}", action, e);
            ApiResponse::error(e.to_string())
        })
    }

    /// Leer la lista de una entidad sin fallar: un error de lectura se registra
    /// y cuenta como lista vacía. Solo para consultas; las escrituras usan `load_list`.
    pub async fn read_list(&self, entity: Entity) -> Vec<Value> {
        self.load_list(entity).await.unwrap_or_else(|e| {
            error!("❌ Error leyendo {}: {}", entity, e);
            Vec::new()
        })
    }

    /// Leer la lista de una entidad. Un blob ausente o corrupto es una lista
    /// vacía; un fallo del backend se propaga.
    pub async fn load_list(&self, entity: Entity) -> Result<Vec<Value>, StorageError> {
        let Some(raw) = self.store.get(entity.storage_key()).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(_) => {
                warn!("⚠️ {} no contiene una lista, se lee como vacía", entity);
                Ok(Vec::new())
            }
            Err(e) => {
                warn!("⚠️ {} corrupto, se lee como vacío: {}", entity, e);
                Ok(Vec::new())
            }
        }
    }

    async fn write_list(&self, entity: Entity, items: &[Value]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(entity.storage_key(), &raw).await
    }

    async fn by_date(&self, entity: Entity, data: &Value) -> Result<ApiResponse, StorageError> {
        let items = self.load_list(entity).await?;
        let response = match data.get("date").and_then(value_as_key).filter(|d| !d.is_empty()) {
            Some(date) => list_response(
                items
                    .into_iter()
                    .filter(|item| field_key(item, "date").as_deref() == Some(date.as_str()))
                    .collect(),
            ),
            None => list_response(items),
        };
        Ok(response)
    }

    async fn by_field(&self, entity: Entity, field: &str, data: &Value) -> Result<ApiResponse, StorageError> {
        let wanted = field_key(data, field);
        let items = self.load_list(entity).await?;
        Ok(list_response(
            items
                .into_iter()
                .filter(|item| field_key(item, field) == wanted)
                .collect(),
        ))
    }

    async fn by_month_year(&self, entity: Entity, data: &Value) -> Result<ApiResponse, StorageError> {
        let items = self.load_list(entity).await?;
        let month = data.get("month").and_then(integer_from_value);
        let year = data.get("year").and_then(integer_from_value);

        let (Some(month), Some(year)) = (month, year) else {
            return Ok(list_response(items));
        };

        Ok(list_response(
            items
                .into_iter()
                .filter(|item| {
                    item.get("month").and_then(integer_from_value) == Some(month)
                        && item.get("year").and_then(integer_from_value) == Some(year)
                })
                .collect(),
        ))
    }

    async fn add(&self, entity: Entity, data: &Value) -> Result<ApiResponse, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load_list(entity).await?;

        let mut record: Map<String, Value> = data.as_object().cloned().unwrap_or_default();
        let now = self.clock.now_utc();

        let has_id = record
            .get("id")
            .and_then(value_as_key)
            .is_some_and(|id| !id.is_empty());
        if !has_id {
            record.insert("id".to_string(), Value::String(generate_id(&entity.id_prefix(), now)));
        }

        let has_created_at = record
            .get("createdAt")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !has_created_at {
            record.insert("createdAt".to_string(), Value::String(iso_timestamp(now)));
        }

        let record = Value::Object(record);
        items.push(record.clone());
        self.write_list(entity, &items).await?;

        debug!("➕ {} añadido a {}", field_key(&record, "id").unwrap_or_default(), entity);
        Ok(ApiResponse::success_with_message(record, MSG_ADDED))
    }

    async fn update(&self, entity: Entity, data: &Value) -> Result<ApiResponse, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load_list(entity).await?;

        let Some(id) = field_key(data, "id") else {
            return Ok(ApiResponse::error(MSG_NOT_FOUND));
        };
        let Some(index) = items
            .iter()
            .position(|item| field_key(item, "id").as_deref() == Some(id.as_str()))
        else {
            return Ok(ApiResponse::error(MSG_NOT_FOUND));
        };

        let mut updated = items[index].clone();
        shallow_merge(&mut updated, data);
        if let Some(obj) = updated.as_object_mut() {
            obj.insert(
                "updatedAt".to_string(),
                Value::String(iso_timestamp(self.clock.now_utc())),
            );
        }
        items[index] = updated.clone();
        self.write_list(entity, &items).await?;

        Ok(ApiResponse::success_with_message(updated, MSG_UPDATED))
    }

    async fn delete(&self, entity: Entity, data: &Value) -> Result<ApiResponse, StorageError> {
        let _guard = self.write_lock.lock().await;
        let items = self.load_list(entity).await?;

        let Some(id) = field_key(data, "id") else {
            return Ok(ApiResponse::error(MSG_NOT_FOUND));
        };
        let before = items.len();
        let remaining: Vec<Value> = items
            .into_iter()
            .filter(|item| field_key(item, "id").as_deref() != Some(id.as_str()))
            .collect();

        if remaining.len() == before {
            return Ok(ApiResponse::error(MSG_NOT_FOUND));
        }
        // Sin registros no queda blob: una clave ausente ya se lee como lista vacía
        if remaining.is_empty() {
            self.store.remove(entity.storage_key()).await?;
        } else {
            self.write_list(entity, &remaining).await?;
        }
        Ok(ApiResponse::ok_message(MSG_DELETED))
    }

    async fn dashboard(&self) -> Result<ApiResponse, StorageError> {
        let snapshot = DashboardSnapshot {
            employees: self.load_list(Entity::Employees).await?,
            clients: self.load_list(Entity::Clients).await?,
            guard_duty: self.load_list(Entity::GuardDuty).await?,
            day_labor: self.load_list(Entity::DayLabor).await?,
            vessel_orders: self.load_list(Entity::VesselOrders).await?,
            advances: self.load_list(Entity::Advances).await?,
            invoices: self.load_list(Entity::Invoices).await?,
        };
        let stats = dashboard_service::compute_stats(
            &snapshot,
            self.clock.today(),
            self.clock.local_offset(),
        );
        Ok(ApiResponse::success(serde_json::to_value(stats)?))
    }
}

fn list_response(items: Vec<Value>) -> ApiResponse {
    ApiResponse::success(Value::Array(items))
}
