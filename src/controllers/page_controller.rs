//! Controlador genérico de página
//!
//! Un controlador por página: guarda la lista cargada y el registro en
//! edición. Ningún fallo sale de aquí como error; todo termina en una
//! `Notification`.

use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::controllers::form_rules::{first_message, form_defaults, validate_form};
use crate::controllers::notification::Notification;
use crate::models::record::{field_key, shallow_merge};
use crate::models::{Action, Entity};
use crate::services::api_facade::{ApiFacade, DataSource};
use crate::services::billing_service;
use crate::services::page_summaries::{self, ListFilter, PageSummary};

pub struct PageController {
    facade: Arc<ApiFacade>,
    entity: Entity,
    list_action: Action,
    list_params: Value,
    records: Vec<Value>,
    editing_id: Option<String>,
    last_source: Option<DataSource>,
}

impl PageController {
    pub fn new(facade: Arc<ApiFacade>, entity: Entity) -> Self {
        Self {
            facade,
            entity,
            list_action: Action::list_for(entity),
            list_params: json!({}),
            records: Vec::new(),
            editing_id: None,
            last_source: None,
        }
    }

    /// Usar otra lectura para la lista (por fecha, por mes...)
    pub fn with_list_action(mut self, action: Action, params: Value) -> Self {
        self.list_action = action;
        self.list_params = params;
        self
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn last_source(&self) -> Option<DataSource> {
        self.last_source
    }

    /// Cabecera de la página calculada sobre la lista cargada
    pub fn summary(&self) -> Option<PageSummary> {
        page_summaries::page_summary(self.entity, &self.records)
    }

    /// Registros visibles con los filtros de la barra; la lista cargada no cambia
    pub fn filtered(&self, filter: &ListFilter) -> Vec<Value> {
        page_summaries::filter_records(self.entity, &self.records, filter)
    }

    /// Cambiar los parámetros de la lista y recargar
    pub async fn load_with(&mut self, action: Action, params: Value) -> Option<Notification> {
        self.list_action = action;
        self.list_params = params;
        self.load().await
    }

    /// Recargar la lista; solo devuelve notificación si falla
    pub async fn load(&mut self) -> Option<Notification> {
        let dispatch = self.facade.dispatch(self.list_action, &self.list_params).await;
        self.last_source = Some(dispatch.source);

        if dispatch.response.success {
            self.records = dispatch.response.into_list();
            debug!("📋 {}: {} registros", self.entity, self.records.len());
            None
        } else {
            Some(Notification::error(
                dispatch
                    .response
                    .message
                    .unwrap_or_else(|| format!("Failed to load {}", self.entity.label().to_lowercase())),
            ))
        }
    }

    /// Abrir el formulario de alta con sus valores por defecto
    pub fn open_add(&mut self, today: NaiveDate) -> Value {
        self.editing_id = None;
        form_defaults(self.entity, today, self.records.len())
    }

    /// Empezar a editar un registro de la lista; `None` si no está cargado
    pub fn begin_edit(&mut self, id: &str) -> Option<Value> {
        let record = self.find(id)?.clone();
        self.editing_id = Some(id.to_string());
        Some(record)
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    fn find(&self, id: &str) -> Option<&Value> {
        self.records
            .iter()
            .find(|r| field_key(r, "id").as_deref() == Some(id))
    }

    /// Enviar el formulario: alta o edición según haya registro en edición
    pub async fn submit(&mut self, mut data: Value) -> Notification {
        if let Err(errors) = validate_form(self.entity, &data) {
            return Notification::error(first_message(&errors));
        }
        prepare_derived(self.entity, &mut data);

        let editing = self.editing_id.clone();
        let dispatch = match &editing {
            Some(id) => {
                if let Some(obj) = data.as_object_mut() {
                    obj.insert("id".to_string(), Value::String(id.clone()));
                }
                self.facade.update(self.entity, &data).await
            }
            None => self.facade.create(self.entity, &data).await,
        };
        self.last_source = Some(dispatch.source);

        if !dispatch.response.success {
            return Notification::error(
                dispatch
                    .response
                    .message
                    .unwrap_or_else(|| "Operation failed".to_string()),
            );
        }

        self.editing_id = None;
        let message = if editing.is_some() {
            updated_message(self.entity)
        } else {
            created_message(self.entity)
        };
        self.reload_after_write(Notification::success(message)).await
    }

    pub async fn delete(&mut self, id: &str) -> Notification {
        let dispatch = self.facade.delete(self.entity, id).await;
        self.last_source = Some(dispatch.source);

        if !dispatch.response.success {
            return Notification::error(
                dispatch
                    .response
                    .message
                    .unwrap_or_else(|| "Delete failed".to_string()),
            );
        }
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }
        self.reload_after_write(Notification::success(deleted_message(self.entity)))
            .await
    }

    /// Actualizar unos campos de un registro cargado (p. ej. marcar pagado)
    pub async fn patch(&mut self, id: &str, fields: Value, success: &str) -> Notification {
        let Some(mut record) = self.find(id).cloned() else {
            return Notification::error(crate::repositories::local_repository::MSG_NOT_FOUND);
        };
        shallow_merge(&mut record, &fields);

        let dispatch = self.facade.update(self.entity, &record).await;
        self.last_source = Some(dispatch.source);
        if !dispatch.response.success {
            return Notification::error(
                dispatch
                    .response
                    .message
                    .unwrap_or_else(|| "Operation failed".to_string()),
            );
        }
        self.reload_after_write(Notification::success(success)).await
    }

    /// Marcar una nómina como pagada hoy
    pub async fn mark_salary_paid(&mut self, id: &str, today: NaiveDate) -> Notification {
        let fields = json!({
            "status": "paid",
            "paidDate": crate::utils::dates::format_date_iso(today),
        });
        self.patch(id, fields, "Salary marked as paid").await
    }

    async fn reload_after_write(&mut self, success: Notification) -> Notification {
        match self.load().await {
            Some(failure) => failure,
            None => success,
        }
    }
}

/// Importes que el formulario calcula antes de enviar
fn prepare_derived(entity: Entity, data: &mut Value) {
    match entity {
        Entity::Invoices => billing_service::apply_invoice_totals(data),
        Entity::Salary => billing_service::apply_salary_net_pay(data),
        Entity::DayLabor => billing_service::apply_day_labor_amount(data),
        _ => {}
    }
}

fn created_message(entity: Entity) -> String {
    match entity {
        Entity::Employees | Entity::Clients => format!("{} added successfully", entity.label()),
        Entity::VesselOrders | Entity::Invoices => format!("{} created", entity.label()),
        Entity::Salary => "Salary processed".to_string(),
        _ => format!("{} added", entity.label()),
    }
}

fn updated_message(entity: Entity) -> String {
    match entity {
        Entity::Employees | Entity::Clients => format!("{} updated successfully", entity.label()),
        _ => format!("{} updated", entity.label()),
    }
}

fn deleted_message(entity: Entity) -> String {
    match entity {
        Entity::Employees | Entity::Clients => format!("{} deleted successfully", entity.label()),
        _ => format!("{} deleted", entity.label()),
    }
}
