//! Facade de la API
//!
//! Punto único de acceso a los datos. Con endpoint remoto configurado,
//! cada llamada va primero al remoto y, si falla, se resuelve una sola vez
//! contra el almacenamiento local. Sin endpoint, todo va al local.

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::clients::RemoteEndpoint;
use crate::dto::ApiResponse;
use crate::models::{Action, Entity};
use crate::repositories::LocalRepository;
use crate::utils::loading::LoadingIndicator;

/// Origen de la respuesta de una llamada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DataSource {
    Remote,
    /// El remoto falló y respondió el almacenamiento local
    LocalFallback,
    Local,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Remote => "remote",
            DataSource::LocalFallback => "localFallback",
            DataSource::Local => "local",
        }
    }
}

/// Respuesta junto con su origen
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub response: ApiResponse,
    pub source: DataSource,
}

pub struct ApiFacade {
    remote: Option<Arc<dyn RemoteEndpoint>>,
    local: Arc<LocalRepository>,
    loading: LoadingIndicator,
}

impl ApiFacade {
    pub fn new(remote: Option<Arc<dyn RemoteEndpoint>>, local: Arc<LocalRepository>) -> Self {
        Self {
            remote,
            local,
            loading: LoadingIndicator::new(),
        }
    }

    pub fn local_only(local: Arc<LocalRepository>) -> Self {
        Self::new(None, local)
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Nombre del almacenamiento activo, como lo muestra la página de sistema
    pub fn storage_type(&self) -> &'static str {
        if self.is_remote() {
            "Google Sheets"
        } else {
            "Local Storage"
        }
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn local(&self) -> &LocalRepository {
        &self.local
    }

    /// Resolver una acción por nombre. Los nombres desconocidos no salen al remoto.
    pub async fn execute(&self, action: &str, data: &Value) -> Dispatch {
        match action.parse::<Action>() {
            Ok(action) => self.dispatch(action, data).await,
            Err(e) => Dispatch {
                response: ApiResponse::error(e.to_string()),
                source: DataSource::Local,
            },
        }
    }

    pub async fn dispatch(&self, action: Action, data: &Value) -> Dispatch {
        let Some(remote) = &self.remote else {
            return Dispatch {
                response: self.local.handle(action, data).await,
                source: DataSource::Local,
            };
        };

        let result = {
            let _loading = self.loading.show();
            if action.is_read() {
                remote.get(action.name(), data).await
            } else {
                remote.post(action.name(), data).await
            }
        };

        match result {
            Ok(response) => {
                debug!("🌐 {} resuelto por el endpoint remoto", action);
                Dispatch {
                    response,
                    source: DataSource::Remote,
                }
            }
            Err(e) => {
                warn!("⚠️ Endpoint remoto falló en {}: {}. Usando almacenamiento local", action, e);
                Dispatch {
                    response: self.local.handle(action, data).await,
                    source: DataSource::LocalFallback,
                }
            }
        }
    }

    pub async fn list(&self, entity: Entity) -> Dispatch {
        self.dispatch(Action::list_for(entity), &json!({})).await
    }

    pub async fn create(&self, entity: Entity, data: &Value) -> Dispatch {
        self.dispatch(Action::create_for(entity), data).await
    }

    pub async fn update(&self, entity: Entity, data: &Value) -> Dispatch {
        self.dispatch(Action::update_for(entity), data).await
    }

    pub async fn delete(&self, entity: Entity, id: &str) -> Dispatch {
        self.dispatch(Action::delete_for(entity), &json!({ "id": id })).await
    }

    pub async fn guard_duty_by_date(&self, date: &str) -> Dispatch {
        self.dispatch(Action::GetGuardDuty, &json!({ "date": date })).await
    }

    pub async fn day_labor_by_date(&self, date: &str) -> Dispatch {
        self.dispatch(Action::GetDayLabor, &json!({ "date": date })).await
    }

    pub async fn vessel_personnel(&self, order_id: &str) -> Dispatch {
        self.dispatch(Action::GetVesselPersonnel, &json!({ "orderId": order_id }))
            .await
    }

    pub async fn day_labor_workers(&self, day_labor_id: &str) -> Dispatch {
        self.dispatch(Action::GetDayLaborWorkers, &json!({ "dayLaborId": day_labor_id }))
            .await
    }

    pub async fn advances(&self, employee_id: Option<&str>) -> Dispatch {
        let params = match employee_id {
            Some(id) => json!({ "employeeId": id }),
            None => json!({}),
        };
        self.dispatch(Action::GetAdvances, &params).await
    }

    pub async fn salary(&self, month: u32, year: i32) -> Dispatch {
        self.dispatch(Action::GetSalary, &json!({ "month": month, "year": year }))
            .await
    }

    pub async fn dashboard_stats(&self) -> Dispatch {
        self.dispatch(Action::DashboardData, &json!({})).await
    }
}
