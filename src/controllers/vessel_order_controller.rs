//! Controlador de la página de órdenes de buque
//!
//! Además del CRUD, mantiene los filtros del informe, las listas de
//! referencia (clientes y trabajadores activos) y el formulario con sus
//! importes calculados.

use futures::join;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::controllers::debounce::Debouncer;
use crate::controllers::duty_form::{DutyForm, FormChange};
use crate::controllers::form_rules::{first_message, validate_form};
use crate::controllers::notification::Notification;
use crate::models::client::Client;
use crate::models::duty_assignment::DutyAssignment;
use crate::models::employee::Employee;
use crate::models::record::field_key;
use crate::models::{typed_list, Entity};
use crate::services::api_facade::{ApiFacade, DataSource};
use crate::services::duty_calculator::with_live_figures;
use crate::services::duty_report::{self, ClientGroup, DutyFilter, DutySummary};
use crate::utils::clock::Clock;

pub struct VesselOrderController {
    facade: Arc<ApiFacade>,
    clock: Arc<dyn Clock>,
    orders: Vec<Value>,
    clients: Vec<Client>,
    workers: Vec<Employee>,
    filter: DutyFilter,
    search: Debouncer<String>,
    editing_id: Option<String>,
    form: Option<DutyForm>,
    last_source: Option<DataSource>,
}

impl VesselOrderController {
    pub fn new(facade: Arc<ApiFacade>, clock: Arc<dyn Clock>) -> Self {
        Self {
            facade,
            clock,
            orders: Vec::new(),
            clients: Vec::new(),
            workers: Vec::new(),
            filter: DutyFilter::default(),
            search: Debouncer::default(),
            editing_id: None,
            form: None,
            last_source: None,
        }
    }

    /// Cargar listas de referencia y órdenes a la vez
    pub async fn init(&mut self) -> Option<Notification> {
        let (clients, workers, orders) = join!(
            self.facade.list(Entity::Clients),
            self.facade.list(Entity::Employees),
            self.facade.list(Entity::VesselOrders),
        );

        if clients.response.success {
            self.clients = typed_list::<Client>(&clients.response.into_list())
                .into_iter()
                .filter(Client::is_active)
                .collect();
        }
        if workers.response.success {
            self.workers = typed_list::<Employee>(&workers.response.into_list())
                .into_iter()
                .filter(Employee::is_active)
                .collect();
        }

        self.last_source = Some(orders.source);
        if orders.response.success {
            self.orders = orders.response.into_list();
            None
        } else {
            Some(Notification::error("Error loading orders"))
        }
    }

    pub async fn load_orders(&mut self) -> Option<Notification> {
        let dispatch = self.facade.list(Entity::VesselOrders).await;
        self.last_source = Some(dispatch.source);
        if dispatch.response.success {
            self.orders = dispatch.response.into_list();
            debug!("🚢 {} órdenes cargadas", self.orders.len());
            None
        } else {
            Some(Notification::error("Error loading orders"))
        }
    }

    pub fn orders(&self) -> &[Value] {
        &self.orders
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn workers(&self) -> &[Employee] {
        &self.workers
    }

    pub fn filter(&self) -> &DutyFilter {
        &self.filter
    }

    pub fn last_source(&self) -> Option<DataSource> {
        self.last_source
    }

    /// Pulsación en el campo de búsqueda; se aplica tras el debounce
    pub fn search_input(&mut self, text: impl Into<String>) {
        self.search.push(text.into());
    }

    /// Esperar al debounce y aplicar la última búsqueda
    pub async fn settle_search(&mut self) {
        if let Some(search) = self.search.settle().await {
            self.filter.search = search;
        }
    }

    pub fn set_status_filter(&mut self, status: impl Into<String>) {
        self.filter.status = status.into();
    }

    pub fn set_client_filter(&mut self, client_id: impl Into<String>) {
        self.filter.client_id = client_id.into();
    }

    /// Órdenes filtradas, con cifras en vivo para las que siguen en curso
    pub fn visible(&self) -> Vec<Value> {
        let now = self.clock.now();
        duty_report::filter(&self.orders, &self.filter)
            .iter()
            .map(|order| with_live_figures(order, now))
            .collect()
    }

    pub fn report(&self) -> (DutySummary, Vec<ClientGroup>) {
        let visible = self.visible();
        (
            duty_report::summarize(&visible),
            duty_report::group_by_client_and_vessel(&visible),
        )
    }

    pub fn form(&self) -> Option<&DutyForm> {
        self.form.as_ref()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn open_add(&mut self) -> &DutyForm {
        self.editing_id = None;
        self.form.insert(DutyForm::new(self.clock.now()))
    }

    pub fn begin_edit(&mut self, id: &str) -> Option<&DutyForm> {
        let record = self
            .orders
            .iter()
            .find(|o| field_key(o, "id").as_deref() == Some(id))?;
        let assignment = DutyAssignment::from_record(record)?;
        self.editing_id = Some(id.to_string());
        Some(self.form.insert(DutyForm::from_assignment(assignment, self.clock.now())))
    }

    /// Cambio en un campo del formulario abierto
    pub fn change(&mut self, change: FormChange) {
        let now = self.clock.now();
        if let Some(form) = self.form.as_mut() {
            form.apply(change, now);
        }
    }

    /// Seleccionar cliente del desplegable por id
    pub fn select_client(&mut self, client_id: &str) {
        let name = self
            .clients
            .iter()
            .find(|c| c.id.as_deref() == Some(client_id))
            .and_then(|c| c.name.clone())
            .unwrap_or_default();
        self.change(FormChange::Client {
            id: client_id.to_string(),
            name,
        });
    }

    pub fn select_worker(&mut self, worker_id: &str) {
        let name = self
            .workers
            .iter()
            .find(|w| w.id.as_deref() == Some(worker_id))
            .and_then(|w| w.name.clone())
            .unwrap_or_default();
        self.change(FormChange::Worker {
            id: worker_id.to_string(),
            name,
        });
    }

    pub async fn submit(&mut self) -> Notification {
        let Some(form) = self.form.as_mut() else {
            return Notification::warning("No order form is open");
        };
        // Las cifras se recalculan justo antes de enviar
        form.recompute(self.clock.now());
        let mut record = form.to_record();

        if let Err(errors) = validate_form(Entity::VesselOrders, &record) {
            return Notification::error(first_message(&errors));
        }

        let editing = self.editing_id.clone();
        let dispatch = match &editing {
            Some(id) => {
                if let Some(obj) = record.as_object_mut() {
                    obj.insert("id".to_string(), Value::String(id.clone()));
                }
                self.facade.update(Entity::VesselOrders, &record).await
            }
            None => self.facade.create(Entity::VesselOrders, &record).await,
        };
        self.last_source = Some(dispatch.source);

        if !dispatch.response.success {
            return Notification::error(
                dispatch
                    .response
                    .message
                    .unwrap_or_else(|| "Error saving order".to_string()),
            );
        }

        self.form = None;
        self.editing_id = None;
        let success = if editing.is_some() {
            Notification::success("Order updated")
        } else {
            Notification::success("Order created")
        };
        self.load_orders().await.unwrap_or(success)
    }

    pub async fn delete(&mut self, id: &str) -> Notification {
        let dispatch = self.facade.delete(Entity::VesselOrders, id).await;
        self.last_source = Some(dispatch.source);
        if !dispatch.response.success {
            return Notification::error(
                dispatch
                    .response
                    .message
                    .unwrap_or_else(|| "Error deleting order".to_string()),
            );
        }
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
            self.form = None;
        }
        self.load_orders()
            .await
            .unwrap_or_else(|| Notification::success("Order deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::LocalRepository;
    use crate::storage::MemoryStore;
    use crate::utils::clock::FixedClock;
    use chrono::NaiveDate;
    use serde_json::json;

    async fn controller() -> VesselOrderController {
        let now = NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(now));
        let local = LocalRepository::new(Arc::new(MemoryStore::new()), clock.clone());
        let facade = Arc::new(ApiFacade::local_only(Arc::new(local)));

        facade
            .create(Entity::Clients, &json!({ "id": "CLI-1", "name": "Port", "status": "active" }))
            .await;
        facade
            .create(Entity::Clients, &json!({ "id": "CLI-2", "name": "Old Mill", "status": "inactive" }))
            .await;
        facade
            .create(Entity::Employees, &json!({ "id": "EMP-1", "name": "ABC Doe", "status": "active" }))
            .await;

        VesselOrderController::new(facade, clock)
    }

    #[tokio::test]
    async fn test_init_loads_active_reference_lists() {
        let mut page = controller().await;
        assert!(page.init().await.is_none());
        assert_eq!(page.clients().len(), 1);
        assert_eq!(page.workers().len(), 1);
        assert!(page.orders().is_empty());
    }

    #[tokio::test]
    async fn test_submit_requires_client() {
        let mut page = controller().await;
        page.init().await;
        page.open_add();
        let notification = page.submit().await;
        assert_eq!(notification, Notification::error("Please select a client"));
    }

    #[tokio::test]
    async fn test_create_then_report_with_live_figures() {
        let mut page = controller().await;
        page.init().await;

        page.open_add();
        page.select_client("CLI-1");
        page.select_worker("EMP-1");
        page.change(FormChange::MotherVessel("MV Ocean".into()));
        page.change(FormChange::StartDate(Some("2024-01-01".into())));
        page.change(FormChange::RatePerDay(500.0));
        page.change(FormChange::Conveyance(200.0));

        let notification = page.submit().await;
        assert_eq!(notification, Notification::success("Order created"));
        assert_eq!(page.orders().len(), 1);
        // 3 días y 9 horas en curso -> 4 días
        assert_eq!(page.orders()[0]["dutyDays"], 4.0);
        assert_eq!(page.orders()[0]["clientName"], "Port");

        let (summary, groups) = page.report();
        assert_eq!(summary.total_duty_days, 4.0);
        assert_eq!(summary.total_amount, 2200.0);
        assert_eq!(summary.client_count, 1);
        assert_eq!(groups[0].client, "Port");
        assert_eq!(groups[0].vessels[0].vessel, "MV Ocean");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced() {
        let mut page = controller().await;
        page.init().await;
        page.open_add();
        page.select_client("CLI-1");
        page.select_worker("EMP-1");
        page.submit().await;

        page.search_input("zzz");
        page.search_input("abc");
        assert_eq!(page.filter().search, "");
        page.settle_search().await;
        assert_eq!(page.filter().search, "abc");
        assert_eq!(page.visible().len(), 1);

        page.set_status_filter("completed");
        assert!(page.visible().is_empty());
    }
}
