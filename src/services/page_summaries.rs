//! Resúmenes de cabecera y filtros de lista de cada página
//!
//! Las páginas trabajan con los registros tal cual llegan (`Value`); aquí se
//! leen con su modelo tipado solo para contar, sumar o filtrar.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::models::advance::Advance;
use crate::models::client::Client;
use crate::models::day_labor::DayLabor;
use crate::models::employee::Employee;
use crate::models::guard_duty::GuardDuty;
use crate::models::invoice::Invoice;
use crate::models::salary::Salary;
use crate::models::{typed_list, Entity};

/// Resumen de la página activa
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageSummary {
    GuardDuty(GuardDutySummary),
    DayLabor(DayLaborSummary),
    Advances(AdvanceSummary),
    Salary(SalarySummary),
    Invoices(InvoiceSummary),
}

/// Resumen de una lista de registros; `None` para páginas sin cabecera
pub fn page_summary(entity: Entity, records: &[Value]) -> Option<PageSummary> {
    let summary = match entity {
        Entity::GuardDuty => PageSummary::GuardDuty(guard_duty_summary(&typed_list::<GuardDuty>(records))),
        Entity::DayLabor => PageSummary::DayLabor(day_labor_summary(&typed_list::<DayLabor>(records))),
        Entity::Advances => PageSummary::Advances(advance_summary(&typed_list::<Advance>(records))),
        Entity::Salary => PageSummary::Salary(salary_summary(&typed_list::<Salary>(records))),
        Entity::Invoices => PageSummary::Invoices(invoice_summary(&typed_list::<Invoice>(records))),
        _ => return None,
    };
    Some(summary)
}

/// Filtros de la barra de una página. Un campo vacío no filtra.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Texto libre, sin distinguir mayúsculas
    pub search: String,
    pub status: String,
    pub client_id: String,
    pub role: String,
}

impl ListFilter {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Default::default()
        }
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

fn exact(field: &Option<String>, wanted: &str) -> bool {
    wanted.is_empty() || field.as_deref() == Some(wanted)
}

/// Registros cuyo modelo tipado cumple `keep`; la lista original no cambia
fn retain<T: DeserializeOwned>(records: &[Value], keep: impl Fn(&T) -> bool) -> Vec<Value> {
    records
        .iter()
        .filter(|record| {
            serde_json::from_value::<T>((*record).clone()).is_ok_and(|typed| keep(&typed))
        })
        .cloned()
        .collect()
}

/// Aplicar el filtro de la página de `entity`; las páginas sin filtros devuelven todo
pub fn filter_records(entity: Entity, records: &[Value], filter: &ListFilter) -> Vec<Value> {
    match entity {
        Entity::Employees => filter_employees(records, filter),
        Entity::Clients => filter_clients(records, filter),
        Entity::Advances => filter_advances(records, filter),
        Entity::Invoices => filter_invoices(records, filter),
        _ => records.to_vec(),
    }
}

/// Búsqueda por nombre, teléfono o NID; estado y rol exactos
pub fn filter_employees(records: &[Value], filter: &ListFilter) -> Vec<Value> {
    let needle = filter.needle();
    retain(records, |e: &Employee| {
        (needle.is_empty()
            || contains(&e.name, &needle)
            || contains(&e.phone, &needle)
            || contains(&e.nid, &needle))
            && exact(&e.status, &filter.status)
            && exact(&e.role, &filter.role)
    })
}

/// Búsqueda por nombre, teléfono o persona de contacto; estado exacto
pub fn filter_clients(records: &[Value], filter: &ListFilter) -> Vec<Value> {
    let needle = filter.needle();
    retain(records, |c: &Client| {
        (needle.is_empty()
            || contains(&c.name, &needle)
            || contains(&c.phone, &needle)
            || contains(&c.contact_person, &needle))
            && exact(&c.status, &filter.status)
    })
}

/// Búsqueda por nombre de empleado; estado exacto
pub fn filter_advances(records: &[Value], filter: &ListFilter) -> Vec<Value> {
    let needle = filter.needle();
    retain(records, |a: &Advance| {
        (needle.is_empty() || contains(&a.employee_name, &needle)) && exact(&a.status, &filter.status)
    })
}

/// Búsqueda por número o cliente; cliente y estado exactos
pub fn filter_invoices(records: &[Value], filter: &ListFilter) -> Vec<Value> {
    let needle = filter.needle();
    retain(records, |i: &Invoice| {
        (needle.is_empty() || contains(&i.invoice_number, &needle) || contains(&i.client_name, &needle))
            && exact(&i.client_id, &filter.client_id)
            && exact(&i.status, &filter.status)
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardDutySummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

pub fn guard_duty_summary(records: &[GuardDuty]) -> GuardDutySummary {
    GuardDutySummary {
        total: records.len(),
        present: records.iter().filter(|r| r.is_present()).count(),
        absent: records.iter().filter(|r| r.is_absent()).count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLaborSummary {
    pub records: usize,
    pub total_hours: f64,
    pub total_pay: f64,
    pub clients: usize,
}

pub fn day_labor_summary(records: &[DayLabor]) -> DayLaborSummary {
    let clients: HashSet<&str> = records.iter().filter_map(|r| r.client_id.as_deref()).collect();
    DayLaborSummary {
        records: records.len(),
        total_hours: records.iter().map(|r| r.hours).sum(),
        total_pay: records.iter().map(|r| r.amount).sum(),
        clients: clients.len(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceSummary {
    pub total: usize,
    pub pending: usize,
    pub approved_amount: f64,
    pub total_amount: f64,
}

pub fn advance_summary(records: &[Advance]) -> AdvanceSummary {
    AdvanceSummary {
        total: records.len(),
        pending: records
            .iter()
            .filter(|a| a.status.as_deref() == Some("pending"))
            .count(),
        approved_amount: records
            .iter()
            .filter(|a| a.status.as_deref() == Some("approved"))
            .map(|a| a.amount)
            .sum(),
        total_amount: records.iter().map(|a| a.amount).sum(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummary {
    pub total: usize,
    pub paid: usize,
    pub pending: usize,
    pub total_net_pay: f64,
}

pub fn salary_summary(records: &[Salary]) -> SalarySummary {
    SalarySummary {
        total: records.len(),
        paid: records.iter().filter(|s| s.status.as_deref() == Some("paid")).count(),
        pending: records
            .iter()
            .filter(|s| s.status.as_deref() == Some("pending"))
            .count(),
        total_net_pay: records.iter().map(|s| s.net_pay).sum(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub total: usize,
    /// Todo lo que no está pagado
    pub pending: usize,
    pub paid_amount: f64,
    pub total_amount: f64,
}

pub fn invoice_summary(records: &[Invoice]) -> InvoiceSummary {
    InvoiceSummary {
        total: records.len(),
        pending: records.iter().filter(|i| !i.is_paid()).count(),
        paid_amount: records.iter().filter(|i| i.is_paid()).map(|i| i.total).sum(),
        total_amount: records.iter().map(|i| i.total).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guard_duty_summary_counts_late_as_present() {
        let records: Vec<GuardDuty> = typed_list(&[
            json!({ "status": "present" }),
            json!({ "status": "late" }),
            json!({ "status": "absent" }),
        ]);
        assert_eq!(
            guard_duty_summary(&records),
            GuardDutySummary { total: 3, present: 2, absent: 1 }
        );
    }

    #[test]
    fn test_day_labor_summary() {
        let records: Vec<DayLabor> = typed_list(&[
            json!({ "clientId": "C1", "hours": 8, "amount": 800 }),
            json!({ "clientId": "C1", "hours": "4", "amount": "400" }),
            json!({ "clientId": "C2", "hours": 2, "amount": 200 }),
        ]);
        let summary = day_labor_summary(&records);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.total_hours, 14.0);
        assert_eq!(summary.total_pay, 1400.0);
        assert_eq!(summary.clients, 2);
    }

    #[test]
    fn test_advances() {
        let records = vec![
            json!({ "employeeName": "Karim", "status": "pending", "amount": 500 }),
            json!({ "employeeName": "Rahim", "status": "approved", "amount": 1000 }),
        ];
        let summary = advance_summary(&typed_list::<Advance>(&records));
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.approved_amount, 1000.0);
        assert_eq!(summary.total_amount, 1500.0);

        assert_eq!(filter_advances(&records, &ListFilter::search("KAR")).len(), 1);
        let approved = ListFilter {
            status: "approved".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_advances(&records, &approved)[0]["employeeName"], "Rahim");
        assert_eq!(filter_advances(&records, &ListFilter::default()).len(), 2);
    }

    #[test]
    fn test_invoices() {
        let records = vec![
            json!({ "invoiceNumber": "INV-0001", "clientId": "C1", "clientName": "Port", "status": "paid", "total": 1150 }),
            json!({ "invoiceNumber": "INV-0002", "clientId": "C2", "clientName": "Mill", "status": "sent", "total": 500 }),
        ];
        let summary = invoice_summary(&typed_list::<Invoice>(&records));
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.paid_amount, 1150.0);
        assert_eq!(summary.total_amount, 1650.0);

        assert_eq!(filter_invoices(&records, &ListFilter::search("0002")).len(), 1);
        assert_eq!(filter_invoices(&records, &ListFilter::search("port")).len(), 1);
        let mut by_client = ListFilter {
            client_id: "C2".to_string(),
            status: "sent".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_invoices(&records, &by_client).len(), 1);
        by_client.status = "paid".to_string();
        assert!(filter_invoices(&records, &by_client).is_empty());
    }

    #[test]
    fn test_employee_filter() {
        let records = vec![
            json!({ "name": "Abdul Karim", "phone": "01712345678", "nid": "199012", "role": "guard", "status": "active" }),
            json!({ "name": "Rahim", "phone": "01898765432", "nid": "198877", "role": "supervisor", "status": "active" }),
            json!({ "name": "Salam", "phone": "01911111111", "role": "guard", "status": "inactive" }),
        ];

        assert_eq!(filter_employees(&records, &ListFilter::search("karim")).len(), 1);
        assert_eq!(filter_employees(&records, &ListFilter::search("0189"))[0]["name"], "Rahim");
        assert_eq!(filter_employees(&records, &ListFilter::search("1988"))[0]["name"], "Rahim");

        let active_guards = ListFilter {
            status: "active".to_string(),
            role: "guard".to_string(),
            ..Default::default()
        };
        let found = filter_employees(&records, &active_guards);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["name"], "Abdul Karim");

        assert_eq!(filter_employees(&records, &ListFilter::default()).len(), 3);
    }

    #[test]
    fn test_client_filter() {
        let records = vec![
            json!({ "name": "Chittagong Port", "phone": "01711111111", "contactPerson": "Mr. Hasan", "status": "active" }),
            json!({ "name": "Meghna Group", "phone": "01822222222", "contactPerson": "Ms. Rina", "status": "inactive" }),
        ];

        assert_eq!(filter_clients(&records, &ListFilter::search("hasan"))[0]["name"], "Chittagong Port");
        assert_eq!(filter_clients(&records, &ListFilter::search("018")).len(), 1);
        let inactive = ListFilter {
            status: "inactive".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_clients(&records, &inactive)[0]["name"], "Meghna Group");
        // Sin filtros para esta página
        assert_eq!(filter_records(Entity::GuardDuty, &records, &inactive).len(), 2);
    }

    #[test]
    fn test_salary_summary() {
        let records: Vec<Salary> = typed_list(&[
            json!({ "status": "paid", "netPay": 13000 }),
            json!({ "status": "pending", "netPay": 9000 }),
        ]);
        let summary = salary_summary(&records);
        assert_eq!(summary.paid, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.total_net_pay, 22000.0);
    }

    #[test]
    fn test_page_summary_by_entity() {
        let records = vec![json!({ "status": "paid", "total": 100 })];
        assert_eq!(
            page_summary(Entity::Invoices, &records),
            Some(PageSummary::Invoices(InvoiceSummary {
                total: 1,
                pending: 0,
                paid_amount: 100.0,
                total_amount: 100.0,
            }))
        );
        assert_eq!(page_summary(Entity::Employees, &records), None);
    }
}
