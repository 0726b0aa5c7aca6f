//! Estadísticas del dashboard calculadas sobre el almacenamiento local

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use serde_json::Value;

use crate::models::advance::Advance;
use crate::models::client::Client;
use crate::models::dashboard::DashboardStats;
use crate::models::employee::Employee;
use crate::models::guard_duty::GuardDuty;
use crate::models::invoice::Invoice;
use crate::models::record::field_str;
use crate::models::typed_list;
use crate::utils::dates::{format_date_iso, parse_date};

/// Listas leídas del almacenamiento para un cálculo
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub employees: Vec<Value>,
    pub clients: Vec<Value>,
    pub guard_duty: Vec<Value>,
    pub day_labor: Vec<Value>,
    pub vessel_orders: Vec<Value>,
    pub advances: Vec<Value>,
    pub invoices: Vec<Value>,
}

fn same_month(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d.year() == today.year() && d.month() == today.month())
}

/// Fecha local de un timestamp persistido (UTC con `Z`); una fecha sin hora se toma tal cual
fn local_date(timestamp: &str, offset: FixedOffset) -> Option<NaiveDate> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => Some(instant.with_timezone(&offset).date_naive()),
        Err(_) => parse_date(timestamp),
    }
}

/// `today` es la fecha local; `offset` pasa los `createdAt` a esa misma hora local
pub fn compute_stats(snapshot: &DashboardSnapshot, today: NaiveDate, offset: FixedOffset) -> DashboardStats {
    let today_iso = format_date_iso(today);

    let employees: Vec<Employee> = typed_list(&snapshot.employees);
    let clients: Vec<Client> = typed_list(&snapshot.clients);
    let guard_duty: Vec<GuardDuty> = typed_list(&snapshot.guard_duty);
    let advances: Vec<Advance> = typed_list(&snapshot.advances);
    let invoices: Vec<Invoice> = typed_list(&snapshot.invoices);

    let guards_today: Vec<&GuardDuty> = guard_duty
        .iter()
        .filter(|d| d.date.as_deref() == Some(today_iso.as_str()))
        .collect();

    DashboardStats {
        active_employees: employees.iter().filter(|e| e.is_active()).count(),
        active_clients: clients.iter().filter(|c| c.is_active()).count(),
        guards_today: guards_today.len(),
        present_guards: guards_today.iter().filter(|d| d.is_present()).count(),
        today_day_labor: snapshot
            .day_labor
            .iter()
            .filter(|r| field_str(r, "date") == Some(today_iso.as_str()))
            .count(),
        vessel_orders_this_month: snapshot
            .vessel_orders
            .iter()
            .filter(|o| same_month(field_str(o, "startDate").and_then(parse_date), today))
            .count(),
        pending_advances: advances
            .iter()
            .filter(|a| a.status.as_deref() == Some("pending"))
            .count(),
        total_advances: advances
            .iter()
            .filter(|a| same_month(a.date.as_deref().and_then(parse_date), today))
            .map(|a| a.amount)
            .sum(),
        monthly_revenue: invoices
            .iter()
            .filter(|i| {
                i.is_paid()
                    && same_month(i.created_at.as_deref().and_then(|ts| local_date(ts, offset)), today)
            })
            .map(|i| i.total)
            .sum(),
    }
}
