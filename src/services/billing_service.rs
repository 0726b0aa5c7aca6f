//! Importes derivados de nóminas, facturas y jornales
//!
//! Igual que en las asignaciones, estos importes se calculan al preparar el
//! formulario y se envían ya calculados.

use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::models::record::field_number;

pub const INVOICE_DUE_DAYS: i64 = 30;
pub const DEFAULT_LABOR_HOURS: f64 = 8.0;
pub const DEFAULT_LABOR_RATE: f64 = 100.0;

/// Sueldo neto: bruto menos adelantos
pub fn salary_net_pay(gross_salary: f64, advances: f64) -> f64 {
    gross_salary - advances
}

/// Impuesto de una factura, redondeado a la unidad
pub fn invoice_tax(amount: f64, tax_percent: f64) -> f64 {
    (amount * tax_percent / 100.0).round()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub amount: f64,
    pub tax_percent: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl InvoiceTotals {
    pub fn new(amount: f64, tax_percent: f64) -> Self {
        let tax_amount = invoice_tax(amount, tax_percent);
        Self {
            amount,
            tax_percent,
            tax_amount,
            total: amount + tax_amount,
        }
    }
}

/// Siguiente número de factura a partir de cuántas hay ya (`INV-0001`...)
pub fn next_invoice_number(existing: usize) -> String {
    format!("INV-{:04}", existing + 1)
}

pub fn default_due_date(issued: NaiveDate) -> NaiveDate {
    issued + Duration::days(INVOICE_DUE_DAYS)
}

/// Importe de un jornal
pub fn day_labor_amount(hours: f64, rate: f64) -> f64 {
    hours * rate
}

/// Completar los importes derivados de un registro antes de enviarlo
pub fn apply_invoice_totals(record: &mut Value) {
    let totals = InvoiceTotals::new(field_number(record, "amount"), field_number(record, "taxPercent"));
    if let Some(obj) = record.as_object_mut() {
        obj.insert("amount".to_string(), Value::from(totals.amount));
        obj.insert("taxPercent".to_string(), Value::from(totals.tax_percent));
        obj.insert("taxAmount".to_string(), Value::from(totals.tax_amount));
        obj.insert("total".to_string(), Value::from(totals.total));
    }
}

pub fn apply_salary_net_pay(record: &mut Value) {
    let net = salary_net_pay(field_number(record, "grossSalary"), field_number(record, "advances"));
    if let Some(obj) = record.as_object_mut() {
        obj.insert("netPay".to_string(), Value::from(net));
    }
}

pub fn apply_day_labor_amount(record: &mut Value) {
    let amount = day_labor_amount(field_number(record, "hours"), field_number(record, "rate"));
    if let Some(obj) = record.as_object_mut() {
        obj.insert("amount".to_string(), Value::from(amount));
    }
}
