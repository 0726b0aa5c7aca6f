//! Reglas de formulario previas al envío y valores por defecto
//!
//! Una regla rota detiene el envío; el controlador muestra su mensaje.

use chrono::NaiveDate;
use serde_json::{json, Value};
use validator::{ValidationError, ValidationErrors};

use crate::models::record::field_key;
use crate::models::Entity;
use crate::services::billing_service::{
    default_due_date, next_invoice_number, DEFAULT_LABOR_HOURS, DEFAULT_LABOR_RATE,
};
use crate::utils::dates::format_date_iso;
use crate::utils::validation::validate_phone;

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const MSG_SELECT_EMPLOYEE: &str = "Please select an employee from the dropdown";
pub const MSG_SELECT_CLIENT: &str = "Please select a client from the dropdown";
pub const MSG_SELECT_ORDER_CLIENT: &str = "Please select a client";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";

fn present(data: &Value, field: &str) -> bool {
    field_key(data, field).is_some_and(|v| !v.trim().is_empty())
}

fn rule_error(field: &'static str, code: &'static str, message: &'static str) -> ValidationErrors {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

fn require(data: &Value, fields: &[&'static str], message: &'static str) -> Result<(), ValidationErrors> {
    match fields.iter().find(|f| !present(data, f)) {
        Some(field) => Err(rule_error(*field, "required", message)),
        None => Ok(()),
    }
}

/// Comprobar un formulario antes de enviarlo. Se devuelve la primera regla rota.
pub fn validate_form(entity: Entity, data: &Value) -> Result<(), ValidationErrors> {
    match entity {
        Entity::Employees => {
            require(data, &["name", "phone", "role"], MSG_REQUIRED_FIELDS)?;
            check_phone(data)
        }
        Entity::Clients => {
            require(data, &["name", "phone"], MSG_REQUIRED_FIELDS)?;
            check_phone(data)
        }
        Entity::GuardDuty => {
            require(data, &["employeeId"], MSG_SELECT_EMPLOYEE)?;
            require(data, &["clientId"], MSG_SELECT_CLIENT)
        }
        Entity::VesselOrders => require(data, &["clientId"], MSG_SELECT_ORDER_CLIENT),
        _ => Ok(()),
    }
}

fn check_phone(data: &Value) -> Result<(), ValidationErrors> {
    match field_key(data, "phone") {
        Some(phone) if !phone.trim().is_empty() => validate_phone(&phone).map_err(|mut e| {
            e.message = Some(MSG_INVALID_PHONE.into());
            let mut errors = ValidationErrors::new();
            errors.add("phone", e);
            errors
        }),
        _ => Ok(()),
    }
}

/// Primer mensaje legible de un conjunto de errores
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|list| list.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| MSG_REQUIRED_FIELDS.to_string())
}

/// Valores iniciales del formulario de alta
pub fn form_defaults(entity: Entity, today: NaiveDate, existing: usize) -> Value {
    let today_iso = format_date_iso(today);
    match entity {
        Entity::Employees | Entity::Clients => json!({ "status": "active" }),
        Entity::GuardDuty => json!({ "date": today_iso, "status": "present" }),
        Entity::VesselOrders => json!({ "startDate": today_iso, "startShift": "day", "status": "pending" }),
        Entity::DayLabor => json!({
            "date": today_iso,
            "hours": DEFAULT_LABOR_HOURS,
            "rate": DEFAULT_LABOR_RATE,
            "amount": DEFAULT_LABOR_HOURS * DEFAULT_LABOR_RATE
        }),
        Entity::Advances => json!({ "date": today_iso, "status": "pending" }),
        Entity::Salary => json!({ "status": "pending" }),
        Entity::Invoices => json!({
            "invoiceNumber": next_invoice_number(existing),
            "date": today_iso,
            "dueDate": format_date_iso(default_due_date(today)),
            "taxPercent": 0,
            "status": "draft"
        }),
        Entity::VesselPersonnel | Entity::DayLaborWorkers => json!({}),
    }
}
