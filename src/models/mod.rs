//! Modelos del sistema
//!
//! Los registros se guardan como objetos JSON abiertos (`record`); los
//! structs tipados son vistas tolerantes para cálculos y resúmenes.

pub mod action;
pub mod advance;
pub mod client;
pub mod dashboard;
pub mod day_labor;
pub mod duty_assignment;
pub mod employee;
pub mod entity;
pub mod guard_duty;
pub mod invoice;
pub mod record;
pub mod salary;

pub use action::{Action, Operation, UnknownAction};
pub use duty_assignment::{DutyAssignment, Shift};
pub use entity::Entity;
pub use record::Record;

/// Leer una lista de registros como modelos tipados, descartando los ilegibles
pub fn typed_list<T: serde::de::DeserializeOwned>(records: &[serde_json::Value]) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.is_object())
        .filter_map(|r| match serde_json::from_value::<T>(r.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("⚠️ Registro ilegible descartado: {}", e);
                None
            }
        })
        .collect()
}
