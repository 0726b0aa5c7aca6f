//! Tabla de despacho del almacenamiento local
//!
//! Cada acción se asocia a la entidad que toca y al tipo de handler que la
//! resuelve. Todos los handlers comparten la forma
//! `(clave de almacenamiento, payload) -> ApiResponse`.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::{Action, Entity, Operation};

/// Forma de resolver una acción en local
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Lista completa de la entidad
    ListAll,
    /// Filtra por `date`; sin fecha devuelve todo
    ByDate,
    /// Filtra por igualdad de un campo obligatorio del payload
    ByField(&'static str),
    /// Filtra por un campo solo si el payload lo trae
    ByOptionalField(&'static str),
    /// Filtra por `month` + `year`; sin ambos devuelve todo
    ByMonthYear,
    Add,
    Update,
    Delete,
    /// Agregado de varias entidades
    Dashboard,
}

lazy_static! {
    static ref DISPATCH: HashMap<Action, (Option<Entity>, Handler)> = build_table();
}

fn list_handler(action: Action) -> Handler {
    match action {
        Action::GetGuardDuty | Action::GetDayLabor => Handler::ByDate,
        Action::GetVesselPersonnel => Handler::ByField("orderId"),
        Action::GetDayLaborWorkers => Handler::ByField("dayLaborId"),
        Action::GetAdvances => Handler::ByOptionalField("employeeId"),
        Action::GetSalary => Handler::ByMonthYear,
        Action::DashboardData => Handler::Dashboard,
        _ => Handler::ListAll,
    }
}

fn build_table() -> HashMap<Action, (Option<Entity>, Handler)> {
    Action::ALL
        .iter()
        .map(|&action| {
            let handler = match action.operation() {
                Operation::List => list_handler(action),
                Operation::Create => Handler::Add,
                Operation::Update => Handler::Update,
                Operation::Delete => Handler::Delete,
            };
            (action, (action.entity(), handler))
        })
        .collect()
}

/// Buscar la entrada de una acción
pub fn lookup(action: Action) -> Option<(Option<Entity>, Handler)> {
    DISPATCH.get(&action).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_is_dispatched() {
        for action in Action::ALL {
            assert!(lookup(*action).is_some(), "{} sin handler", action);
        }
    }

    #[test]
    fn test_filtered_reads() {
        assert_eq!(
            lookup(Action::GetGuardDuty),
            Some((Some(Entity::GuardDuty), Handler::ByDate))
        );
        assert_eq!(
            lookup(Action::GetVesselPersonnel),
            Some((Some(Entity::VesselPersonnel), Handler::ByField("orderId")))
        );
        assert_eq!(
            lookup(Action::GetAdvances),
            Some((Some(Entity::Advances), Handler::ByOptionalField("employeeId")))
        );
        assert_eq!(lookup(Action::GetAllSalary), Some((Some(Entity::Salary), Handler::ListAll)));
        assert_eq!(lookup(Action::DashboardData), Some((None, Handler::Dashboard)));
    }

    #[test]
    fn test_writes() {
        assert_eq!(lookup(Action::ProcessSalary), Some((Some(Entity::Salary), Handler::Add)));
        assert_eq!(
            lookup(Action::DeleteDayLaborWorker),
            Some((Some(Entity::DayLaborWorkers), Handler::Delete))
        );
    }
}
