//! Entidades persistidas
//!
//! Cada entidad tiene su propia clave en el almacenamiento local; el prefijo
//! de los IDs generados se deriva de esa clave.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::ids::prefix_from_storage_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Entity {
    Employees,
    Clients,
    GuardDuty,
    VesselOrders,
    VesselPersonnel,
    DayLabor,
    DayLaborWorkers,
    Advances,
    Salary,
    Invoices,
}

impl Entity {
    pub const ALL: [Entity; 10] = [
        Entity::Employees,
        Entity::Clients,
        Entity::GuardDuty,
        Entity::VesselOrders,
        Entity::VesselPersonnel,
        Entity::DayLabor,
        Entity::DayLaborWorkers,
        Entity::Advances,
        Entity::Salary,
        Entity::Invoices,
    ];

    /// Clave de almacenamiento local
    pub fn storage_key(self) -> &'static str {
        match self {
            Entity::Employees => "al_aksha_employees",
            Entity::Clients => "al_aksha_clients",
            Entity::GuardDuty => "al_aksha_guard_duty",
            Entity::VesselOrders => "al_aksha_vessel_orders",
            Entity::VesselPersonnel => "al_aksha_vessel_personnel",
            Entity::DayLabor => "al_aksha_day_labor",
            Entity::DayLaborWorkers => "al_aksha_day_labor_workers",
            Entity::Advances => "al_aksha_advances",
            Entity::Salary => "al_aksha_salary",
            Entity::Invoices => "al_aksha_invoices",
        }
    }

    /// Prefijo para IDs generados localmente (EMP, CLI, DUT, ORD...)
    pub fn id_prefix(self) -> String {
        prefix_from_storage_key(self.storage_key())
    }

    /// Nombre corto usado en las notificaciones de la página
    pub fn label(self) -> &'static str {
        match self {
            Entity::Employees => "Employee",
            Entity::Clients => "Client",
            Entity::GuardDuty => "Record",
            Entity::VesselOrders => "Order",
            Entity::VesselPersonnel => "Personnel",
            Entity::DayLabor => "Record",
            Entity::DayLaborWorkers => "Worker",
            Entity::Advances => "Advance",
            Entity::Salary => "Salary",
            Entity::Invoices => "Invoice",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_storage_keys_are_unique() {
        let keys: HashSet<&str> = Entity::ALL.iter().map(|e| e.storage_key()).collect();
        assert_eq!(keys.len(), Entity::ALL.len());
    }

    #[test]
    fn test_id_prefixes() {
        assert_eq!(Entity::Employees.id_prefix(), "EMP");
        assert_eq!(Entity::Clients.id_prefix(), "CLI");
        assert_eq!(Entity::GuardDuty.id_prefix(), "DUT");
        assert_eq!(Entity::Invoices.id_prefix(), "INV");
    }
}
