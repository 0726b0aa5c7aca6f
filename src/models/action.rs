//! Vocabulario de acciones
//!
//! Los nombres de acción son el contrato con el endpoint remoto: el
//! almacenamiento local usa exactamente los mismos.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::models::entity::Entity;

/// Tipo de operación CRUD de una acción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

macro_rules! actions {
    ($( $variant:ident => $name:literal, $entity:expr, $op:expr; )*) => {
        /// Acción tipada del facade
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Action {
            $( $variant, )*
            DashboardData,
        }

        impl Action {
            pub const ALL: &'static [Action] = &[ $( Action::$variant, )* Action::DashboardData ];

            /// Nombre de la acción en el cable
            pub fn name(self) -> &'static str {
                match self {
                    $( Action::$variant => $name, )*
                    Action::DashboardData => "getDashboardStats",
                }
            }

            /// Entidad afectada (el dashboard agrega varias)
            pub fn entity(self) -> Option<Entity> {
                match self {
                    $( Action::$variant => Some($entity), )*
                    Action::DashboardData => None,
                }
            }

            pub fn operation(self) -> Operation {
                match self {
                    $( Action::$variant => $op, )*
                    Action::DashboardData => Operation::List,
                }
            }
        }

        impl FromStr for Action {
            type Err = UnknownAction;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Action::$variant), )*
                    "getDashboardStats" | "getDashboardData" => Ok(Action::DashboardData),
                    other => Err(UnknownAction(other.to_string())),
                }
            }
        }
    };
}

actions! {
    GetEmployees => "getEmployees", Entity::Employees, Operation::List;
    AddEmployee => "addEmployee", Entity::Employees, Operation::Create;
    UpdateEmployee => "updateEmployee", Entity::Employees, Operation::Update;
    DeleteEmployee => "deleteEmployee", Entity::Employees, Operation::Delete;

    GetClients => "getClients", Entity::Clients, Operation::List;
    AddClient => "addClient", Entity::Clients, Operation::Create;
    UpdateClient => "updateClient", Entity::Clients, Operation::Update;
    DeleteClient => "deleteClient", Entity::Clients, Operation::Delete;

    GetGuardDuty => "getGuardDuty", Entity::GuardDuty, Operation::List;
    GetAllGuardDuty => "getAllGuardDuty", Entity::GuardDuty, Operation::List;
    AddGuardDuty => "addGuardDuty", Entity::GuardDuty, Operation::Create;
    UpdateGuardDuty => "updateGuardDuty", Entity::GuardDuty, Operation::Update;
    DeleteGuardDuty => "deleteGuardDuty", Entity::GuardDuty, Operation::Delete;

    GetVesselOrders => "getVesselOrders", Entity::VesselOrders, Operation::List;
    AddVesselOrder => "addVesselOrder", Entity::VesselOrders, Operation::Create;
    UpdateVesselOrder => "updateVesselOrder", Entity::VesselOrders, Operation::Update;
    DeleteVesselOrder => "deleteVesselOrder", Entity::VesselOrders, Operation::Delete;

    GetVesselPersonnel => "getVesselPersonnel", Entity::VesselPersonnel, Operation::List;
    AddVesselPersonnel => "addVesselPersonnel", Entity::VesselPersonnel, Operation::Create;
    UpdateVesselPersonnel => "updateVesselPersonnel", Entity::VesselPersonnel, Operation::Update;
    DeleteVesselPersonnel => "deleteVesselPersonnel", Entity::VesselPersonnel, Operation::Delete;

    GetDayLabor => "getDayLabor", Entity::DayLabor, Operation::List;
    GetAllDayLabor => "getAllDayLabor", Entity::DayLabor, Operation::List;
    AddDayLabor => "addDayLabor", Entity::DayLabor, Operation::Create;
    UpdateDayLabor => "updateDayLabor", Entity::DayLabor, Operation::Update;
    DeleteDayLabor => "deleteDayLabor", Entity::DayLabor, Operation::Delete;

    GetDayLaborWorkers => "getDayLaborWorkers", Entity::DayLaborWorkers, Operation::List;
    AddDayLaborWorker => "addDayLaborWorker", Entity::DayLaborWorkers, Operation::Create;
    UpdateDayLaborWorker => "updateDayLaborWorker", Entity::DayLaborWorkers, Operation::Update;
    DeleteDayLaborWorker => "deleteDayLaborWorker", Entity::DayLaborWorkers, Operation::Delete;

    GetAdvances => "getAdvances", Entity::Advances, Operation::List;
    AddAdvance => "addAdvance", Entity::Advances, Operation::Create;
    UpdateAdvance => "updateAdvance", Entity::Advances, Operation::Update;
    DeleteAdvance => "deleteAdvance", Entity::Advances, Operation::Delete;

    GetSalary => "getSalary", Entity::Salary, Operation::List;
    GetAllSalary => "getAllSalary", Entity::Salary, Operation::List;
    ProcessSalary => "processSalary", Entity::Salary, Operation::Create;
    UpdateSalary => "updateSalary", Entity::Salary, Operation::Update;
    DeleteSalary => "deleteSalary", Entity::Salary, Operation::Delete;

    GetInvoices => "getInvoices", Entity::Invoices, Operation::List;
    AddInvoice => "addInvoice", Entity::Invoices, Operation::Create;
    UpdateInvoice => "updateInvoice", Entity::Invoices, Operation::Update;
    DeleteInvoice => "deleteInvoice", Entity::Invoices, Operation::Delete;
}

impl Action {
    /// Las lecturas van por GET con query string; el resto por POST
    pub fn is_read(self) -> bool {
        self.operation() == Operation::List
    }

    /// Acción de listado principal de una entidad
    pub fn list_for(entity: Entity) -> Action {
        match entity {
            Entity::Employees => Action::GetEmployees,
            Entity::Clients => Action::GetClients,
            Entity::GuardDuty => Action::GetGuardDuty,
            Entity::VesselOrders => Action::GetVesselOrders,
            Entity::VesselPersonnel => Action::GetVesselPersonnel,
            Entity::DayLabor => Action::GetDayLabor,
            Entity::DayLaborWorkers => Action::GetDayLaborWorkers,
            Entity::Advances => Action::GetAdvances,
            Entity::Salary => Action::GetSalary,
            Entity::Invoices => Action::GetInvoices,
        }
    }

    pub fn create_for(entity: Entity) -> Action {
        match entity {
            Entity::Employees => Action::AddEmployee,
            Entity::Clients => Action::AddClient,
            Entity::GuardDuty => Action::AddGuardDuty,
            Entity::VesselOrders => Action::AddVesselOrder,
            Entity::VesselPersonnel => Action::AddVesselPersonnel,
            Entity::DayLabor => Action::AddDayLabor,
            Entity::DayLaborWorkers => Action::AddDayLaborWorker,
            Entity::Advances => Action::AddAdvance,
            Entity::Salary => Action::ProcessSalary,
            Entity::Invoices => Action::AddInvoice,
        }
    }

    pub fn update_for(entity: Entity) -> Action {
        match entity {
            Entity::Employees => Action::UpdateEmployee,
            Entity::Clients => Action::UpdateClient,
            Entity::GuardDuty => Action::UpdateGuardDuty,
            Entity::VesselOrders => Action::UpdateVesselOrder,
            Entity::VesselPersonnel => Action::UpdateVesselPersonnel,
            Entity::DayLabor => Action::UpdateDayLabor,
            Entity::DayLaborWorkers => Action::UpdateDayLaborWorker,
            Entity::Advances => Action::UpdateAdvance,
            Entity::Salary => Action::UpdateSalary,
            Entity::Invoices => Action::UpdateInvoice,
        }
    }

    pub fn delete_for(entity: Entity) -> Action {
        match entity {
            Entity::Employees => Action::DeleteEmployee,
            Entity::Clients => Action::DeleteClient,
            Entity::GuardDuty => Action::DeleteGuardDuty,
            Entity::VesselOrders => Action::DeleteVesselOrder,
            Entity::VesselPersonnel => Action::DeleteVesselPersonnel,
            Entity::DayLabor => Action::DeleteDayLabor,
            Entity::DayLaborWorkers => Action::DeleteDayLaborWorker,
            Entity::Advances => Action::DeleteAdvance,
            Entity::Salary => Action::DeleteSalary,
            Entity::Invoices => Action::DeleteInvoice,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Nombre de acción que no pertenece al vocabulario
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), *action);
        }
    }

    #[test]
    fn test_dashboard_alias() {
        assert_eq!("getDashboardData".parse::<Action>().unwrap(), Action::DashboardData);
        assert_eq!(Action::DashboardData.name(), "getDashboardStats");
    }

    #[test]
    fn test_unknown_action_message() {
        let err = "launchRocket".parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown action: launchRocket");
    }

    #[test]
    fn test_every_entity_has_full_crud() {
        for entity in Entity::ALL {
            assert_eq!(Action::list_for(entity).operation(), Operation::List);
            assert_eq!(Action::create_for(entity).operation(), Operation::Create);
            assert_eq!(Action::update_for(entity).operation(), Operation::Update);
            assert_eq!(Action::delete_for(entity).operation(), Operation::Delete);
            assert_eq!(Action::update_for(entity).entity(), Some(entity));
        }
    }

    #[test]
    fn test_reads_and_writes() {
        assert!(Action::GetSalary.is_read());
        assert!(!Action::ProcessSalary.is_read());
        assert!(Action::DashboardData.is_read());
    }
}
