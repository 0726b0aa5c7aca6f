//! Services module
//!
//! Este módulo contiene la lógica de negocio: el facade de acceso a datos y
//! los cálculos puros (días de servicio, importes, resúmenes).

pub mod api_facade;
pub mod billing_service;
pub mod dashboard_service;
pub mod duty_calculator;
pub mod duty_report;
pub mod page_summaries;

pub use api_facade::{ApiFacade, DataSource, Dispatch};
pub use duty_calculator::{calculate_duty_days, BillingAmounts};
pub use duty_report::{DutyFilter, DutySummary};
