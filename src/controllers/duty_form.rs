//! Formulario de asignación de buque
//!
//! Mantiene los campos de entrada y los importes calculados. Los importes se
//! recalculan en cada cambio de la ventana de servicio o de la tarifa; un
//! cambio del transporte solo mueve el total.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::models::duty_assignment::{status, DutyAssignment, Shift};
use crate::services::duty_calculator::{compute_amounts, BillingAmounts};
use crate::utils::dates::parse_date;

#[derive(Debug, Clone, PartialEq)]
pub enum FormChange {
    Client { id: String, name: String },
    Worker { id: String, name: String },
    MotherVessel(String),
    LighterVessel(String),
    StartDate(Option<String>),
    StartShift(Shift),
    EndDate(Option<String>),
    EndShift(Option<Shift>),
    RatePerDay(f64),
    Conveyance(f64),
    Status(String),
    Notes(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DutyForm {
    pub assignment: DutyAssignment,
    pub amounts: BillingAmounts,
}

impl DutyForm {
    /// Formulario de alta: hoy, turno de día, estado pendiente
    pub fn new(now: NaiveDateTime) -> Self {
        let assignment = DutyAssignment {
            start_date: Some(crate::utils::dates::format_date_iso(now.date())),
            start_shift: Some(Shift::Day),
            status: Some(status::PENDING.to_string()),
            ..Default::default()
        };
        Self::from_assignment(assignment, now)
    }

    /// Formulario de edición; las cifras se recalculan con el instante actual
    pub fn from_assignment(assignment: DutyAssignment, now: NaiveDateTime) -> Self {
        let amounts = compute_amounts(&assignment, now);
        Self { assignment, amounts }
    }

    pub fn apply(&mut self, change: FormChange, now: NaiveDateTime) {
        let a = &mut self.assignment;
        let recompute = match change {
            FormChange::Client { id, name } => {
                a.client_id = non_empty(id);
                a.client_name = non_empty(name);
                false
            }
            FormChange::Worker { id, name } => {
                a.worker_id = non_empty(id);
                a.worker_name = non_empty(name);
                false
            }
            FormChange::MotherVessel(v) => {
                a.mother_vessel = non_empty(v);
                false
            }
            FormChange::LighterVessel(v) => {
                a.lighter_vessel = non_empty(v);
                false
            }
            FormChange::Status(s) => {
                a.status = non_empty(s);
                false
            }
            FormChange::Notes(n) => {
                a.notes = non_empty(n);
                false
            }
            FormChange::Conveyance(c) => {
                a.conveyance = c;
                self.amounts = self.amounts.with_conveyance(c);
                false
            }
            FormChange::StartDate(d) => {
                a.start_date = d.and_then(non_empty);
                true
            }
            FormChange::StartShift(s) => {
                a.start_shift = Some(s);
                true
            }
            FormChange::EndDate(d) => {
                a.end_date = d.and_then(non_empty);
                true
            }
            FormChange::EndShift(s) => {
                a.end_shift = s;
                true
            }
            FormChange::RatePerDay(r) => {
                a.rate_per_day = r;
                true
            }
        };

        if recompute {
            self.recompute(now);
        }
    }

    pub fn recompute(&mut self, now: NaiveDateTime) {
        self.amounts = compute_amounts(&self.assignment, now);
    }

    pub fn is_ongoing(&self) -> bool {
        self.assignment.end_date.as_deref().and_then(parse_date).is_none()
    }

    /// Registro a enviar, con los importes tal como están en el formulario
    pub fn to_record(&self) -> Value {
        let mut record = match serde_json::to_value(&self.assignment) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        // El id y los sellos de tiempo los gestiona el almacenamiento
        for key in ["id", "createdAt", "updatedAt"] {
            record.remove(key);
        }
        let mut record = Value::Object(record);
        self.amounts.apply_to(&mut record);
        record
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
