//! Cálculo de días de servicio y facturación de asignaciones
//!
//! Los días se cuentan en medios días: el turno de noche de inicio resta
//! medio día y, si hay fecha de fin, el turno de fin ajusta medio día más o
//! menos. Una asignación con fecha de inicio nunca baja de 0.5 días.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::models::duty_assignment::{DutyAssignment, Shift};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
pub const MIN_DUTY_DAYS: f64 = 0.5;

/// Días de servicio entre inicio y fin (o `now` si la asignación sigue en curso)
pub fn calculate_duty_days(
    start_date: Option<NaiveDate>,
    start_shift: Shift,
    end_date: Option<NaiveDate>,
    end_shift: Option<Shift>,
    now: NaiveDateTime,
) -> f64 {
    let Some(start_date) = start_date else {
        return 0.0;
    };

    let start = start_date.and_time(chrono::NaiveTime::MIN);
    let end = match end_date {
        Some(date) => date.and_time(chrono::NaiveTime::MIN),
        None => now,
    };

    let elapsed = (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let mut days = elapsed.ceil();

    if start_shift == Shift::Night {
        days -= 0.5;
    }

    if end_date.is_some() {
        match end_shift.unwrap_or_default() {
            Shift::Day => days -= 0.5,
            Shift::Night => days += 0.5,
        }
    }

    days.max(MIN_DUTY_DAYS)
}

/// Importes derivados de una asignación
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAmounts {
    pub duty_days: f64,
    pub revenue: f64,
    pub total_amount: f64,
}

impl BillingAmounts {
    pub fn new(duty_days: f64, rate_per_day: f64, conveyance: f64) -> Self {
        let revenue = duty_days * rate_per_day;
        Self {
            duty_days,
            revenue,
            total_amount: revenue + conveyance,
        }
    }

    /// Cambiar solo el transporte: los ingresos no se tocan
    pub fn with_conveyance(self, conveyance: f64) -> Self {
        Self {
            total_amount: self.revenue + conveyance,
            ..self
        }
    }

    /// Escribir los importes en un registro
    pub fn apply_to(&self, record: &mut Value) {
        if let Some(obj) = record.as_object_mut() {
            obj.insert("dutyDays".to_string(), Value::from(self.duty_days));
            obj.insert("revenue".to_string(), Value::from(self.revenue));
            obj.insert("totalAmount".to_string(), Value::from(self.total_amount));
        }
    }
}

/// Calcular los importes de una asignación a partir de sus campos de entrada
pub fn compute_amounts(assignment: &DutyAssignment, now: NaiveDateTime) -> BillingAmounts {
    let duty_days = calculate_duty_days(
        assignment.start(),
        assignment.start_shift.unwrap_or_default(),
        assignment.end(),
        assignment.end_shift,
        now,
    );
    BillingAmounts::new(duty_days, assignment.rate_per_day, assignment.conveyance)
}

/// Copia de un registro con las cifras en vivo si la asignación sigue en curso.
///
/// Solo para mostrar o editar: el resultado no se persiste desde aquí.
pub fn with_live_figures(record: &Value, now: NaiveDateTime) -> Value {
    let mut copy = record.clone();
    if let Some(assignment) = DutyAssignment::from_record(record) {
        if assignment.is_ongoing() && assignment.start().is_some() {
            compute_amounts(&assignment, now).apply_to(&mut copy);
        }
    }
    copy
}
