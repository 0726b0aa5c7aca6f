//! Modelo de DutyAssignment (orden de buque)
//!
//! Asignación de un vigilante a un buque madre / lighter para un cliente.
//! `dutyDays`, `revenue` y `totalAmount` se calculan en el formulario y se
//! guardan tal cual: el almacenamiento nunca los recalcula.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::record::{lenient_f64, lenient_opt_string};
use crate::utils::dates::parse_date;
use chrono::NaiveDate;

pub const UNKNOWN_CLIENT: &str = "Unknown Client";
pub const UNKNOWN_VESSEL: &str = "Unknown Vessel";

/// Turno de inicio / fin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    #[default]
    Day,
    Night,
}

impl Shift {
    pub fn parse(value: &str) -> Option<Shift> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Shift::Day),
            "night" => Some(Shift::Night),
            _ => None,
        }
    }
}

/// Turno tolerante: valores desconocidos se leen como ausentes
pub fn lenient_shift<'de, D>(deserializer: D) -> Result<Option<Shift>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(Shift::parse))
}

/// Estados conocidos; el vocabulario es abierto en la práctica
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";
    pub const CANCELLED: &str = "cancelled";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyAssignment {
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub mother_vessel: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub lighter_vessel: Option<String>,
    /// Campo antiguo, anterior a la separación madre / lighter
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub cargo_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub worker_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_shift", skip_serializing_if = "Option::is_none")]
    pub start_shift: Option<Shift>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_shift", skip_serializing_if = "Option::is_none")]
    pub end_shift: Option<Shift>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate_per_day: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub conveyance: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duty_days: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl DutyAssignment {
    /// Leer desde un registro JSON; `None` si no es un objeto
    pub fn from_record(record: &serde_json::Value) -> Option<Self> {
        if !record.is_object() {
            return None;
        }
        serde_json::from_value(record.clone()).ok()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    /// Sin fecha de fin la asignación sigue en curso
    pub fn is_ongoing(&self) -> bool {
        self.end().is_none()
    }

    pub fn client_display(&self) -> &str {
        self.client_name.as_deref().unwrap_or(UNKNOWN_CLIENT)
    }

    /// Buque madre, o el nombre antiguo si no hay buque madre
    pub fn vessel_display(&self) -> &str {
        self.mother_vessel
            .as_deref()
            .or(self.vessel_name.as_deref())
            .unwrap_or(UNKNOWN_VESSEL)
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_read_of_spreadsheet_row() {
        let record = json!({
            "id": 17,
            "clientName": "Bashundhara",
            "motherVessel": "MV Ocean Pride",
            "startDate": "2024-01-01",
            "startShift": "NIGHT",
            "endShift": "",
            "ratePerDay": "500",
            "conveyance": null,
            "dutyDays": "n/a",
            "status": "active"
        });

        let assignment = DutyAssignment::from_record(&record).unwrap();
        assert_eq!(assignment.id.as_deref(), Some("17"));
        assert_eq!(assignment.start_shift, Some(Shift::Night));
        assert_eq!(assignment.end_shift, None);
        assert_eq!(assignment.rate_per_day, 500.0);
        assert_eq!(assignment.conveyance, 0.0);
        assert_eq!(assignment.duty_days, 0.0);
        assert!(assignment.is_ongoing());
    }

    #[test]
    fn test_display_fallbacks() {
        let legacy = DutyAssignment {
            vessel_name: Some("MV Legacy".to_string()),
            ..Default::default()
        };
        assert_eq!(legacy.client_display(), UNKNOWN_CLIENT);
        assert_eq!(legacy.vessel_display(), "MV Legacy");

        let empty = DutyAssignment::default();
        assert_eq!(empty.vessel_display(), UNKNOWN_VESSEL);
    }

    #[test]
    fn test_from_record_rejects_non_objects() {
        assert!(DutyAssignment::from_record(&json!("not a record")).is_none());
    }
}
