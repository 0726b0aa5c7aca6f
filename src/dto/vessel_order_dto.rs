//! DTOs de órdenes de buque: cálculo del formulario e informe agrupado

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::duty_assignment::{lenient_shift, Shift};
use crate::models::record::{lenient_f64, lenient_opt_string};
use crate::services::duty_report::{DutyFilter, DutySummary};

/// Instantánea de los campos del formulario que afectan al cálculo
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_shift")]
    pub start_shift: Option<Shift>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_shift")]
    pub end_shift: Option<Shift>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate_per_day: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub conveyance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub duty_days: f64,
    pub revenue: f64,
    pub total_amount: f64,
    /// Sin fecha de fin el cálculo usa el instante actual
    pub ongoing: bool,
}

/// Parámetros de filtro del informe
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub client_id: String,
}

impl From<ReportQuery> for DutyFilter {
    fn from(query: ReportQuery) -> Self {
        DutyFilter {
            search: query.search,
            status: query.status,
            client_id: query.client_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselGroupDto {
    pub vessel: String,
    pub orders: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientGroupDto {
    pub client: String,
    pub vessels: Vec<VesselGroupDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub summary: DutySummary,
    pub groups: Vec<ClientGroupDto>,
    /// Origen de los datos: remote, localFallback o local
    pub source: String,
}
