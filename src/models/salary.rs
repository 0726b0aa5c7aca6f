//! Modelo de Salary (nómina mensual)

use serde::{Deserialize, Serialize};

use crate::models::record::{lenient_f64, lenient_opt_i64, lenient_opt_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub month: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub days_worked: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gross_salary: f64,
    /// Adelantos descontados en este mes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub advances: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub net_pay: f64,
    /// pending o paid
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub paid_date: Option<String>,
}
