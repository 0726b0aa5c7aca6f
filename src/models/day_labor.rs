//! Modelo de DayLabor (jornales)

use serde::{Deserialize, Serialize};

use crate::models::record::{lenient_f64, lenient_opt_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLabor {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hours: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub notes: Option<String>,
}
