//! Modelo de Advance (adelantos de sueldo)

use serde::{Deserialize, Serialize};

use crate::models::record::{lenient_f64, lenient_opt_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advance {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub reason: Option<String>,
    /// pending, approved, rejected
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub approved_by: Option<String>,
}
