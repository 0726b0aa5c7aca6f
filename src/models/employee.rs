//! Modelo de Employee
//!
//! Vigilantes, supervisores y personal administrativo.

use serde::{Deserialize, Serialize};

use crate::models::record::{lenient_f64, lenient_opt_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub phone: Option<String>,
    /// Documento nacional de identidad
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub nid: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub salary: f64,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}
