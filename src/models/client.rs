//! Modelo de Client

use serde::{Deserialize, Serialize};

use crate::models::record::{lenient_f64, lenient_opt_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub address: Option<String>,
    /// Tarifa acordada por día de servicio
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate: f64,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,
}

impl Client {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}
