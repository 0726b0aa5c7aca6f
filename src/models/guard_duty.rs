//! Modelo de GuardDuty (parte diario de vigilancia)

use serde::{Deserialize, Serialize};

use crate::models::record::lenient_opt_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardDuty {
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
    /// present, late o absent
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub check_in: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub notes: Option<String>,
}

impl GuardDuty {
    /// Los retrasos cuentan como presentes
    pub fn is_present(&self) -> bool {
        matches!(self.status.as_deref(), Some("present") | Some("late"))
    }

    pub fn is_absent(&self) -> bool {
        self.status.as_deref() == Some("absent")
    }
}
