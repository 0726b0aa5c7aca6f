//! Estadísticas del dashboard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_employees: usize,
    pub active_clients: usize,
    /// Partes de vigilancia con fecha de hoy
    pub guards_today: usize,
    /// De ellos, presentes o con retraso
    pub present_guards: usize,
    pub today_day_labor: usize,
    pub vessel_orders_this_month: usize,
    pub pending_advances: usize,
    /// Importe de adelantos con fecha en el mes en curso
    pub total_advances: f64,
    /// Facturas pagadas creadas en el mes en curso
    pub monthly_revenue: f64,
}
