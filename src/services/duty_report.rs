//! Informe de asignaciones: filtro, agrupación y resumen

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::models::duty_assignment::{status, DutyAssignment};
use crate::models::record::{field_key, field_number, field_str};

/// Campos en los que busca el texto libre
const SEARCH_FIELDS: [&str; 5] = [
    "motherVessel",
    "lighterVessel",
    "vesselName",
    "workerName",
    "clientName",
];

/// Filtro del informe. Un campo vacío no filtra.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyFilter {
    pub search: String,
    pub status: String,
    pub client_id: String,
}

impl DutyFilter {
    pub fn matches(&self, record: &Value) -> bool {
        self.matches_search(record) && self.matches_status(record) && self.matches_client(record)
    }

    fn matches_search(&self, record: &Value) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        SEARCH_FIELDS.iter().any(|field| {
            field_str(record, field).is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }

    fn matches_status(&self, record: &Value) -> bool {
        self.status.is_empty() || field_key(record, "status").as_deref() == Some(self.status.as_str())
    }

    fn matches_client(&self, record: &Value) -> bool {
        self.client_id.is_empty()
            || field_key(record, "clientId").as_deref() == Some(self.client_id.as_str())
    }
}

/// Filtrar sin modificar la lista original
pub fn filter(records: &[Value], filter: &DutyFilter) -> Vec<Value> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselGroup {
    pub vessel: String,
    pub orders: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientGroup {
    pub client: String,
    pub vessels: Vec<VesselGroup>,
}

fn display_names(record: &Value) -> (String, String) {
    let assignment = DutyAssignment::from_record(record).unwrap_or_default();
    (
        assignment.client_display().to_string(),
        assignment.vessel_display().to_string(),
    )
}

/// Agrupar por cliente y luego por buque madre, en orden de aparición
pub fn group_by_client_and_vessel(records: &[Value]) -> Vec<ClientGroup> {
    let mut groups: Vec<ClientGroup> = Vec::new();

    for record in records {
        let (client, vessel) = display_names(record);

        let client_index = match groups.iter().position(|g| g.client == client) {
            Some(index) => index,
            None => {
                groups.push(ClientGroup {
                    client,
                    vessels: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let vessels = &mut groups[client_index].vessels;

        match vessels.iter_mut().find(|v| v.vessel == vessel) {
            Some(group) => group.orders.push(record.clone()),
            None => vessels.push(VesselGroup {
                vessel,
                orders: vec![record.clone()],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutySummary {
    pub active_count: usize,
    pub total_duty_days: f64,
    pub total_amount: f64,
    /// Clientes distintos; los registros sin cliente no cuentan
    pub client_count: usize,
}

pub fn summarize(records: &[Value]) -> DutySummary {
    let clients: HashSet<String> = records
        .iter()
        .filter_map(|r| field_key(r, "clientId"))
        .filter(|id| !id.is_empty())
        .collect();

    DutySummary {
        active_count: records
            .iter()
            .filter(|r| field_str(r, "status") == Some(status::ACTIVE))
            .count(),
        total_duty_days: records.iter().map(|r| field_number(r, "dutyDays")).sum(),
        total_amount: records.iter().map(|r| field_number(r, "totalAmount")).sum(),
        client_count: clients.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let records = vec![
            json!({ "id": "1", "clientName": "A", "motherVessel": "V1" }),
            json!({ "id": "2", "clientName": "B", "motherVessel": "V2" }),
            json!({ "id": "3", "clientName": "A", "motherVessel": "V1" }),
        ];
        let groups = group_by_client_and_vessel(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].client, "A");
        assert_eq!(groups[1].client, "B");
        assert_eq!(groups[0].vessels.len(), 1);
        let ids: Vec<&str> = groups[0].vessels[0]
            .orders
            .iter()
            .map(|o| o["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_grouping_fallback_names() {
        let records = vec![
            json!({ "vesselName": "MV Legacy" }),
            json!({ "clientName": "", "motherVessel": "" }),
        ];
        let groups = group_by_client_and_vessel(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].client, "Unknown Client");
        let vessels: Vec<&str> = groups[0].vessels.iter().map(|v| v.vessel.as_str()).collect();
        assert_eq!(vessels, vec!["MV Legacy", "Unknown Vessel"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_any_field() {
        let records = vec![
            json!({ "workerName": "ABC Doe" }),
            json!({ "lighterVessel": "Lighter abc-2" }),
            json!({ "clientName": "Other" }),
        ];
        let filtered = filter(
            &records,
            &DutyFilter {
                search: "abc".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = vec![json!({ "status": "active" }), json!({ "status": "pending" }), json!({})];
        assert_eq!(filter(&records, &DutyFilter::default()).len(), 3);
    }

    #[test]
    fn test_dimensions_are_anded() {
        let records = vec![
            json!({ "status": "active", "clientId": "C1", "motherVessel": "Ocean" }),
            json!({ "status": "active", "clientId": "C2", "motherVessel": "Ocean" }),
            json!({ "status": "pending", "clientId": "C1", "motherVessel": "Ocean" }),
        ];
        let filtered = filter(
            &records,
            &DutyFilter {
                search: "ocean".to_string(),
                status: "active".to_string(),
                client_id: "C1".to_string(),
            },
        );
        assert_eq!(filtered, vec![records[0].clone()]);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            json!({ "status": "active", "clientId": "C1", "dutyDays": 2.5, "totalAmount": 1000 }),
            json!({ "status": "active", "clientId": "C1", "dutyDays": "1", "totalAmount": "n/a" }),
            json!({ "status": "completed", "clientId": "C2", "totalAmount": 500 }),
            json!({ "status": "pending" }),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.total_duty_days, 3.5);
        assert_eq!(summary.total_amount, 1500.0);
        assert_eq!(summary.client_count, 2);
    }
}
