// Anomaly entity
// Opaque detection result from the analytics backend; displayed and
// filtered here, never computed

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{AnomalyKind, Severity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    pub severity: Severity,
    pub entity_id: String,
    #[serde(default)]
    pub entity_name: String,
    #[serde(default)]
    pub entity_role: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_name: String,
    pub timestamp: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub recommended_actions: Option<Vec<String>>,
}

/// Per-entity anomaly payload from the by-entity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyReport {
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub time_range: Option<String>,
    #[serde(default)]
    pub detection_time: Option<String>,
}

/// Aggregate counts from the anomaly summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnomalySummary {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub by_severity: HashMap<String, u64>,
    #[serde(default)]
    pub by_type: HashMap<String, u64>,
    #[serde(default)]
    pub time_range: Option<String>,
}
