// Entity (resolved identity) shapes
// Fusion itself happens in the analytics backend; these records are read-only

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One observed credential (card, face, device, student/staff id) with
/// provenance and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub first_seen: Option<String>,
    #[serde(default)]
    pub last_seen: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: String,
    #[serde(default)]
    pub identifiers: Vec<EntityIdentifier>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub linked_entity_ids: Vec<String>,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Envelope returned by `GET /api/v1/entities/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityEnvelope {
    pub entity: Entity,
    #[serde(default)]
    pub all_identifiers: Vec<EntityIdentifier>,
    #[serde(default)]
    pub linked_entities: Vec<Entity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySearchRequest {
    pub identifier_type: String,
    pub identifier_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySearchResponse {
    #[serde(default)]
    pub entity: Option<Entity>,
    #[serde(default)]
    pub linked_entities: Vec<Entity>,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub entity: Entity,
    pub similarity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FuzzySearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub matches: Vec<FuzzyMatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub department: Option<String>,
    pub entity_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedEntityConfidence {
    pub entity_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub shared_identifiers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FusionSummary {
    #[serde(default)]
    pub total_sources: u32,
    #[serde(default)]
    pub total_identifiers: u32,
    #[serde(default)]
    pub identifier_types: Vec<String>,
    #[serde(default)]
    pub most_reliable_source: Option<String>,
}

/// Fusion confidence plus identifier provenance for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionReport {
    pub entity_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overall_confidence: f64,
    #[serde(default)]
    pub identifiers_by_source: HashMap<String, Vec<EntityIdentifier>>,
    #[serde(default)]
    pub linked_entities: Vec<LinkedEntityConfidence>,
    #[serde(default)]
    pub fusion_summary: FusionSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_round_trips_through_json() {
        // Search results go straight back out as a JSON response body.
        let decoded: EntitySearchResponse =
            serde_json::from_str(r#"{"entity": null, "confidence": 0.9}"#).unwrap();
        let body = serde_json::to_string(&decoded).unwrap();
        assert!(body.contains("\"confidence\":0.9"));
    }
}
