// Location prediction shapes from the analytics backend

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PredictionExplanation {
    #[serde(default)]
    pub confidence_level: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub key_factors: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPrediction {
    pub location: String,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: PredictionExplanation,
}

/// Ranked location predictions for one entity at a target time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionData {
    pub entity_id: String,
    #[serde(default)]
    pub target_time: Option<String>,
    #[serde(default)]
    pub predictions: Vec<LocationPrediction>,
    #[serde(default)]
    pub method: Option<String>,
}
