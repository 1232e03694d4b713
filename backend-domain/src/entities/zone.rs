// Zone occupancy and forecast shapes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: String,
    pub name: String,
    #[serde(default)]
    pub zone_type: String,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneOccupancy {
    pub zone_id: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub current_occupancy: u64,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub occupancy_rate: f64,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneForecast {
    pub target_datetime: String,
    pub predicted_occupancy: f64,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampusOccupancyTotals {
    #[serde(default)]
    pub total_zones: u64,
    #[serde(default)]
    pub total_capacity: u64,
    #[serde(default)]
    pub total_occupancy: u64,
    #[serde(default)]
    pub overall_occupancy_rate: f64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneHeadcount {
    pub zone_id: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub current_occupancy: u64,
}

/// Campus-wide occupancy rollup from the campus summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampusSummary {
    #[serde(default)]
    pub summary: CampusOccupancyTotals,
    #[serde(default)]
    pub high_traffic_zones: Vec<ZoneHeadcount>,
    #[serde(default)]
    pub underutilized_zones: Vec<ZoneHeadcount>,
    #[serde(default)]
    pub last_updated: Option<String>,
}
