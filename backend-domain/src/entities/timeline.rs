// Timeline entities
// Events and inferred gaps produced by the analytics backend; consumed read-only

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub event_id: String,
    pub event_type: String,
    pub timestamp: String,
    pub location: String,
    pub location_id: String,
    #[serde(default)]
    pub location_type: Option<String>,
}

/// An inferred inactivity interval between two known events for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineGap {
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
    pub last_location: String,
    pub next_location: String,
    pub last_event_type: String,
    pub next_event_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimelineStatistics {
    #[serde(default)]
    pub event_type_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub location_frequency: HashMap<String, u64>,
    #[serde(default)]
    pub most_visited_location: Option<String>,
    #[serde(default)]
    pub hourly_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub day_of_week_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub total_gaps: Option<u64>,
    #[serde(default)]
    pub total_gap_hours: Option<f64>,
    #[serde(default)]
    pub avg_events_per_day: Option<f64>,
}

/// Raw timeline payload from the with-gaps endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineData {
    pub entity_id: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    #[serde(default)]
    pub gaps: Vec<TimelineGap>,
    #[serde(default)]
    pub statistics: Option<TimelineStatistics>,
}

/// Natural-language plus structured summary from the summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub entity_id: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub statistics: Option<TimelineStatistics>,
}

/// Optional start/end bounds forwarded to timeline endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
