// Heatmap entities
// Sparse count-per-time-bucket structure; absent (date, hour) pairs mean zero

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One heatmap entry exactly as the analytics backend sends it.
/// Every field is optional in transit; validation happens in [`RawHeatmapEntry::parse`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawHeatmapEntry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub hour: Option<i64>,
    #[serde(default)]
    pub count: Option<i64>,
}

/// A validated heatmap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapSample {
    pub date: NaiveDate,
    pub hour: u8,
    pub count: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeatmapParseError {
    #[error("missing date")]
    MissingDate,
    #[error("malformed date '{0}'")]
    MalformedDate(String),
    #[error("hour {0} out of range")]
    HourOutOfRange(i64),
}

impl RawHeatmapEntry {
    /// Validates a raw entry. A missing hour defaults to bucket 0 and a
    /// missing or negative count contributes 0 while keeping the bucket;
    /// a missing or malformed date rejects the entry.
    pub fn parse(&self) -> Result<HeatmapSample, HeatmapParseError> {
        let raw_date = self.date.as_deref().ok_or(HeatmapParseError::MissingDate)?;
        let date = crate::utils::parse_date(raw_date)
            .ok_or_else(|| HeatmapParseError::MalformedDate(raw_date.to_string()))?;
        let hour = self.hour.unwrap_or(0);
        if !(0..=23).contains(&hour) {
            return Err(HeatmapParseError::HourOutOfRange(hour));
        }
        let count = self.count.unwrap_or(0).max(0) as u64;
        Ok(HeatmapSample {
            date,
            hour: hour as u8,
            count,
        })
    }
}

/// Raw heatmap payload from the heatmap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapData {
    pub entity_id: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub heatmap: Vec<RawHeatmapEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_entry() {
        let raw = RawHeatmapEntry {
            date: Some("2025-01-01".to_string()),
            hour: Some(9),
            count: Some(5),
        };
        let sample = raw.parse().unwrap();
        assert_eq!(sample.hour, 9);
        assert_eq!(sample.count, 5);
    }

    #[test]
    fn missing_date_is_rejected() {
        let raw = RawHeatmapEntry {
            date: None,
            hour: Some(3),
            count: Some(1),
        };
        assert_eq!(raw.parse(), Err(HeatmapParseError::MissingDate));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let raw = RawHeatmapEntry {
            date: Some("01/02/2025".to_string()),
            hour: Some(3),
            count: Some(1),
        };
        assert!(matches!(
            raw.parse(),
            Err(HeatmapParseError::MalformedDate(_))
        ));
    }

    #[test]
    fn missing_count_keeps_bucket_with_zero() {
        let raw = RawHeatmapEntry {
            date: Some("2025-01-01".to_string()),
            hour: None,
            count: None,
        };
        let sample = raw.parse().unwrap();
        assert_eq!(sample.hour, 0);
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        let raw = RawHeatmapEntry {
            date: Some("2025-01-01".to_string()),
            hour: Some(24),
            count: Some(1),
        };
        assert_eq!(raw.parse(), Err(HeatmapParseError::HourOutOfRange(24)));
    }
}
