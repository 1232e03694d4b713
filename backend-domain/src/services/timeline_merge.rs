use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{TimelineEvent, TimelineGap};
use crate::utils::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineItemKind {
    Event,
    Gap,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TimelineItemData {
    Event(TimelineEvent),
    Gap(TimelineGap),
}

/// One row of the merged presentation list. Gaps are keyed by their
/// `start_time`, events by their `timestamp`.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineItem {
    #[serde(rename = "type")]
    pub kind: TimelineItemKind,
    pub timestamp: String,
    pub data: TimelineItemData,
}

/// Merges events and inferred gaps into one list sorted by timestamp
/// descending (most recent first). This is a display ordering only; gap
/// bounds are not validated against adjacent events. Items whose
/// timestamp does not parse sort after all parsable ones, keeping their
/// input order, so a malformed entry can never upset the comparator.
pub fn merge_timeline(events: Vec<TimelineEvent>, gaps: Vec<TimelineGap>) -> Vec<TimelineItem> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, TimelineItem)> = Vec::new();

    for event in events {
        let parsed = parse_timestamp(&event.timestamp);
        let timestamp = event.timestamp.clone();
        keyed.push((
            parsed,
            TimelineItem {
                kind: TimelineItemKind::Event,
                timestamp,
                data: TimelineItemData::Event(event),
            },
        ));
    }
    for gap in gaps {
        let parsed = parse_timestamp(&gap.start_time);
        let timestamp = gap.start_time.clone();
        keyed.push((
            parsed,
            TimelineItem {
                kind: TimelineItemKind::Gap,
                timestamp,
                data: TimelineItemData::Gap(gap),
            },
        ));
    }

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, timestamp: &str) -> TimelineEvent {
        TimelineEvent {
            event_id: id.to_string(),
            event_type: "wifi_connect".to_string(),
            timestamp: timestamp.to_string(),
            location: "Library".to_string(),
            location_id: "LIB-1".to_string(),
            location_type: None,
        }
    }

    fn gap(start: &str, end: &str) -> TimelineGap {
        TimelineGap {
            start_time: start.to_string(),
            end_time: end.to_string(),
            duration_hours: 2.0,
            last_location: "Library".to_string(),
            next_location: "Lab".to_string(),
            last_event_type: "wifi_connect".to_string(),
            next_event_type: "card_swipe".to_string(),
        }
    }

    #[test]
    fn most_recent_item_comes_first() {
        let merged = merge_timeline(
            vec![event("e1", "2025-01-02T10:00:00Z")],
            vec![gap("2025-01-01T10:00:00Z", "2025-01-01T12:00:00Z")],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, TimelineItemKind::Event);
        assert_eq!(merged[1].kind, TimelineItemKind::Gap);
    }

    #[test]
    fn gaps_and_events_interleave_by_time() {
        let merged = merge_timeline(
            vec![
                event("e1", "2025-01-01T08:00:00Z"),
                event("e2", "2025-01-01T14:00:00Z"),
            ],
            vec![gap("2025-01-01T10:00:00Z", "2025-01-01T12:00:00Z")],
        );
        let kinds: Vec<_> = merged.iter().map(|item| item.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TimelineItemKind::Event,
                TimelineItemKind::Gap,
                TimelineItemKind::Event
            ]
        );
        assert_eq!(merged[0].timestamp, "2025-01-01T14:00:00Z");
    }

    #[test]
    fn unparsable_timestamps_sink_to_the_end_in_input_order() {
        let merged = merge_timeline(
            vec![
                event("bad-1", "not-a-time"),
                event("ok", "2025-01-01T10:00:00Z"),
                event("bad-2", ""),
            ],
            Vec::new(),
        );
        assert_eq!(merged[0].timestamp, "2025-01-01T10:00:00Z");
        assert_eq!(merged[1].timestamp, "not-a-time");
        assert_eq!(merged[2].timestamp, "");
    }

    #[test]
    fn empty_inputs_produce_empty_list() {
        assert!(merge_timeline(Vec::new(), Vec::new()).is_empty());
    }
}
