use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::entities::{HeatmapSample, RawHeatmapEntry};
use crate::utils::format_month_day;
use crate::value_objects::ViewMode;

/// Weekly view keeps at most this many buckets (the most recent ones).
const WEEKLY_BUCKET_CAP: usize = 10;

/// One chart bar. `key` is the raw chronological sort key; `label` is the
/// display string and is never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityBucket {
    pub label: String,
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityStats {
    pub total_count: u64,
    pub unique_days: u64,
    pub avg_per_day: f64,
    pub peak_hour: u8,
    pub most_active_day: String,
}

impl Default for ActivityStats {
    fn default() -> Self {
        Self {
            total_count: 0,
            unique_days: 0,
            avg_per_day: 0.0,
            peak_hour: 0,
            most_active_day: "N/A".to_string(),
        }
    }
}

/// Validates raw heatmap entries, dropping (and counting) the malformed
/// ones instead of failing the aggregation.
pub fn parse_samples(entries: &[RawHeatmapEntry]) -> (Vec<HeatmapSample>, usize) {
    let mut samples = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for entry in entries {
        match entry.parse() {
            Ok(sample) => samples.push(sample),
            Err(err) => {
                skipped += 1;
                debug!("skipping heatmap entry: {}", err);
            }
        }
    }
    (samples, skipped)
}

/// Folds validated samples into the buckets for one view mode, ascending
/// by the bucket's chronological key.
pub fn aggregate_activity(samples: &[HeatmapSample], mode: ViewMode) -> Vec<ActivityBucket> {
    match mode {
        ViewMode::Daily => daily_buckets(samples),
        ViewMode::Hourly => hourly_buckets(samples),
        ViewMode::Weekly => weekly_buckets(samples),
    }
}

fn daily_buckets(samples: &[HeatmapSample]) -> Vec<ActivityBucket> {
    let mut totals = sum_by_date(samples);
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
        .into_iter()
        .map(|(date, count)| ActivityBucket {
            label: format_month_day(date),
            key: date.to_string(),
            count,
        })
        .collect()
}

fn hourly_buckets(samples: &[HeatmapSample]) -> Vec<ActivityBucket> {
    let mut totals = sum_by_hour(samples);
    totals.sort_by_key(|(hour, _)| *hour);
    totals
        .into_iter()
        .map(|(hour, count)| ActivityBucket {
            label: format!("{:02}:00", hour),
            key: format!("{:02}", hour),
            count,
        })
        .collect()
}

// Not real ISO-week bucketing: each unique date is its own bucket,
// capped to the most recent WEEKLY_BUCKET_CAP buckets. Inherited
// behavior, kept as documented.
fn weekly_buckets(samples: &[HeatmapSample]) -> Vec<ActivityBucket> {
    let mut totals = sum_by_date(samples);
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    let start = totals.len().saturating_sub(WEEKLY_BUCKET_CAP);
    totals
        .into_iter()
        .skip(start)
        .map(|(date, count)| ActivityBucket {
            label: format_month_day(date),
            key: date.to_string(),
            count,
        })
        .collect()
}

/// Scalar statistics over the same samples. Empty input yields the
/// zero-valued defaults (`most_active_day` falls back to "N/A").
pub fn activity_statistics(samples: &[HeatmapSample]) -> ActivityStats {
    if samples.is_empty() {
        return ActivityStats::default();
    }

    let total_count: u64 = samples.iter().map(|s| s.count).sum();
    let unique_days = sum_by_date(samples).len() as u64;
    let avg_per_day = if unique_days > 0 {
        total_count as f64 / unique_days as f64
    } else {
        0.0
    };

    // Ties break toward the bucket seen first in input order.
    let peak_hour = first_seen_max(samples.iter().map(|s| (s.hour, s.count)))
        .map(|(hour, _)| hour)
        .unwrap_or(0);
    let most_active_day = first_seen_max(samples.iter().map(|s| (s.date, s.count)))
        .map(|(date, _)| format_month_day(date))
        .unwrap_or_else(|| "N/A".to_string());

    ActivityStats {
        total_count,
        unique_days,
        avg_per_day,
        peak_hour,
        most_active_day,
    }
}

fn sum_by_date(samples: &[HeatmapSample]) -> Vec<(chrono::NaiveDate, u64)> {
    fold_first_seen(samples.iter().map(|s| (s.date, s.count)))
}

fn sum_by_hour(samples: &[HeatmapSample]) -> Vec<(u8, u64)> {
    fold_first_seen(samples.iter().map(|s| (s.hour, s.count)))
}

/// Sums counts per key, preserving first-seen key order so downstream
/// tie-breaks are deterministic for a fixed input order.
fn fold_first_seen<K>(pairs: impl Iterator<Item = (K, u64)>) -> Vec<(K, u64)>
where
    K: Copy + Eq + std::hash::Hash,
{
    let mut order: Vec<K> = Vec::new();
    let mut totals: HashMap<K, u64> = HashMap::new();
    for (key, count) in pairs {
        match totals.get_mut(&key) {
            Some(total) => *total += count,
            None => {
                order.push(key);
                totals.insert(key, count);
            }
        }
    }
    order
        .into_iter()
        .map(|key| {
            let total = totals.get(&key).copied().unwrap_or(0);
            (key, total)
        })
        .collect()
}

/// Largest total wins; ties keep the earlier key. A key must beat zero to
/// win at all, so all-zero input selects nothing and the stats fall back
/// to their defaults.
fn first_seen_max<K: Copy + Eq + std::hash::Hash>(
    pairs: impl Iterator<Item = (K, u64)>,
) -> Option<(K, u64)> {
    let mut best: Option<(K, u64)> = None;
    for (key, total) in fold_first_seen(pairs) {
        if total > best.map_or(0, |(_, best_total)| best_total) {
            best = Some((key, total));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, hour: i64, count: i64) -> RawHeatmapEntry {
        RawHeatmapEntry {
            date: Some(date.to_string()),
            hour: Some(hour),
            count: Some(count),
        }
    }

    fn samples(entries: &[RawHeatmapEntry]) -> Vec<HeatmapSample> {
        parse_samples(entries).0
    }

    #[test]
    fn hourly_sums_per_hour_across_dates() {
        let input = samples(&[raw("2025-01-01", 9, 5), raw("2025-01-01", 9, 3)]);
        let buckets = aggregate_activity(&input, ViewMode::Hourly);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].key, "09");
        assert_eq!(buckets[0].label, "09:00");
        assert_eq!(buckets[0].count, 8);
    }

    #[test]
    fn daily_sorts_by_raw_date_key_not_label() {
        // "Feb 01" < "Jan 02" lexicographically; chronological order must win.
        let input = samples(&[raw("2025-02-01", 10, 1), raw("2025-01-02", 10, 1)]);
        let buckets = aggregate_activity(&input, ViewMode::Daily);
        assert_eq!(buckets[0].key, "2025-01-02");
        assert_eq!(buckets[0].label, "Jan 02");
        assert_eq!(buckets[1].key, "2025-02-01");
    }

    #[test]
    fn daily_and_hourly_totals_match_total_count() {
        let input = samples(&[
            raw("2025-01-01", 9, 5),
            raw("2025-01-01", 14, 2),
            raw("2025-01-02", 9, 4),
            raw("2025-01-03", 0, 0),
        ]);
        let stats = activity_statistics(&input);
        let daily: u64 = aggregate_activity(&input, ViewMode::Daily)
            .iter()
            .map(|b| b.count)
            .sum();
        let hourly: u64 = aggregate_activity(&input, ViewMode::Hourly)
            .iter()
            .map(|b| b.count)
            .sum();
        assert_eq!(daily, stats.total_count);
        assert_eq!(hourly, stats.total_count);
        assert_eq!(stats.total_count, 11);
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let entries = vec![
            raw("2025-01-01", 9, 5),
            RawHeatmapEntry {
                date: Some("garbage".to_string()),
                hour: Some(1),
                count: Some(100),
            },
            RawHeatmapEntry::default(),
        ];
        let (parsed, skipped) = parse_samples(&entries);
        assert_eq!(parsed.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(activity_statistics(&parsed).total_count, 5);
    }

    #[test]
    fn zero_count_bucket_is_retained() {
        let input = samples(&[raw("2025-01-05", 7, 0)]);
        let buckets = aggregate_activity(&input, ViewMode::Daily);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 0);
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        let stats = activity_statistics(&[]);
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.unique_days, 0);
        assert_eq!(stats.avg_per_day, 0.0);
        assert_eq!(stats.peak_hour, 0);
        assert_eq!(stats.most_active_day, "N/A");
    }

    #[test]
    fn avg_per_day_never_divides_by_zero() {
        // All entries malformed: parses to nothing, stats stay zeroed.
        let (parsed, _) = parse_samples(&[RawHeatmapEntry::default()]);
        let stats = activity_statistics(&parsed);
        assert_eq!(stats.unique_days, 0);
        assert_eq!(stats.avg_per_day, 0.0);
    }

    #[test]
    fn peak_hour_tie_breaks_to_first_seen() {
        let input = samples(&[
            raw("2025-01-01", 14, 4),
            raw("2025-01-01", 9, 4),
            raw("2025-01-02", 9, 0),
        ]);
        let stats = activity_statistics(&input);
        assert_eq!(stats.peak_hour, 14);
    }

    #[test]
    fn all_zero_counts_fall_back_to_defaults() {
        let input = samples(&[raw("2025-01-01", 9, 0), raw("2025-01-02", 14, 0)]);
        let stats = activity_statistics(&input);
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.unique_days, 2);
        assert_eq!(stats.peak_hour, 0);
        assert_eq!(stats.most_active_day, "N/A");
    }

    #[test]
    fn most_active_day_tie_breaks_to_first_seen() {
        let input = samples(&[raw("2025-01-03", 8, 6), raw("2025-01-01", 8, 6)]);
        let stats = activity_statistics(&input);
        assert_eq!(stats.most_active_day, "Jan 03");
    }

    #[test]
    fn weekly_caps_to_most_recent_ten_dates() {
        let entries: Vec<RawHeatmapEntry> = (1..=12)
            .map(|day| raw(&format!("2025-01-{:02}", day), 10, 1))
            .collect();
        let buckets = aggregate_activity(&samples(&entries), ViewMode::Weekly);
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].key, "2025-01-03");
        assert_eq!(buckets[9].key, "2025-01-12");
    }

    #[test]
    fn stats_average_over_unique_days() {
        let input = samples(&[raw("2025-01-01", 9, 6), raw("2025-01-02", 10, 2)]);
        let stats = activity_statistics(&input);
        assert_eq!(stats.unique_days, 2);
        assert!((stats.avg_per_day - 4.0).abs() < f64::EPSILON);
    }
}
