//! # Visit aggregation for the dashboard
//!
//! Pure derivations over the user's full visit snapshot. The dashboard
//! re-runs these on every snapshot it receives; there is no incremental
//! update path. Bucketing matches timestamps by ISO 8601 prefix, so a
//! visit created at `2024-06-01T10:30:00Z` lands in the `2024-06-01`
//! bucket and in the `2024-06` month subset.

use chrono::{Datelike, NaiveDate};

use crate::models::VisitInfo;

/// How many entries the recent-activity feed shows.
const RECENT_LIMIT: usize = 3;

/// One day of the current month's visit series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub count: usize,
}

/// Per-day visit counts for every calendar day of `today`'s month,
/// first-to-last inclusive, in chronological order. Days without visits
/// are present with count 0.
pub fn daily_series(visits: &[VisitInfo], today: NaiveDate) -> Vec<DailyCount> {
    let mut out = Vec::with_capacity(31);
    for day in 1..=days_in_month(today) {
        // Every day of the month is representable, so this never skips.
        let Some(date) = NaiveDate::from_ymd_opt(today.year(), today.month(), day) else {
            continue;
        };
        let key = date.format("%Y-%m-%d").to_string();
        let count = visits
            .iter()
            .filter(|v| created_on(v, &key))
            .count();
        out.push(DailyCount { date: key, count });
    }
    out
}

/// Visits created today, for the dashboard's detail listing.
pub fn visits_today(visits: &[VisitInfo], today: NaiveDate) -> Vec<VisitInfo> {
    let key = today.format("%Y-%m-%d").to_string();
    visits
        .iter()
        .filter(|v| created_on(v, &key))
        .cloned()
        .collect()
}

/// Visits created in today's calendar month, for the map and the monthly
/// count.
pub fn visits_in_month(visits: &[VisitInfo], today: NaiveDate) -> Vec<VisitInfo> {
    let key = today.format("%Y-%m").to_string();
    visits
        .iter()
        .filter(|v| created_on(v, &key))
        .cloned()
        .collect()
}

/// The most recent visits, newest first, at most three. A missing
/// `created_at` sorts as epoch (oldest).
pub fn recent_activity(visits: &[VisitInfo]) -> Vec<VisitInfo> {
    let mut sorted: Vec<VisitInfo> = visits.to_vec();
    sorted.sort_by(|a, b| {
        let a = a.created_at.as_deref().unwrap_or("");
        let b = b.created_at.as_deref().unwrap_or("");
        b.cmp(a)
    });
    sorted.truncate(RECENT_LIMIT);
    sorted
}

fn created_on(visit: &VisitInfo, prefix: &str) -> bool {
    visit
        .created_at
        .as_deref()
        .is_some_and(|ts| ts.starts_with(prefix))
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (next_y, next_m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of next month always exists.
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitPurpose;

    fn visit(id: &str, created_at: Option<&str>) -> VisitInfo {
        VisitInfo {
            id: id.to_string(),
            client_id: "c1".to_string(),
            client_name: "Bodega San Martín".to_string(),
            purpose: VisitPurpose::Venta,
            notes: None,
            latitude: -12.046374,
            longitude: -77.042793,
            date: created_at
                .map(|ts| ts[..10].to_string())
                .unwrap_or_default(),
            time: "10:30".to_string(),
            user_id: "u1".to_string(),
            created_at: created_at.map(str::to_string),
        }
    }

    fn june_sample() -> Vec<VisitInfo> {
        vec![
            visit("v1", Some("2024-06-01T09:00:00Z")),
            visit("v2", Some("2024-06-01T16:45:00Z")),
            visit("v3", Some("2024-06-03T11:20:00Z")),
            visit("v4", Some("2024-06-15T08:05:00Z")),
            visit("v5", Some("2024-07-01T10:00:00Z")),
        ]
    }

    fn june_30() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn daily_series_covers_whole_month() {
        let series = daily_series(&june_sample(), june_30());
        assert_eq!(series.len(), 30);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(series[0], DailyCount { date: "2024-06-01".into(), count: 2 });
        assert_eq!(series[2].count, 1);
        assert_eq!(series[14].count, 1);
        let zero_days = series.iter().filter(|d| d.count == 0).count();
        assert_eq!(zero_days, 27);
    }

    #[test]
    fn daily_series_counts_sum_to_month_total() {
        let visits = june_sample();
        let series = daily_series(&visits, june_30());
        let sum: usize = series.iter().map(|d| d.count).sum();
        assert_eq!(sum, visits_in_month(&visits, june_30()).len());
        assert_eq!(sum, 4);
    }

    #[test]
    fn month_subset_excludes_other_months() {
        let month = visits_in_month(&june_sample(), june_30());
        assert_eq!(month.len(), 4);
        assert!(month.iter().all(|v| v.id != "v5"));
    }

    #[test]
    fn today_subset_matches_date_prefix() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let todays = visits_today(&june_sample(), today);
        assert_eq!(todays.len(), 2);
    }

    #[test]
    fn recent_activity_is_newest_first_and_capped() {
        let recent = recent_activity(&june_sample());
        assert_eq!(recent.len(), 3);
        let ids: Vec<&str> = recent.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v5", "v4", "v3"]);
    }

    #[test]
    fn missing_timestamp_sorts_as_oldest() {
        let mut visits = june_sample();
        visits.push(visit("v6", None));
        let recent = recent_activity(&visits);
        assert!(recent.iter().all(|v| v.id != "v6"));

        let only = vec![visit("v7", None), visit("v8", Some("2024-06-02T08:00:00Z"))];
        let recent = recent_activity(&only);
        assert_eq!(recent.first().map(|v| v.id.as_str()), Some("v8"));
    }

    #[test]
    fn empty_snapshot_yields_zeroed_series() {
        let series = daily_series(&[], NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(series.len(), 29); // 2024 is a leap year
        assert!(series.iter().all(|d| d.count == 0));
        assert!(recent_activity(&[]).is_empty());
    }

    #[test]
    fn december_rolls_over_the_year() {
        let dec = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        assert_eq!(daily_series(&[], dec).len(), 31);
    }
}
