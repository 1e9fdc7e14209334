use chrono::NaiveDate;
use tracing::debug;

use crate::config::SearchSettings;
use crate::core::distance::haversine_km;
use crate::core::filters::matches_filters;
use crate::models::{Activity, Coordinates, FilterOptions};

/// Result of running committed filters over a collection
#[derive(Debug)]
pub struct SearchResult {
    pub activities: Vec<Activity>,
    pub total_candidates: usize,
}

/// Runs a committed `FilterOptions` over an activity collection.
///
/// The browse screen hands the collection and the filters it received on
/// apply; results come back soonest-first, nearest-first within a day when a
/// search centre is known, capped at the configured limit.
#[derive(Debug, Clone)]
pub struct Explorer {
    limit: usize,
}

/// Cap used when the caller does not configure one
pub const DEFAULT_RESULT_LIMIT: usize = 50;

impl Explorer {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn with_default_limit() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT)
    }

    /// Explorer capped per the configured search limits
    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(settings.default_limit.min(settings.max_limit))
    }

    /// Filter, order and cap the collection.
    pub fn search(
        &self,
        filters: &FilterOptions,
        center: Option<Coordinates>,
        activities: &[Activity],
    ) -> SearchResult {
        let total_candidates = activities.len();

        let mut results: Vec<Activity> = activities
            .iter()
            .filter(|activity| matches_filters(activity, filters, center))
            .cloned()
            .collect();

        // Soonest first, undated listings last; ties broken by distance to
        // the search centre when one is known.
        results.sort_by(|a, b| {
            let da = parse_listing_date(&a.date);
            let db = parse_listing_date(&b.date);
            match (da, db) {
                (Some(da), Some(db)) => da.cmp(&db).then_with(|| cmp_distance(a, b, center)),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => cmp_distance(a, b, center),
            }
        });

        results.truncate(self.limit);

        debug!(
            matched = results.len(),
            total = total_candidates,
            "filter search complete"
        );

        SearchResult {
            activities: results,
            total_candidates,
        }
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

fn parse_listing_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

fn cmp_distance(a: &Activity, b: &Activity, center: Option<Coordinates>) -> std::cmp::Ordering {
    let Some(center) = center else {
        return std::cmp::Ordering::Equal;
    };
    let da = a.coordinates.map(|p| haversine_km(center, p));
    let db = b.coordinates.map(|p| haversine_km(center, p));
    match (da, db) {
        (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}
