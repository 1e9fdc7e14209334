use chrono::NaiveDate;

use crate::core::distance::SearchArea;
use crate::models::{Activity, Coordinates, FilterOptions, MetricRange};

/// Check an activity against every committed filter dimension.
///
/// `center` is the resolved search centre, when the filter location came from
/// a dropped pin or a geolocation lookup; without one the location filter
/// falls back to a name match.
pub fn matches_filters(
    activity: &Activity,
    filters: &FilterOptions,
    center: Option<Coordinates>,
) -> bool {
    matches_activity_type(activity, filters)
        && matches_people(activity, filters)
        && matches_location(activity, filters, center)
        && matches_date(activity, filters)
        && matches_demographics(activity, filters)
        && matches_gear(activity, filters)
        && matches_metrics(activity, filters)
        && matches_club(activity, filters)
}

/// Activity type must be one of the selected chips.
///
/// Catalog entries are title-cased ("Tennis") while records carry lowercase
/// kinds ("tennis"), so the comparison ignores case.
#[inline]
pub fn matches_activity_type(activity: &Activity, filters: &FilterOptions) -> bool {
    if filters.activity_type.is_empty() {
        return true;
    }
    filters
        .activity_type
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&activity.kind))
}

/// Capacity must fall inside the requested people range.
///
/// Capacity is free text on the record; a listing whose capacity does not
/// parse is not excluded by this dimension.
#[inline]
pub fn matches_people(activity: &Activity, filters: &FilterOptions) -> bool {
    match activity.max_participants.trim().parse::<u32>() {
        Ok(capacity) => {
            capacity >= filters.number_of_people.min && capacity <= filters.number_of_people.max
        }
        Err(_) => true,
    }
}

/// Activity date must fall inside the requested window.
///
/// Record dates are the strings the form collected; a listing whose date does
/// not parse as YYYY-MM-DD cannot satisfy a set bound.
pub fn matches_date(activity: &Activity, filters: &FilterOptions) -> bool {
    if !filters.date.is_set() {
        return true;
    }
    let Ok(date) = NaiveDate::parse_from_str(activity.date.trim(), "%Y-%m-%d") else {
        return false;
    };
    if let Some(start) = filters.date.start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = filters.date.end {
        if date > end {
            return false;
        }
    }
    true
}

/// Gender label must be one of the selected options, and the listing's age
/// window must overlap the requested one. Free-text age bounds that do not
/// parse are skipped rather than excluded.
pub fn matches_demographics(activity: &Activity, filters: &FilterOptions) -> bool {
    if !filters.gender.is_empty() && !filters.gender.contains(&activity.gender) {
        return false;
    }

    if let Ok(age_min) = activity.age_min.trim().parse::<u32>() {
        if age_min > filters.age.max {
            return false;
        }
    }
    if let Ok(age_max) = activity.age_max.trim().parse::<u32>() {
        if age_max < filters.age.min {
            return false;
        }
    }
    true
}

/// Gear requirement must be one of the selected options; listings without a
/// stated requirement are excluded once the user filters on gear.
#[inline]
pub fn matches_gear(activity: &Activity, filters: &FilterOptions) -> bool {
    if filters.gear.is_empty() {
        return true;
    }
    match activity.gear.as_deref() {
        Some(gear) => filters.gear.contains(gear),
        None => false,
    }
}

/// Pace, distance and elevation must sit inside their ranges when the listing
/// reports them; listings without a metric pass that metric.
pub fn matches_metrics(activity: &Activity, filters: &FilterOptions) -> bool {
    in_range(activity.pace, &filters.pace)
        && in_range(activity.distance_km, &filters.distance)
        && in_range(activity.elevation_m, &filters.elevation)
}

#[inline]
fn in_range(value: Option<f64>, range: &MetricRange) -> bool {
    match value {
        Some(v) => range.contains(v),
        None => true,
    }
}

/// With a resolved search centre, the listing must carry coordinates inside
/// the chosen radius. Otherwise fall back to a case-insensitive name match
/// against the listing's location fields.
pub fn matches_location(
    activity: &Activity,
    filters: &FilterOptions,
    center: Option<Coordinates>,
) -> bool {
    if filters.location.is_empty() {
        return true;
    }

    if let Some(center) = center {
        let area = SearchArea::new(center, filters.location_range.km() as f64);
        return match activity.coordinates {
            Some(point) => area.contains(point),
            None => false,
        };
    }

    let wanted = filters.location.to_lowercase();
    activity.location.to_lowercase().contains(&wanted)
        || activity.meetup_location.to_lowercase().contains(&wanted)
}

/// Club-only shows just activities hosted by a club
#[inline]
pub fn matches_club(activity: &Activity, filters: &FilterOptions) -> bool {
    !filters.club_only || activity.club.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, DateRange, PeopleRange};

    fn tennis_listing() -> Activity {
        Activity {
            kind: "tennis".to_string(),
            title: "Singles tennis".to_string(),
            date: "2025-07-01".to_string(),
            time: "18:00".to_string(),
            location: "Court A".to_string(),
            meetup_location: "Court A".to_string(),
            max_participants: "4".to_string(),
            gender: "All genders".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_match_ignores_case() {
        let mut filters = FilterOptions::default();
        filters.activity_type.clear();
        filters.toggle_activity_type("Tennis", true);

        assert!(matches_activity_type(&tennis_listing(), &filters));
    }

    #[test]
    fn test_default_types_exclude_tennis() {
        let filters = FilterOptions::default();
        assert!(!matches_activity_type(&tennis_listing(), &filters));
    }

    #[test]
    fn test_people_range() {
        let mut filters = FilterOptions::default();
        filters.number_of_people = PeopleRange { min: 2, max: 6 };
        assert!(matches_people(&tennis_listing(), &filters));

        filters.number_of_people = PeopleRange { min: 6, max: 10 };
        assert!(!matches_people(&tennis_listing(), &filters));

        // Free-text capacity is not filterable
        let mut open = tennis_listing();
        open.max_participants = "bring friends".to_string();
        assert!(matches_people(&open, &filters));
    }

    #[test]
    fn test_date_window() {
        let mut filters = FilterOptions::default();
        assert!(matches_date(&tennis_listing(), &filters));

        filters.date = DateRange {
            start: NaiveDate::from_ymd_opt(2025, 6, 1),
            end: NaiveDate::from_ymd_opt(2025, 7, 31),
        };
        assert!(matches_date(&tennis_listing(), &filters));

        filters.date.end = NaiveDate::from_ymd_opt(2025, 6, 30);
        assert!(!matches_date(&tennis_listing(), &filters));
    }

    #[test]
    fn test_unparseable_date_fails_set_bound() {
        let mut listing = tennis_listing();
        listing.date = "next Tuesday".to_string();

        let mut filters = FilterOptions::default();
        assert!(matches_date(&listing, &filters));

        filters.date.start = NaiveDate::from_ymd_opt(2025, 6, 1);
        assert!(!matches_date(&listing, &filters));
    }

    #[test]
    fn test_demographics() {
        let mut filters = FilterOptions::default();
        filters.toggle_gender("Female only", true);
        assert!(!matches_demographics(&tennis_listing(), &filters));

        filters.toggle_gender("All genders", true);
        assert!(matches_demographics(&tennis_listing(), &filters));

        // Age windows must overlap
        let mut listing = tennis_listing();
        listing.age_min = "30".to_string();
        listing.age_max = "45".to_string();
        filters.age = AgeRange { min: 18, max: 25 };
        assert!(!matches_demographics(&listing, &filters));

        filters.age = AgeRange { min: 25, max: 35 };
        assert!(matches_demographics(&listing, &filters));
    }

    #[test]
    fn test_gear_requires_stated_requirement() {
        let mut filters = FilterOptions::default();
        filters.toggle_gear("Rental available", true);

        assert!(!matches_gear(&tennis_listing(), &filters));

        let mut listing = tennis_listing();
        listing.gear = Some("Rental available".to_string());
        assert!(matches_gear(&listing, &filters));
    }

    #[test]
    fn test_metrics_pass_when_absent() {
        let mut filters = FilterOptions::default();
        filters.distance = MetricRange::new(10.0, 40.0);
        assert!(matches_metrics(&tennis_listing(), &filters));

        let mut ride = tennis_listing();
        ride.distance_km = Some(60.0);
        assert!(!matches_metrics(&ride, &filters));
        ride.distance_km = Some(25.0);
        assert!(matches_metrics(&ride, &filters));
    }

    #[test]
    fn test_location_name_fallback() {
        let mut filters = FilterOptions::default();
        filters.location = "court".to_string();
        assert!(matches_location(&tennis_listing(), &filters, None));

        filters.location = "Oxford".to_string();
        assert!(!matches_location(&tennis_listing(), &filters, None));
    }

    #[test]
    fn test_location_radius_with_center() {
        let center = Coordinates::new(51.5074, -0.1278);
        let mut filters = FilterOptions::default();
        filters.location = "Current Location (51.507, -0.128)".to_string();

        // No coordinates on the listing: excluded once a centre is known
        assert!(!matches_location(&tennis_listing(), &filters, Some(center)));

        let mut nearby = tennis_listing();
        nearby.coordinates = Some(Coordinates::new(51.52, -0.13));
        assert!(matches_location(&nearby, &filters, Some(center)));

        let mut far = tennis_listing();
        far.coordinates = Some(Coordinates::new(52.2, 0.12)); // Cambridge
        assert!(!matches_location(&far, &filters, Some(center)));
    }

    #[test]
    fn test_club_only() {
        let mut filters = FilterOptions::default();
        filters.club_only = true;
        assert!(!matches_club(&tennis_listing(), &filters));

        let mut hosted = tennis_listing();
        hosted.club = Some("Westway Climbing Centre".to_string());
        assert!(matches_club(&hosted, &filters));
    }
}
