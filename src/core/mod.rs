// Core filtering exports
pub mod distance;
pub mod explorer;
pub mod filters;

pub use distance::{haversine_km, SearchArea};
pub use explorer::{Explorer, SearchResult, DEFAULT_RESULT_LIMIT};
pub use filters::{
    matches_activity_type, matches_club, matches_date, matches_demographics, matches_filters,
    matches_gear, matches_location, matches_metrics, matches_people,
};
