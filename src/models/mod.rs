// Model exports
pub mod domain;
pub mod draft;
pub mod filters;

pub use domain::{Activity, Coordinates, DurationUnit, Visibility};
pub use draft::{ActivityDraft, DraftError, TennisDetails};
pub use filters::{
    coerce_count, coerce_metric, AgeRange, DateRange, FilterOptions, FilterUpdate, LocationRange,
    MetricRange, PeopleRange, DEFAULT_ACTIVITY_TYPES,
};
