//! Explore Core - filtering and activity-creation core for the Explore app
//!
//! This library implements the client-side core behind the Explore screens:
//! the structured filter model the browse screen commits on apply, the
//! activity draft model the creation forms submit, and the in-memory
//! collection they feed. Rendering, navigation and networking live in the
//! host shell and stay out of this crate.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use crate::core::{distance::haversine_km, Explorer, SearchResult};
pub use models::{
    Activity, ActivityDraft, Coordinates, DraftError, FilterOptions, FilterUpdate, TennisDetails,
};
pub use services::{ActivitySink, ActivityStore, GeolocationError, LocationProvider};
pub use session::{CreateSession, FilterConsumer, FilterSession};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let filters = FilterOptions::default();
        assert_eq!(filters.active_count(), 0);
        assert!(ActivityStore::new().is_empty());
    }
}
