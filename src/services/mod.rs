// Service exports
pub mod geolocation;
pub mod store;

pub use geolocation::{
    pinned_coordinates, pinned_label, DeniedPosition, FixedPosition, GeolocationError,
    LocationProvider,
};
pub use store::{ActivitySink, ActivityStore};
