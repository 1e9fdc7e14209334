use std::future::Future;

use thiserror::Error;

use crate::models::Coordinates;

/// Errors the device position lookup can surface.
///
/// Both are recovered at the interaction boundary: the user sees a message
/// and the filter state is left untouched. There is no retry or timeout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported on this device")]
    Unsupported,

    #[error("unable to get your current location: {0}")]
    Unavailable(String),
}

/// Device positioning capability.
///
/// The real implementation lives in the host shell (browser/mobile); the
/// core only depends on this seam. Fire-and-forget with two outcomes.
pub trait LocationProvider {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// Provider pinned to a fixed position, for demos and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

impl LocationProvider for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// Provider that always fails, mirroring a denied permission prompt
#[derive(Debug, Clone)]
pub struct DeniedPosition;

impl LocationProvider for DeniedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unavailable(
            "location services are disabled".to_string(),
        ))
    }
}

/// Location text written into the filter after a successful lookup
pub fn pinned_label(position: Coordinates) -> String {
    format!(
        "Current Location ({:.3}, {:.3})",
        position.lat, position.lng
    )
}

/// Recover the coordinates from a pinned location label, if the filter's
/// location text came from [`pinned_label`]
pub fn pinned_coordinates(location: &str) -> Option<Coordinates> {
    let inner = location
        .strip_prefix("Current Location (")?
        .strip_suffix(')')?;
    let (lat, lng) = inner.split_once(", ")?;
    Some(Coordinates::new(lat.parse().ok()?, lng.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_label_round_trip() {
        let position = Coordinates::new(51.5074, -0.1278);
        let label = pinned_label(position);
        assert_eq!(label, "Current Location (51.507, -0.128)");

        let parsed = pinned_coordinates(&label).unwrap();
        assert!((parsed.lat - 51.507).abs() < 1e-9);
        assert!((parsed.lng - -0.128).abs() < 1e-9);
    }

    #[test]
    fn test_plain_place_names_are_not_pins() {
        assert!(pinned_coordinates("Oxford").is_none());
        assert!(pinned_coordinates("Current Location (x, y)").is_none());
        assert!(pinned_coordinates("").is_none());
    }

    #[tokio::test]
    async fn test_fixed_provider_returns_position() {
        let provider = FixedPosition(Coordinates::new(51.0, -1.0));
        let position = provider.current_position().await.unwrap();
        assert_eq!(position, Coordinates::new(51.0, -1.0));
    }

    #[tokio::test]
    async fn test_denied_provider_fails() {
        let provider = DeniedPosition;
        let err = provider.current_position().await.unwrap_err();
        assert!(matches!(err, GeolocationError::Unavailable(_)));
    }
}
