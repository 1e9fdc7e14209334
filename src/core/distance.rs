use crate::models::Coordinates;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two positions in kilometers
#[inline]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Circular search area: the selected location plus the chosen range.
#[derive(Debug, Clone, Copy)]
pub struct SearchArea {
    pub center: Coordinates,
    pub radius_km: f64,
}

impl SearchArea {
    pub fn new(center: Coordinates, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// True when the point lies within the search radius
    #[inline]
    pub fn contains(&self, point: Coordinates) -> bool {
        haversine_km(self.center, point) <= self.radius_km
    }

    /// Distance from the search centre in kilometers
    #[inline]
    pub fn distance_to(&self, point: Coordinates) -> f64 {
        haversine_km(self.center, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Coordinates = Coordinates { lat: 51.5074, lng: -0.1278 };
    const OXFORD: Coordinates = Coordinates { lat: 51.7520, lng: -1.2577 };
    const PARIS: Coordinates = Coordinates { lat: 48.8566, lng: 2.3522 };

    #[test]
    fn test_haversine_zero_for_same_point() {
        assert!(haversine_km(LONDON, LONDON) < 0.01);
    }

    #[test]
    fn test_haversine_london_to_paris() {
        // London to Paris is approximately 344 km
        let distance = haversine_km(LONDON, PARIS);
        assert!((distance - 344.0).abs() < 10.0, "expected ~344km, got {}", distance);
    }

    #[test]
    fn test_search_area_contains() {
        // Oxford is roughly 80km from central London
        let area = SearchArea::new(LONDON, 100.0);
        assert!(area.contains(OXFORD));
        assert!(!area.contains(PARIS));

        let tight = SearchArea::new(LONDON, 10.0);
        assert!(!tight.contains(OXFORD));
        assert!(tight.contains(Coordinates::new(51.51, -0.12)));
    }
}
