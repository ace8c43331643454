use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Miles per kilometer
const KM_TO_MILES: f64 = 0.621371;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two coordinates in miles
#[inline]
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    haversine_km(from.lat, from.lng, to.lat, to.lng) * KM_TO_MILES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_haversine_km() {
        // Distance from London to Paris (approximately 344 km)
        let distance = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_identity_is_exactly_zero() {
        let seattle = coord(47.6062, -122.3321);
        assert_eq!(haversine_miles(seattle, seattle), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (coord(47.15, -122.30), coord(47.71, -122.19)),
            (coord(-33.86, 151.21), coord(51.50, -0.12)),
            (coord(90.0, 0.0), coord(-90.0, 180.0)),
        ];
        for (a, b) in pairs {
            assert!((haversine_miles(a, b) - haversine_miles(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_antipodes_not_nan() {
        let d = haversine_miles(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!(!d.is_nan());
        // Half the circumference: pi * 6371 km in miles
        assert!((d - std::f64::consts::PI * 6371.0 * 0.621371).abs() < 1e-6);
    }

    #[test]
    fn test_miles_conversion() {
        let km = haversine_km(47.15, -122.30, 47.71, -122.19);
        let miles = haversine_miles(coord(47.15, -122.30), coord(47.71, -122.19));
        assert!((miles - km * 0.621371).abs() < 1e-12);
    }
}
