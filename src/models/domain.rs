use serde::{Deserialize, Serialize};

/// A point on the earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }
}

/// A named location considered as a nearest-match candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Target {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// The compiled-in target locations
pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("puyallup", "Puyallup", 47.15476965557829, -122.32106655842479),
        Target::new("renton", "Renton", 47.470826179776566, -122.23386552805387),
        Target::new("everett", "Everett", 47.907556185455604, -122.23426400229107),
        Target::new("vancouver", "Vancouver", 45.65842399116114, -122.59338621772888),
        Target::new("kirkland", "Kirkland", 47.70997319790552, -122.19003647346379),
    ]
}

/// A target annotated with its distance from a query coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub target: Target,
    #[serde(rename = "distanceMiles")]
    pub distance_miles: f64,
}

/// Outcome of a single successful zip lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub id: String,
    #[serde(rename = "queryZip")]
    pub query_zip: String,
    pub coordinate: Coordinate,
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl LookupResult {
    /// Closest target, if any targets were ranked
    pub fn nearest(&self) -> Option<&RankedMatch> {
        self.matches.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(47.1, -122.3).is_some());
        assert!(Coordinate::new(90.0, 180.0).is_some());
        assert!(Coordinate::new(-90.0, -180.0).is_some());
        assert!(Coordinate::new(90.5, 0.0).is_none());
        assert!(Coordinate::new(0.0, -180.1).is_none());
        assert!(Coordinate::new(f64::NAN, 0.0).is_none());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_default_targets() {
        let targets = default_targets();
        assert_eq!(targets.len(), 5);
        assert_eq!(targets[0].id, "puyallup");
        assert_eq!(targets[4].name, "Kirkland");
        for target in &targets {
            assert!(Coordinate::new(target.lat, target.lng).is_some());
        }
    }
}
