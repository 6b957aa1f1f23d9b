use geo_types::{coord, Coord, Rect};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// GeoJSON position order: `[lng, lat]`
    pub fn to_position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn from_position(position: [f64; 2]) -> Self {
        Self::new(position[1], position[0])
    }

    /// `x` is longitude, `y` is latitude.
    pub fn to_coord(&self) -> Coord<f64> {
        coord! { x: self.lng, y: self.lat }
    }

    pub fn from_coord(c: Coord<f64>) -> Self {
        Self::new(c.y, c.x)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        value.to_coord()
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLatBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LngLatBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self::new(LatLng::from_coord(rect.min()), LatLng::from_coord(rect.max()))
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Returns the union of this bounds with another bounds
    pub fn union(&self, other: &LngLatBounds) -> LngLatBounds {
        let south = self.south_west.lat.min(other.south_west.lat);
        let west = self.south_west.lng.min(other.south_west.lng);
        let north = self.north_east.lat.max(other.north_east.lat);
        let east = self.north_east.lng.max(other.north_east.lng);

        LngLatBounds::from_coords(south, west, north, east)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(20.5937, 78.9629);
        assert_eq!(coord.lat, 20.5937);
        assert_eq!(coord.lng, 78.9629);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_nan_is_not_valid() {
        assert!(!LatLng::new(f64::NAN, 10.0).is_valid());
        assert!(!LatLng::new(95.0, 10.0).is_valid());
    }

    #[test]
    fn test_position_order_is_lng_lat() {
        let coord = LatLng::new(20.0, 78.0);
        assert_eq!(coord.to_position(), [78.0, 20.0]);
        assert_eq!(LatLng::from_position([78.0, 20.0]), coord);

        let c = coord.to_coord();
        assert_eq!((c.x, c.y), (78.0, 20.0));
    }

    #[test]
    fn test_bounds_contains_and_union() {
        let a = LngLatBounds::from_coords(15.0, 73.0, 25.0, 83.0);
        let b = LngLatBounds::from_coords(-35.0, 18.0, -25.0, 28.0);

        assert!(a.contains(&LatLng::new(20.0, 78.0)));
        assert!(!a.contains(&LatLng::new(30.0, 78.0)));

        let both = a.union(&b);
        assert_eq!(both.south_west, LatLng::new(-35.0, 18.0));
        assert_eq!(both.north_east, LatLng::new(25.0, 83.0));
    }
}
