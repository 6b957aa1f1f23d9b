use crate::core::geo::LatLng;
use crate::data::ids::UniversityId;
use crate::prelude::HashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A university as served by the backend. Coordinates arrive either as
/// numbers or as numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUniversity {
    pub id: UniversityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "nan", deserialize_with = "lenient_coordinate")]
    pub latitude: f64,
    #[serde(default = "nan", deserialize_with = "lenient_coordinate")]
    pub longitude: f64,
}

/// A point-of-interest marker. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub id: UniversityId,
    pub name: String,
    pub coordinates: LatLng,
    pub country: String,
    pub region: String,
    pub category: String,
}

impl PointOfInterest {
    pub fn new(
        id: impl Into<UniversityId>,
        name: impl Into<String>,
        coordinates: LatLng,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            country: String::new(),
            region: String::new(),
            category: category.into(),
        }
    }

    pub fn with_location(mut self, country: impl Into<String>, region: impl Into<String>) -> Self {
        self.country = country.into();
        self.region = region.into();
        self
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.coordinates.is_valid()
    }
}

impl From<RawUniversity> for PointOfInterest {
    fn from(raw: RawUniversity) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            coordinates: LatLng::new(raw.latitude, raw.longitude),
            country: raw.country,
            region: raw.region,
            category: raw.category,
        }
    }
}

/// Parses the backend payload (a JSON array of raw universities).
pub fn parse_universities(json: &str) -> crate::Result<Vec<PointOfInterest>> {
    let raw: Vec<RawUniversity> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(PointOfInterest::from).collect())
}

/// Universities indexed by id.
#[derive(Debug, Clone, Default)]
pub struct UniversityStore {
    records: Vec<PointOfInterest>,
    index: HashMap<UniversityId, usize>,
}

impl UniversityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store and its id index. When an id repeats, the first
    /// record is kept.
    pub fn from_records(records: impl IntoIterator<Item = PointOfInterest>) -> Self {
        let mut store = Self::new();
        let mut malformed = 0usize;

        for poi in records {
            if store.index.contains_key(&poi.id) {
                log::warn!("duplicate university id {}, keeping first record", poi.id);
                continue;
            }
            if !poi.has_valid_coordinates() {
                malformed += 1;
            }
            store.index.insert(poi.id.clone(), store.records.len());
            store.records.push(poi);
        }

        if malformed > 0 {
            log::warn!("{} universities have malformed coordinates", malformed);
        }
        store
    }

    pub fn get(&self, id: &UniversityId) -> Option<&PointOfInterest> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &UniversityId) -> bool {
        self.index.contains_key(id)
    }

    /// Records in payload order.
    pub fn records(&self) -> &[PointOfInterest] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PointOfInterest> for UniversityStore {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

fn nan() -> f64 {
    f64::NAN
}

fn lenient_coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_and_numeric_coordinates() {
        let json = r#"[
            {"id": 1, "name": "IIT Delhi", "country": "India", "region": "Delhi",
             "category": "ENGINEERING", "latitude": "28.5450", "longitude": "77.1926"},
            {"id": "2", "name": "Wits", "country": "South Africa", "region": "Gauteng",
             "category": "SCIENCE", "latitude": -26.1929, "longitude": 28.0305}
        ]"#;

        let pois = parse_universities(json).unwrap();
        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].coordinates, LatLng::new(28.5450, 77.1926));
        assert_eq!(pois[1].id, UniversityId::new("2"));
        assert_eq!(pois[1].coordinates.lng, 28.0305);
    }

    #[test]
    fn test_malformed_coordinates_become_nan() {
        let json = r#"[{"id": 7, "name": "Nowhere", "latitude": "north-ish", "longitude": null}]"#;

        let pois = parse_universities(json).unwrap();
        assert!(pois[0].coordinates.lat.is_nan());
        assert!(pois[0].coordinates.lng.is_nan());
        assert!(!pois[0].has_valid_coordinates());
        assert_eq!(pois[0].category, "");
    }

    #[test]
    fn test_store_keeps_first_duplicate() {
        let store = UniversityStore::from_records(vec![
            PointOfInterest::new(1, "First", LatLng::new(1.0, 1.0), "ARTS"),
            PointOfInterest::new(1, "Second", LatLng::new(2.0, 2.0), "ARTS"),
            PointOfInterest::new(2, "Other", LatLng::new(3.0, 3.0), "SCIENCE"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&UniversityId::from(1)).unwrap().name, "First");
        assert!(store.contains(&UniversityId::from(2)));
        assert!(store.get(&UniversityId::from(3)).is_none());
    }
}
