use crate::core::geo::{LatLng, LngLatBounds};
use crate::data::university::PointOfInterest;
use crate::selection::zones::Zone;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// GeoJSON geometry types produced for the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

/// Serialises as the literal `"Feature"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureTag {
    #[default]
    Feature,
}

/// Serialises as the literal `"FeatureCollection"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollectionTag {
    #[default]
    FeatureCollection,
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type", default)]
    pub tag: FeatureTag,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl GeoJsonFeature {
    pub fn new(geometry: GeoJsonGeometry, properties: Map<String, Value>) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            geometry: Some(geometry),
            properties,
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Root GeoJSON object handed to the renderer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub tag: CollectionTag,
    pub features: Vec<GeoJsonFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<GeoJsonFeature>) -> Self {
        Self {
            tag: CollectionTag::FeatureCollection,
            features,
        }
    }

    /// Point features for university markers, with the properties the
    /// marker tooltip and drawer read.
    pub fn from_universities<'a>(pois: impl IntoIterator<Item = &'a PointOfInterest>) -> Self {
        Self::new(pois.into_iter().map(GeoJsonFeature::from).collect())
    }

    /// Polygon features for inspection zones.
    pub fn from_zones<'a>(zones: impl IntoIterator<Item = &'a Zone>) -> Self {
        Self::new(zones.into_iter().map(GeoJsonFeature::from).collect())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Gets the bounding box of all features
    pub fn bounds(&self) -> Option<LngLatBounds> {
        self.features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .filter_map(GeoJsonGeometry::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

impl GeoJsonGeometry {
    /// Converts coordinates to LatLng points
    pub fn to_lat_lng_points(&self) -> Vec<LatLng> {
        match self {
            GeoJsonGeometry::Point { coordinates } => vec![LatLng::from_position(*coordinates)],
            GeoJsonGeometry::LineString { coordinates } => coordinates
                .iter()
                .map(|c| LatLng::from_position(*c))
                .collect(),
            GeoJsonGeometry::Polygon { coordinates } => coordinates
                .first()
                .map(|exterior| exterior.iter().map(|c| LatLng::from_position(*c)).collect())
                .unwrap_or_default(),
        }
    }

    pub fn bounds(&self) -> Option<LngLatBounds> {
        let mut points = self.to_lat_lng_points().into_iter();
        let first = points.next()?;
        let mut bounds = LngLatBounds::new(first, first);
        for point in points {
            bounds.extend(&point);
        }
        Some(bounds)
    }
}

impl From<&PointOfInterest> for GeoJsonFeature {
    fn from(poi: &PointOfInterest) -> Self {
        let properties = json!({
            "id": poi.id,
            "name": poi.name,
            "country": poi.country,
            "region": poi.region,
            "category": poi.category,
        });
        GeoJsonFeature::new(
            GeoJsonGeometry::Point {
                coordinates: poi.coordinates.to_position(),
            },
            into_map(properties),
        )
    }
}

impl From<&Zone> for GeoJsonFeature {
    fn from(zone: &Zone) -> Self {
        let ring = zone.ring().coords().map(|c| [c.x, c.y]).collect();
        let properties = json!({
            "employeeId": zone.owner_employee_id,
            "employeeName": zone.owner_employee_name,
            "universityId": zone.university_id,
            "inspectedAt": zone.inspected_at,
            "isInspected": true,
        });
        GeoJsonFeature::new(
            GeoJsonGeometry::Polygon {
                coordinates: vec![ring],
            },
            into_map(properties),
        )
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
