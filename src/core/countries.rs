//! Countries that can be focused in filter mode.
//!
//! Each preset carries the camera target used when the country is clicked
//! and the fill/border colours a renderer applies while it is hovered.

use crate::core::geo::LatLng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryPreset {
    pub name: &'static str,
    pub center: LatLng,
    pub zoom: f64,
    pub default_color: &'static str,
    pub hover_color: &'static str,
    pub border_color: &'static str,
    pub hover_border_color: &'static str,
}

macro_rules! preset {
    ($name:expr, [$lng:expr, $lat:expr], $zoom:expr, $default:expr, $hover:expr, $border:expr, $hover_border:expr) => {
        CountryPreset {
            name: $name,
            center: LatLng { lat: $lat, lng: $lng },
            zoom: $zoom,
            default_color: $default,
            hover_color: $hover,
            border_color: $border,
            hover_border_color: $hover_border,
        }
    };
}

pub const COUNTRY_PRESETS: [CountryPreset; 10] = [
    preset!("India", [78.9629, 20.5937], 5.0, "#00FF00", "#FF6B35", "#00CC00", "#CC5500"),
    preset!("Afghanistan", [67.7090, 33.9391], 6.0, "#FF4444", "#FF8888", "#CC3333", "#FF6666"),
    preset!("South Africa", [22.9375, -30.5595], 5.0, "#FFD700", "#FFA500", "#CCAA00", "#CC8800"),
    preset!("Greenland", [-42.6043, 71.7069], 3.0, "#87CEEB", "#4682B4", "#5F9EA0", "#4169E1"),
    preset!("Australia", [133.7751, -25.2744], 4.0, "#FF6347", "#FF4500", "#CD5C5C", "#DC143C"),
    preset!("New Zealand", [174.8860, -40.9006], 5.0, "#32CD32", "#228B22", "#00FF32", "#008000"),
    preset!("United States of America", [-95.7129, 37.0902], 4.0, "#4169E1", "#0000FF", "#1E90FF", "#0066CC"),
    preset!("Iran", [53.6880, 32.4279], 5.0, "#9370DB", "#8A2BE2", "#7B68EE", "#6A5ACD"),
    preset!("China", [104.1954, 35.8617], 4.0, "#DC143C", "#B22222", "#FF1493", "#C71585"),
    preset!("Russia", [105.3188, 61.5240], 3.0, "#FF69B4", "#FF1493", "#FF6347", "#FF4500"),
];

/// Looks up a preset by its exact country name.
pub fn country_preset(name: &str) -> Option<&'static CountryPreset> {
    COUNTRY_PRESETS.iter().find(|preset| preset.name == name)
}

pub fn is_supported_country(name: &str) -> bool {
    country_preset(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        let india = country_preset("India").unwrap();
        assert_eq!(india.center, LatLng::new(20.5937, 78.9629));
        assert_eq!(india.zoom, 5.0);

        assert!(country_preset("india").is_none());
        assert!(!is_supported_country("France"));
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: Vec<_> = COUNTRY_PRESETS.iter().map(|preset| preset.name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
