//! Prelude module for common unimap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use unimap::prelude::*;`

pub use crate::core::{
    config::{ApiConfig, AppConfig, DescriptionConfig, ViewConfig},
    countries::CountryPreset,
    geo::{LatLng, LngLatBounds},
};

pub use crate::data::{
    employee::{Employee, EmployeeStore, Inspection},
    ids::{EmployeeId, UniversityId},
    geojson::{FeatureCollection, GeoJsonFeature, GeoJsonGeometry},
    university::{PointOfInterest, UniversityStore},
};

pub use crate::selection::{
    filter::filter_by_category,
    set::Selection,
    status::{inspection_status, InspectionFact},
    zones::{derive_zones, zones_bounds, Zone},
};

pub use crate::state::{
    controller::ViewController,
    events::{FetchSource, ViewEvent},
    view::{CameraTarget, DrawerInfo, HoverInfo, ViewState},
};

pub use crate::client::{
    describe::{
        describe_or_fallback, CachedDescriber, DescriptionService, DisabledDescriber,
        GeminiDescriber,
    },
    source::{DataSource, RestDataSource, StaticDataSource},
};

pub use crate::loader::{load_stores, request_description};

pub use crate::{Error, Result};

pub use std::sync::Arc;

pub use fxhash::FxHashMap as HashMap;
