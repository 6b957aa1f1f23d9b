//! # unimap
//!
//! Data core for an interactive university inspection map.
//!
//! The crate keeps two independently fetched collections (universities and
//! employees) in indexed stores, derives inspection zones for the employees
//! a user has selected, and drives a small event-based view state that a
//! renderer can read as immutable snapshots. Map rendering itself is left to
//! whatever consumes the GeoJSON this crate produces.

pub mod client;
pub mod core;
pub mod data;
pub mod loader;
pub mod prelude;
pub mod selection;
pub mod state;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::AppConfig,
    countries::CountryPreset,
    geo::{LatLng, LngLatBounds},
};

pub use data::{
    employee::{Employee, EmployeeStore, Inspection},
    ids::{EmployeeId, UniversityId},
    geojson::{FeatureCollection, GeoJsonFeature, GeoJsonGeometry},
    university::{PointOfInterest, UniversityStore},
};

pub use selection::{
    filter::filter_by_category,
    set::Selection,
    status::{inspection_status, InspectionFact},
    zones::{derive_zones, Zone},
};

pub use state::{events::ViewEvent, controller::ViewController, view::ViewState};

pub use client::{
    describe::{CachedDescriber, DescriptionService, GeminiDescriber},
    source::{DataSource, RestDataSource},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Description error: {0}")]
    Description(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Initialise `env_logger` from `RUST_LOG`, falling back to `default_filter`.
/// Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}
