//! Core constants shared by the deriver, the clients and the view state.
//! Keeping them in a single place makes the magic numbers easy to find.

/// Angular radius of an inspection zone, in coordinate degrees.
pub const ZONE_RADIUS_DEG: f64 = 5.0;

/// Equal angular steps around a zone ring. The ring carries one extra
/// closing vertex, so it has `ZONE_SEGMENTS + 1` vertices.
pub const ZONE_SEGMENTS: usize = 64;

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the viewer when no configuration overrides them.
pub const DEFAULT_CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "ENGINEERING", "ARTS", "FINANCE", "SCIENCE"];

/// Text shown when the description service cannot answer.
pub const DESCRIPTION_FALLBACK: &str = "AI description unavailable.";

/// Default REST root serving `/universities` and `/employees`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Default generative-text REST root.
pub const DEFAULT_DESCRIPTION_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generative-text model.
pub const DEFAULT_DESCRIPTION_MODEL: &str = "gemini-2.0-flash";

/// Initial camera: whole world.
pub const WORLD_ZOOM: f64 = 1.0;

/// User-Agent sent with every outgoing request.
pub const USER_AGENT: &str = concat!("unimap/", env!("CARGO_PKG_VERSION"));
