use crate::constants::{ALL_CATEGORIES, WORLD_ZOOM};
use crate::core::geo::LatLng;
use crate::data::university::PointOfInterest;
use crate::selection::set::Selection;
use crate::selection::status::InspectionFact;
use serde::Serialize;

/// Screen position in pixels, relative to the map's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the renderer should move the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraTarget {
    pub center: LatLng,
    pub zoom: f64,
    pub duration_ms: u64,
}

impl Default for CameraTarget {
    fn default() -> Self {
        Self {
            center: LatLng::default(),
            zoom: WORLD_ZOOM,
            duration_ms: 0,
        }
    }
}

/// Tooltip content for a hovered marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverInfo {
    pub university: PointOfInterest,
    pub inspection_status: Option<Vec<InspectionFact>>,
    pub pixel: Pixel,
}

/// Drawer content for a clicked marker. `description` stays `None` until
/// the description service answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerInfo {
    pub university: PointOfInterest,
    pub inspection_status: Option<Vec<InspectionFact>>,
    pub description: Option<String>,
}

/// Immutable snapshot of everything the renderer needs besides the stores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Bumped on every applied change
    pub revision: u64,
    pub selection: Selection,
    pub category: String,
    pub filter_mode: bool,
    pub hovered_country: Option<String>,
    pub hover: Option<HoverInfo>,
    pub drawer: Option<DrawerInfo>,
    pub show_employee_panel: bool,
    pub camera: CameraTarget,
    /// Fetch failures, oldest first
    pub diagnostics: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            revision: 0,
            selection: Selection::new(),
            category: ALL_CATEGORIES.to_string(),
            filter_mode: false,
            hovered_country: None,
            hover: None,
            drawer: None,
            show_employee_panel: false,
            camera: CameraTarget::default(),
            diagnostics: Vec::new(),
        }
    }
}

impl ViewState {
    pub fn filter_label(&self) -> &'static str {
        if self.filter_mode {
            "Filter: ON"
        } else {
            "Filter: OFF"
        }
    }
}
