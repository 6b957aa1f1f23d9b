use crate::core::geo::LatLng;
use crate::data::employee::Employee;
use crate::data::ids::{EmployeeId, UniversityId};
use crate::data::university::PointOfInterest;
use crate::state::view::Pixel;
use std::fmt;

/// Which fetch a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSource {
    Universities,
    Employees,
    Description,
}

impl fmt::Display for FetchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchSource::Universities => "universities",
            FetchSource::Employees => "employees",
            FetchSource::Description => "description",
        };
        f.write_str(name)
    }
}

/// Messages that drive the view state. Fetch tasks and the renderer send
/// these; the controller applies them one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Replaces the university store
    UniversitiesLoaded(Vec<PointOfInterest>),
    /// Replaces the employee store
    EmployeesLoaded(Vec<Employee>),
    /// A fetch failed; stores are left as they were
    FetchFailed { source: FetchSource, message: String },
    /// Employee checkbox toggled
    SetEmployeeSelected { id: EmployeeId, selected: bool },
    /// Category dropdown changed
    SetCategory(String),
    ToggleFilterMode,
    ToggleEmployeePanel,
    /// Pointer over an unclustered university marker
    HoverUniversity { id: UniversityId, pixel: Pixel },
    /// Pointer over a country shape, or over none
    HoverCountry(Option<String>),
    /// Pointer left the map
    PointerLeft,
    /// University marker clicked
    OpenDrawer(UniversityId),
    CloseDrawer,
    DescriptionReady { university_id: UniversityId, text: String },
    /// Country shape clicked
    CountryClicked(String),
    /// The renderer resolved a cluster click to an expansion zoom
    ZoomToCluster { center: LatLng, zoom: f64 },
}

impl ViewEvent {
    pub fn select(id: impl Into<EmployeeId>) -> Self {
        ViewEvent::SetEmployeeSelected {
            id: id.into(),
            selected: true,
        }
    }

    pub fn deselect(id: impl Into<EmployeeId>) -> Self {
        ViewEvent::SetEmployeeSelected {
            id: id.into(),
            selected: false,
        }
    }
}
