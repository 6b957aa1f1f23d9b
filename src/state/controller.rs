//! Owner of the mutable view state.
//!
//! Everything that changes the view arrives as a [`ViewEvent`], either pushed
//! directly through [`ViewController::apply`] or sent over the channel from a
//! fetch task and picked up by [`ViewController::process_events`]. After each
//! event the derived data (category-filtered markers, inspection zones,
//! tooltip/drawer status) is brought up to date before the next event is
//! looked at.

use crate::constants::ALL_CATEGORIES;
use crate::core::config::ViewConfig;
use crate::core::countries::{country_preset, is_supported_country};
use crate::data::employee::EmployeeStore;
use crate::data::geojson::FeatureCollection;
use crate::data::ids::UniversityId;
use crate::data::university::{PointOfInterest, UniversityStore};
use crate::selection::{
    filter::filter_by_category,
    status::{inspection_status, InspectionFact},
    zones::{derive_zones, Zone},
};
use crate::state::events::ViewEvent;
use crate::state::view::{CameraTarget, DrawerInfo, HoverInfo, ViewState};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;

const COUNTRY_FLY_MS: u64 = 1000;
const CLUSTER_EXPAND_MS: u64 = 500;

/// Which derived outputs an event invalidated
#[derive(Debug, Default, Clone, Copy)]
struct Stale {
    zones: bool,
    markers: bool,
    status: bool,
}

pub struct ViewController {
    config: ViewConfig,
    state: ViewState,
    universities: Arc<UniversityStore>,
    employees: Arc<EmployeeStore>,
    markers: Arc<Vec<PointOfInterest>>,
    zones: Arc<Vec<Zone>>,
    tx: Sender<ViewEvent>,
    rx: Receiver<ViewEvent>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl ViewController {
    pub fn new(config: ViewConfig) -> Self {
        let (tx, rx) = unbounded();
        Self {
            config,
            state: ViewState::default(),
            universities: Arc::new(UniversityStore::new()),
            employees: Arc::new(EmployeeStore::new()),
            markers: Arc::new(Vec::new()),
            zones: Arc::new(Vec::new()),
            tx,
            rx,
        }
    }

    /// Handle for fetch tasks and input code to post events.
    pub fn sender(&self) -> Sender<ViewEvent> {
        self.tx.clone()
    }

    /// Applies every queued event in arrival order. Returns how many were
    /// applied.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Applies one event. Returns `true` if the state changed.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let mut stale = Stale::default();
        let changed = self.reduce(event, &mut stale);

        if stale.markers {
            self.markers = Arc::new(
                filter_by_category(self.universities.records(), &self.state.category).into_owned(),
            );
        }
        if stale.zones {
            self.zones = Arc::new(derive_zones(
                &self.state.selection,
                &self.employees,
                &self.universities,
            ));
        }
        if stale.status {
            self.refresh_status();
        }
        if changed {
            self.state.revision += 1;
        }
        changed
    }

    fn reduce(&mut self, event: ViewEvent, stale: &mut Stale) -> bool {
        match event {
            ViewEvent::UniversitiesLoaded(records) => {
                log::info!("university store loaded ({} records)", records.len());
                self.universities = Arc::new(UniversityStore::from_records(records));
                self.refresh_universities();
                *stale = Stale { zones: true, markers: true, status: false };
                true
            }
            ViewEvent::EmployeesLoaded(records) => {
                log::info!("employee store loaded ({} records)", records.len());
                self.employees = Arc::new(EmployeeStore::from_records(records));
                *stale = Stale { zones: true, markers: false, status: true };
                true
            }
            ViewEvent::FetchFailed { source, message } => {
                log::warn!("failed to fetch {}: {}", source, message);
                self.state.diagnostics.push(format!("{}: {}", source, message));
                true
            }
            ViewEvent::SetEmployeeSelected { id, selected } => {
                let changed = self.state.selection.set(id, selected);
                if changed {
                    *stale = Stale { zones: true, markers: false, status: true };
                }
                changed
            }
            ViewEvent::SetCategory(category) => {
                if category == self.state.category {
                    return false;
                }
                if !self.config.categories.contains(&category) {
                    log::debug!("category {:?} is not one of the offered categories", category);
                }
                self.state.category = category;
                stale.markers = true;
                true
            }
            ViewEvent::ToggleFilterMode => {
                self.state.filter_mode = !self.state.filter_mode;
                self.state.hovered_country = None;
                true
            }
            ViewEvent::ToggleEmployeePanel => {
                self.state.show_employee_panel = !self.state.show_employee_panel;
                true
            }
            ViewEvent::HoverUniversity { id, pixel } => {
                let Some(university) = self.universities.get(&id) else {
                    return self.clear_hover();
                };
                self.state.hover = Some(HoverInfo {
                    university: university.clone(),
                    inspection_status: self.status_of(&id),
                    pixel,
                });
                true
            }
            ViewEvent::HoverCountry(name) => {
                if !self.state.filter_mode {
                    return false;
                }
                let hovered = name.filter(|n| is_supported_country(n));
                if hovered == self.state.hovered_country {
                    return false;
                }
                self.state.hovered_country = hovered;
                true
            }
            ViewEvent::PointerLeft => {
                let mut changed = self.clear_hover();
                if self.state.filter_mode && self.state.hovered_country.is_some() {
                    self.state.hovered_country = None;
                    changed = true;
                }
                changed
            }
            ViewEvent::OpenDrawer(id) => {
                let Some(university) = self.universities.get(&id) else {
                    log::debug!("drawer requested for unknown university {}", id);
                    return false;
                };
                self.state.drawer = Some(DrawerInfo {
                    university: university.clone(),
                    inspection_status: self.status_of(&id),
                    description: None,
                });
                true
            }
            ViewEvent::CloseDrawer => self.state.drawer.take().is_some(),
            ViewEvent::DescriptionReady {
                university_id,
                text,
            } => match self.state.drawer.as_mut() {
                Some(drawer) if drawer.university.id == university_id => {
                    drawer.description = Some(text);
                    true
                }
                _ => {
                    log::debug!("dropping stale description for {}", university_id);
                    false
                }
            },
            ViewEvent::CountryClicked(name) => {
                if !self.state.filter_mode {
                    return false;
                }
                let Some(preset) = country_preset(&name) else {
                    return false;
                };
                self.state.camera = CameraTarget {
                    center: preset.center,
                    zoom: preset.zoom,
                    duration_ms: COUNTRY_FLY_MS,
                };
                true
            }
            ViewEvent::ZoomToCluster { center, zoom } => {
                self.state.camera = CameraTarget {
                    center,
                    zoom,
                    duration_ms: CLUSTER_EXPAND_MS,
                };
                true
            }
        }
    }

    fn status_of(&self, id: &UniversityId) -> Option<Vec<InspectionFact>> {
        inspection_status(id, &self.state.selection, &self.employees)
    }

    fn clear_hover(&mut self) -> bool {
        self.state.hover.take().is_some()
    }

    /// Re-evaluates tooltip and drawer status after the selection or the
    /// employee store changed.
    fn refresh_status(&mut self) {
        if let Some(id) = self.state.hover.as_ref().map(|h| h.university.id.clone()) {
            let status = self.status_of(&id);
            if let Some(hover) = self.state.hover.as_mut() {
                hover.inspection_status = status;
            }
        }
        if let Some(id) = self.state.drawer.as_ref().map(|d| d.university.id.clone()) {
            let status = self.status_of(&id);
            if let Some(drawer) = self.state.drawer.as_mut() {
                drawer.inspection_status = status;
            }
        }
    }

    /// Points hover and drawer at the freshly loaded records, or clears them
    /// when their university is gone. A drawer whose name or country changed
    /// needs a new description.
    fn refresh_universities(&mut self) {
        let universities = Arc::clone(&self.universities);

        if let Some(hover) = self.state.hover.as_mut() {
            match universities.get(&hover.university.id) {
                Some(fresh) => hover.university = fresh.clone(),
                None => self.state.hover = None,
            }
        }

        if let Some(drawer) = self.state.drawer.as_mut() {
            match universities.get(&drawer.university.id) {
                Some(fresh) => {
                    if fresh.name != drawer.university.name
                        || fresh.country != drawer.university.country
                    {
                        drawer.description = None;
                    }
                    drawer.university = fresh.clone();
                }
                None => self.state.drawer = None,
            }
        }
    }

    /// Current view state.
    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn categories(&self) -> &[String] {
        &self.config.categories
    }

    pub fn is_filtering(&self) -> bool {
        self.state.category != ALL_CATEGORIES
    }

    pub fn university_store(&self) -> Arc<UniversityStore> {
        Arc::clone(&self.universities)
    }

    pub fn employee_store(&self) -> Arc<EmployeeStore> {
        Arc::clone(&self.employees)
    }

    /// Markers after category filtering.
    pub fn universities(&self) -> Arc<Vec<PointOfInterest>> {
        Arc::clone(&self.markers)
    }

    pub fn zones(&self) -> Arc<Vec<Zone>> {
        Arc::clone(&self.zones)
    }

    /// The drawer's university, while its description is still outstanding.
    pub fn pending_description(&self) -> Option<&PointOfInterest> {
        self.state
            .drawer
            .as_ref()
            .filter(|drawer| drawer.description.is_none())
            .map(|drawer| &drawer.university)
    }

    pub fn universities_geojson(&self) -> FeatureCollection {
        FeatureCollection::from_universities(self.markers.iter())
    }

    pub fn zones_geojson(&self) -> FeatureCollection {
        FeatureCollection::from_zones(self.zones.iter())
    }
}
