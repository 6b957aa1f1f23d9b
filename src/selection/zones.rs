//! Inspection zones: one ring per (selected employee, inspection) pair,
//! drawn around the inspected university.
//!
//! The ring is a flat-coordinate circle, not a geodesic one. Vertex `i` for
//! `i < 64` sits at `lat = c.lat + 5·cos(2πi/64)`, `lng = c.lng + 5·sin(2πi/64)`
//! and vertex 64 repeats vertex 0. Renderers and tests depend on that exact
//! shape.

use crate::constants::{ZONE_RADIUS_DEG, ZONE_SEGMENTS};
use crate::core::geo::{LatLng, LngLatBounds};
use crate::data::employee::EmployeeStore;
use crate::data::ids::{EmployeeId, UniversityId};
use crate::data::university::UniversityStore;
use crate::selection::set::Selection;
use geo::{BoundingRect, Contains};
use geo_types::{coord, Coord, LineString, Point, Polygon};
use std::f64::consts::PI;

/// Derived, never persisted. Rebuilt from scratch whenever the selection or
/// either store changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub owner_employee_id: EmployeeId,
    pub owner_employee_name: String,
    pub university_id: UniversityId,
    pub inspected_at: String,
    ring: LineString<f64>,
}

impl Zone {
    /// Closed ring of `(lng, lat)` vertices.
    pub fn ring(&self) -> &LineString<f64> {
        &self.ring
    }

    /// The ring as a polygon exterior. `None` when the university had
    /// malformed coordinates: a `NaN` ring never compares closed and
    /// `Polygon::new` would append a 66th vertex to it.
    pub fn polygon(&self) -> Option<Polygon<f64>> {
        self.ring
            .is_closed()
            .then(|| Polygon::new(self.ring.clone(), Vec::new()))
    }

    pub fn bounds(&self) -> Option<LngLatBounds> {
        self.ring.bounding_rect().map(LngLatBounds::from_rect)
    }

    /// Whether `point` lies strictly inside the zone.
    pub fn contains(&self, point: LatLng) -> bool {
        self.polygon()
            .map_or(false, |polygon| polygon.contains(&Point::from(point.to_coord())))
    }
}

/// Builds the zone ring around `center`.
pub fn zone_ring(center: LatLng) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(ZONE_SEGMENTS + 1);
    for i in 0..ZONE_SEGMENTS {
        let angle = (i as f64 * 2.0 * PI) / ZONE_SEGMENTS as f64;
        let lat = center.lat + ZONE_RADIUS_DEG * angle.cos();
        let lng = center.lng + ZONE_RADIUS_DEG * angle.sin();
        coords.push(coord! { x: lng, y: lat });
    }
    // sin(2π) is not exactly zero; repeat the first vertex instead
    coords.push(coords[0]);
    LineString::new(coords)
}

/// Zones for every selected employee's inspections.
///
/// Output follows selection order, then each employee's inspection order.
/// Employees missing from `employees` and inspections whose university is
/// missing from `universities` are skipped without error.
pub fn derive_zones(
    selection: &Selection,
    employees: &EmployeeStore,
    universities: &UniversityStore,
) -> Vec<Zone> {
    let mut zones = Vec::new();

    for employee_id in selection {
        let Some(employee) = employees.get(employee_id) else {
            continue;
        };

        for inspection in &employee.inspections {
            let Some(university) = universities.get(&inspection.university_id) else {
                continue;
            };

            zones.push(Zone {
                owner_employee_id: employee.id.clone(),
                owner_employee_name: employee.name.clone(),
                university_id: inspection.university_id.clone(),
                inspected_at: inspection.inspected_at.clone(),
                ring: zone_ring(university.coordinates),
            });
        }
    }

    log::debug!(
        "derived {} zones for {} selected employees",
        zones.len(),
        selection.len()
    );
    zones
}

/// Extent covering every zone, for fitting the camera.
pub fn zones_bounds(zones: &[Zone]) -> Option<LngLatBounds> {
    zones
        .iter()
        .filter_map(Zone::bounds)
        .reduce(|acc, b| acc.union(&b))
}
