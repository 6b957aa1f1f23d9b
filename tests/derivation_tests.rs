use unimap::data::{employee::parse_employees, university::parse_universities};
use unimap::prelude::*;

/// Properties of the zone deriver, status lookup and category filter,
/// exercised through the public API only.
#[cfg(test)]
mod derivation_tests {
    use super::*;

    fn university(id: i32, lat: f64, lng: f64, category: &str) -> PointOfInterest {
        PointOfInterest::new(id, format!("University {}", id), LatLng::new(lat, lng), category)
    }

    fn campus() -> UniversityStore {
        UniversityStore::from_records(vec![
            university(1, 20.0, 78.0, "ENGINEERING"),
            university(2, 35.8617, 104.1954, "ARTS"),
            university(3, -25.2744, 133.7751, "SCIENCE"),
        ])
    }

    fn staff() -> EmployeeStore {
        EmployeeStore::from_records(vec![
            Employee::new("e1", "Ana")
                .with_department("Audit")
                .with_inspection(Inspection::new(1, "2024-01-01")),
            Employee::new("e2", "Ben")
                .with_inspection(Inspection::new(2, "2024-02-02"))
                .with_inspection(Inspection::new(3, "2024-03-03"))
                .with_inspection(Inspection::new(2, "2024-04-04")),
            Employee::new("e3", "Cai").with_inspection(Inspection::new(404, "2024-05-05")),
        ])
    }

    /// Zone count equals the resolvable inspections of the selected employees
    #[test]
    fn test_zone_count_matches_inspections() {
        let (universities, employees) = (campus(), staff());
        let selection: Selection = ["e1", "e2", "e3"].into_iter().collect();

        let zones = derive_zones(&selection, &employees, &universities);

        // e1: 1, e2: 3, e3: 0 (university 404 does not exist)
        assert_eq!(zones.len(), 4);
        for zone in &zones {
            assert!(universities.contains(&zone.university_id));
        }
    }

    /// Every ring has 65 vertices and closes on itself
    #[test]
    fn test_every_ring_is_closed() {
        let (universities, employees) = (campus(), staff());
        let selection: Selection = ["e2", "e1"].into_iter().collect();

        for zone in derive_zones(&selection, &employees, &universities) {
            let ring = &zone.ring().0;
            assert_eq!(ring.len(), 65);
            assert_eq!(ring[0], ring[64]);
        }
    }

    /// Output order: selection order, then inspection order, no sorting
    #[test]
    fn test_zone_order() {
        let (universities, employees) = (campus(), staff());
        let selection: Selection = ["e2", "e1"].into_iter().collect();

        let order: Vec<_> = derive_zones(&selection, &employees, &universities)
            .iter()
            .map(|z| (z.owner_employee_name.clone(), z.inspected_at.clone()))
            .collect();

        assert_eq!(
            order,
            vec![
                ("Ben".to_string(), "2024-02-02".to_string()),
                ("Ben".to_string(), "2024-03-03".to_string()),
                ("Ben".to_string(), "2024-04-04".to_string()),
                ("Ana".to_string(), "2024-01-01".to_string()),
            ]
        );
    }

    /// Empty selection or empty stores give nothing
    #[test]
    fn test_empty_inputs() {
        let (universities, employees) = (campus(), staff());
        let everyone: Selection = ["e1", "e2"].into_iter().collect();

        assert!(derive_zones(&Selection::new(), &employees, &universities).is_empty());
        assert!(derive_zones(&everyone, &EmployeeStore::new(), &universities).is_empty());
        assert!(derive_zones(&everyone, &employees, &UniversityStore::new()).is_empty());
    }

    /// Ana inspected the university at (lat 20, lon 78): one zone, first vertex (78, 25)
    #[test]
    fn test_single_inspection_scenario() {
        let universities = UniversityStore::from_records(vec![university(1, 20.0, 78.0, "ARTS")]);
        let employees = EmployeeStore::from_records(vec![
            Employee::new("e1", "Ana").with_inspection(Inspection::new(1, "2024-01-01")),
        ]);
        let selection: Selection = ["e1"].into_iter().collect();

        let zones = derive_zones(&selection, &employees, &universities);
        assert_eq!(zones.len(), 1);

        let zone = &zones[0];
        assert_eq!(zone.owner_employee_name, "Ana");
        assert_eq!(zone.owner_employee_id, EmployeeId::new("e1"));
        assert_eq!(zone.university_id, UniversityId::from(1));
        assert_eq!(zone.inspected_at, "2024-01-01");

        let first = zone.ring().0[0];
        assert_eq!((first.x, first.y), (78.0, 25.0));
    }

    /// Unknown employees in the selection are ignored
    #[test]
    fn test_unknown_employee_is_ignored() {
        let universities = UniversityStore::from_records(vec![university(1, 20.0, 78.0, "ARTS")]);
        let employees = EmployeeStore::from_records(vec![
            Employee::new("e1", "Ana").with_inspection(Inspection::new(1, "2024-01-01")),
        ]);
        let selection: Selection = ["e1", "e2"].into_iter().collect();

        let zones = derive_zones(&selection, &employees, &universities);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].owner_employee_id, EmployeeId::new("e1"));
    }

    /// Ids sent as `1`, `"1"` or `1.0` all resolve to the same university
    #[test]
    fn test_id_spellings_join() {
        let universities = UniversityStore::from_records(
            parse_universities(r#"[{"id": 1, "name": "IIT Delhi", "latitude": 28.545, "longitude": 77.1926}]"#)
                .unwrap(),
        );
        let employees = EmployeeStore::from_records(
            parse_employees(
                r#"[{"id": "e1", "name": "Ana", "inspections": [
                    {"universityId": 1.0, "inspectedAt": "2024-01-01"},
                    {"universityId": "1", "inspectedAt": "2024-02-01"}
                ]}]"#,
            )
            .unwrap(),
        );
        let selection: Selection = ["e1"].into_iter().collect();

        assert_eq!(derive_zones(&selection, &employees, &universities).len(), 2);
    }

    /// Malformed coordinates still produce a full-size zone
    #[test]
    fn test_malformed_coordinates_still_zoned() {
        let universities = UniversityStore::from_records(
            parse_universities(r#"[{"id": 1, "name": "Nowhere", "latitude": "bad", "longitude": 78}]"#)
                .unwrap(),
        );
        let employees = EmployeeStore::from_records(vec![
            Employee::new("e1", "Ana").with_inspection(Inspection::new(1, "2024-01-01")),
        ]);
        let selection: Selection = ["e1"].into_iter().collect();

        let zones = derive_zones(&selection, &employees, &universities);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].ring().0.len(), 65);
        assert!(zones[0].polygon().is_none());
    }

    /// Recomputing gives the same answer
    #[test]
    fn test_derivation_is_idempotent() {
        let (universities, employees) = (campus(), staff());
        let selection: Selection = ["e1", "e2"].into_iter().collect();

        let a = derive_zones(&selection, &employees, &universities);
        let b = derive_zones(&selection, &employees, &universities);
        assert_eq!(a, b);
    }

    #[test]
    fn test_inspection_status_properties() {
        let employees = staff();

        for id in [1, 2, 3, 404] {
            assert!(inspection_status(&UniversityId::from(id), &Selection::new(), &employees).is_none());
        }

        let selection: Selection = ["e2"].into_iter().collect();
        let facts = inspection_status(&UniversityId::from(2), &selection, &employees).unwrap();
        assert_eq!(facts.len(), 2);
        assert!(facts.iter().all(|f| f.employee_name == "Ben"));

        assert!(inspection_status(&UniversityId::from(1), &selection, &employees).is_none());
    }

    #[test]
    fn test_filter_by_category_properties() {
        let records = campus().records().to_vec();

        assert_eq!(filter_by_category(&records, "All").as_ref(), records.as_slice());

        let arts = filter_by_category(&records, "ARTS");
        assert_eq!(arts.len(), 1);
        assert!(arts.iter().all(|p| p.category == "ARTS"));

        assert!(filter_by_category(&records, "FINANCE").is_empty());
    }

    /// Zones exported as GeoJSON keep count and properties
    #[test]
    fn test_zone_geojson_export() {
        let (universities, employees) = (campus(), staff());
        let selection: Selection = ["e1", "e2"].into_iter().collect();
        let zones = derive_zones(&selection, &employees, &universities);

        let collection = FeatureCollection::from_zones(&zones);
        assert_eq!(collection.len(), zones.len());

        let json = collection.to_json_string().unwrap();
        assert!(json.contains("\"type\":\"FeatureCollection\""));
        assert!(json.contains("\"employeeName\":\"Ben\""));

        let bounds = zones_bounds(&zones).unwrap();
        assert_eq!(bounds.north_east.lat, 35.8617 + 5.0);
    }
}
