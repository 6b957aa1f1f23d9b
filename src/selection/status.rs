use crate::data::employee::EmployeeStore;
use crate::data::ids::UniversityId;
use crate::selection::set::Selection;
use serde::Serialize;

/// Who inspected a university, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionFact {
    pub employee_name: String,
    pub inspected_at: String,
}

/// Inspections of `university_id` by the selected employees.
///
/// Returns `None` when nothing is selected or no selected employee has
/// inspected the university. Entries follow selection order, then the
/// employee's own inspection order; repeated visits are all reported.
pub fn inspection_status(
    university_id: &UniversityId,
    selection: &Selection,
    employees: &EmployeeStore,
) -> Option<Vec<InspectionFact>> {
    if selection.is_empty() {
        return None;
    }

    let facts: Vec<InspectionFact> = selection
        .iter()
        .filter_map(|id| employees.get(id))
        .flat_map(|employee| {
            employee
                .inspections_of(university_id)
                .map(move |inspection| InspectionFact {
                    employee_name: employee.name.clone(),
                    inspected_at: inspection.inspected_at.clone(),
                })
        })
        .collect();

    (!facts.is_empty()).then_some(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::employee::{Employee, Inspection};

    fn employees() -> EmployeeStore {
        EmployeeStore::from_records(vec![
            Employee::new("e1", "Ana")
                .with_inspection(Inspection::new(1, "2024-01-01"))
                .with_inspection(Inspection::new(1, "2024-06-01")),
            Employee::new("e2", "Ben").with_inspection(Inspection::new(1, "2024-03-15")),
            Employee::new("e3", "Cai").with_inspection(Inspection::new(2, "2024-04-01")),
        ])
    }

    #[test]
    fn test_empty_selection_is_none() {
        assert_eq!(
            inspection_status(&UniversityId::from(1), &Selection::new(), &employees()),
            None
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let selection: Selection = ["e3", "ghost"].into_iter().collect();
        assert_eq!(
            inspection_status(&UniversityId::from(1), &selection, &employees()),
            None
        );
    }

    #[test]
    fn test_follows_selection_order_and_keeps_repeats() {
        let selection: Selection = ["e2", "e3", "e1"].into_iter().collect();
        let facts = inspection_status(&UniversityId::from(1), &selection, &employees()).unwrap();

        let got: Vec<_> = facts
            .iter()
            .map(|f| (f.employee_name.as_str(), f.inspected_at.as_str()))
            .collect();
        assert_eq!(
            got,
            [
                ("Ben", "2024-03-15"),
                ("Ana", "2024-01-01"),
                ("Ana", "2024-06-01"),
            ]
        );
    }
}
