use crate::data::ids::{EmployeeId, UniversityId};
use crate::prelude::HashMap;
use serde::{Deserialize, Serialize};

/// One visit of an employee to a university. `inspected_at` is kept as the
/// timestamp string the backend sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub university_id: UniversityId,
    pub inspected_at: String,
}

impl Inspection {
    pub fn new(university_id: impl Into<UniversityId>, inspected_at: impl Into<String>) -> Self {
        Self {
            university_id: university_id.into(),
            inspected_at: inspected_at.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub inspections: Vec<Inspection>,
}

impl Employee {
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: String::new(),
            inspections: Vec::new(),
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_inspection(mut self, inspection: Inspection) -> Self {
        self.inspections.push(inspection);
        self
    }

    /// Inspections of `university_id`, in recorded order.
    pub fn inspections_of<'a>(
        &'a self,
        university_id: &'a UniversityId,
    ) -> impl Iterator<Item = &'a Inspection> + 'a {
        self.inspections
            .iter()
            .filter(move |inspection| &inspection.university_id == university_id)
    }
}

/// Parses the backend payload (a JSON array of employees).
pub fn parse_employees(json: &str) -> crate::Result<Vec<Employee>> {
    Ok(serde_json::from_str(json)?)
}

/// Employees indexed by id.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    records: Vec<Employee>,
    index: HashMap<EmployeeId, usize>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store and its id index. When an id repeats, the first
    /// record is kept.
    pub fn from_records(records: impl IntoIterator<Item = Employee>) -> Self {
        let mut store = Self::new();
        for employee in records {
            if store.index.contains_key(&employee.id) {
                log::warn!("duplicate employee id {}, keeping first record", employee.id);
                continue;
            }
            store.index.insert(employee.id.clone(), store.records.len());
            store.records.push(employee);
        }
        store
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn inspection_count(&self) -> usize {
        self.records.iter().map(|e| e.inspections.len()).sum()
    }
}

impl FromIterator<Employee> for EmployeeStore {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
