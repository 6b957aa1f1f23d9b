use crate::data::ids::EmployeeId;
use serde::Serialize;

/// The employees a user has ticked, in the order they were ticked.
///
/// Duplicates cannot occur: adding an id that is already present is a
/// no-op, as is removing one that is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<EmployeeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id was not yet selected.
    pub fn add(&mut self, id: impl Into<EmployeeId>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `true` if the id was selected.
    pub fn remove(&mut self, id: &EmployeeId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    /// Checkbox semantics: add when `selected`, remove otherwise.
    pub fn set(&mut self, id: impl Into<EmployeeId>, selected: bool) -> bool {
        let id = id.into();
        if selected {
            self.add(id)
        } else {
            self.remove(&id)
        }
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl<T: Into<EmployeeId>> FromIterator<T> for Selection {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.add(id);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a EmployeeId;
    type IntoIter = std::slice::Iter<'a, EmployeeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent_and_ordered() {
        let mut selection = Selection::new();
        assert!(selection.add("e2"));
        assert!(selection.add("e1"));
        assert!(!selection.add("e2"));

        let ids: Vec<_> = selection.iter().map(EmployeeId::as_str).collect();
        assert_eq!(ids, ["e2", "e1"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut selection: Selection = ["e1", "e2"].into_iter().collect();
        assert!(!selection.remove(&EmployeeId::new("e9")));
        assert!(selection.remove(&EmployeeId::new("e1")));
        assert_eq!(selection.len(), 1);
        assert!(!selection.contains(&EmployeeId::new("e1")));
    }

    #[test]
    fn test_set_follows_checkbox() {
        let mut selection = Selection::new();
        selection.set("e1", true);
        selection.set("e2", true);
        selection.set("e1", false);
        assert_eq!(selection, ["e2"].into_iter().collect::<Selection>());
    }

    #[test]
    fn test_collect_drops_duplicates() {
        let selection: Selection = ["e1", "e1", "e2"].into_iter().collect();
        assert_eq!(selection.len(), 2);
    }
}
