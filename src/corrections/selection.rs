//! Selection State
//!
//! Ids of the currently checked corrections, in the order they were checked.

use crate::models::CorrectionId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    ids: Vec<CorrectionId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if already selected
    pub fn insert(&mut self, id: CorrectionId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns false if it was not selected
    pub fn remove(&mut self, id: &CorrectionId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    pub fn set(&mut self, id: CorrectionId, checked: bool) {
        if checked {
            self.insert(id);
        } else {
            self.remove(&id);
        }
    }

    pub fn contains(&self, id: &CorrectionId) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorrectionId> {
        self.ids.iter()
    }

    /// Frozen copy taken at submission time
    pub fn snapshot(&self) -> Vec<CorrectionId> {
        self.iter().cloned().collect()
    }
}

impl FromIterator<CorrectionId> for SelectionState {
    fn from_iter<I: IntoIterator<Item = CorrectionId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_deduplicated() {
        let mut selection = SelectionState::new();
        assert!(selection.insert("c1".into()));
        assert!(!selection.insert("c1".into()));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_set_and_remove() {
        let mut selection: SelectionState = vec![CorrectionId::new("c1"), CorrectionId::new("c2")].into_iter().collect();
        selection.set("c3".into(), true);
        selection.set("c1".into(), false);
        assert!(!selection.remove(&"c9".into()));

        let ids: Vec<&str> = selection.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c3"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut selection: SelectionState = vec![CorrectionId::new("c1")].into_iter().collect();
        let snapshot = selection.snapshot();
        selection.insert("c2".into());
        assert_eq!(snapshot, vec![CorrectionId::new("c1")]);
    }
}
