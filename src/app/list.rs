//! Student list - fetched rows, selection, and local removal

use chrono::{DateTime, Local};

use crate::messages::NetworkCommand;
use crate::models::{Student, StudentId};

/// List state. Rows are replaced wholesale on every fetch.
#[derive(Clone, Debug, Default)]
pub struct StudentList {
    pub students: Vec<Student>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
    pub last_fetched: Option<DateTime<Local>>,
    /// Refresh counter value the current rows were fetched for
    seen_trigger: Option<u64>,
}

impl StudentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until a fetch has been issued for `trigger`
    pub fn is_stale(&self, trigger: u64) -> bool {
        self.seen_trigger != Some(trigger)
    }

    pub fn begin_fetch(&mut self, trigger: u64, request_id: u64) -> NetworkCommand {
        self.seen_trigger = Some(trigger);
        self.loading = true;
        self.error = None;
        NetworkCommand::FetchStudents { id: request_id }
    }

    pub fn handle_loaded(&mut self, students: Vec<Student>) {
        self.students = students;
        self.loading = false;
        self.last_fetched = Some(Local::now());
        self.clamp_selection();
    }

    /// Previous rows stay visible under the error
    pub fn handle_fetch_failed(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(format!("Failed to fetch students: {}", message));
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.students.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.students.is_empty() {
            self.selected = (self.selected + 1) % self.students.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.students.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.students.len() - 1);
        }
    }

    /// Drop a deleted student from local rows. Returns whether a row matched.
    pub fn remove(&mut self, student_id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != student_id);
        self.clamp_selection();
        self.students.len() != before
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.students.len() {
            self.selected = self.students.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: StudentId, name: &str) -> Student {
        Student {
            id,
            name: name.into(),
            age: 20,
            email: format!("{}@x.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_fetch_once_per_trigger() {
        let mut list = StudentList::new();
        assert!(list.is_stale(0));
        assert_eq!(list.begin_fetch(0, 1), NetworkCommand::FetchStudents { id: 1 });
        assert!(list.loading);
        assert!(!list.is_stale(0));
        assert!(list.is_stale(1));
    }

    #[test]
    fn test_loaded_replaces_rows() {
        let mut list = StudentList::new();
        list.handle_loaded(vec![student(1, "A"), student(2, "B")]);
        list.handle_loaded(vec![student(3, "C")]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.students[0].id, 3);
        assert!(list.last_fetched.is_some());
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut list = StudentList::new();
        list.handle_loaded(vec![student(1, "A"), student(2, "B"), student(3, "C")]);
        assert!(list.remove(2));
        let ids: Vec<_> = list.students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!list.remove(99));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_selection_clamped_after_remove() {
        let mut list = StudentList::new();
        list.handle_loaded(vec![student(1, "A"), student(2, "B")]);
        list.select_next();
        assert_eq!(list.selected_student().map(|s| s.id), Some(2));
        list.remove(2);
        assert_eq!(list.selected, 0);
        list.remove(1);
        assert!(list.selected_student().is_none());
    }

    #[test]
    fn test_selection_wraps() {
        let mut list = StudentList::new();
        list.handle_loaded(vec![student(1, "A"), student(2, "B")]);
        list.select_prev();
        assert_eq!(list.selected, 1);
        list.select_next();
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_fetch_failure_keeps_rows() {
        let mut list = StudentList::new();
        list.handle_loaded(vec![student(1, "A")]);
        list.begin_fetch(1, 2);
        list.handle_fetch_failed("Connection refused");
        assert_eq!(list.len(), 1);
        assert!(!list.loading);
        assert_eq!(list.error.as_deref(), Some("Failed to fetch students: Connection refused"));
    }
}
