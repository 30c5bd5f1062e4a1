//! Student form - controlled inputs with create and edit modes

use crate::constants::AGE_RANGE;
use crate::error::ValidationError;
use crate::messages::NetworkCommand;
use crate::models::{SaveMode, Student, StudentDraft, StudentId};

/// Form input fields
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Age,
    Email,
}

/// Validate raw field text into a request body.
///
/// Emptiness is checked before the age so a blank form reports missing fields.
pub fn validate_fields(name: &str, age: &str, email: &str) -> Result<StudentDraft, ValidationError> {
    if name.is_empty() || age.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let age = age
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|a| AGE_RANGE.contains(a))
        .ok_or(ValidationError::AgeOutOfRange)?;

    Ok(StudentDraft {
        name: name.to_string(),
        age,
        email: email.to_string(),
    })
}

/// Form state. The displayed values are exactly these strings.
#[derive(Clone, Debug, Default)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub email: String,
    /// Set in edit mode
    pub editing_id: Option<StudentId>,
    pub submitting: bool,
    pub pending_request_id: Option<u64>,
    pub error: Option<String>,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the parent's editing selection: populate from it, or reset
    pub fn sync_editing(&mut self, editing: Option<&Student>) {
        match editing {
            Some(student) => {
                self.name = student.name.clone();
                self.age = student.age.to_string();
                self.email = student.email.clone();
                self.editing_id = Some(student.id);
            }
            None => {
                self.clear();
                self.editing_id = None;
            }
        }
    }

    pub fn mode(&self) -> SaveMode {
        if self.editing_id.is_some() {
            SaveMode::Update
        } else {
            SaveMode::Create
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        match self.mode() {
            SaveMode::Create => "Add New Student",
            SaveMode::Update => "Edit Student",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            return "Processing...";
        }
        match self.mode() {
            SaveMode::Create => "Add",
            SaveMode::Update => "Update",
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Age => &mut self.age,
            FormField::Email => &mut self.email,
        }
    }

    pub fn validate(&self) -> Result<StudentDraft, ValidationError> {
        validate_fields(&self.name, &self.age, &self.email)
    }

    /// Validate and build the save command. Nothing is sent while a
    /// previous submission is in flight or when validation fails.
    pub fn submit(&mut self, request_id: u64) -> Option<NetworkCommand> {
        if self.submitting {
            return None;
        }
        self.error = None;

        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(error = %e, "Form validation failed");
                self.error = Some(e.to_string());
                return None;
            }
        };

        self.submitting = true;
        self.pending_request_id = Some(request_id);

        Some(match self.editing_id {
            Some(student_id) => NetworkCommand::UpdateStudent {
                id: request_id,
                student_id,
                draft,
            },
            None => NetworkCommand::CreateStudent { id: request_id, draft },
        })
    }

    /// Returns true when the response belongs to this form's submission
    pub fn handle_saved(&mut self, request_id: u64) -> bool {
        if self.pending_request_id != Some(request_id) {
            return false;
        }
        self.finish_submit();
        self.clear();
        true
    }

    /// Keep entered values and show the failure inline
    pub fn handle_failed(&mut self, request_id: u64, message: &str) -> bool {
        if self.pending_request_id != Some(request_id) {
            return false;
        }
        self.finish_submit();
        self.error = Some(format!("Error: {}", message));
        true
    }

    fn finish_submit(&mut self) {
        self.submitting = false;
        self.pending_request_id = None;
    }

    fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.email.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, age: &str, email: &str) -> StudentForm {
        StudentForm {
            name: name.into(),
            age: age.into(),
            email: email.into(),
            ..StudentForm::default()
        }
    }

    fn student() -> Student {
        Student {
            id: 42,
            name: "Grace Hopper".into(),
            age: 37,
            email: "grace@navy.mil".into(),
        }
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        for (name, age, email) in [("", "20", "a@x.com"), ("A", "", "a@x.com"), ("A", "20", "")] {
            let mut form = filled(name, age, email);
            assert!(form.submit(1).is_none());
            assert_eq!(form.error.as_deref(), Some("All fields are required"));
            assert!(!form.submitting);
        }
    }

    #[test]
    fn test_bad_age_blocks_submit() {
        for age in ["4", "101", "abc", "12.5", "-7"] {
            let mut form = filled("A", age, "a@x.com");
            assert!(form.submit(1).is_none(), "age {age:?} should be rejected");
            assert_eq!(form.error.as_deref(), Some("Age must be a number between 5 and 100"));
        }
    }

    #[test]
    fn test_missing_fields_reported_before_age() {
        assert_eq!(validate_fields("", "abc", ""), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        assert_eq!(validate_fields("A", "5", "e").unwrap().age, 5);
        assert_eq!(validate_fields("A", "100", "e").unwrap().age, 100);
        assert_eq!(validate_fields("A", " 42 ", "e").unwrap().age, 42);
    }

    #[test]
    fn test_create_submit() {
        let mut form = filled("A", "10", "a@x.com");
        let cmd = form.submit(3).unwrap();
        assert_eq!(
            cmd,
            NetworkCommand::CreateStudent {
                id: 3,
                draft: StudentDraft {
                    name: "A".into(),
                    age: 10,
                    email: "a@x.com".into(),
                },
            }
        );
        assert!(form.submitting);
        assert_eq!(form.submit_label(), "Processing...");
        // A second submit while in flight is ignored
        assert!(form.submit(4).is_none());
    }

    #[test]
    fn test_edit_populate_copies_fields() {
        let mut form = StudentForm::new();
        form.sync_editing(Some(&student()));
        assert_eq!(form.name, "Grace Hopper");
        assert_eq!(form.age, "37");
        assert_eq!(form.email, "grace@navy.mil");
        assert_eq!(form.editing_id, Some(42));
        assert_eq!(form.title(), "Edit Student");
        assert_eq!(form.submit_label(), "Update");
    }

    #[test]
    fn test_edit_submit_targets_student_id() {
        let mut form = StudentForm::new();
        form.sync_editing(Some(&student()));
        form.age = "38".into();
        match form.submit(9) {
            Some(NetworkCommand::UpdateStudent { id, student_id, draft }) => {
                assert_eq!(id, 9);
                assert_eq!(student_id, 42);
                assert_eq!(draft.age, 38);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_leaving_edit_mode_resets_fields() {
        let mut form = StudentForm::new();
        form.sync_editing(Some(&student()));
        form.sync_editing(None);
        assert!(form.name.is_empty() && form.age.is_empty() && form.email.is_empty());
        assert_eq!(form.mode(), SaveMode::Create);
    }

    #[test]
    fn test_saved_clears_form() {
        let mut form = filled("A", "10", "a@x.com");
        form.submit(5);
        assert!(!form.handle_saved(6));
        assert!(form.handle_saved(5));
        assert!(form.name.is_empty() && form.age.is_empty() && form.email.is_empty());
        assert!(!form.submitting);
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut form = filled("A", "10", "a@x.com");
        form.submit(5);
        assert!(form.handle_failed(5, "Email already exists"));
        assert_eq!(form.error.as_deref(), Some("Error: Email already exists"));
        assert_eq!(form.name, "A");
        assert_eq!(form.age, "10");
        assert_eq!(form.email, "a@x.com");
        assert!(!form.submitting);
    }
}
