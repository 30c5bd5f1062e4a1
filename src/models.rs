use serde::{Deserialize, Serialize};

/// Server-assigned student identifier
pub type StudentId = i64;

/// A student record as returned by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Request body for create and update. The id travels in the path, never here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        StudentDraft {
            name: student.name.clone(),
            age: student.age,
            email: student.email.clone(),
        }
    }
}

/// Which kind of save the form performed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

impl SaveMode {
    /// Confirmation shown after the server accepted the save
    pub fn success_message(&self) -> &'static str {
        match self {
            SaveMode::Create => "Student added successfully!",
            SaveMode::Update => "Student updated successfully!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_from_server_json() {
        let json = r#"{"id":1,"name":"A","age":10,"email":"a@x.com"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, 1);
        assert_eq!(student.name, "A");
        assert_eq!(student.age, 10);
        assert_eq!(student.email, "a@x.com");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let student = Student {
            id: 7,
            name: "Ada".into(),
            age: 21,
            email: "ada@example.com".into(),
        };
        let value = serde_json::to_value(StudentDraft::from(&student)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Ada", "age": 21, "email": "ada@example.com"})
        );
    }
}
