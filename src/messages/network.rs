//! Network messages - communication between App and Network layers

use crate::models::{SaveMode, Student, StudentDraft, StudentId};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// GET the full student list
    FetchStudents { id: u64 },
    /// POST a new student
    CreateStudent { id: u64, draft: StudentDraft },
    /// PUT over an existing student
    UpdateStudent {
        id: u64,
        student_id: StudentId,
        draft: StudentDraft,
    },
    /// DELETE a student
    DeleteStudent { id: u64, student_id: StudentId },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    StudentsLoaded { id: u64, students: Vec<Student> },
    FetchFailed { id: u64, message: String },
    StudentSaved {
        id: u64,
        mode: SaveMode,
        student: Student,
    },
    SaveFailed { id: u64, message: String },
    StudentDeleted { id: u64, student_id: StudentId },
    DeleteFailed {
        id: u64,
        student_id: StudentId,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::StudentsLoaded { id, .. } => *id,
            NetworkResponse::FetchFailed { id, .. } => *id,
            NetworkResponse::StudentSaved { id, .. } => *id,
            NetworkResponse::SaveFailed { id, .. } => *id,
            NetworkResponse::StudentDeleted { id, .. } => *id,
            NetworkResponse::DeleteFailed { id, .. } => *id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NetworkResponse::FetchFailed { .. }
                | NetworkResponse::SaveFailed { .. }
                | NetworkResponse::DeleteFailed { .. }
        )
    }
}
