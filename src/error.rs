//! Error types surfaced to the user
//!
//! `ValidationError` blocks a submission before any request leaves the app.
//! `ServiceError` wraps whatever the transport or the server reported.

use thiserror::Error;

/// Client-side form validation failures, checked in declaration order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Age must be a number between 5 and 100")]
    AgeOutOfRange,
}

/// Failures from the student REST API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Result type alias for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Transport-level text: the status line for server errors, ignoring any body message
    pub fn transport_message(&self) -> String {
        match self {
            ServiceError::Server { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingFields.to_string(), "All fields are required");
        assert_eq!(
            ValidationError::AgeOutOfRange.to_string(),
            "Age must be a number between 5 and 100"
        );
    }

    #[test]
    fn test_server_error_displays_message_verbatim() {
        let err = ServiceError::Server {
            status: 409,
            message: "Email already exists".into(),
        };
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn test_transport_message_ignores_body() {
        let err = ServiceError::Server {
            status: 404,
            message: "Student not found".into(),
        };
        assert_eq!(err.transport_message(), "Request failed with status code 404");

        let err = ServiceError::Network("connection refused".into());
        assert_eq!(err.transport_message(), "connection refused");
    }
}
