//! Student REST client - one method per verb/path pair

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::constants::API_BASE_PATH;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{Student, StudentDraft, StudentId};

/// Error body shape returned by the backend on failures
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin wrapper over `reqwest::Client` for `/api/students`
#[derive(Clone, Debug)]
pub struct StudentService {
    client: reqwest::Client,
    endpoint: String,
}

impl StudentService {
    /// `base_url` is the server origin, e.g. `http://localhost:8080`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(create_client(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        StudentService {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), API_BASE_PATH),
        }
    }

    /// Full URL of the collection endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn student_url(&self, id: StudentId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// POST /api/students
    pub async fn create_student(&self, draft: &StudentDraft) -> ServiceResult<Student> {
        let resp = self.client.post(&self.endpoint).json(draft).send().await?;
        decode(resp).await
    }

    /// GET /api/students
    pub async fn get_all_students(&self) -> ServiceResult<Vec<Student>> {
        let resp = self.client.get(&self.endpoint).send().await?;
        decode(resp).await
    }

    /// GET /api/students/{id}
    pub async fn get_student(&self, id: StudentId) -> ServiceResult<Student> {
        let resp = self.client.get(self.student_url(id)).send().await?;
        decode(resp).await
    }

    /// PUT /api/students/{id}
    pub async fn update_student(&self, id: StudentId, draft: &StudentDraft) -> ServiceResult<Student> {
        let resp = self.client.put(self.student_url(id)).json(draft).send().await?;
        decode(resp).await
    }

    /// DELETE /api/students/{id}
    pub async fn delete_student(&self, id: StudentId) -> ServiceResult<()> {
        let resp = self.client.delete(self.student_url(id)).send().await?;
        check_status(resp).await.map(|_| ())
    }
}

/// Turn a non-2xx status into `ServiceError::Server`
async fn check_status(resp: reqwest::Response) -> ServiceResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let status = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ServiceError::Server {
        status,
        message: server_message(status, &body),
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ServiceResult<T> {
    let resp = check_status(resp).await?;
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Prefer the server's `message` field, fall back to a status line
fn server_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

/// Create an HTTP client with default configuration (no timeout)
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let service = StudentService::new("http://localhost:8080/");
        assert_eq!(service.endpoint(), "http://localhost:8080/api/students");
        assert_eq!(service.student_url(4), "http://localhost:8080/api/students/4");
    }

    #[test]
    fn test_server_message_prefers_body_message() {
        let body = r#"{"message":"Student not found","status":404}"#;
        assert_eq!(server_message(404, body), "Student not found");
    }

    #[test]
    fn test_server_message_fallback() {
        assert_eq!(server_message(500, "<html>oops</html>"), "Request failed with status code 500");
        assert_eq!(server_message(400, r#"{"message":""}"#), "Request failed with status code 400");
    }
}
