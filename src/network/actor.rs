//! Network actor - runs student API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::SaveMode;
use crate::network::client::StudentService;

/// Network actor that turns commands into REST calls
pub struct NetworkActor {
    service: StudentService,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(service: StudentService, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            service,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                        Some(cmd) => {
                            let service = self.service.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                if let Some(result) = execute(&service, cmd).await {
                                    let _ = response_tx.send(result);
                                }
                            });
                        }
                    }
                }

                // Reap finished tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

/// Run one command against the service and map the outcome to a response
pub async fn execute(service: &StudentService, cmd: NetworkCommand) -> Option<NetworkResponse> {
    let response = match cmd {
        NetworkCommand::FetchStudents { id } => {
            tracing::info!(id, url = %service.endpoint(), "Fetching students");
            match service.get_all_students().await {
                Ok(students) => {
                    tracing::info!(id, count = students.len(), "Students fetched");
                    NetworkResponse::StudentsLoaded { id, students }
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "Error fetching students");
                    NetworkResponse::FetchFailed { id, message: e.transport_message() }
                }
            }
        }

        NetworkCommand::CreateStudent { id, draft } => {
            tracing::info!(id, name = %draft.name, "Creating student");
            match service.create_student(&draft).await {
                Ok(student) => NetworkResponse::StudentSaved {
                    id,
                    mode: SaveMode::Create,
                    student,
                },
                Err(e) => {
                    tracing::warn!(id, error = %e, "Error saving student");
                    NetworkResponse::SaveFailed { id, message: e.to_string() }
                }
            }
        }

        NetworkCommand::UpdateStudent { id, student_id, draft } => {
            tracing::info!(id, student_id, "Updating student");
            match service.update_student(student_id, &draft).await {
                Ok(student) => NetworkResponse::StudentSaved {
                    id,
                    mode: SaveMode::Update,
                    student,
                },
                Err(e) => {
                    tracing::warn!(id, student_id, error = %e, "Error saving student");
                    NetworkResponse::SaveFailed { id, message: e.to_string() }
                }
            }
        }

        NetworkCommand::DeleteStudent { id, student_id } => {
            tracing::info!(id, student_id, "Deleting student");
            match service.delete_student(student_id).await {
                Ok(()) => NetworkResponse::StudentDeleted { id, student_id },
                Err(e) => {
                    tracing::warn!(id, student_id, error = %e, "Error deleting student");
                    NetworkResponse::DeleteFailed {
                        id,
                        student_id,
                        message: e.transport_message(),
                    }
                }
            }
        }

        NetworkCommand::Shutdown => return None,
    };

    Some(response)
}
