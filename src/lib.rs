//! # Rollcall
//!
//! A terminal front-end for a student records REST API.
//!
//! ## Features
//! - Add, edit and delete students (name, age, email)
//! - Client-side validation before anything is sent
//! - Live list that re-fetches after every save
//! - One-shot CLI subcommands for scripting
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (form + list coordinated by a root state)
//! - Network Layer (Tokio runtime, reqwest)

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, StudentForm, StudentList};
pub use config::Config;
pub use error::{ServiceError, ValidationError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{SaveMode, Student, StudentDraft, StudentId};
pub use network::{NetworkActor, StudentService};
