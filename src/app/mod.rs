//! App layer - the root component and its two children
//!
//! The App actor receives UI events and network responses, updates the
//! form and list through `AppState`, and emits network commands and render
//! state.

pub mod actor;
pub mod commands;
pub mod form;
pub mod list;
pub mod state;

pub use actor::AppActor;
pub use form::{validate_fields, StudentForm};
pub use list::StudentList;
pub use state::AppState;
