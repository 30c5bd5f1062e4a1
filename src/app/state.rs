//! App state - the root that coordinates the form and the list
//!
//! `refresh_trigger` and `editing_student` are the only shared state. Children
//! never talk to each other; every change goes through the setters here so the
//! form and list see it.

use crate::app::form::StudentForm;
use crate::app::list::StudentList;
use crate::messages::ui_events::{InputMode, Panel, PopupKind};
use crate::messages::{NetworkCommand, RenderState};
use crate::models::{Student, StudentId};

/// Modal overlay
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Popup {
    #[default]
    None,
    Help,
    /// Blocking notice, dismissed by any key
    Alert(String),
    ConfirmDelete { student_id: StudentId, name: String },
}

impl Popup {
    pub fn kind(&self) -> PopupKind {
        match self {
            Popup::None => PopupKind::None,
            Popup::Help => PopupKind::Help,
            Popup::Alert(_) => PopupKind::Alert,
            Popup::ConfirmDelete { .. } => PopupKind::ConfirmDelete,
        }
    }
}

/// Main application state - pure data, no I/O
#[derive(Default)]
pub struct AppState {
    // Shared coordination state
    pub refresh_trigger: u64,
    pub editing_student: Option<Student>,

    // Components
    pub form: StudentForm,
    pub list: StudentList,

    // Focus and editing
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    pub popup: Popup,
    /// Notice held back while a delete confirmation is open
    pub pending_alert: Option<String>,
    pub next_request_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            next_request_id: 1,
            ..Default::default()
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Set or clear the student being edited and push it to the form
    pub fn set_editing(&mut self, student: Option<Student>) {
        self.form.sync_editing(student.as_ref());
        self.editing_student = student;
        self.cursor_position = self.current_input().len();
    }

    /// Issue a list fetch if the refresh counter moved since the last one
    pub fn refresh_list(&mut self) -> Option<NetworkCommand> {
        if !self.list.is_stale(self.refresh_trigger) {
            return None;
        }
        let id = self.next_id();
        Some(self.list.begin_fetch(self.refresh_trigger, id))
    }

    /// Parent callback for a completed save: refresh the list, leave edit mode
    pub fn student_saved(&mut self) -> Option<NetworkCommand> {
        self.refresh_trigger += 1;
        self.set_editing(None);
        self.refresh_list()
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel.form_field() {
            Some(field) => self.form.field(field),
            None => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_panel.form_field() {
            Some(field) => Some(self.form.field_mut(field)),
            None => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            form: self.form.clone(),
            list: self.list.clone(),
            refresh_trigger: self.refresh_trigger,
            popup: self.popup.clone(),
        }
    }
}
