//! Command handlers - business logic for processing UI events and responses

use crate::app::AppState;
use crate::app::state::Popup;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.focus(self.active_panel.next());
    }

    pub fn prev_panel(&mut self) {
        self.focus(self.active_panel.prev());
    }

    /// Editing mode follows focus across form inputs and ends on the list
    fn focus(&mut self, panel: Panel) {
        self.active_panel = panel;
        if panel == Panel::List {
            self.input_mode = InputMode::Normal;
        }
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel.form_field().is_some() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        let cursor_pos = self.cursor_position;
        if cursor_pos == 0 {
            return;
        }
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Form
    // ========================

    pub fn submit_form(&mut self) -> Option<NetworkCommand> {
        if self.form.submitting {
            return None;
        }
        self.stop_editing();
        let id = self.next_id();
        self.form.submit(id)
    }

    pub fn cancel_edit(&mut self) {
        if self.editing_student.is_some() {
            tracing::debug!("Edit cancelled");
            self.stop_editing();
            self.set_editing(None);
        }
    }

    // ========================
    // List
    // ========================

    pub fn select_next(&mut self) {
        self.list.select_next();
    }

    pub fn select_prev(&mut self) {
        self.list.select_prev();
    }

    /// Forward the selected row to the form
    pub fn edit_selected(&mut self) {
        if let Some(student) = self.list.selected_student().cloned() {
            tracing::debug!(student_id = student.id, "Editing student");
            self.active_panel = Panel::Name;
            self.input_mode = InputMode::Normal;
            self.set_editing(Some(student));
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(student) = self.list.selected_student() {
            self.popup = Popup::ConfirmDelete {
                student_id: student.id,
                name: student.name.clone(),
            };
        }
    }

    pub fn confirm_delete(&mut self) -> Option<NetworkCommand> {
        let Popup::ConfirmDelete { student_id, .. } = self.popup else {
            return None;
        };
        self.close_confirm();
        let id = self.next_id();
        Some(NetworkCommand::DeleteStudent { id, student_id })
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.popup, Popup::ConfirmDelete { .. }) {
            self.close_confirm();
        }
    }

    fn close_confirm(&mut self) {
        self.popup = match self.pending_alert.take() {
            Some(message) => Popup::Alert(message),
            None => Popup::None,
        };
    }

    /// Manual refresh bumps the shared counter like a save does
    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        self.refresh_trigger += 1;
        self.refresh_list()
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.popup = match self.popup {
            Popup::Help => Popup::None,
            _ => Popup::Help,
        };
    }

    pub fn dismiss_popup(&mut self) {
        if matches!(self.popup, Popup::Help | Popup::Alert(_)) {
            self.popup = Popup::None;
        }
    }

    /// Show a notice; an open delete confirmation keeps the screen until answered
    fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        if matches!(self.popup, Popup::ConfirmDelete { .. }) {
            self.pending_alert = Some(message);
        } else {
            self.popup = Popup::Alert(message);
        }
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a network response; may yield a follow-up command (list refresh)
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::StudentsLoaded { students, .. } => {
                self.list.handle_loaded(students);
                None
            }
            NetworkResponse::FetchFailed { message, .. } => {
                self.list.handle_fetch_failed(&message);
                None
            }
            NetworkResponse::StudentSaved { id, mode, student } => {
                if !self.form.handle_saved(id) {
                    return None;
                }
                tracing::info!(student_id = student.id, ?mode, "Student saved");
                self.alert(mode.success_message());
                self.student_saved()
            }
            NetworkResponse::SaveFailed { id, message } => {
                self.form.handle_failed(id, &message);
                None
            }
            NetworkResponse::StudentDeleted { student_id, .. } => {
                self.list.remove(student_id);
                if self.editing_student.as_ref().map(|s| s.id) == Some(student_id) {
                    self.set_editing(None);
                }
                self.alert("Student deleted successfully!");
                None
            }
            NetworkResponse::DeleteFailed { message, .. } => {
                self.alert(format!("Error deleting student: {}", message));
                None
            }
        }
    }
}
