//! Render state - data structure sent from App layer to UI for rendering

use crate::app::form::StudentForm;
use crate::app::list::StudentList;
use crate::app::state::Popup;
use crate::messages::ui_events::{InputMode, Panel, PopupKind};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Focus
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Components
    pub form: StudentForm,
    pub list: StudentList,

    // Coordination
    pub refresh_trigger: u64,

    // Popups
    pub popup: Popup,
}

impl RenderState {
    pub fn popup_kind(&self) -> PopupKind {
        self.popup.kind()
    }
}
