//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::form::FormField;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Form
    Submit,
    CancelEdit,

    // List
    SelectNext,
    SelectPrev,
    EditSelected,
    RequestDelete,
    Refresh,

    // Popups
    ConfirmDelete,
    CancelDelete,
    DismissPopup,
    ToggleHelp,

    // System
    Quit,
}

/// Focusable panel: the three form inputs, then the list
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Name,
    Age,
    Email,
    List,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Name => Panel::Age,
            Panel::Age => Panel::Email,
            Panel::Email => Panel::List,
            Panel::List => Panel::Name,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Name => Panel::List,
            Panel::Age => Panel::Name,
            Panel::Email => Panel::Age,
            Panel::List => Panel::Email,
        }
    }

    /// The form input behind this panel, if any
    pub fn form_field(&self) -> Option<FormField> {
        match self {
            Panel::Name => Some(FormField::Name),
            Panel::Age => Some(FormField::Age),
            Panel::Email => Some(FormField::Email),
            Panel::List => None,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Which popup currently captures keys
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PopupKind {
    #[default]
    None,
    Help,
    Alert,
    ConfirmDelete,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    popup: PopupKind,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    match popup {
        PopupKind::Help | PopupKind::Alert => return Some(UiEvent::DismissPopup),
        PopupKind::ConfirmDelete => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(UiEvent::ConfirmDelete),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(UiEvent::CancelDelete),
                _ => None,
            };
        }
        PopupKind::None => {}
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            KeyCode::Char('c') => Some(UiEvent::CancelEdit),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::List => Some(UiEvent::EditSelected),
                _ => Some(UiEvent::StartEditing),
            },
            KeyCode::Char('d') if active_panel == Panel::List => Some(UiEvent::RequestDelete),
            KeyCode::Up => match active_panel {
                Panel::List => Some(UiEvent::SelectPrev),
                _ => Some(UiEvent::PrevPanel),
            },
            KeyCode::Down => match active_panel {
                Panel::List => Some(UiEvent::SelectNext),
                _ => Some(UiEvent::NextPanel),
            },
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Enter => Some(UiEvent::Submit),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
