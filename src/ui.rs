//! Terminal drawing - renders a `RenderState` snapshot

use ratatui::{prelude::*, widgets::*};

use crate::app::form::{FormField, StudentForm};
use crate::app::list::StudentList;
use crate::app::state::Popup;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, main_chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    draw_form(f, state, body[0]);
    draw_list(f, state, body[1]);
    draw_status_bar(f, state, main_chunks[2]);

    match &state.popup {
        Popup::None => {}
        Popup::Help => draw_help_popup(f, area),
        Popup::Alert(message) => draw_alert_popup(f, message, area),
        Popup::ConfirmDelete { student_id, name } => {
            draw_confirm_popup(f, *student_id, name, area)
        }
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn focus_style(focused: bool, editing: bool) -> Style {
    if focused && editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let form = &state.form;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title()))
        .title_style(Style::default().bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Error
            Constraint::Length(3), // Name
            Constraint::Length(3), // Age
            Constraint::Length(3), // Email
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    if let Some(error) = &form.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[0],
        );
    }

    let inputs = [
        (FormField::Name, Panel::Name, " Name ", "Enter student name"),
        (FormField::Age, Panel::Age, " Age ", "Enter age"),
        (FormField::Email, Panel::Email, " Email ", "Enter email"),
    ];
    for ((field, panel, label, placeholder), rect) in inputs.into_iter().zip(&rows[1..4]) {
        draw_input(f, state, form, field, panel, label, placeholder, *rect);
    }

    draw_buttons(f, form, rows[4]);
}

#[allow(clippy::too_many_arguments)]
fn draw_input(
    f: &mut Frame,
    state: &RenderState,
    form: &StudentForm,
    field: FormField,
    panel: Panel,
    label: &str,
    placeholder: &str,
    area: Rect,
) {
    let focused = state.active_panel == panel;
    let editing = focused && state.input_mode == InputMode::Editing;
    let value = form.field(field);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused, editing))
        .title(label);

    let content = if value.is_empty() && !editing {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value)
    };
    f.render_widget(content.block(block), area);

    if editing {
        let cursor = state.cursor_position.min(value.len());
        let column = value[..cursor].chars().count() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + column + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_buttons(f: &mut Frame, form: &StudentForm, area: Rect) {
    let submit_style = if form.submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    };

    let mut spans = vec![Span::styled(format!(" [s] {} ", form.submit_label()), submit_style)];
    if form.is_editing() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(" [c] Cancel ", Style::default().fg(Color::Black).bg(Color::Gray)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let list = &state.list;
    let focused = state.active_panel == Panel::List;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused, false))
        .title(format!(" Student List ({}) ", list.len()))
        .title_style(Style::default().bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    if let Some(error) = &list.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[0],
        );
    }

    if list.loading {
        f.render_widget(
            Paragraph::new("Loading students...").style(Style::default().fg(Color::Yellow)),
            chunks[1],
        );
    } else if list.is_empty() {
        f.render_widget(
            Paragraph::new("No students found. Add a new student to get started!")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            chunks[1],
        );
    } else {
        draw_table(f, list, focused, chunks[1]);
    }
}

fn draw_table(f: &mut Frame, list: &StudentList, focused: bool, area: Rect) {
    let header = Row::new(["ID", "Name", "Age", "Email"])
        .style(Style::default().fg(Color::Cyan).bold());

    let rows: Vec<Row> = list
        .students
        .iter()
        .map(|s| {
            Row::new([
                s.id.to_string(),
                s.name.clone(),
                s.age.to_string(),
                s.email.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(35),
        Constraint::Length(5),
        Constraint::Min(10),
    ];

    let highlight = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(highlight)
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(list.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.form.submitting {
        " Processing... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field | Enter:submit "
    } else if state.active_panel == Panel::List {
        " ↑/↓:select | e:edit | d:delete | r:refresh | Tab:form | ?:help | q:quit "
    } else {
        " Tab:next | e:edit field | s:submit | c:cancel edit | ?:help | q:quit "
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(at) = state.list.last_fetched {
        spans.push(Span::styled(
            format!(" refreshed {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray).italic(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 KEYBOARD SHORTCUTS

 NAVIGATION
   Tab / Shift+Tab    Move between Name, Age, Email and the list
   ↑ / ↓              Select a student (list)

 FORM
   e / Enter          Edit focused field
   s                  Add or update
   c                  Cancel editing a student
   Esc                Stop editing field

 LIST
   e / Enter          Edit selected student
   d                  Delete selected student
   r                  Refresh

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notice ")
        .style(Style::default().bg(Color::Black));

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(Color::DarkGray))),
    ];
    let alert = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, student_id: i64, name: &str, area: Rect) {
    let popup_area = centered_rect(50, 25, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Confirm ")
        .style(Style::default().bg(Color::Black));

    let text = vec![
        Line::from("Are you sure you want to delete this student?"),
        Line::from(""),
        Line::from(Span::styled(format!("{} (#{})", name, student_id), Style::default().bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red).bold()),
            Span::raw(": delete   "),
            Span::styled("n", Style::default().fg(Color::Green).bold()),
            Span::raw(": keep"),
        ]),
    ];
    let confirm = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(confirm, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_one_student() {
        let mut state = RenderState::default();
        state.list.handle_loaded(vec![Student {
            id: 1,
            name: "A".into(),
            age: 10,
            email: "a@x.com".into(),
        }]);

        let text = render(&state);
        assert!(text.contains("Student List (1)"));
        assert!(text.contains("a@x.com"));
        assert!(text.contains("Add New Student"));
    }

    #[test]
    fn test_renders_empty_and_loading() {
        let mut state = RenderState::default();
        assert!(render(&state).contains("No students found."));

        state.list.loading = true;
        assert!(render(&state).contains("Loading students..."));
    }

    #[test]
    fn test_renders_edit_mode_and_confirm() {
        let mut state = RenderState::default();
        let student = Student {
            id: 3,
            name: "Linus".into(),
            age: 21,
            email: "l@x.com".into(),
        };
        state.form.sync_editing(Some(&student));
        state.popup = Popup::ConfirmDelete {
            student_id: 3,
            name: "Linus".into(),
        };

        let text = render(&state);
        assert!(text.contains("Edit Student"));
        assert!(text.contains("Update"));
        assert!(text.contains("Linus (#3)"));
    }
}
