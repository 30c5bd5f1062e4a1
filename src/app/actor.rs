//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Initial list load
        let mount = self.state.refresh_list();
        self.dispatch(mount);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    if response.is_error() {
                        tracing::debug!(id = response.id(), "Request failed");
                    }
                    let follow_up = self.state.handle_response(response);
                    self.dispatch(follow_up);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn dispatch(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if should quit
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        tracing::debug!(?event, "UI event");
        match event {
            // Panel navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Form
            UiEvent::Submit => {
                let cmd = self.state.submit_form();
                self.dispatch(cmd);
            }
            UiEvent::CancelEdit => self.state.cancel_edit(),

            // List
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::EditSelected => self.state.edit_selected(),
            UiEvent::RequestDelete => self.state.request_delete(),
            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                self.dispatch(cmd);
            }

            // Popups
            UiEvent::ConfirmDelete => {
                let cmd = self.state.confirm_delete();
                self.dispatch(cmd);
            }
            UiEvent::CancelDelete => self.state.cancel_delete(),
            UiEvent::DismissPopup => self.state.dismiss_popup(),
            UiEvent::ToggleHelp => self.state.toggle_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_actor_mounts_and_guards_invalid_submit() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_tx, mut net_rx) = mpsc::unbounded_channel();
        let (_resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(AppActor::new(net_tx, render_tx).run(ui_rx, resp_rx));

        ui_tx.send(UiEvent::StartEditing).unwrap();
        ui_tx.send(UiEvent::CharInput('A')).unwrap();
        ui_tx.send(UiEvent::Submit).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = net_rx.try_recv() {
            commands.push(cmd);
        }
        assert_eq!(
            commands,
            vec![NetworkCommand::FetchStudents { id: 1 }, NetworkCommand::Shutdown]
        );

        let mut last = None;
        while let Ok(state) = render_rx.try_recv() {
            last = Some(state);
        }
        let last = last.unwrap();
        assert_eq!(last.form.name, "A");
        assert_eq!(last.form.error.as_deref(), Some("All fields are required"));
    }
}
