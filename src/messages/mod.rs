//! Channel payloads between the three loops:
//! key presses become `UiEvent`s, the App actor emits `NetworkCommand`s and
//! `RenderState` snapshots, and the Network actor answers with `NetworkResponse`s.

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
pub use ui_events::{InputMode, Panel, PopupKind, UiEvent};
