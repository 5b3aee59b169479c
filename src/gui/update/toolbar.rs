//! gui/update/toolbar.rs
//!
//! The toggle keeps its own pressed state. Previous, next and "Add Songs"
//! are deliberately not connected to anything.

use iced::Task;
use tracing::debug;

use super::super::state::{Message, MockupPlayer};

pub(crate) fn toggle_play_pause(state: &mut MockupPlayer) -> Task<Message> {
    state.playing = !state.playing;
    debug!(playing = state.playing, "play/pause toggled");
    Task::none()
}

pub(crate) fn unwired(control: &'static str) -> Task<Message> {
    debug!(control, "toolbar button has no action in the mockup");
    Task::none()
}
