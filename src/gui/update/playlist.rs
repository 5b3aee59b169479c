//! gui/update/playlist.rs
//!
//! Selection + drag-reorder.
//!
//! - Press selects right away (modifiers decide how). Only a plain press
//!   arms a drag; ctrl/shift presses just edit the selection.
//! - Hover while armed moves the drop target.
//! - Leaving the list puts the drop target back on the start row.
//! - Release anywhere in the window drops; dropping on the start row is a no-op.

use iced::Task;
use iced::keyboard::Modifiers;
use tracing::debug;

use super::super::state::{Drag, Message, MockupPlayer};
use crate::core::playlist::ClickKind;

pub(crate) fn row_pressed(state: &mut MockupPlayer, index: usize) -> Task<Message> {
    let kind = click_kind(state.modifiers);
    if !state.playlist.click(index, kind) {
        return Task::none();
    }

    if kind == ClickKind::Replace && state.playlist.options().reorderable {
        state.drag = Some(Drag {
            from: index,
            over: index,
        });
    }

    Task::none()
}

pub(crate) fn row_hovered(state: &mut MockupPlayer, index: usize) -> Task<Message> {
    if let Some(drag) = state.drag.as_mut() {
        drag.over = index;
    }
    Task::none()
}

pub(crate) fn pointer_left_list(state: &mut MockupPlayer) -> Task<Message> {
    if let Some(drag) = state.drag.as_mut() {
        drag.over = drag.from;
    }
    Task::none()
}

pub(crate) fn pointer_released(state: &mut MockupPlayer) -> Task<Message> {
    let Some(drag) = state.drag.take() else {
        return Task::none();
    };

    if drag.from != drag.over && state.playlist.move_row(drag.from, drag.over) {
        let label = state.playlist.rows()[drag.over].label.plain_text();
        debug!(from = drag.from, to = drag.over, row = %label, "playlist row moved");
    }

    Task::none()
}

fn click_kind(modifiers: Modifiers) -> ClickKind {
    if modifiers.shift() {
        ClickKind::Extend
    } else if modifiers.command() || modifiers.control() {
        ClickKind::Toggle
    } else {
        ClickKind::Replace
    }
}
