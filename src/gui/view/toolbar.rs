//! Toolbar: play/pause toggle, previous, next on the left; "Add Songs" on
//! the right.
//!
//! The controls are described by a static table so layout and tests read the
//! same source.

use iced::alignment::Horizontal;
use iced::widget::{Row, button, container, row};
use iced::{Element, Length};

use super::super::state::{Message, MockupPlayer};
use super::constants::SPACING;
use super::widgets::icon_label_row;
use crate::core::types::StockIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlKind {
    /// Stays pressed until clicked again.
    Toggle,
    Button,
}

/// Which end of the toolbar a control is packed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pack {
    Start,
    End,
}

#[derive(Debug, Clone)]
pub(crate) struct ToolbarControl {
    pub kind: ControlKind,
    pub icons: &'static [StockIcon],
    pub label: Option<&'static str>,
    pub pack: Pack,
    pub message: Message,
}

pub(crate) fn controls() -> [ToolbarControl; 4] {
    [
        ToolbarControl {
            kind: ControlKind::Toggle,
            icons: &[StockIcon::MediaPlay, StockIcon::MediaPause],
            label: None,
            pack: Pack::Start,
            message: Message::TogglePlayPause,
        },
        ToolbarControl {
            kind: ControlKind::Button,
            icons: &[StockIcon::MediaPrevious],
            label: None,
            pack: Pack::Start,
            message: Message::Previous,
        },
        ToolbarControl {
            kind: ControlKind::Button,
            icons: &[StockIcon::MediaNext],
            label: None,
            pack: Pack::Start,
            message: Message::Next,
        },
        ToolbarControl {
            kind: ControlKind::Button,
            icons: &[StockIcon::Add],
            label: Some("Add Songs"),
            pack: Pack::End,
            message: Message::AddSongs,
        },
    ]
}

pub(crate) fn build_toolbar(state: &MockupPlayer) -> Row<'_, Message> {
    let mut start = row![].spacing(SPACING);
    let mut end = row![].spacing(SPACING);

    for control in controls() {
        let pack = control.pack;
        let widget = control_button(state, control);
        match pack {
            Pack::Start => start = start.push(widget),
            Pack::End => end = end.push(widget),
        }
    }

    row![
        start,
        container(end)
            .width(Length::Fill)
            .align_x(Horizontal::Right),
    ]
    .spacing(SPACING)
}

fn control_button(state: &MockupPlayer, control: ToolbarControl) -> Element<'static, Message> {
    let b = button(icon_label_row(control.icons, control.label)).on_press(control.message);

    match control.kind {
        ControlKind::Toggle if state.playing => b.style(button::primary).into(),
        ControlKind::Toggle | ControlKind::Button => b.style(button::secondary).into(),
    }
}
