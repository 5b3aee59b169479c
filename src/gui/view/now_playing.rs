//! "Now playing" panel: art placeholder + title/artist label, top-left aligned.

use iced::Alignment;
use iced::widget::{Row, row};

use super::super::state::{Message, MockupPlayer};
use super::constants::{LABEL_TEXT, SPACING};
use super::widgets::{cover_placeholder, markup_label};

pub(crate) fn build_now_playing(state: &MockupPlayer) -> Row<'_, Message> {
    row![
        cover_placeholder(state.now_playing.art),
        markup_label(&state.now_playing_label, LABEL_TEXT),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Start)
}
