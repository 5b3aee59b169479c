//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Top to bottom: toolbar, now-playing panel, playlist (takes the rest).

mod constants;
mod now_playing;
mod playlist;
mod toolbar;
mod widgets;

use iced::widget::{Column, column};

use super::state::{Message, MockupPlayer};
use constants::{BORDER, SPACING};

pub(crate) fn view(state: &MockupPlayer) -> Column<'_, Message> {
    let toolbar = toolbar::build_toolbar(state);
    let now_playing = now_playing::build_now_playing(state);
    let playlist = playlist::build_playlist(state);

    column![toolbar, now_playing, playlist]
        .spacing(SPACING)
        .padding(BORDER)
}
