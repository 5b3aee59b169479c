//! Music Player mockup
//!
//! # What this program is
//! A static layout demo of a desktop music player, built with `iced`:
//! a toolbar, a "now playing" panel and a playlist with two hardcoded rows.
//! Nothing plays, nothing is loaded from disk.
//!
//! # How it is put together
//! - `core` = plain data: icons, markup labels, the playlist model, the mockup content
//! - `gui`  = iced state / message / update / view / subscription
//!
//! The app repeats this forever:
//! **Message happens -> update changes state -> view redraws**
//!
//! The only messages with visible effect are the play/pause toggle, row
//! selection and drag-reordering the playlist. Everything else is layout.

mod core;
mod error;
mod gui;
mod logging;

use tracing::info;

use crate::error::AppError;
use crate::gui::MockupPlayer;

fn main() -> Result<(), AppError> {
    logging::init()?;

    // Parse the hardcoded labels up front so bad markup fails before a window opens.
    let state = MockupPlayer::new()?;
    info!(rows = state.playlist.rows().len(), "opening window");

    iced::application(move || state.clone(), gui::update, gui::view)
        .title(MockupPlayer::title)
        .window_size(gui::WINDOW_SIZE)
        .subscription(gui::subscription)
        .run()?;

    info!("window closed");
    Ok(())
}
