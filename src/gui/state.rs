//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use iced::keyboard::Modifiers;

use crate::core::markup::{Markup, MarkupError};
use crate::core::mockup;
use crate::core::playlist::Playlist;
use crate::core::types::NowPlaying;

pub(crate) const WINDOW_TITLE: &str = "Music Player";

/// Default window size (pixels)
pub(crate) const WINDOW_SIZE: (f32, f32) = (400.0, 500.0);

/// A playlist row being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Drag {
    /// Row the press started on.
    pub from: usize,
    /// Row the pointer is over now; the drop position.
    /// Reset to `from` when the pointer leaves the list, which cancels the drop.
    pub over: usize,
}

/// App state
#[derive(Debug, Clone)]
pub(crate) struct MockupPlayer {
    /// Pressed state of the play/pause toggle. Nothing plays.
    pub playing: bool,

    pub playlist: Playlist,

    // Now playing
    pub now_playing: NowPlaying,
    /// Parsed once; the snapshot never changes.
    pub now_playing_label: Markup,

    // Input tracking
    pub modifiers: Modifiers,
    pub drag: Option<Drag>,
}

impl MockupPlayer {
    /// Build the window's state from the hardcoded mockup data.
    pub(crate) fn new() -> Result<Self, MarkupError> {
        let now_playing = mockup::now_playing();
        let now_playing_label = now_playing.markup()?;

        Ok(Self {
            playing: false,
            playlist: mockup::playlist()?,
            now_playing,
            now_playing_label,
            modifiers: Modifiers::empty(),
            drag: None,
        })
    }

    /// Window title handed to iced.
    pub(crate) fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Toolbar
    TogglePlayPause,
    Previous,
    Next,
    AddSongs,

    // Playlist
    RowPressed(usize),
    RowHovered(usize),
    PointerLeftList,
    PointerReleased,

    // Keyboard
    ModifiersChanged(Modifiers),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_titled_music_player() {
        let state = MockupPlayer::new().unwrap();
        assert_eq!(state.title(), "Music Player");
    }

    #[test]
    fn starts_paused_with_mockup_data() {
        let state = MockupPlayer::new().unwrap();

        assert!(!state.playing);
        assert!(state.drag.is_none());
        assert_eq!(state.playlist.rows().len(), 2);
        assert_eq!(state.now_playing_label.plain_text(), "Dreamy Days\nRoots Manuva");
    }
}
