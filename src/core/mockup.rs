//! The hardcoded data the window is built from.
//!
//! Nothing here is loaded from disk; these are the two playlist rows and the
//! "now playing" snapshot the layout is demonstrated with.

use super::markup::MarkupError;
use super::playlist::{Playlist, ViewOptions};
use super::types::{NowPlaying, PlaylistRow, StockIcon};

/// Playlist view flags: multi-select, drag to reorder, no column headers.
pub const PLAYLIST_OPTIONS: ViewOptions = ViewOptions {
    multi_select: true,
    reorderable: true,
    headers_visible: false,
};

pub fn playlist() -> Result<Playlist, MarkupError> {
    let mut playlist = Playlist::new(PLAYLIST_OPTIONS);
    playlist.insert(
        0,
        PlaylistRow::new(Some(StockIcon::MediaPlay), "<b>Dreamy Days</b>\nRoots Manuva")?,
    );
    playlist.insert(1, PlaylistRow::new(None, "Hadjaha")?);
    Ok(playlist)
}

pub fn now_playing() -> NowPlaying {
    NowPlaying {
        art: StockIcon::MissingImage,
        title: "Dreamy Days".to_string(),
        artist: "Roots Manuva".to_string(),
    }
}
