//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No markup parsing code (that lives in `markup.rs`)
//!
//! 'PlaylistRow' is ONE line in the playlist; 'NowPlaying' is the snapshot
//! shown above it.

use super::markup::{Markup, MarkupError};

/// Stock images the mockup draws.
///
/// The GUI turns these into glyphs; there are no image files to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockIcon {
    MediaPlay,
    MediaPause,
    MediaPrevious,
    MediaNext,
    Add,
    MissingImage,
}

impl StockIcon {
    /// Unicode glyph used when rendering the icon as text.
    pub fn glyph(self) -> &'static str {
        match self {
            StockIcon::MediaPlay => "▶",
            StockIcon::MediaPause => "⏸",
            StockIcon::MediaPrevious => "⏮",
            StockIcon::MediaNext => "⏭",
            StockIcon::Add => "+",
            StockIcon::MissingImage => "♪",
        }
    }
}

/// Icon sizes, in the same three steps desktop toolkits use for stock icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// List rows and menus.
    Menu,
    /// Inside buttons.
    Button,
    /// Large artwork (dialogs, the now-playing panel).
    Dialog,
}

impl IconSize {
    pub fn pixels(self) -> f32 {
        match self {
            IconSize::Menu => 16.0,
            IconSize::Button => 20.0,
            IconSize::Dialog => 48.0,
        }
    }
}

/// One playlist line: an optional icon and a rich-text label.
///
/// Rows have no id. Their position in the playlist is the only identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRow {
    pub icon: Option<StockIcon>,
    pub label: Markup,
}

impl PlaylistRow {
    pub fn new(icon: Option<StockIcon>, label: &str) -> Result<Self, MarkupError> {
        Ok(Self {
            icon,
            label: Markup::parse(label)?,
        })
    }
}

/// The "now playing" snapshot.
///
/// Not derived from the playlist; set once at startup and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Album art. The mockup only has placeholders.
    pub art: StockIcon,
    pub title: String,
    pub artist: String,
}

impl NowPlaying {
    /// Big bold title on the first line, artist on the second.
    pub fn markup(&self) -> Result<Markup, MarkupError> {
        Markup::parse(&format!(
            "<big><b>{}</b></big>\n{}",
            Markup::escape(&self.title),
            Markup::escape(&self.artist)
        ))
    }
}
