//! core/mod.rs
//!
//! Everything the window shows, as plain data:
//! - stock icons and row/now-playing types
//! - the rich-text markup labels are written in
//! - the playlist model (rows, selection, reorder)
//! - the hardcoded mockup content
//!
//! No iced types in here; the GUI layer turns these into widgets.

pub mod markup;
pub mod mockup;
pub mod playlist;
pub mod types;
