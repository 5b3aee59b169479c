//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('MockupPlayer')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (modifier keys, pointer release)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::{MockupPlayer, WINDOW_SIZE};
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
