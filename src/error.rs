//! Top-level error type; anything here ends the process.

use thiserror::Error;

use crate::core::markup::MarkupError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("built-in mockup data has bad markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("could not install log subscriber: {0}")]
    Logging(String),

    #[error("windowing toolkit failed: {0}")]
    Window(#[from] iced::Error),
}
