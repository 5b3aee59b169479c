//! View constants (layout/sizing).

/// Window border and the gap between the three stacked regions.
pub(crate) const BORDER: f32 = 4.0;
pub(crate) const SPACING: f32 = 4.0;

// text
pub(crate) const LABEL_TEXT: f32 = 14.0;
pub(crate) const HEADER_TEXT: f32 = 13.0;

// playlist rows
pub(crate) const ROW_VPAD: f32 = 2.0;
pub(crate) const ROW_HPAD: f32 = 4.0;
pub(crate) const ROW_SPACING: f32 = 6.0;
pub(crate) const LIST_SPACING: f32 = 1.0;

pub(crate) const DROP_BORDER: f32 = 1.0;
