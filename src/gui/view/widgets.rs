//! Reusable small widgets/helpers used across view modules.

use iced::font::{Style, Weight};
use iced::widget::{Column, Row, Text, column, container, row, text};
use iced::{Alignment, Font, Length};

use super::super::state::Message;
use crate::core::markup::{Markup, Span};
use crate::core::types::{IconSize, StockIcon};

pub(crate) fn icon(icon: StockIcon, size: IconSize) -> Text<'static> {
    text(icon.glyph()).size(size.pixels())
}

/// Fixed-width icon slot; empty when the row has no icon so labels line up.
pub(crate) fn icon_cell(
    maybe: Option<StockIcon>,
    size: IconSize,
) -> iced::widget::Container<'static, Message> {
    let inner = match maybe {
        Some(i) => icon(i, size),
        None => text(""),
    };

    container(inner).center_x(Length::Fixed(size.pixels() + 4.0))
}

/// Square placeholder for album art.
pub(crate) fn cover_placeholder(art: StockIcon) -> iced::widget::Container<'static, Message> {
    let size = IconSize::Dialog.pixels() + 8.0;

    container(icon(art, IconSize::Dialog))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
}

/// Draw parsed markup: one row of styled text pieces per line.
pub(crate) fn markup_label(markup: &Markup, base: f32) -> Column<'_, Message> {
    let mut col = column![].spacing(2);

    for line in markup.lines() {
        let mut pieces = row![].align_y(Alignment::End);
        for span in line {
            pieces = pieces.push(styled(span, base));
        }
        col = col.push(pieces);
    }

    col
}

fn styled(span: &Span, base: f32) -> Text<'_> {
    let font = Font {
        weight: if span.bold {
            Weight::Bold
        } else {
            Weight::Normal
        },
        style: if span.italic {
            Style::Italic
        } else {
            Style::Normal
        },
        ..Font::DEFAULT
    };

    text(span.text.as_str()).font(font).size(span.size(base))
}

/// Icons laid out side by side, with an optional trailing label.
pub(crate) fn icon_label_row(
    icons: &'static [StockIcon],
    label: Option<&'static str>,
) -> Row<'static, Message> {
    let mut r = row![].spacing(4).align_y(Alignment::Center);
    for &i in icons {
        r = r.push(icon(i, IconSize::Button));
    }
    if let Some(label) = label {
        r = r.push(text(label));
    }
    r
}
