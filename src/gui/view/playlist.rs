//! Playlist view: one column of (icon, rich-text label) rows. A header line
//! is drawn only when the view options ask for it.

use iced::widget::{Column, MouseArea, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Border, Length, Theme};

use super::super::state::{Message, MockupPlayer};
use super::constants::{
    DROP_BORDER, HEADER_TEXT, LABEL_TEXT, LIST_SPACING, ROW_HPAD, ROW_SPACING, ROW_VPAD,
};
use super::widgets::{icon_cell, markup_label};
use crate::core::types::IconSize;

/// The whole list sits in one mouse area so leaving it can cancel a drop.
pub(crate) fn build_playlist(state: &MockupPlayer) -> MouseArea<'_, Message> {
    mouse_area(scrollable(build_rows(state)).height(Length::Fill))
        .on_exit(Message::PointerLeftList)
}

fn build_rows(state: &MockupPlayer) -> Column<'_, Message> {
    let mut col = Column::new().spacing(LIST_SPACING).width(Length::Fill);

    if state.playlist.options().headers_visible {
        col = col.push(
            container(text("Title").size(HEADER_TEXT)).padding([ROW_VPAD, ROW_HPAD]),
        );
    }

    for (i, r) in state.playlist.rows().iter().enumerate() {
        let selected = state.playlist.is_selected(i);
        let drop_target = state
            .drag
            .is_some_and(|d| d.over == i && d.from != i);

        let cells = row![
            icon_cell(r.icon, IconSize::Menu),
            markup_label(&r.label, LABEL_TEXT),
        ]
        .spacing(ROW_SPACING)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(cells)
                .padding([ROW_VPAD, ROW_HPAD])
                .width(Length::Fill)
                .style(move |theme: &Theme| row_style(theme, selected, drop_target)),
        )
        .on_press(Message::RowPressed(i))
        .on_enter(Message::RowHovered(i));

        col = col.push(row_widget);
    }

    col
}

fn row_style(theme: &Theme, selected: bool, drop_target: bool) -> container::Style {
    let palette = theme.extended_palette();
    let mut style = container::Style::default();

    if selected {
        style.background = Some(palette.primary.weak.color.into());
        style.text_color = Some(palette.primary.weak.text);
    }
    if drop_target {
        style.border = Border {
            color: palette.primary.strong.color,
            width: DROP_BORDER,
            radius: 2.0.into(),
        };
    }

    style
}
