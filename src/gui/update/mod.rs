//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, MockupPlayer};

mod playlist;
mod toolbar;

pub(crate) fn update(state: &mut MockupPlayer, message: Message) -> Task<Message> {
    match message {
        // Toolbar
        Message::TogglePlayPause => toolbar::toggle_play_pause(state),
        Message::Previous => toolbar::unwired("previous"),
        Message::Next => toolbar::unwired("next"),
        Message::AddSongs => toolbar::unwired("add songs"),

        // Playlist
        Message::RowPressed(i) => playlist::row_pressed(state, i),
        Message::RowHovered(i) => playlist::row_hovered(state, i),
        Message::PointerLeftList => playlist::pointer_left_list(state),
        Message::PointerReleased => playlist::pointer_released(state),

        Message::ModifiersChanged(modifiers) => {
            state.modifiers = modifiers;
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::Modifiers;

    use super::*;

    fn state() -> MockupPlayer {
        MockupPlayer::new().unwrap()
    }

    fn labels(state: &MockupPlayer) -> Vec<String> {
        state
            .playlist
            .rows()
            .iter()
            .map(|r| r.label.plain_text())
            .collect()
    }

    #[test]
    fn toggle_flips_pressed_state() {
        let mut s = state();

        let _ = update(&mut s, Message::TogglePlayPause);
        assert!(s.playing);

        let _ = update(&mut s, Message::TogglePlayPause);
        assert!(!s.playing);
    }

    #[test]
    fn unwired_buttons_change_nothing() {
        let mut s = state();
        let before = s.playlist.clone();

        for m in [Message::Previous, Message::Next, Message::AddSongs] {
            let _ = update(&mut s, m);
        }

        assert_eq!(s.playlist, before);
        assert!(!s.playing);
        assert_eq!(s.now_playing_label.plain_text(), "Dreamy Days\nRoots Manuva");
    }

    #[test]
    fn ctrl_click_adds_to_selection() {
        let mut s = state();

        let _ = update(&mut s, Message::RowPressed(0));
        let _ = update(&mut s, Message::PointerReleased);
        let _ = update(&mut s, Message::ModifiersChanged(Modifiers::CTRL));
        let _ = update(&mut s, Message::RowPressed(1));
        let _ = update(&mut s, Message::PointerReleased);

        assert_eq!(s.playlist.selected(), [0, 1]);
    }

    #[test]
    fn plain_click_replaces_selection() {
        let mut s = state();

        let _ = update(&mut s, Message::ModifiersChanged(Modifiers::SHIFT));
        let _ = update(&mut s, Message::RowPressed(1));
        let _ = update(&mut s, Message::PointerReleased);
        let _ = update(&mut s, Message::ModifiersChanged(Modifiers::empty()));
        let _ = update(&mut s, Message::RowPressed(0));
        let _ = update(&mut s, Message::PointerReleased);

        assert_eq!(s.playlist.selected(), [0]);
    }

    #[test]
    fn drag_moves_row_and_its_selection() {
        let mut s = state();

        let _ = update(&mut s, Message::RowPressed(0));
        let _ = update(&mut s, Message::RowHovered(1));
        let _ = update(&mut s, Message::PointerReleased);

        assert_eq!(labels(&s), ["Hadjaha", "Dreamy Days\nRoots Manuva"]);
        assert_eq!(s.playlist.selected(), [1]);
        assert!(s.drag.is_none());
    }

    #[test]
    fn release_on_same_row_is_just_a_click() {
        let mut s = state();

        let _ = update(&mut s, Message::RowPressed(1));
        let _ = update(&mut s, Message::RowHovered(1));
        let _ = update(&mut s, Message::PointerReleased);

        assert_eq!(labels(&s)[0], "Dreamy Days\nRoots Manuva");
        assert_eq!(s.playlist.selected(), [1]);
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let mut s = state();

        let _ = update(&mut s, Message::RowHovered(1));
        assert!(s.drag.is_none());

        let _ = update(&mut s, Message::PointerReleased);
        assert_eq!(labels(&s)[1], "Hadjaha");
    }

    #[test]
    fn release_outside_list_cancels_drag() {
        let mut s = state();

        let _ = update(&mut s, Message::RowPressed(0));
        let _ = update(&mut s, Message::RowHovered(1));
        let _ = update(&mut s, Message::PointerLeftList);
        let _ = update(&mut s, Message::PointerReleased);

        assert_eq!(labels(&s), ["Dreamy Days\nRoots Manuva", "Hadjaha"]);
        assert_eq!(s.playlist.selected(), [0]);
        assert!(s.drag.is_none());
    }

    #[test]
    fn leaving_and_coming_back_still_drops() {
        let mut s = state();

        let _ = update(&mut s, Message::RowPressed(0));
        let _ = update(&mut s, Message::PointerLeftList);
        let _ = update(&mut s, Message::RowHovered(1));
        let _ = update(&mut s, Message::PointerReleased);

        assert_eq!(labels(&s), ["Hadjaha", "Dreamy Days\nRoots Manuva"]);
    }

    #[test]
    fn modified_press_does_not_start_a_drag() {
        for modifiers in [Modifiers::CTRL, Modifiers::SHIFT] {
            let mut s = state();

            let _ = update(&mut s, Message::ModifiersChanged(modifiers));
            let _ = update(&mut s, Message::RowPressed(0));
            assert!(s.drag.is_none());

            let _ = update(&mut s, Message::RowHovered(1));
            let _ = update(&mut s, Message::PointerReleased);
            assert_eq!(labels(&s)[0], "Dreamy Days\nRoots Manuva");
        }
    }
}
