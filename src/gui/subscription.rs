//! gui/subscription.rs
//! Window-wide input the widgets don't report on their own:
//! modifier keys (for ctrl/shift-click) and left-button release (ends a drag
//! even when the pointer left the list).

use iced::{Event, Subscription, event, keyboard, mouse};

use super::state::{Message, MockupPlayer};

pub(crate) fn subscription(_state: &MockupPlayer) -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    })
}
