//! Keyboard shortcut handlers

use iced::Task;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => match shortcut(key, *modifiers) {
                Some(action) => Some(self.update(action)),
                None => Some(Task::none()),
            },
            _ => None,
        }
    }
}

/// Map a key press to the message it triggers
///
/// `Space` taps the button, digits animate to tenths (`Shift` jumps
/// instead), `R` resets, `D` toggles dark mode and `S` saves settings.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Space) => Some(Message::ButtonPressed),
        Key::Character(c) => match c.to_ascii_lowercase().as_str() {
            "r" => Some(Message::ResetProgress),
            "d" => Some(Message::ToggleDarkMode),
            "s" => Some(Message::SaveSettings),
            digit => digit.parse::<u8>().ok().filter(|n| *n <= 9).map(|n| {
                Message::SetProgress {
                    value: f32::from(n) / 10.0,
                    animated: !modifiers.shift(),
                }
            }),
        },
        _ => None,
    }
}
