//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.core.settings.dark_mode = !self.core.settings.dark_mode;
                tracing::info!("Dark mode: {}", self.core.settings.dark_mode);
                Some(Task::none())
            }

            Message::SaveSettings => {
                match self.core.settings.save() {
                    Ok(()) => tracing::info!("Settings saved"),
                    Err(e) => tracing::warn!("Failed to save settings: {}", e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
