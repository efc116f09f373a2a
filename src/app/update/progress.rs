//! Progress button message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::primitives::DEMO_PROGRESS;

impl App {
    /// Handle progress button and animation messages
    pub fn handle_progress(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ButtonPressed => {
                tracing::info!("Progress button tapped");
                self.set_progress(DEMO_PROGRESS, true);
                Some(Task::none())
            }

            Message::ButtonHovered(hovered) => {
                self.ui.hover.set_hovered(*hovered);
                Some(Task::none())
            }

            Message::SetProgress { value, animated } => {
                self.set_progress(*value, *animated);
                Some(Task::none())
            }

            Message::ResetProgress => {
                self.set_progress(0.0, false);
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.ui.now = *now;
                self.ui.hover.tick(*now);
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn set_progress(&mut self, value: f32, animated: bool) {
        let now = Instant::now();
        self.ui.now = now;
        self.ui.add_button.set_progress(value, animated, now);
    }
}
