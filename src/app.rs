//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::Theme;
use iced::time::Instant;

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> Self {
        Self::with_settings(crate::features::Settings::load())
    }

    /// Create an application instance from already loaded settings
    pub fn with_settings(settings: crate::features::Settings) -> Self {
        let ui = UiState::new(&settings, Instant::now());
        tracing::info!(
            "Progress button ready (duration: {:?})",
            ui.add_button.duration()
        );

        Self {
            core: CoreState { settings },
            ui,
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing the current progress
    pub fn title(&self) -> String {
        format!(
            "Progress Button - {:.0}%",
            self.ui.add_button.progress() * 100.0
        )
    }

    /// Subscriptions for animation frames and keyboard shortcuts
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Animation frames (vsync rate) only while something moves.
        // Sampled at the same instant the view draws with.
        let animation_sub = if self.ui.has_active_animations(self.ui.now) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Keyboard shortcuts
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        iced::Subscription::batch([animation_sub, keyboard_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use iced::time::Duration;

    #[test]
    fn test_frames_stop_once_arc_shows_committed_value() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::ButtonPressed);
        let start = app.ui.now;
        assert!(app.ui.has_active_animations(app.ui.now));

        // Frames keep coming while the arc is short of its target
        let _ = app.update(Message::AnimationTick(start + Duration::from_millis(500)));
        assert!(app.ui.has_active_animations(app.ui.now));
        assert!(app.ui.add_button.stroke_end(app.ui.now) < 0.8);

        // The frame that ends the animation draws the committed value
        let _ = app.update(Message::AnimationTick(start + Duration::from_millis(1001)));
        assert!(!app.ui.has_active_animations(app.ui.now));
        assert!((app.ui.add_button.stroke_end(app.ui.now) - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_tap_animates_to_demo_progress() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::ButtonPressed);

        assert_eq!(app.ui.add_button.progress(), 0.8);
        assert!(app.ui.add_button.is_animating(app.ui.now));
        assert_eq!(app.title(), "Progress Button - 80%");
    }

    #[test]
    fn test_double_tap_keeps_demo_progress() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::ButtonPressed);
        let _ = app.update(Message::ButtonPressed);

        assert_eq!(app.ui.add_button.progress(), 0.8);
    }

    #[test]
    fn test_keyboard_drives_progress() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::KeyPressed(
            iced::keyboard::Key::Character("4".into()),
            iced::keyboard::Modifiers::SHIFT,
        ));
        assert!((app.ui.add_button.progress() - 0.4).abs() < 1e-6);
        assert!(!app.ui.add_button.is_animating(app.ui.now));

        let _ = app.update(Message::ResetProgress);
        assert_eq!(app.ui.add_button.progress(), 0.0);
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Light);
    }
}
