//! Application state definitions

use iced::time::Instant;

use crate::features::Settings;
use crate::ui::animation::HoverFeedback;
use crate::ui::primitives::{HostId, ProgressButton};

/// Host element the progress button is docked onto
pub const BOTTOM_BAR: HostId = HostId("bottom_bar");

/// Main application state
pub struct App {
    /// Core infrastructure (settings)
    pub core: CoreState,
    /// UI state (button, animations)
    pub ui: UiState,
}

/// Core Infrastructure
pub struct CoreState {
    pub settings: Settings,
}

/// UI state
pub struct UiState {
    /// The add/progress button
    pub add_button: ProgressButton,
    /// Hover highlight for the button
    pub hover: HoverFeedback,
    /// Instant of the latest frame; animations are sampled at this time
    pub now: Instant,
}

impl UiState {
    /// Build the button from settings and dock it onto the bottom bar
    pub fn new(settings: &Settings, now: Instant) -> Self {
        let mut add_button = ProgressButton::new()
            .button_color(settings.button_color)
            .symbol_color(settings.symbol_color)
            .animation_duration(settings.animation_duration());
        add_button.add_to_parent(BOTTOM_BAR);

        Self {
            add_button,
            hover: HoverFeedback::new(),
            now,
        }
    }

    /// Check if any animation is currently active
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.add_button.is_animating(now) || self.hover.is_animating()
    }
}
