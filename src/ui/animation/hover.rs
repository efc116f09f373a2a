//! Hover highlight for the progress button

use iced::time::{Duration, Instant};
use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration (200ms for snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Eased 0.0 - 1.0 hover amount
#[derive(Debug)]
pub struct HoverFeedback {
    hovered: bool,
    animation: Animated<f32>,
}

impl Default for HoverFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverFeedback {
    pub fn new() -> Self {
        Self {
            hovered: false,
            animation: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Fade toward the hovered or resting state
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.is_hovered() == hovered {
            return;
        }

        self.hovered = hovered;
        let target = if hovered { 1.0 } else { 0.0 };
        self.animation.update(target.into());
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current highlight amount
    pub fn amount(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_rest() {
        let feedback = HoverFeedback::new();

        assert!(!feedback.is_hovered());
        assert_eq!(feedback.amount(), 0.0);
    }

    #[test]
    fn test_hover_targets_full_highlight() {
        let mut feedback = HoverFeedback::new();

        feedback.set_hovered(true);

        assert!(feedback.is_hovered());
        assert_eq!(*feedback.animation.target(), 1.0);
        assert!(feedback.is_animating() || feedback.amount() > 0.0);
    }

    #[test]
    fn test_leave_targets_rest() {
        let mut feedback = HoverFeedback::new();

        feedback.set_hovered(true);
        feedback.set_hovered(false);

        assert!(!feedback.is_hovered());
        assert_eq!(*feedback.animation.target(), 0.0);
    }

    #[test]
    fn test_amount_stays_in_range() {
        let mut feedback = HoverFeedback::new();

        feedback.set_hovered(true);
        feedback.tick(Instant::now() + Duration::from_millis(50));

        assert!(feedback.amount() >= 0.0);
        assert!(feedback.amount() <= 1.0);
    }
}
