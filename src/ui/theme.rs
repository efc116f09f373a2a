//! Colors and container styles for the demo window
//! Supports both dark and light modes

use iced::color;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const BAR: Color = color!(0x1f1f1f);
    pub const BORDER: Color = color!(0x2c2c2c);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_MUTED: Color = color!(0x888888);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf2f2f7);
    pub const BAR: Color = color!(0xfafafa);
    pub const BORDER: Color = color!(0xd8d8d8);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_MUTED: Color = color!(0x777777);
}

/// Static reference arc under the progress arc
pub const TRACK_GRAY: Color = color!(0xaaaaaa);

/// Progress arc stroke
pub const PROGRESS_GREEN: Color = color!(0x00ff00);

/// Soft shadow around the button circle
pub const BUTTON_SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

/// Fill tint while hovered
pub const BUTTON_HOVER: Color = color!(0xdcdcdc);

/// Fill tint while pressed
pub const BUTTON_PRESSED: Color = color!(0xb0b0b0);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Bottom bar hosting the progress button
pub fn bottom_bar(theme: &Theme) -> container::Style {
    let (bar, border) = if is_dark(theme) {
        (dark::BAR, dark::BORDER)
    } else {
        (light::BAR, light::BORDER)
    };

    container::Style {
        background: Some(Background::Color(bar)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_detection() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }

    #[test]
    fn test_backgrounds_follow_mode() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
    }
}
