//! Application messages

use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Progress button ============
    /// Button tapped
    ButtonPressed,
    /// Pointer entered (true) or left (false) the button circle
    ButtonHovered(bool),
    /// Set the button progress
    SetProgress { value: f32, animated: bool },
    /// Jump back to zero progress
    ResetProgress,

    // ============ Animation ============
    /// Frame tick while an animation is running
    AnimationTick(Instant),

    // ============ Keyboard ============
    /// Key pressed anywhere in the window
    KeyPressed(Key, Modifiers),

    // ============ Settings ============
    /// Switch between dark and light window themes
    ToggleDarkMode,
    /// Save settings
    SaveSettings,
}
