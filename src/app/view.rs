//! Application view rendering

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::primitives::docked;
use crate::ui::theme;

/// Height of the bottom bar hosting the button
const BAR_HEIGHT: f32 = 49.0;

/// Gap under the bar so the overhanging button stays visible
const BAR_MARGIN: f32 = 16.0;

/// Keyboard help shown under the percentage
pub(super) const KEY_HINT: &str = "Click the button or press Space. 0-9 set progress, \
Shift+digit jumps, R resets, D toggles dark mode, S saves settings.";

impl App {
    /// Build the main window view
    pub fn view(&self) -> Element<'_, Message> {
        let button = &self.ui.add_button;

        let percent = text(format!("{:.0}%", button.progress() * 100.0))
            .size(40)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            });
        let hint = text(KEY_HINT)
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            });

        let content = container(
            column![percent, hint]
                .spacing(8)
                .align_x(Alignment::Center),
        )
        .padding(24)
        .center(Fill);

        // Bottom bar with the button docked onto it
        let bar = container(Space::new().width(Fill).height(BAR_HEIGHT))
            .width(Fill)
            .height(BAR_HEIGHT)
            .style(theme::bottom_bar);
        let control = button.view(
            self.ui.now,
            self.ui.hover.amount(),
            Message::ButtonPressed,
            Message::ButtonHovered,
        );
        let bar: Element<'_, Message> = match button.attachment() {
            Some(attachment) => docked(bar, control, attachment).into(),
            None => column![control, bar].align_x(Alignment::Center).into(),
        };

        container(column![
            content,
            bar,
            Space::new().width(Fill).height(BAR_MARGIN)
        ])
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
    }
}
