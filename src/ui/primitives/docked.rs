//! Constraint-based docking of a control onto a host element
//!
//! An [`Attachment`] records which host a control belongs to and the
//! constraints that place it there. [`Docked`] is the widget that applies
//! them: it lays out the host normally, then resolves the constraints
//! against the host's size to position the control on top of it.
//!
//! # Design
//!
//! This is a primitive component - it uses generic Message types and
//! does not depend on application-specific types.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::mouse;
use iced::{Element, Length, Point, Rectangle, Size, Theme};

/// Edge length of a docked control
pub const DOCKED_SIZE: f32 = 60.0;

/// Distance between the control's bottom edge and the host's
///
/// Negative values let the control hang below the host.
pub const BOTTOM_INSET: f32 = -6.0;

/// Identifies the host element a control is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub &'static str);

/// A single layout rule relating a control to its host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Horizontal centers are equal
    CenterX,
    /// `host.bottom - control.bottom == inset`
    Bottom(f32),
    /// Fixed width
    Width(f32),
    /// Fixed height
    Height(f32),
}

/// Where a control lives: one host, plus the rules that place it there
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    parent: HostId,
    constraints: [Constraint; 4],
}

impl Attachment {
    /// Pin to the host's bottom-center with a fixed square size
    pub fn bottom_center(parent: HostId) -> Self {
        Self {
            parent,
            constraints: [
                Constraint::Bottom(BOTTOM_INSET),
                Constraint::CenterX,
                Constraint::Width(DOCKED_SIZE),
                Constraint::Height(DOCKED_SIZE),
            ],
        }
    }

    pub fn parent(&self) -> HostId {
        self.parent
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Size fixed by the width/height constraints
    pub fn size(&self) -> Size {
        self.constraints()
            .iter()
            .fold(Size::ZERO, |size, constraint| match *constraint {
                Constraint::Width(width) => Size::new(width, size.height),
                Constraint::Height(height) => Size::new(size.width, height),
                _ => size,
            })
    }

    /// Frame of the control relative to a host of the given size
    pub fn resolve(&self, host: Size) -> Rectangle {
        let size = self.size();
        let mut position = Point::ORIGIN;

        for constraint in self.constraints() {
            match *constraint {
                Constraint::CenterX => position.x = (host.width - size.width) / 2.0,
                Constraint::Bottom(inset) => position.y = host.height - inset - size.height,
                Constraint::Width(_) | Constraint::Height(_) => {}
            }
        }

        Rectangle::new(position, size)
    }
}

const HOST: usize = 0;
const CONTROL: usize = 1;

/// A host element with a control docked onto it
pub struct Docked<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    attachment: Attachment,
    children: Vec<Element<'a, Message, Theme, Renderer>>,
}

impl<'a, Message, Theme, Renderer> Docked<'a, Message, Theme, Renderer> {
    pub fn new(
        host: impl Into<Element<'a, Message, Theme, Renderer>>,
        control: impl Into<Element<'a, Message, Theme, Renderer>>,
        attachment: Attachment,
    ) -> Self {
        Self {
            attachment,
            children: vec![host.into(), control.into()],
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Docked<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.children[HOST].as_widget().size()
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.children.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.children);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let host = self.children[HOST].as_widget_mut().layout(
            &mut tree.children[HOST],
            renderer,
            limits,
        );
        let host_size = host.size();

        let frame = self.attachment.resolve(host_size);
        let control_limits = layout::Limits::new(Size::ZERO, frame.size());
        let control = self.children[CONTROL]
            .as_widget_mut()
            .layout(&mut tree.children[CONTROL], renderer, &control_limits)
            .move_to(frame.position());

        layout::Node::with_children(host_size, vec![host, control])
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let [host, control] = self.children.as_mut_slice() else {
            return;
        };
        let [host_tree, control_tree] = tree.children.as_mut_slice() else {
            return;
        };
        let mut layouts = layout.children();
        let (Some(host_layout), Some(control_layout)) = (layouts.next(), layouts.next()) else {
            return;
        };

        // The control sits on top, so it sees events first
        control.as_widget_mut().update(
            control_tree,
            event,
            control_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
        if shell.is_event_captured() {
            return;
        }

        host.as_widget_mut().update(
            host_tree,
            event,
            host_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        for ((child, state), layout) in self
            .children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            child
                .as_widget()
                .draw(state, renderer, theme, style, layout, cursor, viewport);
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let mut layouts = layout.children();
        let (Some(host_layout), Some(control_layout)) = (layouts.next(), layouts.next()) else {
            return mouse::Interaction::default();
        };

        let control = self.children[CONTROL].as_widget().mouse_interaction(
            &tree.children[CONTROL],
            control_layout,
            cursor,
            viewport,
            renderer,
        );
        if control != mouse::Interaction::default() {
            return control;
        }

        self.children[HOST].as_widget().mouse_interaction(
            &tree.children[HOST],
            host_layout,
            cursor,
            viewport,
            renderer,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Docked<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(docked: Docked<'a, Message, Theme, Renderer>) -> Self {
        Element::new(docked)
    }
}

/// Dock `control` onto `host` according to `attachment`
pub fn docked<'a, Message: 'a>(
    host: impl Into<Element<'a, Message, Theme>>,
    control: impl Into<Element<'a, Message, Theme>>,
    attachment: &Attachment,
) -> Docked<'a, Message> {
    Docked::new(host, control, attachment.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: HostId = HostId("bar");

    #[test]
    fn test_bottom_center_has_four_constraints() {
        let attachment = Attachment::bottom_center(BAR);

        assert_eq!(attachment.parent(), BAR);
        assert_eq!(attachment.constraints().len(), 4);
        assert!(attachment.constraints().contains(&Constraint::CenterX));
        assert!(
            attachment
                .constraints()
                .contains(&Constraint::Bottom(BOTTOM_INSET))
        );
    }

    #[test]
    fn test_size_is_fixed_regardless_of_host() {
        let attachment = Attachment::bottom_center(BAR);

        for host in [
            Size::new(320.0, 49.0),
            Size::new(1024.0, 80.0),
            Size::new(30.0, 30.0),
        ] {
            let frame = attachment.resolve(host);
            assert_eq!(frame.size(), Size::new(60.0, 60.0));
        }
    }

    #[test]
    fn test_resolve_centers_and_hangs_below() {
        let attachment = Attachment::bottom_center(BAR);
        let frame = attachment.resolve(Size::new(400.0, 50.0));

        assert_eq!(frame.x, 170.0);
        // Bottom edge sits 6px below the host's bottom edge
        assert_eq!(frame.y + frame.height, 56.0);
    }

    #[test]
    fn test_narrow_host_overflows_symmetrically() {
        let attachment = Attachment::bottom_center(BAR);
        let frame = attachment.resolve(Size::new(40.0, 40.0));

        assert_eq!(frame.x, -10.0);
        assert_eq!(frame.x + frame.width, 50.0);
    }
}
