//! Circular add/progress button primitive
//!
//! A round button showing a plus glyph, ringed by a progress arc that
//! animates whenever the progress changes. Drawing and hit-testing are done
//! by a canvas [`Program`]; the button itself only owns the state.
//!
//! # Design
//!
//! This is a primitive component - it uses generic Message types and
//! does not depend on application-specific types.

use iced::mouse;
use iced::time::{Duration, Instant};
use iced::widget::canvas::{Action, Frame, Geometry, Path, Program, Stroke};
use iced::widget::{Canvas, container};
use iced::{Border, Color, Element, Event, Length, Point, Rectangle, Renderer, Shadow, Size};
use iced::{Theme, Vector};

use super::docked::{Attachment, HostId};
use super::progress_arc::{ARC_WIDTH, ArcGeometry, ProgressAnimation};
use crate::ui::theme;

/// Default edge length of the button
pub const DEFAULT_SIZE: f32 = 60.0;

/// Progress the demo tap handler animates to
pub const DEMO_PROGRESS: f32 = 0.8;

/// Default progress animation duration
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_secs(1);

/// Plus glyph stroke width
const PLUS_STROKE: f32 = 2.0;

/// Plus glyph bar length relative to the shorter side
const PLUS_LENGTH_RATIO: f32 = 0.35;

/// Circular add button with an animated progress arc
pub struct ProgressButton {
    button_color: Color,
    symbol_color: Color,
    animation_duration: Duration,
    size: Size,
    current_progress: f32,
    arc: ProgressAnimation,
    attachment: Option<Attachment>,
}

impl Default for ProgressButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressButton {
    pub fn new() -> Self {
        Self::with_size(Size::new(DEFAULT_SIZE, DEFAULT_SIZE))
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            button_color: Color::WHITE,
            symbol_color: Color::BLACK,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            size,
            current_progress: 0.0,
            arc: ProgressAnimation::default(),
            attachment: None,
        }
    }

    pub fn button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    pub fn symbol_color(mut self, color: Color) -> Self {
        self.symbol_color = color;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Last progress value passed to [`Self::set_progress`]
    pub fn progress(&self) -> f32 {
        self.current_progress
    }

    pub fn duration(&self) -> Duration {
        self.animation_duration
    }

    /// Current size; an attached button takes the size its constraints fix
    pub fn size(&self) -> Size {
        self.attachment
            .as_ref()
            .map_or(self.size, Attachment::size)
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Attach to `parent` at its bottom-center
    ///
    /// A button has at most one parent: attaching again moves it.
    pub fn add_to_parent(&mut self, parent: HostId) -> &Attachment {
        if let Some(previous) = &self.attachment {
            tracing::debug!(
                "Moving progress button from {:?} to {:?}",
                previous.parent(),
                parent
            );
        }
        self.attachment.insert(Attachment::bottom_center(parent))
    }

    /// Set the progress, optionally easing the arc from the previous value
    ///
    /// The stored progress changes immediately; only the arc is animated.
    /// Values outside `[0, 1]` are stored as given and clamped when drawn.
    pub fn set_progress(&mut self, progress: f32, animated: bool, now: Instant) {
        tracing::debug!(
            "Progress {} -> {} (animated: {})",
            self.current_progress,
            progress,
            animated
        );

        if animated {
            self.arc.animate(
                self.current_progress,
                progress,
                self.animation_duration,
                now,
            );
        } else {
            self.arc.jump(progress);
        }

        self.current_progress = progress;
    }

    /// Fraction of the arc stroked at `now`
    pub fn stroke_end(&self, now: Instant) -> f32 {
        self.arc.value(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.arc.is_animating(now)
    }

    /// Build the button element
    ///
    /// `hover` (0.0 - 1.0) blends the fill toward the hover highlight.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        now: Instant,
        hover: f32,
        on_press: Message,
        on_hover: impl Fn(bool) -> Message + 'a,
    ) -> Element<'a, Message> {
        let size = self.size();
        let face = ButtonFace {
            button_color: self.button_color,
            symbol_color: self.symbol_color,
            stroke_end: self.stroke_end(now),
            hover,
        };
        let corner = size.width.min(size.height) / 2.0;

        container(
            Canvas::new(ButtonCanvas {
                face,
                on_press,
                on_hover: Box::new(on_hover),
            })
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .width(size.width)
        .height(size.height)
        .style(move |_theme| container::Style {
            border: Border {
                radius: corner.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: theme::BUTTON_SHADOW,
                offset: Vector::ZERO,
                blur_radius: 2.0,
            },
            ..Default::default()
        })
        .into()
    }
}

/// Snapshot of everything the canvas needs for one frame
#[derive(Debug, Clone, Copy)]
struct ButtonFace {
    button_color: Color,
    symbol_color: Color,
    stroke_end: f32,
    hover: f32,
}

struct ButtonCanvas<'a, Message> {
    face: ButtonFace,
    on_press: Message,
    on_hover: Box<dyn Fn(bool) -> Message + 'a>,
}

/// Pointer state tracked by the canvas between events
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasState {
    hovered: bool,
    pressed: bool,
}

/// Whether `position` (relative to the bounds) lies on the circle
fn hits_circle(position: Point, size: Size) -> bool {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = size.width.min(size.height) / 2.0;
    position.distance(center) <= radius
}

fn mix(from: Color, to: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

impl<'a, Message: Clone> Program<Message> for ButtonCanvas<'a, Message> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let over = cursor
            .position_in(bounds)
            .is_some_and(|position| hits_circle(position, bounds.size()));

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft) => {
                if over == state.hovered {
                    return None;
                }
                state.hovered = over;
                Some(Action::publish((self.on_hover)(over)))
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if over => {
                state.pressed = true;
                Some(Action::request_redraw().and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.pressed => {
                state.pressed = false;
                if over {
                    Some(Action::publish(self.on_press.clone()).and_capture())
                } else {
                    Some(Action::request_redraw())
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let face = &self.face;

        // Background circle
        let mut fill = mix(face.button_color, theme::BUTTON_HOVER, face.hover * 0.5);
        if state.pressed {
            fill = mix(fill, theme::BUTTON_PRESSED, 0.5);
        }
        frame.fill(&Path::circle(center, size.width.min(size.height) / 2.0), fill);

        // Plus symbol
        let half = size.width.min(size.height) * PLUS_LENGTH_RATIO / 2.0;
        let plus = Path::new(|builder| {
            builder.move_to(Point::new(center.x - half, center.y));
            builder.line_to(Point::new(center.x + half, center.y));
            builder.move_to(Point::new(center.x, center.y - half));
            builder.line_to(Point::new(center.x, center.y + half));
        });
        frame.stroke(
            &plus,
            Stroke::default()
                .with_width(PLUS_STROKE)
                .with_color(face.symbol_color),
        );

        // Reference track, then the progress arc above it
        let geometry = ArcGeometry::from_size(size);
        frame.stroke(
            &geometry.track_path(),
            Stroke::default()
                .with_width(ARC_WIDTH)
                .with_color(theme::TRACK_GRAY),
        );

        if face.stroke_end > 0.0 {
            frame.stroke(
                &geometry.progress_path(face.stroke_end),
                Stroke::default()
                    .with_width(ARC_WIDTH)
                    .with_color(theme::PROGRESS_GREEN),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.hovered {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
