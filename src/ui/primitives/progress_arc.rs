//! Progress arc geometry and animation state
//!
//! The arc opens at the bottom of the button: it begins at [`START_ANGLE`]
//! (lower left), runs clockwise over the top and stops at [`END_ANGLE`]
//! (lower right). Angles are fixed; only the radius follows the bounds.

use std::f32::consts::{PI, TAU};

use iced::animation::{Animation, Easing};
use iced::time::{Duration, Instant};
use iced::widget::canvas::{Path, path};
use iced::{Point, Radians, Size};

/// Stroke width shared by the track and the progress arc
pub const ARC_WIDTH: f32 = 2.0;

/// Angle where the arc begins
pub const START_ANGLE: f32 = 2.0 * PI / 3.0;

/// Angle where the arc ends
pub const END_ANGLE: f32 = PI / 3.0;

/// Clockwise sweep from [`START_ANGLE`] to [`END_ANGLE`]
pub const SWEEP: f32 = TAU - (START_ANGLE - END_ANGLE);

/// Arc geometry derived from the button bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius: f32,
}

impl ArcGeometry {
    pub fn from_size(size: Size) -> Self {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let radius = (size.width.max(size.height) - 2.0) / 2.0 - ARC_WIDTH / 2.0;

        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn start_angle(&self) -> Radians {
        Radians(START_ANGLE)
    }

    pub fn end_angle(&self) -> Radians {
        Radians(END_ANGLE)
    }

    /// Angle reached by a stroke covering `fraction` of the sweep
    ///
    /// The fraction is clamped to `[0, 1]`, so out-of-range progress values
    /// render as an empty or a full arc.
    pub fn angle_at(&self, fraction: f32) -> Radians {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Radians(START_ANGLE + SWEEP * fraction)
    }

    /// Full-length reference arc, running clockwise over the top
    pub fn track_path(&self) -> Path {
        self.arc_path(Radians(self.end_angle().0 + TAU))
    }

    /// Arc covering `fraction` of the sweep
    pub fn progress_path(&self, fraction: f32) -> Path {
        self.arc_path(self.angle_at(fraction))
    }

    fn arc_path(&self, end_angle: Radians) -> Path {
        Path::new(|builder| {
            builder.arc(path::Arc {
                center: self.center,
                radius: self.radius,
                start_angle: self.start_angle(),
                end_angle,
            });
        })
    }
}

/// Stroke-completion state of the progress arc
///
/// Holds the interpolation endpoints of the latest transition. Starting a new
/// transition replaces the previous one outright; nothing is queued.
pub struct ProgressAnimation {
    from: f32,
    to: f32,
    transition: Animation<bool>,
}

impl ProgressAnimation {
    /// Arc resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            transition: Animation::new(true),
        }
    }

    /// Ease out from `from` to `to` over `duration`, starting at `now`
    pub fn animate(&mut self, from: f32, to: f32, duration: Duration, now: Instant) {
        if duration.is_zero() {
            self.jump(to);
            return;
        }

        self.from = from;
        self.to = to;
        self.transition = Animation::new(false)
            .duration(duration)
            .easing(Easing::EaseOut)
            .go(true, now);
    }

    /// Show `value` immediately
    pub fn jump(&mut self, value: f32) {
        *self = Self::new(value);
    }

    /// Stroke fraction displayed at `now`
    pub fn value(&self, now: Instant) -> f32 {
        self.transition.interpolate(self.from, self.to, now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_animating(now)
    }
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_angles_ignore_bounds() {
        for size in [
            Size::new(60.0, 60.0),
            Size::new(24.0, 24.0),
            Size::new(200.0, 80.0),
        ] {
            let geometry = ArcGeometry::from_size(size);
            assert!(approx(geometry.start_angle().0, 2.0 * PI / 3.0));
            assert!(approx(geometry.end_angle().0, PI / 3.0));
        }
    }

    #[test]
    fn test_radius_scales_with_bounds() {
        let small = ArcGeometry::from_size(Size::new(60.0, 60.0));
        let large = ArcGeometry::from_size(Size::new(120.0, 120.0));

        assert!(approx(small.radius, 28.0));
        assert!(approx(large.radius, 58.0));
        assert_eq!(small.center, Point::new(30.0, 30.0));
    }

    #[test]
    fn test_radius_uses_larger_side() {
        let geometry = ArcGeometry::from_size(Size::new(100.0, 40.0));
        assert!(approx(geometry.radius, 48.0));
        assert_eq!(geometry.center, Point::new(50.0, 20.0));
    }

    #[test]
    fn test_degenerate_bounds_have_zero_radius() {
        let geometry = ArcGeometry::from_size(Size::ZERO);
        assert_eq!(geometry.radius, 0.0);
    }

    #[test]
    fn test_sweep_leaves_gap_at_bottom() {
        assert!(approx(SWEEP, 5.0 * PI / 3.0));
    }

    #[test]
    fn test_angle_at_clamps_fraction() {
        let geometry = ArcGeometry::from_size(Size::new(60.0, 60.0));

        assert!(approx(geometry.angle_at(-0.5).0, START_ANGLE));
        assert!(approx(geometry.angle_at(1.7).0, START_ANGLE + SWEEP));
        assert!(approx(geometry.angle_at(1.0).0.rem_euclid(TAU), END_ANGLE));
        assert!(approx(geometry.angle_at(f32::NAN).0, START_ANGLE));
        assert!(approx(geometry.angle_at(0.5).0, START_ANGLE + SWEEP / 2.0));
    }

    #[test]
    fn test_animation_starts_at_old_value_and_settles_on_new() {
        let now = Instant::now();
        let duration = Duration::from_secs(1);
        let mut arc = ProgressAnimation::new(0.2);

        arc.animate(0.2, 0.8, duration, now);

        assert!(arc.is_animating(now));
        assert!(approx(arc.value(now), 0.2));

        let done = now + duration + Duration::from_millis(1);
        assert!(!arc.is_animating(done));
        assert!(approx(arc.value(done), 0.8));
    }

    #[test]
    fn test_animation_eases_out() {
        let now = Instant::now();
        let duration = Duration::from_secs(1);
        let mut arc = ProgressAnimation::default();

        arc.animate(0.0, 1.0, duration, now);

        let halfway = arc.value(now + duration / 2);
        assert!(halfway > 0.5, "ease-out should lead linear, got {halfway}");
        assert!(halfway < 1.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let now = Instant::now();
        let mut arc = ProgressAnimation::default();

        arc.animate(0.0, 0.6, Duration::ZERO, now);

        assert!(!arc.is_animating(now));
        assert!(approx(arc.value(now), 0.6));
    }

    #[test]
    fn test_jump_replaces_running_animation() {
        let now = Instant::now();
        let mut arc = ProgressAnimation::default();

        arc.animate(0.0, 1.0, Duration::from_secs(2), now);
        arc.jump(0.3);

        assert!(!arc.is_animating(now));
        assert!(approx(arc.value(now), 0.3));
    }
}
