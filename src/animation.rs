//! Time-driven view animations.
//!
//! Animations never block: a view property is retargeted with
//! [`Animated::animate_to`] and the event loop advances it with
//! [`Animated::tick`]. `tick` reports `true` exactly once, on the frame the
//! transition reaches its target, which is how owners observe completion.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut icon = Animated::new(Transform::IDENTITY);
//! icon.animate_to(Transform::IDENTITY.scaled(1.2), Timing::spring(POP), now);
//!
//! // In event loop:
//! if icon.tick(Instant::now()) {
//!     // transition finished
//! }
//! ```

use std::time::{Duration, Instant};

/// Natural frequency of the spring curves, in units of 1 / duration.
/// At 10 a critically damped spring is within 0.05% of its target at t = 1.
const SPRING_STIFFNESS: f32 = 10.0;

/// Timing curve mapping linear progress `t` in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Damped spring. `damping` is the damping ratio (1.0 = critically damped,
    /// no overshoot). `velocity` is the initial velocity in total distances
    /// per duration.
    Spring { damping: f32, velocity: f32 },
}

impl Curve {
    /// Eased progress for linear progress `t`. Always 0 at 0 and exactly 1 at 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Curve::Spring { damping, velocity } => spring(t, damping, velocity),
        }
    }
}

fn spring(t: f32, damping: f32, velocity: f32) -> f32 {
    let zeta = damping.clamp(0.05, 1.0);
    let omega = SPRING_STIFFNESS / zeta;

    if zeta >= 1.0 {
        1.0 - (-omega * t).exp() * (1.0 + (omega - velocity) * t)
    } else {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let k = (zeta * omega - velocity) / damped;
        1.0 - decay * ((damped * t).cos() + k * (damped * t).sin())
    }
}

/// Duration plus curve of one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub curve: Curve,
}

impl Timing {
    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// Critically damped spring with an initial velocity of one distance per second.
    pub fn spring(duration: Duration) -> Self {
        Self::new(
            duration,
            Curve::Spring {
                damping: 1.0,
                velocity: duration.as_secs_f32(),
            },
        )
    }

    pub fn ease_in_out(duration: Duration) -> Self {
        Self::new(duration, Curve::EaseInOut)
    }
}

/// Affine-ish view transform: translation in cells, uniform scale, opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        alpha: 1.0,
    };

    pub fn translated(self, x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..self
        }
    }

    pub fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Linear interpolation; `t` may leave `[0, 1]` for overshooting springs.
    pub fn lerp(self, to: Transform, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
            alpha: mix(self.alpha, to.alpha).clamp(0.0, 1.0),
        }
    }

    /// Vertical offset rounded to whole terminal rows.
    pub fn row_offset(&self) -> i16 {
        self.translate_y.round() as i16
    }

    /// Horizontal offset rounded to whole terminal columns.
    pub fn column_offset(&self) -> i16 {
        self.translate_x.round() as i16
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Transform,
    to: Transform,
    started: Instant,
    timing: Timing,
}

/// A transform that can be animated toward a target over time.
#[derive(Debug, Clone)]
pub struct Animated {
    value: Transform,
    transition: Option<Transition>,
}

impl Animated {
    pub fn new(value: Transform) -> Self {
        Self {
            value,
            transition: None,
        }
    }

    /// Current (last ticked) value.
    pub fn value(&self) -> Transform {
        self.value
    }

    /// Value the property is heading to.
    pub fn target(&self) -> Transform {
        self.transition.map(|t| t.to).unwrap_or(self.value)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jump to a value, dropping any running transition.
    pub fn set(&mut self, value: Transform) {
        self.value = value;
        self.transition = None;
    }

    /// Start a transition from the current value. Replaces a running one.
    pub fn animate_to(&mut self, to: Transform, timing: Timing, now: Instant) {
        self.transition = Some(Transition {
            from: self.value,
            to,
            started: now,
            timing,
        });
    }

    /// Advance to `now`. Returns `true` once, when the transition completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        let elapsed = now.saturating_duration_since(transition.started);
        let progress = if transition.timing.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / transition.timing.duration.as_secs_f32()
        };

        if progress >= 1.0 {
            self.value = transition.to;
            self.transition = None;
            return true;
        }

        let eased = transition.timing.curve.apply(progress);
        self.value = transition.from.lerp(transition.to, eased);
        false
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}
