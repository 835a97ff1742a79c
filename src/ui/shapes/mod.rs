// SPDX-License-Identifier: MPL-2.0
//! Decorative backdrop of slowly drifting shapes.
//!
//! Every shape eases from its current pose towards a random target near its
//! anchor, then picks a new target when it gets there. Each shape owns one
//! pending timer in a [`Scheduler`] that fires at the end of its current drift.

mod canvas;
pub mod ease;

pub use canvas::Backdrop;
pub use ease::CubicBezier;

use crate::scheduler::Scheduler;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Default drift radius around the anchor, in logical pixels.
pub const DEFAULT_RANGE: f32 = 180.0;

const MIN_SCALE: f32 = 0.65;
const MAX_SCALE: f32 = 1.4;
const SCALE_JITTER: RangeInclusive<f32> = -0.15..=0.18;
const ROTATE_JITTER_DEG: RangeInclusive<f32> = -20.0..=20.0;
const DRIFT_SECS: RangeInclusive<f32> = 7.0..=14.0;
const SETTLE_SECS: RangeInclusive<f32> = 6.0..=10.0;
const START_DELAY_MS: RangeInclusive<f32> = 120.0..=900.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Disc,
    Ring,
    Square,
}

/// Which theme color a shape is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Brand,
    Accent,
}

/// Static description of one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub tint: Tint,
    /// Resting position as a fraction of the backdrop size.
    pub anchor: (f32, f32),
    pub radius: f32,
    /// Maximum offset from the anchor on each axis.
    pub range: f32,
    /// Resting rotation in degrees.
    pub rotate: f32,
    /// Resting scale.
    pub scale: f32,
}

impl ShapeDef {
    #[must_use]
    pub const fn new(kind: ShapeKind, tint: Tint, anchor: (f32, f32), radius: f32) -> Self {
        Self {
            kind,
            tint,
            anchor,
            radius,
            range: DEFAULT_RANGE,
            rotate: 0.0,
            scale: 1.0,
        }
    }

    #[must_use]
    pub const fn range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub const fn rotate(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }

    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    fn resting_pose(&self) -> Pose {
        Pose {
            x: 0.0,
            y: 0.0,
            scale: self.scale,
            rotate: self.rotate,
        }
    }
}

/// The shapes shown behind the form.
pub const DEFAULT_SHAPES: [ShapeDef; 5] = [
    ShapeDef::new(ShapeKind::Disc, Tint::Brand, (0.12, 0.18), 90.0),
    ShapeDef::new(ShapeKind::Ring, Tint::Accent, (0.86, 0.22), 70.0)
        .range(140.0)
        .scale(1.1),
    ShapeDef::new(ShapeKind::Square, Tint::Brand, (0.78, 0.8), 60.0)
        .range(200.0)
        .rotate(15.0)
        .scale(0.9),
    ShapeDef::new(ShapeKind::Disc, Tint::Accent, (0.2, 0.82), 50.0)
        .range(160.0)
        .scale(1.2),
    ShapeDef::new(ShapeKind::Square, Tint::Accent, (0.5, 0.08), 36.0)
        .range(220.0)
        .rotate(-10.0),
];

/// Offset from the anchor, scale and rotation (degrees) of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    fn lerp(self, to: Self, k: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * k;
        Self {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
        }
    }
}

/// A shape and its current transition.
#[derive(Debug, Clone)]
pub struct Shape {
    def: ShapeDef,
    from: Pose,
    to: Pose,
    started: Duration,
    duration: Duration,
}

impl Shape {
    #[must_use]
    pub fn def(&self) -> &ShapeDef {
        &self.def
    }

    /// Pose the current transition targets.
    #[must_use]
    pub fn target(&self) -> Pose {
        self.to
    }

    /// Pose at time `now`, eased along the current transition.
    #[must_use]
    pub fn pose_at(&self, now: Duration) -> Pose {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started).as_secs_f32();
        let progress = elapsed / self.duration.as_secs_f32();
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, CubicBezier::DRIFT.apply(progress))
    }
}

/// Animated set of backdrop shapes.
#[derive(Debug)]
pub struct ShapeField {
    shapes: Vec<Shape>,
    timers: Scheduler<usize>,
    rng: fastrand::Rng,
}

impl ShapeField {
    /// Starts animating `defs`: each shape settles into its resting pose and
    /// begins drifting after a short random delay.
    #[must_use]
    pub fn new(defs: &[ShapeDef], mut rng: fastrand::Rng) -> Self {
        let mut timers = Scheduler::new();
        let shapes = defs
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let settle = random_secs(&mut rng, SETTLE_SECS);
                let delay = Duration::from_secs_f32(random_between(&mut rng, START_DELAY_MS) / 1_000.0);
                timers.schedule(delay, index);
                Shape {
                    def: *def,
                    from: Pose::IDENTITY,
                    to: def.resting_pose(),
                    started: Duration::ZERO,
                    duration: settle,
                }
            })
            .collect();

        Self { shapes, timers, rng }
    }

    /// Shapes in their resting poses, without any drift scheduled.
    #[must_use]
    pub fn at_rest(defs: &[ShapeDef]) -> Self {
        let shapes = defs
            .iter()
            .map(|def| Shape {
                def: *def,
                from: def.resting_pose(),
                to: def.resting_pose(),
                started: Duration::ZERO,
                duration: Duration::ZERO,
            })
            .collect();

        Self {
            shapes,
            timers: Scheduler::new(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Advances the animation clock, starting a new drift for every shape
    /// whose previous one ended on the way.
    pub fn advance(&mut self, delta: Duration) {
        let until = self.timers.now().saturating_add(delta);
        while let Some((_, index)) = self.timers.pop_due(until) {
            self.retarget(index);
        }
        self.timers.advance_to(until);
    }

    fn retarget(&mut self, index: usize) {
        let now = self.timers.now();
        let Some(shape) = self.shapes.get_mut(index) else {
            return;
        };
        let def = shape.def;

        let range = def.range.abs();
        let target = Pose {
            x: random_between(&mut self.rng, -range..=range),
            y: random_between(&mut self.rng, -range..=range),
            scale: (def.scale + random_between(&mut self.rng, SCALE_JITTER))
                .clamp(MIN_SCALE, MAX_SCALE),
            rotate: def.rotate + random_between(&mut self.rng, ROTATE_JITTER_DEG),
        };
        let duration = random_secs(&mut self.rng, DRIFT_SECS);

        shape.from = shape.pose_at(now);
        shape.to = target;
        shape.started = now;
        shape.duration = duration;

        self.timers.schedule(duration, index);
    }

    /// Cancels every pending drift. Shapes finish their current transition
    /// and then stay put.
    pub fn stop(&mut self) -> usize {
        let cleared = self.timers.clear();
        if cleared > 0 {
            tracing::debug!(cleared, "backdrop animation stopped");
        }
        cleared
    }

    /// Returns whether any drift is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Current animation time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Every shape with its pose at the current animation time.
    pub fn poses(&self) -> impl Iterator<Item = (ShapeDef, Pose)> + '_ {
        let now = self.now();
        self.shapes
            .iter()
            .map(move |shape| (shape.def, shape.pose_at(now)))
    }
}

fn random_between(rng: &mut fastrand::Rng, range: RangeInclusive<f32>) -> f32 {
    let (low, high) = range.into_inner();
    low + rng.f32() * (high - low)
}

fn random_secs(rng: &mut fastrand::Rng, range: RangeInclusive<f32>) -> Duration {
    Duration::from_secs_f32(random_between(rng, range))
}
