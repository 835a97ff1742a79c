// SPDX-License-Identifier: MPL-2.0
//! CSS-style cubic Bézier timing functions.

/// Timing curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`, as in
/// CSS `cubic-bezier()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Soft ease-out used for the backdrop drift.
    pub const DRIFT: Self = Self::new(0.22, 0.61, 0.36, 1.0);

    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t(x);
        sample(self.y1, self.y2, t)
    }

    /// Finds the curve parameter whose x coordinate is `x`.
    fn solve_t(self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-6;

        // Newton-Raphson from a linear guess; falls back to bisection when the
        // slope flattens out.
        let mut t = x;
        for _ in 0..8 {
            let error = sample(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = slope(self.x1, self.x2, t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

/// One coordinate of the curve at parameter `t`.
fn sample(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
}

fn slope(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(CubicBezier::DRIFT.apply(0.0), 0.0);
        assert_eq!(CubicBezier::DRIFT.apply(1.0), 1.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(CubicBezier::DRIFT.apply(-0.5), 0.0);
        assert_eq!(CubicBezier::DRIFT.apply(1.5), 1.0);
    }

    #[test]
    fn linear_curve_is_identity() {
        for step in 1..10 {
            let x = step as f32 / 10.0;
            assert!((CubicBezier::LINEAR.apply(x) - x).abs() < EPSILON);
        }
    }

    #[test]
    fn drift_curve_eases_out() {
        // Ahead of linear progress throughout, like any ease-out.
        for step in 1..10 {
            let x = step as f32 / 10.0;
            assert!(CubicBezier::DRIFT.apply(x) > x);
        }
    }

    #[test]
    fn drift_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = CubicBezier::DRIFT.apply(step as f32 / 100.0);
            assert!(value >= previous - EPSILON);
            previous = value;
        }
    }
}
