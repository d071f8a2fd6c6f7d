//! Easing functions for animation interpolation.
//!
//! Provides the easing curves used by the camera fly-to and the hero
//! stroke-draw timeline. All functions are designed for <100ns evaluation
//! time.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out.
    QuadraticInOut,
    /// Cubic ease-out.
    CubicOut,
    /// Cubic ease-in-out: `t<0.5 ? 4t³ : 1-(-2t+2)³/2`.
    CubicInOut,
}

impl EasingFunction {
    /// Default easing function: the camera's cubic ease-in-out.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 5] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticOut,
        EasingFunction::QuadraticInOut,
        EasingFunction::CubicOut,
        EasingFunction::CubicInOut,
    ];

    #[test]
    fn test_endpoints() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?}");
            assert_eq!(f.evaluate(1.0), 1.0, "{f:?}");
        }
    }

    #[test]
    fn test_cubic_in_out_shape() {
        let f = EasingFunction::CubicInOut;
        assert_eq!(f.evaluate(0.5), 0.5);
        assert!((f.evaluate(0.25) - 0.0625).abs() < 1e-6); // 4 * 0.25³
        assert!((f.evaluate(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_in_out_curves_are_symmetric() {
        for f in [EasingFunction::QuadraticInOut, EasingFunction::CubicInOut] {
            for i in 0..=10 {
                let t = i as f32 / 10.0;
                let mirrored = 1.0 - f.evaluate(1.0 - t);
                assert!((f.evaluate(t) - mirrored).abs() < 1e-5, "{f:?} {t}");
            }
        }
    }

    #[test]
    fn test_monotonic() {
        for f in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = f.evaluate(i as f32 / 100.0);
                assert!(v >= last, "{f:?}");
                last = v;
            }
        }
    }

    #[test]
    fn test_input_clamping() {
        for f in ALL {
            assert_eq!(f.evaluate(-0.5), 0.0);
            assert_eq!(f.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
