#![forbid(unsafe_code)]

//! Easing curves mapping linear progress `t ∈ [0, 1]` to eased progress.
//!
//! All curves satisfy `f(0) == 0` and `f(1) == 1`. Inputs outside `[0, 1]`
//! are clamped first.

/// Plain easing function pointer.
pub type EasingFn = fn(f64) -> f64;

/// Identity curve.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-in.
#[must_use]
pub fn ease_in_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// The stock "ease" curve: cubic Bézier `(0.42, 0, 1, 1)`.
#[must_use]
pub fn ease(t: f64) -> f64 {
    CubicBezier::EASE.apply(t)
}

/// Run `f` forwards for the first half and mirrored for the second half.
#[must_use]
pub fn in_out(f: EasingFn, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        f(t * 2.0) / 2.0
    } else {
        1.0 - f((1.0 - t) * 2.0) / 2.0
    }
}

/// Unit cubic Bézier curve with control points `(x1, y1)` and `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const EASE: Self = Self::new(0.42, 0.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluate the curve's `y` at horizontal position `x`.
    ///
    /// Solves `x(t) = x` by Newton-Raphson, falling back to bisection when
    /// the derivative flattens out.
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let cx = 3.0 * self.x1;
        let bx = 3.0 * (self.x2 - self.x1) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * self.y1;
        let by = 3.0 * (self.y2 - self.y1) - cy;
        let ay = 1.0 - cy - by;

        let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
        let slope = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

        let mut t = x;
        let mut solved = false;
        for _ in 0..8 {
            let err = sample(ax, bx, cx, t) - x;
            if err.abs() < 1e-7 {
                solved = true;
                break;
            }
            let d = slope(ax, bx, cx, t);
            if d.abs() < 1e-7 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        if !solved {
            let (mut lo, mut hi) = (0.0, 1.0);
            t = x;
            for _ in 0..32 {
                let err = sample(ax, bx, cx, t) - x;
                if err.abs() < 1e-7 {
                    break;
                }
                if err > 0.0 {
                    hi = t;
                } else {
                    lo = t;
                }
                t = 0.5 * (lo + hi);
            }
        }

        sample(ay, by, cy, t)
    }
}

/// Named easing curve, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    /// Cubic Bézier `(0.42, 0, 1, 1)`.
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInCubic,
    EaseOutCubic,
    /// `in_out(ease)`: the default timing curve.
    #[default]
    InOutEase,
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Map linear progress to eased progress.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Linear => linear(t),
            Self::Ease => ease(t),
            Self::EaseIn => ease_in(t),
            Self::EaseOut => ease_out(t),
            Self::EaseInOut => ease_in_out(t),
            Self::EaseInCubic => ease_in_cubic(t),
            Self::EaseOutCubic => ease_out_cubic(t),
            Self::InOutEase => in_out(ease, t),
            Self::CubicBezier(curve) => curve.apply(t),
        }
    }
}
