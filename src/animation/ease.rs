/// Easing curve mapping linear progress to eased progress over [0, 1].
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity: output equals input.
    Linear,
    /// Quadratic ease-in: slow start, fast finish.
    InQuad,
    /// Quadratic ease-out: fast start, slow finish.
    OutQuad,
    /// Quadratic ease-in-out: slow at both ends.
    InOutQuad,
    /// Cubic ease-in: slow start, fast finish.
    InCubic,
    /// Cubic ease-out: fast start, slow finish.
    OutCubic,
    /// Cubic ease-in-out: slow at both ends.
    InOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` with control x values in [0, 1].
    CubicBezier {
        /// First control point x, in [0, 1].
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in [0, 1].
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Eased value for progress `t`; the input is clamped to [0, 1] first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // CSS cubic-bezier: given x in [0,1], solve u such that bx(u)=x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    const EPSILON: f64 = 1e-7;

    // Newton-Raphson first; converges in a handful of steps for well-formed
    // control points.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        if x_t.abs() < EPSILON {
            return sample_curve(y1, y2, t);
        }
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < EPSILON {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    // Bisection fallback for curves where the derivative vanishes.
    let mut lo = 0.0;
    let mut hi = 1.0;
    t = x;
    while hi - lo > EPSILON {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < EPSILON {
            break;
        }
        if x_t < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
