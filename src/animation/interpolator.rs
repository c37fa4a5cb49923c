//! Time-remap functions from normalized time to normalized progress.
//!
//! Every kind is a pure function of its parameters. Inputs are clamped to `[0, 1]` before the
//! optional ping-pong fold and the easing curve are applied.

use std::f64::consts::TAU;

use crate::{
    curve::bezier::{solve_cubic, solve_quadric},
    foundation::error::{KinemaError, KinemaResult},
    geometry::point::Point,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InterpolatorKind {
    Linear {
        #[serde(default)]
        inverse: bool,
    },
    ExponentialIn {
        exponent: f64,
    },
    ExponentialOut {
        exponent: f64,
    },
    ExponentialInOut {
        exponent: f64,
    },
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn {
        amplitude: f64,
        period: f64,
    },
    ElasticOut {
        amplitude: f64,
        period: f64,
    },
    ElasticInOut {
        amplitude: f64,
        period: f64,
    },
    /// Progress is the y coordinate of the curve at parameter `t`.
    QuadricBezier {
        points: [Point; 3],
    },
    CubicBezier {
        points: [Point; 4],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interpolator {
    #[serde(flatten)]
    pub kind: InterpolatorKind,
    #[serde(default)]
    pub ping_pong: bool,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::linear(false, false)
    }
}

impl Interpolator {
    pub fn new(kind: InterpolatorKind, ping_pong: bool) -> Self {
        Self { kind, ping_pong }
    }

    pub fn linear(ping_pong: bool, inverse: bool) -> Self {
        Self::new(InterpolatorKind::Linear { inverse }, ping_pong)
    }

    pub fn exponential_in(exponent: f64, ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::ExponentialIn { exponent }, ping_pong)
    }

    pub fn exponential_out(exponent: f64, ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::ExponentialOut { exponent }, ping_pong)
    }

    pub fn exponential_in_out(exponent: f64, ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::ExponentialInOut { exponent }, ping_pong)
    }

    pub fn bounce_in(ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::BounceIn, ping_pong)
    }

    pub fn bounce_out(ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::BounceOut, ping_pong)
    }

    pub fn bounce_in_out(ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::BounceInOut, ping_pong)
    }

    pub fn elastic_in(amplitude: f64, period: f64, ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::ElasticIn { amplitude, period }, ping_pong)
    }

    pub fn elastic_out(amplitude: f64, period: f64, ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::ElasticOut { amplitude, period }, ping_pong)
    }

    pub fn elastic_in_out(amplitude: f64, period: f64, ping_pong: bool) -> Self {
        Self::new(InterpolatorKind::ElasticInOut { amplitude, period }, ping_pong)
    }

    /// Bezier-shaped easing from 3 (quadric) or 4 (cubic) control points.
    pub fn bezier(points: &[Point], ping_pong: bool) -> KinemaResult<Self> {
        let kind = match *points {
            [a, b, c] => InterpolatorKind::QuadricBezier { points: [a, b, c] },
            [a, b, c, d] => InterpolatorKind::CubicBezier {
                points: [a, b, c, d],
            },
            _ => {
                return Err(KinemaError::config(format!(
                    "bezier interpolator needs 3 or 4 control points, got {}",
                    points.len()
                )));
            }
        };
        Ok(Self::new(kind, ping_pong))
    }

    /// `{x: t, y: f(t)}` for the clamped input `t`.
    pub fn position(&self, t: f64) -> Point {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Point::new(t, self.value(t))
    }

    /// Eased progress for normalized time `t`.
    pub fn value(&self, t: f64) -> f64 {
        let mut t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self.ping_pong {
            t = if t < 0.5 { t * 2.0 } else { 2.0 * (1.0 - t) };
        }
        self.kind.apply(t)
    }

    /// `n + 1` evenly spaced samples of the easing curve.
    pub fn contour(&self, n: usize) -> Vec<Point> {
        let n = n.max(1);
        (0..=n)
            .map(|i| self.position(i as f64 / n as f64))
            .collect()
    }

    /// Every kind with representative parameters, keyed by a stable name.
    pub fn catalog() -> Vec<(&'static str, Interpolator)> {
        vec![
            ("linear", Self::linear(false, false)),
            ("linear_inverse", Self::linear(false, true)),
            ("linear_ping_pong", Self::linear(true, false)),
            ("exponential_in_2", Self::exponential_in(2.0, false)),
            ("exponential_out_2", Self::exponential_out(2.0, false)),
            ("exponential_in_out_2", Self::exponential_in_out(2.0, false)),
            ("exponential_in_3", Self::exponential_in(3.0, false)),
            ("exponential_out_3", Self::exponential_out(3.0, false)),
            ("exponential_in_out_3", Self::exponential_in_out(3.0, false)),
            ("exponential_in_out_4_ping_pong", Self::exponential_in_out(4.0, true)),
            ("bounce_in", Self::bounce_in(false)),
            ("bounce_out", Self::bounce_out(false)),
            ("bounce_in_out", Self::bounce_in_out(false)),
            ("elastic_in", Self::elastic_in(1.1, 0.4, false)),
            ("elastic_out", Self::elastic_out(1.1, 0.4, false)),
            ("elastic_in_out", Self::elastic_in_out(1.1, 0.4, false)),
            (
                "quadric_bezier",
                Self::new(
                    InterpolatorKind::QuadricBezier {
                        points: [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0)],
                    },
                    false,
                ),
            ),
            (
                "cubic_bezier",
                Self::new(
                    InterpolatorKind::CubicBezier {
                        points: [
                            Point::new(0.0, 0.0),
                            Point::new(0.25, 0.1),
                            Point::new(0.25, 1.0),
                            Point::new(1.0, 1.0),
                        ],
                    },
                    false,
                ),
            ),
        ]
    }

    pub fn by_name(name: &str) -> Option<Interpolator> {
        Self::catalog()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, i)| i)
    }
}

impl InterpolatorKind {
    fn apply(&self, t: f64) -> f64 {
        match *self {
            Self::Linear { inverse } => {
                if inverse {
                    1.0 - t
                } else {
                    t
                }
            }
            Self::ExponentialIn { exponent } => t.powf(exponent),
            Self::ExponentialOut { exponent } => 1.0 - (1.0 - t).powf(exponent),
            Self::ExponentialInOut { exponent } => {
                let t = t * 2.0;
                if t < 1.0 {
                    t.powf(exponent) / 2.0
                } else {
                    1.0 - (2.0 - t).powf(exponent) / 2.0
                }
            }
            Self::BounceIn => bounce_in(t),
            Self::BounceOut => bounce(t),
            Self::BounceInOut => {
                if t < 0.5 {
                    bounce_in(t * 2.0) * 0.5
                } else {
                    bounce(t * 2.0 - 1.0) * 0.5 + 0.5
                }
            }
            Self::ElasticIn { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let (a, s) = elastic_shape(amplitude, period);
                let t = t - 1.0;
                -(a * 2f64.powf(10.0 * t) * ((t - s) * TAU / period).sin())
            }
            Self::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let (a, s) = elastic_shape(amplitude, period);
                a * 2f64.powf(-10.0 * t) * ((t - s) * TAU / period).sin() + 1.0
            }
            Self::ElasticInOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let (a, s) = elastic_shape(amplitude, period);
                let t = t * 2.0 - 1.0;
                if t < 0.0 {
                    -0.5 * (a * 2f64.powf(10.0 * t) * ((t - s) * TAU / period).sin())
                } else {
                    1.0 + 0.5 * (a * 2f64.powf(-10.0 * t) * ((t - s) * TAU / period).sin())
                }
            }
            Self::QuadricBezier { points } => solve_quadric(points, t).y,
            Self::CubicBezier { points } => solve_cubic(points, t).y,
        }
    }
}

/// Effective amplitude and phase shift. Amplitudes below 1 would leave `asin` undefined.
fn elastic_shape(amplitude: f64, period: f64) -> (f64, f64) {
    if amplitude < 1.0 {
        (1.0, period / 4.0)
    } else {
        (amplitude, period / TAU * (1.0 / amplitude).asin())
    }
}

fn bounce(t: f64) -> f64 {
    const K: f64 = 7.5625;
    if t < 1.0 / 2.75 {
        K * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        K * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        K * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        K * t * t + 0.984375
    }
}

fn bounce_in(t: f64) -> f64 {
    1.0 - bounce(1.0 - t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolator.rs"]
mod tests;
