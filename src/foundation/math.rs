/// Band around zero in which [`crate::Point::length`] reports [`DEGENERATE_LENGTH`].
pub(crate) const LENGTH_EPSILON: f64 = 0.005;

/// Stand-in length for vectors that are effectively zero.
pub(crate) const DEGENERATE_LENGTH: f64 = 0.000_001;

/// Scale factors that hit exactly zero are clamped to this value.
pub(crate) const SCALE_EPSILON: f64 = 0.01;

/// Determinants with a smaller magnitude are treated as singular.
pub(crate) const SINGULAR_EPSILON: f64 = 1e-12;

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wrap `t` into `[0, 1]`. Values already in range (including exactly 1) are kept.
#[inline]
pub(crate) fn wrap01(t: f64) -> f64 {
    if (0.0..=1.0).contains(&t) {
        return t;
    }
    let w = t % 1.0;
    if w < 0.0 { w + 1.0 } else { w }
}

#[inline]
pub(crate) fn non_zero_scale(s: f64) -> f64 {
    if s == 0.0 { SCALE_EPSILON } else { s }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
