use std::ops::Mul;

use crate::{
    foundation::math::SINGULAR_EPSILON,
    geometry::{point::Point, rect::Rectangle},
};

/// 2D affine transform as a row-major 3×3 homogeneous matrix.
///
/// Only the two active rows are stored:
///
/// ```text
/// | m[0] m[1] m[2] |
/// | m[3] m[4] m[5] |
/// |  0    0    1   |
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matrix {
    pub m: [f64; 6],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    pub fn new(m00: f64, m01: f64, m02: f64, m10: f64, m11: f64, m12: f64) -> Self {
        Self {
            m: [m00, m01, m02, m10, m11, m12],
        }
    }

    pub fn rotation(angle: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.set_rotation(angle);
        m
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.set_scale(sx, sy);
        m
    }

    pub fn translation(x: f64, y: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.set_translate(x, y);
        m
    }

    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// True when the linear part is identity, i.e. the matrix only translates.
    pub fn is_translation(&self) -> bool {
        self.m[0] == 1.0 && self.m[1] == 0.0 && self.m[3] == 0.0 && self.m[4] == 1.0
    }

    pub fn set_rotation(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        self.m = [c, -s, 0.0, s, c, 0.0];
        self
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.m = [sx, 0.0, 0.0, 0.0, sy, 0.0];
        self
    }

    pub fn set_translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.m = [1.0, 0.0, x, 0.0, 1.0, y];
        self
    }

    /// `self = self ∘ other`: `other` is applied to points first.
    pub fn multiply(&mut self, other: &Matrix) -> &mut Self {
        self.m = compose(self, other);
        self
    }

    /// `self = other ∘ self`.
    pub fn premultiply(&mut self, other: &Matrix) -> &mut Self {
        self.m = compose(other, self);
        self
    }

    /// Scales every stored entry, translation included.
    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        for v in &mut self.m {
            *v *= scalar;
        }
        self
    }

    pub fn determinant(&self) -> f64 {
        self.m[0] * self.m[4] - self.m[1] * self.m[3]
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Matrix> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        Some(self.to_affine().inverse().into())
    }

    /// Transform `point` in place.
    pub fn transform_coord(&self, point: &mut Point) {
        *point = (self.to_affine() * kurbo::Point::from(*point)).into();
    }

    pub fn transform_point(&self, mut point: Point) -> Point {
        self.transform_coord(&mut point);
        point
    }

    /// Axis-aligned bounds of a transformed rectangle.
    pub fn transform_rect(&self, r: &Rectangle) -> Rectangle {
        let mut out = Rectangle::empty();
        if r.is_empty() {
            return out;
        }
        for (x, y) in [(r.x, r.y), (r.x1, r.y), (r.x1, r.y1), (r.x, r.y1)] {
            let p = self.transform_point(Point::new(x, y));
            out.union(p.x, p.y);
        }
        out
    }

    /// `translate(tx, ty) ∘ rotate-about(rot_pivot) ∘ scale-about(scale_pivot)` folded into a
    /// single pass over the six entries instead of five full multiplications.
    pub fn anchored(
        tx: f64,
        ty: f64,
        angle: f64,
        rot_pivot: (f64, f64),
        scale: (f64, f64),
        scale_pivot: (f64, f64),
    ) -> Matrix {
        let (mut m0, mut m1, mut m2) = (1.0, 0.0, tx);
        let (mut m3, mut m4, mut m5) = (0.0, 1.0, ty);

        if angle != 0.0 {
            let (rx, ry) = rot_pivot;
            m2 += m0 * rx + m1 * ry;
            m5 += m3 * rx + m4 * ry;
            let (s, c) = angle.sin_cos();
            let (a0, a1, a3, a4) = (m0, m1, m3, m4);
            m0 = a0 * c + a1 * s;
            m1 = -a0 * s + a1 * c;
            m3 = a3 * c + a4 * s;
            m4 = -a3 * s + a4 * c;
            m2 += -m0 * rx - m1 * ry;
            m5 += -m3 * rx - m4 * ry;
        }

        let (sx, sy) = scale;
        if sx != 1.0 || sy != 1.0 {
            let (px, py) = scale_pivot;
            m2 += m0 * px + m1 * py;
            m5 += m3 * px + m4 * py;
            m0 *= sx;
            m1 *= sy;
            m3 *= sx;
            m4 *= sy;
            m2 += -m0 * px - m1 * py;
            m5 += -m3 * px - m4 * py;
        }

        Matrix::new(m0, m1, m2, m3, m4, m5)
    }

    /// True when every entry is within `eps` of `other`'s.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn to_affine(&self) -> kurbo::Affine {
        let [m00, m01, m02, m10, m11, m12] = self.m;
        kurbo::Affine::new([m00, m10, m01, m11, m02, m12])
    }
}

/// `a ∘ b` through kurbo, which applies `b` first.
fn compose(a: &Matrix, b: &Matrix) -> [f64; 6] {
    Matrix::from(a.to_affine() * b.to_affine()).m
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix {
            m: compose(&self, &rhs),
        }
    }
}

impl From<kurbo::Affine> for Matrix {
    fn from(a: kurbo::Affine) -> Self {
        let [a0, b0, c0, d0, e0, f0] = a.as_coeffs();
        Matrix::new(a0, c0, e0, b0, d0, f0)
    }
}

impl From<Matrix> for kurbo::Affine {
    fn from(m: Matrix) -> Self {
        m.to_affine()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/matrix.rs"]
mod tests;
