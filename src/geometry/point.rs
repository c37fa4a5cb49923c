use std::{cell::Cell, fmt, rc::Rc};

use crate::foundation::math::{DEGENERATE_LENGTH, LENGTH_EPSILON};

/// Mutable 2D coordinate. `z` is carried along but only used incidentally.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn translate_point(&mut self, p: Point) -> &mut Self {
        self.x += p.x;
        self.y += p.y;
        self.z += p.z;
        self
    }

    pub fn subtract(&mut self, p: Point) -> &mut Self {
        self.x -= p.x;
        self.y -= p.y;
        self.z -= p.z;
        self
    }

    pub fn multiply(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self
    }

    /// Rotate around the origin by `angle` radians.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * c - y * s;
        self.y = x * s + y * c;
        self
    }

    /// Keep the length, point in direction `angle`.
    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        let len = self.length();
        self.x = angle.cos() * len;
        self.y = angle.sin() * len;
        self
    }

    pub fn set_length(&mut self, length: f64) -> &mut Self {
        let len = self.length();
        if len > DEGENERATE_LENGTH {
            self.multiply(length / len);
        } else {
            self.x = length;
            self.y = length;
            self.z = length;
        }
        self
    }

    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Clamp the length to `max`.
    pub fn limit(&mut self, max: f64) -> &mut Self {
        let sq = self.length_squared();
        if sq + 0.01 > max * max {
            let len = sq.sqrt();
            if len > 0.0 {
                self.x = self.x / len * max;
                self.y = self.y / len * max;
                self.z = self.z / len * max;
            }
        }
        self
    }

    /// Euclidean length; never returns zero so it is safe to divide by.
    pub fn length(&self) -> f64 {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if len < LENGTH_EPSILON {
            DEGENERATE_LENGTH
        } else {
            len
        }
    }

    pub fn length_squared(&self) -> f64 {
        let sq = self.x * self.x + self.y * self.y + self.z * self.z;
        if sq < LENGTH_EPSILON { 0.0 } else { sq }
    }

    pub fn distance(&self, p: Point) -> f64 {
        self.distance_squared(p).sqrt()
    }

    pub fn distance_squared(&self, p: Point) -> f64 {
        let dx = self.x - p.x;
        let dy = self.y - p.y;
        let dz = self.z - p.z;
        dx * dx + dy * dy + dz * dz
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Vec2 {
    fn from(p: Point) -> Self {
        kurbo::Vec2::new(p.x, p.y)
    }
}

/// Control point handle shared between path segments.
///
/// Joined segments hold clones of the same handle so moving one endpoint moves every segment
/// that touches it. Single-threaded by construction.
#[derive(Clone, Default)]
pub struct SharedPoint(Rc<Cell<Point>>);

impl SharedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_point(Point::new(x, y))
    }

    pub fn from_point(p: Point) -> Self {
        Self(Rc::new(Cell::new(p)))
    }

    pub fn get(&self) -> Point {
        self.0.get()
    }

    pub fn set(&self, p: Point) {
        self.0.set(p);
    }

    pub fn set_xy(&self, x: f64, y: f64) {
        let mut p = self.0.get();
        p.x = x;
        p.y = y;
        self.0.set(p);
    }

    pub fn translate(&self, dx: f64, dy: f64) {
        let mut p = self.0.get();
        p.translate(dx, dy);
        self.0.set(p);
    }

    /// True when both handles refer to the same control point.
    pub fn ptr_eq(&self, other: &SharedPoint) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A new, unshared handle with the same coordinates.
    pub fn detached(&self) -> Self {
        Self::from_point(self.get())
    }
}

impl fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPoint").field(&self.get()).finish()
    }
}

impl From<Point> for SharedPoint {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/point.rs"]
mod tests;
