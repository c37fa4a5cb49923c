//! Parametric curves: quadric/cubic Bezier and uniform Catmull-Rom.
//!
//! Curves cache their approximate arc length and bounding box. Both are sampled at a fixed step
//! of [`CURVE_STEP`] and are only refreshed by [`Curve::update`]; editing a control point through
//! a shared handle leaves the caches stale until then.

pub(crate) mod bezier;
pub(crate) mod catmull;

use crate::{
    foundation::error::{KinemaError, KinemaResult},
    geometry::{
        point::{Point, SharedPoint},
        rect::Rectangle,
    },
};

/// Parameter step used for length and bounding-box sampling.
pub const CURVE_STEP: f64 = 0.05;
const CURVE_SAMPLES: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CurveKind {
    QuadricBezier,
    CubicBezier,
    CatmullRom,
}

impl CurveKind {
    pub fn num_control_points(self) -> usize {
        match self {
            Self::QuadricBezier => 3,
            Self::CubicBezier | Self::CatmullRom => 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Curve {
    kind: CurveKind,
    coords: Vec<SharedPoint>,
    length: f64,
    bbox: Rectangle,
}

impl Curve {
    /// Bezier from 3 (quadric) or 4 (cubic) control points.
    pub fn bezier(points: Vec<SharedPoint>) -> KinemaResult<Self> {
        let kind = match points.len() {
            3 => CurveKind::QuadricBezier,
            4 => CurveKind::CubicBezier,
            n => {
                return Err(KinemaError::config(format!(
                    "bezier curve needs 3 or 4 control points, got {n}"
                )));
            }
        };
        Ok(Self::with_kind(kind, points))
    }

    pub fn quadric(p0: Point, p1: Point, p2: Point) -> Self {
        Self::with_kind(
            CurveKind::QuadricBezier,
            vec![p0.into(), p1.into(), p2.into()],
        )
    }

    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self::with_kind(
            CurveKind::CubicBezier,
            vec![p0.into(), p1.into(), p2.into(), p3.into()],
        )
    }

    /// Quadric Bezier over existing handles, so endpoints can be shared with neighbours.
    pub fn quadric_handles(p0: SharedPoint, p1: SharedPoint, p2: SharedPoint) -> Self {
        Self::with_kind(CurveKind::QuadricBezier, vec![p0, p1, p2])
    }

    pub fn cubic_handles(
        p0: SharedPoint,
        p1: SharedPoint,
        p2: SharedPoint,
        p3: SharedPoint,
    ) -> Self {
        Self::with_kind(CurveKind::CubicBezier, vec![p0, p1, p2, p3])
    }

    /// Catmull-Rom span from `p1` to `p2`; `p0` and `p3` shape the tangents.
    pub fn catmull_rom(points: [SharedPoint; 4]) -> Self {
        Self::with_kind(CurveKind::CatmullRom, points.into())
    }

    fn with_kind(kind: CurveKind, coords: Vec<SharedPoint>) -> Self {
        let mut c = Self {
            kind,
            coords,
            length: 0.0,
            bbox: Rectangle::empty(),
        };
        c.update();
        c
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn control_points(&self) -> &[SharedPoint] {
        &self.coords
    }

    pub fn num_control_points(&self) -> usize {
        self.coords.len()
    }

    pub fn control_point(&self, index: usize) -> Option<&SharedPoint> {
        self.coords.get(index)
    }

    /// Replace the control point handle at `index`. Call [`Curve::update`] afterwards.
    pub fn set_point(&mut self, point: SharedPoint, index: usize) -> KinemaResult<()> {
        let n = self.coords.len();
        let slot = self.coords.get_mut(index).ok_or_else(|| {
            KinemaError::geometry(format!("control point {index} out of range (0..{n})"))
        })?;
        *slot = point;
        Ok(())
    }

    /// Replace all control points; the count must match the curve kind.
    pub fn set_points(&mut self, points: Vec<SharedPoint>) -> KinemaResult<()> {
        match self.kind {
            CurveKind::QuadricBezier | CurveKind::CubicBezier => {
                *self = Self::bezier(points)?;
            }
            CurveKind::CatmullRom => {
                let pts: [SharedPoint; 4] = points.try_into().map_err(|v: Vec<_>| {
                    KinemaError::config(format!(
                        "catmull-rom curve needs 4 control points, got {}",
                        v.len()
                    ))
                })?;
                *self = Self::catmull_rom(pts);
            }
        }
        Ok(())
    }

    /// Point on the curve for `t` in `[0, 1]`.
    pub fn solve(&self, t: f64) -> Point {
        let p = |i: usize| self.coords[i].get();
        match self.kind {
            CurveKind::QuadricBezier => bezier::solve_quadric([p(0), p(1), p(2)], t),
            CurveKind::CubicBezier => bezier::solve_cubic([p(0), p(1), p(2), p(3)], t),
            CurveKind::CatmullRom => catmull::solve_catmull_rom([p(0), p(1), p(2), p(3)], t),
        }
    }

    /// Recompute cached length and bounding box from the current control points.
    pub fn update(&mut self) {
        self.length = self.calc_length();
        self.bbox = self.calc_bounding_box();
    }

    /// Approximate arc length: 20 chords sampled at [`CURVE_STEP`].
    pub fn calc_length(&self) -> f64 {
        let mut prev = self.solve(0.0);
        let mut len = 0.0;
        for i in 1..=CURVE_SAMPLES {
            let pt = self.solve(sample_t(i));
            len += pt.distance(prev);
            prev = pt;
        }
        len
    }

    fn calc_bounding_box(&self) -> Rectangle {
        let mut r = Rectangle::empty();
        for i in 0..=CURVE_SAMPLES {
            let pt = self.solve(sample_t(i));
            r.union(pt.x, pt.y);
        }
        r
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bounding_box(&self) -> Rectangle {
        self.bbox
    }

    pub fn start_curve_position(&self) -> Point {
        match self.kind {
            CurveKind::CatmullRom => self.coords[1].get(),
            _ => self.coords[0].get(),
        }
    }

    pub fn end_curve_position(&self) -> Point {
        match self.kind {
            CurveKind::CatmullRom => self.coords[2].get(),
            _ => self.coords[self.coords.len() - 1].get(),
        }
    }

    /// `n + 1` evenly spaced samples from start to end.
    pub fn contour(&self, n: usize) -> Vec<Point> {
        let n = n.max(1);
        (0..=n).map(|i| self.solve(i as f64 / n as f64)).collect()
    }

    /// Append this curve to `out`, assuming the current point is the curve start.
    pub fn append_to(&self, out: &mut kurbo::BezPath) {
        let p = |i: usize| kurbo::Point::from(self.coords[i].get());
        match self.kind {
            CurveKind::QuadricBezier => out.quad_to(p(1), p(2)),
            CurveKind::CubicBezier => out.curve_to(p(1), p(2), p(3)),
            CurveKind::CatmullRom => {
                let pts = [0, 1, 2, 3].map(|i| self.coords[i].get());
                let [_, c1, c2, end] = catmull::catmull_rom_to_cubic(pts);
                out.curve_to(c1, c2, end);
            }
        }
    }
}

fn sample_t(i: u32) -> f64 {
    if i >= CURVE_SAMPLES {
        1.0
    } else {
        f64::from(i) * CURVE_STEP
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/curve.rs"]
mod tests;
