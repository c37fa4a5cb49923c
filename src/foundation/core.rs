pub use kurbo::{Affine, BezPath, Rect, Vec2};

/// Named pivot inside a node's bounding box, resolved to fractions of its size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Arbitrary fractional pivot (`0..1` on each axis).
    Custom { x: f64, y: f64 },
}

impl Anchor {
    /// Fractional `(x, y)` position of the anchor inside a box.
    pub fn percent(self) -> (f64, f64) {
        match self {
            Self::Center => (0.5, 0.5),
            Self::Top => (0.5, 0.0),
            Self::Bottom => (0.5, 1.0),
            Self::Left => (0.0, 0.5),
            Self::Right => (1.0, 0.5),
            Self::TopLeft => (0.0, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomRight => (1.0, 1.0),
            Self::Custom { x, y } => (x, y),
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Left | Self::Right)
    }
}

/// Horizontal mirroring requested by auto-rotating path motion.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ImageFlip {
    #[default]
    None,
    Horizontal,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
