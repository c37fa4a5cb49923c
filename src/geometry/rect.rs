/// Axis-aligned bounding box. `width == height == -1` marks the empty rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::empty()
    }
}

impl Rectangle {
    pub fn empty() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x1: 0.0,
            y1: 0.0,
            width: -1.0,
            height: -1.0,
        }
    }

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut r = Self::empty();
        r.set_bounds(x, y, width, height);
        r
    }

    pub fn set_empty(&mut self) -> &mut Self {
        *self = Self::empty();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.width == -1.0 && self.height == -1.0
    }

    pub fn set_location(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.x1 = x + self.width;
        self.y1 = y + self.height;
        self
    }

    pub fn set_dimension(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self.x1 = self.x + width;
        self.y1 = self.y + height;
        self
    }

    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.set_dimension(width, height)
    }

    /// Half-open containment: the far edges are excluded.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        !self.is_empty() && px >= self.x && px < self.x1 && py >= self.y && py < self.y1
    }

    /// Grow to include `(px, py)`. The first point turns an empty rectangle into a 0×0 one.
    pub fn union(&mut self, px: f64, py: f64) -> &mut Self {
        if self.is_empty() {
            self.x = px;
            self.x1 = px;
            self.y = py;
            self.y1 = py;
            self.width = 0.0;
            self.height = 0.0;
            return self;
        }

        self.x1 = self.x + self.width;
        self.y1 = self.y + self.height;

        if py < self.y {
            self.y = py;
        }
        if px < self.x {
            self.x = px;
        }
        if py > self.y1 {
            self.y1 = py;
        }
        if px > self.x1 {
            self.x1 = px;
        }

        self.width = self.x1 - self.x;
        self.height = self.y1 - self.y;
        self
    }

    pub fn union_rectangle(&mut self, r: &Rectangle) -> &mut Self {
        if r.is_empty() {
            return self;
        }
        self.union(r.x, r.y);
        self.union(r.x1, r.y1)
    }

    pub fn intersects(&self, r: &Rectangle) -> bool {
        if self.is_empty() || r.is_empty() {
            return false;
        }
        r.x1 > self.x && r.x < self.x1 && r.y1 > self.y && r.y < self.y1
    }

    /// Overlapping area of two rectangles, or `None` when they do not intersect.
    pub fn intersect(&self, r: &Rectangle) -> Option<Rectangle> {
        if !self.intersects(r) {
            return None;
        }
        let x = self.x.max(r.x);
        let y = self.y.max(r.y);
        let x1 = self.x1.min(r.x1);
        let y1 = self.y1.min(r.y1);
        Some(Rectangle::new(x, y, x1 - x, y1 - y))
    }

    pub fn to_kurbo(&self) -> Option<kurbo::Rect> {
        if self.is_empty() {
            return None;
        }
        Some(kurbo::Rect::new(self.x, self.y, self.x1, self.y1))
    }
}

impl From<kurbo::Rect> for Rectangle {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect.rs"]
mod tests;
