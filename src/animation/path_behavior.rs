use std::{cell::RefCell, f64::consts::PI, rc::Rc};

use crate::{
    animation::behavior::{Behavior, BehaviorCore, BehaviorTarget},
    foundation::core::ImageFlip,
    geometry::point::Point,
    path::{PathSegment, composite::Path},
};

/// How an auto-rotating traveller faces its direction of motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoRotate {
    /// Rotate to the heading, no mirroring.
    #[default]
    FreeRotate,
    /// Artwork faces right; mirror it while moving left.
    LeftToRight,
    /// Artwork faces left; mirror it while moving right.
    RightToLeft,
}

/// Moves a target along a [`Path`].
#[derive(Debug, Default)]
pub struct PathBehavior {
    core: BehaviorCore,
    path: Option<Rc<RefCell<Path>>>,
    auto_rotate: bool,
    policy: AutoRotate,
    prev: Option<Point>,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl PathBehavior {
    pub fn new(path: Rc<RefCell<Path>>) -> Self {
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    pub fn set_path(&mut self, path: Rc<RefCell<Path>>) -> &mut Self {
        self.path = Some(path);
        self.prev = None;
        self
    }

    pub fn path(&self) -> Option<&Rc<RefCell<Path>>> {
        self.path.as_ref()
    }

    pub fn with_auto_rotate(mut self, auto_rotate: bool, policy: AutoRotate) -> Self {
        self.auto_rotate = auto_rotate;
        self.policy = policy;
        self
    }

    /// Offset added to every sampled position.
    pub fn with_translation(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    /// Point on the path for eased progress `progress`, before translation.
    pub fn position(&self, progress: f64) -> Option<Point> {
        let path = self.path.as_ref()?.try_borrow().ok()?;
        Some(path.position(progress))
    }

    fn orient(&mut self, point: Point, target: &mut dyn BehaviorTarget) {
        let prev = *self.prev.get_or_insert(point);
        let (dx, dy) = (point.x - prev.x, point.y - prev.y);
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        let mut angle = dy.atan2(dx);
        match self.policy {
            AutoRotate::FreeRotate => {}
            AutoRotate::LeftToRight => {
                if prev.x <= point.x {
                    target.set_image_flip(ImageFlip::None);
                } else {
                    target.set_image_flip(ImageFlip::Horizontal);
                    angle += PI;
                }
            }
            AutoRotate::RightToLeft => {
                if prev.x <= point.x {
                    target.set_image_flip(ImageFlip::Horizontal);
                } else {
                    target.set_image_flip(ImageFlip::None);
                    angle -= PI;
                }
            }
        }
        target.set_rotation(angle);
        self.prev = Some(point);
    }
}

impl Behavior for PathBehavior {
    fn core(&self) -> &BehaviorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BehaviorCore {
        &mut self.core
    }

    fn set_for_time(&mut self, progress: f64, target: &mut dyn BehaviorTarget) {
        let Some(point) = self.position(progress) else {
            return;
        };
        if self.auto_rotate {
            self.orient(point, target);
        }
        if self.core.applies_value() {
            target.set_location(self.translate_x + point.x, self.translate_y + point.y);
        }
    }

    fn rearm(&mut self) {
        self.core_mut().rearm();
        self.prev = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/path_behavior.rs"]
mod tests;
