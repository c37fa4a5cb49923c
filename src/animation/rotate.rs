use crate::{
    animation::behavior::{Behavior, BehaviorCore, BehaviorTarget},
    foundation::{core::Anchor, math::lerp},
};

/// Spins a target between two angles (radians) about a pivot expressed as fractions of its size.
#[derive(Debug)]
pub struct RotateBehavior {
    core: BehaviorCore,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Default for RotateBehavior {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl RotateBehavior {
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            core: BehaviorCore::default(),
            start_angle,
            end_angle,
            anchor_x: 0.5,
            anchor_y: 0.5,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        (self.anchor_x, self.anchor_y) = anchor.percent();
        self
    }

    pub fn set_values(&mut self, start_angle: f64, end_angle: f64, anchor_x: f64, anchor_y: f64) {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
    }
}

impl Behavior for RotateBehavior {
    fn core(&self) -> &BehaviorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BehaviorCore {
        &mut self.core
    }

    fn set_for_time(&mut self, progress: f64, target: &mut dyn BehaviorTarget) {
        if !self.core.applies_value() {
            return;
        }
        let angle = lerp(self.start_angle, self.end_angle, progress);
        target.set_rotation_anchored(angle, self.anchor_x, self.anchor_y);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rotate.rs"]
mod tests;
