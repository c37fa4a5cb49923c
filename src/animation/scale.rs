use crate::{
    animation::behavior::{Behavior, BehaviorCore, BehaviorTarget},
    foundation::{
        core::Anchor,
        math::{lerp, non_zero_scale},
    },
};

/// Scales a target on each axis independently about an anchor.
///
/// A factor that lands exactly on zero is written as `0.01` so the target's
/// matrix stays invertible.
#[derive(Debug)]
pub struct ScaleBehavior {
    core: BehaviorCore,
    pub start_scale_x: f64,
    pub end_scale_x: f64,
    pub start_scale_y: f64,
    pub end_scale_y: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Default for ScaleBehavior {
    fn default() -> Self {
        Self::new((1.0, 1.0), (1.0, 1.0))
    }
}

impl ScaleBehavior {
    /// `(start, end)` pairs for each axis.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self {
            core: BehaviorCore::default(),
            start_scale_x: x.0,
            end_scale_x: x.1,
            start_scale_y: y.0,
            end_scale_y: y.1,
            anchor_x: 0.5,
            anchor_y: 0.5,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        (self.anchor_x, self.anchor_y) = anchor.percent();
        self
    }
}

impl Behavior for ScaleBehavior {
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
        let sx = non_zero_scale(lerp(self.start_scale_x, self.end_scale_x, progress));
        let sy = non_zero_scale(lerp(self.start_scale_y, self.end_scale_y, progress));
        target.set_scale_anchored(sx, sy, self.anchor_x, self.anchor_y);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scale.rs"]
mod tests;
