use crate::{
    animation::behavior::{Behavior, BehaviorCore, BehaviorTarget},
    foundation::math::lerp,
};

/// Fades a target's alpha between two values.
#[derive(Debug)]
pub struct AlphaBehavior {
    core: BehaviorCore,
    pub start_alpha: f64,
    pub end_alpha: f64,
}

impl Default for AlphaBehavior {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl AlphaBehavior {
    pub fn new(start_alpha: f64, end_alpha: f64) -> Self {
        Self {
            core: BehaviorCore::default(),
            start_alpha,
            end_alpha,
        }
    }

    pub fn set_values(&mut self, start_alpha: f64, end_alpha: f64) -> &mut Self {
        self.start_alpha = start_alpha;
        self.end_alpha = end_alpha;
        self
    }
}

impl Behavior for AlphaBehavior {
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
        target.set_alpha(lerp(self.start_alpha, self.end_alpha, progress));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/alpha.rs"]
mod tests;
