use crate::animation::behavior::{Behavior, BehaviorCore, BehaviorEvent, BehaviorTarget, Step};

/// Runs child behaviors on a timeline relative to its own start.
///
/// Children are applied in insertion order with `container_time - start`, wrapped modulo the
/// container's duration when it cycles. Every time a cycling container wraps into a new cycle
/// all children are re-armed, so the container alone decides when its children stop running.
#[derive(Default)]
pub struct ContainerBehavior {
    core: BehaviorCore,
    children: Vec<Box<dyn Behavior>>,
    cycle_index: Option<u64>,
}

impl ContainerBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) -> &mut Self {
        self.children.push(behavior);
        self
    }

    pub fn with_behavior(mut self, behavior: Box<dyn Behavior>) -> Self {
        self.children.push(behavior);
        self
    }

    /// Remove every child whose id matches.
    pub fn remove_behavior(&mut self, id: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|b| b.id() != Some(id));
        before - self.children.len()
    }

    pub fn children(&self) -> &[Box<dyn Behavior>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        &mut self.children
    }

    /// `elapsed` is unwrapped time since start; `local` is the same time wrapped into one cycle.
    fn apply_children(&mut self, elapsed: f64, local: f64, target: &mut dyn BehaviorTarget) {
        if self.core.is_cycle() && self.core.duration() > 0.0 {
            let index = (elapsed / self.core.duration()).floor().max(0.0) as u64;
            if self.cycle_index.is_some_and(|i| i != index) {
                for child in &mut self.children {
                    child.rearm();
                }
            }
            self.cycle_index = Some(index);
        }
        for child in &mut self.children {
            child.apply(local, target);
        }
    }
}

impl Behavior for ContainerBehavior {
    fn core(&self) -> &BehaviorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BehaviorCore {
        &mut self.core
    }

    /// Containers write nothing themselves.
    fn set_for_time(&mut self, _progress: f64, _target: &mut dyn BehaviorTarget) {}

    fn apply(&mut self, time: f64, target: &mut dyn BehaviorTarget) {
        match self.core.step(time) {
            Step::Idle => {}
            Step::Expire(time) => self.set_expired(time, target),
            Step::Active {
                time,
                local,
                progress,
            } => {
                let elapsed = time - self.core.start_time();
                self.apply_children(elapsed, local, target);
                self.core.fire(&BehaviorEvent::Applied { time, progress });
            }
        }
    }

    fn set_expired(&mut self, time: f64, target: &mut dyn BehaviorTarget) {
        if self.core.is_expired() {
            return;
        }
        let local = time - self.core.start_time();
        for child in &mut self.children {
            if !child.core().is_expired() {
                child.set_expired(local, target);
            }
        }
        self.core.mark_expired(time);
    }

    fn rearm(&mut self) {
        self.core.rearm();
        self.cycle_index = None;
        for child in &mut self.children {
            child.rearm();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/container.rs"]
mod tests;
