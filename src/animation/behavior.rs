//! Behavior state machine shared by every animation kind.
//!
//! A behavior owns a time window `[start, start + duration)` and an [`Interpolator`]. Each call to
//! [`Behavior::apply`] maps scene time into that window, eases it, and hands the resulting
//! progress to the kind-specific [`Behavior::set_for_time`]. Outside the window a non-cycling
//! behavior expires exactly once, leaving its target at the end value.

use std::fmt;

use crate::{animation::interpolator::Interpolator, foundation::core::ImageFlip};

/// What a behavior may write to. Implemented by actor state and by paths.
pub trait BehaviorTarget {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn location(&self) -> (f64, f64);
    fn set_location(&mut self, x: f64, y: f64);
    /// Rotation about a pivot given as fractions of the target's size.
    fn set_rotation_anchored(&mut self, angle: f64, anchor_x: f64, anchor_y: f64);
    fn set_scale_anchored(&mut self, sx: f64, sy: f64, anchor_x: f64, anchor_y: f64);
    fn set_alpha(&mut self, alpha: f64);

    fn set_rotation(&mut self, angle: f64) {
        self.set_rotation_anchored(angle, 0.5, 0.5);
    }

    fn set_image_flip(&mut self, _flip: ImageFlip) {}

    /// Write a named scalar. Returns `false` when the name is unknown.
    fn set_property(&mut self, _name: &str, _value: f64) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BehaviorStatus {
    #[default]
    NotStarted,
    Started,
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BehaviorEvent {
    Started { time: f64 },
    Applied { time: f64, progress: f64 },
    Expired { time: f64 },
}

pub type BehaviorListener = Box<dyn FnMut(Option<&str>, &BehaviorEvent)>;

/// Outcome of mapping scene time into a behavior's window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Step {
    Idle,
    Expire(f64),
    /// `local` is time since start, already wrapped when cycling.
    Active { time: f64, local: f64, progress: f64 },
}

/// Timing and bookkeeping common to all behaviors.
pub struct BehaviorCore {
    id: Option<String>,
    start_time: f64,
    duration: f64,
    cycle: bool,
    status: BehaviorStatus,
    interpolator: Interpolator,
    time_offset: f64,
    solved: bool,
    value_application: bool,
    listeners: Vec<BehaviorListener>,
}

impl Default for BehaviorCore {
    fn default() -> Self {
        Self {
            id: None,
            start_time: -1.0,
            duration: 0.0,
            cycle: false,
            status: BehaviorStatus::NotStarted,
            interpolator: Interpolator::default(),
            time_offset: 0.0,
            solved: true,
            value_application: true,
            listeners: Vec::new(),
        }
    }
}

impl fmt::Debug for BehaviorCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorCore")
            .field("id", &self.id)
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("cycle", &self.cycle)
            .field("status", &self.status)
            .field("interpolator", &self.interpolator)
            .field("time_offset", &self.time_offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl BehaviorCore {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    /// Arm the window at an absolute start time.
    pub fn set_frame_time(&mut self, start: f64, duration: f64) -> &mut Self {
        self.start_time = start;
        self.duration = duration;
        self.solved = true;
        self.status = BehaviorStatus::NotStarted;
        self
    }

    /// Arm the window `delay` after whatever time the behavior is first applied at.
    pub fn set_delay_time(&mut self, delay: f64, duration: f64) -> &mut Self {
        self.start_time = delay;
        self.duration = duration;
        self.solved = false;
        self.status = BehaviorStatus::NotStarted;
        self
    }

    /// Disarm. The behavior becomes a no-op until re-armed.
    pub fn set_out_of_frame_time(&mut self) -> &mut Self {
        self.start_time = -1.0;
        self.status = BehaviorStatus::NotStarted;
        self
    }

    pub fn set_cycle(&mut self, cycle: bool) -> &mut Self {
        self.cycle = cycle;
        self
    }

    pub fn set_interpolator(&mut self, interpolator: Interpolator) -> &mut Self {
        self.interpolator = interpolator;
        self
    }

    /// Shift applied times by `offset * duration`.
    pub fn set_time_offset(&mut self, offset: f64) -> &mut Self {
        self.time_offset = offset;
        self
    }

    pub fn set_value_application(&mut self, apply: bool) -> &mut Self {
        self.value_application = apply;
        self
    }

    pub fn add_listener(&mut self, listener: impl FnMut(Option<&str>, &BehaviorEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn empty_listener_list(&mut self) {
        self.listeners.clear();
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_cycle(&self) -> bool {
        self.cycle
    }

    pub fn status(&self) -> BehaviorStatus {
        self.status
    }

    pub fn is_expired(&self) -> bool {
        self.status == BehaviorStatus::Expired
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    pub fn applies_value(&self) -> bool {
        self.value_application
    }

    /// Whether `time` falls inside the window. Pure query; fires nothing.
    pub fn is_in_time(&self, time: f64) -> bool {
        if self.is_expired() || self.start_time < 0.0 || !self.solved {
            return false;
        }
        let time = self.wrap(time);
        self.start_time <= time && time < self.start_time + self.duration
    }

    /// Put the behavior back into `NotStarted` without touching its window.
    pub(crate) fn rearm(&mut self) {
        self.status = BehaviorStatus::NotStarted;
    }

    fn wrap(&self, time: f64) -> f64 {
        if self.cycle && self.duration > 0.0 && time >= self.start_time {
            (time - self.start_time) % self.duration + self.start_time
        } else {
            time
        }
    }

    pub(crate) fn step(&mut self, time: f64) -> Step {
        if !self.solved {
            self.start_time += time;
            self.solved = true;
        }
        if self.is_expired() || self.start_time < 0.0 {
            return Step::Idle;
        }

        let time = time + self.time_offset * self.duration;
        let wrapped = self.wrap(time);
        if wrapped >= self.start_time + self.duration {
            return Step::Expire(time);
        }
        if wrapped < self.start_time {
            return Step::Idle;
        }

        if self.status == BehaviorStatus::NotStarted {
            self.status = BehaviorStatus::Started;
            self.fire(&BehaviorEvent::Started { time });
        }
        let local = wrapped - self.start_time;
        let progress = self.interpolator.position(local / self.duration).y;
        Step::Active {
            time,
            local,
            progress,
        }
    }

    pub(crate) fn mark_expired(&mut self, time: f64) {
        self.status = BehaviorStatus::Expired;
        tracing::trace!(id = ?self.id, time, "behavior expired");
        self.fire(&BehaviorEvent::Expired { time });
    }

    pub(crate) fn fire(&mut self, event: &BehaviorEvent) {
        let id = self.id.as_deref();
        for listener in &mut self.listeners {
            listener(id, event);
        }
    }
}

/// A time-boxed writer of target properties.
pub trait Behavior {
    fn core(&self) -> &BehaviorCore;
    fn core_mut(&mut self) -> &mut BehaviorCore;

    /// Write the value for eased progress `progress` (usually in `[0, 1]`).
    fn set_for_time(&mut self, progress: f64, target: &mut dyn BehaviorTarget);

    fn apply(&mut self, time: f64, target: &mut dyn BehaviorTarget) {
        match self.core_mut().step(time) {
            Step::Idle => {}
            Step::Expire(time) => self.set_expired(time, target),
            Step::Active { time, progress, .. } => {
                self.set_for_time(progress, target);
                self.core_mut()
                    .fire(&BehaviorEvent::Applied { time, progress });
            }
        }
    }

    /// Leave the target at the end value and mark expired. Later calls do nothing.
    fn set_expired(&mut self, time: f64, target: &mut dyn BehaviorTarget) {
        if self.core().is_expired() {
            return;
        }
        let end = self.core().interpolator().position(1.0).y;
        self.set_for_time(end, target);
        self.core_mut().mark_expired(time);
    }

    /// Return to `NotStarted` so the window can run again.
    fn rearm(&mut self) {
        self.core_mut().rearm();
    }

    fn id(&self) -> Option<&str> {
        self.core().id()
    }

    fn is_behavior_in_time(&self, time: f64) -> bool {
        self.core().is_in_time(time)
    }
}

/// Chainable configuration for concrete behaviors.
pub trait BehaviorExt: Behavior + Sized {
    fn with_frame_time(mut self, start: f64, duration: f64) -> Self {
        self.core_mut().set_frame_time(start, duration);
        self
    }

    fn with_delay_time(mut self, delay: f64, duration: f64) -> Self {
        self.core_mut().set_delay_time(delay, duration);
        self
    }

    fn with_cycle(mut self, cycle: bool) -> Self {
        self.core_mut().set_cycle(cycle);
        self
    }

    fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.core_mut().set_interpolator(interpolator);
        self
    }

    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.core_mut().set_id(id);
        self
    }

    fn with_time_offset(mut self, offset: f64) -> Self {
        self.core_mut().set_time_offset(offset);
        self
    }

    fn with_value_application(mut self, apply: bool) -> Self {
        self.core_mut().set_value_application(apply);
        self
    }

    fn boxed(self) -> Box<dyn Behavior>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<B: Behavior> BehaviorExt for B {}

#[cfg(test)]
#[path = "../../tests/unit/animation/behavior.rs"]
mod tests;
