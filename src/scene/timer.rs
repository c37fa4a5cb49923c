//! Time-boxed callbacks scoped to a scene's virtual time.
//!
//! Timers are checked once per scene tick before actors animate. Cancelling runs the cancel
//! callback immediately, but the task is only removed by the next sweep.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Mutable view of a timer handed to its callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerState {
    pub start_time: f64,
    pub duration: f64,
    remove: bool,
}

impl TimerState {
    /// Restart the countdown from `time`.
    pub fn reset(&mut self, time: f64) {
        self.start_time = time;
        self.remove = false;
    }

    pub fn add_time(&mut self, time: f64) {
        self.duration += time;
    }

    pub fn remaining_time(&self, now: f64) -> f64 {
        self.duration - (now - self.start_time)
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.remove
    }
}

/// `(scene_time, elapsed_since_start, timer)`.
pub type TimerCallback = Box<dyn FnMut(f64, f64, &mut TimerState)>;

pub struct TimerTask {
    id: TimerId,
    state: TimerState,
    on_timeout: Option<TimerCallback>,
    on_tick: Option<TimerCallback>,
    on_cancel: Option<TimerCallback>,
}

impl fmt::Debug for TimerTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerTask")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl TimerTask {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn reset(&mut self, time: f64) {
        self.state.reset(time);
    }

    pub fn add_time(&mut self, time: f64) {
        self.state.add_time(time);
    }

    pub fn remaining_time(&self, now: f64) -> f64 {
        self.state.remaining_time(now)
    }

    /// Fire `on_cancel` now and mark the task for removal.
    pub fn cancel(&mut self, now: f64) {
        self.state.remove = true;
        let elapsed = now - self.state.start_time;
        if let Some(cb) = &mut self.on_cancel {
            cb(now, elapsed, &mut self.state);
        }
    }

    fn check(&mut self, time: f64) {
        if self.state.remove {
            return;
        }
        let elapsed = time - self.state.start_time;
        if elapsed >= self.state.duration {
            self.state.remove = true;
            tracing::trace!(id = ?self.id, time, "timer timed out");
            if let Some(cb) = &mut self.on_timeout {
                cb(time, elapsed, &mut self.state);
            }
        } else if let Some(cb) = &mut self.on_tick {
            cb(time, elapsed, &mut self.state);
        }
    }
}

#[derive(Debug, Default)]
pub struct TimerManager {
    timers: Vec<TimerTask>,
    next_id: u64,
}

impl TimerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_timer(
        &mut self,
        start_time: f64,
        duration: f64,
        on_timeout: Option<TimerCallback>,
        on_tick: Option<TimerCallback>,
        on_cancel: Option<TimerCallback>,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(TimerTask {
            id,
            state: TimerState {
                start_time,
                duration,
                remove: false,
            },
            on_timeout,
            on_tick,
            on_cancel,
        });
        id
    }

    /// Run tick/timeout callbacks for every live timer.
    pub fn check_timers(&mut self, time: f64) {
        for timer in &mut self.timers {
            timer.check(time);
        }
    }

    /// Drop timers marked for removal.
    pub fn remove_expired_timers(&mut self) {
        self.timers.retain(|t| !t.state.remove);
    }

    pub fn cancel(&mut self, id: TimerId, now: f64) -> bool {
        match self.get_mut(id) {
            Some(timer) if !timer.state.remove => {
                timer.cancel(now);
                tracing::trace!(?id, now, "timer cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: TimerId) -> Option<&TimerTask> {
        self.timers.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TimerId) -> Option<&mut TimerTask> {
        self.timers.iter_mut().find(|t| t.id == id)
    }

    pub fn has_timer(&self, id: TimerId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timer.rs"]
mod tests;
