//! Explicit runtime context owning every active director.

use crate::{
    foundation::error::{KinemaError, KinemaResult},
    scene::director::{Director, DirectorEvent},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuntimeOpts {
    /// Frame rate used by [`Runtime::run_for`].
    pub fps: f64,
    /// Largest delta (ms) forwarded in one step; longer stalls are clamped.
    pub max_delta: f64,
}

impl Default for RuntimeOpts {
    fn default() -> Self {
        Self {
            fps: 60.0,
            max_delta: 250.0,
        }
    }
}

impl RuntimeOpts {
    pub fn validate(&self) -> KinemaResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(KinemaError::config(format!(
                "fps must be finite and positive, got {}",
                self.fps
            )));
        }
        if self.max_delta.is_nan() || self.max_delta <= 0.0 {
            return Err(KinemaError::config(format!(
                "max_delta must be positive, got {}",
                self.max_delta
            )));
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> f64 {
        1000.0 / self.fps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectorId(u64);

pub struct Runtime {
    opts: RuntimeOpts,
    directors: Vec<(DirectorId, Director)>,
    next_id: u64,
    time: f64,
}

impl Runtime {
    pub fn new(opts: RuntimeOpts) -> KinemaResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            directors: Vec::new(),
            next_id: 0,
            time: 0.0,
        })
    }

    pub fn opts(&self) -> &RuntimeOpts {
        &self.opts
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn register_director(&mut self, director: Director) -> DirectorId {
        let id = DirectorId(self.next_id);
        self.next_id += 1;
        self.directors.push((id, director));
        tracing::debug!(?id, "director registered");
        id
    }

    /// Remove a director and hand it back to the caller.
    pub fn deregister_director(&mut self, id: DirectorId) -> KinemaResult<Director> {
        let pos = self
            .directors
            .iter()
            .position(|(d, _)| *d == id)
            .ok_or_else(|| KinemaError::scene(format!("unknown director {id:?}")))?;
        tracing::debug!(?id, "director deregistered");
        Ok(self.directors.remove(pos).1)
    }

    pub fn director(&self, id: DirectorId) -> Option<&Director> {
        self.directors.iter().find(|(d, _)| *d == id).map(|(_, d)| d)
    }

    pub fn director_mut(&mut self, id: DirectorId) -> Option<&mut Director> {
        self.directors
            .iter_mut()
            .find(|(d, _)| *d == id)
            .map(|(_, d)| d)
    }

    pub fn num_directors(&self) -> usize {
        self.directors.len()
    }

    /// Forward one tick of `delta` ms (clamped to `[0, max_delta]`) to every director.
    pub fn advance(&mut self, delta: f64) -> Vec<(DirectorId, DirectorEvent)> {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, self.opts.max_delta)
        } else {
            0.0
        };
        self.time += delta;
        let mut events = Vec::new();
        for (id, director) in &mut self.directors {
            events.extend(director.advance(delta).into_iter().map(|e| (*id, e)));
        }
        events
    }

    /// Step through `total` ms at the configured frame rate; the last step may be shorter.
    #[tracing::instrument(skip(self))]
    pub fn run_for(&mut self, total: f64) -> Vec<(DirectorId, DirectorEvent)> {
        let step = self.opts.frame_duration().min(self.opts.max_delta);
        let mut remaining = total.max(0.0);
        let mut events = Vec::new();
        while remaining > 1e-9 {
            let delta = remaining.min(step);
            events.extend(self.advance(delta));
            remaining -= delta;
        }
        events
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        for (_, director) in &mut self.directors {
            director.resize(width, height);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/runtime.rs"]
mod tests;
