//! Scene switching and per-tick time distribution.

use crate::{
    foundation::{
        core::Anchor,
        error::{KinemaError, KinemaResult},
    },
    scene::{
        graph::ActorId,
        interaction::PointerEvent,
        scene::{EaseDirection, Scene},
        transition::{EaseKind, EaseSpec},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DirectorOpts {
    pub width: f64,
    pub height: f64,
}

impl Default for DirectorOpts {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectorEvent {
    /// The scene finished easing in and is now current.
    SceneActivated(usize),
    /// The scene finished easing out and is no longer animated.
    SceneHidden(usize),
}

/// Owns the scenes of one viewport and decides which of them are live.
pub struct Director {
    opts: DirectorOpts,
    scenes: Vec<Scene>,
    /// Live scenes in paint order.
    order: Vec<usize>,
    current: Option<usize>,
    time: f64,
}

impl Director {
    pub fn new(opts: DirectorOpts) -> Self {
        Self {
            opts,
            scenes: Vec::new(),
            order: Vec::new(),
            current: None,
            time: 0.0,
        }
    }

    pub fn opts(&self) -> &DirectorOpts {
        &self.opts
    }

    /// Total time advanced so far, in milliseconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// New empty scene sized to the viewport.
    pub fn create_scene(&mut self) -> usize {
        let scene = Scene::new(self.opts.width, self.opts.height);
        self.add_scene(scene)
    }

    /// Register a scene. The first scene becomes current; later ones start hidden.
    pub fn add_scene(&mut self, mut scene: Scene) -> usize {
        let index = self.scenes.len();
        let first = index == 0;
        scene.set_hidden(!first);
        scene.set_input_enabled(first);
        self.scenes.push(scene);
        if first {
            self.order.push(index);
            self.current = Some(index);
        }
        index
    }

    pub fn num_scenes(&self) -> usize {
        self.scenes.len()
    }

    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn scene_mut(&mut self, index: usize) -> Option<&mut Scene> {
        self.scenes.get_mut(index)
    }

    pub fn current_scene_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.current.and_then(|i| self.scenes.get(i))
    }

    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.current.and_then(|i| self.scenes.get_mut(i))
    }

    /// Live scene indices in paint order.
    pub fn paint_order(&self) -> &[usize] {
        &self.order
    }

    fn check(&self, index: usize) -> KinemaResult<()> {
        if index < self.scenes.len() {
            Ok(())
        } else {
            Err(KinemaError::scene(format!(
                "scene index {index} out of range ({} scenes)",
                self.scenes.len()
            )))
        }
    }

    /// Show exactly `live` (in paint order) and hide the rest.
    fn show_only(&mut self, live: &[usize]) {
        for (i, scene) in self.scenes.iter_mut().enumerate() {
            scene.clear_ease();
            scene.set_input_enabled(false);
            scene.set_hidden(!live.contains(&i));
        }
        for &i in live {
            self.scenes[i].reset_root();
        }
        self.order = live.to_vec();
    }

    /// Switch immediately, without a transition.
    #[tracing::instrument(skip(self))]
    pub fn set_scene(&mut self, index: usize) -> KinemaResult<()> {
        self.check(index)?;
        self.show_only(&[index]);
        self.scenes[index].set_input_enabled(true);
        self.current = Some(index);
        Ok(())
    }

    /// Ease `index` in over whatever was showing.
    #[tracing::instrument(skip(self, spec))]
    pub fn ease_in(&mut self, index: usize, spec: &EaseSpec) -> KinemaResult<()> {
        self.check(index)?;
        self.show_only(&[index]);
        self.scenes[index].ease(spec, EaseDirection::In);
        Ok(())
    }

    /// Ease `index` out; it is hidden once the transition ends.
    #[tracing::instrument(skip(self, spec))]
    pub fn ease_out(&mut self, index: usize, spec: &EaseSpec) -> KinemaResult<()> {
        self.check(index)?;
        self.show_only(&[index]);
        self.scenes[index].ease(spec, EaseDirection::Out);
        Ok(())
    }

    /// Ease `in_index` in while `out_index` eases out. The incoming scene paints on top.
    #[tracing::instrument(skip(self, in_spec, out_spec))]
    pub fn ease_in_out(
        &mut self,
        in_index: usize,
        in_spec: &EaseSpec,
        out_index: usize,
        out_spec: &EaseSpec,
    ) -> KinemaResult<()> {
        self.check(in_index)?;
        self.check(out_index)?;
        if in_index == out_index {
            return self.set_scene(in_index);
        }
        self.show_only(&[out_index, in_index]);
        self.scenes[out_index].ease(out_spec, EaseDirection::Out);
        self.scenes[in_index].ease(in_spec, EaseDirection::In);
        Ok(())
    }

    /// Slide to `index` from the right over `duration` ms, or switch at once when `duration <= 0`.
    pub fn switch_to_scene(&mut self, index: usize, duration: f64, fade: bool) -> KinemaResult<()> {
        self.check(index)?;
        match self.current {
            Some(current) if current != index && duration > 0.0 => {
                let in_spec = EaseSpec::new(EaseKind::Translate, Anchor::Right, duration).with_fade(fade);
                let out_spec = EaseSpec::new(EaseKind::Translate, Anchor::Left, duration).with_fade(fade);
                self.ease_in_out(index, &in_spec, current, &out_spec)
            }
            _ => self.set_scene(index),
        }
    }

    pub fn switch_to_next_scene(&mut self, duration: f64, fade: bool) -> KinemaResult<()> {
        let n = self.scenes.len();
        if n == 0 {
            return Err(KinemaError::scene("director has no scenes"));
        }
        let next = self.current.map_or(0, |c| (c + 1) % n);
        self.switch_to_scene(next, duration, fade)
    }

    pub fn switch_to_prev_scene(&mut self, duration: f64, fade: bool) -> KinemaResult<()> {
        let n = self.scenes.len();
        if n == 0 {
            return Err(KinemaError::scene("director has no scenes"));
        }
        let prev = self.current.map_or(0, |c| (c + n - 1) % n);
        self.switch_to_scene(prev, duration, fade)
    }

    /// Advance every live scene by `delta` ms and finalize finished transitions.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn advance(&mut self, delta: f64) -> Vec<DirectorEvent> {
        self.time += delta;
        let mut events = Vec::new();
        for index in self.order.clone() {
            if let Some(direction) = self.scenes[index].advance(delta) {
                events.push(self.ease_end(index, direction));
            }
        }
        events
    }

    fn ease_end(&mut self, index: usize, direction: EaseDirection) -> DirectorEvent {
        let scene = &mut self.scenes[index];
        match direction {
            EaseDirection::In => {
                scene.set_input_enabled(true);
                self.current = Some(index);
                tracing::debug!(index, "scene activated");
                DirectorEvent::SceneActivated(index)
            }
            EaseDirection::Out => {
                scene.set_hidden(true);
                scene.set_input_enabled(false);
                self.order.retain(|&i| i != index);
                if self.current == Some(index) {
                    self.current = None;
                }
                tracing::debug!(index, "scene hidden");
                DirectorEvent::SceneHidden(index)
            }
        }
    }

    /// Resize the viewport and every scene root.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.opts.width = width;
        self.opts.height = height;
        for scene in &mut self.scenes {
            scene.resize(width, height);
        }
    }

    /// Forward pointer input to the current scene.
    pub fn dispatch(&mut self, event: PointerEvent) -> Option<ActorId> {
        self.current_scene_mut()?.dispatch(event)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/director.rs"]
mod tests;
