use crate::{
    foundation::error::{KinemaError, KinemaResult},
    geometry::matrix::Matrix,
    scene::{
        actor::Actor,
        graph::{ActorId, SceneGraph},
        interaction::PointerEvent,
        timer::{TimerCallback, TimerId, TimerManager},
        transition::{EASE_BEHAVIOR_ID, EaseSpec, build_ease},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EaseDirection {
    In,
    Out,
}

/// Root of an actor hierarchy with its own virtual clock and timers.
pub struct Scene {
    name: Option<String>,
    graph: SceneGraph,
    root: ActorId,
    time: f64,
    paused: bool,
    hidden: bool,
    input_enabled: bool,
    timers: TimerManager,
    easing: Option<EaseDirection>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        let mut graph = SceneGraph::new();
        let root = graph.add_actor(Actor::new().with_name("scene").with_bounds(0.0, 0.0, width, height));
        Self {
            name: None,
            graph,
            root,
            time: 0.0,
            paused: false,
            hidden: false,
            input_enabled: true,
            timers: TimerManager::new(),
            easing: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    pub fn root(&self) -> ActorId {
        self.root
    }

    pub fn root_actor(&self) -> Option<&Actor> {
        self.graph.get(self.root)
    }

    pub fn root_actor_mut(&mut self) -> Option<&mut Actor> {
        self.graph.get_mut(self.root)
    }

    /// Add `actor` as a direct child of the scene root.
    pub fn add_actor(&mut self, actor: Actor) -> KinemaResult<ActorId> {
        let root = self.root;
        self.add_child(root, actor)
    }

    pub fn add_child(&mut self, parent: ActorId, actor: Actor) -> KinemaResult<ActorId> {
        if !self.graph.contains(parent) {
            return Err(KinemaError::scene(format!("unknown parent actor {parent:?}")));
        }
        let id = self.graph.add_actor(actor);
        self.graph.add_child(parent, id)?;
        Ok(id)
    }

    pub fn world_matrix(&mut self, id: ActorId) -> Option<Matrix> {
        self.graph.world_matrix(id)
    }

    /// Virtual time in milliseconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    /// Direction of the transition in progress, if any.
    pub fn easing(&self) -> Option<EaseDirection> {
        self.easing
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if let Some(root) = self.graph.get_mut(self.root) {
            root.state_mut().set_size(width, height);
        }
    }

    // timers

    pub fn create_timer(
        &mut self,
        start_time: f64,
        duration: f64,
        on_timeout: Option<TimerCallback>,
        on_tick: Option<TimerCallback>,
        on_cancel: Option<TimerCallback>,
    ) -> TimerId {
        self.timers
            .create_timer(start_time, duration, on_timeout, on_tick, on_cancel)
    }

    pub fn cancel_timer(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id, self.time)
    }

    pub fn timers(&self) -> &TimerManager {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut TimerManager {
        &mut self.timers
    }

    // transitions

    /// Put the root back at the origin, untransformed and opaque.
    pub(crate) fn reset_root(&mut self) {
        if let Some(root) = self.graph.get_mut(self.root) {
            root.state_mut()
                .reset_transform()
                .set_location(0.0, 0.0)
                .set_alpha(1.0);
        }
    }

    pub(crate) fn clear_ease(&mut self) {
        if let Some(root) = self.graph.get_mut(self.root) {
            root.remove_behavior(EASE_BEHAVIOR_ID);
        }
        self.easing = None;
    }

    /// Start a transition at the current scene time. Input stays disabled until it completes.
    pub(crate) fn ease(&mut self, spec: &EaseSpec, direction: EaseDirection) {
        self.clear_ease();
        let Some(root) = self.graph.get_mut(self.root) else {
            return;
        };
        let (w, h) = (root.state().width(), root.state().height());
        let container = build_ease(spec, direction == EaseDirection::In, self.time, w, h);
        root.add_behavior(Box::new(container));
        self.easing = Some(direction);
        self.input_enabled = false;
    }

    /// Advance virtual time by `delta` and run one pass. Returns the direction of a transition
    /// that finished during this pass.
    pub fn advance(&mut self, delta: f64) -> Option<EaseDirection> {
        if self.paused {
            return None;
        }
        self.time += delta;
        self.tick()
    }

    fn tick(&mut self) -> Option<EaseDirection> {
        self.timers.check_timers(self.time);
        self.timers.remove_expired_timers();
        self.graph.animate(self.root, self.time);
        self.finish_ease()
    }

    fn finish_ease(&mut self) -> Option<EaseDirection> {
        let direction = self.easing?;
        let done = self
            .graph
            .get(self.root)
            .and_then(|root| root.behavior(EASE_BEHAVIOR_ID))
            .is_none_or(|b| b.core().is_expired());
        if !done {
            return None;
        }
        self.clear_ease();
        tracing::debug!(scene = ?self.name, ?direction, time = self.time, "scene ease finished");
        Some(direction)
    }

    /// Route pointer input to the actor tree. Ignored while hidden or easing.
    pub fn dispatch(&mut self, event: PointerEvent) -> Option<ActorId> {
        if self.hidden || !self.input_enabled {
            return None;
        }
        self.graph.dispatch(self.root, event)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scene.rs"]
mod tests;
