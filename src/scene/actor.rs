//! Scene-graph node: geometric state, behaviors, lifetime and interaction.

use std::fmt;

use crate::{
    animation::behavior::{Behavior, BehaviorTarget},
    foundation::{
        core::{Anchor, ImageFlip},
        math::non_zero_scale,
    },
    geometry::{matrix::Matrix, point::Point},
    scene::{graph::ActorId, interaction::Interaction},
};

/// Transform-relevant properties of an actor plus its cached local matrix.
///
/// Every setter that affects the matrix marks the state dirty; [`ActorState::set_model_view_matrix`]
/// rebuilds the local matrix and clears the flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation_angle: f64,
    rotation_x: f64,
    rotation_y: f64,
    scale_x: f64,
    scale_y: f64,
    scale_tx: f64,
    scale_ty: f64,
    anchor_x: f64,
    anchor_y: f64,
    alpha: f64,
    global_alpha: bool,
    image_flip: ImageFlip,
    dirty: bool,
    local: Matrix,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation_angle: 0.0,
            rotation_x: 0.5,
            rotation_y: 0.5,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_tx: 0.5,
            scale_ty: 0.5,
            anchor_x: 0.0,
            anchor_y: 0.0,
            alpha: 1.0,
            global_alpha: false,
            image_flip: ImageFlip::None,
            dirty: true,
            local: Matrix::IDENTITY,
        }
    }
}

impl ActorState {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Rotation pivot as fractions of the size.
    pub fn rotation_anchor(&self) -> (f64, f64) {
        (self.rotation_x, self.rotation_y)
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    pub fn scale_anchor(&self) -> (f64, f64) {
        (self.scale_tx, self.scale_ty)
    }

    /// Which point of the actor `(x, y)` refers to, as fractions of the size.
    pub fn position_anchor(&self) -> (f64, f64) {
        (self.anchor_x, self.anchor_y)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn is_global_alpha(&self) -> bool {
        self.global_alpha
    }

    pub fn image_flip(&self) -> ImageFlip {
        self.image_flip
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn local_matrix(&self) -> &Matrix {
        &self.local
    }

    pub fn set_location(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.dirty = true;
        self
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self.dirty = true;
        self
    }

    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.set_location(x, y).set_size(width, height)
    }

    pub fn set_rotation(&mut self, angle: f64) -> &mut Self {
        self.set_rotation_anchored(angle, 0.5, 0.5)
    }

    pub fn set_rotation_anchored(&mut self, angle: f64, anchor_x: f64, anchor_y: f64) -> &mut Self {
        self.rotation_angle = angle;
        self.rotation_x = anchor_x;
        self.rotation_y = anchor_y;
        self.dirty = true;
        self
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.set_scale_anchored(sx, sy, 0.5, 0.5)
    }

    /// Exact-zero factors are clamped so the matrix stays invertible.
    pub fn set_scale_anchored(&mut self, sx: f64, sy: f64, anchor_x: f64, anchor_y: f64) -> &mut Self {
        self.scale_x = non_zero_scale(sx);
        self.scale_y = non_zero_scale(sy);
        self.scale_tx = anchor_x;
        self.scale_ty = anchor_y;
        self.dirty = true;
        self
    }

    pub fn set_position_anchor(&mut self, anchor: Anchor) -> &mut Self {
        (self.anchor_x, self.anchor_y) = anchor.percent();
        self.dirty = true;
        self
    }

    /// Place the actor so that `anchor` lands on `(x, y)`.
    pub fn set_position_anchored(&mut self, x: f64, y: f64, anchor: Anchor) -> &mut Self {
        self.set_position_anchor(anchor).set_location(x, y)
    }

    pub fn set_alpha(&mut self, alpha: f64) -> &mut Self {
        self.alpha = alpha;
        self
    }

    /// When set, alpha multiplies with the parent's frame alpha instead of replacing it.
    pub fn set_global_alpha(&mut self, global: bool) -> &mut Self {
        self.global_alpha = global;
        self
    }

    pub fn set_image_flip(&mut self, flip: ImageFlip) -> &mut Self {
        self.image_flip = flip;
        self
    }

    /// Back to identity transform: no rotation, unit scale, centered pivots.
    pub fn reset_transform(&mut self) -> &mut Self {
        self.rotation_angle = 0.0;
        self.rotation_x = 0.5;
        self.rotation_y = 0.5;
        self.scale_x = 1.0;
        self.scale_y = 1.0;
        self.scale_tx = 0.5;
        self.scale_ty = 0.5;
        self.dirty = true;
        self
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Rebuild the local matrix if dirty. Returns whether it was rebuilt.
    pub fn set_model_view_matrix(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        let (w, h) = (self.width, self.height);
        self.local = Matrix::anchored(
            self.x - self.anchor_x * w,
            self.y - self.anchor_y * h,
            self.rotation_angle,
            (self.rotation_x * w, self.rotation_y * h),
            (self.scale_x, self.scale_y),
            (self.scale_tx * w, self.scale_ty * h),
        );
        self.dirty = false;
        true
    }

    /// Whether a point in local coordinates lies inside `[0, w) × [0, h)`.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }
}

impl BehaviorTarget for ActorState {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn location(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn set_location(&mut self, x: f64, y: f64) {
        ActorState::set_location(self, x, y);
    }

    fn set_rotation_anchored(&mut self, angle: f64, anchor_x: f64, anchor_y: f64) {
        ActorState::set_rotation_anchored(self, angle, anchor_x, anchor_y);
    }

    fn set_scale_anchored(&mut self, sx: f64, sy: f64, anchor_x: f64, anchor_y: f64) {
        ActorState::set_scale_anchored(self, sx, sy, anchor_x, anchor_y);
    }

    fn set_alpha(&mut self, alpha: f64) {
        ActorState::set_alpha(self, alpha);
    }

    fn set_image_flip(&mut self, flip: ImageFlip) {
        ActorState::set_image_flip(self, flip);
    }

    fn set_property(&mut self, name: &str, value: f64) -> bool {
        match name {
            "x" => self.set_location(value, self.y),
            "y" => self.set_location(self.x, value),
            "width" => self.set_size(value, self.height),
            "height" => self.set_size(self.width, value),
            "alpha" => ActorState::set_alpha(self, value),
            "rotation" => {
                let (ax, ay) = self.rotation_anchor();
                ActorState::set_rotation_anchored(self, value, ax, ay)
            }
            "scale_x" => {
                let (ax, ay) = self.scale_anchor();
                ActorState::set_scale_anchored(self, value, self.scale_y, ax, ay)
            }
            "scale_y" => {
                let (ax, ay) = self.scale_anchor();
                ActorState::set_scale_anchored(self, self.scale_x, value, ax, ay)
            }
            _ => return false,
        };
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActorEvent {
    Expired { time: f64 },
    Destroyed { time: f64 },
}

pub type ActorListener = Box<dyn FnMut(ActorId, &ActorEvent)>;

/// A node in the scene graph.
///
/// Geometry lives in [`ActorState`] so behaviors can write it while the actor's behavior list is
/// borrowed. Hierarchy links and the world matrix are maintained by [`crate::SceneGraph`].
pub struct Actor {
    name: Option<String>,
    pub(crate) state: ActorState,
    behaviors: Vec<Box<dyn Behavior>>,
    pub(crate) parent: Option<ActorId>,
    pub(crate) children: Vec<ActorId>,
    pub(crate) world: Matrix,
    /// Bumped whenever `world` is recomputed; 0 means never composed.
    pub(crate) world_epoch: u64,
    /// Parent's `world_epoch` at the time `world` was last composed.
    pub(crate) parent_epoch: u64,
    pub(crate) frame_alpha: f64,
    start_time: f64,
    duration: Option<f64>,
    expired: bool,
    discardable: bool,
    visible: bool,
    pub(crate) interaction: Option<Interaction>,
    listeners: Vec<ActorListener>,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            name: None,
            state: ActorState::default(),
            behaviors: Vec::new(),
            parent: None,
            children: Vec::new(),
            world: Matrix::IDENTITY,
            world_epoch: 0,
            parent_epoch: 0,
            frame_alpha: 1.0,
            start_time: 0.0,
            duration: None,
            expired: false,
            discardable: false,
            visible: true,
            interaction: None,
            listeners: Vec::new(),
        }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("behaviors", &self.behaviors.len())
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("expired", &self.expired)
            .finish_non_exhaustive()
    }
}

impl Actor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.state.set_bounds(x, y, width, height);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_frame_time(mut self, start: f64, duration: Option<f64>) -> Self {
        self.set_frame_time(start, duration);
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    pub fn with_behavior(mut self, behavior: Box<dyn Behavior>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ActorState {
        &mut self.state
    }

    pub fn parent(&self) -> Option<ActorId> {
        self.parent
    }

    pub fn children(&self) -> &[ActorId] {
        &self.children
    }

    pub fn local_matrix(&self) -> &Matrix {
        self.state.local_matrix()
    }

    /// World matrix as of the last graph pass. Use [`crate::SceneGraph::world_matrix`] for a
    /// guaranteed-fresh value.
    pub fn world_matrix(&self) -> &Matrix {
        &self.world
    }

    /// Alpha to paint with this frame, after combining with ancestors when global alpha is set.
    pub fn frame_alpha(&self) -> f64 {
        self.frame_alpha
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    pub fn set_interaction(&mut self, interaction: Option<Interaction>) {
        self.interaction = interaction;
    }

    // behaviors

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) -> &mut Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn remove_behavior(&mut self, id: &str) -> usize {
        let before = self.behaviors.len();
        self.behaviors.retain(|b| b.id() != Some(id));
        before - self.behaviors.len()
    }

    pub fn empty_behavior_list(&mut self) {
        self.behaviors.clear();
    }

    pub fn behaviors(&self) -> &[Box<dyn Behavior>] {
        &self.behaviors
    }

    pub fn behavior(&self, id: &str) -> Option<&dyn Behavior> {
        self.behaviors
            .iter()
            .find(|b| b.id() == Some(id))
            .map(|b| b.as_ref())
    }

    /// Apply every behavior at `time` in insertion order.
    pub fn apply_behaviors(&mut self, time: f64) {
        for behavior in &mut self.behaviors {
            behavior.apply(time, &mut self.state);
        }
    }

    // lifetime

    /// Live from `start` for `duration`, or forever when `duration` is `None`.
    pub fn set_frame_time(&mut self, start: f64, duration: Option<f64>) -> &mut Self {
        self.start_time = start;
        self.duration = duration;
        self.expired = false;
        self
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Expired actors are skipped by the graph until `set_expired(false)` or a new frame time.
    pub fn set_expired(&mut self, expired: bool) -> &mut Self {
        self.expired = expired;
        self
    }

    pub fn is_discardable(&self) -> bool {
        self.discardable
    }

    /// Destroy the actor once it expires.
    pub fn set_discardable(&mut self, discardable: bool) -> &mut Self {
        self.discardable = discardable;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    pub fn add_listener(&mut self, listener: impl FnMut(ActorId, &ActorEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn fire(&mut self, id: ActorId, event: &ActorEvent) {
        for listener in &mut self.listeners {
            listener(id, event);
        }
    }

    /// Whether the actor should be animated at `time`. Crossing the end of its lifetime expires
    /// the actor and fires [`ActorEvent::Expired`] once.
    pub(crate) fn is_in_animation_frame(&mut self, id: ActorId, time: f64) -> bool {
        if self.expired {
            return false;
        }
        if let Some(duration) = self.duration
            && time >= self.start_time + duration
        {
            self.expired = true;
            tracing::trace!(?id, time, "actor expired");
            self.fire(id, &ActorEvent::Expired { time });
            return false;
        }
        self.start_time <= time
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/actor.rs"]
mod tests;
