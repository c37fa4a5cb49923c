//! Arena-backed actor hierarchy.
//!
//! Actors live in slots addressed by [`ActorId`]; a slot's generation is bumped when it is freed so
//! stale ids never resolve to a recycled actor. World matrices are composed parent-first and
//! recomputed only when an actor's local matrix was rebuilt or its parent's world changed since
//! the actor last composed (tracked with per-actor world epochs).

use crate::{
    foundation::error::{KinemaError, KinemaResult},
    geometry::{matrix::Matrix, point::Point},
    scene::{
        actor::{Actor, ActorEvent},
        interaction::{Pointer, PointerEvent},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId {
    index: usize,
    generation: u32,
}

#[derive(Default)]
struct Slot {
    generation: u32,
    actor: Option<Actor>,
}

#[derive(Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    free: Vec<usize>,
    capture: Option<ActorId>,
    hover: Option<ActorId>,
}

fn compose_world(parent: &Matrix, local: &Matrix) -> Matrix {
    if parent.is_translation() && local.is_translation() {
        Matrix::translation(parent.m[2] + local.m[2], parent.m[5] + local.m[5])
    } else {
        *parent * *local
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.actor = Some(actor);
            ActorId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                actor: Some(actor),
            });
            ActorId {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.slots
            .get(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.actor.as_ref())
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.actor.as_mut())
    }

    fn require_mut(&mut self, id: ActorId) -> KinemaResult<&mut Actor> {
        self.get_mut(id)
            .ok_or_else(|| KinemaError::scene(format!("unknown actor {id:?}")))
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.actor.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parent(&self, id: ActorId) -> Option<ActorId> {
        self.get(id).and_then(|a| a.parent)
    }

    pub fn children(&self, id: ActorId) -> &[ActorId] {
        self.get(id).map_or(&[], |a| a.children.as_slice())
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor(&self, ancestor: ActorId, id: ActorId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.parent(c);
        }
        false
    }

    /// Attach `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn add_child(&mut self, parent: ActorId, child: ActorId) -> KinemaResult<()> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(KinemaError::scene(format!(
                "cannot attach {child:?} to {parent:?}: unknown actor"
            )));
        }
        if self.is_ancestor(child, parent) {
            return Err(KinemaError::scene(format!(
                "cannot attach {child:?} to its own descendant {parent:?}"
            )));
        }
        self.detach(child);
        self.require_mut(parent)?.children.push(child);
        let c = self.require_mut(child)?;
        c.parent = Some(parent);
        c.state.mark_dirty();
        Ok(())
    }

    /// Unlink `child` from its parent. Returns the former parent.
    pub fn detach(&mut self, child: ActorId) -> Option<ActorId> {
        let parent = self.get_mut(child)?.parent.take()?;
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|&c| c != child);
        }
        if let Some(c) = self.get_mut(child) {
            c.state.mark_dirty();
        }
        Some(parent)
    }

    /// Remove `id` and its whole subtree, firing [`ActorEvent::Destroyed`] on each.
    pub fn destroy(&mut self, id: ActorId, time: f64) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.detach(id);
        let children = self.children(id).to_vec();
        for child in children {
            self.destroy(child, time);
        }

        let slot = &mut self.slots[id.index];
        if let Some(mut actor) = slot.actor.take() {
            actor.fire(id, &ActorEvent::Destroyed { time });
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        if self.capture == Some(id) {
            self.capture = None;
        }
        if self.hover == Some(id) {
            self.hover = None;
        }
        tracing::debug!(?id, time, "actor destroyed");
        true
    }

    /// Path from the topmost ancestor down to `id`.
    fn lineage(&self, id: ActorId) -> Vec<ActorId> {
        let mut chain = Vec::new();
        let mut cur = self.get(id).map(|_| id);
        while let Some(c) = cur {
            chain.push(c);
            cur = self.parent(c);
        }
        chain.reverse();
        chain
    }

    fn update_world(&mut self, id: ActorId) {
        let parent = self
            .parent(id)
            .and_then(|p| self.get(p))
            .map(|p| (p.world, p.world_epoch));
        let Some(actor) = self.get_mut(id) else {
            return;
        };

        let rebuilt = actor.state.set_model_view_matrix();
        let parent_moved = parent.is_some_and(|(_, epoch)| epoch != actor.parent_epoch);
        if !rebuilt && !parent_moved && actor.world_epoch != 0 {
            return;
        }

        let local = *actor.state.local_matrix();
        actor.world = match parent {
            Some((parent_world, epoch)) => {
                actor.parent_epoch = epoch;
                compose_world(&parent_world, &local)
            }
            None => local,
        };
        actor.world_epoch += 1;
    }

    /// Up-to-date world matrix, refreshing stale ancestors first.
    pub fn world_matrix(&mut self, id: ActorId) -> Option<Matrix> {
        for a in self.lineage(id) {
            self.update_world(a);
        }
        self.get(id).map(|a| a.world)
    }

    /// Up-to-date local matrix.
    pub fn local_matrix(&mut self, id: ActorId) -> Option<Matrix> {
        let actor = self.get_mut(id)?;
        actor.state.set_model_view_matrix();
        Some(*actor.state.local_matrix())
    }

    /// Map a point from `id`'s local space to view space.
    pub fn model_to_view(&mut self, id: ActorId, p: Point) -> Option<Point> {
        Some(self.world_matrix(id)?.transform_point(p))
    }

    /// Map a point from view space into `id`'s local space. `None` for singular transforms.
    pub fn view_to_model(&mut self, id: ActorId, p: Point) -> Option<Point> {
        Some(self.world_matrix(id)?.inverse()?.transform_point(p))
    }

    /// One animation pass over the subtree at `root`: behaviors first, then the matrix, then
    /// children. Expired discardable actors are destroyed after the pass.
    pub fn animate(&mut self, root: ActorId, time: f64) {
        let mut discarded = Vec::new();
        self.animate_node(root, time, 1.0, &mut discarded);
        for id in discarded {
            self.destroy(id, time);
        }
    }

    fn animate_node(&mut self, id: ActorId, time: f64, parent_alpha: f64, discarded: &mut Vec<ActorId>) {
        let Some(actor) = self.get_mut(id) else {
            return;
        };
        if !actor.is_in_animation_frame(id, time) {
            if actor.is_expired() && actor.is_discardable() {
                discarded.push(id);
            }
            return;
        }

        actor.apply_behaviors(time);
        actor.frame_alpha = if actor.state.is_global_alpha() {
            parent_alpha * actor.state.alpha()
        } else {
            actor.state.alpha()
        };
        let alpha = actor.frame_alpha;
        let children = actor.children.clone();

        self.update_world(id);
        for child in children {
            self.animate_node(child, time, alpha, discarded);
        }
    }

    /// Live, visible actors under `root` in paint order (parents before children).
    pub fn paint_order(&self, root: ActorId) -> Vec<ActorId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(actor) = self.get(id) else {
                continue;
            };
            if actor.is_expired() || !actor.is_visible() {
                continue;
            }
            out.push(id);
            stack.extend(actor.children.iter().rev());
        }
        out
    }

    /// Topmost visible actor under `root` containing the view-space point.
    pub fn find_actor_at(&mut self, root: ActorId, p: Point) -> Option<ActorId> {
        let actor = self.get(root)?;
        if actor.is_expired() || !actor.is_visible() {
            return None;
        }
        let children = actor.children.clone();
        for child in children.into_iter().rev() {
            if let Some(hit) = self.find_actor_at(child, p) {
                return Some(hit);
            }
        }
        let local = self.view_to_model(root, p)?;
        self.get(root)?.state.contains(local).then_some(root)
    }

    fn send(&mut self, id: ActorId, pointer: Pointer) {
        if let Some(actor) = self.get_mut(id)
            && let Some(interaction) = &mut actor.interaction
        {
            interaction.handle(id, &mut actor.state, &pointer);
        }
    }

    fn spaces(&mut self, id: ActorId, p: Point) -> (Point, Point) {
        let parent = match self.parent(id) {
            Some(pid) => self.view_to_model(pid, p).unwrap_or(p),
            None => p,
        };
        let local = self.view_to_model(id, p).unwrap_or(parent);
        (parent, local)
    }

    /// Route a pointer event through the subtree at `root`. Returns the actor that received it.
    ///
    /// Presses go to the actor under the pointer, which then captures drags and the release.
    pub fn dispatch(&mut self, root: ActorId, event: PointerEvent) -> Option<ActorId> {
        let p = event.point();
        match event {
            PointerEvent::Move { .. } => {
                let hit = self.find_actor_at(root, p);
                if hit != self.hover {
                    if let Some(old) = self.hover {
                        self.send(old, Pointer::Exit);
                    }
                    if let Some(new) = hit {
                        self.send(new, Pointer::Enter);
                    }
                    self.hover = hit;
                }
                hit
            }
            PointerEvent::Press { .. } => {
                let hit = self.find_actor_at(root, p)?;
                self.capture = Some(hit);
                let (parent, local) = self.spaces(hit, p);
                self.send(hit, Pointer::Press { parent, local });
                Some(hit)
            }
            PointerEvent::Drag { .. } => {
                let id = self.capture?;
                let (parent, local) = self.spaces(id, p);
                self.send(id, Pointer::Drag { parent, local });
                Some(id)
            }
            PointerEvent::Release { .. } => {
                let id = self.capture.take()?;
                let (parent, local) = self.spaces(id, p);
                let inside = self.get(id).is_some_and(|a| a.state.contains(local));
                self.send(id, Pointer::Release { parent, local, inside });
                Some(id)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
