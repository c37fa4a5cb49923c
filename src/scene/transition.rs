//! Scene transitions built from ordinary behaviors.

use std::{cell::RefCell, f64::consts::PI, rc::Rc};

use crate::{
    animation::{
        alpha::AlphaBehavior,
        behavior::{Behavior, BehaviorExt},
        container::ContainerBehavior,
        interpolator::Interpolator,
        path_behavior::PathBehavior,
        rotate::RotateBehavior,
        scale::ScaleBehavior,
    },
    foundation::core::Anchor,
    path::composite::Path,
};

/// Id given to the transient container driving a scene transition.
pub const EASE_BEHAVIOR_ID: &str = "__scene_ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseKind {
    #[default]
    Translate,
    Scale,
    Rotate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// How a scene enters or leaves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EaseSpec {
    pub kind: EaseKind,
    /// Edge or corner the scene slides from/to, or the pivot for scale and rotation.
    pub anchor: Anchor,
    /// Milliseconds.
    pub duration: f64,
    #[serde(default)]
    pub fade: bool,
    #[serde(default)]
    pub interpolator: Option<Interpolator>,
    #[serde(default)]
    pub rotation: RotationDirection,
}

impl Default for EaseSpec {
    fn default() -> Self {
        Self {
            kind: EaseKind::Translate,
            anchor: Anchor::Left,
            duration: 1000.0,
            fade: false,
            interpolator: None,
            rotation: RotationDirection::Clockwise,
        }
    }
}

impl EaseSpec {
    pub fn new(kind: EaseKind, anchor: Anchor, duration: f64) -> Self {
        Self {
            kind,
            anchor,
            duration,
            ..Self::default()
        }
    }

    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = Some(interpolator);
        self
    }

    pub fn with_rotation(mut self, rotation: RotationDirection) -> Self {
        self.rotation = rotation;
        self
    }
}

fn configure<B: Behavior + 'static>(b: B, spec: &EaseSpec) -> Box<dyn Behavior> {
    let b = b.with_frame_time(0.0, spec.duration);
    match spec.interpolator {
        Some(i) => b.with_interpolator(i).boxed(),
        None => b.boxed(),
    }
}

/// Build the container that eases a `width × height` scene in (`entering`) or out, starting at
/// scene time `start`.
pub fn build_ease(
    spec: &EaseSpec,
    entering: bool,
    start: f64,
    width: f64,
    height: f64,
) -> ContainerBehavior {
    let mut container = ContainerBehavior::new()
        .with_id(EASE_BEHAVIOR_ID)
        .with_frame_time(start, spec.duration);
    let (ax, ay) = spec.anchor.percent();

    let motion: Box<dyn Behavior> = match spec.kind {
        EaseKind::Translate => {
            // Off-screen position on the anchor's side; the center anchor does not move.
            let (ox, oy) = ((ax - 0.5) * 2.0 * width, (ay - 0.5) * 2.0 * height);
            let path = if entering {
                Path::linear(ox, oy, 0.0, 0.0)
            } else {
                Path::linear(0.0, 0.0, ox, oy)
            };
            configure(PathBehavior::new(Rc::new(RefCell::new(path))), spec)
        }
        EaseKind::Scale => {
            let (from, to) = if entering { (0.0, 1.0) } else { (1.0, 0.0) };
            let (x, y) = if spec.anchor.is_edge() {
                match spec.anchor {
                    Anchor::Top | Anchor::Bottom => ((1.0, 1.0), (from, to)),
                    _ => ((from, to), (1.0, 1.0)),
                }
            } else {
                ((from, to), (from, to))
            };
            configure(ScaleBehavior::new(x, y).with_anchor(spec.anchor), spec)
        }
        EaseKind::Rotate => {
            let turn = PI * spec.rotation.sign();
            let (from, to) = if entering { (turn, 0.0) } else { (0.0, turn) };
            configure(RotateBehavior::new(from, to).with_anchor(spec.anchor), spec)
        }
    };
    container.add_behavior(motion);

    if spec.fade {
        let (from, to) = if entering { (0.0, 1.0) } else { (1.0, 0.0) };
        container.add_behavior(configure(AlphaBehavior::new(from, to), spec));
    }
    container
}

#[cfg(test)]
#[path = "../../tests/unit/scene/transition.rs"]
mod tests;
