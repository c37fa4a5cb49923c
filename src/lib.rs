//! kinema is a 2D scene-graph animation engine.
//!
//! The crate is organised bottom-up:
//!
//! - geometry: [`Point`], [`Rectangle`], [`Matrix`] and shared control points
//! - curves and paths: [`Curve`], the [`PathSegment`] family and the composite [`Path`]
//! - animation: [`Interpolator`] easing and the [`Behavior`] state machine with its kinds
//! - scene graph: [`Actor`], [`SceneGraph`], [`Scene`], [`Director`] and the [`Runtime`] context
//!
//! Everything is single-threaded and frame driven. A tick advances virtual time, runs timers,
//! applies behaviors parent-first and recomputes stale matrices. Painting is left to the caller,
//! which reads world matrices, alpha and [`kurbo::BezPath`] outlines.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod curve;
pub(crate) mod geometry;
pub(crate) mod path;
pub(crate) mod scene;

pub use crate::foundation::core::{Affine, Anchor, BezPath, ImageFlip, Rect, Vec2};
pub use crate::foundation::error::{KinemaError, KinemaResult};

pub use crate::geometry::matrix::Matrix;
pub use crate::geometry::point::{Point, SharedPoint};
pub use crate::geometry::rect::Rectangle;

pub use crate::curve::{CURVE_STEP, Curve, CurveKind};
pub use crate::path::PathSegment;
pub use crate::path::composite::{HANDLE_SIZE, Path};
pub use crate::path::curve_path::CurvePath;
pub use crate::path::linear::LinearPath;
pub use crate::path::shape::ShapePath;

pub use crate::animation::alpha::AlphaBehavior;
pub use crate::animation::behavior::{
    Behavior, BehaviorCore, BehaviorEvent, BehaviorExt, BehaviorListener, BehaviorStatus,
    BehaviorTarget,
};
pub use crate::animation::container::ContainerBehavior;
pub use crate::animation::generic::{GenericBehavior, GenericCallback, GenericSink, PropertyTarget};
pub use crate::animation::interpolator::{Interpolator, InterpolatorKind};
pub use crate::animation::path_behavior::{AutoRotate, PathBehavior};
pub use crate::animation::rotate::RotateBehavior;
pub use crate::animation::scale::ScaleBehavior;

pub use crate::scene::actor::{Actor, ActorEvent, ActorListener, ActorState};
pub use crate::scene::director::{Director, DirectorEvent, DirectorOpts};
pub use crate::scene::graph::{ActorId, SceneGraph};
pub use crate::scene::interaction::{
    Button, ButtonState, ClickHandler, Interaction, Pointer, PointerEvent,
};
pub use crate::scene::runtime::{DirectorId, Runtime, RuntimeOpts};
pub use crate::scene::scene::{EaseDirection, Scene};
pub use crate::scene::timer::{TimerCallback, TimerId, TimerManager, TimerState, TimerTask};
pub use crate::scene::transition::{EASE_BEHAVIOR_ID, EaseKind, EaseSpec, RotationDirection, build_ease};
