use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    animation::behavior::{Behavior, BehaviorCore, BehaviorTarget},
    foundation::math::lerp,
};

/// Anything with named scalar properties a [`GenericBehavior`] can drive.
pub trait PropertyTarget {
    /// Returns `false` when `name` is not a known property.
    fn set_property(&mut self, name: &str, value: f64) -> bool;
}

pub type GenericCallback = Box<dyn FnMut(f64, &mut dyn BehaviorTarget)>;

/// Where a [`GenericBehavior`] sends its interpolated value.
pub enum GenericSink {
    /// A named property on an object other than the animated target.
    Shared {
        target: Rc<RefCell<dyn PropertyTarget>>,
        property: String,
    },
    /// A named property on the target the behavior is applied to.
    Target { property: String },
    /// Called with `(value, target)`.
    Callback(GenericCallback),
}

impl fmt::Debug for GenericSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared { property, .. } => f.debug_struct("Shared").field("property", property).finish(),
            Self::Target { property } => f.debug_struct("Target").field("property", property).finish(),
            Self::Callback(_) => f.write_str("Callback"),
        }
    }
}

/// Interpolates a scalar and routes it to a [`GenericSink`].
#[derive(Debug)]
pub struct GenericBehavior {
    core: BehaviorCore,
    pub start: f64,
    pub end: f64,
    sink: GenericSink,
}

impl GenericBehavior {
    pub fn new(start: f64, end: f64, sink: GenericSink) -> Self {
        Self {
            core: BehaviorCore::default(),
            start,
            end,
            sink,
        }
    }

    pub fn shared(
        start: f64,
        end: f64,
        target: Rc<RefCell<dyn PropertyTarget>>,
        property: impl Into<String>,
    ) -> Self {
        Self::new(
            start,
            end,
            GenericSink::Shared {
                target,
                property: property.into(),
            },
        )
    }

    pub fn property(start: f64, end: f64, property: impl Into<String>) -> Self {
        Self::new(
            start,
            end,
            GenericSink::Target {
                property: property.into(),
            },
        )
    }

    pub fn callback(
        start: f64,
        end: f64,
        callback: impl FnMut(f64, &mut dyn BehaviorTarget) + 'static,
    ) -> Self {
        Self::new(start, end, GenericSink::Callback(Box::new(callback)))
    }

    pub fn sink(&self) -> &GenericSink {
        &self.sink
    }
}

impl Behavior for GenericBehavior {
    fn core(&self) -> &BehaviorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BehaviorCore {
        &mut self.core
    }

    fn set_for_time(&mut self, progress: f64, target: &mut dyn BehaviorTarget) {
        if !self.core.applies_value() {
            return;
        }
        let value = lerp(self.start, self.end, progress);
        let written = match &mut self.sink {
            GenericSink::Shared { target, property } => {
                target.borrow_mut().set_property(property, value)
            }
            GenericSink::Target { property } => target.set_property(property, value),
            GenericSink::Callback(callback) => {
                callback(value, target);
                true
            }
        };
        if !written {
            tracing::debug!(sink = ?self.sink, value, "generic behavior wrote to unknown property");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/generic.rs"]
mod tests;
