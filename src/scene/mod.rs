pub(crate) mod actor;
pub(crate) mod director;
pub(crate) mod graph;
pub(crate) mod interaction;
pub(crate) mod runtime;
#[allow(clippy::module_inception)]
pub(crate) mod scene;
pub(crate) mod timer;
pub(crate) mod transition;
