pub(crate) mod alpha;
pub(crate) mod behavior;
pub(crate) mod container;
pub(crate) mod generic;
pub(crate) mod interpolator;
pub(crate) mod path_behavior;
pub(crate) mod rotate;
pub(crate) mod scale;
