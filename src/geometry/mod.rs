pub(crate) mod matrix;
pub(crate) mod point;
pub(crate) mod rect;
