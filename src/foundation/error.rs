/// Convenience result type used across kinema.
pub type KinemaResult<T> = Result<T, KinemaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Expiration, cycling and cancellation are modeled as state and never surface here; errors are
/// reserved for malformed setup and misuse of identifiers.
#[derive(thiserror::Error, Debug)]
pub enum KinemaError {
    /// Malformed construction input (control point counts, non-finite parameters).
    #[error("configuration error: {0}")]
    Config(String),

    /// Geometry that cannot be evaluated (empty paths, out-of-range control point indices).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors while configuring behaviors or interpolators.
    #[error("animation error: {0}")]
    Animation(String),

    /// Unknown actors, scenes or directors.
    #[error("scene error: {0}")]
    Scene(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinemaError {
    /// Build a [`KinemaError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`KinemaError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`KinemaError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`KinemaError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
