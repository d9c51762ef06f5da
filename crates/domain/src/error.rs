//! Common error types used across the workspace.
//!
//! Runtime outcomes of the engine (refusals, lookup misses, empty undo
//! history) are *not* errors: they are reported as result text. The types
//! here only cover construction-time problems such as invalid names or
//! duplicate registrations.

/// Base error type for homesim.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("unsupported device")]
    Unsupported(#[from] UnsupportedDeviceError),
}

/// A domain invariant was violated while building a value.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
}

/// A name is already taken in its collection.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {name:?} is already registered")]
pub struct ConflictError {
    pub entity: &'static str,
    pub name: String,
}

/// An operation was bound to a device of the wrong kind.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{operation} is not supported by {device:?}")]
pub struct UnsupportedDeviceError {
    pub operation: &'static str,
    pub device: String,
}
