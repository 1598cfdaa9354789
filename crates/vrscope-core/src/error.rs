//! Error types for vrscope.

use thiserror::Error;

/// The main error type for vrscope operations.
#[derive(Error, Debug)]
pub enum VrscopeError {
    /// A slice plane was given a zero normal vector.
    #[error("slice plane normal must not be (0, 0, 0)")]
    InvalidPlaneNormal,

    /// Label formatting received columns of different lengths.
    #[error("label columns must have the same length: {names} names, {values} values")]
    LabelLengthMismatch { names: usize, values: usize },

    /// A scene node handle did not resolve to a live node.
    #[error("scene node {0} not found (already disposed?)")]
    NodeNotFound(u64),

    /// A controller slot outside the supported range was addressed.
    #[error("controller slot {0} out of range")]
    ControllerSlotOutOfRange(usize),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for vrscope operations.
pub type Result<T> = std::result::Result<T, VrscopeError>;
