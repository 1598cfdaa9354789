//! Core abstractions for vrscope.
//!
//! This crate provides the fundamental types used throughout vrscope:
//! - [`WorldTransform`] — the pan/zoom/rotate transform of the scene group
//! - [`SlicePlane`] and [`ClipPlane`] — cutting-plane math
//! - [`Pose`], [`Ray`] and [`PickQuad`] — controller poses and picking
//! - [`Options`] — configuration with JSON persistence
//! - label formatting for measurement readouts

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod format;
pub mod options;
pub mod plane;
pub mod pose;
pub mod transform;

pub use error::{Result, VrscopeError};
pub use format::{format_distance, format_point, format_table};
pub use options::Options;
pub use plane::{ClipPlane, ClipPlaneUniforms, SlicePlane, MAX_CLIP_PLANES};
pub use pose::{PickQuad, Pose, Ray, RayHit};
pub use transform::WorldTransform;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
