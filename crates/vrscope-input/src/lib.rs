//! Controller input pipeline for vrscope.
//!
//! Turns raw per-frame controller state into world manipulation:
//! - [`SpatialInputTracker`] — per-controller snapshots and button edges
//! - [`Navigator`] — continuous pan/zoom/rotate from thumbsticks
//! - [`RayPicker`] — ordered ray intersections for discrete grabs
//! - [`GrabManipulator`] — grab/release state and anchor capture

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod controller;
pub mod gamepad;
pub mod grab;
pub mod navigate;
pub mod pick;

pub use controller::{SpatialInputTracker, NUM_CONTROLLERS};
pub use gamepad::{
    GamepadSnapshot, Handedness, AXIS_STICK_X, AXIS_STICK_Y, BUTTON_SQUEEZE, BUTTON_THUMBSTICK,
    BUTTON_TRIGGER, BUTTON_XA, BUTTON_YB,
};
pub use grab::{GrabAnchors, GrabManipulator};
pub use navigate::{Navigator, StickGesture};
pub use pick::RayPicker;
