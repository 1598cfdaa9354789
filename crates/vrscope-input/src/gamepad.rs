//! Gamepad snapshots as delivered by the host input layer.
//!
//! Button and axis indices follow the WebXR standard mapping:
//!
//! - `buttons[0]` — index-finger trigger (select)
//! - `buttons[1]` — middle-finger trigger (squeeze)
//! - `buttons[3]` — thumbstick press
//! - `buttons[4]` — X (left) or A (right)
//! - `buttons[5]` — Y (left) or B (right)
//! - `axes[2]` — thumbstick X (left/right)
//! - `axes[3]` — thumbstick Y (up/down, up is negative)

use serde::{Deserialize, Serialize};

/// Which hand a controller is tracked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    /// Left controller: rotate/zoom stick, measurement list commands.
    Left,
    /// Right controller: pan stick.
    Right,
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handedness::Left => write!(f, "left"),
            Handedness::Right => write!(f, "right"),
        }
    }
}

/// Index-finger trigger.
pub const BUTTON_TRIGGER: usize = 0;
/// Middle-finger trigger.
pub const BUTTON_SQUEEZE: usize = 1;
/// Thumbstick press.
pub const BUTTON_THUMBSTICK: usize = 3;
/// X on the left controller, A on the right.
pub const BUTTON_XA: usize = 4;
/// Y on the left controller, B on the right.
pub const BUTTON_YB: usize = 5;

/// Thumbstick X axis.
pub const AXIS_STICK_X: usize = 2;
/// Thumbstick Y axis.
pub const AXIS_STICK_Y: usize = 3;

/// One frame of gamepad state for a single controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamepadSnapshot {
    /// Analog axes; at least 4 entries on real hardware.
    pub axes: Vec<f32>,
    /// Pressed state per button; at least 6 entries on real hardware.
    pub buttons: Vec<bool>,
}

impl GamepadSnapshot {
    /// Builds a snapshot with the thumbstick at `(x, y)` and no buttons
    /// pressed.
    #[must_use]
    pub fn with_stick(x: f32, y: f32) -> Self {
        Self {
            axes: vec![0.0, 0.0, x, y],
            buttons: vec![false; 6],
        }
    }

    /// Whether `button` is currently pressed. Out-of-range indices read
    /// as unpressed.
    #[must_use]
    pub fn pressed(&self, button: usize) -> bool {
        self.buttons.get(button).copied().unwrap_or(false)
    }

    /// Axis value, zero when out of range.
    #[must_use]
    pub fn axis(&self, axis: usize) -> f32 {
        self.axes.get(axis).copied().unwrap_or(0.0)
    }
}
