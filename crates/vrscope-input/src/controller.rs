//! Per-controller state table with button edge detection.

use glam::Vec2;
use vrscope_core::{Pose, Result, VrscopeError};

use crate::gamepad::{GamepadSnapshot, Handedness, AXIS_STICK_X, AXIS_STICK_Y};

/// Number of controller slots tracked.
pub const NUM_CONTROLLERS: usize = 2;

/// State of one controller slot.
///
/// Handedness and gamepad stay `None` until the host delivers a connect
/// event; every query on an unconnected slot is a silent no-op.
#[derive(Debug, Clone, Default)]
struct ControllerState {
    handedness: Option<Handedness>,
    gamepad: Option<GamepadSnapshot>,
    /// Pressed-state bitset from the previous edge-detection query.
    prev_buttons: u32,
    pose: Pose,
}

/// Tracks both controllers' per-frame gamepad and pose state.
#[derive(Debug, Default)]
pub struct SpatialInputTracker {
    slots: [ControllerState; NUM_CONTROLLERS],
}

impl SpatialInputTracker {
    /// Creates a tracker with both slots unconnected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the gamepad handle and handedness for a slot.
    pub fn connect(
        &mut self,
        slot: usize,
        handedness: Handedness,
        gamepad: GamepadSnapshot,
    ) -> Result<()> {
        let state = self
            .slots
            .get_mut(slot)
            .ok_or(VrscopeError::ControllerSlotOutOfRange(slot))?;
        *state = ControllerState {
            handedness: Some(handedness),
            gamepad: Some(gamepad),
            prev_buttons: 0,
            pose: Pose::default(),
        };
        log::info!("controller connected: {handedness}");
        Ok(())
    }

    /// Clears all per-slot state. Grab/measure back-references are the
    /// session's responsibility and must be released before this call.
    pub fn disconnect(&mut self, slot: usize) {
        if let Some(state) = self.slots.get_mut(slot) {
            if let Some(handedness) = state.handedness {
                log::info!("controller disconnected: {handedness}");
            }
            *state = ControllerState::default();
        }
    }

    /// Whether a slot has a connected controller.
    #[must_use]
    pub fn is_connected(&self, slot: usize) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|s| s.handedness.is_some() && s.gamepad.is_some())
    }

    /// Handedness of a slot, if connected.
    #[must_use]
    pub fn handedness(&self, slot: usize) -> Option<Handedness> {
        self.slots.get(slot).and_then(|s| s.handedness)
    }

    /// The slot currently tracked as `handedness`, if any.
    #[must_use]
    pub fn slot_for(&self, handedness: Handedness) -> Option<usize> {
        (0..NUM_CONTROLLERS).find(|&i| self.slots[i].handedness == Some(handedness))
    }

    /// Updates a slot's pose for this frame.
    pub fn set_pose(&mut self, slot: usize, pose: Pose) {
        if let Some(state) = self.slots.get_mut(slot) {
            state.pose = pose;
        }
    }

    /// The slot's last known pose.
    #[must_use]
    pub fn pose(&self, slot: usize) -> Pose {
        self.slots.get(slot).map_or_else(Pose::default, |s| s.pose)
    }

    /// Replaces a slot's gamepad snapshot for this frame. Ignored while
    /// the slot is unconnected.
    pub fn set_gamepad(&mut self, slot: usize, gamepad: GamepadSnapshot) {
        if let Some(state) = self.slots.get_mut(slot) {
            if state.handedness.is_some() {
                state.gamepad = Some(gamepad);
            }
        }
    }

    /// Thumbstick vector for a slot; `None` until connected.
    #[must_use]
    pub fn thumbstick(&self, slot: usize) -> Option<Vec2> {
        let state = self.slots.get(slot)?;
        state.handedness?;
        let gamepad = state.gamepad.as_ref()?;
        Some(Vec2::new(
            gamepad.axis(AXIS_STICK_X),
            gamepad.axis(AXIS_STICK_Y),
        ))
    }

    /// Rising-edge button query: true only on the frame the button goes
    /// from unpressed to pressed.
    ///
    /// Updates the previous-state snapshot as a side effect, so calling it
    /// twice for the same button in one frame reports the edge only once.
    /// Unconnected slots always report false.
    pub fn just_pressed(&mut self, slot: usize, button: usize) -> bool {
        let Some(state) = self.slots.get_mut(slot) else {
            return false;
        };
        if state.handedness.is_none() {
            return false;
        }
        let Some(gamepad) = state.gamepad.as_ref() else {
            return false;
        };

        let pressed = gamepad.pressed(button);
        let mask = 1u32 << (button % 32);
        let was_pressed = state.prev_buttons & mask != 0;
        if pressed {
            state.prev_buttons |= mask;
        } else {
            state.prev_buttons &= !mask;
        }
        pressed && !was_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamepad::BUTTON_XA;

    fn snapshot_with_button(button: usize, pressed: bool) -> GamepadSnapshot {
        let mut gp = GamepadSnapshot::with_stick(0.0, 0.0);
        gp.buttons[button] = pressed;
        gp
    }

    #[test]
    fn test_unconnected_queries_are_silent() {
        let mut tracker = SpatialInputTracker::new();
        assert!(!tracker.is_connected(0));
        assert!(tracker.thumbstick(0).is_none());
        assert!(!tracker.just_pressed(0, BUTTON_XA));
        assert!(tracker.handedness(0).is_none());
        // Out-of-range slots behave the same.
        assert!(!tracker.just_pressed(9, BUTTON_XA));
    }

    #[test]
    fn test_connect_out_of_range_rejected() {
        let mut tracker = SpatialInputTracker::new();
        let err = tracker
            .connect(5, Handedness::Left, GamepadSnapshot::default())
            .unwrap_err();
        assert!(matches!(err, VrscopeError::ControllerSlotOutOfRange(5)));
    }

    #[test]
    fn test_rising_edge_fires_once() {
        let mut tracker = SpatialInputTracker::new();
        tracker
            .connect(0, Handedness::Left, snapshot_with_button(BUTTON_XA, false))
            .unwrap();

        assert!(!tracker.just_pressed(0, BUTTON_XA));

        tracker.set_gamepad(0, snapshot_with_button(BUTTON_XA, true));
        assert!(tracker.just_pressed(0, BUTTON_XA));
        // Held across frames: no further edges.
        assert!(!tracker.just_pressed(0, BUTTON_XA));
        tracker.set_gamepad(0, snapshot_with_button(BUTTON_XA, true));
        assert!(!tracker.just_pressed(0, BUTTON_XA));

        // Release then press again: a new edge.
        tracker.set_gamepad(0, snapshot_with_button(BUTTON_XA, false));
        assert!(!tracker.just_pressed(0, BUTTON_XA));
        tracker.set_gamepad(0, snapshot_with_button(BUTTON_XA, true));
        assert!(tracker.just_pressed(0, BUTTON_XA));
    }

    #[test]
    fn test_disconnect_clears_state() {
        let mut tracker = SpatialInputTracker::new();
        tracker
            .connect(1, Handedness::Right, GamepadSnapshot::with_stick(0.5, 0.0))
            .unwrap();
        assert_eq!(tracker.slot_for(Handedness::Right), Some(1));

        tracker.disconnect(1);
        assert!(!tracker.is_connected(1));
        assert!(tracker.thumbstick(1).is_none());
        assert_eq!(tracker.slot_for(Handedness::Right), None);
    }

    #[test]
    fn test_thumbstick_reads_webxr_axes() {
        let mut tracker = SpatialInputTracker::new();
        tracker
            .connect(0, Handedness::Right, GamepadSnapshot::with_stick(0.25, -0.75))
            .unwrap();
        let stick = tracker.thumbstick(0).unwrap();
        assert!((stick.x - 0.25).abs() < f32::EPSILON);
        assert!((stick.y + 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_short_button_array_reads_unpressed() {
        let mut tracker = SpatialInputTracker::new();
        tracker
            .connect(
                0,
                Handedness::Left,
                GamepadSnapshot {
                    axes: vec![0.0; 4],
                    buttons: vec![true],
                },
            )
            .unwrap();
        assert!(!tracker.just_pressed(0, BUTTON_XA));
    }
}
