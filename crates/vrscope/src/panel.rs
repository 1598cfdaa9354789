//! Control-panel model for slice planes.
//!
//! The widget toolkit itself is the host's; this module only holds the
//! panel's state (the pending normal components, stepped like the host's
//! integer sliders) and the actions the widgets emit. The session applies
//! actions via [`crate::InteractionSession::apply_panel_action`].

use glam::Vec3;

/// Range of each normal-component slider.
const NORMAL_RANGE: f32 = 4.0;

/// Pending state of the slice-plane controls.
#[derive(Debug, Clone, Copy)]
pub struct SlicePlanePanel {
    normal_x: f32,
    normal_y: f32,
    normal_z: f32,
}

impl Default for SlicePlanePanel {
    fn default() -> Self {
        Self {
            normal_x: 0.0,
            normal_y: 1.0,
            normal_z: 0.0,
        }
    }
}

impl SlicePlanePanel {
    /// Creates a panel with the default +Y normal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn step(value: f32) -> f32 {
        value.round().clamp(-NORMAL_RANGE, NORMAL_RANGE)
    }

    /// Sets the pending normal's X component (stepped to integers).
    pub fn set_normal_x(&mut self, value: f32) {
        self.normal_x = Self::step(value);
    }

    /// Sets the pending normal's Y component (stepped to integers).
    pub fn set_normal_y(&mut self, value: f32) {
        self.normal_y = Self::step(value);
    }

    /// Sets the pending normal's Z component (stepped to integers).
    pub fn set_normal_z(&mut self, value: f32) {
        self.normal_z = Self::step(value);
    }

    /// The pending normal vector. May be zero; adding validates it.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.normal_x, self.normal_y, self.normal_z)
    }

    /// The action emitted by the panel's add button.
    #[must_use]
    pub fn add_action(&self) -> PanelAction {
        PanelAction::AddPlane {
            normal: self.normal(),
        }
    }
}

/// Commands emitted by the host's control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    /// Add a slice plane with the given normal.
    AddPlane {
        /// Normal direction for the new plane.
        normal: Vec3,
    },
    /// Remove a slice plane.
    RemovePlane(u64),
    /// Move a slice plane along its direction (slider range `[-1, 1]`).
    SetRelPos(u64, f32),
    /// Flip a plane's kept side.
    SetReverse(u64, bool),
    /// Undo the most recent measurement.
    PopMeasurement,
    /// Remove every measurement.
    ClearMeasurements,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_normal_is_up() {
        assert_eq!(SlicePlanePanel::new().normal(), Vec3::Y);
    }

    #[test]
    fn test_components_stepped_and_clamped() {
        let mut panel = SlicePlanePanel::new();
        panel.set_normal_x(2.4);
        panel.set_normal_y(-7.0);
        panel.set_normal_z(0.6);

        assert_eq!(panel.normal(), Vec3::new(2.0, -4.0, 1.0));
    }

    #[test]
    fn test_add_action_carries_pending_normal() {
        let mut panel = SlicePlanePanel::new();
        panel.set_normal_y(0.0);
        panel.set_normal_z(3.0);

        assert_eq!(
            panel.add_action(),
            PanelAction::AddPlane {
                normal: Vec3::new(0.0, 0.0, 3.0)
            }
        );
    }
}
