//! Configuration options for vrscope.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Global configuration options for vrscope.
///
/// All speeds are per second; the frame update scales them by the elapsed
/// time, so behavior is frame-rate independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Panning speed in world units per second.
    pub move_speed: f32,

    /// Zoom speed in scale units per second.
    pub zoom_speed: f32,

    /// Rotation speed in radians per second.
    pub rotate_speed: f32,

    /// Minimum thumbstick magnitude before axis input is acted on.
    pub stick_deadzone: f32,

    /// Minimum drag distance (world-local units) before a measurement
    /// starts showing its end/line/midpoint artifacts.
    pub measure_deadzone: f32,

    /// Lower bound for every axis of the world scale.
    pub scale_min: f32,

    /// Upper bound for every axis of the world scale.
    pub scale_max: f32,

    /// Thumbstick inputs with |y/x| below this ratio rotate the world.
    pub rotate_tan_max: f32,

    /// Thumbstick inputs with |y/x| above this ratio zoom the world.
    pub zoom_tan_min: f32,

    /// Radius of measurement point markers.
    pub marker_size: f32,

    /// Scale applied to measurement labels.
    pub label_size: f32,

    /// Offset of a label above its marker.
    pub label_offset: Vec3,

    /// Decimal places in measurement labels.
    pub label_decimals: usize,

    /// Half edge length of slice-plane helper widgets, in world-local
    /// units.
    pub helper_half_extent: f32,

    /// World position applied when a VR session starts.
    pub vr_entry_position: Vec3,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            zoom_speed: 1.0,
            rotate_speed: 0.5,
            stick_deadzone: 0.01,
            measure_deadzone: 0.1,
            scale_min: 0.1,
            scale_max: 10.0,
            rotate_tan_max: 0.577,
            zoom_tan_min: 1.732,
            marker_size: 0.02,
            label_size: 0.5,
            label_offset: Vec3::new(0.0, 0.2, 0.0),
            label_decimals: 2,
            helper_half_extent: 2.0,
            vr_entry_position: Vec3::new(0.0, 1.0, -1.0),
        }
    }
}

impl Options {
    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Saves options as a JSON file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_interaction_constants() {
        let opts = Options::default();
        assert!((opts.move_speed - 0.5).abs() < f32::EPSILON);
        assert!((opts.stick_deadzone - 0.01).abs() < f32::EPSILON);
        assert!((opts.measure_deadzone - 0.1).abs() < f32::EPSILON);
        assert!((opts.scale_min - 0.1).abs() < f32::EPSILON);
        assert!((opts.scale_max - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut opts = Options::default();
        opts.move_speed = 1.25;
        opts.vr_entry_position = Vec3::new(0.5, 1.5, -2.0);

        let json = opts.to_json().unwrap();
        let back = Options::from_json(&json).unwrap();

        assert!((back.move_speed - 1.25).abs() < f32::EPSILON);
        assert_eq!(back.vr_entry_position, opts.vr_entry_position);
    }
}
