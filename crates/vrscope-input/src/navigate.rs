//! Continuous world navigation from thumbstick input.
//!
//! Right stick pans the world in the grip's frame; the left stick either
//! rotates (mostly-horizontal input) or zooms (mostly-vertical input).
//! Diagonal input falls in a dead band so a single flick never rotates
//! and zooms at once.

use vrscope_core::{Options, Vec3, WorldTransform};

use crate::controller::{SpatialInputTracker, NUM_CONTROLLERS};
use crate::gamepad::Handedness;

/// Classification of a left-stick sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickGesture {
    /// Mostly-horizontal input: rotate about the up-axis.
    Rotate,
    /// Mostly-vertical input: zoom.
    Zoom,
    /// Diagonal dead band, or within the stick deadzone.
    Neither,
}

/// Applies thumbstick input to the world transform each frame.
#[derive(Debug, Clone)]
pub struct Navigator {
    move_speed: f32,
    zoom_speed: f32,
    rotate_speed: f32,
    stick_deadzone: f32,
    rotate_tan_max: f32,
    zoom_tan_min: f32,
    scale_min: f32,
    scale_max: f32,
}

impl Navigator {
    /// Builds a navigator from the session options.
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self {
            move_speed: opts.move_speed,
            zoom_speed: opts.zoom_speed,
            rotate_speed: opts.rotate_speed,
            stick_deadzone: opts.stick_deadzone,
            rotate_tan_max: opts.rotate_tan_max,
            zoom_tan_min: opts.zoom_tan_min,
            scale_min: opts.scale_min,
            scale_max: opts.scale_max,
        }
    }

    /// Classifies a left-stick sample into rotate, zoom, or neither.
    ///
    /// The ratio `|y/x|` picks the gesture; a near-zero `x` counts as a
    /// very large ratio so straight-up input always zooms. Values exactly
    /// at either threshold stay in the dead band.
    #[must_use]
    pub fn classify(&self, x: f32, y: f32) -> StickGesture {
        if x.abs() <= self.stick_deadzone && y.abs() <= self.stick_deadzone {
            return StickGesture::Neither;
        }

        let tan = if x.abs() < 1e-4 { 1e5 } else { (y / x).abs() };

        if tan < self.rotate_tan_max {
            StickGesture::Rotate
        } else if tan > self.zoom_tan_min {
            StickGesture::Zoom
        } else {
            StickGesture::Neither
        }
    }

    /// Advances the world transform by one frame of thumbstick input.
    ///
    /// Controllers without a gamepad or handedness are skipped silently;
    /// they may still be connecting.
    pub fn update(&self, tracker: &SpatialInputTracker, world: &mut WorldTransform, dt: f32) {
        for slot in 0..NUM_CONTROLLERS {
            let Some(hand) = tracker.handedness(slot) else {
                continue;
            };
            let Some(stick) = tracker.thumbstick(slot) else {
                continue;
            };
            let (x, y) = (stick.x, stick.y);

            match hand {
                Handedness::Right => {
                    if x.abs() > self.stick_deadzone || y.abs() > self.stick_deadzone {
                        // Move in the grip's frame: stick X strafes, stick
                        // Y moves along the grip's forward/back.
                        let dir = tracker.pose(slot).orientation * Vec3::new(x, 0.0, y);
                        world.translate(dir * self.move_speed * dt);
                    }
                }
                Handedness::Left => match self.classify(x, y) {
                    StickGesture::Rotate => {
                        world.rotate_y(x * self.rotate_speed * dt);
                    }
                    StickGesture::Zoom => {
                        // Forward on the stick is negative y, so pushing
                        // forward zooms in.
                        let factor = 1.0 - y * self.zoom_speed * dt;
                        world.scale_by(factor);
                        world.clamp_scale(self.scale_min, self.scale_max);
                    }
                    StickGesture::Neither => {}
                },
            }
        }
    }
}
