//! The world transform manipulated by controller input.
//!
//! The whole scene lives under a single "world" group; panning, zooming and
//! rotating move that group rather than the camera. Measurement points and
//! slice-plane widgets are stored in the group's local space so they follow
//! the world as it is manipulated.

use glam::{Mat4, Quat, Vec3};

/// Transform of the world group: translation, rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    /// Translation component.
    pub translation: Vec3,
    /// Rotation component as a quaternion.
    pub rotation: Quat,
    /// Scale component. Kept uniform by the zoom gesture, but stored
    /// per-axis and clamped per-axis.
    pub scale: Vec3,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl WorldTransform {
    /// Creates a new identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a transform from a translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Converts this transform to a Mat4.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Creates a transform from a Mat4.
    ///
    /// This decomposition may not be exact for matrices with shear.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Transforms a point from world space into the group's local space.
    #[must_use]
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        self.to_matrix().inverse().transform_point3(point)
    }

    /// Transforms a point from the group's local space into world space.
    #[must_use]
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        self.to_matrix().transform_point3(point)
    }

    /// Translates the world by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Rotates the world about its own up-axis.
    ///
    /// Post-multiplies, so the rotation happens around the group's local
    /// Y axis regardless of its current orientation.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation *= Quat::from_rotation_y(angle);
    }

    /// Multiplies every scale axis by `factor`.
    pub fn scale_by(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// Clamps every scale axis to `[min, max]`.
    pub fn clamp_scale(&mut self, min: f32, max: f32) {
        self.scale = self.scale.clamp(Vec3::splat(min), Vec3::splat(max));
    }

    /// Resets to identity with the given translation, as done when a VR
    /// session starts or ends.
    pub fn reset_to(&mut self, translation: Vec3) {
        self.translation = translation;
        self.rotation = Quat::IDENTITY;
        self.scale = Vec3::ONE;
    }
}
