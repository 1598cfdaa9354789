//! Slice-plane math.
//!
//! A slice plane is defined in the world group's local space by a base
//! direction and a scalar offset (`rel_pos`) along it. The clip equation
//! handed to the host renderer lives in world space, so it has to be
//! recomposed whenever the world transform changes: scale affects the
//! offset, rotation affects the normal, and panning shifts the constant.

use glam::{Quat, Vec3};

use crate::error::{Result, VrscopeError};
use crate::pose::Pose;
use crate::transform::WorldTransform;

/// A slice plane in the world group's local space.
#[derive(Debug, Clone)]
pub struct SlicePlane {
    /// Normalized base direction of the plane normal.
    direction: Vec3,
    /// Offset along `direction`, in world-local units.
    rel_pos: f32,
    /// Whether the kept side is flipped.
    reverse: bool,
}

impl SlicePlane {
    /// Creates a slice plane from a direction vector.
    ///
    /// Returns [`VrscopeError::InvalidPlaneNormal`] when the direction is
    /// zero or not finite; nothing is registered in that case.
    pub fn new(direction: Vec3) -> Result<Self> {
        if !direction.is_finite() || direction.length_squared() < 1e-12 {
            return Err(VrscopeError::InvalidPlaneNormal);
        }
        Ok(Self {
            direction: direction.normalize(),
            rel_pos: 0.0,
            reverse: false,
        })
    }

    /// The normalized base direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The offset along the base direction.
    #[must_use]
    pub fn rel_pos(&self) -> f32 {
        self.rel_pos
    }

    /// Sets the offset along the base direction.
    pub fn set_rel_pos(&mut self, rel_pos: f32) {
        self.rel_pos = rel_pos;
    }

    /// Whether the kept side is flipped.
    #[must_use]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Flips which side of the plane is kept.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// The direction the clip normal points, accounting for `reverse`.
    #[must_use]
    pub fn effective_direction(&self) -> Vec3 {
        if self.reverse {
            -self.direction
        } else {
            self.direction
        }
    }

    /// Composes the world-space clip plane for the current world transform.
    ///
    /// Composition order matches the interactive pipeline: scale moves the
    /// offset, rotation turns the normal, panning shifts the constant.
    #[must_use]
    pub fn clip_plane(&self, world: &WorldTransform) -> ClipPlane {
        let world_scale = world.scale.y;

        let mut constant = -self.rel_pos * world_scale;
        let normal = world.rotation * self.effective_direction();
        constant -= normal.dot(world.translation);

        ClipPlane { normal, constant }
    }

    /// Pose of the helper widget in the world group's local space.
    ///
    /// The widget sits on the base direction even when the clip side is
    /// reversed, so flipping does not visibly move it.
    #[must_use]
    pub fn helper_pose(&self) -> Pose {
        Pose::new(
            self.direction * self.rel_pos,
            Quat::from_rotation_arc(Vec3::Z, self.direction),
        )
    }
}

/// A plane equation in world space: points with
/// `normal . p + constant >= 0` are kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane {
    /// Unit normal pointing toward the kept half-space.
    pub normal: Vec3,
    /// Plane constant.
    pub constant: f32,
}

impl ClipPlane {
    /// Signed distance from a world-space point to the plane.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    /// Whether a world-space point is on the kept side.
    #[must_use]
    pub fn is_kept(&self, point: Vec3) -> bool {
        self.signed_distance(point) >= 0.0
    }
}

/// GPU-compatible clip plane uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ClipPlaneUniforms {
    /// Unit normal of the plane.
    pub normal: [f32; 3],
    /// Plane constant.
    pub constant: f32,
}

impl From<&ClipPlane> for ClipPlaneUniforms {
    fn from(plane: &ClipPlane) -> Self {
        Self {
            normal: plane.normal.to_array(),
            constant: plane.constant,
        }
    }
}

/// Maximum number of clip planes the host renderer is expected to support.
pub const MAX_CLIP_PLANES: usize = 4;
