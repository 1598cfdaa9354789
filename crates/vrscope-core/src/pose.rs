//! Controller poses and ray/quad intersection.

use glam::{Quat, Vec3};

/// 6-DoF pose of a tracked controller for one frame, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Creates a pose from position and orientation.
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Creates a pose at a position with identity orientation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// The pointing direction of the controller: local -Z in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// The ray cast along this pose's pointing direction.
    #[must_use]
    pub fn ray(&self) -> Ray {
        Ray {
            origin: self.position,
            dir: self.forward(),
        }
    }
}

/// A ray in world space. `dir` is expected to be normalized.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction.
    pub dir: Vec3,
}

/// A finite square in world space, used as a pick target.
#[derive(Debug, Clone, Copy)]
pub struct PickQuad {
    /// Identity of the object this quad belongs to.
    pub id: u64,
    /// Center of the quad.
    pub center: Vec3,
    /// Orientation; the quad spans local X/Y, its normal is local +Z.
    pub orientation: Quat,
    /// Half the edge length.
    pub half_extent: f32,
}

/// An intersection between a ray and a pick target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Identity of the hit object.
    pub id: u64,
    /// Distance along the ray.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

impl Ray {
    /// Intersects this ray with a quad.
    ///
    /// Returns `None` for rays parallel to the quad, intersections behind
    /// the origin, and points outside the quad bounds. Both faces of the
    /// quad are hittable.
    #[must_use]
    pub fn intersect_quad(&self, quad: &PickQuad) -> Option<RayHit> {
        let normal = quad.orientation * Vec3::Z;
        let denom = self.dir.dot(normal);
        if denom.abs() < 1e-6 {
            return None;
        }

        let t = (quad.center - self.origin).dot(normal) / denom;
        if t < 0.0 {
            return None;
        }

        let point = self.origin + self.dir * t;
        let local = quad.orientation.inverse() * (point - quad.center);
        if local.x.abs() > quad.half_extent || local.y.abs() > quad.half_extent {
            return None;
        }

        Some(RayHit {
            id: quad.id,
            distance: t,
            point,
        })
    }
}
