//! Ray picking against slice-plane widgets.

use vrscope_core::{PickQuad, Pose, RayHit};

/// Casts controller rays against a candidate set of quads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RayPicker;

impl RayPicker {
    /// Intersects the controller's pointing ray with `candidates`.
    ///
    /// Returns hits sorted by ascending distance. An empty candidate set
    /// or no intersection yields an empty vec, never an error.
    #[must_use]
    pub fn pick(pose: &Pose, candidates: &[PickQuad]) -> Vec<RayHit> {
        let ray = pose.ray();
        let mut hits: Vec<RayHit> = candidates
            .iter()
            .filter_map(|quad| ray.intersect_quad(quad))
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    fn quad(id: u64, z: f32) -> PickQuad {
        PickQuad {
            id,
            center: Vec3::new(0.0, 0.0, z),
            orientation: Quat::IDENTITY,
            half_extent: 1.0,
        }
    }

    #[test]
    fn test_hits_sorted_by_distance() {
        let pose = Pose::at(Vec3::new(0.0, 0.0, 5.0));
        let hits = RayPicker::pick(&pose, &[quad(1, -3.0), quad(2, 3.0), quad(3, 0.0)]);

        let order: Vec<u64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!((hits[0].distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_candidates() {
        let pose = Pose::at(Vec3::ZERO);
        assert!(RayPicker::pick(&pose, &[]).is_empty());
    }

    #[test]
    fn test_no_hit_is_empty_not_error() {
        // Quads behind the controller are unreachable.
        let pose = Pose::at(Vec3::new(0.0, 0.0, -5.0));
        assert!(RayPicker::pick(&pose, &[quad(1, 0.0)]).is_empty());
    }
}
