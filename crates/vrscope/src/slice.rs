//! Interactive slice planes.
//!
//! Couples the slice-plane math with a grabbable helper widget in the
//! scene. In VR the widget is grabbed with a controller and dragged along
//! the plane normal; outside VR the offset comes from the panel slider.
//! Either way the world-space clip equation is recomposed every frame
//! from the current world transform.

use glam::Vec3;
use vrscope_core::{
    ClipPlaneUniforms, PickQuad, Result, SlicePlane, WorldTransform, MAX_CLIP_PLANES,
};
use vrscope_input::{GrabManipulator, SpatialInputTracker};
use vrscope_scene::{NodeId, SceneEngine};

/// A slice plane with its helper widget.
#[derive(Debug)]
pub struct SlicePlaneInstance {
    id: u64,
    plane: SlicePlane,
    helper: NodeId,
    half_extent: f32,
}

impl SlicePlaneInstance {
    /// Registry id of this plane.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The underlying plane math.
    #[must_use]
    pub fn plane(&self) -> &SlicePlane {
        &self.plane
    }

    /// The helper widget's scene node.
    #[must_use]
    pub fn helper(&self) -> NodeId {
        self.helper
    }

    /// The helper widget's position in world-local space.
    #[must_use]
    pub fn helper_local_position(&self) -> Vec3 {
        self.plane.helper_pose().position
    }
}

/// The set of active slice planes, in creation order.
#[derive(Debug, Default)]
pub struct SlicePlaneSet {
    planes: Vec<SlicePlaneInstance>,
    next_id: u64,
    group: Option<NodeId>,
}

impl SlicePlaneSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_group(&mut self, scene: &mut dyn SceneEngine) -> NodeId {
        *self
            .group
            .get_or_insert_with(|| scene.create_group(None))
    }

    /// Adds a slice plane with the given normal direction.
    ///
    /// Fails with [`vrscope_core::VrscopeError::InvalidPlaneNormal`] for a
    /// zero direction, before anything is registered.
    pub fn add(
        &mut self,
        scene: &mut dyn SceneEngine,
        direction: Vec3,
        half_extent: f32,
    ) -> Result<u64> {
        let plane = SlicePlane::new(direction)?;

        let group = self.ensure_group(scene);
        let helper = scene.create_quad(group, plane.helper_pose(), half_extent);

        self.next_id += 1;
        let id = self.next_id;
        self.planes.push(SlicePlaneInstance {
            id,
            plane,
            helper,
            half_extent,
        });
        log::debug!("slice plane {id} added, direction {}", direction.normalize());
        Ok(id)
    }

    /// Removes a plane, disposing its helper and dropping any grab on it.
    pub fn remove(&mut self, scene: &mut dyn SceneEngine, grab: &mut GrabManipulator, id: u64) {
        if let Some(index) = self.planes.iter().position(|p| p.id == id) {
            let instance = self.planes.remove(index);
            grab.forget_object(id);
            scene.dispose_quiet(instance.helper);
        }
    }

    /// Removes every plane.
    pub fn clear_all(&mut self, scene: &mut dyn SceneEngine, grab: &mut GrabManipulator) {
        while let Some(instance) = self.planes.pop() {
            grab.forget_object(instance.id);
            scene.dispose_quiet(instance.helper);
        }
    }

    /// Sets a plane's offset along its direction, clamped to `[-1, 1]`
    /// (the panel slider range).
    pub fn set_rel_pos(&mut self, id: u64, rel_pos: f32) {
        if let Some(instance) = self.planes.iter_mut().find(|p| p.id == id) {
            instance.plane.set_rel_pos(rel_pos.clamp(-1.0, 1.0));
        }
    }

    /// Flips which side of a plane is kept.
    pub fn set_reverse(&mut self, id: u64, reverse: bool) {
        if let Some(instance) = self.planes.iter_mut().find(|p| p.id == id) {
            instance.plane.set_reverse(reverse);
        }
    }

    /// Advances every plane by one frame.
    ///
    /// A grabbed plane recomputes its offset from its own grab anchors:
    /// the controller's motion since the grab, projected onto the plane
    /// direction and descaled into world-local units. The grab supplies
    /// only anchors; nothing else moves the plane.
    pub fn update_all(
        &mut self,
        scene: &mut dyn SceneEngine,
        world: &WorldTransform,
        in_vr: bool,
        grab: &GrabManipulator,
        tracker: &SpatialInputTracker,
    ) {
        let world_scale = world.scale.y;
        for instance in &mut self.planes {
            if in_vr {
                if let Some(anchors) = grab.anchors(instance.id) {
                    let direction = instance.plane.direction();
                    let rel_pos_initial = anchors.object_initial.dot(direction);

                    let moved =
                        tracker.pose(anchors.controller).position - anchors.controller_initial;
                    let along = moved.dot(world.rotation * direction);

                    instance
                        .plane
                        .set_rel_pos(rel_pos_initial + along / world_scale);
                }
            }

            scene.set_pose(instance.helper, instance.plane.helper_pose());
            scene.set_highlight(instance.helper, grab.is_selected(instance.id));
        }
    }

    /// World-space pick candidates for every helper widget.
    #[must_use]
    pub fn pick_quads(&self, world: &WorldTransform) -> Vec<PickQuad> {
        self.planes
            .iter()
            .map(|instance| {
                let pose = instance.plane.helper_pose();
                PickQuad {
                    id: instance.id,
                    center: world.local_to_world(pose.position),
                    orientation: world.rotation * pose.orientation,
                    half_extent: instance.half_extent * world.scale.y,
                }
            })
            .collect()
    }

    /// The helper's world-local position, for grab anchor capture.
    #[must_use]
    pub fn helper_local_position(&self, id: u64) -> Option<Vec3> {
        self.planes
            .iter()
            .find(|p| p.id == id)
            .map(SlicePlaneInstance::helper_local_position)
    }

    /// Clip-plane uniform blocks for the host renderer, in creation
    /// order, truncated to [`MAX_CLIP_PLANES`].
    #[must_use]
    pub fn clip_uniforms(&self, world: &WorldTransform) -> Vec<ClipPlaneUniforms> {
        if self.planes.len() > MAX_CLIP_PLANES {
            log::debug!(
                "{} slice planes active, host renderer only clips the first {MAX_CLIP_PLANES}",
                self.planes.len()
            );
        }
        self.planes
            .iter()
            .take(MAX_CLIP_PLANES)
            .map(|instance| ClipPlaneUniforms::from(&instance.plane.clip_plane(world)))
            .collect()
    }

    /// Looks up a plane by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&SlicePlaneInstance> {
        self.planes.iter().find(|p| p.id == id)
    }

    /// Planes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SlicePlaneInstance> {
        self.planes.iter()
    }

    /// Number of planes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}
