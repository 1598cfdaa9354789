//! The scene capability consumed by the interaction pipeline.
//!
//! vrscope does not render anything itself; the host supplies an
//! implementation of [`SceneEngine`] backed by its scene graph. The
//! interaction code only ever creates primitives, moves them, toggles
//! visibility and disposes them. Positions are in the coordinate space of
//! the node's parent group.

use glam::Vec3;
use vrscope_core::{Pose, Result};

use crate::node::NodeId;

/// Capability for creating and updating renderable primitives.
pub trait SceneEngine {
    /// Creates a container group. `None` parents the group at the
    /// backend's root (conventionally the world group).
    fn create_group(&mut self, parent: Option<NodeId>) -> NodeId;

    /// Creates a point marker at `position`.
    fn create_marker(&mut self, parent: NodeId, position: Vec3, size: f32) -> NodeId;

    /// Creates a text sprite at `position`.
    fn create_label(&mut self, parent: NodeId, position: Vec3, text: &str, size: f32) -> NodeId;

    /// Creates a line segment from `start` to `end`.
    fn create_line(&mut self, parent: NodeId, start: Vec3, end: Vec3) -> NodeId;

    /// Creates a finite square with the given pose and half edge length.
    fn create_quad(&mut self, parent: NodeId, pose: Pose, half_extent: f32) -> NodeId;

    /// Moves a node. No-op when the handle no longer resolves.
    fn set_position(&mut self, node: NodeId, position: Vec3);

    /// Sets a node's position and orientation. No-op when the handle no
    /// longer resolves.
    fn set_pose(&mut self, node: NodeId, pose: Pose);

    /// Updates both endpoints of a line node.
    fn set_line_endpoints(&mut self, node: NodeId, start: Vec3, end: Vec3);

    /// Replaces the text of a label node.
    fn set_label_text(&mut self, node: NodeId, text: &str);

    /// Shows or hides a node.
    fn set_visible(&mut self, node: NodeId, visible: bool);

    /// Toggles a cosmetic highlight on a node.
    fn set_highlight(&mut self, node: NodeId, highlight: bool);

    /// Detaches a node from its parent without destroying it.
    fn detach(&mut self, node: NodeId);

    /// Destroys a node and everything below it, releasing its rendering
    /// resources. Fails when the handle no longer resolves.
    fn dispose(&mut self, node: NodeId) -> Result<()>;

    /// Best-effort dispose: failures are logged and swallowed so cleanup
    /// of one artifact never blocks cleanup of the rest.
    fn dispose_quiet(&mut self, node: NodeId) {
        if let Err(err) = self.dispose(node) {
            log::debug!("scene cleanup skipped node {node}: {err}");
        }
    }
}
