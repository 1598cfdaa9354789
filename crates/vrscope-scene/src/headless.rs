//! In-memory scene backend.
//!
//! Keeps every primitive as plain data, with no GPU or window involved.
//! Used by the integration tests and by headless hosts that only need the
//! interaction state (e.g. exporting measurements).

use std::collections::HashMap;

use glam::{Quat, Vec3};
use vrscope_core::{Pose, Result, VrscopeError};

use crate::engine::SceneEngine;
use crate::node::{NodeId, NodeKind};

/// A recorded scene node.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// What primitive this node is.
    pub kind: NodeKind,
    /// Parent group, if any.
    pub parent: Option<NodeId>,
    /// Position in the parent's space.
    pub position: Vec3,
    /// Orientation in the parent's space.
    pub orientation: Quat,
    /// Half edge length for quads, radius for markers, scale for labels.
    pub size: f32,
    /// Endpoints for line nodes.
    pub line: (Vec3, Vec3),
    /// Text for label nodes.
    pub text: String,
    /// Whether the node is drawn.
    pub visible: bool,
    /// Cosmetic highlight state.
    pub highlighted: bool,
}

impl SceneNode {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            size: 0.0,
            line: (Vec3::ZERO, Vec3::ZERO),
            text: String::new(),
            visible: true,
            highlighted: false,
        }
    }
}

/// In-memory [`SceneEngine`] implementation.
#[derive(Default)]
pub struct HeadlessScene {
    nodes: HashMap<NodeId, SceneNode>,
    next_id: u64,
}

impl HeadlessScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, node: SceneNode) -> NodeId {
        self.next_id += 1;
        let id = NodeId::from_raw(self.next_id);
        self.nodes.insert(id, node);
        id
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Looks up a live node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Whether a node is live and visible.
    #[must_use]
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.visible)
    }

    /// The text of a label node, if live.
    #[must_use]
    pub fn label_text(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.text.as_str())
    }

    /// The endpoints of a line node, if live.
    #[must_use]
    pub fn line_endpoints(&self, id: NodeId) -> Option<(Vec3, Vec3)> {
        self.nodes.get(&id).map(|n| n.line)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn live_node_count(&self) -> usize {
        self.nodes.len()
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            for (child, node) in &self.nodes {
                if node.parent == Some(id) {
                    stack.push(*child);
                    out.push(*child);
                }
            }
        }
        out
    }
}

impl SceneEngine for HeadlessScene {
    fn create_group(&mut self, parent: Option<NodeId>) -> NodeId {
        self.insert(SceneNode::new(NodeKind::Group, parent))
    }

    fn create_marker(&mut self, parent: NodeId, position: Vec3, size: f32) -> NodeId {
        let mut node = SceneNode::new(NodeKind::Marker, Some(parent));
        node.position = position;
        node.size = size;
        self.insert(node)
    }

    fn create_label(&mut self, parent: NodeId, position: Vec3, text: &str, size: f32) -> NodeId {
        let mut node = SceneNode::new(NodeKind::Label, Some(parent));
        node.position = position;
        node.text = text.to_string();
        node.size = size;
        self.insert(node)
    }

    fn create_line(&mut self, parent: NodeId, start: Vec3, end: Vec3) -> NodeId {
        let mut node = SceneNode::new(NodeKind::Line, Some(parent));
        node.line = (start, end);
        self.insert(node)
    }

    fn create_quad(&mut self, parent: NodeId, pose: Pose, half_extent: f32) -> NodeId {
        let mut node = SceneNode::new(NodeKind::Quad, Some(parent));
        node.position = pose.position;
        node.orientation = pose.orientation;
        node.size = half_extent;
        self.insert(node)
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) {
        if let Some(n) = self.get_mut(node) {
            n.position = position;
        }
    }

    fn set_pose(&mut self, node: NodeId, pose: Pose) {
        if let Some(n) = self.get_mut(node) {
            n.position = pose.position;
            n.orientation = pose.orientation;
        }
    }

    fn set_line_endpoints(&mut self, node: NodeId, start: Vec3, end: Vec3) {
        if let Some(n) = self.get_mut(node) {
            n.line = (start, end);
        }
    }

    fn set_label_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.get_mut(node) {
            n.text = text.to_string();
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(n) = self.get_mut(node) {
            n.visible = visible;
        }
    }

    fn set_highlight(&mut self, node: NodeId, highlight: bool) {
        if let Some(n) = self.get_mut(node) {
            n.highlighted = highlight;
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(n) = self.get_mut(node) {
            n.parent = None;
        }
    }

    fn dispose(&mut self, node: NodeId) -> Result<()> {
        if self.nodes.remove(&node).is_none() {
            return Err(VrscopeError::NodeNotFound(node.raw()));
        }
        for child in self.descendants(node) {
            self.nodes.remove(&child);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_move_marker() {
        let mut scene = HeadlessScene::new();
        let group = scene.create_group(None);
        let marker = scene.create_marker(group, Vec3::ONE, 0.02);

        assert_eq!(scene.node(marker).unwrap().kind, NodeKind::Marker);
        scene.set_position(marker, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.node(marker).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_visibility_defaults_on() {
        let mut scene = HeadlessScene::new();
        let group = scene.create_group(None);
        let line = scene.create_line(group, Vec3::ZERO, Vec3::X);

        assert!(scene.is_visible(line));
        scene.set_visible(line, false);
        assert!(!scene.is_visible(line));
    }

    #[test]
    fn test_dispose_removes_subtree() {
        let mut scene = HeadlessScene::new();
        let group = scene.create_group(None);
        let marker = scene.create_marker(group, Vec3::ZERO, 0.02);
        let label = scene.create_label(group, Vec3::ZERO, "hi", 0.5);

        scene.dispose(group).unwrap();
        assert!(scene.node(marker).is_none());
        assert!(scene.node(label).is_none());
        assert_eq!(scene.live_node_count(), 0);
    }

    #[test]
    fn test_double_dispose_fails_quietly() {
        let mut scene = HeadlessScene::new();
        let group = scene.create_group(None);

        scene.dispose(group).unwrap();
        assert!(scene.dispose(group).is_err());
        // The quiet path swallows the failure.
        scene.dispose_quiet(group);
    }

    #[test]
    fn test_setters_noop_on_dead_handle() {
        let mut scene = HeadlessScene::new();
        let group = scene.create_group(None);
        let label = scene.create_label(group, Vec3::ZERO, "a", 0.5);
        scene.dispose(label).unwrap();

        // Must not panic or resurrect the node.
        scene.set_label_text(label, "b");
        scene.set_visible(label, true);
        assert!(scene.node(label).is_none());
    }
}
