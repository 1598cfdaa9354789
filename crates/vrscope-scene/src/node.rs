//! Scene node handles.

/// Opaque handle to a node owned by the scene backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a handle from a raw id. Backends hand these out; user code
    /// should treat them as opaque.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id backing this handle.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of renderable primitive a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A container for other nodes.
    Group,
    /// A small sphere marking a point.
    Marker,
    /// A billboarded text sprite.
    Label,
    /// A line segment between two points.
    Line,
    /// A finite square, used for slice-plane widgets.
    Quad,
}
