//! Point-to-point distance measurement.
//!
//! One [`MeasurementSession`] is a single press-drag-release ruler. The
//! session captures its start point when the squeeze begins, shows the
//! end point, connecting line and midpoint distance label only once the
//! drag leaves a small deadzone, and freezes on release. Artifacts stay
//! in the scene until the registry disposes the session.

use glam::Vec3;
use vrscope_core::{format_distance, format_point, Options, Pose, WorldTransform};
use vrscope_input::SpatialInputTracker;
use vrscope_scene::{NodeId, SceneEngine};

/// Lifecycle phase of a measurement.
///
/// The drag state is only representable while the session is live, so a
/// released session can never report `Measuring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurePhase {
    /// Created, drag still inside the deadzone.
    Started,
    /// Drag beyond the deadzone; end artifacts are showing.
    Measuring,
    /// Frozen; updates are ignored.
    Released,
}

/// A single ruler measurement and its scene artifacts.
#[derive(Debug)]
pub struct MeasurementSession {
    id: u64,
    controller: usize,
    phase: MeasurePhase,
    initial_position: Vec3,
    current_position: Vec3,
    distance: f32,

    deadzone: f32,
    decimals: usize,
    label_offset: Vec3,

    group: NodeId,
    start_marker: NodeId,
    start_label: NodeId,
    end_marker: NodeId,
    end_label: NodeId,
    line: NodeId,
    mid_marker: NodeId,
    mid_label: NodeId,
}

impl MeasurementSession {
    /// Starts a measurement at the controller's current position.
    ///
    /// The start marker and its coordinate label appear immediately; the
    /// end marker, line and midpoint label are created hidden.
    pub(crate) fn begin(
        id: u64,
        controller: usize,
        scene: &mut dyn SceneEngine,
        world: &WorldTransform,
        pose: Pose,
        opts: &Options,
    ) -> Self {
        let initial = world.world_to_local(pose.position);
        let decimals = opts.label_decimals;

        let group = scene.create_group(None);
        let start_marker = scene.create_marker(group, initial, opts.marker_size);
        let start_label = scene.create_label(
            group,
            initial + opts.label_offset,
            &format_point(initial, decimals),
            opts.label_size,
        );

        let end_marker = scene.create_marker(group, initial, opts.marker_size);
        let end_label =
            scene.create_label(group, initial + opts.label_offset, "", opts.label_size);
        let line = scene.create_line(group, initial, initial);
        let mid_marker = scene.create_marker(group, initial, opts.marker_size);
        let mid_label =
            scene.create_label(group, initial + opts.label_offset, "", opts.label_size);

        let session = Self {
            id,
            controller,
            phase: MeasurePhase::Started,
            initial_position: initial,
            current_position: initial,
            distance: 0.0,
            deadzone: opts.measure_deadzone,
            decimals,
            label_offset: opts.label_offset,
            group,
            start_marker,
            start_label,
            end_marker,
            end_label,
            line,
            mid_marker,
            mid_label,
        };
        session.set_drag_artifacts_visible(scene, false);
        log::debug!("measure {id} started at {initial}");
        session
    }

    fn set_drag_artifacts_visible(&self, scene: &mut dyn SceneEngine, visible: bool) {
        // End point, line and midpoint always flip together.
        scene.set_visible(self.end_marker, visible);
        scene.set_visible(self.end_label, visible);
        scene.set_visible(self.line, visible);
        scene.set_visible(self.mid_marker, visible);
        scene.set_visible(self.mid_label, visible);
    }

    /// Advances the measurement by one frame of controller motion.
    ///
    /// No-op once released; the reported positions and distance stay
    /// frozen at their last values.
    pub fn update(&mut self, scene: &mut dyn SceneEngine, world: &WorldTransform, pose: Pose) {
        if self.phase == MeasurePhase::Released {
            return;
        }

        let local = world.world_to_local(pose.position);
        self.current_position = local;
        self.distance = local.distance(self.initial_position);

        if self.distance < self.deadzone {
            if self.phase == MeasurePhase::Measuring {
                self.phase = MeasurePhase::Started;
                self.set_drag_artifacts_visible(scene, false);
            }
            return;
        }

        if self.phase == MeasurePhase::Started {
            self.phase = MeasurePhase::Measuring;
            self.set_drag_artifacts_visible(scene, true);
        }

        scene.set_position(self.end_marker, local);
        scene.set_label_text(self.end_label, &format_point(local, self.decimals));
        scene.set_position(self.end_label, local + self.label_offset);

        scene.set_line_endpoints(self.line, self.initial_position, local);

        let midpoint = (self.initial_position + local) * 0.5;
        scene.set_position(self.mid_marker, midpoint);
        scene.set_label_text(
            self.mid_label,
            &format_distance(self.distance, self.decimals),
        );
        scene.set_position(self.mid_label, midpoint + self.label_offset);
    }

    /// Freezes the measurement at its current value.
    pub fn release(&mut self) {
        if self.phase != MeasurePhase::Released {
            log::debug!("measure {} released at distance {:.3}", self.id, self.distance);
            self.phase = MeasurePhase::Released;
        }
    }

    /// Disposes every artifact and detaches the container group.
    ///
    /// Consumes the session, so a double clear is unrepresentable. Each
    /// artifact is disposed best-effort; one failure never blocks the
    /// rest.
    pub(crate) fn clear(self, scene: &mut dyn SceneEngine) {
        for node in [
            self.start_marker,
            self.start_label,
            self.end_marker,
            self.end_label,
            self.line,
            self.mid_marker,
            self.mid_label,
        ] {
            scene.dispose_quiet(node);
        }
        scene.detach(self.group);
        scene.dispose_quiet(self.group);
    }

    /// Registry id of this session.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The controller slot driving this session.
    #[must_use]
    pub fn controller(&self) -> usize {
        self.controller
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MeasurePhase {
        self.phase
    }

    /// Whether the session still follows its controller.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != MeasurePhase::Released
    }

    /// Whether the drag is beyond the deadzone.
    #[must_use]
    pub fn is_measuring(&self) -> bool {
        self.phase == MeasurePhase::Measuring
    }

    /// Start point, in world-local space.
    #[must_use]
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    /// Latest (or frozen) end point, in world-local space.
    #[must_use]
    pub fn current_position(&self) -> Vec3 {
        self.current_position
    }

    /// Latest (or frozen) measured distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Midpoint between start and current positions.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        (self.initial_position + self.current_position) * 0.5
    }

    #[cfg(test)]
    pub(crate) fn artifact_ids(&self) -> (NodeId, NodeId, NodeId, NodeId, NodeId) {
        (
            self.end_marker,
            self.end_label,
            self.line,
            self.mid_marker,
            self.mid_label,
        )
    }
}

/// Ordered collection of measurement sessions.
///
/// Insertion order is creation order; undo removes the most recent
/// session. Only the registry disposes sessions.
#[derive(Debug, Default)]
pub struct MeasurementRegistry {
    sessions: Vec<MeasurementSession>,
    next_id: u64,
}

impl MeasurementRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session bound to `controller` and returns its id.
    pub fn begin(
        &mut self,
        scene: &mut dyn SceneEngine,
        world: &WorldTransform,
        controller: usize,
        pose: Pose,
        opts: &Options,
    ) -> u64 {
        self.next_id += 1;
        let session =
            MeasurementSession::begin(self.next_id, controller, scene, world, pose, opts);
        self.sessions.push(session);
        self.next_id
    }

    /// Freezes the session with the given id. Returns false when it no
    /// longer exists (e.g. already undone).
    pub fn release(&mut self, id: u64) -> bool {
        if let Some(session) = self.sessions.iter_mut().find(|s| s.id() == id) {
            session.release();
            true
        } else {
            false
        }
    }

    /// Removes and disposes the most recently created session.
    ///
    /// No-op on an empty registry.
    pub fn pop_and_clear(&mut self, scene: &mut dyn SceneEngine) {
        if let Some(session) = self.sessions.pop() {
            session.clear(scene);
        }
    }

    /// Removes and disposes every session, most recent first.
    pub fn clear_all(&mut self, scene: &mut dyn SceneEngine) {
        while let Some(session) = self.sessions.pop() {
            session.clear(scene);
        }
    }

    /// Updates every session in creation order.
    pub fn update_all(
        &mut self,
        scene: &mut dyn SceneEngine,
        world: &WorldTransform,
        tracker: &SpatialInputTracker,
    ) {
        for session in &mut self.sessions {
            let pose = tracker.pose(session.controller());
            session.update(scene, world, pose);
        }
    }

    /// Whether a session with the given id exists.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.sessions.iter().any(|s| s.id() == id)
    }

    /// Looks up a session by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&MeasurementSession> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    /// Sessions in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &MeasurementSession> {
        self.sessions.iter()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
