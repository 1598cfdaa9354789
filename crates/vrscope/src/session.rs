//! The top-level interaction session.
//!
//! Owns every piece of interaction state — controller table, world
//! transform, grab bookkeeping, measurements, slice planes — as explicit
//! collections, and wires host input events into them. The host calls the
//! event handlers as controller events arrive and [`update`] once per
//! rendered frame.
//!
//! [`update`]: InteractionSession::update

use glam::Vec3;
use vrscope_core::{Options, Pose, WorldTransform};
use vrscope_input::{
    GamepadSnapshot, GrabManipulator, Handedness, Navigator, RayPicker, SpatialInputTracker,
    BUTTON_XA, BUTTON_YB, NUM_CONTROLLERS,
};
use vrscope_scene::SceneEngine;

use crate::measure::MeasurementRegistry;
use crate::panel::PanelAction;
use crate::slice::SlicePlaneSet;

/// All interaction state for one viewer instance.
pub struct InteractionSession {
    options: Options,
    world: WorldTransform,
    tracker: SpatialInputTracker,
    navigator: Navigator,
    grab: GrabManipulator,
    measurements: MeasurementRegistry,
    slice_planes: SlicePlaneSet,
    /// The in-flight measurement per controller, released on squeeze end
    /// or disconnect.
    active_measure: [Option<u64>; NUM_CONTROLLERS],
    in_vr: bool,
}

impl InteractionSession {
    /// Creates a session with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let navigator = Navigator::from_options(&options);
        Self {
            options,
            world: WorldTransform::identity(),
            tracker: SpatialInputTracker::new(),
            navigator,
            grab: GrabManipulator::new(),
            measurements: MeasurementRegistry::new(),
            slice_planes: SlicePlaneSet::new(),
            active_measure: [None; NUM_CONTROLLERS],
            in_vr: false,
        }
    }

    /// Creates a session with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Options::default())
    }

    // ---- host event handlers -------------------------------------------

    /// A controller connected.
    pub fn on_connect(
        &mut self,
        slot: usize,
        handedness: Handedness,
        gamepad: GamepadSnapshot,
    ) -> vrscope_core::Result<()> {
        self.tracker.connect(slot, handedness, gamepad)
    }

    /// A controller disconnected. Any grab it held is force-released and
    /// its in-flight measurement is frozen before the slot is cleared.
    pub fn on_disconnect(&mut self, slot: usize) {
        self.grab.force_release(slot);
        if let Some(id) = self.active_measure.get_mut(slot).and_then(Option::take) {
            self.measurements.release(id);
        }
        self.tracker.disconnect(slot);
    }

    /// Select pressed: try to grab the nearest slice-plane widget under
    /// the controller's ray. No hit leaves the controller idle.
    pub fn on_select_start(&mut self, slot: usize) {
        if !self.tracker.is_connected(slot) {
            return;
        }
        let pose = self.tracker.pose(slot);
        let quads = self.slice_planes.pick_quads(&self.world);
        let hits = RayPicker::pick(&pose, &quads);

        let planes = &self.slice_planes;
        self.grab
            .try_grab(slot, pose.position, &hits, |id| {
                planes.helper_local_position(id)
            });
    }

    /// Select released: drop whatever the controller holds. A release
    /// without a grab is a no-op.
    pub fn on_select_end(&mut self, slot: usize) {
        self.grab.release(slot);
    }

    /// Squeeze pressed: start a measurement at the controller position.
    pub fn on_squeeze_start(&mut self, scene: &mut dyn SceneEngine, slot: usize) {
        if !self.tracker.is_connected(slot) {
            return;
        }
        // A squeeze while one is already running freezes the old one.
        if let Some(prev) = self.active_measure.get_mut(slot).and_then(Option::take) {
            self.measurements.release(prev);
        }

        let pose = self.tracker.pose(slot);
        let id = self
            .measurements
            .begin(scene, &self.world, slot, pose, &self.options);
        if let Some(active) = self.active_measure.get_mut(slot) {
            *active = Some(id);
        }
    }

    /// Squeeze released: freeze the controller's measurement.
    pub fn on_squeeze_end(&mut self, slot: usize) {
        if let Some(id) = self.active_measure.get_mut(slot).and_then(Option::take) {
            self.measurements.release(id);
        }
    }

    // ---- per-frame feeds -----------------------------------------------

    /// Updates a controller's pose for this frame.
    pub fn set_pose(&mut self, slot: usize, pose: Pose) {
        self.tracker.set_pose(slot, pose);
    }

    /// Updates a controller's gamepad snapshot for this frame.
    pub fn set_gamepad(&mut self, slot: usize, gamepad: GamepadSnapshot) {
        self.tracker.set_gamepad(slot, gamepad);
    }

    /// Advances all interaction state by one frame.
    ///
    /// Order matters: navigation first so everything downstream sees this
    /// frame's world transform, then grab-driven slice planes, then the
    /// measurement list commands, then the measurements themselves.
    pub fn update(&mut self, scene: &mut dyn SceneEngine, dt: f32) {
        self.navigator.update(&self.tracker, &mut self.world, dt);

        self.slice_planes
            .update_all(scene, &self.world, self.in_vr, &self.grab, &self.tracker);

        // Left-hand X clears the measurement list, Y undoes the last one.
        if let Some(slot) = self.tracker.slot_for(Handedness::Left) {
            if self.tracker.just_pressed(slot, BUTTON_XA) {
                self.measurements.clear_all(scene);
            }
            if self.tracker.just_pressed(slot, BUTTON_YB) {
                self.measurements.pop_and_clear(scene);
            }
        }
        self.prune_active_measures();

        self.measurements.update_all(scene, &self.world, &self.tracker);
    }

    /// Drops active-measure ids whose session was undone or cleared.
    fn prune_active_measures(&mut self) {
        for active in &mut self.active_measure {
            if active.is_some_and(|id| !self.measurements.contains(id)) {
                *active = None;
            }
        }
    }

    // ---- mode switches -------------------------------------------------

    /// Enters VR: the world jumps to the configured standing pose.
    pub fn enter_vr(&mut self) {
        self.in_vr = true;
        self.world.reset_to(self.options.vr_entry_position);
        log::info!("VR session started");
    }

    /// Leaves VR: the world returns to the origin.
    pub fn exit_vr(&mut self) {
        self.in_vr = false;
        self.world.reset_to(Vec3::ZERO);
        log::info!("VR session ended");
    }

    /// Whether the session is currently in VR.
    #[must_use]
    pub fn is_in_vr(&self) -> bool {
        self.in_vr
    }

    // ---- panel ----------------------------------------------------------

    /// Applies a control-panel action.
    ///
    /// An invalid plane normal is logged and aborts the add without
    /// touching any state.
    pub fn apply_panel_action(&mut self, scene: &mut dyn SceneEngine, action: PanelAction) {
        match action {
            PanelAction::AddPlane { normal } => {
                if let Err(err) =
                    self.slice_planes
                        .add(scene, normal, self.options.helper_half_extent)
                {
                    log::warn!("slice plane rejected: {err}");
                }
            }
            PanelAction::RemovePlane(id) => {
                self.slice_planes.remove(scene, &mut self.grab, id);
            }
            PanelAction::SetRelPos(id, rel_pos) => {
                self.slice_planes.set_rel_pos(id, rel_pos);
            }
            PanelAction::SetReverse(id, reverse) => {
                self.slice_planes.set_reverse(id, reverse);
            }
            PanelAction::PopMeasurement => {
                self.measurements.pop_and_clear(scene);
                self.prune_active_measures();
            }
            PanelAction::ClearMeasurements => {
                self.measurements.clear_all(scene);
                self.prune_active_measures();
            }
        }
    }

    // ---- state access ---------------------------------------------------

    /// The session options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options and rebuilds the navigation tuning.
    pub fn set_options(&mut self, options: Options) {
        self.navigator = Navigator::from_options(&options);
        self.options = options;
    }

    /// The current world transform.
    #[must_use]
    pub fn world(&self) -> &WorldTransform {
        &self.world
    }

    /// Mutable access to the world transform, for host-driven resets.
    pub fn world_mut(&mut self) -> &mut WorldTransform {
        &mut self.world
    }

    /// The measurement registry.
    #[must_use]
    pub fn measurements(&self) -> &MeasurementRegistry {
        &self.measurements
    }

    /// The slice-plane set.
    #[must_use]
    pub fn slice_planes(&self) -> &SlicePlaneSet {
        &self.slice_planes
    }

    /// The grab manipulator.
    #[must_use]
    pub fn grab(&self) -> &GrabManipulator {
        &self.grab
    }

    /// The controller state table.
    #[must_use]
    pub fn tracker(&self) -> &SpatialInputTracker {
        &self.tracker
    }
}
