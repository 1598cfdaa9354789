//! vrscope: interactive VR scene-viewer core.
//!
//! vrscope turns raw spatial-controller state into scene manipulation:
//! panning, zooming and rotating a world transform with the thumbsticks,
//! grabbing slice planes by pointing at them, and measuring distances in
//! 3D space. Rendering and windowing stay with the host — the session
//! drives any [`SceneEngine`] implementation the host supplies.
//!
//! # Quick Start
//!
//! ```
//! use vrscope::*;
//!
//! fn main() {
//!     init();
//!
//!     let mut session = InteractionSession::with_defaults();
//!     let mut scene = HeadlessScene::new();
//!
//!     // Host input layer reports a controller.
//!     session
//!         .on_connect(0, Handedness::Right, GamepadSnapshot::with_stick(0.0, 0.0))
//!         .unwrap();
//!     session.enter_vr();
//!
//!     // Add a horizontal slice plane through the panel.
//!     let panel = SlicePlanePanel::new();
//!     session.apply_panel_action(&mut scene, panel.add_action());
//!
//!     // Once per rendered frame:
//!     session.set_pose(0, Pose::at(Vec3::new(0.0, 1.2, -0.5)));
//!     session.update(&mut scene, 1.0 / 72.0);
//! }
//! ```
//!
//! # Architecture
//!
//! One [`InteractionSession`] owns all interaction state:
//!
//! - a controller state table with button edge detection
//! - the world transform driven by thumbstick navigation
//! - a grab manipulator binding controllers to slice-plane widgets
//! - an ordered registry of measurement sessions
//!
//! The host feeds controller events (`on_connect`, `on_select_start`,
//! `on_squeeze_start`, ...) and per-frame poses, then calls
//! [`InteractionSession::update`] from its render loop.

mod measure;
mod panel;
mod session;
mod slice;

// Re-export core types
pub use vrscope_core::{
    format_distance, format_point, format_table, ClipPlane, ClipPlaneUniforms, Options, PickQuad,
    Pose, Ray, RayHit, Result, SlicePlane, VrscopeError, WorldTransform, MAX_CLIP_PLANES,
};

// Re-export the scene capability
pub use vrscope_scene::{HeadlessScene, NodeId, NodeKind, SceneEngine};

// Re-export input types
pub use vrscope_input::{
    GamepadSnapshot, GrabAnchors, GrabManipulator, Handedness, Navigator, RayPicker,
    SpatialInputTracker, StickGesture, BUTTON_SQUEEZE, BUTTON_TRIGGER, BUTTON_XA, BUTTON_YB,
    NUM_CONTROLLERS,
};

pub use measure::{MeasurePhase, MeasurementRegistry, MeasurementSession};
pub use panel::{PanelAction, SlicePlanePanel};
pub use session::InteractionSession;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Initializes logging for hosts that don't configure their own.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("vrscope initialized");
}
