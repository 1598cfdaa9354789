//! Integration tests for the interaction session.
//!
//! Each test drives a session end to end on a [`HeadlessScene`]: host
//! events in, scene artifacts and world state out.

use vrscope::*;

const DT: f32 = 1.0 / 72.0;

/// Orientation that points a controller straight down (-Y).
fn pointing_down() -> Quat {
    Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)
}

/// Orientation that points a controller along -X.
fn pointing_neg_x() -> Quat {
    Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)
}

/// A session in VR with the world at the origin and both controllers
/// connected (slot 0 = right, slot 1 = left).
fn vr_session() -> InteractionSession {
    let mut session = InteractionSession::with_defaults();
    session
        .on_connect(0, Handedness::Right, GamepadSnapshot::with_stick(0.0, 0.0))
        .unwrap();
    session
        .on_connect(1, Handedness::Left, GamepadSnapshot::with_stick(0.0, 0.0))
        .unwrap();
    session.enter_vr();
    session.world_mut().reset_to(Vec3::ZERO);
    session
}

#[test]
fn test_vr_entry_resets_world() {
    let mut session = InteractionSession::with_defaults();
    session.world_mut().translate(Vec3::splat(9.0));

    session.enter_vr();
    assert!(session.is_in_vr());
    assert_eq!(session.world().translation, Vec3::new(0.0, 1.0, -1.0));
    assert_eq!(session.world().scale, Vec3::ONE);

    session.exit_vr();
    assert!(!session.is_in_vr());
    assert_eq!(session.world().translation, Vec3::ZERO);
}

#[test]
fn test_right_stick_pans_world() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.set_gamepad(0, GamepadSnapshot::with_stick(1.0, 0.0));
    session.update(&mut scene, 1.0);

    // Identity grip: stick x maps straight onto world x at 0.5 u/s.
    assert!((session.world().translation - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_left_stick_zooms_with_clamp() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.set_gamepad(1, GamepadSnapshot::with_stick(0.0, -1.0));
    for _ in 0..2000 {
        session.update(&mut scene, 0.1);
    }

    // Zooming in forever still saturates at the clamp.
    assert_eq!(session.world().scale, Vec3::splat(10.0));
}

#[test]
fn test_measurement_lifecycle_via_events() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.set_pose(0, Pose::at(Vec3::ZERO));
    session.on_squeeze_start(&mut scene, 0);
    assert_eq!(session.measurements().len(), 1);

    // Inside the deadzone nothing is measuring yet.
    session.set_pose(0, Pose::at(Vec3::new(0.0, 0.0, 0.05)));
    session.update(&mut scene, DT);
    let m = session.measurements().iter().next().unwrap();
    assert!(!m.is_measuring());

    // Drag out: measuring with the expected readout.
    session.set_pose(0, Pose::at(Vec3::new(0.0, 0.0, 0.2)));
    session.update(&mut scene, DT);
    let m = session.measurements().iter().next().unwrap();
    assert!(m.is_measuring());
    assert!((m.distance() - 0.2).abs() < 1e-6);

    // Release freezes even though the hand keeps moving.
    session.on_squeeze_end(0);
    session.set_pose(0, Pose::at(Vec3::new(0.0, 0.0, 3.0)));
    session.update(&mut scene, DT);
    let m = session.measurements().iter().next().unwrap();
    assert!((m.distance() - 0.2).abs() < 1e-6);
    assert!(!m.is_active());
}

#[test]
fn test_left_buttons_pop_and_clear_with_edges() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    for i in 0..3 {
        session.set_pose(0, Pose::at(Vec3::new(i as f32, 0.0, 0.0)));
        session.on_squeeze_start(&mut scene, 0);
        session.on_squeeze_end(0);
    }
    assert_eq!(session.measurements().len(), 3);

    // Y (undo) held across several frames pops exactly once.
    let mut undo = GamepadSnapshot::with_stick(0.0, 0.0);
    undo.buttons[BUTTON_YB] = true;
    session.set_gamepad(1, undo.clone());
    session.update(&mut scene, DT);
    assert_eq!(session.measurements().len(), 2);
    session.set_gamepad(1, undo.clone());
    session.update(&mut scene, DT);
    assert_eq!(session.measurements().len(), 2);

    // Release and press again: another pop.
    session.set_gamepad(1, GamepadSnapshot::with_stick(0.0, 0.0));
    session.update(&mut scene, DT);
    session.set_gamepad(1, undo);
    session.update(&mut scene, DT);
    assert_eq!(session.measurements().len(), 1);

    // X clears the rest.
    let mut clear = GamepadSnapshot::with_stick(0.0, 0.0);
    clear.buttons[BUTTON_XA] = true;
    session.set_gamepad(1, clear);
    session.update(&mut scene, DT);
    assert!(session.measurements().is_empty());
    assert_eq!(scene.live_node_count(), 0);
}

#[test]
fn test_grab_moves_slice_plane() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.apply_panel_action(&mut scene, SlicePlanePanel::new().add_action());
    let id = session.slice_planes().iter().next().unwrap().id();

    // Point straight down at the horizontal plane widget and grab.
    session.set_pose(0, Pose::new(Vec3::new(0.0, 1.0, 0.0), pointing_down()));
    session.on_select_start(0);
    assert_eq!(session.grab().held(0), Some(id));

    // Lift the hand 0.3: the plane follows along its +Y direction.
    session.set_pose(0, Pose::new(Vec3::new(0.0, 1.3, 0.0), pointing_down()));
    session.update(&mut scene, DT);
    let instance = session.slice_planes().get(id).unwrap();
    assert!((instance.plane().rel_pos() - 0.3).abs() < 1e-5);
    assert!(scene.node(instance.helper()).unwrap().highlighted);

    // Release: the plane stays put and the highlight drops.
    session.on_select_end(0);
    session.set_pose(0, Pose::new(Vec3::new(0.0, 2.0, 0.0), pointing_down()));
    session.update(&mut scene, DT);
    let instance = session.slice_planes().get(id).unwrap();
    assert!((instance.plane().rel_pos() - 0.3).abs() < 1e-5);
    assert!(!scene.node(instance.helper()).unwrap().highlighted);
}

#[test]
fn test_select_with_no_widget_under_ray_is_idle() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.apply_panel_action(&mut scene, SlicePlanePanel::new().add_action());

    // Pointing up, away from the widget at the origin.
    session.set_pose(
        0,
        Pose::new(
            Vec3::new(0.0, 1.0, 0.0),
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        ),
    );
    session.on_select_start(0);
    assert!(session.grab().held(0).is_none());

    // Releasing without a grab is a no-op.
    session.on_select_end(0);
}

#[test]
fn test_two_controllers_grab_independently() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    let mut panel = SlicePlanePanel::new();
    session.apply_panel_action(&mut scene, panel.add_action());
    panel.set_normal_x(1.0);
    panel.set_normal_y(0.0);
    session.apply_panel_action(&mut scene, panel.add_action());

    let ids: Vec<u64> = session.slice_planes().iter().map(|p| p.id()).collect();
    let (plane_y, plane_x) = (ids[0], ids[1]);

    session.set_pose(0, Pose::new(Vec3::new(0.0, 1.0, 0.0), pointing_down()));
    session.on_select_start(0);
    session.set_pose(1, Pose::new(Vec3::new(1.0, 0.0, 0.0), pointing_neg_x()));
    session.on_select_start(1);
    assert_eq!(session.grab().held(0), Some(plane_y));
    assert_eq!(session.grab().held(1), Some(plane_x));

    // Each plane's offset depends only on its own controller's motion.
    session.set_pose(0, Pose::new(Vec3::new(0.0, 1.4, 0.0), pointing_down()));
    session.set_pose(1, Pose::new(Vec3::new(0.75, 5.0, -5.0), pointing_neg_x()));
    session.update(&mut scene, DT);

    let rel_y = session.slice_planes().get(plane_y).unwrap().plane().rel_pos();
    let rel_x = session.slice_planes().get(plane_x).unwrap().plane().rel_pos();
    assert!((rel_y - 0.4).abs() < 1e-5);
    assert!((rel_x - (-0.25)).abs() < 1e-5);
}

#[test]
fn test_disconnect_mid_grab_clears_selection() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.apply_panel_action(&mut scene, SlicePlanePanel::new().add_action());
    let id = session.slice_planes().iter().next().unwrap().id();

    session.set_pose(0, Pose::new(Vec3::new(0.0, 1.0, 0.0), pointing_down()));
    session.on_select_start(0);
    assert!(session.grab().is_selected(id));

    session.on_disconnect(0);
    assert!(!session.grab().is_selected(id));

    // The widget's highlight clears on the next frame.
    session.update(&mut scene, DT);
    let helper = session.slice_planes().get(id).unwrap().helper();
    assert!(!scene.node(helper).unwrap().highlighted);
}

#[test]
fn test_disconnect_mid_measure_freezes_session() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    session.set_pose(0, Pose::at(Vec3::ZERO));
    session.on_squeeze_start(&mut scene, 0);
    session.set_pose(0, Pose::at(Vec3::new(0.0, 0.0, 0.5)));
    session.update(&mut scene, DT);

    session.on_disconnect(0);
    let m = session.measurements().iter().next().unwrap();
    assert!(!m.is_active());
    assert!((m.distance() - 0.5).abs() < 1e-6);
}

#[test]
fn test_zero_normal_from_panel_is_rejected() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    let mut panel = SlicePlanePanel::new();
    panel.set_normal_y(0.0);
    session.apply_panel_action(&mut scene, panel.add_action());

    assert!(session.slice_planes().is_empty());
    // Only the (lazily created) helper group may exist; no widget nodes.
    assert!(scene.live_node_count() <= 1);
}

#[test]
fn test_events_on_unconnected_slots_are_silent() {
    let mut scene = HeadlessScene::new();
    let mut session = InteractionSession::with_defaults();

    session.on_select_start(0);
    session.on_select_end(0);
    session.on_squeeze_start(&mut scene, 0);
    session.on_squeeze_end(0);
    session.on_disconnect(0);
    session.update(&mut scene, DT);

    assert!(session.measurements().is_empty());
    assert!(session.grab().held(0).is_none());
}

#[test]
fn test_pan_uses_grip_orientation() {
    let mut scene = HeadlessScene::new();
    let mut session = vr_session();

    // Grip twisted 90 degrees about Y: stick x now pushes along -Z.
    session.set_pose(
        0,
        Pose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
    );
    session.set_gamepad(0, GamepadSnapshot::with_stick(1.0, 0.0));
    session.update(&mut scene, 1.0);

    let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2) * Vec3::X * 0.5;
    assert!((session.world().translation - expected).length() < 1e-5);
}
