//! Discrete grab/release manipulation.
//!
//! Binds a controller to a picked object for the duration of a grab. The
//! manipulator never moves objects itself; it records the anchors captured
//! at grab time and the owning component derives its own position from
//! them each frame. Grab bookkeeping lives in a side table keyed by object
//! identity, not on the scene objects.

use std::collections::HashMap;

use vrscope_core::{RayHit, Vec3};

use crate::controller::NUM_CONTROLLERS;

/// Anchors captured when a grab starts.
#[derive(Debug, Clone, Copy)]
pub struct GrabAnchors {
    /// The controller slot holding the object.
    pub controller: usize,
    /// Controller world position at grab time.
    pub controller_initial: Vec3,
    /// Object local position at grab time.
    pub object_initial: Vec3,
}

/// Grab state machine for both controllers.
///
/// Invariants: a controller holds at most one object, and an object is
/// held by at most one controller.
#[derive(Debug, Default)]
pub struct GrabManipulator {
    held: [Option<u64>; NUM_CONTROLLERS],
    anchors: HashMap<u64, GrabAnchors>,
}

impl GrabManipulator {
    /// Creates an idle manipulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to grab the nearest hit object.
    ///
    /// `object_position` resolves an object id to its current local
    /// position; ids it cannot resolve are skipped, as are objects already
    /// held by the other controller. With no usable hit the controller
    /// stays idle and `None` is returned — not an error.
    pub fn try_grab(
        &mut self,
        slot: usize,
        controller_position: Vec3,
        hits: &[RayHit],
        object_position: impl Fn(u64) -> Option<Vec3>,
    ) -> Option<u64> {
        if slot >= NUM_CONTROLLERS {
            return None;
        }
        // A grab while already holding re-anchors on the new target.
        self.release(slot);

        for hit in hits {
            if self.anchors.contains_key(&hit.id) {
                continue;
            }
            let Some(object_initial) = object_position(hit.id) else {
                continue;
            };
            self.held[slot] = Some(hit.id);
            self.anchors.insert(
                hit.id,
                GrabAnchors {
                    controller: slot,
                    controller_initial: controller_position,
                    object_initial,
                },
            );
            log::debug!("controller {slot} grabbed object {}", hit.id);
            return Some(hit.id);
        }
        None
    }

    /// Releases whatever the controller holds.
    ///
    /// A release without a prior grab is a no-op, not an error.
    pub fn release(&mut self, slot: usize) -> Option<u64> {
        let id = self.held.get_mut(slot)?.take()?;
        self.anchors.remove(&id);
        log::debug!("controller {slot} released object {id}");
        Some(id)
    }

    /// Unconditional release used on controller disconnect, clearing the
    /// object's selection state no matter how the grab ended.
    pub fn force_release(&mut self, slot: usize) {
        self.release(slot);
    }

    /// Drops any grab on `object`, e.g. when the object is removed.
    pub fn forget_object(&mut self, object: u64) {
        if let Some(anchors) = self.anchors.remove(&object) {
            self.held[anchors.controller] = None;
        }
    }

    /// The object a controller currently holds.
    #[must_use]
    pub fn held(&self, slot: usize) -> Option<u64> {
        self.held.get(slot).copied().flatten()
    }

    /// Whether an object is currently held (drives its highlight).
    #[must_use]
    pub fn is_selected(&self, object: u64) -> bool {
        self.anchors.contains_key(&object)
    }

    /// The grab anchors for an object, while held.
    #[must_use]
    pub fn anchors(&self, object: u64) -> Option<&GrabAnchors> {
        self.anchors.get(&object)
    }
}
