//! Scene capability boundary for vrscope.
//!
//! The interaction pipeline never talks to a renderer directly; it drives
//! an implementation of [`SceneEngine`] supplied by the host. This crate
//! defines that trait, the node handle types, and [`HeadlessScene`], an
//! in-memory backend for tests and windowless hosts.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod engine;
pub mod headless;
pub mod node;

pub use engine::SceneEngine;
pub use headless::{HeadlessScene, SceneNode};
pub use node::{NodeId, NodeKind};
