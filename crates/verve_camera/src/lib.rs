//! # VERVE Camera
//!
//! Smooth-follow 2D camera with zoom clamping, optional world bounds, and a
//! decaying shake offset. One instance per rendering surface; call
//! [`Camera::update`] once per frame and everything else is reads.

pub mod camera;

pub use camera::{Camera, Shake};
