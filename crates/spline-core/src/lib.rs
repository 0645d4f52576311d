//! Core types for Bezier spline interchange.
//!
//! This crate provides the host-side model shared by the other crates:
//! - Curve, spline and control point types
//! - Tilt angle conversion between radians and degrees
//! - Up-axis conventions
//! - A minimal scene with the [`SceneHost`] seam

pub mod angle;
pub mod axis;
pub mod curve;
pub mod scene;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use axis::Axis;
pub use curve::{BezierPoint, BezierSpline, Curve, Dimensions, SplineKind, TwistMode};
pub use glam::DVec3;
pub use scene::{CurveObject, Scene, SceneHost};
