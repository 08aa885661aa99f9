//! Two-dimensional tracing of light rays through reflective optics.
//!
//! Rays advance by at most one bounce per call to [`OpticSystem::step`].
//! Each optic reports where a ray would next touch it, and the system keeps
//! the nearest contact lying strictly ahead of the ray.

mod config;
mod emitter;
mod error;
mod geometry;
mod optics;
mod system;

pub use config::*;
pub use emitter::*;
pub use error::*;
pub use geometry::*;
pub use optics::*;
pub use system::*;

pub use nalgebra;

use nalgebra::Vector2;

pub type Float = f64;

/// A point, or a direction vector, in the plane.
pub type Point = Vector2<Float>;

/// An angle in radians. Normalized angles lie in `(-π, π]`.
pub type Angle = Float;
