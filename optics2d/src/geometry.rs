use super::*;

use core::f64::consts::{PI, TAU};

/// Relative tolerance used by [`points_close`]
pub const REL_TOLERANCE: Float = 1e-9;

/// Absolute tolerance used by [`points_close`]
pub const ABS_TOLERANCE: Float = 1e-12;

/// Euclidean distance between `a` and `b`
#[inline]
#[must_use]
pub fn distance(a: &Point, b: &Point) -> Float {
    (a - b).norm()
}

/// The unit vector pointing at `angle`
#[inline]
#[must_use]
pub fn direction_vector(angle: Angle) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(cos, sin)
}

/// The normalized angle a (non-zero) vector points at.
///
/// Vertical vectors map to `±π/2` and horizontal ones to `0` or `π`.
#[inline]
#[must_use]
pub fn to_angle(v: &Point) -> Angle {
    normalize_angle(v.y.atan2(v.x))
}

/// Brings `angle` into `(-π, π]` by whole turns.
///
/// Non-finite angles are returned as is.
#[must_use]
pub fn normalize_angle(mut angle: Angle) -> Angle {
    if !angle.is_finite() {
        return angle;
    }

    while angle > PI {
        angle -= TAU;
    }

    while angle <= -PI {
        angle += TAU;
    }

    angle
}

#[inline]
fn is_close(a: Float, b: Float) -> bool {
    a == b || (a - b).abs() <= (REL_TOLERANCE * a.abs().max(b.abs())).max(ABS_TOLERANCE)
}

/// Whether both coordinates of `p` and `q` agree within
/// [`REL_TOLERANCE`] (relative) or [`ABS_TOLERANCE`] (absolute).
#[inline]
#[must_use]
pub fn points_close(p: &Point, q: &Point) -> bool {
    is_close(p.x, q.x) && is_close(p.y, q.y)
}
