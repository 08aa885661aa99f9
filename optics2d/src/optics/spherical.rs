use super::*;

use nalgebra::Unit;

/// Roots of the ray/circle equation closer to zero than this are the
/// ray's own location, found again.
pub const ROOT_TOLERANCE: Float = 1e-14;

/// An arc of the circle of radius `2 * focal`, whose apex sits at `location`,
/// with the circle's center lying behind it, opposite `normal_angle`.
///
/// The derived fields (radius, center, arc bound) are recomputed by every
/// setter, so they never go stale. A setter that fails leaves the mirror as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct SphericalMirror {
    location: Point,
    normal_angle: Angle,
    chord_length: Float,
    focal: Float,
    radius: Float,
    center: Point,
    max_arc_distance: Float,
}

impl SphericalMirror {
    pub fn new(
        location: impl Into<Point>,
        normal_angle: Angle,
        chord_length: Float,
        focal: Float,
    ) -> Result<Self> {
        let location = check_point(location.into(), "mirror location")?;
        let normal_angle = normalize_angle(check_finite(normal_angle, "mirror angle")?);
        let chord_length = check_chord(chord_length)?;
        let focal = check_focal(focal)?;

        let radius = 2.0 * focal;
        let abs_radius = radius.abs();

        if chord_length > 2.0 * abs_radius {
            return Err(ConfigurationError::ChordTooWide {
                chord: chord_length,
                diameter: 2.0 * abs_radius,
            });
        }

        let center = location - direction_vector(normal_angle) * radius;

        // distance from the apex to either end of the chord
        let half_chord = chord_length / 2.0;
        let sagitta = abs_radius - (abs_radius * abs_radius - half_chord * half_chord).sqrt();
        let max_arc_distance = half_chord.hypot(sagitta);

        Ok(Self {
            location,
            normal_angle,
            chord_length,
            focal,
            radius,
            center,
            max_arc_distance,
        })
    }

    #[inline]
    pub fn location(&self) -> &Point {
        &self.location
    }

    #[inline]
    pub fn normal_angle(&self) -> Angle {
        self.normal_angle
    }

    #[inline]
    pub fn chord_length(&self) -> Float {
        self.chord_length
    }

    #[inline]
    pub fn focal(&self) -> Float {
        self.focal
    }

    /// `2 * focal`, negative for convex mirrors.
    #[inline]
    pub fn radius(&self) -> Float {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// How far from `location` a point of the circle may be and still belong to the mirror.
    #[inline]
    pub fn max_arc_distance(&self) -> Float {
        self.max_arc_distance
    }

    pub fn set_location(&mut self, location: impl Into<Point>) -> Result<()> {
        *self = Self::new(location, self.normal_angle, self.chord_length, self.focal)?;
        Ok(())
    }

    pub fn set_normal_angle(&mut self, normal_angle: Angle) -> Result<()> {
        *self = Self::new(self.location, normal_angle, self.chord_length, self.focal)?;
        Ok(())
    }

    pub fn set_chord_length(&mut self, chord_length: Float) -> Result<()> {
        *self = Self::new(self.location, self.normal_angle, chord_length, self.focal)?;
        Ok(())
    }

    pub fn set_focal(&mut self, focal: Float) -> Result<()> {
        *self = Self::new(self.location, self.normal_angle, self.chord_length, focal)?;
        Ok(())
    }

    /// The nearest point ahead of `from`, along `direction`, where the ray meets the arc.
    ///
    /// Arc membership is approximated by the distance to `location`, bounded
    /// by [`Self::max_arc_distance`]. If both intersections qualify, the nearer
    /// one wins unless it is the ray's own location (within [`ROOT_TOLERANCE`]).
    pub fn intersection(&self, from: &Point, direction: Angle) -> Option<Point> {
        // substituting `P + t * D` for `V` in `||V - C||^2 = r^2`
        // results in a quadratic equation in `t`.
        let dir = direction_vector(direction);
        let v = from - self.center;

        let a = dir.norm_squared();
        let b = 2.0 * v.dot(&dir);
        let c = v.norm_squared() - self.radius * self.radius;

        let delta = b * b - 4.0 * a * c;
        if delta < 0.0 {
            return None;
        }

        let root = delta.sqrt();

        let candidates = [(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)].map(|t| {
            let p = from + dir * t;
            (t > 0.0 && distance(&p, &self.location) <= self.max_arc_distance).then_some((t, p))
        });

        match candidates {
            [Some(first), Some(second)] => {
                let (near, far) = if first.0 <= second.0 {
                    (first, second)
                } else {
                    (second, first)
                };
                Some(if near.0.abs() <= ROOT_TOLERANCE { far } else { near }.1)
            }
            [Some((_, p)), None] | [None, Some((_, p))] => Some(p),
            [None, None] => None,
        }
    }
}

impl Optic for SphericalMirror {
    fn bounce(&self, ray: &RayEmitter) -> Option<Bounce> {
        let direction = ray.current_direction();
        let point = self.intersection(ray.current_location(), direction)?;

        let incoming = direction_vector(direction);

        let mut normal = Unit::new_normalize(point - self.center);
        if normal.dot(&incoming) < 0.0 {
            normal = -normal;
        }

        // the unit normal is subtracted twice as is, not scaled by its
        // projection on the incoming direction
        let outgoing = incoming - normal.into_inner() * 2.0;

        Some(Bounce {
            point,
            angle: to_angle(&outgoing),
        })
    }
}
