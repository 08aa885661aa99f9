use super::*;

/// A light source and the state of the ray it emits during one run.
///
/// `origin` and `initial_angle` never change. The current location and
/// direction are only written by [`OpticSystem::step`], and the trail only
/// ever holds confirmed past points, never the in-flight head of the ray.
#[derive(Clone, Debug, PartialEq)]
pub struct RayEmitter {
    origin: Point,
    initial_angle: Angle,
    current_location: Point,
    current_direction: Angle,
    trail: Vec<Point>,
    escaped: bool,
}

impl RayEmitter {
    /// A ray leaving `origin` at `angle` (radians, normalized on construction).
    pub fn new(origin: impl Into<Point>, angle: Angle) -> Result<Self> {
        let origin = check_point(origin.into(), "ray origin")?;
        let initial_angle = normalize_angle(check_finite(angle, "ray angle")?);

        Ok(Self {
            origin,
            initial_angle,
            current_location: origin,
            current_direction: initial_angle,
            trail: Vec::new(),
            escaped: false,
        })
    }

    #[inline]
    pub fn origin(&self) -> &Point {
        &self.origin
    }

    #[inline]
    pub fn initial_angle(&self) -> Angle {
        self.initial_angle
    }

    #[inline]
    pub fn current_location(&self) -> &Point {
        &self.current_location
    }

    #[inline]
    pub fn current_direction(&self) -> Angle {
        self.current_direction
    }

    /// Confirmed past points of this run, oldest first.
    #[inline]
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    /// Whether the last step found nothing for this ray to bounce off.
    #[inline]
    pub fn has_escaped(&self) -> bool {
        self.escaped
    }

    /// The polyline a renderer draws: the trail, then the ray's head.
    pub fn path(&self) -> impl Iterator<Item = &Point> + '_ {
        self.trail.iter().chain(core::iter::once(&self.current_location))
    }

    /// Back to the origin and initial angle, with an empty trail.
    pub fn reset(&mut self) {
        self.current_location = self.origin;
        self.current_direction = self.initial_angle;
        self.trail.clear();
        self.escaped = false;
    }

    /// Moves the head to `bounce`, confirming the previous head in the trail.
    pub(crate) fn bounce_to(&mut self, bounce: Bounce) {
        if self.current_location != bounce.point || self.current_direction != bounce.angle {
            self.trail.push(self.current_location);
            self.current_location = bounce.point;
            self.current_direction = bounce.angle;
            self.escaped = false;
        }
    }

    /// Projects the head `distance` further along the current direction.
    ///
    /// Only the first escape of a run confirms the head in the trail.
    pub(crate) fn escape(&mut self, distance: Float) {
        if !self.escaped {
            self.trail.push(self.current_location);
            self.escaped = true;
        }
        self.current_location += direction_vector(self.current_direction) * distance;
    }
}
