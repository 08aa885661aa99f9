use super::*;

use core::f64::consts::FRAC_PI_2;
use nalgebra::Matrix2;

/// A straight mirror segment of length `chord_length`, centered at `location`,
/// running along `normal_angle`.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatMirror {
    location: Point,
    normal_angle: Angle,
    chord_length: Float,
}

impl FlatMirror {
    pub fn new(
        location: impl Into<Point>,
        normal_angle: Angle,
        chord_length: Float,
    ) -> Result<Self> {
        Ok(Self {
            location: check_point(location.into(), "mirror location")?,
            normal_angle: normalize_angle(check_finite(normal_angle, "mirror angle")?),
            chord_length: check_chord(chord_length)?,
        })
    }

    /// A mirror whose reflective face points toward `facing_angle`,
    /// which is how scene descriptors orient flat mirrors.
    pub fn facing(
        location: impl Into<Point>,
        facing_angle: Angle,
        chord_length: Float,
    ) -> Result<Self> {
        Self::new(location, facing_angle - FRAC_PI_2, chord_length)
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

    pub fn set_location(&mut self, location: impl Into<Point>) -> Result<()> {
        self.location = check_point(location.into(), "mirror location")?;
        Ok(())
    }

    pub fn set_normal_angle(&mut self, normal_angle: Angle) -> Result<()> {
        self.normal_angle = normalize_angle(check_finite(normal_angle, "mirror angle")?);
        Ok(())
    }

    pub fn set_chord_length(&mut self, chord_length: Float) -> Result<()> {
        self.chord_length = check_chord(chord_length)?;
        Ok(())
    }

    /// Both ends of the segment.
    pub fn endpoints(&self) -> [Point; 2] {
        let half = direction_vector(self.normal_angle) * (self.chord_length / 2.0);
        [self.location + half, self.location - half]
    }

    /// Intersects the mirror's line with the line through `from` along
    /// `direction`, both in slope-intercept form, keeping the result only if it
    /// lies on the finite segment.
    ///
    /// Returns `None` for parallel (or coincident) lines.
    pub fn intersection(&self, from: &Point, direction: Angle) -> Option<Point> {
        let self_a = self.normal_angle.tan();
        let ray_a = direction.tan();

        let self_b = self.location.y - self_a * self.location.x;
        let ray_b = from.y - ray_a * from.x;

        let d = Matrix2::new(self_a, 1.0, ray_a, 1.0).determinant();
        if d == 0.0 {
            return None;
        }

        let dx = -Matrix2::new(self_b, 1.0, ray_b, 1.0).determinant();
        let dy = Matrix2::new(self_a, self_b, ray_a, ray_b).determinant();

        let point = Point::new(dx / d, dy / d);

        (distance(&point, &self.location) <= self.chord_length / 2.0).then_some(point)
    }
}

impl Optic for FlatMirror {
    fn bounce(&self, ray: &RayEmitter) -> Option<Bounce> {
        let direction = ray.current_direction();

        self.intersection(ray.current_location(), direction)
            .map(|point| Bounce {
                point,
                angle: normalize_angle(2.0 * self.normal_angle - direction),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    fn vertical_mirror() -> FlatMirror {
        FlatMirror::new([0.0, 5.0], FRAC_PI_2, 10.0).unwrap()
    }

    #[test]
    fn head_on_contact() {
        let ray = RayEmitter::new([-5.0, 5.0], 0.0).unwrap();
        let bounce = vertical_mirror().bounce(&ray).unwrap();

        assert!(points_close(&bounce.point, &Point::new(0.0, 5.0)));
        assert_eq!(bounce.angle, PI);
    }

    #[test]
    fn law_of_reflection() {
        let mirror = FlatMirror::new([1.0, 1.0], 0.3, 4.0).unwrap();

        for alpha in [0.9, 1.4, 2.0, -2.0, -1.1] {
            // aim at the mirror's center from two units away
            let from = mirror.location() - direction_vector(alpha) * 2.0;
            let ray = RayEmitter::new(from, alpha).unwrap();

            let bounce = mirror.bounce(&ray).unwrap();

            assert!((bounce.point - mirror.location()).norm() < 1e-9);
            assert_eq!(bounce.angle, normalize_angle(2.0 * 0.3 - alpha));
        }
    }

    #[test]
    fn parallel_ray_misses() {
        let mirror = FlatMirror::new([0.0, 5.0], 0.0, 10.0).unwrap();
        let ray = RayEmitter::new([0.0, 0.0], 0.0).unwrap();
        assert_eq!(mirror.bounce(&ray), None);

        let coincident = RayEmitter::new([-3.0, 5.0], 0.0).unwrap();
        assert_eq!(mirror.bounce(&coincident), None);
    }

    #[test]
    fn chord_bound() {
        let mirror = FlatMirror::new([0.0, 5.0], FRAC_PI_2, 2.0).unwrap();

        let inside = RayEmitter::new([-5.0, 5.9], 0.0).unwrap();
        assert!(mirror.bounce(&inside).is_some());

        let outside = RayEmitter::new([-5.0, 6.1], 0.0).unwrap();
        assert_eq!(mirror.bounce(&outside), None);
    }

    #[test]
    fn facing_is_perpendicular() {
        let mirror = FlatMirror::facing([0.0, 0.0], PI, 2.0).unwrap();
        assert_eq!(mirror.normal_angle(), FRAC_PI_2);

        let [a, b] = mirror.endpoints();
        assert!(points_close(&a, &Point::new(0.0, 1.0)));
        assert!(points_close(&b, &Point::new(0.0, -1.0)));
    }

    #[test]
    fn setters_validate() {
        let mut mirror = vertical_mirror();

        assert_eq!(
            mirror.set_chord_length(-1.0),
            Err(ConfigurationError::ChordLength(-1.0))
        );
        assert_eq!(mirror.chord_length(), 10.0);

        mirror.set_chord_length(3.0).unwrap();
        mirror.set_location([2.0, 2.0]).unwrap();
        mirror.set_normal_angle(2.0 * PI).unwrap();

        assert_eq!(mirror.chord_length(), 3.0);
        assert_eq!(mirror.location(), &Point::new(2.0, 2.0));
        assert!(mirror.normal_angle().abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_chord() {
        assert_eq!(
            FlatMirror::new([0.0, 0.0], 0.0, 0.0),
            Err(ConfigurationError::ChordLength(0.0))
        );
    }
}
