use super::*;

/// A thin lens. Refraction is not modelled: a lens never deflects a ray.
#[derive(Clone, Debug, PartialEq)]
pub struct Lens {
    location: Point,
    rotation: Angle,
    scale: Float,
    focal1: Float,
    focal2: Float,
}

impl Lens {
    pub fn new(location: impl Into<Point>, rotation: Angle, scale: Float) -> Result<Self> {
        Ok(Self {
            location: check_point(location.into(), "lens location")?,
            rotation: normalize_angle(check_finite(rotation, "lens rotation")?),
            scale: check_chord(scale)?,
            focal1: 1.0,
            focal2: 1.0,
        })
    }

    pub fn with_focals(mut self, focal1: Float, focal2: Float) -> Result<Self> {
        self.focal1 = check_focal(focal1)?;
        self.focal2 = check_focal(focal2)?;
        Ok(self)
    }

    #[inline]
    pub fn location(&self) -> &Point {
        &self.location
    }

    #[inline]
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> Float {
        self.scale
    }

    #[inline]
    pub fn focals(&self) -> [Float; 2] {
        [self.focal1, self.focal2]
    }
}

impl Optic for Lens {
    fn bounce(&self, _ray: &RayEmitter) -> Option<Bounce> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_deflects() {
        let lens = Lens::new([1.0, 0.0], 0.0, 2.0).unwrap();
        let ray = RayEmitter::new([0.0, 0.0], 0.0).unwrap();
        assert_eq!(lens.bounce(&ray), None);
    }

    #[test]
    fn focals() {
        let lens = Lens::new([0.0, 0.0], 0.0, 1.0).unwrap();
        assert_eq!(lens.focals(), [1.0, 1.0]);

        let lens = lens.with_focals(2.0, -3.0).unwrap();
        assert_eq!(lens.focals(), [2.0, -3.0]);

        assert!(Lens::new([0.0, 0.0], 0.0, 1.0)
            .unwrap()
            .with_focals(0.0, 1.0)
            .is_err());
    }
}
