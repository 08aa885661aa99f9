use super::*;

mod flat;
mod lens;
mod spherical;

pub use flat::*;
pub use lens::*;
pub use spherical::*;

/// Where a ray next touches an optic, and the direction it leaves in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    pub point: Point,
    pub angle: Angle,
}

/// The capability every optical element provides.
///
/// Implementations hold no per-ray state: the same ray always gets the same answer.
pub trait Optic {
    /// The next contact of `ray` (from its current location, along its current
    /// direction) with this optic, or `None` if there is none.
    ///
    /// Contacts behind the ray, or at its current location, may still be reported,
    /// [`OpticSystem::step`] discards these.
    fn bounce(&self, ray: &RayEmitter) -> Option<Bounce>;
}

impl<T: Optic + ?Sized> Optic for &T {
    #[inline]
    fn bounce(&self, ray: &RayEmitter) -> Option<Bounce> {
        (**self).bounce(ray)
    }
}

impl<T: Optic + ?Sized> Optic for Box<T> {
    #[inline]
    fn bounce(&self, ray: &RayEmitter) -> Option<Bounce> {
        self.as_ref().bounce(ray)
    }
}

/// The closed set of optics an [`OpticSystem`] holds.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyOptic {
    Flat(FlatMirror),
    Spherical(SphericalMirror),
    Lens(Lens),
}

impl AnyOptic {
    #[inline]
    pub fn location(&self) -> &Point {
        match self {
            Self::Flat(m) => m.location(),
            Self::Spherical(m) => m.location(),
            Self::Lens(l) => l.location(),
        }
    }
}

impl Optic for AnyOptic {
    #[inline]
    fn bounce(&self, ray: &RayEmitter) -> Option<Bounce> {
        match self {
            Self::Flat(m) => m.bounce(ray),
            Self::Spherical(m) => m.bounce(ray),
            Self::Lens(l) => l.bounce(ray),
        }
    }
}

impl From<FlatMirror> for AnyOptic {
    fn from(mirror: FlatMirror) -> Self {
        Self::Flat(mirror)
    }
}

impl From<SphericalMirror> for AnyOptic {
    fn from(mirror: SphericalMirror) -> Self {
        Self::Spherical(mirror)
    }
}

impl From<Lens> for AnyOptic {
    fn from(lens: Lens) -> Self {
        Self::Lens(lens)
    }
}
