use super::*;

use log::{debug, info, trace};

/// Anything an [`OpticSystem`] can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Optic(AnyOptic),
    Ray(RayEmitter),
}

impl From<AnyOptic> for SceneObject {
    fn from(optic: AnyOptic) -> Self {
        Self::Optic(optic)
    }
}

impl From<FlatMirror> for SceneObject {
    fn from(mirror: FlatMirror) -> Self {
        Self::Optic(mirror.into())
    }
}

impl From<SphericalMirror> for SceneObject {
    fn from(mirror: SphericalMirror) -> Self {
        Self::Optic(mirror.into())
    }
}

impl From<Lens> for SceneObject {
    fn from(lens: Lens) -> Self {
        Self::Optic(lens.into())
    }
}

impl From<RayEmitter> for SceneObject {
    fn from(ray: RayEmitter) -> Self {
        Self::Ray(ray)
    }
}

/// A set of optics and the rays traced through them.
///
/// The system owns everything it holds. It is not synchronized: callers
/// sharing one across threads must serialize `add`, `step` and `reset`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpticSystem {
    optics: Vec<AnyOptic>,
    rays: Vec<RayEmitter>,
    config: TraceConfig,
}

impl OpticSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TraceConfig) -> Self {
        Self {
            optics: Vec::new(),
            rays: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    #[inline]
    pub fn optics(&self) -> &[AnyOptic] {
        &self.optics
    }

    /// Mutable access for editors moving optics around between runs.
    #[inline]
    pub fn optics_mut(&mut self) -> &mut [AnyOptic] {
        &mut self.optics
    }

    #[inline]
    pub fn rays(&self) -> &[RayEmitter] {
        &self.rays
    }

    /// Appends an optic or a ray, leaving everything else untouched.
    pub fn add(&mut self, obj: impl Into<SceneObject>) {
        match obj.into() {
            SceneObject::Optic(optic) => self.optics.push(optic),
            SceneObject::Ray(ray) => self.rays.push(ray),
        }
    }

    /// Sends every ray back to its emitter. Optics carry no per-run state.
    pub fn reset(&mut self) {
        self.rays.iter_mut().for_each(RayEmitter::reset);
    }

    /// Advances every ray by at most one bounce.
    ///
    /// A ray with no contact ahead of it escapes: its head is projected
    /// [`TraceConfig::escape_distance`] along its direction. Escaped rays are
    /// still traced by later steps.
    ///
    /// Returns `true` if every ray escaped during this call.
    pub fn step(&mut self) -> bool {
        let Self {
            optics,
            rays,
            config,
        } = self;

        let mut escaped = 0;

        for (i, ray) in rays.iter_mut().enumerate() {
            match nearest_bounce(optics, ray) {
                Some(bounce) => {
                    debug!(
                        "ray {i}: bounce at ({}, {}), leaving at {}",
                        bounce.point.x, bounce.point.y, bounce.angle
                    );
                    ray.bounce_to(bounce);
                }
                None => {
                    debug!("ray {i}: escaped");
                    ray.escape(config.escape_distance);
                    escaped += 1;
                }
            }
        }

        escaped == rays.len()
    }

    /// Steps until every ray escapes, or [`TraceConfig::max_steps`] steps were made.
    ///
    /// Returns the number of steps made.
    pub fn run(&mut self) -> usize {
        let max_steps = self.config.max_steps;

        for steps in 1..=max_steps {
            if self.step() {
                info!("all rays escaped after {steps} steps");
                return steps;
            }
        }

        info!("stopped after {max_steps} steps, some rays are still bouncing");
        max_steps
    }
}

impl FromIterator<SceneObject> for OpticSystem {
    fn from_iter<I: IntoIterator<Item = SceneObject>>(iter: I) -> Self {
        let mut system = Self::new();
        system.extend(iter);
        system
    }
}

impl Extend<SceneObject> for OpticSystem {
    fn extend<I: IntoIterator<Item = SceneObject>>(&mut self, iter: I) {
        iter.into_iter().for_each(|obj| self.add(obj));
    }
}

/// The closest contact lying strictly ahead of `ray`, along its direction.
///
/// Contacts behind the ray, off its axis, or at its current location are discarded.
fn nearest_bounce(optics: &[AnyOptic], ray: &RayEmitter) -> Option<Bounce> {
    let location = ray.current_location();
    let direction = direction_vector(ray.current_direction());

    optics
        .iter()
        .filter_map(|optic| optic.bounce(ray))
        .filter(|bounce| {
            let towards = (bounce.point - location).normalize();

            let ahead = points_close(&direction, &towards);
            let moved = !points_close(location, &bounce.point);

            if !(ahead && moved) {
                trace!(
                    "discarding contact at ({}, {}): ahead: {ahead}, moved: {moved}",
                    bounce.point.x,
                    bounce.point.y
                );
            }

            ahead && moved
        })
        .map(|bounce| (distance(location, &bounce.point), bounce))
        .min_by(|(d1, _), (d2, _)| d1.total_cmp(d2))
        .map(|(_, bounce)| bounce)
}
