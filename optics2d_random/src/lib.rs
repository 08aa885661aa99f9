use optics2d::*;

use core::{
    f64::consts::{PI, TAU},
    iter,
};
pub use rand;

/// Half the side of the square random objects are placed in.
pub const SCENE_EXTENT: Float = 7.0;

pub trait Random: Sized {
    /// Generate a randomized version of this object using the provided `rng`
    ///
    /// This method must not fail. If creating an object is faillible, keep trying until success
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self;
}

impl Random for RayEmitter {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        loop {
            if let Ok(ray) = Self::new(rand_point(rng, SCENE_EXTENT), rand_angle(rng)) {
                break ray;
            }
        }
    }
}

impl Random for FlatMirror {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        loop {
            let chord_length = rng.gen_range(0.5..4.0);
            let mirror = Self::new(
                rand_point(rng, SCENE_EXTENT),
                rand_angle(rng),
                chord_length,
            );

            if let Ok(mirror) = mirror {
                break mirror;
            }
        }
    }
}

impl Random for SphericalMirror {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        loop {
            let chord_length = rng.gen_range(0.5..4.0);
            let focal = rng.gen_range(-4.0..4.0);

            // narrow or flat circles are rejected by the constructor, try again
            if let Ok(mirror) = Self::new(
                rand_point(rng, SCENE_EXTENT),
                rand_angle(rng),
                chord_length,
                focal,
            ) {
                break mirror;
            }
        }
    }
}

impl Random for AnyOptic {
    /// A flat or a spherical mirror. Lenses have no effect on rays so none are generated.
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        if rng.gen_bool(0.5) {
            FlatMirror::random(rng).into()
        } else {
            SphericalMirror::random(rng).into()
        }
    }
}

/// `num_optics` random optics followed by `num_rays` random rays.
pub fn random_scene(
    rng: &mut (impl rand::Rng + ?Sized),
    num_optics: usize,
    num_rays: usize,
) -> Vec<SceneObject> {
    let optics: Vec<_> = iter::repeat_with(|| SceneObject::from(AnyOptic::random(rng)))
        .take(num_optics)
        .collect();

    optics
        .into_iter()
        .chain(iter::repeat_with(|| SceneObject::from(RayEmitter::random(rng))).take(num_rays))
        .collect()
}

pub fn rand_point(rng: &mut (impl rand::Rng + ?Sized), max_coord_mag: Float) -> Point {
    // the rng generates floats in 0.0..1.0, scale and translate the range accordingly
    Point::from_fn(|_, _| (rng.gen::<Float>() - 0.5) * (max_coord_mag.abs() * 2.0))
}

pub fn rand_angle(rng: &mut (impl rand::Rng + ?Sized)) -> Angle {
    normalize_angle(rng.gen::<Float>() * TAU - PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn scene_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let scene = random_scene(&mut rng, 12, 4);

        assert_eq!(scene.len(), 16);
        assert!(scene[..12]
            .iter()
            .all(|obj| matches!(obj, SceneObject::Optic(_))));
        assert!(scene[12..]
            .iter()
            .all(|obj| matches!(obj, SceneObject::Ray(_))));
    }

    #[test]
    fn objects_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let ray = RayEmitter::random(&mut rng);
            assert!(ray.origin().iter().all(|c| c.abs() <= SCENE_EXTENT));

            let angle = ray.initial_angle();
            assert!(angle > -PI && angle <= PI);

            let mirror = SphericalMirror::random(&mut rng);
            assert!(mirror.chord_length() <= 2.0 * mirror.radius().abs());
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = random_scene(&mut StdRng::seed_from_u64(3), 5, 2);
        let b = random_scene(&mut StdRng::seed_from_u64(3), 5, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn random_scenes_trace() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut system: OpticSystem = random_scene(&mut rng, 10, 3).into_iter().collect();

        let steps = system.run();
        assert!(steps >= 1 && steps <= system.config().max_steps);
        assert!(system.rays().iter().all(|ray| !ray.trail().is_empty()));
    }
}
