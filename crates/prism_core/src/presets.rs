//! Ready-made scenes.
//!
//! These only populate a [`Scene`]; nothing in the renderer depends on them.

use std::sync::Arc;

use prism_math::{Color, Vec3};
use rand::Rng;

use crate::scene::{Material, Scene, SceneResult};

/// Ground sphere: a large sphere just below the origin acting as a floor.
fn add_ground(scene: &mut Scene, reflectivity: f64) -> SceneResult<usize> {
    scene.add_sphere(
        Vec3::new(0.0, -100.5, 0.0),
        100.0,
        Arc::new(Material::new(Color::new(0.8, 0.8, 0.8), 0.1, 0.5, 0.9, 100.0, reflectivity)),
    )
}

fn add_default_lights(scene: &mut Scene) -> SceneResult<()> {
    scene.add_light(Vec3::new(2.0, 2.0, 2.0), Color::ONE, 1.0)?;
    scene.add_light(Vec3::new(-2.0, 1.0, 1.0), Color::new(0.8, 0.9, 1.0), 0.6)?;
    Ok(())
}

/// The deterministic default scene: three spheres over a mirrored floor, two lights.
pub fn default_scene() -> SceneResult<Scene> {
    let mut scene = Scene::new();

    // Pink
    scene.add_sphere(
        Vec3::new(-1.0, 0.0, 0.0),
        0.5,
        Arc::new(Material::new(Color::new(1.0, 0.7, 0.8), 0.1, 0.9, 0.9, 100.0, 0.3)),
    )?;

    // Blue
    scene.add_sphere(
        Vec3::new(1.0, 0.0, 0.0),
        0.5,
        Arc::new(Material::new(Color::new(0.3, 0.7, 1.0), 0.1, 0.9, 0.9, 100.0, 0.8)),
    )?;

    // Gold
    scene.add_sphere(
        Vec3::new(0.0, -1.0, -1.0),
        0.3,
        Arc::new(Material::new(Color::new(1.0, 0.8, 0.2), 0.2, 0.8, 1.0, 300.0, 0.9)),
    )?;

    add_ground(&mut scene, 0.7)?;
    add_default_lights(&mut scene)?;

    log::debug!(
        "Built default scene: {} spheres, {} lights",
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Five randomly placed and colored spheres over a floor, lit by the default lights.
///
/// The same `rng` state always produces the same scene.
pub fn random_scene(rng: &mut impl Rng) -> SceneResult<Scene> {
    let mut scene = Scene::new();

    for _ in 0..5 {
        let center = Vec3::new(
            (rng.gen::<f64>() - 0.5) * 4.0,
            (rng.gen::<f64>() - 0.5) * 2.0,
            (rng.gen::<f64>() - 0.5) * 2.0 - 1.0,
        );
        let radius = 0.2 + rng.gen::<f64>() * 0.3;

        let color = Color::new(rng.gen(), rng.gen(), rng.gen());
        let reflectivity = rng.gen::<f64>() * 0.9;

        scene.add_sphere(
            center,
            radius,
            Arc::new(Material::new(color, 0.1, 0.9, 0.9, 100.0, reflectivity)),
        )?;
    }

    add_ground(&mut scene, 0.5)?;
    add_default_lights(&mut scene)?;

    log::debug!("Built random scene: {} spheres", scene.sphere_count());

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_scene() {
        let scene = default_scene().unwrap();
        assert_eq!(scene.sphere_count(), 4);
        assert_eq!(scene.light_count(), 2);
        assert_eq!(scene.camera(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(scene.max_depth(), 5);

        let gold = &scene.spheres()[2];
        assert_eq!(gold.center(), Vec3::new(0.0, -1.0, -1.0));
        assert_eq!(gold.material().shininess, 300.0);

        for sphere in scene.spheres() {
            assert!(sphere.material().validate().is_ok());
        }
    }

    #[test]
    fn test_random_scene_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let scene = random_scene(&mut rng).unwrap();

        assert_eq!(scene.sphere_count(), 6);
        assert_eq!(scene.light_count(), 2);

        for sphere in &scene.spheres()[..5] {
            let c = sphere.center();
            assert!((-2.0..2.0).contains(&c.x));
            assert!((-1.0..1.0).contains(&c.y));
            assert!((-2.0..0.0).contains(&c.z));
            assert!((0.2..0.5).contains(&sphere.radius()));
            assert!(sphere.material().reflectivity < 0.9);
            assert!(sphere.material().validate().is_ok());
        }

        let ground = &scene.spheres()[5];
        assert_eq!(ground.radius(), 100.0);
        assert_eq!(ground.material().reflectivity, 0.5);
    }

    #[test]
    fn test_random_scene_is_reproducible() {
        let a = random_scene(&mut StdRng::seed_from_u64(9)).unwrap();
        let b = random_scene(&mut StdRng::seed_from_u64(9)).unwrap();
        let c = random_scene(&mut StdRng::seed_from_u64(10)).unwrap();

        let centers = |s: &Scene| s.spheres().iter().map(|s| s.center()).collect::<Vec<_>>();
        assert_eq!(centers(&a), centers(&b));
        assert_ne!(centers(&a), centers(&c));
    }
}
