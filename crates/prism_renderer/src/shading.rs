//! Recursive Whitted shading.
//!
//! Local Phong illumination with hard shadows from point lights, plus
//! mirror reflection blended by the material's reflectivity. The reflection
//! chain is capped by the scene's `max_depth` and walked in a loop, so stack
//! use does not grow with the depth limit.

use prism_core::{Light, RenderConfig, Scene};
use prism_math::{normalize, reflect, Color, Interval, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable};

/// Compute the linear color seen along `ray` at recursion `depth`.
///
/// Returns the background color once `depth` reaches the scene's limit or
/// when the ray hits nothing. Each reflective hit contributes
/// `local * (1 - r)` and passes weight `r` on to the reflected ray, which
/// unrolls `color * (1 - r) + reflected * r` without recursing.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    let mut ray = *ray;
    let mut depth = depth;
    let mut weight = 1.0;
    let mut color = Color::ZERO;

    loop {
        if depth >= scene.max_depth() {
            return color + config.background * weight;
        }

        let Some(rec) = scene.hit(&ray, Interval::beyond(config.surface_epsilon)) else {
            return color + config.background * weight;
        };

        let local = local_color(&rec, &ray, scene, config);
        if rec.material.reflectivity > 0.0 {
            let r = Interval::UNIT.clamp(rec.material.reflectivity);
            color += local * (weight * (1.0 - r));
            weight *= r;
            ray = reflected_ray(&rec, &ray, config);
            depth += 1;
        } else {
            return color + local * weight;
        }
    }
}

/// Shade a hit point: ambient, then diffuse and specular per unshadowed light,
/// then the reflection blend.
pub fn shade(
    rec: &HitRecord<'_>,
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let material = rec.material;
    let color = local_color(rec, ray, scene, config);

    if material.reflectivity > 0.0 && depth < scene.max_depth() {
        let reflected = reflected_ray(rec, ray, config);
        let reflected_color = trace_ray(&reflected, scene, depth + 1, config);
        let r = Interval::UNIT.clamp(material.reflectivity);
        return color * (1.0 - r) + reflected_color * r;
    }

    color
}

/// Ambient plus the direct contribution of every light.
fn local_color(rec: &HitRecord<'_>, ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    let material = rec.material;
    let view_dir = -ray.direction();

    let mut color = material.color * material.ambient;
    for light in scene.lights() {
        color += direct_light(rec, view_dir, light, scene, config);
    }
    color
}

/// Mirror ray leaving a hit point.
#[inline]
fn reflected_ray(rec: &HitRecord<'_>, ray: &Ray, config: &RenderConfig) -> Ray {
    Ray::new(
        offset_origin(rec, config),
        reflect(ray.direction(), rec.normal),
    )
}

/// Diffuse and specular contribution of one light, or zero if it is occluded.
fn direct_light(
    rec: &HitRecord<'_>,
    view_dir: Vec3,
    light: &Light,
    scene: &Scene,
    config: &RenderConfig,
) -> Color {
    let to_light = light.position - rec.point;
    let light_distance = to_light.length();
    let light_dir = normalize(to_light);

    let shadow_ray = Ray::new(offset_origin(rec, config), light_dir);
    if is_occluded(&shadow_ray, light_distance, scene, config) {
        return Color::ZERO;
    }

    let material = rec.material;

    let lambert = rec.normal.dot(light_dir).max(0.0);
    let diffuse = material.color * (material.diffuse * lambert) * light.color;

    let reflect_dir = reflect(-light_dir, rec.normal);
    let phong = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess);
    let specular = light.color * (material.specular * phong);

    let attenuation = 1.0 / (light_distance * light_distance + config.attenuation_epsilon);

    (diffuse + specular) * (light.intensity * attenuation)
}

/// True if anything lies strictly closer than `light_distance` along `shadow_ray`.
fn is_occluded(shadow_ray: &Ray, light_distance: f64, scene: &Scene, config: &RenderConfig) -> bool {
    scene
        .hit(shadow_ray, Interval::beyond(config.surface_epsilon))
        .is_some_and(|hit| hit.t < light_distance)
}

/// Secondary ray origin, nudged off the surface along the normal.
#[inline]
fn offset_origin(rec: &HitRecord<'_>, config: &RenderConfig) -> Vec3 {
    rec.point + rec.normal * config.surface_epsilon
}
