//! Hittable trait and HitRecord for ray-object intersection.

use prism_core::{Material, Scene, Sphere};
use prism_math::{normalize, Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Find the nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center() - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius() * self.radius();

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the near root; fall back to the far one when the origin is inside
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: normalize(point - self.center()),
            material: self.material(),
        })
    }
}

/// Nearest-hit query over every sphere in scan order.
///
/// Strict `<` keeps the earlier sphere when two hits share the same `t`.
impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for sphere in self.spheres() {
            if let Some(rec) = sphere.hit(ray, ray_t) {
                if closest.map_or(true, |best| rec.t < best.t) {
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

/// Intersect a single sphere, accepting only roots beyond `epsilon`.
pub fn intersect<'a>(sphere: &'a Sphere, ray: &Ray, epsilon: f64) -> Option<HitRecord<'a>> {
    sphere.hit(ray, Interval::beyond(epsilon))
}
