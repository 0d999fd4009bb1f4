use thiserror::Error;

use crate::{normalize, Vec3};

/// Errors raised when building a ray from caller-supplied vectors.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RayError {
    #[error("Degenerate ray direction: {0}")]
    DegenerateRay(Vec3),
}

pub type RayResult<T> = Result<T, RayError>;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized on construction, so `at(t)` measures
/// distance along the ray in world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// A zero direction stays zero. Use [`Ray::try_new`] to reject it instead.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: normalize(direction),
        }
    }

    /// Create a new ray, failing if `direction` has zero length or is not finite.
    pub fn try_new(origin: Vec3, direction: Vec3) -> RayResult<Self> {
        let len_sq = direction.length_squared();
        if len_sq == 0.0 || !len_sq.is_finite() {
            return Err(RayError::DegenerateRay(direction));
        }
        Ok(Self::new(origin, direction))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation_normalizes() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, Vec3::new(0.0, 4.0, 0.0));

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, Vec3::Y);
    }

    #[test]
    fn test_ray_zero_direction() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);

        assert_eq!(
            Ray::try_new(Vec3::ONE, Vec3::ZERO),
            Err(RayError::DegenerateRay(Vec3::ZERO))
        );
        assert!(Ray::try_new(Vec3::ONE, Vec3::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(Ray::try_new(Vec3::ONE, Vec3::new(0.0, 0.0, -3.0)).is_ok());
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_getters() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z);

        // Should be same as direct field access
        assert_eq!(ray.origin(), ray.origin);
        assert_eq!(ray.direction(), ray.direction);
    }
}
