//! Prism math types.
//!
//! Double precision vectors from glam, plus the few helpers the ray tracer
//! needs on top of them: zero-safe normalization, mirror reflection, the
//! `Ray` type and scalar `Interval`s.

// Re-export glam for convenience
pub use glam;

/// 3-component vector used for points, directions and normals.
pub type Vec3 = glam::DVec3;

/// Linear RGB color. Channels are nominally in [0, 1] but shading may exceed 1.
pub type Color = Vec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::{Ray, RayError, RayResult};
pub use vector::{normalize, reflect};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        // Component-wise multiply
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_operations_do_not_alias() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = a * 3.0;
        assert_eq!(a, Vec3::ONE);
        assert_eq!(b, Vec3::splat(3.0));
    }
}
