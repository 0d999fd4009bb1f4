use crate::Vec3;

/// Normalize a vector, returning the zero vector for zero-length input.
///
/// glam's `normalize` produces NaNs for a zero vector; every direction in the
/// tracer goes through this instead so nothing downstream divides by zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Reflect `v` about the unit normal `n`: `v - 2(v·n)n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
