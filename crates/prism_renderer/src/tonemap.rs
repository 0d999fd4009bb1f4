//! Tone mapping and display encoding.
//!
//! Linear shading output is unbounded. Each channel goes through the ACES
//! filmic curve, is clamped to [0, 1], gamma encoded and quantized to 8 bits.

use prism_math::{Color, Interval};

/// Display gamma.
pub const GAMMA: f64 = 2.2;

/// ACES filmic approximation (Narkowicz fit).
#[inline]
pub fn aces(x: f64) -> f64 {
    const A: f64 = 2.51;
    const B: f64 = 0.03;
    const C: f64 = 2.43;
    const D: f64 = 0.59;
    const E: f64 = 0.14;
    (x * (A * x + B)) / (x * (C * x + D) + E)
}

/// Clamp to [0, 1] and apply gamma encoding.
#[inline]
pub fn to_srgb(x: f64) -> f64 {
    Interval::UNIT.clamp(x).powf(1.0 / GAMMA)
}

/// Map one linear channel to its display byte.
#[inline]
pub fn encode_channel(linear: f64) -> u8 {
    // Negative light is treated as black before the curve
    let mapped = to_srgb(aces(linear.max(0.0)));
    (mapped * 255.0).round() as u8
}

/// Convert a linear color to 8-bit RGBA with opaque alpha.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    [
        encode_channel(color.x),
        encode_channel(color.y),
        encode_channel(color.z),
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aces_zero() {
        assert_eq!(aces(0.0), 0.0);
    }

    #[test]
    fn test_aces_monotonic() {
        let mut previous = aces(0.0);
        for i in 1..=10_000 {
            let x = i as f64 * 0.01;
            let y = aces(x);
            assert!(y >= previous, "aces({x}) = {y} < {previous}");
            previous = y;
        }
        // Approaches A / C for large inputs
        assert!((aces(1e9) - 2.51 / 2.43).abs() < 1e-6);
    }

    #[test]
    fn test_to_srgb_endpoints() {
        assert_eq!(to_srgb(0.0), 0.0);
        assert_eq!(to_srgb(1.0), 1.0);
        assert_eq!(to_srgb(-3.0), 0.0);
        assert_eq!(to_srgb(4.0), 1.0);
        assert!((to_srgb(0.5) - 0.5_f64.powf(1.0 / 2.2)).abs() < 1e-12);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::splat(-1.0)), [0, 0, 0, 255]);
        // Very bright input saturates
        assert_eq!(color_to_rgba(Color::splat(1e6)), [255, 255, 255, 255]);

        let expected = (to_srgb(aces(0.5)) * 255.0).round() as u8;
        assert_eq!(color_to_rgba(Color::new(0.5, 0.0, 0.5)), [expected, 0, expected, 255]);
    }
}
