//! Pinhole camera for primary ray generation.

use prism_math::{Ray, Vec3};

/// Camera looking down the negative Z axis from a fixed origin.
///
/// One ray per pixel through the pixel center; there is no jitter.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    image_width: u32,
    image_height: u32,
    aspect_ratio: f64,
    /// tan(fov / 2)
    scale: f64,
}

impl Camera {
    /// Create a camera for a `width x height` image with the given vertical field of view.
    pub fn new(origin: Vec3, width: u32, height: u32, fov_degrees: f64) -> Self {
        Self {
            origin,
            image_width: width,
            image_height: height,
            aspect_ratio: width as f64 / height as f64,
            scale: (fov_degrees.to_radians() * 0.5).tan(),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// (0, 0) is the top-left pixel.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let (px, py) = self.screen_coords(x, y);
        Ray::new(self.origin, Vec3::new(px, py, -1.0))
    }

    /// Map a pixel center into aspect- and fov-scaled screen space.
    fn screen_coords(&self, x: u32, y: u32) -> (f64, f64) {
        let ndc_x = 2.0 * (x as f64 + 0.5) / self.image_width as f64 - 1.0;
        let ndc_y = 1.0 - 2.0 * (y as f64 + 0.5) / self.image_height as f64;
        (
            ndc_x * self.aspect_ratio * self.scale,
            ndc_y * self.scale,
        )
    }
}
