//! Prism Renderer - CPU Whitted ray tracing.
//!
//! Spheres and point lights, Phong shading with hard shadows and recursive
//! mirror reflection, ACES tone mapping and gamma encoding to RGBA8.
//!
//! # Example
//!
//! ```
//! use prism_core::default_scene;
//! use prism_renderer::Renderer;
//!
//! let renderer = Renderer::new(default_scene()?, 32, 24)?;
//! let image = renderer.render();
//! assert_eq!(image.as_bytes().len(), 32 * 24 * 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod camera;
mod hittable;
mod renderer;
mod shading;
mod tonemap;

pub use camera::Camera;
pub use hittable::{intersect, HitRecord, Hittable};
pub use renderer::{ImageBuffer, RenderError, RenderProgress, RenderResult, Renderer};
pub use shading::{shade, trace_ray};
pub use tonemap::{aces, color_to_rgba, encode_channel, to_srgb, GAMMA};

/// Re-export the scene and math types the renderer works with
pub use prism_core::{Light, Material, RenderConfig, Scene, Sphere};
pub use prism_math::{Color, Interval, Ray, Vec3};
