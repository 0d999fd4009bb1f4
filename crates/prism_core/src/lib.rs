//! Prism Core - scene model and render settings.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`
//! - **Presets**: the default four-sphere scene and a seeded random scene
//! - **Settings**: `RenderConfig` (background, epsilons, field of view)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use prism_core::{Material, Scene};
//! use prism_math::{Color, Vec3};
//!
//! let mut scene = Scene::new();
//! let white = Arc::new(Material::with_color(Color::ONE));
//! scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 1.0, white)?;
//! scene.add_light(Vec3::new(2.0, 2.0, 2.0), Color::ONE, 1.0)?;
//! assert_eq!(scene.sphere_count(), 1);
//! # Ok::<(), prism_core::SceneError>(())
//! ```

pub mod config;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, RenderConfig, DEFAULT_BACKGROUND};
pub use presets::{default_scene, random_scene};
pub use scene::{
    Light, Material, Scene, SceneError, SceneResult, Sphere, DEFAULT_CAMERA, DEFAULT_MAX_DEPTH,
};
