//! Scene model for the ray tracer.
//!
//! A scene is an ordered list of spheres, an ordered list of point lights,
//! a camera origin and a recursion limit. Order matters: the nearest-hit
//! query breaks ties in favour of the sphere added first.

use std::sync::Arc;

use prism_math::{Color, Interval, Vec3};
use thiserror::Error;

/// Default camera origin.
pub const DEFAULT_CAMERA: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Default maximum reflection depth.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid light: {0}")]
    InvalidLight(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Phong surface description.
///
/// Shared between spheres through `Arc<Material>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Base color (RGB, 0-1)
    pub color: Color,

    /// Ambient coefficient (0-1)
    pub ambient: f64,

    /// Lambertian diffuse coefficient (0-1)
    pub diffuse: f64,

    /// Phong specular coefficient (0-1)
    pub specular: f64,

    /// Phong exponent (> 0)
    pub shininess: f64,

    /// Mirror reflection weight (0-1)
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflectivity: 0.5,
        }
    }
}

impl Material {
    /// Create a material with explicit coefficients.
    pub fn new(
        color: Color,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        shininess: f64,
        reflectivity: f64,
    ) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity,
        }
    }

    /// Create a material with the default coefficients and the given color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Check every coefficient against its documented range.
    pub fn validate(&self) -> SceneResult<()> {
        for (channel, value) in [("r", self.color.x), ("g", self.color.y), ("b", self.color.z)] {
            if !Interval::UNIT.contains(value) {
                return Err(SceneError::InvalidMaterial(format!(
                    "color.{channel} = {value} is outside [0, 1]"
                )));
            }
        }

        let coefficients = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("reflectivity", self.reflectivity),
        ];
        for (name, value) in coefficients {
            if !Interval::UNIT.contains(value) {
                return Err(SceneError::InvalidMaterial(format!(
                    "{name} = {value} is outside [0, 1]"
                )));
            }
        }

        if !(self.shininess > 0.0 && self.shininess.is_finite()) {
            return Err(SceneError::InvalidMaterial(format!(
                "shininess = {} must be positive",
                self.shininess
            )));
        }

        Ok(())
    }
}

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f64, material: Arc<Material>) -> SceneResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidGeometry(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(SceneError::InvalidGeometry(format!(
                "sphere center must be finite, got {center}"
            )));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// A point light.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Light color (RGB, 0-1)
    pub color: Color,
    /// Scalar intensity (>= 0)
    pub intensity: f64,
}

impl Light {
    /// Create a new point light. Intensity must be non-negative and finite.
    pub fn new(position: Vec3, color: Color, intensity: f64) -> SceneResult<Self> {
        if !(intensity >= 0.0 && intensity.is_finite()) {
            return Err(SceneError::InvalidLight(format!(
                "intensity must be non-negative, got {intensity}"
            )));
        }
        if !position.is_finite() {
            return Err(SceneError::InvalidLight(format!(
                "position must be finite, got {position}"
            )));
        }

        Ok(Self {
            position,
            color,
            intensity,
        })
    }
}

/// A complete scene: spheres, lights, camera origin and recursion limit.
///
/// Scenes are built up front and then handed to the renderer, which owns
/// them for the duration of a render. Regenerating a scene means building
/// a new one and swapping it in between renders.
#[derive(Clone, Debug)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    camera: Vec3,
    max_depth: u32,
    strict_materials: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            camera: DEFAULT_CAMERA,
            max_depth: DEFAULT_MAX_DEPTH,
            strict_materials: false,
        }
    }
}

impl Scene {
    /// Create an empty scene with the default camera and depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene that rejects out-of-range materials.
    pub fn strict() -> Self {
        Self {
            strict_materials: true,
            ..Default::default()
        }
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f64,
        material: Arc<Material>,
    ) -> SceneResult<usize> {
        if self.strict_materials {
            material.validate()?;
        }
        let sphere = Sphere::new(center, radius, material)?;
        let id = self.spheres.len();
        self.spheres.push(sphere);
        Ok(id)
    }

    /// Add a point light and return its index.
    pub fn add_light(&mut self, position: Vec3, color: Color, intensity: f64) -> SceneResult<usize> {
        let light = Light::new(position, color, intensity)?;
        let id = self.lights.len();
        self.lights.push(light);
        Ok(id)
    }

    /// Set the camera origin.
    pub fn set_camera(&mut self, origin: Vec3) {
        self.camera = origin;
    }

    /// Set the maximum reflection depth.
    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
