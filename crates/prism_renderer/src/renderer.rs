//! Image renderer.
//!
//! Walks the raster top to bottom, one primary ray per pixel, and writes
//! tone-mapped RGBA bytes into an [`ImageBuffer`]. Single threaded: a render
//! runs to completion unless the progress callback asks it to stop.

use std::convert::Infallible;
use std::ops::ControlFlow;
use std::time::Instant;

use prism_core::{ConfigError, RenderConfig, Scene};
use prism_math::Color;
use thiserror::Error;

use crate::camera::Camera;
use crate::shading::trace_ray;
use crate::tonemap::color_to_rgba;

/// Errors that can occur while setting up or running a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Render cancelled after {rows_done} of {total_rows} rows")]
    Cancelled { rows_done: u32, total_rows: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Progress reported between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderProgress {
    pub rows_done: u32,
    pub total_rows: u32,
}

impl RenderProgress {
    /// Completed fraction in percent.
    pub fn percent(&self) -> f64 {
        100.0 * self.rows_done as f64 / self.total_rows as f64
    }
}

/// RGBA8 output raster, row-major with a top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return the raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

/// Owns a scene and renders it at a fixed resolution.
pub struct Renderer {
    scene: Scene,
    config: RenderConfig,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a renderer with the default configuration.
    pub fn new(scene: Scene, width: u32, height: u32) -> RenderResult<Self> {
        Self::with_config(scene, width, height, RenderConfig::default())
    }

    /// Create a renderer with an explicit configuration.
    pub fn with_config(
        scene: Scene,
        width: u32,
        height: u32,
        config: RenderConfig,
    ) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }
        config.validate()?;

        Ok(Self {
            scene,
            config,
            width,
            height,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the scene wholesale, returning the previous one.
    ///
    /// Needs `&mut self`, so it can never overlap a render in progress.
    pub fn set_scene(&mut self, scene: Scene) -> Scene {
        log::debug!(
            "Replacing scene: {} spheres, {} lights",
            scene.sphere_count(),
            scene.light_count()
        );
        std::mem::replace(&mut self.scene, scene)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn camera(&self) -> Camera {
        Camera::new(
            self.scene.camera(),
            self.width,
            self.height,
            self.config.fov_degrees,
        )
    }

    /// Linear (pre tone mapping) color of pixel (x, y).
    pub fn trace_pixel(&self, x: u32, y: u32) -> Color {
        let ray = self.camera().get_ray(x, y);
        trace_ray(&ray, &self.scene, 0, &self.config)
    }

    /// Render the whole image.
    pub fn render(&self) -> ImageBuffer {
        match self.render_rows(|_| ControlFlow::<Infallible>::Continue(())) {
            Ok(image) => image,
            Err((never, _)) => match never {},
        }
    }

    /// Render the whole image, reporting progress every `progress_interval` rows
    /// and once more when the last row is done.
    ///
    /// Returning `ControlFlow::Break` from the callback stops the render before
    /// the next row and yields [`RenderError::Cancelled`]. The final report
    /// comes after every pixel is written, so it cannot cancel.
    pub fn render_with_progress<F>(&self, progress: F) -> RenderResult<ImageBuffer>
    where
        F: FnMut(RenderProgress) -> ControlFlow<()>,
    {
        self.render_rows(progress).map_err(|((), at)| {
            log::warn!("Render cancelled at row {}/{}", at.rows_done, at.total_rows);
            RenderError::Cancelled {
                rows_done: at.rows_done,
                total_rows: at.total_rows,
            }
        })
    }

    fn render_rows<B, F>(&self, mut progress: F) -> Result<ImageBuffer, (B, RenderProgress)>
    where
        F: FnMut(RenderProgress) -> ControlFlow<B>,
    {
        let start = Instant::now();
        let camera = self.camera();
        let mut image = ImageBuffer::new(self.width, self.height);

        log::info!(
            "Rendering {}x{} ({} spheres, {} lights, max depth {})",
            self.width,
            self.height,
            self.scene.sphere_count(),
            self.scene.light_count(),
            self.scene.max_depth()
        );

        let interval = self.config.progress_interval;

        for y in 0..self.height {
            if interval > 0 && y % interval == 0 {
                let report = RenderProgress {
                    rows_done: y,
                    total_rows: self.height,
                };
                if let ControlFlow::Break(reason) = progress(report) {
                    return Err((reason, report));
                }
            }

            for x in 0..self.width {
                let ray = camera.get_ray(x, y);
                let color = trace_ray(&ray, &self.scene, 0, &self.config);
                image.set(x, y, color_to_rgba(color));
            }
        }

        if interval > 0 {
            let _ = progress(RenderProgress {
                rows_done: self.height,
                total_rows: self.height,
            });
        }

        log::info!("Rendered in {:?}", start.elapsed());

        Ok(image)
    }
}
