//! Prism command line renderer.
//!
//! Builds the default or a seeded random scene, renders it and writes a PNG.

use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use prism_core::{default_scene, random_scene, RenderConfig, Scene};
use prism_renderer::{ImageBuffer, Renderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Which scene preset to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenePreset {
    /// Three spheres over a mirrored floor
    Default,
    /// Five random spheres over a floor
    Random,
}

/// Render a sphere scene with a Whitted-style ray tracer.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
struct Cli {
    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = 640)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 480)]
    height: u32,

    /// Maximum reflection depth
    #[arg(short = 'd', long, default_value_t = prism_core::DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Scene preset
    #[arg(short, long, value_enum, default_value_t = ScenePreset::Default)]
    scene: ScenePreset,

    /// Seed for the random scene (defaults to a fresh seed)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with render settings (background, epsilons, fov)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;

    log::info!("Loaded render config from {}", path.display());
    Ok(config)
}

fn build_scene(preset: ScenePreset, seed: Option<u64>) -> Result<Scene> {
    let scene = match preset {
        ScenePreset::Default => default_scene()?,
        ScenePreset::Random => {
            let seed = seed.unwrap_or_else(rand::random);
            log::info!("Random scene seed: {}", seed);
            random_scene(&mut StdRng::seed_from_u64(seed))?
        }
    };
    Ok(scene)
}

fn save_png(image: ImageBuffer, path: &Path) -> Result<()> {
    let (width, height) = (image.width, image.height);
    let rgba = image::RgbaImage::from_raw(width, height, image.into_bytes())
        .ok_or_else(|| anyhow!("Pixel buffer does not match {}x{}", width, height))?;

    rgba.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    log::info!("Starting Prism");

    let config = load_config(cli.config.as_deref())?;

    let start = Instant::now();
    let mut scene = build_scene(cli.scene, cli.seed)?;
    scene.set_max_depth(cli.max_depth);
    log::info!(
        "Scene built in {:?}: {} spheres, {} lights",
        start.elapsed(),
        scene.sphere_count(),
        scene.light_count()
    );

    let renderer = Renderer::with_config(scene, cli.width, cli.height, config)?;

    let image = renderer.render_with_progress(|progress| {
        log::info!("Render progress: {:.1}%", progress.percent());
        ControlFlow::Continue(())
    })?;

    save_png(image, &cli.output)?;
    log::info!("Saved to {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["prism"]);
        assert_eq!(cli.width, 640);
        assert_eq!(cli.height, 480);
        assert_eq!(cli.max_depth, 5);
        assert_eq!(cli.scene, ScenePreset::Default);
        assert_eq!(cli.output, PathBuf::from("render.png"));
    }

    #[test]
    fn test_cli_random_scene() {
        let cli = Cli::parse_from(["prism", "--scene", "random", "--seed", "7", "-W", "32"]);
        assert_eq!(cli.scene, ScenePreset::Random);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.width, 32);

        let a = build_scene(cli.scene, cli.seed).unwrap();
        let b = build_scene(cli.scene, cli.seed).unwrap();
        assert_eq!(a.sphere_count(), 6);
        assert_eq!(a.spheres()[0].center(), b.spheres()[0].center());
    }

    #[test]
    fn test_missing_config_is_default() {
        assert_eq!(load_config(None).unwrap(), RenderConfig::default());
        assert!(load_config(Some(Path::new("/nonexistent/prism.json"))).is_err());
    }
}
