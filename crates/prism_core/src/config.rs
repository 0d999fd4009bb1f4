//! Render settings.

use prism_math::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Background ("sky") color returned for misses and exhausted depth.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.05, 0.05, 0.1);

/// Errors raised by [`RenderConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid render config: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
///
/// Everything here was a hardcoded constant in earlier versions; none of it
/// changes the structure of the algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color returned when a ray hits nothing or the depth cap is reached
    pub background: Color,
    /// Minimum accepted hit distance, also the offset applied to secondary ray origins
    pub surface_epsilon: f64,
    /// Added to the squared light distance in the falloff term
    pub attenuation_epsilon: f64,
    /// Vertical field of view in degrees
    pub fov_degrees: f64,
    /// Report progress every this many rows (0 disables reporting)
    pub progress_interval: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            surface_epsilon: 0.001,
            attenuation_epsilon: 1e-3,
            fov_degrees: 45.0,
            progress_interval: 20,
        }
    }
}

impl RenderConfig {
    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f64) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    /// Set the progress reporting interval in rows.
    pub fn with_progress_interval(mut self, rows: u32) -> Self {
        self.progress_interval = rows;
        self
    }

    /// Check every setting against its usable range.
    ///
    /// A non-positive surface epsilon lets a point shadow itself, and the
    /// camera scale `tan(fov / 2)` is only meaningful for fov in (0, 180).
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.background.is_finite() {
            return Err(ConfigError::InvalidValue(format!(
                "background must be finite, got {}",
                self.background
            )));
        }
        if !(self.surface_epsilon > 0.0 && self.surface_epsilon.is_finite()) {
            return Err(ConfigError::InvalidValue(format!(
                "surface_epsilon = {} must be positive",
                self.surface_epsilon
            )));
        }
        if !(self.attenuation_epsilon >= 0.0 && self.attenuation_epsilon.is_finite()) {
            return Err(ConfigError::InvalidValue(format!(
                "attenuation_epsilon = {} must be non-negative",
                self.attenuation_epsilon
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::InvalidValue(format!(
                "fov_degrees = {} is outside (0, 180)",
                self.fov_degrees
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.background, Color::new(0.05, 0.05, 0.1));
        assert_eq!(config.surface_epsilon, 0.001);
        assert_eq!(config.fov_degrees, 45.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "background": [0.0, 0.0, 0.0], "fov_degrees": 60.0 }"#)
                .unwrap();

        assert_eq!(config.background, Color::ZERO);
        assert_eq!(config.fov_degrees, 60.0);
        assert_eq!(config.surface_epsilon, 0.001);
        assert_eq!(config.progress_interval, 20);
    }

    #[test]
    fn test_validate() {
        assert!(RenderConfig::default().validate().is_ok());
        assert!(RenderConfig::default().with_fov(120.0).validate().is_ok());

        for fov in [0.0, -10.0, 180.0, 270.0, f64::NAN] {
            let err = RenderConfig::default().with_fov(fov).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(_)), "fov {fov}");
        }

        for eps in [0.0, -0.5, f64::INFINITY] {
            let config = RenderConfig {
                surface_epsilon: eps,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "surface_epsilon {eps}");
        }

        let config = RenderConfig {
            attenuation_epsilon: -1e-3,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_background(Color::new(f64::NAN, 0.0, 0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_with_bad_epsilon_fails_validation() {
        let config: RenderConfig = serde_json::from_str(r#"{ "surface_epsilon": -0.5 }"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = RenderConfig::default()
            .with_background(Color::new(0.1, 0.2, 0.3))
            .with_progress_interval(0);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
