//! Starfield configuration
//!
//! The configuration document is loaded once before the simulation starts and is
//! immutable afterwards. Every field is required; a document that fails to parse or
//! validate aborts initialization.

mod validate;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StarfieldError, StarfieldResult};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Plain RGB triple with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Star counts, field extent and base motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarFieldSettings {
    pub count_mobile: usize,
    pub count_desktop: usize,
    /// Side length of the cube stars spawn in
    pub field_size: f32,
    pub speed_min: f32,
    pub speed_range: f32,
    pub velocity_multiplier: f32,
    /// Resting point size
    pub size: f32,
    /// Resting opacity
    pub opacity: f32,
}

/// HSL ranges for base star colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarColorSettings {
    pub hue_min: f32,
    pub hue_range: f32,
    pub saturation: f32,
    pub lightness_min: f32,
    pub lightness_range: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub initial_z: f32,
    pub parallax_factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplosionSettings {
    /// Width of the symmetric range explosion velocity components are drawn from
    pub speed: f32,
    pub velocity_decay: f32,
    pub duration_ms: f64,
    pub size: f32,
    pub scale_decay: f32,
    pub opacity_divisor: f32,
    pub color: RgbColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallingStarSettings {
    /// Chance per normal-star tick of turning into a falling star
    pub probability: f64,
    pub speed: f32,
    pub color: RgbColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallaxSettings {
    pub smoothing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaycastSettings {
    pub throttle_ms: f64,
    /// Maximum distance between the pointer ray and a star for it to count as hit
    pub threshold: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSettings {
    pub pixel_ratio_max_mobile: f32,
    pub pixel_ratio_max_desktop: f32,
    pub mobile_update_interval: usize,
    pub desktop_update_interval: usize,
    pub resize_debounce_ms: f64,
}

/// Full starfield configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarfieldConfig {
    pub star_field: StarFieldSettings,
    pub star_color: StarColorSettings,
    pub camera: CameraSettings,
    pub explosion: ExplosionSettings,
    pub falling_star: FallingStarSettings,
    pub parallax: ParallaxSettings,
    pub raycasting: RaycastSettings,
    pub performance: PerformanceSettings,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_field: StarFieldSettings {
                count_mobile: 1500,
                count_desktop: 6000,
                field_size: 2000.0,
                speed_min: 0.5,
                speed_range: 1.5,
                velocity_multiplier: 60.0,
                size: 2.0,
                opacity: 0.8,
            },
            star_color: StarColorSettings {
                hue_min: 0.55,
                hue_range: 0.15,
                saturation: 0.6,
                lightness_min: 0.6,
                lightness_range: 0.3,
            },
            camera: CameraSettings {
                fov: 75.0,
                near: 1.0,
                far: 1000.0,
                initial_z: 500.0,
                parallax_factor: 0.05,
            },
            explosion: ExplosionSettings {
                speed: 4.0,
                velocity_decay: 0.95,
                duration_ms: 1000.0,
                size: 8.0,
                scale_decay: 0.97,
                opacity_divisor: 8.0,
                color: RgbColor::new(1.0, 0.6, 0.2),
            },
            falling_star: FallingStarSettings {
                probability: 0.0002,
                speed: 8.0,
                color: RgbColor::new(0.8, 0.9, 1.0),
            },
            parallax: ParallaxSettings { smoothing: 0.05 },
            raycasting: RaycastSettings {
                throttle_ms: 50.0,
                threshold: 10.0,
            },
            performance: PerformanceSettings {
                pixel_ratio_max_mobile: 1.5,
                pixel_ratio_max_desktop: 2.0,
                mobile_update_interval: 2,
                desktop_update_interval: 1,
                resize_debounce_ms: 150.0,
            },
        }
    }
}

impl StarfieldConfig {
    /// Load and validate a configuration file, picking the parser from the extension
    pub fn load(path: impl AsRef<Path>) -> StarfieldResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| StarfieldError::UnsupportedConfigFormat(path.to_path_buf()))?;

        let raw = std::fs::read_to_string(path).map_err(|source| StarfieldError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            ConfigFormat::Json => Self::from_json_str(&raw)?,
            ConfigFormat::Toml => Self::from_toml_str(&raw)?,
        };

        log::info!("Loaded starfield config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(raw: &str) -> StarfieldResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> StarfieldResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Spawn plane for reset stars, and the depth past which stars respawn
    pub fn spawn_z(&self) -> f32 {
        -self.camera.far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("config.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("a/b/stars.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("config.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(StarfieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_of_default() {
        let raw = serde_json::to_string(&StarfieldConfig::default()).unwrap();
        assert!(raw.contains("\"starField\""));
        assert!(raw.contains("\"countDesktop\""));

        let parsed = StarfieldConfig::from_json_str(&raw).unwrap();
        assert_eq!(parsed, StarfieldConfig::default());
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let mut value = serde_json::to_value(StarfieldConfig::default()).unwrap();
        value["explosionData"] = serde_json::json!({ "size": 8, "indices": { "vx": 0 } });

        let parsed = StarfieldConfig::from_json_str(&value.to_string()).unwrap();
        assert_eq!(parsed.explosion.duration_ms, 1000.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut value = serde_json::to_value(StarfieldConfig::default()).unwrap();
        value["camera"].as_object_mut().unwrap().remove("far");

        let err = StarfieldConfig::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, StarfieldError::ConfigJson(_)));
    }

    #[test]
    fn test_toml_document() {
        let raw = toml::to_string(&StarfieldConfig::default()).unwrap();
        let parsed = StarfieldConfig::from_toml_str(&raw).unwrap();
        assert_eq!(parsed.performance.resize_debounce_ms, 150.0);
    }
}
