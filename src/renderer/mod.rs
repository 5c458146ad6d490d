//! Render backend seam
//!
//! The graphics library that actually draws the stars lives outside this crate. It is
//! reached only through [`RenderBackend`]: it receives settings once, buffer uploads and
//! a camera every frame, resize notifications, and answers point-cloud hit-tests.

pub mod headless;
pub mod star_vertex;

pub use headless::HeadlessBackend;
pub use star_vertex::{prepare_render_data, StarVertex};

use crate::camera::CameraData;
use crate::constants::render::{CLEAR_COLOR, FOG_DENSITY, POINT_SIZE_SCALE};
use crate::environment::{DeviceSignals, Environment};
use crate::particles::{BufferChanges, StarData};
use crate::picking::{intersect_point_cloud, PointHit, Ray};

/// Renderer settings fixed at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub pixel_ratio: f32,
    pub antialias: bool,
    pub clear_color: [f32; 3],
    pub fog_density: f32,
    pub point_size_scale: f32,
}

impl RenderSettings {
    /// Derive settings from the environment, capping the device pixel ratio
    pub fn from_environment(env: &Environment, signals: &DeviceSignals) -> Self {
        Self {
            pixel_ratio: signals.device_pixel_ratio.min(env.pixel_ratio_cap),
            antialias: env.antialias,
            clear_color: CLEAR_COLOR,
            fog_density: FOG_DENSITY,
            point_size_scale: POINT_SIZE_SCALE,
        }
    }
}

/// External renderer
pub trait RenderBackend {
    /// Called once before the first frame
    fn configure(&mut self, settings: &RenderSettings);

    /// Debounced viewport change
    fn resize(&mut self, width: u32, height: u32);

    /// Re-upload the buffers flagged in `changes`
    fn upload(&mut self, stars: &StarData, changes: BufferChanges);

    /// Draw one frame
    fn render(&mut self, camera: &CameraData);

    /// Stars intersected by `ray`, nearest first
    fn intersect_points(
        &self,
        ray: &Ray,
        positions: &[f32],
        threshold: f32,
        near: f32,
        far: f32,
    ) -> Vec<PointHit> {
        intersect_point_cloud(ray, positions, threshold, near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarfieldConfig;
    use crate::environment::detect_environment;

    #[test]
    fn test_pixel_ratio_is_capped() {
        let config = StarfieldConfig::default();
        let signals = DeviceSignals {
            device_pixel_ratio: 3.0,
            ..DeviceSignals::default()
        };
        let env = detect_environment(&config, &signals);
        let settings = RenderSettings::from_environment(&env, &signals);
        assert_eq!(settings.pixel_ratio, config.performance.pixel_ratio_max_desktop);
        assert!(settings.antialias);

        let signals = DeviceSignals {
            device_pixel_ratio: 1.0,
            ..DeviceSignals::default()
        }
        .with_user_agent("Android");
        let env = detect_environment(&config, &signals);
        let settings = RenderSettings::from_environment(&env, &signals);
        assert_eq!(settings.pixel_ratio, 1.0);
        assert!(!settings.antialias);
    }
}
