use crate::constants::stars::MAX_STARS;
use crate::error::{invalid_config, StarfieldResult};

use super::{RgbColor, StarfieldConfig};

fn finite(field: &'static str, value: f64) -> StarfieldResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_config(field, format!("must be finite, got {}", value)))
    }
}

fn positive(field: &'static str, value: f64) -> StarfieldResult<()> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(invalid_config(field, format!("must be > 0, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f64) -> StarfieldResult<()> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(invalid_config(field, format!("must be >= 0, got {}", value)))
    }
}

fn unit_interval(field: &'static str, value: f64) -> StarfieldResult<()> {
    if (0.0..=1.0).contains(&finite(field, value)?) {
        Ok(())
    } else {
        Err(invalid_config(field, format!("must be within [0, 1], got {}", value)))
    }
}

/// Multiplicative decay factor: (0, 1] or (0, 1) when `strict`
fn decay(field: &'static str, value: f64, strict: bool) -> StarfieldResult<()> {
    let value = finite(field, value)?;
    let in_range = value > 0.0 && if strict { value < 1.0 } else { value <= 1.0 };
    if in_range {
        Ok(())
    } else {
        let bound = if strict { "(0, 1)" } else { "(0, 1]" };
        Err(invalid_config(field, format!("must be within {}, got {}", bound, value)))
    }
}

fn star_count(field: &'static str, value: usize) -> StarfieldResult<()> {
    if value == 0 || value > MAX_STARS {
        return Err(invalid_config(
            field,
            format!("must be within [1, {}], got {}", MAX_STARS, value),
        ));
    }
    Ok(())
}

fn stride(field: &'static str, value: usize) -> StarfieldResult<()> {
    if value == 0 {
        return Err(invalid_config(field, "must be at least 1"));
    }
    Ok(())
}

fn color(field: &'static str, value: &RgbColor) -> StarfieldResult<()> {
    for component in value.to_array() {
        unit_interval(field, component as f64)?;
    }
    Ok(())
}

impl StarfieldConfig {
    /// Range-check every field, failing on the first bad one
    pub fn validate(&self) -> StarfieldResult<()> {
        let field = &self.star_field;
        star_count("starField.countMobile", field.count_mobile)?;
        star_count("starField.countDesktop", field.count_desktop)?;
        positive("starField.fieldSize", field.field_size as f64)?;
        non_negative("starField.speedMin", field.speed_min as f64)?;
        non_negative("starField.speedRange", field.speed_range as f64)?;
        non_negative("starField.velocityMultiplier", field.velocity_multiplier as f64)?;
        positive("starField.size", field.size as f64)?;
        unit_interval("starField.opacity", field.opacity as f64)?;

        let hsl = &self.star_color;
        unit_interval("starColor.hueMin", hsl.hue_min as f64)?;
        unit_interval("starColor.hueRange", hsl.hue_range as f64)?;
        unit_interval("starColor.saturation", hsl.saturation as f64)?;
        unit_interval("starColor.lightnessMin", hsl.lightness_min as f64)?;
        unit_interval("starColor.lightnessRange", hsl.lightness_range as f64)?;

        let camera = &self.camera;
        positive("camera.fov", camera.fov as f64)?;
        if camera.fov >= 180.0 {
            return Err(invalid_config("camera.fov", format!("must be < 180, got {}", camera.fov)));
        }
        positive("camera.near", camera.near as f64)?;
        positive("camera.far", camera.far as f64)?;
        if camera.far <= camera.near {
            return Err(invalid_config(
                "camera.far",
                format!("must exceed camera.near ({}), got {}", camera.near, camera.far),
            ));
        }
        finite("camera.initialZ", camera.initial_z as f64)?;
        non_negative("camera.parallaxFactor", camera.parallax_factor as f64)?;

        let explosion = &self.explosion;
        non_negative("explosion.speed", explosion.speed as f64)?;
        decay("explosion.velocityDecay", explosion.velocity_decay as f64, true)?;
        positive("explosion.durationMs", explosion.duration_ms)?;
        positive("explosion.size", explosion.size as f64)?;
        decay("explosion.scaleDecay", explosion.scale_decay as f64, false)?;
        positive("explosion.opacityDivisor", explosion.opacity_divisor as f64)?;
        color("explosion.color", &explosion.color)?;

        let falling = &self.falling_star;
        unit_interval("fallingStar.probability", falling.probability)?;
        non_negative("fallingStar.speed", falling.speed as f64)?;
        color("fallingStar.color", &falling.color)?;

        decay("parallax.smoothing", self.parallax.smoothing as f64, false)?;

        non_negative("raycasting.throttleMs", self.raycasting.throttle_ms)?;
        positive("raycasting.threshold", self.raycasting.threshold as f64)?;

        let perf = &self.performance;
        positive("performance.pixelRatioMaxMobile", perf.pixel_ratio_max_mobile as f64)?;
        positive("performance.pixelRatioMaxDesktop", perf.pixel_ratio_max_desktop as f64)?;
        stride("performance.mobileUpdateInterval", perf.mobile_update_interval)?;
        stride("performance.desktopUpdateInterval", perf.desktop_update_interval)?;
        non_negative("performance.resizeDebounceMs", perf.resize_debounce_ms)?;

        Ok(())
    }
}
