use rand::Rng;

use crate::config::StarfieldConfig;
use crate::particles::color::hsl_to_rgb;
use crate::particles::star_data::{StarData, StarState};

/// Uniform coordinate inside `[-field_size / 2, field_size / 2)`
#[inline]
pub fn random_field_coordinate<R: Rng + ?Sized>(rng: &mut R, field_size: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * field_size
}

/// Hue-biased base color for a fresh star
pub fn random_star_color<R: Rng + ?Sized>(rng: &mut R, config: &StarfieldConfig) -> [f32; 3] {
    let hsl = &config.star_color;
    hsl_to_rgb(
        rng.gen::<f32>() * hsl.hue_range + hsl.hue_min,
        hsl.saturation,
        rng.gen::<f32>() * hsl.lightness_range + hsl.lightness_min,
    )
}

/// Fill every star with its initial randomized state
pub fn populate_stars<R: Rng + ?Sized>(stars: &mut StarData, config: &StarfieldConfig, rng: &mut R) {
    let field = &config.star_field;

    for i in 0..stars.count {
        stars.set_position(
            i,
            [
                random_field_coordinate(rng, field.field_size),
                random_field_coordinate(rng, field.field_size),
                random_field_coordinate(rng, field.field_size),
            ],
        );
        stars.velocities[i] = field.speed_min + rng.gen::<f32>() * field.speed_range;

        let color = random_star_color(rng, config);
        stars.assign_base_color(i, color);

        stars.sizes[i] = field.size;
        stars.opacities[i] = field.opacity;
        stars.states[i] = StarState::Normal;
    }
}

/// Logically respawn a star: fresh x/y on the spawn plane, normal state, resting
/// size and opacity, displayed color back to its base color.
pub fn reset_star<R: Rng + ?Sized>(
    stars: &mut StarData,
    config: &StarfieldConfig,
    rng: &mut R,
    index: usize,
) {
    let field_size = config.star_field.field_size;
    stars.set_position(
        index,
        [
            random_field_coordinate(rng, field_size),
            random_field_coordinate(rng, field_size),
            config.spawn_z(),
        ],
    );

    stars.states[index] = StarState::Normal;
    stars.sizes[index] = config.star_field.size;
    stars.opacities[index] = config.star_field.opacity;
    stars.restore_base_color(index);
}
