use rand::Rng;

use crate::config::StarfieldConfig;
use crate::environment::Environment;
use crate::particles::color::lerp_rgb;
use crate::particles::spawn::reset_star;
use crate::particles::star_data::{BufferChanges, StarData, StarState};

/// Advance the star field by one tick.
///
/// Only every `env.update_stride`-th star is visited; the starting offset rotates with
/// `frame` so each star is updated once every `update_stride` frames.
pub fn update_stars<R: Rng + ?Sized>(
    stars: &mut StarData,
    config: &StarfieldConfig,
    env: &Environment,
    rng: &mut R,
    dt: f32,
    now_ms: f64,
    frame: u64,
) -> BufferChanges {
    let stride = env.update_stride.max(1);
    let phase = (frame % stride as u64) as usize;

    for i in (phase..stars.count).step_by(stride) {
        match stars.states[i] {
            StarState::Falling => update_falling_star(stars, config, rng, i),
            StarState::Normal => update_normal_star(stars, config, env, rng, i, dt),
            StarState::Exploded => update_exploding_star(stars, config, rng, i, now_ms),
        }
    }

    BufferChanges::ALL
}

/// Forward drift, far-bound respawn, and the random falling-star transition
pub fn update_normal_star<R: Rng + ?Sized>(
    stars: &mut StarData,
    config: &StarfieldConfig,
    env: &Environment,
    rng: &mut R,
    index: usize,
    dt: f32,
) {
    let z = index * 3 + 2;
    stars.positions[z] += stars.velocities[index] * dt * config.star_field.velocity_multiplier;

    if stars.positions[z] > config.camera.far {
        reset_star(stars, config, rng, index);
        return;
    }

    if should_create_falling_star(env, config, rng) {
        start_falling(stars, config, index);
    }
}

/// Diagonal fall at fixed speed; leaving the bounds returns the star to normal
pub fn update_falling_star<R: Rng + ?Sized>(
    stars: &mut StarData,
    config: &StarfieldConfig,
    rng: &mut R,
    index: usize,
) {
    let p = index * 3;
    let speed = config.falling_star.speed;
    stars.positions[p + 1] -= speed;
    stars.positions[p + 2] += speed;

    if is_star_out_of_bounds(stars, config, index) {
        reset_star(stars, config, rng, index);
    }
}

/// Scatter, fade back toward the base color, and reset once the duration elapses
pub fn update_exploding_star<R: Rng + ?Sized>(
    stars: &mut StarData,
    config: &StarfieldConfig,
    rng: &mut R,
    index: usize,
    now_ms: f64,
) {
    let explosion = &config.explosion;
    let p = index * 3;

    let record = &mut stars.explosions[index];
    for axis in 0..3 {
        stars.positions[p + axis] += record.velocity[axis];
        record.velocity[axis] *= explosion.velocity_decay;
    }

    let elapsed = now_ms - record.start_ms;
    let t = (elapsed / explosion.duration_ms).clamp(0.0, 1.0) as f32;
    let start_color = record.color;

    record.scale *= explosion.scale_decay;
    let scale = record.scale;

    let blended = lerp_rgb(start_color, stars.base_color(index), t);
    stars.set_color(index, blended);
    stars.sizes[index] = scale;
    stars.opacities[index] = scale / explosion.opacity_divisor;

    if elapsed > explosion.duration_ms {
        reset_star(stars, config, rng, index);
    }
}

/// Falling stars are a desktop, full-motion feature
pub fn should_create_falling_star<R: Rng + ?Sized>(
    env: &Environment,
    config: &StarfieldConfig,
    rng: &mut R,
) -> bool {
    env.falling_stars_enabled() && rng.gen_bool(config.falling_star.probability)
}

fn start_falling(stars: &mut StarData, config: &StarfieldConfig, index: usize) {
    stars.states[index] = StarState::Falling;
    stars.set_color(index, config.falling_star.color.to_array());
    log::debug!("Star {} started falling", index);
}

/// Below the floor or past the far plane
pub fn is_star_out_of_bounds(stars: &StarData, config: &StarfieldConfig, index: usize) -> bool {
    let [_, y, z] = stars.position(index);
    y < -config.camera.far || z > config.camera.far
}
