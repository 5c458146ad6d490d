use rand::Rng;

use crate::config::StarfieldConfig;
use crate::particles::star_data::{ExplosionRecord, StarData, StarState};

/// Put a star into the exploded state.
///
/// Returns `false` and leaves everything untouched when the star is already exploded.
/// A falling star hit by the pointer leaves the falling state.
pub fn explode_star<R: Rng + ?Sized>(
    stars: &mut StarData,
    config: &StarfieldConfig,
    rng: &mut R,
    index: usize,
    now_ms: f64,
) -> bool {
    if stars.is_exploded(index) {
        return false;
    }

    let explosion = &config.explosion;
    let color = explosion.color.to_array();
    let mut outward = || (rng.gen::<f32>() - 0.5) * explosion.speed;

    stars.explosions[index] = ExplosionRecord {
        velocity: [outward(), outward(), outward()],
        scale: explosion.size,
        start_ms: now_ms,
        color,
    };
    stars.states[index] = StarState::Exploded;

    stars.set_color(index, color);
    stars.sizes[index] = explosion.size;
    stars.opacities[index] = 1.0;

    log::debug!("Star {} exploded at {:.1}ms", index, now_ms);
    true
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::particles::spawn::populate_stars;

    #[test]
    fn test_explode_seeds_record() {
        let config = StarfieldConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut stars = StarData::new(8);
        populate_stars(&mut stars, &config, &mut rng);
        let base = stars.base_color(4);

        assert!(explode_star(&mut stars, &config, &mut rng, 4, 250.0));

        let record = *stars.explosion(4);
        let half_speed = config.explosion.speed / 2.0;
        for v in record.velocity {
            assert!(v >= -half_speed && v <= half_speed);
        }
        assert_eq!(record.scale, config.explosion.size);
        assert_eq!(record.start_ms, 250.0);
        assert_eq!(record.color, config.explosion.color.to_array());

        assert!(stars.is_exploded(4));
        assert_eq!(stars.color(4), config.explosion.color.to_array());
        assert_eq!(stars.sizes[4], config.explosion.size);
        assert_eq!(stars.opacities[4], 1.0);
        assert_eq!(stars.base_color(4), base);
    }

    #[test]
    fn test_explode_is_idempotent() {
        let config = StarfieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut stars = StarData::new(8);
        populate_stars(&mut stars, &config, &mut rng);

        assert!(explode_star(&mut stars, &config, &mut rng, 1, 100.0));
        let first = *stars.explosion(1);

        assert!(!explode_star(&mut stars, &config, &mut rng, 1, 900.0));
        assert_eq!(*stars.explosion(1), first);
        assert!(stars.is_exploded(1));
    }

    #[test]
    fn test_falling_star_can_explode() {
        let config = StarfieldConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut stars = StarData::new(4);
        populate_stars(&mut stars, &config, &mut rng);
        stars.states[2] = StarState::Falling;

        assert!(explode_star(&mut stars, &config, &mut rng, 2, 0.0));
        assert!(stars.is_exploded(2));
        assert!(!stars.is_falling(2));
    }
}
