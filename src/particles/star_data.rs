use crate::constants::stars::COMPONENTS;

/// Lifecycle state of a single star. Exactly one holds at any time.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarState {
    #[default]
    Normal = 0,
    Falling = 1,
    Exploded = 2,
}

/// Per-star explosion parameters, only meaningful while the star is exploded
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplosionRecord {
    pub velocity: [f32; 3],
    pub scale: f32,
    /// Timestamp in milliseconds
    pub start_ms: f64,
    pub color: [f32; 3],
}

/// Which render buffers changed since the last upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferChanges {
    pub position: bool,
    pub color: bool,
    pub size: bool,
    pub opacity: bool,
}

impl BufferChanges {
    pub const NONE: Self = Self {
        position: false,
        color: false,
        size: false,
        opacity: false,
    };

    pub const ALL: Self = Self {
        position: true,
        color: true,
        size: true,
        opacity: true,
    };

    pub fn any(&self) -> bool {
        self.position || self.color || self.size || self.opacity
    }

    /// Combine two change sets
    pub fn merge(self, other: Self) -> Self {
        Self {
            position: self.position || other.position,
            color: self.color || other.color,
            size: self.size || other.size,
            opacity: self.opacity || other.opacity,
        }
    }
}

/// Star data stored in Structure of Arrays (SOA) layout.
///
/// The buffer lengths are fixed at construction; stars are reset in place and never
/// removed, so index `i` names the same star for the life of the store.
#[derive(Debug, Clone)]
pub struct StarData {
    /// Number of stars
    pub count: usize,

    /// Flat xyz positions, `3 * count` floats
    pub positions: Vec<f32>,

    /// Forward (z) drift speed per star
    pub velocities: Vec<f32>,

    /// Displayed rgb, `3 * count` floats
    pub colors: Vec<f32>,

    /// Resting rgb, written only at spawn
    pub(crate) base_colors: Vec<f32>,

    /// Point size and opacity render attributes
    pub sizes: Vec<f32>,
    pub opacities: Vec<f32>,

    pub states: Vec<StarState>,
    pub explosions: Vec<ExplosionRecord>,
}

impl StarData {
    /// Allocate zeroed buffers for `count` stars, all in the normal state
    pub fn new(count: usize) -> Self {
        Self {
            count,
            positions: vec![0.0; count * COMPONENTS],
            velocities: vec![0.0; count],
            colors: vec![0.0; count * COMPONENTS],
            base_colors: vec![0.0; count * COMPONENTS],
            sizes: vec![0.0; count],
            opacities: vec![0.0; count],
            states: vec![StarState::Normal; count],
            explosions: vec![ExplosionRecord::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn position(&self, index: usize) -> [f32; 3] {
        let p = index * COMPONENTS;
        [self.positions[p], self.positions[p + 1], self.positions[p + 2]]
    }

    #[inline]
    pub fn set_position(&mut self, index: usize, position: [f32; 3]) {
        let p = index * COMPONENTS;
        self.positions[p..p + COMPONENTS].copy_from_slice(&position);
    }

    #[inline]
    pub fn color(&self, index: usize) -> [f32; 3] {
        let p = index * COMPONENTS;
        [self.colors[p], self.colors[p + 1], self.colors[p + 2]]
    }

    #[inline]
    pub fn set_color(&mut self, index: usize, color: [f32; 3]) {
        let p = index * COMPONENTS;
        self.colors[p..p + COMPONENTS].copy_from_slice(&color);
    }

    #[inline]
    pub fn base_color(&self, index: usize) -> [f32; 3] {
        let p = index * COMPONENTS;
        [self.base_colors[p], self.base_colors[p + 1], self.base_colors[p + 2]]
    }

    /// Set both the base and the displayed color. Spawn-time only.
    pub(crate) fn assign_base_color(&mut self, index: usize, color: [f32; 3]) {
        let p = index * COMPONENTS;
        self.base_colors[p..p + COMPONENTS].copy_from_slice(&color);
        self.colors[p..p + COMPONENTS].copy_from_slice(&color);
    }

    /// Copy the base color back into the displayed color
    #[inline]
    pub fn restore_base_color(&mut self, index: usize) {
        let p = index * COMPONENTS;
        let (colors, base) = (&mut self.colors, &self.base_colors);
        colors[p..p + COMPONENTS].copy_from_slice(&base[p..p + COMPONENTS]);
    }

    #[inline]
    pub fn state(&self, index: usize) -> StarState {
        self.states[index]
    }

    #[inline]
    pub fn is_falling(&self, index: usize) -> bool {
        self.states[index] == StarState::Falling
    }

    #[inline]
    pub fn is_exploded(&self, index: usize) -> bool {
        self.states[index] == StarState::Exploded
    }

    #[inline]
    pub fn explosion(&self, index: usize) -> &ExplosionRecord {
        &self.explosions[index]
    }

    /// Count stars per state: (normal, falling, exploded)
    pub fn state_counts(&self) -> (usize, usize, usize) {
        self.states
            .iter()
            .fold((0, 0, 0), |(normal, falling, exploded), state| match state {
                StarState::Normal => (normal + 1, falling, exploded),
                StarState::Falling => (normal, falling + 1, exploded),
                StarState::Exploded => (normal, falling, exploded + 1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_are_parallel() {
        let stars = StarData::new(17);
        assert_eq!(stars.len(), 17);
        assert_eq!(stars.positions.len(), 17 * 3);
        assert_eq!(stars.colors.len(), 17 * 3);
        assert_eq!(stars.base_colors.len(), 17 * 3);
        assert_eq!(stars.velocities.len(), 17);
        assert_eq!(stars.sizes.len(), 17);
        assert_eq!(stars.opacities.len(), 17);
        assert_eq!(stars.states.len(), 17);
        assert_eq!(stars.explosions.len(), 17);
        assert_eq!(stars.state_counts(), (17, 0, 0));
    }

    #[test]
    fn test_restore_base_color() {
        let mut stars = StarData::new(4);
        stars.assign_base_color(2, [0.1, 0.2, 0.3]);
        stars.set_color(2, [1.0, 1.0, 1.0]);
        assert_eq!(stars.color(2), [1.0, 1.0, 1.0]);

        stars.restore_base_color(2);
        assert_eq!(stars.color(2), [0.1, 0.2, 0.3]);
        assert_eq!(stars.base_color(2), [0.1, 0.2, 0.3]);
        // Neighbours untouched
        assert_eq!(stars.color(1), [0.0, 0.0, 0.0]);
        assert_eq!(stars.color(3), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_buffer_changes_merge() {
        let position_only = BufferChanges {
            position: true,
            ..BufferChanges::NONE
        };
        assert!(!BufferChanges::NONE.any());
        assert!(position_only.any());
        assert_eq!(BufferChanges::NONE.merge(BufferChanges::ALL), BufferChanges::ALL);
        assert_eq!(position_only.merge(BufferChanges::NONE), position_only);
    }
}
