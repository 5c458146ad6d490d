//! Star particle store and simulation stepper
//!
//! Data lives in [`StarData`] as flat parallel buffers. Behaviour is free functions
//! over those buffers: spawning, per-tick updates, explosions.

pub mod color;
pub mod explosion;
pub mod spawn;
pub mod star_data;
pub mod update;

pub use explosion::explode_star;
pub use spawn::{populate_stars, reset_star};
pub use star_data::{BufferChanges, ExplosionRecord, StarData, StarState};
pub use update::update_stars;
