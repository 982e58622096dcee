//! # Seeded Randomness
//!
//! Every scene draws its particles from its own generator so that adding
//! particles to one image never shifts another.

use crate::RenderConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded random number generator from the config.
pub fn create_rng(config: &RenderConfig) -> StdRng {
    StdRng::seed_from_u64(config.seed)
}

/// Creates a generator for one scene, offset from the base seed by its index.
pub fn create_scene_rng(config: &RenderConfig, scene_index: usize) -> StdRng {
    StdRng::seed_from_u64(config.seed.wrapping_add(scene_index as u64))
}
