//! # Utilities Module
//!
//! Interpolation helpers and seeded randomness shared by the scenes.

pub mod math;
pub mod random;

pub use math::*;
pub use random::*;
