//! # Barber Brawl Concept Art
//!
//! Procedural generator for the three static mockups of the Barber Brawl Arcade
//! mobile game concept.
//!
//! ## Architecture Overview
//!
//! Everything is drawn from code; no external image assets are read.
//!
//! - **Rendering**: an RGBA [`Canvas`] with alpha-blended shapes, text and effects
//! - **Scenes**: one [`Scene`] implementation per image
//! - **Gallery**: runs the scenes in order and writes the PNG files
//!
//! ## Usage
//!
//! ```no_run
//! use barberbrawl::{generate_all, RenderConfig};
//!
//! let images = generate_all(&RenderConfig::default()).unwrap();
//! assert_eq!(images.len(), 3);
//! ```

pub mod gallery;
pub mod rendering;
pub mod scenes;
pub mod utils;

pub use gallery::*;
pub use rendering::*;
pub use scenes::*;

use std::path::PathBuf;

/// Core error type for the concept-art generator.
#[derive(thiserror::Error, Debug)]
pub enum ArtError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or decoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A font file could not be read or parsed
    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Canvas dimensions are unusable
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A scene produced an image that does not match the configuration
    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Result type used throughout the crate.
pub type ArtResult<T> = Result<T, ArtError>;

/// Version information for the generator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation constants.
pub mod config {
    /// Default canvas width in pixels
    pub const DEFAULT_WIDTH: u32 = 1280;

    /// Default canvas height in pixels
    pub const DEFAULT_HEIGHT: u32 = 720;

    /// Default seed for particle effects
    pub const DEFAULT_SEED: u64 = 42;

    /// Directory the images are written to
    pub const DEFAULT_OUTPUT_DIR: &str = "output";

    /// Number of electric sparks around the clipper blade
    pub const SPARK_COUNT: usize = 140;

    /// Number of foam droplets around the shockwave
    pub const FOAM_PARTICLE_COUNT: usize = 40;

    /// Font files probed when no explicit font is configured
    pub const FONT_CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/ttf-dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ];
}
