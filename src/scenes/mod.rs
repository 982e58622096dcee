//! # Scenes Module
//!
//! One [`Scene`] per concept-art image.
//!
//! Each scene draws into a fresh [`Canvas`] in a fixed order: background,
//! characters and props, particle effects, HUD, and finally post effects.
//! Positions are expressed as fractions of the canvas where the mockup is
//! meant to scale, and in pixels where the HUD keeps a fixed size.

pub mod fighter;
pub mod menu;
pub mod precision_cut;
pub mod street_brawl;

pub use fighter::*;
pub use menu::*;
pub use precision_cut::*;
pub use street_brawl::*;

use crate::rendering::{Canvas, Typeface};
use crate::{config, ArtError, ArtResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Settings shared by every scene in a run.
///
/// # Examples
///
/// ```
/// use barberbrawl::RenderConfig;
///
/// let config = RenderConfig::default();
/// assert_eq!((config.width, config.height), (1280, 720));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Seed for particle placement
    pub seed: u64,
    /// Directory the images are written to
    pub output_dir: PathBuf,
    /// Explicit font file; system fonts are probed when unset
    pub font_path: Option<PathBuf>,
}

impl RenderConfig {
    /// Creates the standard 1280x720 configuration.
    pub fn new() -> Self {
        Self {
            width: config::DEFAULT_WIDTH,
            height: config::DEFAULT_HEIGHT,
            seed: config::DEFAULT_SEED,
            output_dir: PathBuf::from(config::DEFAULT_OUTPUT_DIR),
            font_path: None,
        }
    }

    /// Creates a small configuration that renders quickly in tests.
    pub fn for_testing() -> Self {
        Self {
            width: 320,
            height: 180,
            ..Self::new()
        }
    }

    /// Loads a configuration from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> ArtResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Checks that the canvas size is usable.
    pub fn validate(&self) -> ArtResult<()> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(ArtError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Full path of an output file.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait implemented by every concept-art image.
pub trait Scene {
    /// Draws the scene into a new canvas of the configured size.
    fn render(
        &self,
        config: &RenderConfig,
        typeface: &Typeface,
        rng: &mut StdRng,
    ) -> ArtResult<Canvas>;

    /// Checks that a rendered canvas matches the configuration.
    fn validate(&self, canvas: &Canvas, config: &RenderConfig) -> ArtResult<()> {
        if canvas.width() != config.width || canvas.height() != config.height {
            return Err(ArtError::RenderFailed(format!(
                "{} rendered {}x{}, expected {}x{}",
                self.scene_name(),
                canvas.width(),
                canvas.height(),
                config.width,
                config.height
            )));
        }
        Ok(())
    }

    /// Human-readable name used in logs.
    fn scene_name(&self) -> &'static str;

    /// File name the scene is saved under.
    fn file_name(&self) -> &'static str;
}

/// The three mockups in the order they are generated.
pub fn standard_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(PrecisionCut::new()),
        Box::new(StreetBrawl::new()),
        Box::new(MainMenu::new()),
    ]
}
