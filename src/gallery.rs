//! # Gallery
//!
//! Renders every scene in order and writes the PNG files.

use crate::rendering::Typeface;
use crate::scenes::{standard_scenes, RenderConfig};
use crate::utils::create_scene_rng;
use crate::ArtResult;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// A PNG written by [`generate_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size of the encoded file
    pub bytes: u64,
}

/// Creates the output directory and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> ArtResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Renders and saves all three mockups, stopping at the first failure.
///
/// Existing files with the same names are overwritten.
pub fn generate_all(config: &RenderConfig) -> ArtResult<Vec<RenderedImage>> {
    config.validate()?;
    ensure_output_dir(&config.output_dir)?;

    let typeface = Typeface::resolve(config.font_path.as_deref())?;
    let scenes = standard_scenes();
    let mut images = Vec::with_capacity(scenes.len());

    for (index, scene) in scenes.iter().enumerate() {
        debug!("Rendering {} at {}x{}", scene.scene_name(), config.width, config.height);
        let mut rng = create_scene_rng(config, index);
        let canvas = scene.render(config, &typeface, &mut rng)?;
        scene.validate(&canvas, config)?;

        let path = config.output_path(scene.file_name());
        canvas.save_png(&path)?;
        info!("Saved {}", path.display());

        let bytes = fs::metadata(&path)?.len();
        images.push(RenderedImage {
            path,
            width: canvas.width(),
            height: canvas.height(),
            bytes,
        });
    }

    Ok(images)
}
