//! # Barber Brawl Concept Art Entry Point
//!
//! Parses the command line, sets up logging and writes the three mockup images.

use barberbrawl::{generate_all, ArtResult, RenderConfig};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

/// Command line arguments for the concept-art generator.
#[derive(Parser, Debug)]
#[command(name = "barberbrawl")]
#[command(about = "Renders concept-art mockups for the Barber Brawl Arcade game")]
#[command(version)]
struct Args {
    /// Directory the images are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Random seed for particle effects
    #[arg(short, long)]
    seed: Option<u64>,

    /// TrueType font file for all text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// JSON file with render settings; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ArtResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Barber Brawl concept art v{}", barberbrawl::VERSION);

    let config = build_config(&args)?;
    match generate_all(&config) {
        Ok(images) => {
            for image in &images {
                info!(
                    "{} ({}x{}, {} bytes)",
                    image.path.display(),
                    image.width,
                    image.height,
                    image.bytes
                );
            }
            info!("Wrote {} images to {}", images.len(), config.output_dir.display());
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            Err(e)
        }
    }
}

/// Initializes the logger; `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// Starts from the JSON file when given, then applies command line overrides.
fn build_config(args: &Args) -> ArtResult<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            RenderConfig::from_json_file(path)?
        }
        None => RenderConfig::new(),
    };

    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(font) = &args.font {
        config.font_path = Some(font.clone());
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::parse_from(["barberbrawl"]);
        assert_eq!(build_config(&args).unwrap(), RenderConfig::new());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "barberbrawl",
            "--output-dir",
            "shots",
            "--seed",
            "9",
            "--width",
            "640",
            "--height",
            "360",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("shots"));
        assert_eq!(config.seed, 9);
        assert_eq!((config.width, config.height), (640, 360));
        assert!(config.font_path.is_none());
    }
}
