//! Integration tests for writing the three mockup images to disk.

use barberbrawl::{generate_all, ArtError, ArtResult, RenderConfig};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn small_config(output_dir: &Path) -> RenderConfig {
    RenderConfig {
        width: 320,
        height: 180,
        output_dir: output_dir.to_path_buf(),
        ..RenderConfig::new()
    }
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_writes_exactly_three_named_files() -> ArtResult<()> {
    let temp = TempDir::new()?;
    let images = generate_all(&small_config(temp.path()))?;

    let expected: BTreeSet<String> = ["gameplay1.png", "gameplay2.png", "menu.png"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(file_names(temp.path()), expected);

    for image in &images {
        assert!(fs::metadata(&image.path)?.len() > 0);
    }
    Ok(())
}

#[test]
fn test_images_have_configured_dimensions() -> ArtResult<()> {
    let temp = TempDir::new()?;
    let config = RenderConfig {
        width: 400,
        height: 240,
        ..small_config(temp.path())
    };
    generate_all(&config)?;

    for name in ["gameplay1.png", "gameplay2.png", "menu.png"] {
        let decoded = image::open(temp.path().join(name))?;
        assert_eq!((decoded.width(), decoded.height()), (400, 240), "{}", name);
    }
    Ok(())
}

#[test]
fn test_creates_missing_output_directory() -> ArtResult<()> {
    let temp = TempDir::new()?;
    let nested = temp.path().join("renders").join("mockups");
    assert!(!nested.exists());

    generate_all(&small_config(&nested))?;
    assert_eq!(file_names(&nested).len(), 3);
    Ok(())
}

#[test]
fn test_rerun_overwrites_with_same_results() -> ArtResult<()> {
    let temp = TempDir::new()?;
    let config = small_config(temp.path());

    let first = generate_all(&config)?;
    let second = generate_all(&config)?;

    assert_eq!(file_names(temp.path()).len(), 3);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.path, b.path);
        assert_eq!((a.width, a.height), (b.width, b.height));
    }
    Ok(())
}

#[test]
fn test_same_seed_gives_identical_pixels() -> ArtResult<()> {
    let first_dir = TempDir::new()?;
    let second_dir = TempDir::new()?;
    generate_all(&small_config(first_dir.path()))?;
    generate_all(&small_config(second_dir.path()))?;

    for name in ["gameplay1.png", "gameplay2.png", "menu.png"] {
        let a = image::open(first_dir.path().join(name))?.to_rgba8();
        let b = image::open(second_dir.path().join(name))?.to_rgba8();
        assert!(a == b, "{} differs between runs", name);
    }
    Ok(())
}

#[test]
fn test_missing_explicit_font_fails() {
    let temp = TempDir::new().unwrap();
    let config = RenderConfig {
        font_path: Some(temp.path().join("no-such-font.ttf")),
        ..small_config(&temp.path().join("out"))
    };

    match generate_all(&config) {
        Err(ArtError::FontLoad { path, .. }) => assert!(path.ends_with("no-such-font.ttf")),
        other => panic!("expected FontLoad, got {:?}", other),
    }
    assert!(!temp.path().join("out").join("gameplay1.png").exists());
}

#[test]
fn test_garbage_font_file_fails() {
    let temp = TempDir::new().unwrap();
    let font = temp.path().join("broken.ttf");
    fs::write(&font, b"definitely not a font").unwrap();
    let config = RenderConfig {
        font_path: Some(font),
        ..small_config(temp.path())
    };
    assert!(matches!(generate_all(&config), Err(ArtError::FontLoad { .. })));
}

#[test]
fn test_zero_dimensions_fail() {
    let temp = TempDir::new().unwrap();
    let config = RenderConfig {
        width: 0,
        ..small_config(temp.path())
    };
    assert!(matches!(
        generate_all(&config),
        Err(ArtError::InvalidDimensions { width: 0, height: 180 })
    ));
    assert!(file_names(temp.path()).is_empty());
}
