use crate::config::RoundtripConfig;
use crate::decoder::decode_file;
use crate::encoder::encode_to_file;
use crate::error::{Result, RoundtripError};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// Something that can pick the source image, e.g. a file dialog
///
/// The conversion routines never call this themselves; callers resolve a
/// path first with [`resolve_source`] and put it in the config.
pub trait PathProvider {
    /// Returns `None` when the user cancels
    fn select(&mut self) -> Option<PathBuf>;
}

/// A provider that always returns the same path
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl PathProvider for FixedPath {
    fn select(&mut self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Ask `provider` for a source image path
pub fn resolve_source(provider: &mut dyn PathProvider) -> Result<PathBuf> {
    match provider.select() {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(RoundtripError::SelectionCancelled),
    }
}

/// Load an image from disk as 8-bit RGB
pub fn load_image(path: &Path) -> Result<RgbImage> {
    image::open(path).map(|img| img.to_rgb8()).map_err(|source| {
        log::error!("Unable to load image: {}", path.display());
        RoundtripError::Load {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Save an image as JPEG
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|source| {
            log::error!("Unable to save image: {}", path.display());
            RoundtripError::Save {
                path: path.to_path_buf(),
                source,
            }
        })
}

/// Dimensions seen at each stage of a round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundtripReport {
    /// Source image, in pixels
    pub source_size: (u32, u32),
    /// ASCII art, as (longest line, line count)
    pub text_size: (usize, usize),
    /// Reconstructed image, in pixels
    pub output_size: (u32, u32),
}

/// Runs image -> ASCII art -> image
///
/// 1. Load the source image
/// 2. Encode it with `encode_scale` and write the intermediate text file
/// 3. Decode that file with `decode_scale`
/// 4. Save the reconstruction as JPEG
///
/// The text file is fully written and closed before it is read back.
pub fn run(config: &RoundtripConfig) -> Result<RoundtripReport> {
    config.validate()?;

    let source = load_image(&config.source_path)?;
    log::debug!(
        "Loaded {} ({}x{})",
        config.source_path.display(),
        source.width(),
        source.height()
    );

    let art = encode_to_file(
        &source,
        &config.intermediate_path,
        config.encode_scale,
        config.ramp_mapping,
    )?;
    log::info!(
        "Conversion complete. ASCII art saved to: {}",
        config.intermediate_path.display()
    );

    let output = decode_file(&config.intermediate_path, config.decode_scale)?;
    if output.width() == 0 || output.height() == 0 {
        log::error!("Error converting ASCII to image.");
        return Err(RoundtripError::Reconstruct {
            path: config.intermediate_path.clone(),
        });
    }

    save_image(&output, &config.output_path)?;
    log::info!(
        "Conversion complete. Image saved to: {}",
        config.output_path.display()
    );

    Ok(RoundtripReport {
        source_size: source.dimensions(),
        text_size: (art.max_line_len(), art.line_count()),
        output_size: output.dimensions(),
    })
}
