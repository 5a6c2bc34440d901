use crate::art::AsciiArt;
use crate::config::BlockScale;
use crate::error::{Result, RoundtripError};
use crate::gray::to_gray;
use crate::ramp::{RampMapping, char_for_gray};
use image::{GrayImage, RgbImage};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Average gray value of every block, one row of blocks per entry
///
/// Blocks are `scale.width() × scale.height()` pixels and do not overlap.
/// Pixels past the last whole block on the right or bottom edge are ignored.
///
/// # Arguments
/// * `gray` - Gray values of the source image
/// * `scale` - Block size
///
/// # Returns
/// `height / scale.height()` rows of `width / scale.width()` averages
pub fn block_averages(gray: &GrayImage, scale: BlockScale) -> Vec<Vec<u8>> {
    let (width, height) = gray.dimensions();
    let (block_w, block_h) = (scale.width(), scale.height());

    let blocks_x = width / block_w;
    let blocks_y = height / block_h;
    let area = scale.area();

    // Parallelize over block rows
    (0..blocks_y)
        .into_par_iter()
        .map(|block_y| {
            (0..blocks_x)
                .map(|block_x| {
                    let mut sum = 0u64;

                    for dy in 0..block_h {
                        for dx in 0..block_w {
                            let px = block_x * block_w + dx;
                            let py = block_y * block_h + dy;
                            sum += u64::from(gray.get_pixel(px, py)[0]);
                        }
                    }

                    // Truncating average, never above 255
                    (sum / area) as u8
                })
                .collect()
        })
        .collect()
}

/// Convert an image to ASCII art
///
/// Each `scale` block of the image becomes one ramp character, row-major,
/// top to bottom and left to right.
pub fn image_to_ascii(image: &RgbImage, scale: BlockScale, mapping: RampMapping) -> AsciiArt {
    let gray = to_gray(image);
    let lines: Vec<String> = block_averages(&gray, scale)
        .into_iter()
        .map(|row| row.into_iter().map(|avg| char_for_gray(avg, mapping)).collect())
        .collect();

    AsciiArt::new(lines)
}

/// Write every line of `art` followed by `\n`
pub fn write_lines<W: Write>(art: &AsciiArt, mut writer: W) -> Result<()> {
    for line in art.lines() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Remove the file at `path` if `result` is an error
fn discard_on_error<T>(path: &Path, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        log::error!("Unable to write {}: {}", path.display(), e);
        if let Err(remove_err) = fs::remove_file(path) {
            log::warn!("Unable to remove partial file {}: {}", path.display(), remove_err);
        }
    }
    result
}

/// Write ASCII art to `path`, one `\n`-terminated line per block row
///
/// The file handle is flushed and closed before this returns. If writing
/// fails after the file was created, the partial file is removed.
pub fn write_ascii(art: &AsciiArt, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| {
        log::error!("Unable to open file for writing: {}", path.display());
        RoundtripError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let result = write_lines(art, BufWriter::new(file));
    discard_on_error(path, result)
}

/// Encode `image` and save the ASCII art to `path`
///
/// The whole character matrix is built before the destination is opened.
pub fn encode_to_file(
    image: &RgbImage,
    path: &Path,
    scale: BlockScale,
    mapping: RampMapping,
) -> Result<AsciiArt> {
    let art = image_to_ascii(image, scale, mapping);
    log::debug!(
        "Encoded {}x{} image into {} lines of {} characters",
        image.width(),
        image.height(),
        art.line_count(),
        art.max_line_len()
    );

    write_ascii(&art, path)?;
    Ok(art)
}
