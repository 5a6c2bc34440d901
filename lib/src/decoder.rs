use crate::art::AsciiArt;
use crate::config::BlockScale;
use crate::error::{Result, RoundtripError};
use crate::ramp::{is_blank, shade_for_char};
use image::{Rgb, RgbImage};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// Background of a reconstructed image
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Measure ASCII art without keeping it
///
/// # Returns
/// `(max_line_len, line_count)`, line length counted in characters
pub fn measure<R: BufRead>(reader: R) -> Result<(usize, usize)> {
    let mut width = 0;
    let mut height = 0;

    for line in reader.lines() {
        width = width.max(line?.chars().count());
        height += 1;
    }

    Ok((width, height))
}

/// Pixel length of `count` blocks of `block` pixels, if it fits in a `u32`
fn scaled_len(count: usize, block: u32) -> Option<u32> {
    u32::try_from(count).ok()?.checked_mul(block)
}

/// Allocate the black canvas for `columns × rows` characters
fn blank_canvas(columns: usize, rows: usize, scale: BlockScale) -> Result<RgbImage> {
    match (
        scaled_len(columns, scale.width()),
        scaled_len(rows, scale.height()),
    ) {
        (Some(width), Some(height)) => Ok(RgbImage::from_pixel(width, height, BACKGROUND)),
        _ => {
            log::error!(
                "{} columns x {} rows at {} does not fit in an image",
                columns,
                rows,
                scale
            );
            Err(RoundtripError::InvalidConfig(format!(
                "{}x{} characters at block scale {} exceed the maximum image size",
                columns, rows, scale
            )))
        }
    }
}

/// Write the block-origin pixel for every character of one line
///
/// Only one pixel per block is set; the rest of the block stays background.
fn paint_line(canvas: &mut RgbImage, line: &str, row: usize, scale: BlockScale) {
    let py = row as u32 * scale.height();

    for (column, ch) in line.chars().enumerate() {
        if is_blank(ch) {
            continue;
        }

        let px = column as u32 * scale.width();
        let shade = shade_for_char(ch);
        canvas.put_pixel(px, py, Rgb([shade, shade, shade]));
    }
}

/// Reconstruct an image from ASCII art text
///
/// Reads the text twice: once to size the canvas, then again (after seeking
/// back to the start) to paint it.
///
/// # Arguments
/// * `reader` - ASCII art text, one row of blocks per line
/// * `scale` - Pixel block represented by one character
///
/// # Returns
/// An image of `(max_line_len * w) × (line_count * h)` pixels; empty text
/// gives a 0×0 image
pub fn ascii_to_image<R: BufRead + Seek>(mut reader: R, scale: BlockScale) -> Result<RgbImage> {
    let (columns, rows) = measure(&mut reader)?;
    let mut canvas = blank_canvas(columns, rows, scale)?;

    reader.seek(SeekFrom::Start(0))?;

    for (row, line) in reader.lines().take(rows).enumerate() {
        paint_line(&mut canvas, &line?, row, scale);
    }

    Ok(canvas)
}

/// Reconstruct an image from in-memory ASCII art
pub fn render_art(art: &AsciiArt, scale: BlockScale) -> Result<RgbImage> {
    let mut canvas = blank_canvas(art.max_line_len(), art.line_count(), scale)?;

    for (row, line) in art.lines().iter().enumerate() {
        paint_line(&mut canvas, line, row, scale);
    }

    Ok(canvas)
}

/// Reconstruct an image from the ASCII art file at `path`
pub fn decode_file(path: &Path, scale: BlockScale) -> Result<RgbImage> {
    let file = File::open(path).map_err(|source| {
        log::error!("Unable to open file for reading: {}", path.display());
        RoundtripError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let image = ascii_to_image(BufReader::new(file), scale)?;
    log::debug!(
        "Decoded {} into a {}x{} image",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}
