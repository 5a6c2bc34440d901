/// Round trip example: encode a generated test image to ASCII art and back
///
/// This creates a test image with a gradient and a circle, prints the ASCII
/// art and reconstructs it at a third of the block size
use ascii_roundtrip::{BlockScale, RampMapping, decode_file, encode_to_file, save_image};
use image::{Rgb, RgbImage};
use std::path::Path;

fn main() -> ascii_roundtrip::Result<()> {
    println!("ASCII Round Trip - Example");
    println!("==========================\n");

    let width = 240;
    let height = 240;

    // Horizontal gradient with a white circle in the center
    let center = width as f32 / 2.0;
    let radius = 60.0;
    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if (dx * dx + dy * dy).sqrt() < radius {
            Rgb([255, 255, 255])
        } else {
            let v = (x * 255 / width) as u8;
            Rgb([v, v, v])
        }
    });

    println!("Created test image: {}x{}", width, height);

    let scale = BlockScale::new(6, 12)?;
    let text_path = Path::new("roundtrip_output.txt");
    let art = encode_to_file(&img, text_path, scale, RampMapping::Spread)?;

    println!("{}", art);
    println!("Saved ASCII art to: {}", text_path.display());

    let output = decode_file(text_path, scale.divided_by(3))?;
    let image_path = Path::new("roundtrip_output.jpg");
    save_image(&output, image_path)?;

    println!(
        "Saved {}x{} reconstruction to: {}",
        output.width(),
        output.height(),
        image_path.display()
    );
    Ok(())
}
