use image::{GrayImage, Luma, Rgb, RgbImage};

/// Gray value of an RGB pixel
///
/// Formula: (11*R + 16*G + 5*B) / 32, an integer approximation of the usual
/// perceptual weighting. Pure white stays 255 and pure black stays 0.
pub fn gray_value(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = u32::from(r) * 11 + u32::from(g) * 16 + u32::from(b) * 5;
    (weighted / 32) as u8
}

/// Convert an RGB image to its gray values
pub fn to_gray(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([gray_value(pixel)]));
    }

    output
}
