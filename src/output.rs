//! Pixel sink: gamma correction, quantization and image file output.
//!
//! The renderer hands over linear RGB; everything display-related happens
//! here. Quantization follows one contract for every byte-oriented
//! format: square-root gamma, intensity clamped to [0.000, 0.999], then
//! scaled by 256 and truncated. The clamp ceiling of 0.999 (not 1.0)
//! keeps the byte range at [0, 255] with full white mapping to 255.

use std::fs::File;
use std::io::{BufWriter, Write};

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{info, warn};

use crate::interval::Interval;

/// Intensity clamp applied before quantization.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Convert a linear color component to gamma-corrected form (gamma 2).
fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Quantize a linear color component to an output byte.
fn color_byte(linear_component: f32) -> u8 {
    (256.0 * INTENSITY.clamp(linear_to_gamma(linear_component as f64))) as u8
}

/// Write the image as a plain-text PPM (P3) pixel stream.
///
/// Header is `P3`, width and height, and the 255 maximum, followed by one
/// gamma-corrected `r g b` triple per line in row-major order.
pub fn write_ppm<W: Write>(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for pixel in image.pixels() {
        writeln!(
            writer,
            "{} {} {}",
            color_byte(pixel[0]),
            color_byte(pixel[1]),
            color_byte(pixel[2])
        )?;
    }

    Ok(())
}

/// Save the image as a PPM file.
pub fn save_image_as_ppm(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let result = File::create(output_path)
        .map(BufWriter::new)
        .and_then(|mut writer| {
            write_ppm(image, &mut writer)?;
            writer.flush()
        });

    match result {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save the image as an 8-bit PNG.
///
/// Quantizes through the same gamma and clamp path as the PPM stream, so
/// both formats agree byte for byte.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb([
                color_byte(pixel[0]),
                color_byte(pixel[1]),
                color_byte(pixel[2]),
            ])
        });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save the image as an OpenEXR file with full linear precision.
///
/// No gamma correction or clamping; EXR stores the raw HDR values for
/// viewers and post-processing tools that apply their own transforms.
pub fn save_image_as_exr(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let result = write_rgb_file(
        output_path,
        image.width() as usize,
        image.height() as usize,
        |x, y| {
            let pixel = image.get_pixel(x as u32, y as u32);
            (pixel[0], pixel[1], pixel[2])
        },
    );

    match result {
        Ok(_) => info!("HDR image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_curve() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-0.5), 0.0);
        assert_eq!(linear_to_gamma(1.0), 1.0);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_color_byte_range() {
        // Full white clamps to 0.999 and lands on 255, never 256
        assert_eq!(color_byte(1.0), 255);
        assert_eq!(color_byte(10.0), 255);
        assert_eq!(color_byte(0.0), 0);
        assert_eq!(color_byte(-1.0), 0);
    }

    #[test]
    fn test_color_byte_gamma_applied() {
        // 0.25 linear -> 0.5 after gamma -> floor(256 * 0.5)
        assert_eq!(color_byte(0.25), 128);
    }

    #[test]
    fn test_color_byte_deterministic() {
        for c in [0.0f32, 0.1, 0.5, 0.73, 0.999, 1.0] {
            assert_eq!(color_byte(c), color_byte(c));
        }
    }

    #[test]
    fn test_write_ppm_golden() {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> = ImageBuffer::new(2, 1);
        image.put_pixel(0, 0, Rgb([0.0, 0.25, 1.0]));
        image.put_pixel(1, 0, Rgb([1.0, 1.0, 1.0]));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n0 128 255\n255 255 255\n");
    }
}
