//! Noise image writer
//!
//! Renders a generator's output as an uncompressed 24-bit BMP. A good
//! generator gives white noise; a weak one shows stripes, tiles or diagonals.
//!
//! # Layout
//!
//! 54-byte header (14-byte file header + 40-byte info header, little-endian),
//! then rows of B,G,R triples padded to a multiple of 4 bytes. BMP rows are
//! stored bottom-up, so the first bytes requested from the source fill the
//! last row in the file, i.e. the top of the picture.

use crate::error::{PrngError, Result};
use crate::registry::AnyGenerator;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Header bytes before pixel data
pub const BMP_HEADER_LEN: usize = 54;

const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// How source bytes map to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// One byte per pixel, copied into all three channels
    #[default]
    Grayscale,
    /// Three bytes per pixel in B, G, R order
    Rgb,
    /// Three bytes per pixel (B, G, R) mixed down to one perceived brightness
    Luma,
}

impl ColorMode {
    /// Source bytes consumed per pixel
    pub fn bytes_per_pixel(self) -> u64 {
        match self {
            ColorMode::Grayscale => 1,
            ColorMode::Rgb | ColorMode::Luma => 3,
        }
    }
}

/// Image dimensions and color mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            mode: ColorMode::Grayscale,
        }
    }
}

impl ImageConfig {
    /// Bytes per stored row including padding
    pub fn row_stride(&self) -> u64 {
        (u64::from(self.width) * u64::from(BITS_PER_PIXEL) + 31) / 32 * 4
    }

    /// Pixel data size in bytes
    pub fn image_size(&self) -> u64 {
        self.row_stride() * u64::from(self.height)
    }

    /// Whole file size in bytes
    pub fn file_size(&self) -> u64 {
        BMP_HEADER_LEN as u64 + self.image_size()
    }

    /// Number of bytes the pixel source will be asked for
    pub fn source_bytes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * self.mode.bytes_per_pixel()
    }

    /// Reject dimensions a BMP header cannot describe
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PrngError::InvalidImage(format!(
                "dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(PrngError::InvalidImage(format!(
                "dimensions {}x{} exceed the signed 32-bit header fields",
                self.width, self.height
            )));
        }
        if self.file_size() > u64::from(u32::MAX) {
            return Err(PrngError::InvalidImage(format!(
                "file size {} exceeds 4 GiB",
                self.file_size()
            )));
        }
        Ok(())
    }
}

/// Weighted brightness of one pixel, truncated toward zero
pub fn luma(red: u8, green: u8, blue: u8) -> u8 {
    (0.3 * f64::from(red) + 0.59 * f64::from(green) + 0.11 * f64::from(blue)) as u8
}

/// Build the 54-byte header for a validated config
pub fn bmp_header(config: &ImageConfig) -> [u8; BMP_HEADER_LEN] {
    let mut header = [0u8; BMP_HEADER_LEN];
    header[0..2].copy_from_slice(b"BM");
    header[2..6].copy_from_slice(&(config.file_size() as u32).to_le_bytes());
    header[10..14].copy_from_slice(&(BMP_HEADER_LEN as u32).to_le_bytes());
    header[14..18].copy_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    header[18..22].copy_from_slice(&config.width.to_le_bytes());
    header[22..26].copy_from_slice(&config.height.to_le_bytes());
    header[26..28].copy_from_slice(&1u16.to_le_bytes());
    header[28..30].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    header[34..38].copy_from_slice(&(config.image_size() as u32).to_le_bytes());
    header
}

/// Render a complete BMP file in memory
pub fn render_bmp<F: FnMut() -> u8>(config: &ImageConfig, mut source: F) -> Result<Vec<u8>> {
    config.validate()?;

    let stride = config.row_stride() as usize;
    let width = config.width as usize;
    let mut buf = vec![0u8; config.file_size() as usize];
    buf[..BMP_HEADER_LEN].copy_from_slice(&bmp_header(config));

    for row in (0..config.height as usize).rev() {
        let row_start = BMP_HEADER_LEN + row * stride;
        for pixel in buf[row_start..row_start + width * 3].chunks_exact_mut(3) {
            match config.mode {
                ColorMode::Grayscale => pixel.fill(source()),
                ColorMode::Rgb => {
                    for channel in pixel.iter_mut() {
                        *channel = source();
                    }
                }
                ColorMode::Luma => {
                    let blue = source();
                    let green = source();
                    let red = source();
                    pixel.fill(luma(red, green, blue));
                }
            }
        }
    }

    Ok(buf)
}

/// Render and write a BMP file
pub fn write_bmp<W: Write, F: FnMut() -> u8>(
    config: &ImageConfig,
    source: F,
    writer: &mut W,
) -> Result<()> {
    let bytes = render_bmp(config, source)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Render a BMP from the low byte of each generator output
pub fn render_generator_bmp(generator: &mut AnyGenerator, config: &ImageConfig) -> Result<Vec<u8>> {
    let bytes = render_bmp(config, || generator.next_byte())?;
    tracing::info!(
        generator = %generator.kind(),
        width = config.width,
        height = config.height,
        mode = ?config.mode,
        "rendered noise image"
    );
    Ok(bytes)
}
