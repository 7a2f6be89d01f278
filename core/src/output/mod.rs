//! Output encodings for generator streams
//!
//! - **stream**: raw little-endian bytes or hex text
//! - **bmp**: noise images for eyeballing generator quality

pub mod bmp;
pub mod stream;

pub use bmp::{
    bmp_header, luma, render_bmp, render_generator_bmp, write_bmp, ColorMode, ImageConfig,
};
pub use stream::{format_hex, write_stream, StreamFormat, HEX_VALUES_PER_ROW};
