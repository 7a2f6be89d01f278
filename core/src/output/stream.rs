//! Raw and hex streams
//!
//! Binary output is each value's little-endian bytes, back to back, with no
//! framing: the shape PractRand and dieharder expect on stdin. Hex output is
//! a debugging aid, four zero-padded values per line.

use crate::error::Result;
use crate::registry::AnyGenerator;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Values per line in hex output
pub const HEX_VALUES_PER_ROW: usize = 4;

/// Values encoded per write call
const CHUNK_VALUES: u64 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamFormat {
    #[default]
    Binary,
    Hex,
}

/// `0x` + value zero-padded to the output width
pub fn format_hex(value: u64, bits: u32) -> String {
    format!("0x{:0width$x}", value, width = (bits / 4) as usize)
}

/// Write `limit` values (or until the writer fails when `None`)
///
/// Returns the number of values written. An unbounded stream only ends
/// with an error from the writer, typically a closed pipe.
pub fn write_stream<W: Write>(
    generator: &mut AnyGenerator,
    limit: Option<u64>,
    format: StreamFormat,
    writer: &mut W,
) -> Result<u64> {
    let bits = generator.output_bits();
    let width = generator.output_bytes();
    let mut written = 0u64;
    let mut column = 0usize;
    let mut bytes = Vec::new();
    let mut text = String::new();

    loop {
        let chunk = match limit {
            Some(limit) if written >= limit => break,
            Some(limit) => CHUNK_VALUES.min(limit - written),
            None => CHUNK_VALUES,
        };

        match format {
            StreamFormat::Binary => {
                bytes.resize(chunk as usize * width, 0);
                generator.fill_bytes(&mut bytes);
                writer.write_all(&bytes)?;
            }
            StreamFormat::Hex => {
                text.clear();
                for _ in 0..chunk {
                    if column > 0 {
                        text.push(' ');
                    }
                    text.push_str(&format_hex(generator.next_u64(), bits));
                    column += 1;
                    if column == HEX_VALUES_PER_ROW {
                        text.push('\n');
                        column = 0;
                    }
                }
                writer.write_all(text.as_bytes())?;
            }
        }
        written += chunk;
    }

    if column > 0 {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(written)
}
