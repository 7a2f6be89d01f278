//! prngzoo core - small non-cryptographic PRNGs
//!
//! Reference implementations of JSF, PCG, xorshift, xoshiro/xoroshiro and a
//! few ad hoc xorshift variants, with bit-for-bit reproducible output.
//!
//! # Architecture
//!
//! - **word**: width-generic register arithmetic (rotate, wrapping ops)
//! - **rng**: the generators, each an explicit state value
//! - **registry**: name → generator mapping and the `AnyGenerator` enum
//! - **checkpoint**: JSON save/restore of generator state
//! - **output**: raw/hex streams and BMP noise images
//!
//! # Critical Invariants
//!
//! 1. Same generator + same seed → same output sequence
//! 2. All register arithmetic wraps at exactly the register width
//! 3. Nothing here is cryptographically secure

// Module declarations
pub mod checkpoint;
pub mod error;
pub mod output;
pub mod registry;
pub mod rng;
pub mod word;

// Re-exports for convenience
pub use checkpoint::Checkpoint;
pub use error::{PrngError, Result};
pub use output::{ColorMode, ImageConfig, StreamFormat};
pub use registry::{AnyGenerator, Family, GeneratorKind};
pub use rng::Generator;
pub use word::Word;
