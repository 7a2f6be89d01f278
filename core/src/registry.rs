//! Generator registry
//!
//! Maps stable string names onto a closed set of generators. Selecting by
//! name goes through [`GeneratorKind`], so an unknown name is rejected at the
//! boundary instead of silently falling back to some default generator.

use crate::error::{PrngError, Result};
use crate::rng::{
    Brad16, Generator, Jsf16, Jsf32, Jsf64, Jsf8, Pcg16, Pcg16Fast, Pcg32, Pcg32Fast, Pcg8,
    Pcg8Fast, Pcg8RxsM, Scrambler, TzarcPrng, Xoroshiro128, Xoroshiro64, Xoroshiro64Scrambler,
    Xorshift128, Xorshift32, Xorshift64, Xoshiro128, Xoshiro256, Xshift8,
};
use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm family of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Jsf,
    Pcg,
    Xorshift,
    Xoshiro,
    Minor,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Jsf => "jsf",
            Family::Pcg => "pcg",
            Family::Xorshift => "xorshift",
            Family::Xoshiro => "xoshiro",
            Family::Minor => "minor",
        };
        f.write_str(name)
    }
}

/// Every generator the registry knows, by stable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Pcg8,
    Pcg8Fast,
    Pcg8RxsM,
    Pcg16,
    Pcg16Fast,
    Pcg32,
    Pcg32Fast,
    Xorshift32,
    Xorshift64,
    Xorshift128,
    Xoshiro128ss,
    Xoshiro128pp,
    Xoshiro128p,
    Xoroshiro64ss,
    Xoroshiro64s,
    Xoshiro256ss,
    Xoshiro256pp,
    Xoshiro256p,
    Xoroshiro128ss,
    Xoroshiro128pp,
    Xoroshiro128p,
    Brad16,
    TzarcPrng,
    Xshift8,
    Jsf8,
    Jsf16,
    Jsf32,
    Jsf64,
}

impl GeneratorKind {
    /// All generators in catalogue order
    pub const ALL: [GeneratorKind; 28] = [
        GeneratorKind::Pcg8,
        GeneratorKind::Pcg8Fast,
        GeneratorKind::Pcg8RxsM,
        GeneratorKind::Pcg16,
        GeneratorKind::Pcg16Fast,
        GeneratorKind::Pcg32,
        GeneratorKind::Pcg32Fast,
        GeneratorKind::Xorshift32,
        GeneratorKind::Xorshift64,
        GeneratorKind::Xorshift128,
        GeneratorKind::Xoshiro128ss,
        GeneratorKind::Xoshiro128pp,
        GeneratorKind::Xoshiro128p,
        GeneratorKind::Xoroshiro64ss,
        GeneratorKind::Xoroshiro64s,
        GeneratorKind::Xoshiro256ss,
        GeneratorKind::Xoshiro256pp,
        GeneratorKind::Xoshiro256p,
        GeneratorKind::Xoroshiro128ss,
        GeneratorKind::Xoroshiro128pp,
        GeneratorKind::Xoroshiro128p,
        GeneratorKind::Brad16,
        GeneratorKind::TzarcPrng,
        GeneratorKind::Xshift8,
        GeneratorKind::Jsf8,
        GeneratorKind::Jsf16,
        GeneratorKind::Jsf32,
        GeneratorKind::Jsf64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Pcg8 => "pcg8",
            GeneratorKind::Pcg8Fast => "pcg8_fast",
            GeneratorKind::Pcg8RxsM => "pcg8_rxs_m",
            GeneratorKind::Pcg16 => "pcg16",
            GeneratorKind::Pcg16Fast => "pcg16_fast",
            GeneratorKind::Pcg32 => "pcg32",
            GeneratorKind::Pcg32Fast => "pcg32_fast",
            GeneratorKind::Xorshift32 => "xorshift32",
            GeneratorKind::Xorshift64 => "xorshift64",
            GeneratorKind::Xorshift128 => "xorshift128",
            GeneratorKind::Xoshiro128ss => "xoshiro128ss",
            GeneratorKind::Xoshiro128pp => "xoshiro128pp",
            GeneratorKind::Xoshiro128p => "xoshiro128p",
            GeneratorKind::Xoroshiro64ss => "xoroshiro64ss",
            GeneratorKind::Xoroshiro64s => "xoroshiro64s",
            GeneratorKind::Xoshiro256ss => "xoshiro256ss",
            GeneratorKind::Xoshiro256pp => "xoshiro256pp",
            GeneratorKind::Xoshiro256p => "xoshiro256p",
            GeneratorKind::Xoroshiro128ss => "xoroshiro128ss",
            GeneratorKind::Xoroshiro128pp => "xoroshiro128pp",
            GeneratorKind::Xoroshiro128p => "xoroshiro128p",
            GeneratorKind::Brad16 => "brad16",
            GeneratorKind::TzarcPrng => "tzarc_prng",
            GeneratorKind::Xshift8 => "xshift8",
            GeneratorKind::Jsf8 => "jsf8",
            GeneratorKind::Jsf16 => "jsf16",
            GeneratorKind::Jsf32 => "jsf32",
            GeneratorKind::Jsf64 => "jsf64",
        }
    }

    /// Width of one output value in bits
    pub fn output_bits(self) -> u32 {
        match self {
            GeneratorKind::Pcg8
            | GeneratorKind::Pcg8Fast
            | GeneratorKind::Pcg8RxsM
            | GeneratorKind::TzarcPrng
            | GeneratorKind::Xshift8
            | GeneratorKind::Jsf8 => 8,
            GeneratorKind::Pcg16
            | GeneratorKind::Pcg16Fast
            | GeneratorKind::Brad16
            | GeneratorKind::Jsf16 => 16,
            GeneratorKind::Pcg32
            | GeneratorKind::Pcg32Fast
            | GeneratorKind::Xorshift32
            | GeneratorKind::Xorshift128
            | GeneratorKind::Xoshiro128ss
            | GeneratorKind::Xoshiro128pp
            | GeneratorKind::Xoshiro128p
            | GeneratorKind::Xoroshiro64ss
            | GeneratorKind::Xoroshiro64s
            | GeneratorKind::Jsf32 => 32,
            GeneratorKind::Xorshift64
            | GeneratorKind::Xoshiro256ss
            | GeneratorKind::Xoshiro256pp
            | GeneratorKind::Xoshiro256p
            | GeneratorKind::Xoroshiro128ss
            | GeneratorKind::Xoroshiro128pp
            | GeneratorKind::Xoroshiro128p
            | GeneratorKind::Jsf64 => 64,
        }
    }

    pub fn family(self) -> Family {
        match self {
            GeneratorKind::Jsf8 | GeneratorKind::Jsf16 | GeneratorKind::Jsf32 | GeneratorKind::Jsf64 => {
                Family::Jsf
            }
            GeneratorKind::Pcg8
            | GeneratorKind::Pcg8Fast
            | GeneratorKind::Pcg8RxsM
            | GeneratorKind::Pcg16
            | GeneratorKind::Pcg16Fast
            | GeneratorKind::Pcg32
            | GeneratorKind::Pcg32Fast => Family::Pcg,
            GeneratorKind::Xorshift32 | GeneratorKind::Xorshift64 | GeneratorKind::Xorshift128 => {
                Family::Xorshift
            }
            GeneratorKind::Xoshiro128ss
            | GeneratorKind::Xoshiro128pp
            | GeneratorKind::Xoshiro128p
            | GeneratorKind::Xoroshiro64ss
            | GeneratorKind::Xoroshiro64s
            | GeneratorKind::Xoshiro256ss
            | GeneratorKind::Xoshiro256pp
            | GeneratorKind::Xoshiro256p
            | GeneratorKind::Xoroshiro128ss
            | GeneratorKind::Xoroshiro128pp
            | GeneratorKind::Xoroshiro128p => Family::Xoshiro,
            GeneratorKind::Brad16 | GeneratorKind::TzarcPrng | GeneratorKind::Xshift8 => {
                Family::Minor
            }
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = PrngError;

    fn from_str(s: &str) -> Result<Self> {
        GeneratorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PrngError::UnknownGenerator(s.to_string()))
    }
}

/// Any registered generator, with its state
///
/// Serializes as `{"<variant>": {<registers>}}`, which is what checkpoints
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyGenerator {
    Jsf8(Jsf8),
    Jsf16(Jsf16),
    Jsf32(Jsf32),
    Jsf64(Jsf64),
    Pcg8(Pcg8),
    Pcg8Fast(Pcg8Fast),
    Pcg8RxsM(Pcg8RxsM),
    Pcg16(Pcg16),
    Pcg16Fast(Pcg16Fast),
    Pcg32(Pcg32),
    Pcg32Fast(Pcg32Fast),
    Xorshift32(Xorshift32),
    Xorshift64(Xorshift64),
    Xorshift128(Xorshift128),
    Xoshiro128(Xoshiro128),
    Xoshiro256(Xoshiro256),
    Xoroshiro64(Xoroshiro64),
    Xoroshiro128(Xoroshiro128),
    Brad16(Brad16),
    TzarcPrng(TzarcPrng),
    Xshift8(Xshift8),
}

macro_rules! dispatch {
    ($value:expr, $g:ident => $body:expr) => {
        match $value {
            AnyGenerator::Jsf8($g) => $body,
            AnyGenerator::Jsf16($g) => $body,
            AnyGenerator::Jsf32($g) => $body,
            AnyGenerator::Jsf64($g) => $body,
            AnyGenerator::Pcg8($g) => $body,
            AnyGenerator::Pcg8Fast($g) => $body,
            AnyGenerator::Pcg8RxsM($g) => $body,
            AnyGenerator::Pcg16($g) => $body,
            AnyGenerator::Pcg16Fast($g) => $body,
            AnyGenerator::Pcg32($g) => $body,
            AnyGenerator::Pcg32Fast($g) => $body,
            AnyGenerator::Xorshift32($g) => $body,
            AnyGenerator::Xorshift64($g) => $body,
            AnyGenerator::Xorshift128($g) => $body,
            AnyGenerator::Xoshiro128($g) => $body,
            AnyGenerator::Xoshiro256($g) => $body,
            AnyGenerator::Xoroshiro64($g) => $body,
            AnyGenerator::Xoroshiro128($g) => $body,
            AnyGenerator::Brad16($g) => $body,
            AnyGenerator::TzarcPrng($g) => $body,
            AnyGenerator::Xshift8($g) => $body,
        }
    };
}

impl AnyGenerator {
    /// Create a generator seeded with the family's canonical policy
    ///
    /// Seeds wider than the registers are wrapped, never rejected.
    ///
    /// # Example
    /// ```
    /// use prngzoo_core::{AnyGenerator, GeneratorKind};
    ///
    /// let mut a = AnyGenerator::seeded(GeneratorKind::Jsf64, 12345);
    /// let mut b = AnyGenerator::seeded(GeneratorKind::Jsf64, 12345);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn seeded(kind: GeneratorKind, seed: u64) -> Self {
        tracing::debug!(generator = %kind, seed, "seeding generator");
        match kind {
            GeneratorKind::Pcg8 => AnyGenerator::Pcg8(Pcg8::seeded(seed)),
            GeneratorKind::Pcg8Fast => AnyGenerator::Pcg8Fast(Pcg8Fast::new(seed)),
            GeneratorKind::Pcg8RxsM => AnyGenerator::Pcg8RxsM(Pcg8RxsM::new(seed)),
            GeneratorKind::Pcg16 => AnyGenerator::Pcg16(Pcg16::seeded(seed)),
            GeneratorKind::Pcg16Fast => AnyGenerator::Pcg16Fast(Pcg16Fast::new(seed)),
            GeneratorKind::Pcg32 => AnyGenerator::Pcg32(Pcg32::seeded(seed)),
            GeneratorKind::Pcg32Fast => AnyGenerator::Pcg32Fast(Pcg32Fast::new(seed)),
            GeneratorKind::Xorshift32 => AnyGenerator::Xorshift32(Xorshift32::new(seed)),
            GeneratorKind::Xorshift64 => AnyGenerator::Xorshift64(Xorshift64::new(seed)),
            GeneratorKind::Xorshift128 => AnyGenerator::Xorshift128(Xorshift128::new(seed)),
            GeneratorKind::Xoshiro128ss => {
                AnyGenerator::Xoshiro128(Xoshiro128::new(seed, Scrambler::StarStar))
            }
            GeneratorKind::Xoshiro128pp => {
                AnyGenerator::Xoshiro128(Xoshiro128::new(seed, Scrambler::PlusPlus))
            }
            GeneratorKind::Xoshiro128p => {
                AnyGenerator::Xoshiro128(Xoshiro128::new(seed, Scrambler::Plus))
            }
            GeneratorKind::Xoroshiro64ss => AnyGenerator::Xoroshiro64(Xoroshiro64::new(
                seed,
                Xoroshiro64Scrambler::StarStar,
            )),
            GeneratorKind::Xoroshiro64s => {
                AnyGenerator::Xoroshiro64(Xoroshiro64::new(seed, Xoroshiro64Scrambler::Star))
            }
            GeneratorKind::Xoshiro256ss => {
                AnyGenerator::Xoshiro256(Xoshiro256::new(seed, Scrambler::StarStar))
            }
            GeneratorKind::Xoshiro256pp => {
                AnyGenerator::Xoshiro256(Xoshiro256::new(seed, Scrambler::PlusPlus))
            }
            GeneratorKind::Xoshiro256p => {
                AnyGenerator::Xoshiro256(Xoshiro256::new(seed, Scrambler::Plus))
            }
            GeneratorKind::Xoroshiro128ss => {
                AnyGenerator::Xoroshiro128(Xoroshiro128::new(seed, Scrambler::StarStar))
            }
            GeneratorKind::Xoroshiro128pp => {
                AnyGenerator::Xoroshiro128(Xoroshiro128::new(seed, Scrambler::PlusPlus))
            }
            GeneratorKind::Xoroshiro128p => {
                AnyGenerator::Xoroshiro128(Xoroshiro128::new(seed, Scrambler::Plus))
            }
            GeneratorKind::Brad16 => AnyGenerator::Brad16(Brad16::new(seed)),
            GeneratorKind::TzarcPrng => AnyGenerator::TzarcPrng(TzarcPrng::new(seed)),
            GeneratorKind::Xshift8 => AnyGenerator::Xshift8(Xshift8::new(seed)),
            GeneratorKind::Jsf8 => AnyGenerator::Jsf8(Jsf8::new(seed)),
            GeneratorKind::Jsf16 => AnyGenerator::Jsf16(Jsf16::new(seed)),
            GeneratorKind::Jsf32 => AnyGenerator::Jsf32(Jsf32::new(seed)),
            GeneratorKind::Jsf64 => AnyGenerator::Jsf64(Jsf64::new(seed)),
        }
    }

    /// Create a generator from its fixed reference registers
    pub fn reference(kind: GeneratorKind) -> Self {
        tracing::debug!(generator = %kind, "using reference registers");
        match kind {
            GeneratorKind::Pcg8 => AnyGenerator::Pcg8(Pcg8::reference()),
            GeneratorKind::Pcg8Fast => AnyGenerator::Pcg8Fast(Pcg8Fast::reference()),
            GeneratorKind::Pcg8RxsM => AnyGenerator::Pcg8RxsM(Pcg8RxsM::reference()),
            GeneratorKind::Pcg16 => AnyGenerator::Pcg16(Pcg16::reference()),
            GeneratorKind::Pcg16Fast => AnyGenerator::Pcg16Fast(Pcg16Fast::reference()),
            GeneratorKind::Pcg32 => AnyGenerator::Pcg32(Pcg32::reference()),
            GeneratorKind::Pcg32Fast => AnyGenerator::Pcg32Fast(Pcg32Fast::reference()),
            GeneratorKind::Xorshift32 => AnyGenerator::Xorshift32(Xorshift32::reference()),
            GeneratorKind::Xorshift64 => AnyGenerator::Xorshift64(Xorshift64::reference()),
            GeneratorKind::Xorshift128 => AnyGenerator::Xorshift128(Xorshift128::reference()),
            GeneratorKind::Xoshiro128ss => {
                AnyGenerator::Xoshiro128(Xoshiro128::reference(Scrambler::StarStar))
            }
            GeneratorKind::Xoshiro128pp => {
                AnyGenerator::Xoshiro128(Xoshiro128::reference(Scrambler::PlusPlus))
            }
            GeneratorKind::Xoshiro128p => {
                AnyGenerator::Xoshiro128(Xoshiro128::reference(Scrambler::Plus))
            }
            GeneratorKind::Xoroshiro64ss => {
                AnyGenerator::Xoroshiro64(Xoroshiro64::reference(Xoroshiro64Scrambler::StarStar))
            }
            GeneratorKind::Xoroshiro64s => {
                AnyGenerator::Xoroshiro64(Xoroshiro64::reference(Xoroshiro64Scrambler::Star))
            }
            GeneratorKind::Xoshiro256ss => {
                AnyGenerator::Xoshiro256(Xoshiro256::reference(Scrambler::StarStar))
            }
            GeneratorKind::Xoshiro256pp => {
                AnyGenerator::Xoshiro256(Xoshiro256::reference(Scrambler::PlusPlus))
            }
            GeneratorKind::Xoshiro256p => {
                AnyGenerator::Xoshiro256(Xoshiro256::reference(Scrambler::Plus))
            }
            GeneratorKind::Xoroshiro128ss => {
                AnyGenerator::Xoroshiro128(Xoroshiro128::reference(Scrambler::StarStar))
            }
            GeneratorKind::Xoroshiro128pp => {
                AnyGenerator::Xoroshiro128(Xoroshiro128::reference(Scrambler::PlusPlus))
            }
            GeneratorKind::Xoroshiro128p => {
                AnyGenerator::Xoroshiro128(Xoroshiro128::reference(Scrambler::Plus))
            }
            GeneratorKind::Brad16 => AnyGenerator::Brad16(Brad16::reference()),
            GeneratorKind::TzarcPrng => AnyGenerator::TzarcPrng(TzarcPrng::reference()),
            GeneratorKind::Xshift8 => AnyGenerator::Xshift8(Xshift8::reference()),
            GeneratorKind::Jsf8 => AnyGenerator::Jsf8(Jsf8::reference()),
            GeneratorKind::Jsf16 => AnyGenerator::Jsf16(Jsf16::reference()),
            GeneratorKind::Jsf32 => AnyGenerator::Jsf32(Jsf32::reference()),
            GeneratorKind::Jsf64 => AnyGenerator::Jsf64(Jsf64::reference()),
        }
    }

    /// Look up `name` and seed it
    pub fn from_name(name: &str, seed: u64) -> Result<Self> {
        let kind: GeneratorKind = name.parse()?;
        Ok(Self::seeded(kind, seed))
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            AnyGenerator::Jsf8(_) => GeneratorKind::Jsf8,
            AnyGenerator::Jsf16(_) => GeneratorKind::Jsf16,
            AnyGenerator::Jsf32(_) => GeneratorKind::Jsf32,
            AnyGenerator::Jsf64(_) => GeneratorKind::Jsf64,
            AnyGenerator::Pcg8(_) => GeneratorKind::Pcg8,
            AnyGenerator::Pcg8Fast(_) => GeneratorKind::Pcg8Fast,
            AnyGenerator::Pcg8RxsM(_) => GeneratorKind::Pcg8RxsM,
            AnyGenerator::Pcg16(_) => GeneratorKind::Pcg16,
            AnyGenerator::Pcg16Fast(_) => GeneratorKind::Pcg16Fast,
            AnyGenerator::Pcg32(_) => GeneratorKind::Pcg32,
            AnyGenerator::Pcg32Fast(_) => GeneratorKind::Pcg32Fast,
            AnyGenerator::Xorshift32(_) => GeneratorKind::Xorshift32,
            AnyGenerator::Xorshift64(_) => GeneratorKind::Xorshift64,
            AnyGenerator::Xorshift128(_) => GeneratorKind::Xorshift128,
            AnyGenerator::Xoshiro128(g) => match g.scrambler() {
                Scrambler::StarStar => GeneratorKind::Xoshiro128ss,
                Scrambler::PlusPlus => GeneratorKind::Xoshiro128pp,
                Scrambler::Plus => GeneratorKind::Xoshiro128p,
            },
            AnyGenerator::Xoshiro256(g) => match g.scrambler() {
                Scrambler::StarStar => GeneratorKind::Xoshiro256ss,
                Scrambler::PlusPlus => GeneratorKind::Xoshiro256pp,
                Scrambler::Plus => GeneratorKind::Xoshiro256p,
            },
            AnyGenerator::Xoroshiro64(g) => match g.scrambler() {
                Xoroshiro64Scrambler::StarStar => GeneratorKind::Xoroshiro64ss,
                Xoroshiro64Scrambler::Star => GeneratorKind::Xoroshiro64s,
            },
            AnyGenerator::Xoroshiro128(g) => match g.scrambler() {
                Scrambler::StarStar => GeneratorKind::Xoroshiro128ss,
                Scrambler::PlusPlus => GeneratorKind::Xoroshiro128pp,
                Scrambler::Plus => GeneratorKind::Xoroshiro128p,
            },
            AnyGenerator::Brad16(_) => GeneratorKind::Brad16,
            AnyGenerator::TzarcPrng(_) => GeneratorKind::TzarcPrng,
            AnyGenerator::Xshift8(_) => GeneratorKind::Xshift8,
        }
    }

    pub fn output_bits(&self) -> u32 {
        self.kind().output_bits()
    }

    /// Width of one output value in bytes
    pub fn output_bytes(&self) -> usize {
        (self.output_bits() / 8) as usize
    }

    /// Next output, zero-extended to u64
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        dispatch!(self, g => g.next_value().to_u64())
    }

    /// Low byte of the next output
    ///
    /// This is the pixel source handed to the image writer.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.next_u64() as u8
    }

    /// Append the next output as `output_bytes()` little-endian bytes
    #[inline]
    pub fn write_next_le(&mut self, out: &mut Vec<u8>) {
        dispatch!(self, g => g.next_value().write_le(out))
    }

    /// Fill `dest` with the little-endian output stream
    ///
    /// A trailing partial value is truncated; its remaining bytes are lost.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut scratch = Vec::with_capacity(8);
        for chunk in dest.chunks_mut(self.output_bytes()) {
            scratch.clear();
            self.write_next_le(&mut scratch);
            chunk.copy_from_slice(&scratch[..chunk.len()]);
        }
    }

    /// Describe registers no constructor could have produced, if any
    ///
    /// Deserialization fills registers as-is, so restored state is checked
    /// here: a zero xorshift-style state never leaves zero, and PCG needs an
    /// odd increment (LCG) or an odd state (MCG).
    pub fn degenerate_state(&self) -> Option<String> {
        let even = |word: u64| word & 1 == 0;
        let problem = match self {
            AnyGenerator::Pcg8(g) => even(g.registers()[1].to_u64()).then_some("even increment"),
            AnyGenerator::Pcg16(g) => even(g.registers()[1].to_u64()).then_some("even increment"),
            AnyGenerator::Pcg32(g) => even(g.registers()[1].to_u64()).then_some("even increment"),
            AnyGenerator::Pcg8Fast(g) => even(g.registers()[0].to_u64()).then_some("even state"),
            AnyGenerator::Pcg16Fast(g) => even(g.registers()[0].to_u64()).then_some("even state"),
            AnyGenerator::Pcg32Fast(g) => even(g.registers()[0].to_u64()).then_some("even state"),
            AnyGenerator::Pcg8RxsM(g) => even(g.registers()[0].to_u64()).then_some("even state"),
            AnyGenerator::Jsf8(g) => all_zero(&g.registers()),
            AnyGenerator::Jsf16(g) => all_zero(&g.registers()),
            AnyGenerator::Jsf32(g) => all_zero(&g.registers()),
            AnyGenerator::Jsf64(g) => all_zero(&g.registers()),
            AnyGenerator::Xorshift32(g) => all_zero(&g.registers()),
            AnyGenerator::Xorshift64(g) => all_zero(&g.registers()),
            AnyGenerator::Xorshift128(g) => all_zero(&g.registers()),
            AnyGenerator::Xoshiro128(g) => all_zero(&g.registers()),
            AnyGenerator::Xoshiro256(g) => all_zero(&g.registers()),
            AnyGenerator::Xoroshiro64(g) => all_zero(&g.registers()),
            AnyGenerator::Xoroshiro128(g) => all_zero(&g.registers()),
            AnyGenerator::Brad16(g) => all_zero(&g.registers()),
            AnyGenerator::Xshift8(g) => all_zero(&g.registers()),
            // the counter keeps it moving
            AnyGenerator::TzarcPrng(_) => None,
        };
        problem.map(|what| format!("{} registers hold an {}", self.kind(), what))
    }
}

fn all_zero<W: Word>(regs: &[W]) -> Option<&'static str> {
    regs.iter()
        .all(|w| w.to_u64() == 0)
        .then_some("all-zero state")
}

impl Iterator for AnyGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }
}
