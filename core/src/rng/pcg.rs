//! Permuted congruential generators (PCG)
//!
//! The internal state is twice the output width. Two forms are provided and
//! they are not interchangeable:
//!
//! - [`Pcg`]: LCG step (`state * M + inc`, `inc` always odd) with the XSH-RR
//!   output permutation. Exposed as `pcg8`, `pcg16`, `pcg32`.
//! - [`PcgFast`]: MCG step (`state * M`, no increment) with the XSH-RS
//!   permutation. Faster, statistically weaker. Exposed as the `_fast` names.
//! - [`Pcg8RxsM`]: the 16-bit MCG with the RXS-M permutation, `pcg8_rxs_m`.
//!
//! Every permutation reads the state *before* the step. Seeded MCGs discard
//! their first [`MCG_WARMUP_ROUNDS`] outputs.
//!
//! Derived from pcg-c: <https://www.pcg-random.org/download.html>

use super::Generator;
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Outputs discarded after seeding an MCG
///
/// An MCG state seeded from a small integer stays small for the first few
/// multiplications, and the high bits the permutations read are all zero.
pub const MCG_WARMUP_ROUNDS: usize = 20;

/// RXS-M multiplier for 16-bit state
const RXS_M_MULTIPLIER_16: u16 = 62169;

/// Per-state-width PCG constants
pub trait PcgWord: Word {
    /// Output word, half the state width
    type Half: Word;

    const MULTIPLIER: Self;
    /// pcg-c default increment, used as the stream for plain u64 seeds
    const DEFAULT_INCREMENT: Self;
    /// XSH-RR `(xorshift, shift, rotate source)` amounts
    const XSH_RR: (u32, u32, u32);
    /// XSH-RS `(xorshift, shift source, base shift)` amounts
    const XSH_RS: (u32, u32, u32);
    /// Fixed `(state, inc)` of the LCG reference stream
    const REFERENCE_LCG: (Self, Self);
    /// Fixed state of the MCG reference stream
    const REFERENCE_MCG: Self;
}

impl PcgWord for u16 {
    type Half = u8;
    const MULTIPLIER: Self = 12829;
    const DEFAULT_INCREMENT: Self = 47989;
    const XSH_RR: (u32, u32, u32) = (5, 5, 13);
    const XSH_RS: (u32, u32, u32) = (7, 14, 3);
    const REFERENCE_LCG: (Self, Self) = (0x9af1, 0x0527);
    const REFERENCE_MCG: Self = 0x1091;
}

impl PcgWord for u32 {
    type Half = u16;
    const MULTIPLIER: Self = 747_796_405;
    const DEFAULT_INCREMENT: Self = 2_891_336_453;
    const XSH_RR: (u32, u32, u32) = (10, 12, 28);
    const XSH_RS: (u32, u32, u32) = (11, 30, 11);
    const REFERENCE_LCG: (Self, Self) = (0xdc38_4d8b, 0xbb7d_c6ef);
    const REFERENCE_MCG: Self = 0x8fe2_b20f;
}

impl PcgWord for u64 {
    type Half = u32;
    const MULTIPLIER: Self = 6_364_136_223_846_793_005;
    const DEFAULT_INCREMENT: Self = 1_442_695_040_888_963_407;
    const XSH_RR: (u32, u32, u32) = (18, 27, 59);
    const XSH_RS: (u32, u32, u32) = (22, 61, 22);
    const REFERENCE_LCG: (Self, Self) = (0x3852_30e7_9de9_9aa9, 0xaffa_9d76_0680_f66d);
    const REFERENCE_MCG: Self = 0x2c13_ae4b_be60_e39d;
}

/// xorshift high bits down, then rotate right by the top bits of the state
#[inline]
pub(crate) fn output_xsh_rr<S: PcgWord>(x: S) -> S::Half {
    let (xorshift, shift, rot_src) = S::XSH_RR;
    let value = <S::Half as Word>::from_u64((((x >> xorshift) ^ x) >> shift).to_u64());
    let rot = (x >> rot_src).to_u64() as u32;
    value.rotr(rot)
}

/// xorshift high bits down, then shift right by an amount from the top bits
#[inline]
pub(crate) fn output_xsh_rs<S: PcgWord>(x: S) -> S::Half {
    let (xorshift, shift_src, base) = S::XSH_RS;
    let shift = (x >> shift_src).to_u64() as u32 + base;
    <S::Half as Word>::from_u64((((x >> xorshift) ^ x) >> shift).to_u64())
}

/// LCG-based PCG with XSH-RR output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcg<S> {
    state: S,
    inc: S,
}

pub type Pcg8 = Pcg<u16>;
pub type Pcg16 = Pcg<u32>;
pub type Pcg32 = Pcg<u64>;

impl<S: PcgWord> Pcg<S> {
    /// pcg-c `srandom_r`: select stream, step, add `initstate`, step
    pub fn new(initstate: u64, initseq: u64) -> Self {
        let mut rng = Self {
            state: S::ZERO,
            inc: S::from_u64((initseq << 1) | 1),
        };
        rng.step();
        rng.state = rng.state.wrapping_add(S::from_u64(initstate));
        rng.step();
        rng
    }

    /// Seed on the default stream for this width
    pub fn seeded(seed: u64) -> Self {
        Self::new(seed, S::DEFAULT_INCREMENT.to_u64() >> 1)
    }

    pub fn reference() -> Self {
        let (state, inc) = S::REFERENCE_LCG;
        Self::from_registers([state, inc])
    }

    /// Restore `[state, inc]`; the increment is forced odd
    pub fn from_registers(regs: [S; 2]) -> Self {
        Self {
            state: regs[0],
            inc: regs[1] | S::ONE,
        }
    }

    pub fn registers(&self) -> [S; 2] {
        [self.state, self.inc]
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(S::MULTIPLIER)
            .wrapping_add(self.inc);
    }
}

impl<S: PcgWord> Generator for Pcg<S> {
    type Output = S::Half;

    #[inline]
    fn next_value(&mut self) -> S::Half {
        let old = self.state;
        self.step();
        output_xsh_rr(old)
    }
}

/// MCG-based PCG with XSH-RS output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcgFast<S> {
    state: S,
}

pub type Pcg8Fast = PcgFast<u16>;
pub type Pcg16Fast = PcgFast<u32>;
pub type Pcg32Fast = PcgFast<u64>;

impl<S: PcgWord> PcgFast<S> {
    /// Force the state odd, then discard [`MCG_WARMUP_ROUNDS`] outputs
    pub fn new(initstate: u64) -> Self {
        let mut rng = Self::from_registers([S::from_u64(initstate)]);
        for _ in 0..MCG_WARMUP_ROUNDS {
            rng.next_value();
        }
        rng
    }

    pub fn reference() -> Self {
        Self::from_registers([S::REFERENCE_MCG])
    }

    /// Restore `[state]`; the state is forced odd
    pub fn from_registers(regs: [S; 1]) -> Self {
        Self {
            state: regs[0] | S::ONE,
        }
    }

    pub fn registers(&self) -> [S; 1] {
        [self.state]
    }
}

impl<S: PcgWord> Generator for PcgFast<S> {
    type Output = S::Half;

    #[inline]
    fn next_value(&mut self) -> S::Half {
        let old = self.state;
        self.state = old.wrapping_mul(S::MULTIPLIER);
        output_xsh_rs(old)
    }
}

/// random xorshift by the top bits, multiply, keep the high byte
#[inline]
pub(crate) fn output_rxs_m_16(x: u16) -> u8 {
    let shift = u32::from(x >> 13) + 3;
    (((x >> shift) ^ x).wrapping_mul(RXS_M_MULTIPLIER_16) >> 8) as u8
}

/// 16-bit MCG with RXS-M output
///
/// Same state and step as [`Pcg8Fast`], with the multiplying permutation in
/// place of XSH-RS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcg8RxsM {
    state: u16,
}

impl Pcg8RxsM {
    /// Seeded exactly like [`PcgFast::new`]
    pub fn new(initstate: u64) -> Self {
        let mut rng = Self::from_registers([initstate as u16]);
        for _ in 0..MCG_WARMUP_ROUNDS {
            rng.next_value();
        }
        rng
    }

    pub fn reference() -> Self {
        Self::from_registers([<u16 as PcgWord>::REFERENCE_MCG])
    }

    /// Restore `[state]`; the state is forced odd
    pub fn from_registers(regs: [u16; 1]) -> Self {
        Self { state: regs[0] | 1 }
    }

    pub fn registers(&self) -> [u16; 1] {
        [self.state]
    }
}

impl Generator for Pcg8RxsM {
    type Output = u8;

    #[inline]
    fn next_value(&mut self) -> u8 {
        let old = self.state;
        self.state = old.wrapping_mul(<u16 as PcgWord>::MULTIPLIER);
        output_rxs_m_16(old)
    }
}
