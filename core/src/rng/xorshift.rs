//! George Marsaglia's xorshift generators
//!
//! Plain shift-register generators: every step is three xorshifts of the
//! register, and the updated register is the output.
//!
//! # Algorithm
//!
//! - xorshift32: shift triple (13, 17, 5)
//! - xorshift64: shift triple (13, 7, 17)
//! - xorshift128: four 32-bit registers in a shift-register arrangement
//!
//! # Zero State
//!
//! All-zero is a fixed point of every xorshift. Seeding never produces it:
//! a zero seed is replaced by 1, and the multi-register form is expanded
//! through splitmix64 which guards the all-zero case.

use super::{Generator, SplitMix64};
use serde::{Deserialize, Serialize};

/// 32-bit xorshift
///
/// # Example
/// ```
/// use prngzoo_core::rng::{Generator, Xorshift32};
///
/// let mut rng = Xorshift32::new(12345);
/// let value = rng.next_value();
/// assert_ne!(value, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create from a seed wrapped to 32 bits
    ///
    /// A seed that wraps to zero becomes 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let seed = seed as u32;
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn reference() -> Self {
        Self { state: 0xe326_df69 }
    }

    pub fn from_registers(regs: [u32; 1]) -> Self {
        Self { state: regs[0] }
    }

    /// Current register (for checkpointing/replay)
    pub fn registers(&self) -> [u32; 1] {
        [self.state]
    }
}

impl Generator for Xorshift32 {
    type Output = u32;

    #[inline]
    fn next_value(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

/// 64-bit xorshift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Create a new generator with the given seed
    ///
    /// # Example
    /// ```
    /// use prngzoo_core::rng::Xorshift64;
    ///
    /// let rng = Xorshift64::new(0);
    /// assert_eq!(rng.registers(), [1]);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn reference() -> Self {
        Self {
            state: 0xa87b_f8a7_5716_4547,
        }
    }

    pub fn from_registers(regs: [u64; 1]) -> Self {
        Self { state: regs[0] }
    }

    pub fn registers(&self) -> [u64; 1] {
        [self.state]
    }
}

impl Generator for Xorshift64 {
    type Output = u64;

    #[inline]
    fn next_value(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// 128-bit xorshift over four 32-bit registers
///
/// `x[0]` holds the newest word. Each step shifts the registers down one
/// slot and computes a new `x[0]` from the oldest word `x[3]` and the
/// previous newest `x[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift128 {
    x: [u32; 4],
}

impl Xorshift128 {
    pub fn new(seed: u64) -> Self {
        Self {
            x: SplitMix64::new(seed).fill(),
        }
    }

    pub fn reference() -> Self {
        Self {
            x: [0xd2b9_a87b, 0xec2c_f2be, 0xdc31_7cfe, 0x350a_d9e0],
        }
    }

    pub fn from_registers(regs: [u32; 4]) -> Self {
        Self { x: regs }
    }

    pub fn registers(&self) -> [u32; 4] {
        self.x
    }
}

impl Generator for Xorshift128 {
    type Output = u32;

    #[inline]
    fn next_value(&mut self) -> u32 {
        let mut t = self.x[3];
        let s = self.x[0];
        self.x[3] = self.x[2];
        self.x[2] = self.x[1];
        self.x[1] = s;

        t ^= t << 11;
        t ^= t >> 8;
        self.x[0] = t ^ s ^ (s >> 19);
        self.x[0]
    }
}
