//! Small ad hoc xorshift-style generators
//!
//! Kept for comparison with the named families. None of these come from a
//! published analysis and all have known weaknesses; do not use them where
//! quality matters.

use super::Generator;
use serde::{Deserialize, Serialize};

/// Brad Forschinger's 16-bit xorshift
///
/// <http://b2d-f9r.blogspot.com/2010/08/16-bit-xorshift-rng-now-with-more.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brad16 {
    x: u16,
    y: u16,
}

impl Brad16 {
    /// `x` takes the low 16 bits of the seed, `y` the next 16
    pub fn new(seed: u64) -> Self {
        let x = seed as u16;
        let y = (seed >> 16) as u16;
        if x == 0 && y == 0 {
            return Self::reference();
        }
        Self { x, y }
    }

    pub fn reference() -> Self {
        Self { x: 1, y: 1 }
    }

    pub fn from_registers(regs: [u16; 2]) -> Self {
        Self {
            x: regs[0],
            y: regs[1],
        }
    }

    pub fn registers(&self) -> [u16; 2] {
        [self.x, self.y]
    }
}

impl Generator for Brad16 {
    type Output = u16;

    #[inline]
    fn next_value(&mut self) -> u16 {
        let t = self.x ^ (self.x << 5);
        self.x = self.y;
        self.y = (self.y ^ (self.y >> 13)) ^ (t ^ (t >> 3));
        self.y
    }
}

/// @tzarc's 8-bit xorshift with a counter mixed in
///
/// Produces a minor repeated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TzarcPrng {
    s: u8,
    counter: u8,
}

impl TzarcPrng {
    pub fn new(seed: u64) -> Self {
        Self {
            s: seed as u8,
            counter: 0,
        }
    }

    pub fn reference() -> Self {
        Self { s: 0xaa, counter: 0 }
    }

    /// Restore `[s, counter]`
    pub fn from_registers(regs: [u8; 2]) -> Self {
        Self {
            s: regs[0],
            counter: regs[1],
        }
    }

    pub fn registers(&self) -> [u8; 2] {
        [self.s, self.counter]
    }
}

impl Generator for TzarcPrng {
    type Output = u8;

    #[inline]
    fn next_value(&mut self) -> u8 {
        let mut s = self.s;
        s ^= s << 3;
        s ^= s >> 5;
        s ^= self.counter >> 2;
        self.counter = self.counter.wrapping_add(1);
        self.s = s;
        s
    }
}

/// Four-register 8-bit xorshift
///
/// <https://github.com/edrosten/8bit_rng>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xshift8 {
    x: u8,
    y: u8,
    z: u8,
    a: u8,
}

impl Xshift8 {
    /// Registers take the four low bytes of the seed
    pub fn new(seed: u64) -> Self {
        let [x, y, z, a, ..] = seed.to_le_bytes();
        if [x, y, z, a] == [0; 4] {
            return Self::reference();
        }
        Self { x, y, z, a }
    }

    pub fn reference() -> Self {
        Self {
            x: 0,
            y: 0,
            z: 0,
            a: 1,
        }
    }

    pub fn from_registers(regs: [u8; 4]) -> Self {
        let [x, y, z, a] = regs;
        Self { x, y, z, a }
    }

    pub fn registers(&self) -> [u8; 4] {
        [self.x, self.y, self.z, self.a]
    }
}

impl Generator for Xshift8 {
    type Output = u8;

    #[inline]
    fn next_value(&mut self) -> u8 {
        let t = self.x ^ (self.x << 5);
        self.x = self.y;
        self.y = self.z;
        self.z = self.a;
        self.a = self.z ^ (self.z >> 1) ^ t ^ (t << 3);
        self.a
    }
}
