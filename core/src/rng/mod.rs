//! Generator implementations
//!
//! Each generator is a plain value owning its registers. Nothing is shared
//! between instances and nothing is hidden in statics: the only way to move
//! a generator forward is [`Generator::next_value`].
//!
//! Every type offers three constructors:
//! - a seeded constructor (the canonical seeding policy for the family)
//! - `reference()`, fixed registers matching the C reference drivers
//! - `from_registers()`, raw state for replay and known-answer testing

mod jsf;
mod minor;
mod pcg;
mod xorshift;
mod xoshiro;

pub use jsf::{Jsf, Jsf16, Jsf32, Jsf64, Jsf8, JsfWord, JSF_WARMUP_ROUNDS};
pub use minor::{Brad16, TzarcPrng, Xshift8};
pub use pcg::{
    Pcg, Pcg16, Pcg16Fast, Pcg32, Pcg32Fast, Pcg8, Pcg8Fast, Pcg8RxsM, PcgFast, PcgWord,
    MCG_WARMUP_ROUNDS,
};
pub use xorshift::{Xorshift128, Xorshift32, Xorshift64};
pub use xoshiro::{
    Scrambler, Xoroshiro128, Xoroshiro64, Xoroshiro64Scrambler, Xoshiro, Xoshiro128, Xoshiro256,
    XoshiroWord,
};

use crate::word::Word;

/// A deterministic generator producing one `Output` per step
pub trait Generator {
    /// Output word; may be narrower than the registers (PCG)
    type Output: Word;

    /// Produce the next output and advance the state
    fn next_value(&mut self) -> Self::Output;
}

/// splitmix64 seed expander
///
/// Turns one u64 seed into as many well-mixed words as a multi-register
/// generator needs.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Fill `N` registers of width W
    ///
    /// Narrow registers consume each 64-bit output low half first. The
    /// all-zero state is never returned.
    pub fn fill<W: Word, const N: usize>(&mut self) -> [W; N] {
        let per_draw = (64 / W::BITS) as usize;
        let mut regs = [W::ZERO; N];
        let mut draw = 0u64;
        for (i, reg) in regs.iter_mut().enumerate() {
            if i % per_draw == 0 {
                draw = self.next_u64();
            }
            let shift = (i % per_draw) as u32 * W::BITS;
            *reg = W::from_u64(draw >> shift);
        }
        if regs.iter().all(|r| *r == W::ZERO) {
            regs[0] = W::ONE;
        }
        regs
    }
}
