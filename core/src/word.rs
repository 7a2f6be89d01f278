//! Fixed-width register arithmetic
//!
//! Every generator in this crate is written against [`Word`] rather than a
//! concrete integer type, so a single rotate and a single set of wrapping
//! operations serve all of the 8/16/32/64-bit variants.
//!
//! # Width Invariant
//!
//! All arithmetic wraps modulo 2^W and every rotation happens at exactly W
//! bits. Rotating by `0` or by `W` is the identity.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, LowerHex};
use std::hash::Hash;
use std::ops::{BitOr, BitXor, Shl, Shr};

/// An unsigned register of fixed bit width.
pub trait Word:
    Copy
    + Eq
    + Hash
    + Default
    + Debug
    + LowerHex
    + BitXor<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Register width in bits
    const BITS: u32;
    /// Register width in bytes
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;

    /// Rotate left by `k` bits at width W
    fn rotl(self, k: u32) -> Self;

    /// Rotate right by `k` bits at width W
    fn rotr(self, k: u32) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Truncate a u64 to this width (keeps the low W bits)
    fn from_u64(value: u64) -> Self;

    /// Zero-extend to u64
    fn to_u64(self) -> u64;

    /// Append the little-endian encoding (exactly `BYTES` bytes)
    fn write_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const BYTES: usize = std::mem::size_of::<$t>();
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn rotl(self, k: u32) -> Self {
                    // rotate_left reduces k modulo BITS, so k == BITS is the identity
                    self.rotate_left(k)
                }

                #[inline]
                fn rotr(self, k: u32) -> Self {
                    self.rotate_right(k)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
