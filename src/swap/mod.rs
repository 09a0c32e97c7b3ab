// src/swap/mod.rs
//! Byte-reversal primitives for 16, 32 and 64-bit integers.
//!
//! Both implementations are always compiled. The crate-level `swap16`,
//! `swap32` and `swap64` are whichever one the build selected (see
//! [`crate::platform::STRATEGY`]); their outputs are identical.

pub mod intrinsic;
pub mod portable;

#[cfg(not(feature = "portable"))]
pub use intrinsic::{swap16, swap32, swap64};
#[cfg(feature = "portable")]
pub use portable::{swap16, swap32, swap64};

/// Byte reversal for every supported fixed-width integer.
///
/// Signed types go through the unsigned type of the same width, so the bit
/// pattern is preserved and nothing is sign-extended.
pub trait ByteSwap: Copy {
    fn swap(self) -> Self;
}

macro_rules! byte_swap_impl {
    ($($t:ty => $u:ty, $f:ident;)*) => {
        $(
            impl ByteSwap for $t {
                #[inline]
                fn swap(self) -> Self {
                    $f(self as $u) as $t
                }
            }
        )*
    };
}

byte_swap_impl! {
    u16 => u16, swap16;
    i16 => u16, swap16;
    u32 => u32, swap32;
    i32 => u32, swap32;
    u64 => u64, swap64;
    i64 => u64, swap64;
}
