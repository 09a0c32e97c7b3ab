// src/swap/intrinsic.rs
//! Byte reversal through the integer types' own `swap_bytes`, which the
//! compiler lowers to `bswap`/`rev` (or an equivalent) where the target has it.

#[inline(always)]
pub const fn swap16(x: u16) -> u16 {
    x.swap_bytes()
}

#[inline(always)]
pub const fn swap32(x: u32) -> u32 {
    x.swap_bytes()
}

#[inline(always)]
pub const fn swap64(x: u64) -> u64 {
    x.swap_bytes()
}
