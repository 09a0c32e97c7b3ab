// src/swap/portable.rs
//! Mask-and-shift byte reversal.
//!
//! Each byte lane is isolated with a mask and moved to its mirrored position.
//! Only unsigned exact-width types are used, so shifts never sign-extend.

#[inline]
pub const fn swap16(x: u16) -> u16 {
    (x << 8) | (x >> 8)
}

#[inline]
pub const fn swap32(x: u32) -> u32 {
    ((x & 0xFF00_0000) >> 24)
        | ((x & 0x00FF_0000) >> 8)
        | ((x & 0x0000_FF00) << 8)
        | ((x & 0x0000_00FF) << 24)
}

#[inline]
pub const fn swap64(x: u64) -> u64 {
    ((x & 0xFF00_0000_0000_0000) >> 56)
        | ((x & 0x00FF_0000_0000_0000) >> 40)
        | ((x & 0x0000_FF00_0000_0000) >> 24)
        | ((x & 0x0000_00FF_0000_0000) >> 8)
        | ((x & 0x0000_0000_FF00_0000) << 8)
        | ((x & 0x0000_0000_00FF_0000) << 24)
        | ((x & 0x0000_0000_0000_FF00) << 40)
        | ((x & 0x0000_0000_0000_00FF) << 56)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap16_lanes() {
        assert_eq!(swap16(0x1234), 0x3412);
        assert_eq!(swap16(0x00FF), 0xFF00);
        assert_eq!(swap16(0x8000), 0x0080);
    }

    #[test]
    fn test_swap32_lanes() {
        assert_eq!(swap32(0x1234_5678), 0x7856_3412);
        assert_eq!(swap32(0x8000_0000), 0x0000_0080);
        assert_eq!(swap32(0x0000_0001), 0x0100_0000);
    }

    #[test]
    fn test_swap64_lanes() {
        assert_eq!(swap64(0x0123_4567_89AB_CDEF), 0xEFCD_AB89_6745_2301);
        assert_eq!(swap64(0x8000_0000_0000_0000), 0x0000_0000_0000_0080);
        // Each lane moves independently
        for lane in 0..8u32 {
            let x = 0xA5u64 << (lane * 8);
            assert_eq!(swap64(x), 0xA5u64 << ((7 - lane) * 8));
        }
    }

    #[test]
    fn test_usable_in_const_context() {
        const SWAPPED: u32 = swap32(0xDEAD_BEEF);
        assert_eq!(SWAPPED, 0xEFBE_ADDE);
    }
}
