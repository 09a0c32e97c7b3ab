// src/convert.rs
//! Host ↔ wire byte order conversion.
//!
//! The wire is always big-endian. Callers say what they are doing
//! (`host_to_wire*` before writing a field, `wire_to_host*` after reading one)
//! and the build decides whether that means a swap or nothing at all.
//!
//! ```
//! use wire_endian::{host_to_wire32, wire_to_host32};
//!
//! let wire = host_to_wire32(1_234_567_890);
//! assert_eq!(wire.to_ne_bytes(), [0x49, 0x96, 0x02, 0xd2]);
//! assert_eq!(wire_to_host32(wire), 1_234_567_890);
//! ```

use crate::platform::ByteOrder;
use crate::swap::{swap16, swap32, swap64};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::LittleEndianHost {}
    impl Sealed for super::BigEndianHost {}
}

/// Conversion rules for a host of a given native byte order.
///
/// Only the two host models in this module implement it. `from_wire*` is the
/// same function as `to_wire*`: reordering bytes into big-endian and back is
/// the same permutation.
pub trait HostOrder: sealed::Sealed {
    /// Native byte order this model describes
    const ORDER: ByteOrder;

    fn to_wire16(x: u16) -> u16;
    fn to_wire32(x: u32) -> u32;
    fn to_wire64(x: u64) -> u64;

    #[inline(always)]
    fn from_wire16(x: u16) -> u16 {
        Self::to_wire16(x)
    }

    #[inline(always)]
    fn from_wire32(x: u32) -> u32 {
        Self::to_wire32(x)
    }

    #[inline(always)]
    fn from_wire64(x: u64) -> u64 {
        Self::to_wire64(x)
    }
}

/// Host whose native order is little-endian: every conversion is a swap.
#[derive(Debug, Clone, Copy)]
pub enum LittleEndianHost {}

/// Host whose native order is already the wire order: every conversion is the identity.
#[derive(Debug, Clone, Copy)]
pub enum BigEndianHost {}

impl HostOrder for LittleEndianHost {
    const ORDER: ByteOrder = ByteOrder::Little;

    #[inline(always)]
    fn to_wire16(x: u16) -> u16 {
        swap16(x)
    }

    #[inline(always)]
    fn to_wire32(x: u32) -> u32 {
        swap32(x)
    }

    #[inline(always)]
    fn to_wire64(x: u64) -> u64 {
        swap64(x)
    }
}

impl HostOrder for BigEndianHost {
    const ORDER: ByteOrder = ByteOrder::Big;

    #[inline(always)]
    fn to_wire16(x: u16) -> u16 {
        x
    }

    #[inline(always)]
    fn to_wire32(x: u32) -> u32 {
        x
    }

    #[inline(always)]
    fn to_wire64(x: u64) -> u64 {
        x
    }
}

/// The host model for the build target
#[cfg(target_endian = "little")]
pub type NativeHost = LittleEndianHost;
/// The host model for the build target
#[cfg(target_endian = "big")]
pub type NativeHost = BigEndianHost;

/// Convert a 16-bit integer from host order to wire (big-endian) order.
#[inline(always)]
pub fn host_to_wire16(x: u16) -> u16 {
    NativeHost::to_wire16(x)
}

/// Convert a 16-bit integer from wire (big-endian) order to host order.
#[inline(always)]
pub fn wire_to_host16(x: u16) -> u16 {
    NativeHost::from_wire16(x)
}

/// Convert a 32-bit integer from host order to wire (big-endian) order.
#[inline(always)]
pub fn host_to_wire32(x: u32) -> u32 {
    NativeHost::to_wire32(x)
}

/// Convert a 32-bit integer from wire (big-endian) order to host order.
#[inline(always)]
pub fn wire_to_host32(x: u32) -> u32 {
    NativeHost::from_wire32(x)
}

/// Convert a 64-bit integer from host order to wire (big-endian) order.
#[inline(always)]
pub fn host_to_wire64(x: u64) -> u64 {
    NativeHost::to_wire64(x)
}

/// Convert a 64-bit integer from wire (big-endian) order to host order.
#[inline(always)]
pub fn wire_to_host64(x: u64) -> u64 {
    NativeHost::from_wire64(x)
}

/// Fixed-width integers that can be carried on the wire.
///
/// Signed values are converted through the unsigned type of the same width;
/// the bit pattern is kept, only its byte order changes.
pub trait WireInt: bytemuck::Pod {
    /// Host order to wire order
    fn to_wire(self) -> Self;
    /// Wire order to host order
    fn from_wire(self) -> Self;
}

macro_rules! wire_int_impl {
    ($($t:ty => $u:ty, $to:ident, $from:ident;)*) => {
        $(
            impl WireInt for $t {
                #[inline(always)]
                fn to_wire(self) -> Self {
                    $to(self as $u) as $t
                }

                #[inline(always)]
                fn from_wire(self) -> Self {
                    $from(self as $u) as $t
                }
            }
        )*
    };
}

wire_int_impl! {
    u16 => u16, host_to_wire16, wire_to_host16;
    i16 => u16, host_to_wire16, wire_to_host16;
    u32 => u32, host_to_wire32, wire_to_host32;
    i32 => u32, host_to_wire32, wire_to_host32;
    u64 => u64, host_to_wire64, wire_to_host64;
    i64 => u64, host_to_wire64, wire_to_host64;
}
