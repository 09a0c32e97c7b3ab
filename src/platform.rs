// src/platform.rs
//! Build-time platform detection.
//!
//! Everything in here is a `const` resolved by `cfg` before code generation, so
//! none of it shows up as a branch in the conversion functions.

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("wire-endian: target byte order is neither little- nor big-endian");

// The mask-and-shift fallback assumes exact 8/16/32/64-bit unsigned integers.
const _: () = assert!(core::mem::size_of::<u8>() == 1);
const _: () = assert!(core::mem::size_of::<u16>() == 2);
const _: () = assert!(core::mem::size_of::<u32>() == 4);
const _: () = assert!(core::mem::size_of::<u64>() == 8);

/// Byte order of an integer in memory or on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

impl ByteOrder {
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::Little => "little-endian",
            ByteOrder::Big => "big-endian",
        }
    }
}

/// How the swap primitives are realised on this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapStrategy {
    /// `swap_bytes` on the primitive integer types, lowered to the target's
    /// byte-swap instruction where one exists.
    Intrinsic,
    /// Lane masking and shifting, no target support assumed.
    Portable,
}

impl SwapStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SwapStrategy::Intrinsic => "intrinsic swap",
            SwapStrategy::Portable => "portable mask-and-shift swap",
        }
    }
}

/// Native byte order of the build target
#[cfg(target_endian = "little")]
pub const HOST_ORDER: ByteOrder = ByteOrder::Little;
/// Native byte order of the build target
#[cfg(target_endian = "big")]
pub const HOST_ORDER: ByteOrder = ByteOrder::Big;

/// Byte order mandated by the wire format
pub const WIRE_ORDER: ByteOrder = ByteOrder::Big;

/// Swap implementation selected for this build
#[cfg(not(feature = "portable"))]
pub const STRATEGY: SwapStrategy = SwapStrategy::Intrinsic;
/// Swap implementation selected for this build
#[cfg(feature = "portable")]
pub const STRATEGY: SwapStrategy = SwapStrategy::Portable;

/// Whether host-to-wire conversion reorders bytes at all on this target
pub const NEEDS_SWAP: bool = matches!(HOST_ORDER, ByteOrder::Little);

/// Human-readable summary of the build-time selection.
pub fn describe() -> &'static str {
    match (HOST_ORDER, STRATEGY) {
        (ByteOrder::Little, SwapStrategy::Intrinsic) => "little-endian host, intrinsic swap",
        (ByteOrder::Little, SwapStrategy::Portable) => "little-endian host, portable mask-and-shift swap",
        (ByteOrder::Big, SwapStrategy::Intrinsic) => "big-endian host, identity conversion (intrinsic swap available)",
        (ByteOrder::Big, SwapStrategy::Portable) => "big-endian host, identity conversion (portable swap available)",
    }
}

/// Emit the build-time selection once at debug level.
///
/// Meant for a codec's startup path; the conversion functions never log.
pub fn log_selection() {
    log::debug!(
        "wire-endian {}: host={} wire={} strategy={}",
        crate::LIBRARY_VERSION,
        HOST_ORDER.name(),
        WIRE_ORDER.name(),
        STRATEGY.name()
    );
}
