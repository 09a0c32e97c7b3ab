//! # wire-endian
//!
//! Byte order conversion between the host's native order and the big-endian
//! order of a binary protocol wire format.
//!
//! ## Features
//!
//! - 🎯 **Bit-exact**: identical wire bytes on little- and big-endian hosts
//! - ⚡ **Branch-free**: the strategy is chosen by `cfg` at build time, not at runtime
//! - 📦 **Allocation-free**: pure functions over `u16`, `u32` and `u64`
//! - 🔒 **Thread-safe**: no state, no locks
//!
//! ## Quick Start
//!
//! ### Converting integers
//!
//! ```rust
//! use wire_endian::*;
//!
//! // Serializing: host order in, wire order out
//! let wire = host_to_wire64(0x0123_4567_89AB_CDEF);
//! assert_eq!(wire.to_ne_bytes(), [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
//!
//! // Deserializing: the same permutation back
//! assert_eq!(wire_to_host64(wire), 0x0123_4567_89AB_CDEF);
//! ```
//!
//! ### Writing fields into a buffer
//!
//! ```rust
//! use wire_endian::*;
//!
//! fn main() -> Result<()> {
//!     let mut buf = [0u8; 8];
//!     let mut writer = FieldWriter::new(&mut buf);
//!     writer.write_double(1234567890.1234567890)?;
//!
//!     let mut reader = FieldReader::new(&buf);
//!     assert_eq!(reader.read_double()?, 1234567890.1234567890);
//!     Ok(())
//! }
//! ```
//!
//! ## Build configuration
//!
//! By default the swap primitives use the integer types' `swap_bytes`, which
//! compiles to the target's byte-swap instruction. Enable the `portable`
//! feature to force the mask-and-shift fallback; the output is the same.

// Modules
pub mod error;
pub mod platform;
pub mod swap;
pub mod convert;
pub mod field;

// Re-export commonly used types at the crate root for convenience
pub use error::{WireError, Result};

pub use platform::{
    ByteOrder,
    SwapStrategy,
    HOST_ORDER,
    WIRE_ORDER,
    STRATEGY,
};

pub use swap::{swap16, swap32, swap64, ByteSwap};

pub use convert::{
    host_to_wire16,
    host_to_wire32,
    host_to_wire64,
    wire_to_host16,
    wire_to_host32,
    wire_to_host64,
    HostOrder,
    LittleEndianHost,
    BigEndianHost,
    NativeHost,
    WireInt,
};

pub use field::{FieldReader, FieldWriter};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for codec code.
    //!
    //! ```rust
    //! use wire_endian::prelude::*;
    //! ```

    pub use crate::convert::{
        host_to_wire16, host_to_wire32, host_to_wire64,
        wire_to_host16, wire_to_host32, wire_to_host64,
        WireInt,
    };
    pub use crate::error::{WireError, Result};
    pub use crate::field::{FieldReader, FieldWriter};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
