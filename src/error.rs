// src/error.rs
use thiserror::Error;

/// Errors raised when placing a wire field into, or taking one out of, a byte slice.
///
/// Byte order conversion itself is total and never fails; only the bounds of
/// the caller's buffer can.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("Buffer too short: field of {needed} bytes at offset {offset} exceeds buffer of {available} bytes")]
    BufferTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, WireError>;
