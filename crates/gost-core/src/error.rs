//! Error taxonomy shared by every operation in the crate.

use thiserror::Error;

/// Errors raised at the boundary of the offending call.
///
/// None of these are recoverable by retrying: the caller has to fix the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An S-box table is not a permutation of `0..16`.
    #[error("s-box table {table} is not a permutation of 0..16")]
    InvalidParameters {
        /// Index (0..8) of the first offending table.
        table: usize,
    },

    /// The key is not exactly 32 bytes.
    #[error("invalid key length: expected 32 bytes, got {got}")]
    InvalidKeyLength {
        /// Length that was supplied.
        got: usize,
    },

    /// A single-block source or destination is not exactly 8 bytes.
    #[error("invalid block size: expected 8 bytes, got {got}")]
    InvalidBlockSize {
        /// Offending length.
        got: usize,
    },

    /// A multi-block input is not a multiple of the block size.
    #[error("input length {len} is not a multiple of the 8-byte block size")]
    InvalidInputLength {
        /// Length of the source buffer.
        len: usize,
    },

    /// The destination cannot hold the output.
    #[error("destination buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Bytes the operation would write.
        needed: usize,
        /// Bytes available in the destination.
        got: usize,
    },

    /// A parameter-set name or OID that does not match any known set.
    #[error("unknown s-box parameter set")]
    UnknownParamSet,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
