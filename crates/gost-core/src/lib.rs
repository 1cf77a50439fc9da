//! GOST 28147-89 / Magma block cipher.
//!
//! This crate provides:
//! - S-box parameter sets, validated once at construction, and the standard named sets.
//! - The key schedule with its forward/reversed subkey ordering.
//! - Single-block encryption and decryption over 32 Feistel rounds.
//! - The [`BlockMode`] abstraction with ECB as its implementation.
//! - The GOST R 34.12-2015 [`Magma`] variant.
//!
//! Lookups go through tables indexed by secret data, so the implementation
//! should not be treated as side-channel hardened.
//!
//! ```
//! use gost_core::{BlockMode, Gost28147, ParamSet};
//!
//! let key = [0x11u8; 32];
//! let cipher = Gost28147::with_param_set(&key, ParamSet::Tc26Z)?;
//!
//! let mut buf = *b"sixteen byte msg";
//! cipher.ecb_encrypter().crypt_blocks_in_place(&mut buf)?;
//! cipher.ecb_decrypter().crypt_blocks_in_place(&mut buf)?;
//! assert_eq!(&buf, b"sixteen byte msg");
//! # Ok::<(), gost_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod magma;
mod mode;
mod params;
mod round;
mod sbox;

pub use crate::block::{Block, BlockCipher, BLOCK_SIZE};
pub use crate::cipher::Gost28147;
pub use crate::error::{Error, Result};
pub use crate::key::{Key, KeySchedule, DECRYPT_ORDER, ENCRYPT_ORDER, KEY_SIZE, ROUNDS};
pub use crate::magma::Magma;
pub use crate::mode::{BlockMode, Direction, Ecb};
pub use crate::params::{
    ParamSet, APPLIED_CRYPTOGRAPHY_PARAM_SET, GOST28147_TEST_PARAM_SET,
    GOSTR3411_94_TEST_PARAM_SET, TC26_PARAM_Z,
};
pub use crate::round::round_function;
pub use crate::sbox::{SboxParamSet, SboxTables};
