//! GOST 28147-89 single-block encryption and decryption.

use crate::block::{from_halves, to_halves, Block, BlockCipher, BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::key::{Key, KeySchedule, KEY_SIZE, ROUNDS};
use crate::mode::Ecb;
use crate::params::ParamSet;
use crate::round::round_function;
use crate::sbox::SboxParamSet;

/// GOST 28147-89 keyed with a 256-bit key under a borrowed S-box parameter set.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone)]
pub struct Gost28147<'s> {
    schedule: KeySchedule,
    sbox: &'s SboxParamSet,
}

impl<'s> Gost28147<'s> {
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;
    /// Key size in bytes.
    pub const KEY_SIZE: usize = KEY_SIZE;

    /// Creates a cipher from raw key bytes; the key must be exactly 32 bytes.
    pub fn new(key: &[u8], sbox: &'s SboxParamSet) -> Result<Self> {
        let schedule = KeySchedule::new(key)?;
        tracing::debug!(param_set = sbox.name(), "gost 28147-89 cipher initialised");
        Ok(Self { schedule, sbox })
    }

    /// Creates a cipher from a typed key.
    pub fn from_key(key: &Key, sbox: &'s SboxParamSet) -> Self {
        Self {
            schedule: KeySchedule::from_key(key),
            sbox,
        }
    }

    /// S-box parameter set in use.
    #[inline]
    pub fn sbox(&self) -> &'s SboxParamSet {
        self.sbox
    }

    /// Encrypts the 8-byte `src` into the 8-byte `dst`.
    ///
    /// Fails with [`Error::InvalidBlockSize`] without writing if either length is wrong.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        let mut block = check_block(dst, src)?;
        self.encrypt_block(&mut block);
        dst.copy_from_slice(&block);
        Ok(())
    }

    /// Decrypts the 8-byte `src` into the 8-byte `dst`.
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        let mut block = check_block(dst, src)?;
        self.decrypt_block(&mut block);
        dst.copy_from_slice(&block);
        Ok(())
    }

    /// ECB encryption over this cipher.
    pub fn ecb_encrypter(&self) -> Ecb<'_, Self> {
        Ecb::encrypter(self)
    }

    /// ECB decryption over this cipher.
    pub fn ecb_decrypter(&self) -> Ecb<'_, Self> {
        Ecb::decrypter(self)
    }

    /// Runs the 32 Feistel rounds, drawing subkeys from `subkey`.
    #[inline]
    fn crypt(&self, block: &mut Block, subkey: impl Fn(usize) -> u32) {
        let (mut n1, mut n2) = to_halves(block);
        for round in 0..ROUNDS - 1 {
            let tmp = round_function(self.sbox, n1, subkey(round));
            (n1, n2) = (n2 ^ tmp, n1);
        }
        // The last round does not swap halves.
        n2 ^= round_function(self.sbox, n1, subkey(ROUNDS - 1));
        *block = from_halves(n1, n2);
    }
}

impl Gost28147<'static> {
    /// Creates a cipher over one of the standard parameter sets.
    pub fn with_param_set(key: &[u8], param_set: ParamSet) -> Result<Self> {
        Self::new(key, param_set.sbox())
    }
}

impl BlockCipher for Gost28147<'_> {
    #[inline]
    fn encrypt_block(&self, block: &mut Block) {
        self.crypt(block, |round| self.schedule.encrypt_subkey(round));
    }

    #[inline]
    fn decrypt_block(&self, block: &mut Block) {
        self.crypt(block, |round| self.schedule.decrypt_subkey(round));
    }
}

impl core::fmt::Debug for Gost28147<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gost28147")
            .field("sbox", &self.sbox.name())
            .finish_non_exhaustive()
    }
}

fn check_block(dst: &[u8], src: &[u8]) -> Result<Block> {
    if dst.len() != BLOCK_SIZE {
        return Err(Error::InvalidBlockSize { got: dst.len() });
    }
    src.try_into()
        .map_err(|_| Error::InvalidBlockSize { got: src.len() })
}
