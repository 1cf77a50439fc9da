//! GOST R 34.12-2015 "Magma".
//!
//! Magma is GOST 28147-89 fixed to the `id-tc26-gost-28147-param-Z` S-boxes
//! and written with big-endian conventions: each 32-bit key word and the
//! whole 64-bit block are byte-reversed relative to [`Gost28147`].

use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::cipher::Gost28147;
use crate::error::{Error, Result};
use crate::key::{Key, KEY_SIZE};
use crate::mode::Ecb;
use crate::params::TC26_PARAM_Z;

/// Magma block cipher.
#[derive(Clone, Debug)]
pub struct Magma {
    inner: Gost28147<'static>,
}

impl Magma {
    /// Creates a cipher from a 32-byte big-endian key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { got: key.len() })?;
        let mut swapped = Key::from(key);
        for word in swapped.0.chunks_exact_mut(4) {
            word.reverse();
        }
        tracing::debug!("magma cipher initialised");
        Ok(Self {
            inner: Gost28147::from_key(&swapped, &TC26_PARAM_Z),
        })
    }

    /// Encrypts the 8-byte `src` into the 8-byte `dst`.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        self.transform(dst, src, |block| self.encrypt_block(block))
    }

    /// Decrypts the 8-byte `src` into the 8-byte `dst`.
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        self.transform(dst, src, |block| self.decrypt_block(block))
    }

    /// ECB encryption over this cipher.
    pub fn ecb_encrypter(&self) -> Ecb<'_, Self> {
        Ecb::encrypter(self)
    }

    /// ECB decryption over this cipher.
    pub fn ecb_decrypter(&self) -> Ecb<'_, Self> {
        Ecb::decrypter(self)
    }

    fn transform(&self, dst: &mut [u8], src: &[u8], f: impl Fn(&mut Block)) -> Result<()> {
        if dst.len() != BLOCK_SIZE {
            return Err(Error::InvalidBlockSize { got: dst.len() });
        }
        let mut block: Block = src
            .try_into()
            .map_err(|_| Error::InvalidBlockSize { got: src.len() })?;
        f(&mut block);
        dst.copy_from_slice(&block);
        Ok(())
    }
}

impl BlockCipher for Magma {
    #[inline]
    fn encrypt_block(&self, block: &mut Block) {
        block.reverse();
        self.inner.encrypt_block(block);
        block.reverse();
    }

    #[inline]
    fn decrypt_block(&self, block: &mut Block) {
        block.reverse();
        self.inner.decrypt_block(block);
        block.reverse();
    }
}
