//! Block modes of operation.
//!
//! [`BlockMode`] is the capability shared by every mode: crypt a run of whole
//! blocks from a source buffer into a destination. [`Ecb`] is the stateless
//! implementation; chaining modes would implement the same trait while
//! carrying an evolving IV between calls.

use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Which way a mode drives its cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Encrypt each block.
    Encrypt,
    /// Decrypt each block.
    Decrypt,
}

/// A mode that transforms whole blocks.
pub trait BlockMode {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Crypts `src` into the front of `dst`.
    ///
    /// `src.len()` must be a multiple of the block size and `dst` at least as
    /// long as `src`. Both are checked before anything is written.
    fn crypt_blocks(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()>;

    /// Crypts `buf` in place; `buf.len()` must be a multiple of the block size.
    fn crypt_blocks_in_place(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Electronic codebook mode: every block is crypted independently.
///
/// Equal plaintext blocks give equal ciphertext blocks, so ECB leaks
/// structure and is rarely the right choice outside of tests and building
/// other modes.
pub struct Ecb<'c, C> {
    cipher: &'c C,
    direction: Direction,
}

impl<'c, C: BlockCipher> Ecb<'c, C> {
    /// Wraps `cipher` for the given direction.
    pub fn new(cipher: &'c C, direction: Direction) -> Self {
        Self { cipher, direction }
    }

    /// ECB encrypter over `cipher`.
    pub fn encrypter(cipher: &'c C) -> Self {
        Self::new(cipher, Direction::Encrypt)
    }

    /// ECB decrypter over `cipher`.
    pub fn decrypter(cipher: &'c C) -> Self {
        Self::new(cipher, Direction::Decrypt)
    }

    /// Direction chosen at construction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    fn apply(&self, block: &mut Block) {
        match self.direction {
            Direction::Encrypt => self.cipher.encrypt_block(block),
            Direction::Decrypt => self.cipher.decrypt_block(block),
        }
    }
}

impl<C> Clone for Ecb<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Ecb<'_, C> {}

impl<C> core::fmt::Debug for Ecb<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ecb")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl<C: BlockCipher> BlockMode for Ecb<'_, C> {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn crypt_blocks(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_input(src.len())?;
        if dst.len() < src.len() {
            return Err(Error::BufferTooSmall {
                needed: src.len(),
                got: dst.len(),
            });
        }
        tracing::trace!(direction = ?self.direction, blocks = src.len() / BLOCK_SIZE, "ecb");

        for (out, chunk) in dst
            .chunks_exact_mut(BLOCK_SIZE)
            .zip(src.chunks_exact(BLOCK_SIZE))
        {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.apply(&mut block);
            out.copy_from_slice(&block);
        }
        Ok(())
    }

    fn crypt_blocks_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        check_input(buf.len())?;
        tracing::trace!(direction = ?self.direction, blocks = buf.len() / BLOCK_SIZE, "ecb in place");

        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.apply(&mut block);
            chunk.copy_from_slice(&block);
        }
        Ok(())
    }
}

fn check_input(len: usize) -> Result<()> {
    if len % BLOCK_SIZE != 0 {
        return Err(Error::InvalidInputLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ParamSet, GOST28147_TEST_PARAM_SET};
    use crate::{Gost28147, Magma};
    use proptest::prelude::*;

    const GCL3_KEY: &str = "0475f6e05038fbfad2c7c390edb3ca3d1547124291ae1e8a2f79cd9ed2bcefbd";
    const GCL3_CIPHERTEXT: &str = concat!(
        "4b8c4c9815f24aea1ec35709b3bc2ed1e0d1f222652d5918f7dffc804bde5c68",
        "46537553a7460dec051f1bd30a631ab778c443e05d3ea40e2d7e23a91bc902bc",
        "210c84cb0d0a07c87bd0fbb51a14045ca25397712e5cc28f393f6f52f230264e",
        "8ce0d101756ddcd303791ecad5c10e12530a78e20ab11cea3af855b97ce10bba",
        "a0c896eb505ad36043a30f98dbd9506d6391af0140e9755a465c1f194a0b899b",
        "c4f6f8f52f873ffa26d4f825ba1f9882fc26af2dc0f9c45849fa09800262a434",
        "2dcb5a6bab615d08d426e00813d62e022a37e8d0cf36f1c7c03f9b2160bd292d",
        "2e01484ef88f20168abf82dc327aa31869d150593191f26c5a5fca589ab22db2",
    );

    /// Bytes 07 06 .. 00 0f 0e .. 08 and so on: each block counts down.
    fn gcl3_plaintext() -> Vec<u8> {
        (0..256usize).map(|i| (i ^ 7) as u8).collect()
    }

    fn gcl3_cipher() -> Gost28147<'static> {
        Gost28147::new(&hex::decode(GCL3_KEY).unwrap(), &GOST28147_TEST_PARAM_SET).unwrap()
    }

    #[test]
    fn ecb_matches_gcl3_vector() {
        let cipher = gcl3_cipher();
        let plaintext = gcl3_plaintext();
        assert_eq!(&plaintext[..8], &[7, 6, 5, 4, 3, 2, 1, 0]);

        let mut tmp = vec![0u8; plaintext.len()];
        cipher.ecb_encrypter().crypt_blocks(&mut tmp, &plaintext).unwrap();
        assert_eq!(hex::encode(&tmp), GCL3_CIPHERTEXT);

        cipher.ecb_decrypter().crypt_blocks_in_place(&mut tmp).unwrap();
        assert_eq!(tmp, plaintext);
    }

    #[test]
    fn rejects_partial_blocks_without_writing() {
        let cipher = gcl3_cipher();
        let mut ecb = cipher.ecb_encrypter();
        for len in [1usize, 7, 9, 15] {
            let src = vec![0u8; len];
            let mut dst = vec![0xa5u8; 16];
            assert_eq!(
                ecb.crypt_blocks(&mut dst, &src),
                Err(Error::InvalidInputLength { len })
            );
            assert!(dst.iter().all(|&b| b == 0xa5));

            let mut buf = vec![0xa5u8; len];
            assert_eq!(
                ecb.crypt_blocks_in_place(&mut buf),
                Err(Error::InvalidInputLength { len })
            );
            assert!(buf.iter().all(|&b| b == 0xa5));
        }
    }

    #[test]
    fn rejects_short_destination_without_writing() {
        let cipher = gcl3_cipher();
        let mut ecb = cipher.ecb_decrypter();
        let src = [0u8; 24];
        let mut dst = [0xa5u8; 16];
        assert_eq!(
            ecb.crypt_blocks(&mut dst, &src),
            Err(Error::BufferTooSmall { needed: 24, got: 16 })
        );
        assert_eq!(dst, [0xa5; 16]);
    }

    #[test]
    fn longer_destination_keeps_its_tail() {
        let cipher = gcl3_cipher();
        let src = gcl3_plaintext();
        let mut dst = vec![0xa5u8; 20];
        cipher
            .ecb_encrypter()
            .crypt_blocks(&mut dst, &src[..16])
            .unwrap();
        assert_eq!(hex::encode(&dst[..16]), &GCL3_CIPHERTEXT[..32]);
        assert_eq!(&dst[16..], &[0xa5; 4]);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let cipher = gcl3_cipher();
        let mut ecb = cipher.ecb_encrypter();
        ecb.crypt_blocks(&mut [], &[]).unwrap();
        ecb.crypt_blocks_in_place(&mut []).unwrap();
        assert_eq!(ecb.block_size(), BLOCK_SIZE);
        assert_eq!(ecb.direction(), Direction::Encrypt);
    }

    #[test]
    fn equal_blocks_encrypt_equally() {
        let cipher = gcl3_cipher();
        let mut buf = [0x42u8; 32];
        cipher.ecb_encrypter().crypt_blocks_in_place(&mut buf).unwrap();
        let first = &buf[..8];
        assert!(buf.chunks_exact(8).all(|block| block == first));
        assert_ne!(first, &[0x42; 8]);
    }

    #[test]
    fn works_over_magma() {
        let key = hex::decode("ffeeddccbbaa99887766554433221100f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff")
            .unwrap();
        let cipher = Magma::new(&key).unwrap();
        let mut buf = hex::decode("fedcba9876543210fedcba9876543210").unwrap();
        Ecb::new(&cipher, Direction::Encrypt)
            .crypt_blocks_in_place(&mut buf)
            .unwrap();
        assert_eq!(
            hex::encode(&buf),
            "4ee901e5c2d8ca3d4ee901e5c2d8ca3d"
        );
        cipher.ecb_decrypter().crypt_blocks_in_place(&mut buf).unwrap();
        assert_eq!(hex::encode(&buf), "fedcba9876543210fedcba9876543210");
    }

    #[test]
    fn shared_cipher_across_threads() {
        let cipher = gcl3_cipher();
        let plaintext = gcl3_plaintext();
        let ecb = cipher.ecb_encrypter();

        let mut parallel = vec![0u8; plaintext.len()];
        std::thread::scope(|scope| {
            for (dst, src) in parallel.chunks_mut(64).zip(plaintext.chunks(64)) {
                let mut ecb = ecb;
                scope.spawn(move || ecb.crypt_blocks(dst, src).unwrap());
            }
        });
        assert_eq!(hex::encode(&parallel), GCL3_CIPHERTEXT);
    }

    proptest! {
        #[test]
        fn ecb_round_trip(
            key in proptest::array::uniform32(any::<u8>()),
            blocks in proptest::collection::vec(any::<[u8; 8]>(), 0..32),
            set in proptest::sample::select(ParamSet::ALL.to_vec()),
        ) {
            let data: Vec<u8> = blocks.concat();
            let cipher = Gost28147::with_param_set(&key, set).unwrap();

            let mut ct = vec![0u8; data.len()];
            cipher.ecb_encrypter().crypt_blocks(&mut ct, &data).unwrap();
            let mut pt = vec![0u8; data.len()];
            cipher.ecb_decrypter().crypt_blocks(&mut pt, &ct).unwrap();
            prop_assert_eq!(pt, data);
        }
    }
}
