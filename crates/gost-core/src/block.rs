//! Block representation helpers.

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// GOST 28147-89 block of 8 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Anything that can transform single 8-byte blocks in place under a fixed key.
///
/// Modes of operation are generic over this trait, so [`crate::Gost28147`] and
/// [`crate::Magma`] can both sit beneath [`crate::Ecb`].
pub trait BlockCipher {
    /// Encrypts `block` in place.
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts `block` in place.
    fn decrypt_block(&self, block: &mut Block);
}

/// Splits a block into its little-endian halves `(N1, N2)`.
#[inline]
pub(crate) fn to_halves(block: &Block) -> (u32, u32) {
    let n1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
    let n2 = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
    (n1, n2)
}

/// Inverse of [`to_halves`].
#[inline]
pub(crate) fn from_halves(n1: u32, n2: u32) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[..4].copy_from_slice(&n1.to_le_bytes());
    block[4..].copy_from_slice(&n2.to_le_bytes());
    block
}
