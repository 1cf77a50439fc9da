//! Key types and the GOST 28147-89 key schedule.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Number of Feistel rounds.
pub const ROUNDS: usize = 32;

/// Key word index used by each encryption round: `k0..k7` three times, then `k7..k0`.
pub const ENCRYPT_ORDER: [usize; ROUNDS] = [
    0, 1, 2, 3, 4, 5, 6, 7, //
    0, 1, 2, 3, 4, 5, 6, 7, //
    0, 1, 2, 3, 4, 5, 6, 7, //
    7, 6, 5, 4, 3, 2, 1, 0,
];

/// Positional reverse of [`ENCRYPT_ORDER`].
pub const DECRYPT_ORDER: [usize; ROUNDS] = [
    0, 1, 2, 3, 4, 5, 6, 7, //
    7, 6, 5, 4, 3, 2, 1, 0, //
    7, 6, 5, 4, 3, 2, 1, 0, //
    7, 6, 5, 4, 3, 2, 1, 0,
];

/// 256-bit GOST key wrapper. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = value
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { got: value.len() })?;
        Ok(Self(bytes))
    }
}

impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Key(..)")
    }
}

/// The eight key words `k0..k7` from which all 32 round subkeys are drawn.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; 8],
}

impl KeySchedule {
    /// Builds the schedule from raw key bytes, which must be exactly 32 bytes long.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = Key::try_from(key)?;
        Ok(Self::from_key(&key))
    }

    /// Builds the schedule from a typed key.
    pub fn from_key(key: &Key) -> Self {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(key.0.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    /// Key words `k0..k7`.
    #[inline]
    pub fn words(&self) -> &[u32; 8] {
        &self.words
    }

    /// Subkey for encryption round `round` (0-based).
    #[inline]
    pub(crate) fn encrypt_subkey(&self, round: usize) -> u32 {
        self.words[ENCRYPT_ORDER[round]]
    }

    /// Subkey for decryption round `round` (0-based).
    #[inline]
    pub(crate) fn decrypt_subkey(&self, round: usize) -> u32 {
        self.words[DECRYPT_ORDER[round]]
    }

    /// The 32 subkeys in encryption order.
    pub fn encryption_subkeys(&self) -> [u32; ROUNDS] {
        core::array::from_fn(|round| self.encrypt_subkey(round))
    }

    /// The 32 subkeys in decryption order.
    pub fn decryption_subkeys(&self) -> [u32; ROUNDS] {
        core::array::from_fn(|round| self.decrypt_subkey(round))
    }
}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("KeySchedule(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_key() -> [u8; KEY_SIZE] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn words_are_little_endian_in_offset_order() {
        let schedule = KeySchedule::new(&counting_key()).unwrap();
        assert_eq!(schedule.words()[0], 0x0302_0100);
        assert_eq!(schedule.words()[7], 0x1f1e_1d1c);
    }

    #[test]
    fn encryption_order_reverses_only_the_last_eight_rounds() {
        let schedule = KeySchedule::new(&counting_key()).unwrap();
        let words = *schedule.words();
        let subkeys = schedule.encryption_subkeys();
        for round in 0..24 {
            assert_eq!(subkeys[round], words[round % 8]);
        }
        for round in 24..32 {
            assert_eq!(subkeys[round], words[31 - round]);
        }
    }

    #[test]
    fn decryption_is_positional_reverse() {
        let schedule = KeySchedule::new(&counting_key()).unwrap();
        let mut reversed = schedule.encryption_subkeys();
        reversed.reverse();
        assert_eq!(schedule.decryption_subkeys(), reversed);

        let mut order = ENCRYPT_ORDER;
        order.reverse();
        assert_eq!(order, DECRYPT_ORDER);
    }

    #[test]
    fn rejects_wrong_key_lengths() {
        assert_eq!(
            KeySchedule::new(&[0u8; 31]).unwrap_err(),
            Error::InvalidKeyLength { got: 31 }
        );
        assert_eq!(
            KeySchedule::new(&[0u8; 33]).unwrap_err(),
            Error::InvalidKeyLength { got: 33 }
        );
        assert!(KeySchedule::new(&[]).is_err());
    }

    #[test]
    fn debug_hides_key_material() {
        let key = Key::from([0xaa; KEY_SIZE]);
        assert_eq!(format!("{key:?}"), "Key(..)");
        let schedule = KeySchedule::from_key(&key);
        assert!(!format!("{schedule:?}").contains("aa"));
    }
}
