//! The GOST 28147-89 round function.

use crate::sbox::SboxParamSet;

/// Computes `g[k](a)`: modular addition of the subkey, nibble-wise
/// substitution, then an 11-bit left rotation.
#[inline]
pub fn round_function(sbox: &SboxParamSet, a: u32, k: u32) -> u32 {
    sbox.substitute_word(a.wrapping_add(k)).rotate_left(11)
}
