//! Substitution tables.
//!
//! A parameter set is eight 4-bit S-boxes. Nibble `i` of a word goes through
//! table `i`. For speed, adjacent tables are merged into four 256-entry byte
//! tables so that a whole word is substituted with four lookups; the result
//! is bit-identical to substituting each nibble separately.

use crate::error::{Error, Result};

/// Raw form of a parameter set: eight permutations of `0..16`.
pub type SboxTables = [[u8; 16]; 8];

const CUSTOM_NAME: &str = "custom";

/// Eight validated 4-bit S-boxes plus their packed byte-wide form.
#[derive(Clone, PartialEq, Eq)]
pub struct SboxParamSet {
    name: &'static str,
    tables: SboxTables,
    packed: [[u8; 256]; 4],
}

impl SboxParamSet {
    /// Validates caller-supplied tables.
    ///
    /// Fails with [`Error::InvalidParameters`] naming the first table that is
    /// not a permutation of `0..16`.
    pub fn new(tables: SboxTables) -> Result<Self> {
        Self::with_name(CUSTOM_NAME, tables)
    }

    /// Same as [`SboxParamSet::new`] with a caller-chosen display name.
    pub fn with_name(name: &'static str, tables: SboxTables) -> Result<Self> {
        if let Some(table) = first_invalid_table(&tables) {
            tracing::warn!(param_set = name, table, "rejecting s-box parameter set");
            return Err(Error::InvalidParameters { table });
        }
        Ok(Self {
            name,
            tables,
            packed: pack(&tables),
        })
    }

    /// Compile-time constructor for the standard sets.
    ///
    /// Panics (and therefore fails const evaluation of a `static`) if any table
    /// is not a permutation.
    pub const fn from_static(name: &'static str, tables: SboxTables) -> Self {
        if first_invalid_table(&tables).is_some() {
            panic!("s-box table is not a permutation of 0..16");
        }
        Self {
            name,
            tables,
            packed: pack(&tables),
        }
    }

    /// Display name of the set (`"custom"` for caller-supplied tables).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The eight underlying tables.
    #[inline]
    pub fn tables(&self) -> &SboxTables {
        &self.tables
    }

    /// Substitutes `nibble` (low four bits are used) through table `table` (0..8).
    #[inline]
    pub fn substitute(&self, table: usize, nibble: u8) -> u8 {
        self.tables[table][usize::from(nibble & 0x0f)]
    }

    /// Substitutes all eight nibbles of `x`, nibble `i` through table `i`.
    #[inline]
    pub fn substitute_word(&self, x: u32) -> u32 {
        let [b0, b1, b2, b3] = x.to_le_bytes();
        u32::from_le_bytes([
            self.packed[0][usize::from(b0)],
            self.packed[1][usize::from(b1)],
            self.packed[2][usize::from(b2)],
            self.packed[3][usize::from(b3)],
        ])
    }
}

impl Default for SboxParamSet {
    /// The GOST R 34.12-2015 set, `id-tc26-gost-28147-param-Z`.
    fn default() -> Self {
        crate::params::TC26_PARAM_Z.clone()
    }
}

impl core::fmt::Debug for SboxParamSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SboxParamSet")
            .field("name", &self.name)
            .field("tables", &self.tables)
            .finish()
    }
}

const fn first_invalid_table(tables: &SboxTables) -> Option<usize> {
    let mut t = 0;
    while t < 8 {
        let mut seen = [false; 16];
        let mut i = 0;
        while i < 16 {
            let value = tables[t][i] as usize;
            // Sixteen distinct values below 16 cover every value exactly once.
            if value >= 16 || seen[value] {
                return Some(t);
            }
            seen[value] = true;
            i += 1;
        }
        t += 1;
    }
    None
}

const fn pack(tables: &SboxTables) -> [[u8; 256]; 4] {
    let mut packed = [[0u8; 256]; 4];
    let mut j = 0;
    while j < 4 {
        let mut x = 0;
        while x < 256 {
            packed[j][x] = (tables[2 * j + 1][x >> 4] << 4) | tables[2 * j][x & 0x0f];
            x += 1;
        }
        j += 1;
    }
    packed
}
