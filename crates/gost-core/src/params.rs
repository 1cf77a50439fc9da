//! Standard S-box parameter sets and their identifiers.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::sbox::SboxParamSet;

/// `id-Gost28147-89-TestParamSet` (RFC 4357).
pub static GOST28147_TEST_PARAM_SET: SboxParamSet = SboxParamSet::from_static(
    "id-Gost28147-89-TestParamSet",
    [
        [4, 2, 15, 5, 9, 1, 0, 8, 14, 3, 11, 12, 13, 7, 10, 6],
        [12, 9, 15, 14, 8, 1, 3, 10, 2, 7, 4, 13, 6, 0, 11, 5],
        [13, 8, 14, 12, 7, 3, 9, 10, 1, 5, 2, 4, 6, 15, 0, 11],
        [14, 9, 11, 2, 5, 15, 7, 1, 0, 13, 12, 6, 10, 4, 3, 8],
        [3, 14, 5, 9, 6, 8, 0, 13, 10, 11, 7, 12, 2, 1, 15, 4],
        [8, 15, 6, 11, 1, 9, 12, 5, 13, 3, 7, 10, 0, 14, 2, 4],
        [9, 11, 12, 0, 3, 6, 7, 5, 4, 8, 14, 15, 1, 10, 2, 13],
        [12, 6, 5, 2, 11, 0, 9, 13, 3, 14, 7, 10, 15, 4, 1, 8],
    ],
);

// Schneier's "Applied Cryptography" tables, also used by Crypto++ and by the
// GOST R 34.11-94 test parameter set.
const SCHNEIER_TABLES: [[u8; 16]; 8] = [
    [4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
    [14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
    [5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
    [7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
    [6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
    [4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
    [13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
    [1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
];

/// Tables from "Applied Cryptography" (Crypto++ compatible).
pub static APPLIED_CRYPTOGRAPHY_PARAM_SET: SboxParamSet =
    SboxParamSet::from_static("AppliedCryptographyParamSet", SCHNEIER_TABLES);

/// `id-GostR3411-94-TestParamSet` (RFC 4357).
pub static GOSTR3411_94_TEST_PARAM_SET: SboxParamSet =
    SboxParamSet::from_static("id-GostR3411-94-TestParamSet", SCHNEIER_TABLES);

/// `id-tc26-gost-28147-param-Z` (RFC 7836), the fixed set of GOST R 34.12-2015.
pub static TC26_PARAM_Z: SboxParamSet = SboxParamSet::from_static(
    "id-tc26-gost-28147-param-Z",
    [
        [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
        [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
        [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
        [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
        [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
        [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
        [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
        [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
    ],
);

/// Identifier of a standard parameter set, usable as configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParamSet {
    /// `id-Gost28147-89-TestParamSet`.
    Gost28147Test,
    /// "Applied Cryptography" tables.
    AppliedCryptography,
    /// `id-GostR3411-94-TestParamSet`.
    GostR341194Test,
    /// `id-tc26-gost-28147-param-Z`.
    #[default]
    Tc26Z,
}

impl ParamSet {
    /// Every known set.
    pub const ALL: [ParamSet; 4] = [
        ParamSet::Gost28147Test,
        ParamSet::AppliedCryptography,
        ParamSet::GostR341194Test,
        ParamSet::Tc26Z,
    ];

    /// The validated tables for this set.
    pub fn sbox(self) -> &'static SboxParamSet {
        match self {
            ParamSet::Gost28147Test => &GOST28147_TEST_PARAM_SET,
            ParamSet::AppliedCryptography => &APPLIED_CRYPTOGRAPHY_PARAM_SET,
            ParamSet::GostR341194Test => &GOSTR3411_94_TEST_PARAM_SET,
            ParamSet::Tc26Z => &TC26_PARAM_Z,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        self.sbox().name()
    }

    /// ASN.1 object identifier, where the set has one.
    pub fn oid(self) -> Option<&'static str> {
        match self {
            ParamSet::Gost28147Test => Some("1.2.643.2.2.31.0"),
            ParamSet::AppliedCryptography => None,
            ParamSet::GostR341194Test => Some("1.2.643.2.2.30.0"),
            ParamSet::Tc26Z => Some("1.2.643.7.1.2.5.1.1"),
        }
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamSet {
    type Err = Error;

    /// Accepts the canonical name (case-insensitive) or the OID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ParamSet::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s) || set.oid() == Some(s))
            .ok_or(Error::UnknownParamSet)
    }
}
