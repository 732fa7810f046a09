use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated grid.
///
/// Seeds are shown as 64 lowercase hexadecimal characters and can be parsed
/// back from that form.
///
/// # Examples
///
/// ```
/// use sweepgrid_generator::GridSeed;
///
/// let seed = GridSeed::from_phrase("living room");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<GridSeed>()?, seed);
/// # Ok::<(), sweepgrid_generator::GridSeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSeed([u8; 32]);

impl GridSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Returns the deterministic random number generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for GridSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors produced when parsing a [`GridSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the input in characters.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Character offset of the first bad digit.
        offset: usize,
    },
}

impl FromStr for GridSeed {
    type Err = GridSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(GridSeedParseError::InvalidLength { len });
        }
        if let Some(offset) = s.chars().position(|c| !c.is_ascii_hexdigit()) {
            return Err(GridSeedParseError::InvalidDigit { offset });
        }

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| GridSeedParseError::InvalidDigit { offset: i * 2 })?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: GridSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper = SEED.to_uppercase();
        assert_eq!(upper.parse::<GridSeed>(), SEED.parse::<GridSeed>());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<GridSeed>(),
            Err(GridSeedParseError::InvalidLength { len: 3 })
        );
        let mut bad = SEED.to_owned();
        bad.replace_range(10..11, "g");
        assert_eq!(
            bad.parse::<GridSeed>(),
            Err(GridSeedParseError::InvalidDigit { offset: 10 })
        );
        let multibyte = "é".repeat(64);
        assert_eq!(
            multibyte.parse::<GridSeed>(),
            Err(GridSeedParseError::InvalidDigit { offset: 0 })
        );
    }

    #[test]
    fn test_phrase_is_deterministic() {
        assert_eq!(GridSeed::from_phrase("hall"), GridSeed::from_phrase("hall"));
        assert_ne!(GridSeed::from_phrase("hall"), GridSeed::from_phrase("hallway"));
    }

    #[test]
    fn test_rng_is_deterministic() {
        let seed = GridSeed::from_bytes([7; 32]);
        let a: u64 = seed.rng().random();
        let b: u64 = seed.rng().random();
        assert_eq!(a, b);
    }
}
