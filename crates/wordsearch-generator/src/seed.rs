use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::RngExt as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy sunday");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        rand::SeedableRng::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur while parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character offset of `ch` within the input.
        offset: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        for (offset, ch) in s.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { ch, offset })?;
            #[expect(clippy::cast_possible_truncation)]
            let nibble = nibble as u8;
            let byte = &mut bytes[offset / 2];
            *byte = (*byte << 4) | nibble;
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
    fn test_display_parse() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        let upper: PuzzleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit {
                ch: 'g',
                offset: 63
            })
        );
        let signed = format!("+{}", &SEED[1..]);
        assert!(signed.parse::<PuzzleSeed>().is_err());
    }

    #[test]
    fn test_from_phrase_is_stable() {
        assert_eq!(
            PuzzleSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            PuzzleSeed::from_phrase("hello"),
            PuzzleSeed::from_phrase("hello")
        );
        assert_ne!(
            PuzzleSeed::from_phrase("hello"),
            PuzzleSeed::from_phrase("hello!")
        );
    }

    #[test]
    fn test_rng_is_deterministic() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let mut rng_a = seed.rng();
        let mut rng_b = seed.rng();
        let a: Vec<u64> = (0..4).map(|_| rng_a.next_u64()).collect();
        let b: Vec<u64> = (0..4).map(|_| rng_b.next_u64()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
