//! Letter representation.

use std::fmt::{self, Display};

/// An uppercase letter in the range A-Z.
///
/// The alphabet is fixed at the 26 ASCII letters; lowercase input is folded
/// to uppercase on conversion.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert_eq!(Letter::from_char('7'), None);
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Array containing all letters from A to Z.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'A'); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from an ASCII alphabetic character.
    ///
    /// Lowercase characters are converted to uppercase. Returns `None` for any
    /// other character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            let code = ch.to_ascii_uppercase() as u32;
            #[expect(clippy::cast_possible_truncation)]
            let byte = code as u8;
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Creates a letter from its alphabet index (0 for A, 25 for Z).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(
            usize::from(index) < Self::COUNT,
            "Invalid letter index: {index}"
        );
        Self(b'A' + index)
    }

    /// Returns the alphabet index of this letter (0 for A, 25 for Z).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }

    /// Returns this letter as an uppercase `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
