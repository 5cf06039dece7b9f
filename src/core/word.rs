//! Word representation
//!
//! A Word stores a fixed-length lowercase ASCII word. The length is chosen per
//! session (five for classic Wordle) and every word compared in one game must
//! share it.

use std::fmt;
use thiserror::Error;

/// Classic Wordle word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Longest supported word; keeps a base-3 pattern inside a `u32`
pub const MAX_WORD_LENGTH: usize = 20;

/// Number of letters in the alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// A fixed-length word over `a..=z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("word length {0} is not supported (1 to {MAX_WORD_LENGTH} letters)")]
    UnsupportedLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new five-letter word
    ///
    /// # Errors
    /// Returns `WordError` if the text is not five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a word of an explicit length
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - `length` is outside `1..=MAX_WORD_LENGTH`
    /// - the text contains non-ASCII or non-alphabetic characters
    /// - the text is not exactly `length` letters
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        if length == 0 || length > MAX_WORD_LENGTH {
            return Err(WordError::UnsupportedLength(length));
        }

        let text = text.into().to_ascii_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.bytes().contains(&letter)
    }

    /// Occurrences of each letter, indexed by `letter - b'a'`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &b in self.bytes() {
            counts[letter_index(b)] += 1;
        }
        counts
    }

    /// True when no letter repeats
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        self.letter_counts().iter().all(|&count| count <= 1)
    }
}

/// Alphabet index of a lowercase ASCII letter
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter out of alphabet");
    usize::from(letter - b'a')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert_eq!(
            Word::new("shrt"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(Word::new("").is_err());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_custom_length() {
        let word = Word::with_length("should", 6).unwrap();
        assert_eq!(word.len(), 6);

        assert!(Word::with_length("should", 5).is_err());
        assert_eq!(
            Word::with_length("a", 0),
            Err(WordError::UnsupportedLength(0))
        );
        assert_eq!(
            Word::with_length("a", MAX_WORD_LENGTH + 1),
            Err(WordError::UnsupportedLength(MAX_WORD_LENGTH + 1))
        );
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'a'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_unique_letters() {
        assert!(Word::new("crane").unwrap().has_unique_letters());
        assert!(!Word::new("speed").unwrap().has_unique_letters());
        assert!(!Word::new("aaaaa").unwrap().has_unique_letters());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Slate".parse().unwrap();
        assert_eq!(format!("{word}"), "slate");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
