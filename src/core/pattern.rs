//! Feedback pattern calculation and representation
//!
//! A pattern is the per-position feedback for one guess:
//! - 0 = Absent (grey, letter not available)
//! - 1 = Present (yellow, letter elsewhere in the word)
//! - 2 = Hit (green, letter in the correct position)
//!
//! Tags are packed base-3 into a `u32`, position `i` contributing
//! `tag × 3^i`, alongside the word length. The packing is lossless so
//! patterns can be compared for equality and used as hash keys.

use super::word::{ALPHABET_SIZE, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not available in any unconsumed position
    Absent = 0,
    /// Letter occurs at a different position
    Present = 1,
    /// Letter matches at this position
    Hit = 2,
}

impl Feedback {
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji square for this tag
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'B' | 'b' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Errors from parsing feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have {expected} positions, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid feedback character '{0}' (use G/Y/- or 🟩/🟨/⬜)")]
    InvalidCharacter(char),

    #[error("{hits} hits and {misplaced} misplaced letters cannot occur in a {length}-letter word")]
    ImpossibleCounts {
        hits: u8,
        misplaced: u8,
        length: usize,
    },
}

/// Feedback pattern for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// All hits for a five-letter word
    pub const PERFECT: Self = Self { code: 242, len: 5 }; // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a pattern from its packed value
    ///
    /// # Panics
    /// Panics in debug mode if `code` does not fit `len` positions
    #[inline]
    #[must_use]
    pub fn new(code: u32, len: usize) -> Self {
        debug_assert!(
            (1..=MAX_WORD_LENGTH).contains(&len),
            "pattern length out of range"
        );
        debug_assert!(code < 3u32.pow(len as u32), "pattern value too large");
        Self {
            code,
            len: len as u8,
        }
    }

    /// All-hit pattern of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::new(3u32.pow(len as u32) - 1, len)
    }

    /// All-absent pattern of the given length
    #[must_use]
    pub fn absent(len: usize) -> Self {
        Self::new(0, len)
    }

    /// Build a pattern from explicit tags
    ///
    /// # Panics
    /// Panics if `tags` is empty or longer than `MAX_WORD_LENGTH`
    #[must_use]
    pub fn from_tags(tags: &[Feedback]) -> Self {
        assert!(
            (1..=MAX_WORD_LENGTH).contains(&tags.len()),
            "pattern length out of range"
        );
        let code = tags
            .iter()
            .rev()
            .fold(0u32, |acc, &tag| acc * 3 + tag as u32);
        Self::new(code, tags.len())
    }

    /// Packed base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false; patterns have at least one position
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is a hit
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.len())
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements exact feedback rules including repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark hits and consume them from the target's letter pool
    /// 2. Second pass: for remaining positions, mark present only while the
    ///    letter is still available in the pool, consuming one occurrence
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("assay").unwrap();
    /// let target = Word::new("sassy").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// use Feedback::*;
    /// assert_eq!(pattern.tags(), vec![Present, Present, Hit, Absent, Hit]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "words must share a length");

        let guess = guess.bytes();
        let target = target.bytes();
        let mut tags = [Feedback::Absent; MAX_WORD_LENGTH];
        let mut available = [0u8; ALPHABET_SIZE];

        for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                tags[i] = Feedback::Hit;
            } else {
                available[letter_index(t)] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if tags[i] == Feedback::Hit {
                continue;
            }
            let remaining = &mut available[letter_index(g)];
            if *remaining > 0 {
                *remaining -= 1;
                tags[i] = Feedback::Present;
            }
        }

        Self::from_tags(&tags[..guess.len()])
    }

    /// Tag at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn tag_at(self, position: usize) -> Feedback {
        assert!(position < self.len(), "position out of range");
        Feedback::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// All tags in position order
    #[must_use]
    pub fn tags(self) -> Vec<Feedback> {
        let mut val = self.code;
        (0..self.len())
            .map(|_| {
                let tag = Feedback::from_digit(val % 3);
                val /= 3;
                tag
            })
            .collect()
    }

    /// Count the hits
    #[must_use]
    pub fn count_hits(self) -> u8 {
        self.count(Feedback::Hit)
    }

    /// Count the present-but-misplaced letters
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.count(Feedback::Present)
    }

    /// Collapse to `(hits, misplaced)`
    ///
    /// Lossy: only distinguishes outcomes when both words have unique letters.
    #[must_use]
    pub fn counts(self) -> (u8, u8) {
        (self.count_hits(), self.count_present())
    }

    /// Representative pattern with the same counts: hits first, then
    /// misplaced, then absent
    ///
    /// Two patterns collapse to the same value iff their counts agree.
    #[must_use]
    pub fn collapse_to_counts(self) -> Self {
        let (hits, present) = self.counts();
        let (hits, present) = (usize::from(hits), usize::from(present));
        let tags: Vec<Feedback> = (0..self.len())
            .map(|i| {
                if i < hits {
                    Feedback::Hit
                } else if i < hits + present {
                    Feedback::Present
                } else {
                    Feedback::Absent
                }
            })
            .collect();
        Self::from_tags(&tags)
    }

    fn count(self, wanted: Feedback) -> u8 {
        self.tags().into_iter().filter(|&tag| tag == wanted).count() as u8
    }

    /// Parse a pattern like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `PatternError` on a wrong length or unknown character.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY", 5).unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨", 5).unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str, len: usize) -> Result<Self, PatternError> {
        let tags = s
            .trim()
            .chars()
            .map(|ch| Feedback::from_char(ch).ok_or(PatternError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if tags.len() != len || tags.is_empty() || tags.len() > MAX_WORD_LENGTH {
            return Err(PatternError::InvalidLength {
                expected: len,
                actual: tags.len(),
            });
        }

        Ok(Self::from_tags(&tags))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tags().into_iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_WORD_LENGTH)
    }
}
