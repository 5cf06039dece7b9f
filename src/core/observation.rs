//! Feedback observed for one turn
//!
//! Callers report either the full positional pattern or, for games restricted
//! to unique-letter words, the legacy `(hits, misplaced)` counts.

use super::pattern::{Pattern, PatternError};
use std::fmt;

/// Feedback supplied by the caller after playing a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observation {
    /// Full per-position feedback
    Pattern(Pattern),
    /// Hit and misplaced counts only
    Counts { hits: u8, misplaced: u8 },
}

impl Observation {
    /// Check a computed pattern against this observation
    #[inline]
    #[must_use]
    pub fn matches(&self, pattern: Pattern) -> bool {
        match *self {
            Self::Pattern(observed) => observed == pattern,
            Self::Counts { hits, misplaced } => pattern.counts() == (hits, misplaced),
        }
    }

    /// Number of hits reported
    #[must_use]
    pub fn hits(&self) -> u8 {
        match *self {
            Self::Pattern(pattern) => pattern.count_hits(),
            Self::Counts { hits, .. } => hits,
        }
    }

    /// True when every position was a hit
    #[must_use]
    pub fn is_solved(&self, word_length: usize) -> bool {
        usize::from(self.hits()) == word_length
    }

    /// Positions described, if the observation carries them
    #[must_use]
    pub fn pattern_len(&self) -> Option<usize> {
        match self {
            Self::Pattern(pattern) => Some(pattern.len()),
            Self::Counts { .. } => None,
        }
    }

    /// Build a counts observation, rejecting impossible totals
    ///
    /// # Errors
    /// Returns `PatternError::ImpossibleCounts` if `hits + misplaced` exceeds
    /// the word length or the only miss would be a single misplaced letter.
    pub fn counts(hits: u8, misplaced: u8, length: usize) -> Result<Self, PatternError> {
        let total = usize::from(hits) + usize::from(misplaced);
        // Every letter but one in place leaves nowhere for the last to be misplaced
        if total > length || (usize::from(hits) + 1 == length && misplaced == 1) {
            return Err(PatternError::ImpossibleCounts {
                hits,
                misplaced,
                length,
            });
        }
        Ok(Self::Counts { hits, misplaced })
    }

    /// Parse feedback text
    ///
    /// Accepts a pattern string ("GY-GY", "🟩🟨⬜🟩🟨") or counts written as
    /// "2a1b" or "2,1".
    ///
    /// # Errors
    /// Returns `PatternError` if the text is neither form or describes an
    /// impossible outcome.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Observation;
    ///
    /// let counts = Observation::parse("2a1b", 5).unwrap();
    /// assert_eq!(counts, Observation::Counts { hits: 2, misplaced: 1 });
    ///
    /// let pattern = Observation::parse("gy-g-", 5).unwrap();
    /// assert_eq!(pattern.hits(), 2);
    /// ```
    pub fn parse(s: &str, length: usize) -> Result<Self, PatternError> {
        let s = s.trim();
        if let Some((hits, misplaced)) = parse_counts(s) {
            return Self::counts(hits, misplaced, length);
        }
        Pattern::parse(s, length).map(Self::Pattern)
    }
}

fn parse_counts(s: &str) -> Option<(u8, u8)> {
    let lower = s.to_ascii_lowercase();
    let (hits, misplaced) = if let Some(rest) = lower.strip_suffix('b') {
        rest.split_once('a')?
    } else {
        lower.split_once(',')?
    };
    Some((hits.trim().parse().ok()?, misplaced.trim().parse().ok()?))
}

/// How much a turn's feedback reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// Full per-position pattern
    #[default]
    Pattern,
    /// Hit and misplaced counts only
    Counts,
}

impl Resolution {
    /// Partition key for a computed pattern
    ///
    /// Targets sharing a key cannot be told apart by the feedback.
    #[inline]
    #[must_use]
    pub fn key(self, pattern: Pattern) -> Pattern {
        match self {
            Self::Pattern => pattern,
            Self::Counts => pattern.collapse_to_counts(),
        }
    }

    /// Feedback a player receives for a computed pattern
    #[must_use]
    pub fn observation(self, pattern: Pattern) -> Observation {
        match self {
            Self::Pattern => Observation::Pattern(pattern),
            Self::Counts => {
                let (hits, misplaced) = pattern.counts();
                Observation::Counts { hits, misplaced }
            }
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => f.write_str("pattern"),
            Self::Counts => f.write_str("counts"),
        }
    }
}

impl From<Pattern> for Observation {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => write!(f, "{pattern}"),
            Self::Counts { hits, misplaced } => write!(f, "{hits}a{misplaced}b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn parses_count_forms() {
        assert_eq!(
            Observation::parse("2a1b", 5).unwrap(),
            Observation::Counts {
                hits: 2,
                misplaced: 1
            }
        );
        assert_eq!(
            Observation::parse(" 0, 3 ", 5).unwrap(),
            Observation::Counts {
                hits: 0,
                misplaced: 3
            }
        );
    }

    #[test]
    fn rejects_impossible_counts() {
        assert!(Observation::parse("4a2b", 5).is_err());
        assert!(Observation::parse("4a1b", 5).is_err());
        assert!(Observation::parse("5a0b", 5).is_ok());
    }

    #[test]
    fn pattern_strings_are_not_counts() {
        // "b" is also an absent mark; a full pattern must not parse as counts
        let obs = Observation::parse("bbbbb", 5).unwrap();
        assert_eq!(obs, Observation::Pattern(Pattern::absent(5)));
    }

    #[test]
    fn counts_match_collapsed_pattern() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("trace").unwrap();
        let pattern = Pattern::calculate(&guess, &target);

        let (hits, misplaced) = pattern.counts();
        let obs = Observation::Counts { hits, misplaced };
        assert!(obs.matches(pattern));
        assert!(Observation::Pattern(pattern).matches(pattern));
        assert!(!obs.matches(Pattern::PERFECT));
    }

    #[test]
    fn resolution_observations() {
        let pattern = Pattern::calculate(&Word::new("crane").unwrap(), &Word::new("trace").unwrap());

        assert_eq!(
            Resolution::Pattern.observation(pattern),
            Observation::Pattern(pattern)
        );
        let counts = Resolution::Counts.observation(pattern);
        assert_eq!(counts, Observation::Counts { hits: 3, misplaced: 1 });
        assert!(counts.matches(pattern));

        assert_eq!(Resolution::Pattern.key(pattern), pattern);
        assert_eq!(Resolution::Counts.key(pattern), pattern.collapse_to_counts());
        assert_eq!(counts.pattern_len(), None);
        assert_eq!(Observation::Pattern(pattern).pattern_len(), Some(5));
    }

    #[test]
    fn solved_detection() {
        assert!(Observation::Pattern(Pattern::PERFECT).is_solved(5));
        assert!(Observation::Counts { hits: 5, misplaced: 0 }.is_solved(5));
        assert!(!Observation::Counts { hits: 4, misplaced: 0 }.is_solved(5));
    }

    #[test]
    fn display_forms() {
        let obs = Observation::Counts {
            hits: 1,
            misplaced: 2,
        };
        assert_eq!(obs.to_string(), "1a2b");
        assert_eq!(Observation::from(Pattern::PERFECT).to_string(), "🟩🟩🟩🟩🟩");
    }
}
