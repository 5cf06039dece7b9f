//! Word list loading utilities
//!
//! Reads flat newline-separated lists or JSON `{"answers": [...], "allowed":
//! [...]}` files. Invalid and wrong-length entries are skipped, duplicates are
//! dropped keeping the first occurrence.

use super::embedded::{ALLOWED, ANSWERS};
use crate::core::{DEFAULT_WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading word lists
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid word list JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no usable {length}-letter words in {origin}")]
    Empty { origin: String, length: usize },
}

/// Answer words and allowed guesses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordLists {
    pub answers: Vec<Word>,
    pub allowed: Vec<Word>,
}

#[derive(Deserialize)]
struct StructuredLists {
    answers: Vec<String>,
    #[serde(default)]
    allowed: Vec<String>,
}

impl WordLists {
    /// Build a normalized pair
    ///
    /// Both lists are deduplicated and `allowed` is extended with any answers
    /// missing from it. An empty `allowed` becomes a copy of `answers`.
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let answers = dedupe(answers);
        let mut allowed = dedupe(allowed);

        let known: FxHashSet<Word> = allowed.iter().cloned().collect();
        let missing: Vec<Word> = answers
            .iter()
            .filter(|word| !known.contains(*word))
            .cloned()
            .collect();
        if !missing.is_empty() {
            log::debug!("adding {} answers missing from the allowed list", missing.len());
            allowed.extend(missing);
        }

        Self { answers, allowed }
    }

    /// Lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::wordlists::{WordLists, ANSWERS_COUNT};
    ///
    /// let lists = WordLists::embedded();
    /// assert_eq!(lists.answers.len(), ANSWERS_COUNT);
    /// assert!(lists.allowed.len() >= lists.answers.len());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Use the embedded answers as the only guesses
    #[must_use]
    pub fn embedded_answers_only() -> Self {
        let answers = words_from_slice(ANSWERS);
        Self::new(answers.clone(), answers)
    }

    /// Drop words with repeated letters from both lists
    pub fn retain_unique_letters(&mut self) {
        let before = (self.answers.len(), self.allowed.len());
        self.answers.retain(Word::has_unique_letters);
        self.allowed.retain(Word::has_unique_letters);
        log::info!(
            "unique-letter policy: {} -> {} answers, {} -> {} allowed",
            before.0,
            self.answers.len(),
            before.1,
            self.allowed.len()
        );
    }
}

fn dedupe(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Parse words of `length` from text lines
///
/// Blank lines and lines starting with `#` are ignored; anything else that
/// is not a valid word is skipped and logged.
pub fn parse_words<'a>(lines: impl IntoIterator<Item = &'a str>, length: usize) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::with_length(line, length) {
            Ok(word) => Some(word),
            Err(err) => {
                log::debug!("skipping '{line}': {err}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {skipped} entries that are not {length}-letter words");
    }
    dedupe(words)
}

/// Load a flat newline-separated list
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it has no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_flat;
///
/// let words = load_flat("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_flat<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = read(path)?;
    let words = parse_words(content.lines(), length);

    if words.is_empty() {
        return Err(WordListError::Empty {
            origin: path.display().to_string(),
            length,
        });
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load answers and allowed guesses from a JSON file
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read, is not valid JSON of
/// the expected shape, or has no usable answers.
pub fn load_structured<P: AsRef<Path>>(path: P, length: usize) -> Result<WordLists, WordListError> {
    let path = path.as_ref();
    let content = read(path)?;
    let lists: StructuredLists =
        serde_json::from_str(&content).map_err(|source| WordListError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let answers = parse_words(lists.answers.iter().map(String::as_str), length);
    if answers.is_empty() {
        return Err(WordListError::Empty {
            origin: path.display().to_string(),
            length,
        });
    }
    let allowed = parse_words(lists.allowed.iter().map(String::as_str), length);

    log::info!(
        "loaded {} answers and {} allowed words from {}",
        answers.len(),
        allowed.len(),
        path.display()
    );
    Ok(WordLists::new(answers, allowed))
}

/// Load a list file, choosing the format by extension
///
/// `.json` files are read as structured lists; anything else is a flat list
/// used as both answers and guesses.
///
/// # Errors
///
/// Returns `WordListError` from the underlying loader.
pub fn load_path<P: AsRef<Path>>(path: P, length: usize) -> Result<WordLists, WordListError> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        load_structured(path, length)
    } else {
        let words = load_flat(path, length)?;
        Ok(WordLists::new(words.clone(), words))
    }
}

fn read(path: &Path) -> Result<String, WordListError> {
    fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_slice;
/// use wordle_advisor::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_slice_with_length(slice, DEFAULT_WORD_LENGTH)
}

/// Convert a string slice to words of `length`, skipping invalid entries
#[must_use]
pub fn words_from_slice_with_length(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}
