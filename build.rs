//! Embeds the answer and allowed-guess lists
//!
//! Emits one `word_lists.rs` into `OUT_DIR`. Answers are the targets a game
//! can have; allowed words are everything accepted as a guess. Answers
//! missing from the allowed file are appended to `ALLOWED` so the second list
//! is always a superset of the first.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const ANSWERS_FILE: &str = "data/answers.txt";
const ALLOWED_FILE: &str = "data/allowed.txt";

fn main() {
    println!("cargo:rerun-if-changed={ANSWERS_FILE}");
    println!("cargo:rerun-if-changed={ALLOWED_FILE}");

    let answers = read_words(ANSWERS_FILE);
    let mut allowed = read_words(ALLOWED_FILE);

    let known: HashSet<String> = allowed.iter().cloned().collect();
    let missing: Vec<String> = answers
        .iter()
        .filter(|word| !known.contains(*word))
        .cloned()
        .collect();
    if !missing.is_empty() {
        println!(
            "cargo:warning={} answers missing from {ALLOWED_FILE}; appending them",
            missing.len()
        );
        allowed.extend(missing);
    }

    let mut source = String::new();
    let _ = writeln!(source, "// Generated by build.rs from {ANSWERS_FILE} and {ALLOWED_FILE}");
    emit_list(&mut source, "ANSWERS", "Words that can be the hidden answer", &answers);
    emit_list(
        &mut source,
        "ALLOWED",
        "Words accepted as guesses, a superset of `ANSWERS`",
        &allowed,
    );

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let path = Path::new(&out_dir).join("word_lists.rs");
    fs::write(&path, source).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

/// Lowercased words in file order, first occurrence only
///
/// Blank lines and `#` comments are skipped; anything that is not purely
/// alphabetic fails the build.
fn read_words(path: &str) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{path}:{}: '{word}' is not a word",
            number + 1
        );
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

fn emit_list(source: &mut String, name: &str, doc: &str, words: &[String]) {
    let _ = writeln!(source);
    let _ = writeln!(source, "/// {doc}");
    let _ = writeln!(source, "pub const {name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    let _ = writeln!(source, "];");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// Number of words in `{name}`");
    let _ = writeln!(source, "pub const {name}_COUNT: usize = {};", words.len());
}
