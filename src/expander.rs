//! Phrase parsing and cyclic expansion into a full-length word sequence

use crate::dictionary;
use crate::error::{CompletionError, Result};

/// Split a raw phrase into dictionary words.
///
/// Underscores count as word separators (URL-friendly input), then the
/// phrase splits on whitespace. Fails with `EmptyPhrase` when nothing
/// remains and with `UnknownWord` naming the first word missing from the
/// wordlist along with its 0-based position.
pub fn parse_phrase(phrase: &str) -> Result<Vec<String>> {
    let normalized = phrase.replace('_', " ");
    let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Err(CompletionError::EmptyPhrase(phrase.to_string()));
    }

    for (position, word) in words.iter().enumerate() {
        if dictionary::index_of(word).is_none() {
            return Err(CompletionError::UnknownWord {
                word: word.clone(),
                position,
            });
        }
    }
    Ok(words)
}

/// Tile `words` cyclically until `target_length` words are filled.
///
/// `target_length` must be 12, 15, 18, 21 or 24. A phrase longer than 12
/// words is never silently truncated: the effective length is raised to the
/// smallest multiple of 3 that fits it (capped by the 24-word maximum, which
/// the raise can never exceed for inputs of at most 24 words).
pub fn expand<S: AsRef<str>>(words: &[S], target_length: usize) -> Result<Vec<String>> {
    if !crate::is_valid_word_count(target_length) {
        return Err(CompletionError::InvalidLength(target_length));
    }
    if words.is_empty() {
        return Err(CompletionError::EmptyPhrase(String::new()));
    }

    let length = effective_length(words.len(), target_length);
    Ok(words
        .iter()
        .map(|w| w.as_ref().to_string())
        .cycle()
        .take(length)
        .collect())
}

/// Parse a raw phrase and expand it in one step.
pub fn expand_phrase(phrase: &str, target_length: usize) -> Result<Vec<String>> {
    if !crate::is_valid_word_count(target_length) {
        return Err(CompletionError::InvalidLength(target_length));
    }
    let words = parse_phrase(phrase)?;
    expand(&words, target_length)
}

/// The length actually expanded to: the requested one, unless the phrase
/// itself is longer than 12 words and fits a larger supported count.
fn effective_length(word_count: usize, target_length: usize) -> usize {
    if word_count > crate::MIN_MNEMONIC_LENGTH && word_count <= crate::MAX_MNEMONIC_LENGTH {
        word_count + (3 - word_count % 3) % 3
    } else {
        target_length
    }
}
