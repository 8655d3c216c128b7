//! Word dictionary backed by the canonical BIP-39 English wordlist
//!
//! The `bip39` crate owns the 2048-word table and its ordering; this module
//! only adds the reverse lookup the completion engine needs. The index map is
//! built once and is read-only afterwards, so it is safe to share across
//! concurrent callers.

use bip39::Language;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of words in the BIP-39 wordlist
pub const WORD_COUNT: usize = 2048;

static WORD_INDEX: LazyLock<HashMap<&'static str, u16>> = LazyLock::new(|| {
    Language::English
        .word_list()
        .iter()
        .enumerate()
        .map(|(i, w)| (*w, i as u16))
        .collect()
});

/// Look up the 11-bit index of a word, `None` if it is not in the wordlist.
pub fn index_of(word: &str) -> Option<u16> {
    WORD_INDEX.get(word).copied()
}

/// The word at a given index, `None` when the index is out of range.
pub fn word_at(index: u16) -> Option<&'static str> {
    Language::English.word_list().get(index as usize).copied()
}

/// The full ordered wordlist; the position of each word defines its index.
pub fn all() -> &'static [&'static str; WORD_COUNT] {
    Language::English.word_list()
}

/// True when every entry of `words` is in the wordlist.
pub fn contains_all<S: AsRef<str>>(words: &[S]) -> bool {
    words.iter().all(|w| index_of(w.as_ref()).is_some())
}
