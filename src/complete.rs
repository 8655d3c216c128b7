//! High-level completion: phrase in, canonical mnemonic and end words out

use crate::codec;
use crate::entropy::EntropyInfo;
use crate::error::Result;
use crate::expander;

/// Result of completing a phrase into a full mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The canonical checksum-valid mnemonic
    pub mnemonic: String,
    /// Number of words in the mnemonic
    pub length: usize,
    /// Alternative checksum-valid final words, empty unless requested
    pub ends: Vec<String>,
}

/// Complete `phrase` into a checksum-valid mnemonic of `target_length`
/// words and, when `end_word_count > 0`, enumerate up to that many
/// alternative final words.
///
/// The tiled word sequence is repacked to its raw entropy and re-encoded,
/// which fixes up the final word so the checksum verifies. Every word in
/// `ends` is guaranteed to yield a valid mnemonic when substituted for the
/// last word. `length` reports the actual word count, which exceeds
/// `target_length` when the phrase itself was longer.
pub fn complete(phrase: &str, target_length: usize, end_word_count: usize) -> Result<Completion> {
    let words = expander::expand_phrase(phrase, target_length)?;
    let entropy = codec::entropy_from_words(&words)?;
    let mnemonic = codec::encode(&entropy)?;
    let length = mnemonic.split_whitespace().count();

    let ends = if end_word_count > 0 {
        collect_end_words(&entropy, end_word_count)?
    } else {
        Vec::new()
    };

    Ok(Completion {
        mnemonic,
        length,
        ends,
    })
}

/// Re-encode the entropy once per candidate last byte and keep the final
/// word of each resulting mnemonic.
fn collect_end_words(entropy: &[u8], requested: usize) -> Result<Vec<String>> {
    let info = EntropyInfo::new(entropy.len())?;
    let last_index = entropy.len() - 1;

    let candidates = info.possible_last_bytes(entropy[last_index], requested);
    let mut ends = Vec::with_capacity(candidates.len());
    let mut variant = entropy.to_vec();
    for byte in candidates {
        variant[last_index] = byte;
        let mnemonic = codec::encode(&variant)?;
        if let Some(word) = mnemonic.split_whitespace().last() {
            ends.push(word.to_string());
        }
    }
    Ok(ends)
}
