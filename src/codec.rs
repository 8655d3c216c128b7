//! Mnemonic encoding and decoding via the `bip39` crate
//!
//! The `bip39` crate is the sole authority for checksum hashing: this module
//! never computes SHA-256 itself. What it adds on top is the lenient
//! word-to-entropy repack (`entropy_from_words`) that the completion path
//! needs, because a tiled phrase is generally not checksum-valid yet and the
//! crate's validating parser would reject it.

use crate::dictionary;
use crate::entropy::EntropyInfo;
use crate::error::{CompletionError, Result};
use bip39::{Language, Mnemonic};

/// Encode entropy bytes into a checksum-valid mnemonic string.
///
/// Fails with `InvalidEntropyLength` unless the length is one of
/// 16, 20, 24, 28 or 32 bytes.
pub fn encode(entropy: &[u8]) -> Result<String> {
    // Report set membership errors uniformly before handing off
    EntropyInfo::new(entropy.len())?;
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|e| CompletionError::Bip39(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Decode a mnemonic into its entropy bytes, validating the checksum.
pub fn decode(mnemonic: &str) -> Result<Vec<u8>> {
    let parsed = parse(mnemonic)?;
    Ok(parsed.to_entropy())
}

/// Decode a mnemonic into entropy bytes plus one trailing byte whose low
/// bits hold the checksum.
///
/// The checksum bits are read back out of the final word's index, so no
/// hashing happens here. Used for introspecting bit placement, not by the
/// completion path.
pub fn decode_with_checksum(mnemonic: &str) -> Result<Vec<u8>> {
    let parsed = parse(mnemonic)?;
    let info = EntropyInfo::for_word_count(parsed.word_count())?;

    let last_word = mnemonic
        .split_whitespace()
        .last()
        .ok_or_else(|| CompletionError::EmptyPhrase(mnemonic.to_string()))?;
    let last_index = dictionary::index_of(last_word).ok_or_else(|| CompletionError::UnknownWord {
        word: last_word.to_string(),
        position: parsed.word_count() - 1,
    })?;

    let checksum_mask = (1u16 << info.checksum_bit_length()) - 1;
    let mut bytes = parsed.to_entropy();
    bytes.push((last_index & checksum_mask) as u8);
    Ok(bytes)
}

/// True when the string parses as a checksum-valid English mnemonic.
pub fn is_valid(mnemonic: &str) -> bool {
    Mnemonic::parse_in(Language::English, mnemonic).is_ok()
}

/// Repack a word sequence into its entropy bytes without validating the
/// checksum.
///
/// Concatenates the 11-bit index of every word most-significant-bit first
/// and keeps the leading entropy bits; whatever checksum bits the sequence
/// happens to carry are discarded. Re-encoding the result yields the
/// canonical mnemonic whose first `word_count - 1` words match the input.
pub fn entropy_from_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<u8>> {
    let info = EntropyInfo::for_word_count(words.len())?;

    let mut bytes = Vec::with_capacity(info.byte_length() + 1);
    let mut acc: u32 = 0;
    let mut pending_bits = 0usize;
    for (position, word) in words.iter().enumerate() {
        let index = dictionary::index_of(word.as_ref()).ok_or_else(|| {
            CompletionError::UnknownWord {
                word: word.as_ref().to_string(),
                position,
            }
        })?;
        acc = (acc << crate::WORD_BIT_LENGTH) | u32::from(index);
        pending_bits += crate::WORD_BIT_LENGTH;
        while pending_bits >= 8 {
            pending_bits -= 8;
            bytes.push((acc >> pending_bits) as u8);
        }
    }

    bytes.truncate(info.byte_length());
    Ok(bytes)
}

fn parse(mnemonic: &str) -> Result<Mnemonic> {
    Mnemonic::parse_in(Language::English, mnemonic).map_err(|e| match e {
        bip39::Error::InvalidChecksum => CompletionError::ChecksumMismatch,
        other => CompletionError::Bip39(other.to_string()),
    })
}
