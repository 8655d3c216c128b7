//! Entropy geometry and last-byte enumeration
//!
//! A mnemonic's final 11-bit word index mixes the tail of the entropy with
//! the checksum: `11 - checksum_bits` of it are "free" bits that live in the
//! last entropy byte and do not affect which of the preceding words decode.
//! Walking those free bits is how the tool enumerates alternative final
//! words without touching the rest of the phrase.

use crate::error::{CompletionError, Result};

/// Entropy byte lengths BIP-39 defines, one per supported word count.
pub const VALID_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Derived bit-level quantities for one of the five valid entropy sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyInfo {
    byte_length: usize,
}

impl EntropyInfo {
    /// Create from an entropy byte length, which must be 16, 20, 24, 28 or 32.
    pub fn new(byte_length: usize) -> Result<Self> {
        if !VALID_ENTROPY_LENGTHS.contains(&byte_length) {
            return Err(CompletionError::InvalidEntropyLength(byte_length));
        }
        Ok(Self { byte_length })
    }

    /// Create from a mnemonic word count, which must be 12, 15, 18, 21 or 24.
    pub fn for_word_count(word_count: usize) -> Result<Self> {
        if !crate::is_valid_word_count(word_count) {
            return Err(CompletionError::InvalidLength(word_count));
        }
        Self::new(word_count / 3 * 4)
    }

    /// Entropy length in bytes.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Entropy length in bits.
    pub fn bit_length(&self) -> usize {
        self.byte_length * 8
    }

    /// Number of checksum bits appended when encoding: one per 32 entropy bits.
    pub fn checksum_bit_length(&self) -> usize {
        self.bit_length() / 32
    }

    /// Words in the mnemonic this entropy size encodes to.
    pub fn word_count(&self) -> usize {
        self.byte_length / 4 * 3
    }

    /// Bits of the final word index that come from the last entropy byte
    /// rather than being fixed by the preceding words.
    pub fn free_bit_length(&self) -> usize {
        crate::WORD_BIT_LENGTH - self.checksum_bit_length()
    }

    /// Number of distinct checksum-valid final words: `2 ^ free_bit_length`.
    pub fn max_last_words(&self) -> usize {
        1 << self.free_bit_length()
    }

    /// Mask selecting the bits of the last entropy byte that every candidate
    /// must leave untouched.
    pub fn preservation_mask(&self) -> u8 {
        0xffu8 << self.free_bit_length()
    }

    /// Enumerate up to `count` last-byte values that keep the high
    /// (non-free) bits of `last_byte` intact and spread across the free-bit
    /// range.
    ///
    /// The result starts at the minimal free-bit value and, when the full
    /// range is requested, ends at the maximal one. When fewer samples than
    /// `max_last_words` are requested the stride between samples gets one
    /// extra bump at the midpoint; that bucket-centering quirk is
    /// intentional and pinned by tests, so leave it exactly as is.
    pub fn possible_last_bytes(&self, last_byte: u8, count: usize) -> Vec<u8> {
        if count == 0 {
            return Vec::new();
        }

        let max_last_words = self.max_last_words();
        let preserved = last_byte & self.preservation_mask();
        let sample_count = max_last_words.min(count);

        let mut increment = (max_last_words / sample_count) as u8;
        let mut next = increment.saturating_sub(1);
        if increment <= 1 {
            increment = 1;
            next = 1;
        }

        let mut bytes = Vec::with_capacity(sample_count);
        bytes.push(preserved);
        for i in 1..sample_count {
            bytes.push(preserved | next);
            next += increment;
            if increment > 1 && i == sample_count / 2 - 1 {
                next += increment;
            }
        }
        bytes
    }
}

/// Enumerate alternative last-byte values for an entropy of
/// `entropy_byte_length` bytes whose current final byte is `last_byte`.
///
/// Validates the byte length, then defers to
/// [`EntropyInfo::possible_last_bytes`]. A `count` of zero yields an empty
/// vector, letting callers suppress enumeration entirely.
pub fn possible_last_bytes(
    entropy_byte_length: usize,
    last_byte: u8,
    count: usize,
) -> Result<Vec<u8>> {
    let info = EntropyInfo::new(entropy_byte_length)?;
    Ok(info.possible_last_bytes(last_byte, count))
}
