//! BIP-39 Mnemonic Completion Tool
//!
//! Reconstructs a valid BIP-39 recovery mnemonic from a short repeating
//! phrase and a target word count, and enumerates every final word that
//! keeps the mnemonic checksum-valid.

pub mod codec;
pub mod complete;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod expander;
pub mod request;

// Re-export main types
pub use complete::{complete, Completion};
pub use entropy::{possible_last_bytes, EntropyInfo};
pub use error::{CompletionError, Result};
pub use expander::{expand, expand_phrase, parse_phrase};
pub use request::{CompletionRequest, CompletionResponse};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::codec;
    pub use crate::complete::{complete, Completion};
    pub use crate::entropy::{possible_last_bytes, EntropyInfo};
    pub use crate::error::{CompletionError, Result};
    pub use crate::expander::{expand, expand_phrase, parse_phrase};
    pub use crate::request::{CompletionRequest, CompletionResponse};
}


/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mnemonic length assumed when a request leaves it unset
pub const DEFAULT_MNEMONIC_LENGTH: usize = 12;

/// Minimum supported mnemonic length
pub const MIN_MNEMONIC_LENGTH: usize = 12;

/// Maximum supported mnemonic length
pub const MAX_MNEMONIC_LENGTH: usize = 24;

/// Bits of entropy-plus-checksum encoded by each mnemonic word
pub const WORD_BIT_LENGTH: usize = 11;

/// Returns true for the word counts BIP-39 defines: 12, 15, 18, 21 or 24.
pub fn is_valid_word_count(length: usize) -> bool {
    length % 3 == 0 && (MIN_MNEMONIC_LENGTH..=MAX_MNEMONIC_LENGTH).contains(&length)
}
