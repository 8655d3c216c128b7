//! Request and response value types for the serialization boundary
//!
//! Callers arriving over CLI gateways cannot always pass integers, so the
//! `length` field accepts a JSON number, a numeric string, or nothing at
//! all. Coercion and defaulting happen here; the completion core only ever
//! sees a plain `usize`.

use crate::complete::Completion;
use crate::error::CompletionError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completion request as received from the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletionRequest {
    /// Short phrase to tile into a full mnemonic
    pub phrase: String,

    /// Requested mnemonic length; 0 means "use the default"
    #[serde(default, deserialize_with = "flexible_length")]
    pub length: usize,

    /// How many alternative final words to enumerate
    #[serde(default, rename = "endWords")]
    pub end_words: usize,
}

impl CompletionRequest {
    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace an unset length with [`crate::DEFAULT_MNEMONIC_LENGTH`].
    pub fn assume_defaults(&mut self) {
        if self.length == 0 {
            self.length = crate::DEFAULT_MNEMONIC_LENGTH;
        }
    }
}

/// The response body shape: either a completed mnemonic or an error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The canonical mnemonic, empty on error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mnemonic: String,

    /// Word count of the mnemonic
    #[serde(default, skip_serializing_if = "is_zero")]
    pub length: usize,

    /// Space-joined alternative final words
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ends: String,

    /// Error message, absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompletionResponse {
    /// Build a success response from a completion result.
    pub fn from_completion(completion: &Completion) -> Self {
        Self {
            mnemonic: completion.mnemonic.clone(),
            length: completion.length,
            ends: completion.ends.join(" "),
            error: None,
        }
    }

    /// Build an error response carrying the error's display message.
    pub fn from_error(error: &CompletionError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

/// Accept a length given as a JSON number, a numeric string, or null.
fn flexible_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    struct LengthVisitor;

    impl<'de> Visitor<'de> for LengthVisitor {
        type Value = usize;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a numeric string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<usize, E> {
            Ok(value as usize)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<usize, E> {
            usize::try_from(value).map_err(|_| E::custom("length cannot be negative"))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<usize, E> {
            value
                .parse()
                .map_err(|_| E::custom(format!("invalid length string '{value}'")))
        }

        fn visit_unit<E: de::Error>(self) -> Result<usize, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(LengthVisitor)
}
