use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Policy knobs for [`crate::Codec`].
///
/// The defaults reproduce the plain [`crate::encode`] / [`crate::decode`]
/// behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Split mnemonics on runs of whitespace and ignore leading/trailing
    /// whitespace. When off, every single space is a separator and doubled
    /// spaces produce empty words.
    pub normalize_whitespace: bool,
    /// Reject word lists that are not exactly 2048 unique entries.
    pub strict_wordlist: bool,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CodecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
