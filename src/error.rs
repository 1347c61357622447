use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// A required argument was absent or empty.
    #[error("Parameter '{0}' is required.")]
    MissingParameter(&'static str),

    /// Entropy bit count or mnemonic word count outside the allowed range.
    #[error("{0}")]
    InvalidLength(String),

    /// Entropy length is not a whole number of words.
    #[error("Entropy must be a multiple of 11.")]
    InvalidAlignment,

    /// Entropy contains something other than `0` or `1`.
    #[error("Entropy contains invalid bit {found:?} at position {position}.")]
    InvalidBit { position: usize, found: char },

    /// A mnemonic word has no entry in the word list.
    #[error("Word '{0}' not found in wordlist.")]
    WordNotFound(String),

    /// A word index at or past `limit`: the end of the word list on encode,
    /// the 11-bit chunk width on decode.
    #[error("Word index {index} is out of range; indices must be below {limit}.")]
    IndexOutOfRange { index: usize, limit: usize },

    /// Decoded entropy cannot be packed into whole bytes.
    #[error("Entropy of {bits} bits is not a whole number of bytes.")]
    ByteAlignment { bits: usize },

    /// Word list rejected by the strict check or the loader.
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Hex-encoded entropy could not be decoded.
    #[error("invalid hex entropy: {0}")]
    InvalidHex(String),

    /// Propagated I/O error while loading a word list.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}

impl CodecError {
    /// Process exit status used by the command-line tools for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CodecError::MissingParameter(_) => 2,
            CodecError::InvalidLength(_) => 3,
            CodecError::InvalidAlignment => 4,
            CodecError::InvalidBit { .. } => 5,
            CodecError::WordNotFound(_) => 6,
            CodecError::IndexOutOfRange { .. } => 7,
            CodecError::InvalidWordlist(_) => 8,
            CodecError::InvalidHex(_) => 9,
            CodecError::Io(_) => 10,
            CodecError::Config(_) => 11,
            CodecError::ByteAlignment { .. } => 12,
        }
    }
}
