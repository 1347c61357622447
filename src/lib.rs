//! Bidirectional codec between entropy bit-strings and word-list mnemonics.
//!
//! Every word carries [`BITS_PER_WORD`] bits of entropy, chosen by its
//! position in a caller supplied word list. The codec itself is pure: no
//! I/O, no logging, no shared state.
//!
//! ```
//! let words: Vec<String> = (0..2048).map(|i| format!("w{i}")).collect();
//! let mnemonic = bitphrase::encode(&words, "0000000000100000000010").unwrap();
//! assert_eq!(mnemonic, "w1 w2");
//! assert_eq!(
//!     bitphrase::decode(&words, &mnemonic).unwrap(),
//!     "0000000000100000000010"
//! );
//! ```

pub mod bits;
pub mod codec;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod wordlist;

pub use codec::{decode, encode, Codec, WordSource};
pub use config::Config;
pub use error::CodecError;
pub use wordlist::{Wordlist, WordlistReport};

/// Entropy bits carried by one word.
pub const BITS_PER_WORD: usize = 11;
/// Number of distinct chunk values, and the size of a complete word list.
pub const WORDLIST_SIZE: usize = 1 << BITS_PER_WORD;
/// Shortest mnemonic, in words.
pub const MIN_WORDS: usize = 1;
/// Longest mnemonic, in words.
pub const MAX_WORDS: usize = 46;
pub const MIN_ENTROPY_BITS: usize = MIN_WORDS * BITS_PER_WORD;
pub const MAX_ENTROPY_BITS: usize = MAX_WORDS * BITS_PER_WORD;
