//! Entropy ⇄ mnemonic conversion.
//!
//! Entropy is consumed MSB first in 11-bit chunks; chunk `i` selects word
//! `i` of the mnemonic by its position in the word list:
//!
//! ```text
//! 00000000000 00000000001 ...  ->  wordlist[0] wordlist[1] ...
//! ```
//!
//! The free functions [`encode`] and [`decode`] take any slice of strings and
//! apply the default policy. [`Codec`] borrows an indexed [`Wordlist`] and
//! applies a [`Config`].

use crate::bits::{self, chunk_indices, push_index_bits, validate_entropy};
use crate::{CodecError, Config, Wordlist, MAX_WORDS, MIN_WORDS};

/// Word lookup used by both directions of the codec.
pub trait WordSource {
    fn word_count(&self) -> usize;
    fn word_at(&self, index: usize) -> Option<&str>;
    /// Lowest index holding `word`.
    fn index_of(&self, word: &str) -> Option<usize>;
}

impl<S: AsRef<str>> WordSource for [S] {
    fn word_count(&self) -> usize {
        self.len()
    }

    fn word_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(|w| w.as_ref())
    }

    fn index_of(&self, word: &str) -> Option<usize> {
        self.iter().position(|w| w.as_ref() == word)
    }
}

impl WordSource for Wordlist {
    fn word_count(&self) -> usize {
        self.len()
    }

    fn word_at(&self, index: usize) -> Option<&str> {
        self.get(index)
    }

    fn index_of(&self, word: &str) -> Option<usize> {
        self.position(word)
    }
}

/// Convert an entropy bit-string into a space separated mnemonic.
pub fn encode<S: AsRef<str>>(wordlist: &[S], entropy: &str) -> Result<String, CodecError> {
    encode_with(wordlist, entropy)
}

/// Convert a mnemonic back into its entropy bit-string.
///
/// Words are separated by single spaces. Two adjacent spaces yield an empty
/// word, which then fails lookup as `WordNotFound("")`; use
/// [`Codec`] with [`Config::normalize_whitespace`] to accept loose spacing.
pub fn decode<S: AsRef<str>>(wordlist: &[S], mnemonic: &str) -> Result<String, CodecError> {
    decode_with(wordlist, mnemonic, false)
}

fn encode_with<W: WordSource + ?Sized>(wordlist: &W, entropy: &str) -> Result<String, CodecError> {
    if wordlist.word_count() == 0 {
        return Err(CodecError::MissingParameter("wordlist"));
    }
    validate_entropy(entropy)?;

    let mut words = Vec::with_capacity(entropy.len() / crate::BITS_PER_WORD);
    for index in chunk_indices(entropy) {
        let word = wordlist
            .word_at(index)
            .ok_or(CodecError::IndexOutOfRange {
                index,
                limit: wordlist.word_count(),
            })?;
        words.push(word);
    }
    Ok(words.join(" "))
}

fn decode_with<W: WordSource + ?Sized>(
    wordlist: &W,
    mnemonic: &str,
    normalize_whitespace: bool,
) -> Result<String, CodecError> {
    if wordlist.word_count() == 0 {
        return Err(CodecError::MissingParameter("wordlist"));
    }
    if mnemonic.is_empty() {
        return Err(CodecError::MissingParameter("mnemonic"));
    }

    let words: Vec<&str> = if normalize_whitespace {
        mnemonic.split_whitespace().collect()
    } else {
        mnemonic.split(' ').collect()
    };
    if !(MIN_WORDS..=MAX_WORDS).contains(&words.len()) {
        return Err(CodecError::InvalidLength(format!(
            "Mnemonic must be at least {MIN_WORDS} word and no longer than {MAX_WORDS} words."
        )));
    }

    let mut entropy = String::with_capacity(words.len() * crate::BITS_PER_WORD);
    for word in words {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| CodecError::WordNotFound(word.to_owned()))?;
        push_index_bits(&mut entropy, index)?;
    }
    Ok(entropy)
}

/// A word list paired with a codec policy.
#[derive(Debug, Clone)]
pub struct Codec<'a> {
    wordlist: &'a Wordlist,
    config: Config,
}

impl<'a> Codec<'a> {
    /// Fails with [`CodecError::InvalidWordlist`] when `config.strict_wordlist`
    /// is set and the list is not exactly 2048 unique words.
    pub fn new(wordlist: &'a Wordlist, config: Config) -> Result<Self, CodecError> {
        if config.strict_wordlist {
            wordlist.check_strict()?;
        }
        Ok(Self { wordlist, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn encode(&self, entropy: &str) -> Result<String, CodecError> {
        encode_with(self.wordlist, entropy)
    }

    pub fn decode(&self, mnemonic: &str) -> Result<String, CodecError> {
        decode_with(self.wordlist, mnemonic, self.config.normalize_whitespace)
    }

    /// Encode raw bytes, MSB first. The bit count must still be a multiple
    /// of 11, so only byte lengths divisible by 11 are accepted.
    pub fn encode_bytes(&self, entropy: &[u8]) -> Result<String, CodecError> {
        if entropy.is_empty() {
            return Err(CodecError::MissingParameter("entropy"));
        }
        self.encode(&bits::bytes_to_bits(entropy))
    }

    pub fn encode_hex(&self, entropy: &str) -> Result<String, CodecError> {
        if entropy.trim().is_empty() {
            return Err(CodecError::MissingParameter("entropy"));
        }
        self.encode(&bits::hex_to_bits(entropy)?)
    }

    /// Decode into bytes. The mnemonic must carry a whole number of bytes,
    /// i.e. a word count divisible by 8.
    pub fn decode_to_bytes(&self, mnemonic: &str) -> Result<Vec<u8>, CodecError> {
        bits::bits_to_bytes(&self.decode(mnemonic)?)
    }
}
