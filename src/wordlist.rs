//! Owned, indexed word lists.
//!
//! A [`Wordlist`] keeps the caller's words in order and a lookup table from
//! word to its lowest index. It never judges word content; only [`Wordlist::check_strict`]
//! looks at size and duplicates.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{CodecError, WORDLIST_SIZE};

#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

/// Summary of a word list's shape, used by the strict check and `wordlist_check`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WordlistReport {
    pub len: usize,
    /// Words that appear more than once, in first-seen order.
    pub duplicates: Vec<String>,
    pub complete: bool,
}

impl Wordlist {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(words.len());
        for (i, w) in words.iter().enumerate() {
            index.entry(w.clone()).or_insert(i);
        }
        Self { words, index }
    }

    /// Parse one word per line. Surrounding whitespace is trimmed and blank
    /// lines are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_owned),
        )
    }

    /// Parse a comma separated inline list, e.g. from a command-line flag.
    pub fn parse_inline(text: &str) -> Self {
        Self::from_words(
            text.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_owned),
        )
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CodecError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Lowest index holding `word`, if any.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn report(&self) -> WordlistReport {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for w in &self.words {
            let count = seen.entry(w.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(w.clone());
            }
        }
        WordlistReport {
            len: self.words.len(),
            complete: self.words.len() == WORDLIST_SIZE && duplicates.is_empty(),
            duplicates,
        }
    }

    /// Require exactly [`WORDLIST_SIZE`] unique words.
    pub fn check_strict(&self) -> Result<(), CodecError> {
        let report = self.report();
        if report.len != WORDLIST_SIZE {
            return Err(CodecError::InvalidWordlist(format!(
                "expected {WORDLIST_SIZE} words, found {}",
                report.len
            )));
        }
        if let Some(dup) = report.duplicates.first() {
            return Err(CodecError::InvalidWordlist(format!(
                "duplicate word '{dup}'"
            )));
        }
        Ok(())
    }
}

impl AsRef<[String]> for Wordlist {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}
