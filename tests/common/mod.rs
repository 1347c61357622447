#![allow(dead_code)]

use bitphrase::WORDLIST_SIZE;

/// A complete list of 2048 unique synthetic words.
pub fn full_wordlist() -> Vec<String> {
    (0..WORDLIST_SIZE).map(|i| format!("word{i:04}")).collect()
}

/// Render `index` the way the codec does: 11 binary digits.
pub fn chunk(index: usize) -> String {
    format!("{index:011b}")
}
