//! Bit-string helpers shared by the codec.
//!
//! Entropy is carried as a string of ASCII `'0'`/`'1'` characters, MSB first.
//! Every word covers [`BITS_PER_WORD`] characters of that string.

use crate::{CodecError, BITS_PER_WORD, MAX_ENTROPY_BITS, MIN_ENTROPY_BITS, WORDLIST_SIZE};

/// Check an entropy bit-string before it is split into chunks.
///
/// Checks run in a fixed order and the first failure is returned: presence,
/// length bounds, alignment, then digit content.
pub fn validate_entropy(entropy: &str) -> Result<(), CodecError> {
    if entropy.is_empty() {
        return Err(CodecError::MissingParameter("entropy"));
    }
    let len = entropy.chars().count();
    if !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&len) {
        return Err(CodecError::InvalidLength(format!(
            "Entropy must be at least {MIN_ENTROPY_BITS} bits and no longer than {MAX_ENTROPY_BITS} bits."
        )));
    }
    if len % BITS_PER_WORD != 0 {
        return Err(CodecError::InvalidAlignment);
    }
    if let Some((position, found)) = entropy
        .chars()
        .enumerate()
        .find(|&(_, c)| c != '0' && c != '1')
    {
        return Err(CodecError::InvalidBit { position, found });
    }
    Ok(())
}

/// True when `input` is non-empty and made only of `'0'` and `'1'`.
pub fn is_bit_string(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b == b'0' || b == b'1')
}

/// Split a validated bit-string into word indices.
///
/// The input must already have passed [`validate_entropy`]; each chunk then
/// fits in 11 bits.
pub fn chunk_indices(entropy: &str) -> Vec<usize> {
    entropy
        .as_bytes()
        .chunks(BITS_PER_WORD)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0usize, |acc, &b| (acc << 1) | (b - b'0') as usize)
        })
        .collect()
}

/// Append `index` to `out` as exactly [`BITS_PER_WORD`] binary digits.
pub fn push_index_bits(out: &mut String, index: usize) -> Result<(), CodecError> {
    if index >= WORDLIST_SIZE {
        return Err(CodecError::IndexOutOfRange {
            index,
            limit: WORDLIST_SIZE,
        });
    }
    out.push_str(&format!("{:0width$b}", index, width = BITS_PER_WORD));
    Ok(())
}

/// Render bytes as an MSB-first bit-string.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        out.push_str(&format!("{byte:08b}"));
    }
    out
}

/// Decode a hex string into a bit-string.
pub fn hex_to_bits(input: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(input.trim())?;
    Ok(bytes_to_bits(&bytes))
}

/// Pack a bit-string into bytes, MSB first.
///
/// Fails with [`CodecError::ByteAlignment`] unless the length is a whole
/// number of bytes.
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>, CodecError> {
    if bits.len() % 8 != 0 {
        return Err(CodecError::ByteAlignment { bits: bits.len() });
    }
    let mut out = Vec::with_capacity(bits.len() / 8);
    for (i, chunk) in bits.as_bytes().chunks(8).enumerate() {
        let mut byte = 0u8;
        for (j, &b) in chunk.iter().enumerate() {
            match b {
                b'0' => byte <<= 1,
                b'1' => byte = (byte << 1) | 1,
                other => {
                    return Err(CodecError::InvalidBit {
                        position: i * 8 + j,
                        found: other as char,
                    })
                }
            }
        }
        out.push(byte);
    }
    Ok(out)
}
