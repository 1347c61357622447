mod common;

use bitphrase::{decode, encode, Codec, CodecError, Config, Wordlist, MAX_WORDS, WORDLIST_SIZE};
use common::full_wordlist;
use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

quickcheck! {
    fn indexed_lookup_matches_slice(raw: Vec<u16>) -> bool {
        let indices: Vec<usize> = raw
            .into_iter()
            .take(MAX_WORDS)
            .map(|i| i as usize % WORDLIST_SIZE)
            .collect();
        if indices.is_empty() {
            return true;
        }
        let words = full_wordlist();
        let list = Wordlist::from_words(words.clone());
        let codec = Codec::new(&list, Config::default()).unwrap();
        let mnemonic = indices.iter().map(|&i| words[i].as_str()).collect::<Vec<_>>().join(" ");
        match (codec.decode(&mnemonic), decode(&words, &mnemonic)) {
            (Ok(a), Ok(b)) => a == b && codec.encode(&a).unwrap() == mnemonic,
            _ => false,
        }
    }

    fn foreign_words_are_rejected(word: String) -> bool {
        if word.is_empty() || word.contains(' ') || word.starts_with("word") {
            return true;
        }
        matches!(decode(&full_wordlist(), &word), Err(CodecError::WordNotFound(w)) if w == word)
    }
}

#[test]
fn random_phrases_roundtrip_through_codec() {
    let list = Wordlist::from_words(full_wordlist());
    let codec = Codec::new(
        &list,
        Config {
            strict_wordlist: true,
            ..Config::default()
        },
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(0x0b17);
    for _ in 0..200 {
        let n = rng.gen_range(1..=MAX_WORDS);
        let phrase: Vec<&str> = (0..n)
            .map(|_| list.get(rng.gen_range(0..WORDLIST_SIZE)).unwrap())
            .collect();
        let phrase = phrase.join(" ");
        let entropy = codec.decode(&phrase).unwrap();
        assert_eq!(codec.encode(&entropy).unwrap(), phrase);
    }
}

#[test]
fn normalized_whitespace_roundtrips_to_canonical_spacing() {
    let list = Wordlist::from_words(full_wordlist());
    let codec = Codec::new(
        &list,
        Config {
            normalize_whitespace: true,
            ..Config::default()
        },
    )
    .unwrap();
    let entropy = codec.decode("\tword0003   word0004\n").unwrap();
    assert_eq!(codec.encode(&entropy).unwrap(), "word0003 word0004");
}

#[test]
fn bytes_and_hex_entry_points() {
    let list = Wordlist::from_words(full_wordlist());
    let codec = Codec::new(&list, Config::default()).unwrap();

    // 11 bytes = 88 bits = 8 words.
    let bytes: Vec<u8> = (1..=11).collect();
    let mnemonic = codec.encode_bytes(&bytes).unwrap();
    assert_eq!(mnemonic.split(' ').count(), 8);
    assert_eq!(codec.decode_to_bytes(&mnemonic).unwrap(), bytes);
    assert_eq!(codec.encode_hex(&hex::encode(&bytes)).unwrap(), mnemonic);

    // 16 bytes = 128 bits, not a whole number of words.
    assert!(matches!(codec.encode_bytes(&[0u8; 16]), Err(CodecError::InvalidAlignment)));
    assert!(matches!(codec.encode_hex("0g"), Err(CodecError::InvalidHex(_))));
    assert!(matches!(codec.encode_bytes(&[]), Err(CodecError::MissingParameter("entropy"))));
    // 3 words = 33 bits: a whole number of words, not of bytes.
    let err = codec.decode_to_bytes("word0000 word0000 word0000").unwrap_err();
    assert!(matches!(err, CodecError::ByteAlignment { bits: 33 }));
    assert_eq!(err.to_string(), "Entropy of 33 bits is not a whole number of bytes.");
}

#[test]
fn wordlist_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, full_wordlist().join("\n")).unwrap();
    let list = Wordlist::load(&path).unwrap();
    assert_eq!(list.len(), WORDLIST_SIZE);
    assert!(list.check_strict().is_ok());
    assert_eq!(encode(list.words(), "00000000001").unwrap(), "word0001");

    let missing = Wordlist::load(dir.path().join("absent.txt"));
    assert!(matches!(missing, Err(CodecError::Io(_))));
}
