use bitphrase::{decode, encode};
use honggfuzz::fuzz;

fn main() {
    let words: Vec<String> = (0..2048).map(|i| format!("w{i}")).collect();
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(entropy) = std::str::from_utf8(data) else {
                return;
            };
            if let Ok(mnemonic) = encode(&words, entropy) {
                assert_eq!(decode(&words, &mnemonic).unwrap(), entropy);
            }
        });
    }
}
