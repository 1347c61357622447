use bitphrase::{decode, encode};
use honggfuzz::fuzz;

fn main() {
    let words: Vec<String> = (0..2048).map(|i| format!("w{i}")).collect();
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(mnemonic) = std::str::from_utf8(data) else {
                return;
            };
            if let Ok(entropy) = decode(&words, mnemonic) {
                assert_eq!(encode(&words, &entropy).unwrap(), mnemonic);
            }
        });
    }
}
