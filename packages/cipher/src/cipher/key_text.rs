//! Printable key and nonce text drawn from OS randomness

use crate::Result;
use cryptform_common::fill_random;
use zeroize::Zeroizing;

/// Length of generated AES key text (32 UTF-8 bytes, so AES-256)
pub const AES_KEY_TEXT_LEN: usize = 32;

/// Length of generated ChaCha20 key text
pub const CHACHA_KEY_TEXT_LEN: usize = 32;

/// Length of generated ChaCha20 nonce text
pub const CHACHA_NONCE_TEXT_LEN: usize = 12;

/// Generate `chars` lowercase hex characters of random key text
///
/// The text itself is the key: its UTF-8 bytes are what the cipher sees.
///
/// # Errors
///
/// Returns [`crate::CipherError::Randomness`] if the OS source fails.
pub fn generate_key_text(chars: usize) -> Result<Zeroizing<String>> {
    let mut raw = Zeroizing::new(vec![0u8; chars.div_ceil(2)]);
    fill_random(&mut raw)?;
    let mut text = Zeroizing::new(hex::encode(raw.as_slice()));
    text.truncate(chars);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_requested_length_of_hex() {
        for len in [AES_KEY_TEXT_LEN, CHACHA_NONCE_TEXT_LEN, 7, 0] {
            let text = generate_key_text(len).expect("randomness available");
            assert_eq!(text.len(), len);
            assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn consecutive_keys_differ() {
        let a = generate_key_text(CHACHA_KEY_TEXT_LEN).expect("randomness available");
        let b = generate_key_text(CHACHA_KEY_TEXT_LEN).expect("randomness available");
        assert_ne!(*a, *b);
    }
}
