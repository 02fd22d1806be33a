//! ChaCha20 (IETF variant: 256-bit key, 96-bit nonce, 32-bit block counter)
//!
//! This is the bare stream cipher. There is no tag and no integrity check:
//! flipping a ciphertext bit flips the same plaintext bit, and decrypting
//! with the wrong key, nonce or counter yields garbage instead of an error.
//! The output carries no nonce or counter either, so callers must keep all
//! three to decrypt.

use crate::{CipherError, Result};
use chacha20::cipher::consts::U10;
use chacha20::cipher::{Block, KeyIvInit, StreamCipherCore, StreamCipherSeekCore};
use chacha20::ChaChaCore;
use std::fmt;
use zeroize::Zeroizing;

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes
pub const NONCE_SIZE: usize = 12;

/// Counter used when none is configured
pub const DEFAULT_COUNTER: u32 = 1;

const BLOCK_LEN: usize = 64;

// Blocks addressable by the 32-bit counter, the last one included
const COUNTER_SPACE: u64 = 1 << 32;

/// 32-byte ChaCha20 key, wiped on drop
#[derive(Clone)]
pub struct ChaChaKey(Zeroizing<[u8; KEY_SIZE]>);

impl ChaChaKey {
    /// Validate raw key bytes
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless exactly 32 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeyLength {
            expected: "32",
            actual: key.len(),
        })?;
        Ok(Self(Zeroizing::new(bytes)))
    }
}

impl fmt::Debug for ChaChaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChaChaKey(..)")
    }
}

/// 12-byte ChaCha20 nonce
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChaChaNonce([u8; NONCE_SIZE]);

impl ChaChaNonce {
    /// Validate raw nonce bytes
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidNonceLength`] unless exactly 12 bytes.
    pub fn from_slice(nonce: &[u8]) -> Result<Self> {
        let bytes: [u8; NONCE_SIZE] =
            nonce
                .try_into()
                .map_err(|_| CipherError::InvalidNonceLength {
                    expected: NONCE_SIZE,
                    actual: nonce.len(),
                })?;
        Ok(Self(bytes))
    }
}

/// Parse counter text as an unsigned 32-bit block counter
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCounter`] for anything that is not a
/// decimal `u32`.
pub fn parse_counter(text: &str) -> Result<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| CipherError::InvalidCounter(text.to_string()))
}

/// XOR `data` with the keystream starting at block `counter`
///
/// Encryption and decryption are the same operation.
///
/// # Errors
///
/// Returns [`CipherError::CounterOverflow`] if `data` runs past the last
/// block the 32-bit counter can address.
pub fn apply_keystream(
    key: &ChaChaKey,
    nonce: &ChaChaNonce,
    counter: u32,
    data: &[u8],
) -> Result<Vec<u8>> {
    log::debug!(
        "ChaCha20: applying keystream to {} bytes from block {counter}",
        data.len()
    );
    let blocks = data.len().div_ceil(BLOCK_LEN) as u64;
    if u64::from(counter) + blocks > COUNTER_SPACE {
        return Err(CipherError::CounterOverflow);
    }

    let mut core = ChaChaCore::<U10>::new((&*key.0).into(), (&nonce.0).into());
    core.set_block_pos(counter);
    let mut keystream = Block::<ChaChaCore<U10>>::default();
    let mut out = data.to_vec();
    for chunk in out.chunks_mut(BLOCK_LEN) {
        core.write_keystream_block(&mut keystream);
        chunk
            .iter_mut()
            .zip(keystream.iter())
            .for_each(|(byte, k)| *byte ^= k);
    }
    keystream.fill(0);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // RFC 8439 section 2.4.2
    const RFC_KEY: [u8; 32] =
        hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    const RFC_NONCE: [u8; 12] = hex!("000000000000004a00000000");

    #[test]
    fn matches_rfc8439_sunscreen_vector() {
        let plaintext = b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";
        let key = ChaChaKey::from_slice(&RFC_KEY).expect("32-byte key");
        let nonce = ChaChaNonce::from_slice(&RFC_NONCE).expect("12-byte nonce");

        let ciphertext = apply_keystream(&key, &nonce, 1, plaintext).expect("keystream");
        assert_eq!(
            &ciphertext[..16],
            hex!("6e2e359a2568f98041ba0728dd0d6981")
        );
        assert_eq!(
            apply_keystream(&key, &nonce, 1, &ciphertext).expect("keystream"),
            plaintext
        );
    }

    #[test]
    fn key_and_nonce_errors_are_distinct() {
        assert_eq!(
            ChaChaKey::from_slice(&[0; 31]).map(|_| ()),
            Err(CipherError::InvalidKeyLength {
                expected: "32",
                actual: 31
            })
        );
        assert_eq!(
            ChaChaNonce::from_slice(&[0; 13]),
            Err(CipherError::InvalidNonceLength {
                expected: 12,
                actual: 13
            })
        );
    }

    #[test]
    fn counter_parsing() {
        assert_eq!(parse_counter(" 7 "), Ok(7));
        assert_eq!(parse_counter("4294967295"), Ok(u32::MAX));
        assert!(parse_counter("4294967296").is_err());
        assert!(parse_counter("-1").is_err());
        assert!(parse_counter("one").is_err());
    }

    #[test]
    fn last_counter_block_is_addressable() {
        let key = ChaChaKey::from_slice(&RFC_KEY).expect("32-byte key");
        let nonce = ChaChaNonce::from_slice(&RFC_NONCE).expect("12-byte nonce");

        let last = apply_keystream(&key, &nonce, u32::MAX, &[0u8; 64]).expect("final block");
        let two = apply_keystream(&key, &nonce, u32::MAX - 1, &[0u8; 128]).expect("two blocks");
        assert_eq!(&two[64..], &last[..]);
        assert_ne!(&two[..64], &last[..]);
        assert_eq!(
            apply_keystream(&key, &nonce, u32::MAX, &[0u8; 1]).map(|out| out.len()),
            Ok(1)
        );
    }

    #[test]
    fn counter_overflows_past_last_block() {
        let key = ChaChaKey::from_slice(&RFC_KEY).expect("32-byte key");
        let nonce = ChaChaNonce::from_slice(&RFC_NONCE).expect("12-byte nonce");
        assert_eq!(
            apply_keystream(&key, &nonce, u32::MAX, &[0u8; 65]),
            Err(CipherError::CounterOverflow)
        );
        assert_eq!(
            apply_keystream(&key, &nonce, u32::MAX - 1, &[0u8; 129]),
            Err(CipherError::CounterOverflow)
        );
        assert_eq!(apply_keystream(&key, &nonce, u32::MAX, &[]), Ok(Vec::new()));
    }
}
