//! Round trips and failure framing for AES and ChaCha20

use cryptform_cipher::cipher::{aes, chacha20, BLOCK_SIZE, GCM_NONCE_SIZE};
use cryptform_cipher::{AesKey, ChaChaKey, ChaChaNonce, CipherError, CipherMode};
use proptest::prelude::*;

fn aes_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(16usize), Just(24usize), Just(32usize)]
        .prop_flat_map(|len| proptest::collection::vec(any::<u8>(), len))
}

fn mode() -> impl Strategy<Value = CipherMode> {
    prop_oneof![
        Just(CipherMode::Cbc),
        Just(CipherMode::Gcm),
        Just(CipherMode::Ctr)
    ]
}

proptest! {
    #[test]
    fn aes_round_trips_in_every_mode(
        key in aes_key(),
        mode in mode(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..200),
    ) {
        let key = AesKey::from_slice(&key).expect("strategy yields valid lengths");
        let ciphertext = aes::encrypt(mode, &key, &plaintext).expect("encrypt");
        prop_assert_eq!(aes::decrypt(mode, &key, &ciphertext).expect("decrypt"), plaintext);
    }

    #[test]
    fn gcm_detects_any_single_bit_flip(
        plaintext in proptest::collection::vec(any::<u8>(), 1..64),
        bit in any::<prop::sample::Index>(),
    ) {
        let key = AesKey::from_slice(&[7u8; 32]).expect("valid key");
        let mut ciphertext = aes::encrypt(CipherMode::Gcm, &key, &plaintext).expect("encrypt");
        let position = bit.index(ciphertext.len() * 8);
        ciphertext[position / 8] ^= 1 << (position % 8);
        prop_assert_eq!(
            aes::decrypt(CipherMode::Gcm, &key, &ciphertext),
            Err(CipherError::Authentication)
        );
    }

    #[test]
    fn chacha20_keystream_is_its_own_inverse(
        key in proptest::collection::vec(any::<u8>(), 32),
        nonce in proptest::collection::vec(any::<u8>(), 12),
        counter in 0u32..1_000_000,
        plaintext in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let key = ChaChaKey::from_slice(&key).expect("32 bytes");
        let nonce = ChaChaNonce::from_slice(&nonce).expect("12 bytes");
        let once = chacha20::apply_keystream(&key, &nonce, counter, &plaintext).expect("xor");
        let twice = chacha20::apply_keystream(&key, &nonce, counter, &once).expect("xor");
        prop_assert_eq!(twice, plaintext);
    }
}

#[test]
fn short_input_is_too_short_in_every_mode() {
    let key = AesKey::from_slice(&[1u8; 16]).expect("valid key");
    for (mode, minimum) in [
        (CipherMode::Cbc, BLOCK_SIZE),
        (CipherMode::Ctr, BLOCK_SIZE),
        (CipherMode::Gcm, GCM_NONCE_SIZE + 16),
    ] {
        for len in [0, 1, minimum - 1] {
            assert_eq!(
                aes::decrypt(mode, &key, &vec![0u8; len]),
                Err(CipherError::TooShort {
                    minimum,
                    actual: len
                }),
                "{mode} with {len} bytes"
            );
        }
    }
}

#[test]
fn random_iv_makes_ciphertexts_differ() {
    let key = AesKey::from_slice(&[9u8; 24]).expect("valid key");
    for mode in CipherMode::all() {
        let a = aes::encrypt(*mode, &key, b"same input").expect("encrypt");
        let b = aes::encrypt(*mode, &key, b"same input").expect("encrypt");
        assert_ne!(a, b, "{mode} reused an IV");
    }
}

#[test]
fn wrong_key_fails_gcm_but_not_ctr() {
    let right = AesKey::from_slice(&[1u8; 16]).expect("valid key");
    let wrong = AesKey::from_slice(&[2u8; 16]).expect("valid key");

    let sealed = aes::encrypt(CipherMode::Gcm, &right, b"secret").expect("encrypt");
    assert_eq!(
        aes::decrypt(CipherMode::Gcm, &wrong, &sealed),
        Err(CipherError::Authentication)
    );

    // CTR has no integrity: it decrypts to garbage of the same length
    let ctr = aes::encrypt(CipherMode::Ctr, &right, b"secret").expect("encrypt");
    let garbage = aes::decrypt(CipherMode::Ctr, &wrong, &ctr).expect("no integrity check");
    assert_eq!(garbage.len(), 6);
    assert_ne!(garbage, b"secret");
}

#[test]
fn chacha20_tampering_goes_undetected() {
    let key = ChaChaKey::from_slice(&[3u8; 32]).expect("32 bytes");
    let nonce = ChaChaNonce::from_slice(&[4u8; 12]).expect("12 bytes");

    let mut ciphertext = chacha20::apply_keystream(&key, &nonce, 1, b"pay 100").expect("xor");
    ciphertext[4] ^= b'1' ^ b'9';
    let tampered = chacha20::apply_keystream(&key, &nonce, 1, &ciphertext).expect("xor");
    assert_eq!(tampered, b"pay 900");
}
