//! AES and ChaCha20 transforms: configuration, framing and failure modes

use cryptform::{
    AesKeySize, CipherMode, Direction, FieldStatus, KeyMaterial, OptionField, Transform,
    TransformError, TransformOptions, TransformOutput,
};
use cryptform_common::LoggingTransformer;
use cryptform_encoding::base::{decode_base64, encode_base64};
use proptest::prelude::*;

const KEY_128: &str = "0123456789abcdef";
const CHACHA_KEY: &str = "0123456789abcdef0123456789abcdef";
const CHACHA_NONCE: &str = "0123456789ab";

fn aes(mode: CipherMode, key: &str) -> Transform {
    let mut transform = cryptform::default_transform();
    transform
        .configure(&TransformOptions::new().with_cipher_mode(mode).with_key(key))
        .into_result()
        .expect("valid AES configuration");
    transform
}

fn chacha(counter: &str) -> Transform {
    let mut transform = cryptform::resolve("crypto", "chacha20").expect("registered");
    transform
        .configure(
            &TransformOptions::new()
                .with_key(CHACHA_KEY)
                .with_nonce(CHACHA_NONCE)
                .with_counter(counter),
        )
        .into_result()
        .expect("valid ChaCha20 configuration");
    transform
}

fn seal(transform: &Transform, plaintext: &[u8]) -> String {
    match transform.execute(Direction::Forward, plaintext) {
        Ok(Some(TransformOutput::Text(text))) => text,
        other => panic!("encryption failed: {other:?}"),
    }
}

fn open(transform: &Transform, ciphertext: &str) -> cryptform::Result<Vec<u8>> {
    match transform.execute(Direction::Reverse, ciphertext.as_bytes())? {
        Some(TransformOutput::Bytes(bytes)) => Ok(bytes),
        other => panic!("decryption produced {other:?}"),
    }
}

fn any_mode() -> impl Strategy<Value = CipherMode> {
    prop_oneof![
        Just(CipherMode::Cbc),
        Just(CipherMode::Gcm),
        Just(CipherMode::Ctr)
    ]
}

fn any_key() -> impl Strategy<Value = String> {
    prop_oneof![Just(16usize), Just(24), Just(32)]
        .prop_flat_map(|len| proptest::string::string_regex(&format!("[a-z0-9]{{{len}}}")).expect("valid regex"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn aes_round_trips_in_every_mode(
        mode in any_mode(),
        key in any_key(),
        plaintext in proptest::collection::vec(any::<u8>(), 1..200),
    ) {
        let transform = aes(mode, &key);
        let sealed = seal(&transform, &plaintext);
        prop_assert_eq!(open(&transform, &sealed), Ok(plaintext));
    }

    #[test]
    fn chacha20_is_its_own_inverse(
        counter in 0u32..1_000_000,
        plaintext in proptest::collection::vec(any::<u8>(), 1..200),
    ) {
        let transform = chacha(&counter.to_string());
        let sealed = seal(&transform, &plaintext);
        prop_assert_eq!(open(&transform, &sealed), Ok(plaintext));
    }
}

#[test]
fn aes_key_length_boundaries() {
    LoggingTransformer::init_test();
    for len in [15, 17, 23, 25, 31, 33] {
        let mut transform = cryptform::default_transform();
        let report = transform.configure(&TransformOptions::new().with_key("k".repeat(len)));
        let Some(FieldStatus::Rejected(err)) = report.status(OptionField::Key) else {
            panic!("{len}-byte key accepted");
        };
        assert_eq!(err.field(), Some(OptionField::Key));
        assert!(err.to_string().contains(&len.to_string()));
    }
    for len in [16, 24, 32] {
        let mut transform = cryptform::default_transform();
        let report = transform.configure(&TransformOptions::new().with_key("k".repeat(len)));
        assert!(report.is_valid(), "{len}-byte key rejected");
        let Transform::Aes(cipher) = &transform else {
            panic!("default transform is AES");
        };
        assert_eq!(cipher.key_size().map(AesKeySize::key_len), Some(len));
    }
}

#[test]
fn multibyte_key_text_counts_bytes() {
    // 8 two-byte characters: 16 bytes
    let transform = aes(CipherMode::Cbc, "éééééééé");
    let sealed = seal(&transform, b"data");
    assert_eq!(open(&transform, &sealed), Ok(b"data".to_vec()));
}

#[test]
fn gcm_bit_flip_fails_authentication() {
    let transform = aes(CipherMode::Gcm, KEY_128);
    let sealed = seal(&transform, b"authenticated payload");
    let mut framed = decode_base64(&sealed).expect("own output is base64");
    for index in [0, 12, framed.len() - 1] {
        framed[index] ^= 0x01;
        let tampered = encode_base64(&framed);
        assert_eq!(open(&transform, &tampered), Err(TransformError::Authentication));
        framed[index] ^= 0x01;
    }
}

#[test]
fn short_ciphertext_is_too_short() {
    let short = encode_base64(&[0u8; 15]);
    for mode in [CipherMode::Cbc, CipherMode::Ctr] {
        let transform = aes(mode, KEY_128);
        assert_eq!(
            open(&transform, &short),
            Err(TransformError::TooShort {
                minimum: 16,
                actual: 15
            })
        );
    }
    let gcm = aes(CipherMode::Gcm, KEY_128);
    assert!(matches!(
        open(&gcm, &encode_base64(&[0u8; 27])),
        Err(TransformError::TooShort { .. })
    ));
}

#[test]
fn cbc_framing_is_iv_then_whole_blocks() {
    let transform = aes(CipherMode::Cbc, KEY_128);
    let framed = decode_base64(seal(&transform, b"sixteen byte msg")).expect("base64");
    // IV, the block, and a full padding block
    assert_eq!(framed.len(), 48);
}

#[test]
fn random_iv_makes_ciphertexts_differ() {
    let transform = aes(CipherMode::Ctr, KEY_128);
    assert_ne!(seal(&transform, b"same"), seal(&transform, b"same"));
}

#[test]
fn undecodable_ciphertext_is_invalid_encoding() {
    let transform = aes(CipherMode::Cbc, KEY_128);
    assert!(matches!(
        open(&transform, "***"),
        Err(TransformError::InvalidEncoding(_))
    ));
}

#[test]
fn line_wrapped_ciphertext_decrypts() {
    let transform = aes(CipherMode::Gcm, KEY_128);
    let plaintext = b"a message long enough to wrap across several lines of base64";
    let sealed = seal(&transform, plaintext);
    let wrapped = sealed
        .as_bytes()
        .chunks(16)
        .map(|line| std::str::from_utf8(line).expect("base64 is ascii"))
        .collect::<Vec<_>>()
        .join("\r\n");
    assert_eq!(open(&transform, &wrapped), Ok(plaintext.to_vec()));
}

#[test]
fn execute_without_key_is_validation_error() {
    let transform = cryptform::default_transform();
    assert_eq!(
        transform.execute(Direction::Forward, b"data"),
        Err(TransformError::required(OptionField::Key))
    );
}

#[test]
fn rejected_key_replays_on_execute() {
    let mut transform = aes(CipherMode::Cbc, KEY_128);
    let report = transform.configure(&TransformOptions::new().with_key("short"));
    let rejection = report.into_result().expect_err("5-byte key");
    assert_eq!(transform.execute(Direction::Forward, b"data"), Err(rejection));
}

#[test]
fn chacha20_output_carries_no_nonce() {
    let transform = chacha("1");
    let framed = decode_base64(seal(&transform, b"twelve bytes")).expect("base64");
    assert_eq!(framed.len(), 12);
}

#[test]
fn chacha20_counter_must_be_numeric() {
    let mut transform = chacha("1");
    let report = transform.configure(&TransformOptions::new().with_counter("-3"));
    let Some(FieldStatus::Rejected(err)) = report.status(OptionField::Counter) else {
        panic!("negative counter accepted");
    };
    assert_eq!(
        transform.execute(Direction::Forward, b"data"),
        Err(err.clone())
    );
}

#[test]
fn chacha20_last_counter_covers_one_block() {
    let transform = chacha("4294967295");
    for len in [1usize, 17, 63, 64] {
        let plaintext = vec![0x5a; len];
        let sealed = seal(&transform, &plaintext);
        assert_eq!(open(&transform, &sealed), Ok(plaintext));
    }
    assert!(matches!(
        transform.execute(Direction::Forward, &[0x5a; 65]),
        Err(TransformError::Validation {
            field: OptionField::Counter,
            ..
        })
    ));
}

#[test]
fn chacha20_nonce_length_is_enforced() {
    let mut transform = cryptform::resolve("crypto", "chacha20").expect("registered");
    let report = transform.configure(
        &TransformOptions::new()
            .with_key(CHACHA_KEY)
            .with_nonce("0123456789abc"),
    );
    assert_eq!(report.status(OptionField::Key), Some(&FieldStatus::Accepted));
    assert!(matches!(
        report.status(OptionField::Nonce),
        Some(FieldStatus::Rejected(TransformError::Validation {
            field: OptionField::Nonce,
            ..
        }))
    ));
}

#[test]
fn chacha20_tampering_goes_unnoticed() {
    let transform = chacha("1");
    let mut framed = decode_base64(seal(&transform, b"attack at dawn")).expect("base64");
    framed[0] ^= 0x01;
    let opened = open(&transform, &encode_base64(&framed)).expect("no authentication");
    assert_ne!(opened, b"attack at dawn");
    assert_eq!(&opened[1..], b"ttack at dawn");
}

#[test]
fn generated_keys_are_ready_to_use() {
    for name in ["aes", "chacha20"] {
        let mut transform = cryptform::resolve("crypto", name).expect("registered");
        let material = transform
            .generate_key_material()
            .expect("randomness available")
            .expect("ciphers generate keys");
        match material {
            KeyMaterial::Aes { key } => assert_eq!(key.len(), 32),
            KeyMaterial::ChaCha20 { key, nonce } => {
                assert_eq!((key.len(), nonce.len()), (32, 12));
            }
            KeyMaterial::MlKem { .. } => panic!("cipher produced KEM keys"),
        }
        let sealed = seal(&transform, b"fresh key");
        assert_eq!(open(&transform, &sealed), Ok(b"fresh key".to_vec()));
    }
}
