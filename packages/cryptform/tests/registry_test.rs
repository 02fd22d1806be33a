use cryptform::{Category, Direction, HashAlgorithm, TransformError, TransformOptions};
use hex_literal::hex;

#[test]
fn menu_order_is_fixed() {
    let menu: Vec<(Category, Vec<&str>)> = cryptform::list_categories()
        .iter()
        .map(|listing| (listing.category, listing.names()))
        .collect();
    assert_eq!(
        menu,
        [
            (Category::Crypto, vec!["aes", "chacha20", "ml-kem"]),
            (Category::Encode, vec!["ascii85", "base", "hex"]),
            (Category::Hash, vec!["md5", "sha"]),
        ]
    );
}

#[test]
fn unknown_entries_are_not_found() {
    for (category, name) in [("crypto", "des"), ("cipher", "aes"), ("encode", "md5")] {
        assert_eq!(
            cryptform::resolve(category, name).map(|t| t.name()),
            Err(TransformError::NotFound {
                category: category.to_string(),
                name: name.to_string(),
            })
        );
    }
}

#[test]
fn default_is_aes() {
    let transform = cryptform::default_transform();
    assert_eq!(transform.name(), "AES");
    assert_eq!(transform.direction_labels(), ["Encrypt", "Decrypt"]);
}

#[test]
fn resolved_transforms_are_independent() {
    let mut first = cryptform::resolve("crypto", "aes").expect("registered");
    let second = cryptform::resolve("crypto", "aes").expect("registered");
    first
        .configure(&TransformOptions::new().with_key("0123456789abcdef"))
        .into_result()
        .expect("valid key");
    assert!(first.execute(Direction::Forward, b"x").is_ok());
    assert!(second.execute(Direction::Forward, b"x").is_err());
}

#[test]
fn md5_of_empty_input_matches_reference() {
    assert_eq!(
        cryptform_hashing::md5(b"").as_bytes(),
        hex!("d41d8cd98f00b204e9800998ecf8427e")
    );
    // empty input through the transform is a no-op rather than a digest
    let md5 = cryptform::resolve("hash", "md5").expect("registered");
    assert_eq!(md5.execute(Direction::Forward, b""), Ok(None));
}

#[test]
fn hashes_ignore_direction() {
    let md5 = cryptform::resolve("hash", "md5").expect("registered");
    let forward = md5.execute(Direction::Forward, b"abc").expect("hashes");
    let reverse = md5.execute(Direction::Reverse, b"abc").expect("hashes");
    assert_eq!(forward, reverse);
    assert_eq!(
        forward.map(|o| o.to_text()).as_deref(),
        Some("900150983cd24fb0d6963f7d28e17f72")
    );
}

#[test]
fn sha_variant_follows_configuration() {
    let mut sha = cryptform::resolve("hash", "sha").expect("registered");
    let sha1 = sha.execute(Direction::Forward, b"abc").expect("hashes");
    assert_eq!(
        sha1.map(|o| o.to_text()).as_deref(),
        Some("a9993e364706816aba3e25717850c26c9cd0d89d")
    );

    let options = TransformOptions::from_json(r#"{"hash_algorithm": "sha3-256"}"#)
        .expect("valid document");
    assert_eq!(options.hash_algorithm, Some(HashAlgorithm::Sha3_256));
    sha.configure(&options).into_result().expect("accepted");
    let sha3 = sha.execute(Direction::Forward, b"abc").expect("hashes");
    assert_eq!(
        sha3.map(|o| o.to_text()).as_deref(),
        Some("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
}

#[test]
fn malformed_options_document_is_configuration_error() {
    assert!(matches!(
        TransformOptions::from_json(r#"{"cipher_mode": "ECB"}"#),
        Err(TransformError::Configuration(_))
    ));
    assert!(matches!(
        TransformOptions::from_json(r#"{"colour": "blue"}"#),
        Err(TransformError::Configuration(_))
    ));
}
