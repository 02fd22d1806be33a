//! # Cryptform Cipher
//!
//! Symmetric primitives behind the AES and ChaCha20 transforms.
//!
//! - AES-128/192/256 in CBC, GCM and CTR modes, framed as
//!   `IV-or-nonce || body` with a fresh random IV per encryption
//! - ChaCha20 as a raw, unauthenticated keystream
//!
//! Key, nonce and counter are validated into typed values ([`AesKey`],
//! [`ChaChaKey`], [`ChaChaNonce`]) before any primitive runs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Encryption and decryption primitives
pub mod cipher;
pub mod error;

pub use cipher::{generate_key_text, AesKey, AesKeySize, ChaChaKey, ChaChaNonce, CipherMode};
pub use error::{CipherError, Result};
