//! AES in CBC, GCM and CTR modes over 128/192/256-bit keys
//!
//! Every mode frames its output as `IV-or-nonce || body`, with a fresh
//! random IV/nonce per encryption. Decryption validates the framing before
//! the block cipher runs.

use super::algorithm::{CipherMode, BLOCK_SIZE, GCM_NONCE_SIZE};
use crate::{CipherError, Result};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, StreamCipher};
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use cryptform_common::random_array;
use std::fmt;
use zeroize::Zeroizing;

type Gcm<C> = aes_gcm::AesGcm<C, U12>;
type Ctr<C> = ctr::Ctr128BE<C>;

/// Run `$body` with `$cipher` aliased to the AES variant of `$size`
macro_rules! with_aes {
    ($size:expr, $cipher:ident => $body:expr) => {
        match $size {
            AesKeySize::Aes128 => {
                type $cipher = aes::Aes128;
                $body
            }
            AesKeySize::Aes192 => {
                type $cipher = aes::Aes192;
                $body
            }
            AesKeySize::Aes256 => {
                type $cipher = aes::Aes256;
                $body
            }
        }
    };
}

/// AES variant chosen by key length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AesKeySize {
    /// 16-byte key
    Aes128,
    /// 24-byte key
    Aes192,
    /// 32-byte key
    Aes256,
}

impl AesKeySize {
    /// Map a key length in bytes to its variant
    #[must_use]
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes
    #[must_use]
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Short label (`aes128`, `aes192`, `aes256`)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128 => "aes128",
            Self::Aes192 => "aes192",
            Self::Aes256 => "aes256",
        }
    }
}

/// Validated AES key; the bytes are wiped on drop
#[derive(Clone)]
pub struct AesKey {
    size: AesKeySize,
    bytes: Zeroizing<Vec<u8>>,
}

impl AesKey {
    /// Validate raw key bytes
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless the key is exactly
    /// 16, 24 or 32 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let size = AesKeySize::from_len(key.len()).ok_or(CipherError::InvalidKeyLength {
            expected: "16, 24 or 32",
            actual: key.len(),
        })?;
        Ok(Self {
            size,
            bytes: Zeroizing::new(key.to_vec()),
        })
    }

    /// AES variant of this key
    #[must_use]
    pub fn size(&self) -> AesKeySize {
        self.size
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Encrypt `plaintext` with `mode`, returning the framed ciphertext
///
/// # Errors
///
/// Returns [`CipherError::Randomness`] if no IV/nonce could be generated.
pub fn encrypt(mode: CipherMode, key: &AesKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    log::debug!(
        "AES-{mode} {}: encrypting {} bytes",
        key.size().name(),
        plaintext.len()
    );
    match mode {
        CipherMode::Cbc => encrypt_cbc(key, plaintext),
        CipherMode::Gcm => encrypt_gcm(key, plaintext),
        CipherMode::Ctr => encrypt_ctr(key, plaintext),
    }
}

/// Decrypt framed `data` with `mode`
///
/// # Errors
///
/// - [`CipherError::TooShort`] when `data` is shorter than the mode's framing
/// - [`CipherError::MisalignedCiphertext`] / [`CipherError::InvalidPadding`] for CBC
/// - [`CipherError::Authentication`] when the GCM tag does not verify
pub fn decrypt(mode: CipherMode, key: &AesKey, data: &[u8]) -> Result<Vec<u8>> {
    let minimum = mode.min_ciphertext_len();
    if data.len() < minimum {
        return Err(CipherError::TooShort {
            minimum,
            actual: data.len(),
        });
    }
    log::debug!(
        "AES-{mode} {}: decrypting {} bytes ({})",
        key.size().name(),
        data.len(),
        if mode.is_authenticated() {
            "tag checked"
        } else {
            "unauthenticated"
        }
    );
    match mode {
        CipherMode::Cbc => decrypt_cbc(key, data),
        CipherMode::Gcm => decrypt_gcm(key, data),
        CipherMode::Ctr => decrypt_ctr(key, data),
    }
}

fn encrypt_cbc(key: &AesKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let iv = random_array::<BLOCK_SIZE>()?;
    let body = with_aes!(key.size(), C => {
        cbc::Encryptor::<C>::new_from_slices(key.as_bytes(), &iv)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    });
    Ok(frame(&iv, &body))
}

fn decrypt_cbc(key: &AesKey, data: &[u8]) -> Result<Vec<u8>> {
    let (iv, body) = data.split_at(BLOCK_SIZE);
    if body.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::MisalignedCiphertext {
            block_size: BLOCK_SIZE,
            actual: body.len(),
        });
    }
    with_aes!(key.size(), C => {
        cbc::Decryptor::<C>::new_from_slices(key.as_bytes(), iv)?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CipherError::InvalidPadding)
    })
}

fn encrypt_gcm(key: &AesKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let nonce = random_array::<GCM_NONCE_SIZE>()?;
    let sealed = with_aes!(key.size(), C => {
        Gcm::<C>::new_from_slice(key.as_bytes())?
            .encrypt(GenericArray::from_slice(&nonce), plaintext)
            .map_err(|e| CipherError::Internal(format!("GCM seal failed: {e}")))?
    });
    Ok(frame(&nonce, &sealed))
}

fn decrypt_gcm(key: &AesKey, data: &[u8]) -> Result<Vec<u8>> {
    let (nonce, sealed) = data.split_at(GCM_NONCE_SIZE);
    with_aes!(key.size(), C => {
        Gcm::<C>::new_from_slice(key.as_bytes())?
            .decrypt(GenericArray::from_slice(nonce), sealed)
            .map_err(|_| CipherError::Authentication)
    })
}

fn encrypt_ctr(key: &AesKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let iv = random_array::<BLOCK_SIZE>()?;
    let mut body = plaintext.to_vec();
    xor_ctr(key, &iv, &mut body)?;
    Ok(frame(&iv, &body))
}

fn decrypt_ctr(key: &AesKey, data: &[u8]) -> Result<Vec<u8>> {
    let (iv, body) = data.split_at(BLOCK_SIZE);
    let mut plaintext = body.to_vec();
    xor_ctr(key, iv, &mut plaintext)?;
    Ok(plaintext)
}

fn xor_ctr(key: &AesKey, iv: &[u8], buf: &mut [u8]) -> Result<()> {
    with_aes!(key.size(), C => {
        Ctr::<C>::new_from_slices(key.as_bytes(), iv)?
            .try_apply_keystream(buf)
            .map_err(|_| CipherError::CounterOverflow)
    })
}

fn frame(prefix: &[u8], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + body.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(body);
    out
}
