//! Level dispatch onto the ML-KEM primitives
//!
//! Lengths are checked here so that the primitives only ever see byte
//! strings of the size their parameter set expects.

use crate::{KeySizeMode, PqCryptoError, Result, SharedSecret};
use pqcrypto_traits::kem::{
    Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _,
};
use sha3::{Digest, Sha3_256};
use zeroize::Zeroizing;

/// Run `$body` with `$kem` bound to the parameter-set module of `$level`
macro_rules! with_mlkem {
    ($level:expr, $kem:ident => $body:expr) => {
        match $level {
            KeySizeMode::MlKem768 => {
                use pqcrypto_mlkem::mlkem768 as $kem;
                $body
            }
            KeySizeMode::MlKem1024 => {
                use pqcrypto_mlkem::mlkem1024 as $kem;
                $body
            }
        }
    };
}

/// Generate a fresh `(public_key, secret_key)` pair
pub(crate) fn keypair(level: KeySizeMode) -> (Vec<u8>, Zeroizing<Vec<u8>>) {
    with_mlkem!(level, kem => {
        let (pk, sk) = kem::keypair();
        (pk.as_bytes().to_vec(), Zeroizing::new(sk.as_bytes().to_vec()))
    })
}

/// Check that `public_key` parses as an encapsulation key of `level`
pub(crate) fn check_public_key(level: KeySizeMode, public_key: &[u8]) -> Result<()> {
    expect_len(public_key, level.public_key_size())?;
    with_mlkem!(level, kem => {
        kem::PublicKey::from_bytes(public_key)
            .map(|_| ())
            .map_err(|e| PqCryptoError::InvalidKey(e.to_string()))
    })
}

/// Extract the encapsulation key embedded in `secret_key`
///
/// The decapsulation key is laid out as
/// `dk_pke || ek || SHA3-256(ek) || z`; the embedded hash must match.
pub(crate) fn public_key_from_secret(level: KeySizeMode, secret_key: &[u8]) -> Result<Vec<u8>> {
    expect_len(secret_key, level.secret_key_size())?;
    with_mlkem!(level, kem => {
        kem::SecretKey::from_bytes(secret_key)
            .map_err(|e| PqCryptoError::InvalidKey(e.to_string()))?;
    });

    let pk_len = level.public_key_size();
    let pke_len = level.secret_key_size() - pk_len - 64;
    let public_key = &secret_key[pke_len..pke_len + pk_len];
    let embedded_hash = &secret_key[pke_len + pk_len..pke_len + pk_len + 32];

    if Sha3_256::digest(public_key).as_slice() != embedded_hash {
        return Err(PqCryptoError::InvalidKey(
            "embedded encapsulation key does not match its hash".to_string(),
        ));
    }
    Ok(public_key.to_vec())
}

/// Encapsulate against `public_key`, returning `(shared_secret, ciphertext)`
pub(crate) fn encapsulate(level: KeySizeMode, public_key: &[u8]) -> Result<(SharedSecret, Vec<u8>)> {
    expect_len(public_key, level.public_key_size())?;
    with_mlkem!(level, kem => {
        let pk = kem::PublicKey::from_bytes(public_key)
            .map_err(|e| PqCryptoError::InvalidKey(e.to_string()))?;
        let (ss, ct) = kem::encapsulate(&pk);
        Ok((
            SharedSecret::new(level, ss.as_bytes().to_vec()),
            ct.as_bytes().to_vec(),
        ))
    })
}

/// Decapsulate `ciphertext` with `secret_key`
///
/// A well-formed ciphertext that was not produced for this key yields an
/// unrelated secret rather than an error (implicit rejection).
pub(crate) fn decapsulate(
    level: KeySizeMode,
    secret_key: &[u8],
    ciphertext: &[u8],
) -> Result<SharedSecret> {
    if ciphertext.len() != level.ciphertext_size() {
        return Err(PqCryptoError::InvalidCiphertextSize {
            expected: level.ciphertext_size(),
            actual: ciphertext.len(),
        });
    }
    with_mlkem!(level, kem => {
        let sk = kem::SecretKey::from_bytes(secret_key)
            .map_err(|e| PqCryptoError::DecapsulationFailed(format!("secret key: {e}")))?;
        let ct = kem::Ciphertext::from_bytes(ciphertext)
            .map_err(|e| PqCryptoError::DecapsulationFailed(format!("ciphertext: {e}")))?;
        let ss = kem::decapsulate(&ct, &sk);
        Ok(SharedSecret::new(level, ss.as_bytes().to_vec()))
    })
}

fn expect_len(key: &[u8], expected: usize) -> Result<()> {
    if key.len() == expected {
        Ok(())
    } else {
        Err(PqCryptoError::InvalidKeySize {
            expected,
            actual: key.len(),
        })
    }
}
