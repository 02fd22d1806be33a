//! Per-level key-pair slots
//!
//! Each [`KeySizeMode`] has its own slot. A slot is empty, holds only an
//! encapsulation key (imported), or holds a decapsulation key together with
//! the encapsulation key derived from it. Operations on one level never
//! touch the other slot.

use crate::{kem, KeySizeMode, PqCryptoError, Result, SharedSecret};
use base64::Engine;
use cryptform_common::LoggingTransformer;
use zeroize::Zeroizing;

const TRANSFORM: &str = "ML-KEM";

/// Key material held for one level
#[derive(Clone)]
pub struct KemKeys {
    level: KeySizeMode,
    public_key: Vec<u8>,
    secret_key: Option<Zeroizing<Vec<u8>>>,
}

impl KemKeys {
    /// Level these keys belong to
    #[must_use]
    pub fn level(&self) -> KeySizeMode {
        self.level
    }

    /// Raw encapsulation key
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Whether a decapsulation key is present
    #[must_use]
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Encapsulation key as standard base64
    #[must_use]
    pub fn encapsulation_key_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.public_key)
    }

    /// Decapsulation key as standard base64, if present
    #[must_use]
    pub fn decapsulation_key_base64(&self) -> Option<Zeroizing<String>> {
        self.secret_key.as_ref().map(|sk| {
            Zeroizing::new(base64::engine::general_purpose::STANDARD.encode(sk.as_slice()))
        })
    }
}

impl std::fmt::Debug for KemKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KemKeys")
            .field("level", &self.level)
            .field(
                "public_key",
                &LoggingTransformer::key_fingerprint(&self.public_key),
            )
            .field("has_secret_key", &self.has_secret_key())
            .finish()
    }
}

/// Output of an encapsulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encapsulation {
    /// Secret shared with the decapsulation key holder
    pub shared_secret: SharedSecret,
    /// Ciphertext to send to the decapsulation key holder
    pub ciphertext: Vec<u8>,
}

impl Encapsulation {
    /// Ciphertext as standard base64, its canonical text form
    #[must_use]
    pub fn ciphertext_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.ciphertext)
    }
}

/// Independent key slots for ML-KEM-768 and ML-KEM-1024
#[derive(Debug, Clone, Default)]
pub struct KeyPairSlots {
    kem768: Option<KemKeys>,
    kem1024: Option<KemKeys>,
}

impl KeyPairSlots {
    /// Both slots empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys held for `level`, if any
    #[must_use]
    pub fn get(&self, level: KeySizeMode) -> Option<&KemKeys> {
        match level {
            KeySizeMode::MlKem768 => self.kem768.as_ref(),
            KeySizeMode::MlKem1024 => self.kem1024.as_ref(),
        }
    }

    fn slot_mut(&mut self, level: KeySizeMode) -> &mut Option<KemKeys> {
        match level {
            KeySizeMode::MlKem768 => &mut self.kem768,
            KeySizeMode::MlKem1024 => &mut self.kem1024,
        }
    }

    fn install(&mut self, keys: KemKeys, slot_name: &str) -> &KemKeys {
        LoggingTransformer::log_key_installed(TRANSFORM, slot_name, &keys.public_key);
        self.slot_mut(keys.level).insert(keys)
    }

    /// Generate a fresh key pair for `level`, replacing whatever it held
    pub fn generate(&mut self, level: KeySizeMode) -> &KemKeys {
        let (public_key, secret_key) = kem::keypair(level);
        log::debug!(
            "{TRANSFORM}: generated {level} key pair (NIST level {})",
            level.security_level()
        );
        self.install(
            KemKeys {
                level,
                public_key,
                secret_key: Some(secret_key),
            },
            level.name(),
        )
    }

    /// Install a raw encapsulation key, enabling encapsulation only
    ///
    /// Any decapsulation key previously held for `level` is dropped since it
    /// no longer belongs to the slot's public key.
    ///
    /// # Errors
    ///
    /// [`PqCryptoError::InvalidKeySize`] or [`PqCryptoError::InvalidKey`];
    /// the slot is left unchanged.
    pub fn import_encapsulation_key(&mut self, level: KeySizeMode, public_key: &[u8]) -> Result<()> {
        kem::check_public_key(level, public_key)?;
        self.install(
            KemKeys {
                level,
                public_key: public_key.to_vec(),
                secret_key: None,
            },
            "encapsulation key",
        );
        Ok(())
    }

    /// Install a raw decapsulation key and derive its encapsulation key
    ///
    /// # Errors
    ///
    /// [`PqCryptoError::InvalidKeySize`] for the wrong length, or
    /// [`PqCryptoError::InvalidKey`] when the embedded encapsulation key does
    /// not match its hash; the slot is left unchanged.
    pub fn import_decapsulation_key(&mut self, level: KeySizeMode, secret_key: &[u8]) -> Result<()> {
        let public_key = kem::public_key_from_secret(level, secret_key)?;
        self.install(
            KemKeys {
                level,
                public_key,
                secret_key: Some(Zeroizing::new(secret_key.to_vec())),
            },
            "decapsulation key",
        );
        Ok(())
    }

    /// Encapsulate against the encapsulation key held for `level`
    ///
    /// # Errors
    ///
    /// [`PqCryptoError::NoPublicKey`] if the slot is empty.
    pub fn encapsulate(&self, level: KeySizeMode) -> Result<Encapsulation> {
        let keys = self.get(level).ok_or(PqCryptoError::NoPublicKey(level))?;
        let (shared_secret, ciphertext) = kem::encapsulate(level, &keys.public_key)?;
        log::debug!("{TRANSFORM}: encapsulated for {level}");
        Ok(Encapsulation {
            shared_secret,
            ciphertext,
        })
    }

    /// Decapsulate `ciphertext` with the decapsulation key held for `level`
    ///
    /// # Errors
    ///
    /// [`PqCryptoError::NoPrivateKey`] if the slot holds no decapsulation
    /// key, [`PqCryptoError::InvalidCiphertextSize`] for a malformed
    /// ciphertext.
    pub fn decapsulate(&self, level: KeySizeMode, ciphertext: &[u8]) -> Result<SharedSecret> {
        let secret_key = self
            .get(level)
            .and_then(|keys| keys.secret_key.as_ref())
            .ok_or(PqCryptoError::NoPrivateKey(level))?;
        let shared_secret = kem::decapsulate(level, secret_key, ciphertext)?;
        log::debug!("{TRANSFORM}: decapsulated for {level}");
        Ok(shared_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slots_report_missing_keys() {
        let slots = KeyPairSlots::new();
        assert_eq!(
            slots.encapsulate(KeySizeMode::MlKem768).map(|_| ()),
            Err(PqCryptoError::NoPublicKey(KeySizeMode::MlKem768))
        );
        assert_eq!(
            slots.decapsulate(KeySizeMode::MlKem1024, &[0; 1568]),
            Err(PqCryptoError::NoPrivateKey(KeySizeMode::MlKem1024))
        );
    }

    #[test]
    fn generated_keys_have_level_sizes() {
        let mut slots = KeyPairSlots::new();
        for &level in KeySizeMode::all() {
            let keys = slots.generate(level);
            assert_eq!(keys.public_key().len(), level.public_key_size());
            assert!(keys.has_secret_key());
        }
    }

    #[test]
    fn imported_secret_key_derives_the_generated_public_key() {
        let mut source = KeyPairSlots::new();
        let keys = source.generate(KeySizeMode::MlKem768).clone();
        let secret = keys.secret_key.as_ref().expect("generated pair has a secret key");

        let mut target = KeyPairSlots::new();
        target
            .import_decapsulation_key(KeySizeMode::MlKem768, secret)
            .expect("valid secret key");
        assert_eq!(
            target.get(KeySizeMode::MlKem768).map(KemKeys::public_key),
            Some(keys.public_key())
        );
    }

    #[test]
    fn tampered_secret_key_is_rejected_and_slot_untouched() {
        let mut slots = KeyPairSlots::new();
        let mut secret = slots
            .generate(KeySizeMode::MlKem768)
            .secret_key
            .clone()
            .expect("generated pair has a secret key");
        // flip a byte inside the embedded encapsulation key
        secret[1152 + 10] ^= 0x01;

        let before = slots.get(KeySizeMode::MlKem768).map(|k| k.public_key().to_vec());
        assert!(matches!(
            slots.import_decapsulation_key(KeySizeMode::MlKem768, &secret),
            Err(PqCryptoError::InvalidKey(_))
        ));
        assert_eq!(
            slots.get(KeySizeMode::MlKem768).map(|k| k.public_key().to_vec()),
            before
        );
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let mut slots = KeyPairSlots::new();
        slots.generate(KeySizeMode::MlKem768);
        let rendered = format!("{slots:?}");
        assert!(rendered.contains("has_secret_key: true"));
        assert!(rendered.len() < 400);
    }
}
