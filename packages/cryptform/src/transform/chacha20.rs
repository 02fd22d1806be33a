//! ChaCha20 transform
//!
//! Unauthenticated: a modified ciphertext decrypts to modified plaintext
//! without any error. The base64 output carries neither nonce nor counter.

use super::{KeyMaterial, KeyState, TransformOutput};
use crate::error::{OptionField, Result, TransformError};
use crate::options::{TransformOptions, ValidationReport};
use cryptform_cipher::cipher::{chacha20, key_text};
use cryptform_cipher::{ChaChaKey, ChaChaNonce};
use cryptform_common::LoggingTransformer;
use cryptform_encoding::base::{decode_base64, encode_base64};

/// ChaCha20 with user-supplied key, nonce and starting block counter
#[derive(Debug, Clone)]
pub struct ChaCha20Cipher {
    key: KeyState<ChaChaKey>,
    nonce: KeyState<ChaChaNonce>,
    counter: Result<u32>,
}

impl Default for ChaCha20Cipher {
    fn default() -> Self {
        Self {
            key: KeyState::Missing,
            nonce: KeyState::Missing,
            counter: Ok(chacha20::DEFAULT_COUNTER),
        }
    }
}

impl ChaCha20Cipher {
    /// Display name
    pub const NAME: &'static str = "ChaCha20";

    /// Install key text; its UTF-8 bytes must be exactly 32 bytes
    ///
    /// # Errors
    ///
    /// [`TransformError::Validation`] on [`OptionField::Key`]. The previous
    /// key is discarded either way.
    pub fn set_key_text(&mut self, text: &str) -> Result<()> {
        let parsed = if text.is_empty() {
            Err(TransformError::required(OptionField::Key))
        } else {
            ChaChaKey::from_slice(text.as_bytes()).map_err(TransformError::from)
        };
        self.key.set(parsed)?;
        LoggingTransformer::log_key_installed(Self::NAME, "key", text.as_bytes());
        Ok(())
    }

    /// Install nonce text; its UTF-8 bytes must be exactly 12 bytes
    ///
    /// # Errors
    ///
    /// [`TransformError::Validation`] on [`OptionField::Nonce`]. The
    /// previous nonce is discarded either way.
    pub fn set_nonce_text(&mut self, text: &str) -> Result<()> {
        let parsed = if text.is_empty() {
            Err(TransformError::required(OptionField::Nonce))
        } else {
            ChaChaNonce::from_slice(text.as_bytes()).map_err(TransformError::from)
        };
        self.nonce.set(parsed)
    }

    /// Set the starting block counter from decimal text
    ///
    /// Empty text restores the default counter of 1.
    ///
    /// # Errors
    ///
    /// [`TransformError::Validation`] on [`OptionField::Counter`] when the
    /// text is not a `u32`; execution then refuses to run until it is fixed.
    pub fn set_counter_text(&mut self, text: &str) -> Result<u32> {
        self.counter = if text.trim().is_empty() {
            Ok(chacha20::DEFAULT_COUNTER)
        } else {
            chacha20::parse_counter(text).map_err(TransformError::from)
        };
        self.counter.clone()
    }

    /// Starting block counter, if the configured text was valid
    #[must_use]
    pub fn counter(&self) -> Option<u32> {
        self.counter.as_ref().ok().copied()
    }

    pub(crate) fn configure(&mut self, options: &TransformOptions, report: &mut ValidationReport) {
        if let Some(key) = &options.key {
            report.record_result(OptionField::Key, self.set_key_text(key));
        }
        if let Some(nonce) = &options.nonce {
            report.record_result(OptionField::Nonce, self.set_nonce_text(nonce));
        }
        if let Some(counter) = &options.counter {
            report.record_result(OptionField::Counter, self.set_counter_text(counter));
        }
    }

    pub(crate) fn generate_key(&mut self) -> Result<KeyMaterial> {
        let key = key_text::generate_key_text(key_text::CHACHA_KEY_TEXT_LEN)?;
        let nonce = key_text::generate_key_text(key_text::CHACHA_NONCE_TEXT_LEN)?;
        self.set_key_text(&key)?;
        self.set_nonce_text(&nonce)?;
        Ok(KeyMaterial::ChaCha20 {
            key,
            nonce: nonce.to_string(),
        })
    }

    fn keystream(&self, data: &[u8]) -> Result<Vec<u8>> {
        let key = self.key.require(OptionField::Key)?;
        let nonce = self.nonce.require(OptionField::Nonce)?;
        let counter = self.counter.clone()?;
        Ok(chacha20::apply_keystream(key, nonce, counter, data)?)
    }

    pub(crate) fn encrypt(&self, plaintext: &[u8]) -> Result<TransformOutput> {
        let ciphertext = self.keystream(plaintext)?;
        Ok(TransformOutput::Text(encode_base64(&ciphertext)))
    }

    pub(crate) fn decrypt(&self, text: &[u8]) -> Result<TransformOutput> {
        // validate key material before touching the input
        self.key.require(OptionField::Key)?;
        self.nonce.require(OptionField::Nonce)?;
        let ciphertext = decode_base64(text.trim_ascii())?;
        Ok(TransformOutput::Bytes(self.keystream(&ciphertext)?))
    }
}
