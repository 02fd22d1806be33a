//! AES transform: key text, mode selection and base64 framing

use super::{KeyMaterial, KeyState, TransformOutput};
use crate::error::{OptionField, Result, TransformError};
use crate::options::{FieldStatus, TransformOptions, ValidationReport};
use cryptform_cipher::cipher::{aes, key_text};
use cryptform_cipher::{AesKey, AesKeySize, CipherMode};
use cryptform_common::LoggingTransformer;
use cryptform_encoding::base::{decode_base64, encode_base64};

/// AES in CBC, GCM or CTR mode; ciphertext travels as base64 text
#[derive(Debug, Clone)]
pub struct AesCipher {
    mode: CipherMode,
    key: KeyState<AesKey>,
}

impl Default for AesCipher {
    fn default() -> Self {
        Self {
            mode: CipherMode::default(),
            key: KeyState::Missing,
        }
    }
}

impl AesCipher {
    /// Display name
    pub const NAME: &'static str = "AES";

    /// Selected mode
    #[must_use]
    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Select the mode; key material is kept
    pub fn set_mode(&mut self, mode: CipherMode) {
        self.mode = mode;
    }

    /// Variant of the installed key, if it is valid
    #[must_use]
    pub fn key_size(&self) -> Option<AesKeySize> {
        self.key.valid().map(AesKey::size)
    }

    /// Install key text; its UTF-8 bytes are the key
    ///
    /// # Errors
    ///
    /// [`TransformError::Validation`] on [`OptionField::Key`] for empty text
    /// or a length other than 16, 24 or 32 bytes. The previous key is
    /// discarded either way.
    pub fn set_key_text(&mut self, text: &str) -> Result<AesKeySize> {
        if text.is_empty() {
            return self.install(Err(TransformError::required(OptionField::Key)), &[]);
        }
        self.set_key(text.as_bytes())
    }

    /// Install raw key bytes
    ///
    /// # Errors
    ///
    /// As [`AesCipher::set_key_text`].
    pub fn set_key(&mut self, key: &[u8]) -> Result<AesKeySize> {
        self.install(AesKey::from_slice(key).map_err(TransformError::from), key)
    }

    fn install(&mut self, parsed: Result<AesKey>, raw: &[u8]) -> Result<AesKeySize> {
        self.key.set(parsed)?;
        LoggingTransformer::log_key_installed(Self::NAME, "key", raw);
        self.key.require(OptionField::Key).map(AesKey::size)
    }

    pub(crate) fn configure(&mut self, options: &TransformOptions, report: &mut ValidationReport) {
        if let Some(mode) = options.cipher_mode {
            self.set_mode(mode);
            report.record(OptionField::CipherMode, FieldStatus::Accepted);
        }
        if let Some(key) = &options.key {
            report.record_result(OptionField::Key, self.set_key_text(key));
        }
    }

    pub(crate) fn generate_key(&mut self) -> Result<KeyMaterial> {
        let key = key_text::generate_key_text(key_text::AES_KEY_TEXT_LEN)?;
        self.set_key_text(&key)?;
        Ok(KeyMaterial::Aes { key })
    }

    pub(crate) fn encrypt(&self, plaintext: &[u8]) -> Result<TransformOutput> {
        let key = self.key.require(OptionField::Key)?;
        let framed = aes::encrypt(self.mode, key, plaintext).inspect_err(|err| {
            LoggingTransformer::log_crypto_error("AES encrypt", err);
        })?;
        Ok(TransformOutput::Text(encode_base64(&framed)))
    }

    pub(crate) fn decrypt(&self, text: &[u8]) -> Result<TransformOutput> {
        let key = self.key.require(OptionField::Key)?;
        let framed = decode_base64(text.trim_ascii())?;
        let plaintext = aes::decrypt(self.mode, key, &framed).inspect_err(|err| {
            LoggingTransformer::log_crypto_error("AES decrypt", err);
        })?;
        Ok(TransformOutput::Bytes(plaintext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_text_length_picks_variant() {
        let mut cipher = AesCipher::default();
        assert_eq!(cipher.set_key_text("0123456789abcdef"), Ok(AesKeySize::Aes128));
        assert_eq!(
            cipher.set_key_text("0123456789abcdef01234567"),
            Ok(AesKeySize::Aes192)
        );
        assert_eq!(cipher.key_size(), Some(AesKeySize::Aes192));
    }

    #[test]
    fn rejected_key_replaces_the_old_one() {
        let mut cipher = AesCipher::default();
        cipher.set_key_text("0123456789abcdef").expect("16 bytes");
        let rejection = cipher.set_key_text("short").expect_err("5 bytes");
        assert_eq!(rejection.field(), Some(OptionField::Key));
        assert_eq!(cipher.key_size(), None);
        assert_eq!(cipher.encrypt(b"data"), Err(rejection));
    }

    #[test]
    fn empty_key_text_is_required() {
        let mut cipher = AesCipher::default();
        assert_eq!(
            cipher.set_key_text(""),
            Err(TransformError::required(OptionField::Key))
        );
    }

    #[test]
    fn switching_mode_keeps_key() {
        let mut cipher = AesCipher::default();
        cipher.set_key_text("0123456789abcdef").expect("16 bytes");
        cipher.set_mode(CipherMode::Ctr);
        assert_eq!(cipher.key_size(), Some(AesKeySize::Aes128));
        assert_eq!(cipher.mode(), CipherMode::Ctr);
    }

    #[test]
    fn generated_key_is_installed() {
        let mut cipher = AesCipher::default();
        let KeyMaterial::Aes { key } = cipher.generate_key().expect("randomness available") else {
            panic!("AES generates AES key material");
        };
        assert_eq!(key.len(), 32);
        assert_eq!(cipher.key_size(), Some(AesKeySize::Aes256));
    }
}
