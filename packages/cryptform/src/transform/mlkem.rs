//! ML-KEM transform: level selection over independent key-pair slots

use super::{KeyMaterial, TransformOutput};
use crate::error::{OptionField, Result, TransformError};
use crate::options::{FieldStatus, TransformOptions, ValidationReport};
use cryptform_encoding::base::decode_base64;
use cryptform_pqcrypto::{KeyPairSlots, KeySizeMode};
use zeroize::Zeroizing;

/// ML-KEM-768/1024 with one key-pair slot per level
///
/// Switching level never clears the other level's slot; execution only
/// consults the slot of the selected level.
#[derive(Debug, Clone, Default)]
pub struct MlKemTransform {
    level: KeySizeMode,
    slots: KeyPairSlots,
}

impl MlKemTransform {
    /// Display name
    pub const NAME: &'static str = "ML-KEM(Kyber)";

    /// Selected level
    #[must_use]
    pub fn level(&self) -> KeySizeMode {
        self.level
    }

    /// Select the level
    pub fn set_level(&mut self, level: KeySizeMode) {
        self.level = level;
    }

    /// Key slots of both levels
    #[must_use]
    pub fn slots(&self) -> &KeyPairSlots {
        &self.slots
    }

    /// Import a base64 encapsulation key into the selected level
    ///
    /// # Errors
    ///
    /// [`TransformError::Validation`] on [`OptionField::EncapsulationKey`]
    /// for bad base64 or a wrong-size key; the slot is left unchanged.
    pub fn import_encapsulation_key(&mut self, text: &str) -> Result<()> {
        let field = OptionField::EncapsulationKey;
        let raw = decode_base64(text.trim()).map_err(|e| TransformError::validation(field, e))?;
        self.slots
            .import_encapsulation_key(self.level, &raw)
            .map_err(|e| TransformError::validation(field, e))
    }

    /// Import a base64 decapsulation key into the selected level
    ///
    /// The encapsulation key is derived from the decapsulation key.
    ///
    /// # Errors
    ///
    /// [`TransformError::Validation`] on [`OptionField::DecapsulationKey`]
    /// for bad base64, a wrong-size key or a corrupted embedded public key;
    /// the slot is left unchanged.
    pub fn import_decapsulation_key(&mut self, text: &str) -> Result<()> {
        let field = OptionField::DecapsulationKey;
        let raw = Zeroizing::new(
            decode_base64(text.trim()).map_err(|e| TransformError::validation(field, e))?,
        );
        self.slots
            .import_decapsulation_key(self.level, &raw)
            .map_err(|e| TransformError::validation(field, e))
    }

    /// Keys of the selected level as base64, if any are held
    #[must_use]
    pub fn export(&self) -> Option<(String, Option<Zeroizing<String>>)> {
        self.slots.get(self.level).map(|keys| {
            (
                keys.encapsulation_key_base64(),
                keys.decapsulation_key_base64(),
            )
        })
    }

    pub(crate) fn configure(&mut self, options: &TransformOptions, report: &mut ValidationReport) {
        // level first so imports land in the newly selected slot
        if let Some(level) = options.key_size {
            self.set_level(level);
            report.record(OptionField::KeySize, FieldStatus::Accepted);
        }
        if let Some(key) = &options.encapsulation_key {
            report.record_result(
                OptionField::EncapsulationKey,
                self.import_encapsulation_key(key),
            );
        }
        if let Some(key) = &options.decapsulation_key {
            report.record_result(
                OptionField::DecapsulationKey,
                self.import_decapsulation_key(key),
            );
        }
    }

    pub(crate) fn generate_key_pair(&mut self) -> KeyMaterial {
        let keys = self.slots.generate(self.level);
        KeyMaterial::MlKem {
            level: keys.level(),
            encapsulation_key: keys.encapsulation_key_base64(),
            decapsulation_key: keys
                .decapsulation_key_base64()
                .unwrap_or_else(|| Zeroizing::new(String::new())),
        }
    }

    pub(crate) fn encapsulate(&self) -> Result<TransformOutput> {
        Ok(TransformOutput::Encapsulated(
            self.slots.encapsulate(self.level)?,
        ))
    }

    pub(crate) fn decapsulate(&self, text: &[u8]) -> Result<TransformOutput> {
        let has_private_key = self
            .slots
            .get(self.level)
            .is_some_and(|keys| keys.has_secret_key());
        if !has_private_key {
            return Err(TransformError::NoPrivateKey(self.level));
        }
        let ciphertext = decode_base64(text.trim_ascii())?;
        Ok(TransformOutput::SharedSecret(
            self.slots.decapsulate(self.level, &ciphertext)?,
        ))
    }
}
