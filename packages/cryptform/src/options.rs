//! Transform configuration and per-field validation results

use crate::error::{OptionField, Result, TransformError};
use cryptform_cipher::CipherMode;
use cryptform_encoding::BaseAlphabet;
use cryptform_hashing::HashAlgorithm;
use cryptform_pqcrypto::KeySizeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Configuration applied to a transform by [`crate::Transform::configure`]
///
/// Every field is optional; an absent field leaves the transform's current
/// setting alone. Key, nonce and counter are text, exactly as a user would
/// type them; key bytes are the UTF-8 bytes of that text. Imported ML-KEM
/// keys are standard base64.
///
/// Key text is wiped when the options are dropped.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct TransformOptions {
    /// AES block mode
    #[zeroize(skip)]
    #[serde(default)]
    pub cipher_mode: Option<CipherMode>,
    /// Key text (AES, ChaCha20)
    #[serde(default)]
    pub key: Option<String>,
    /// Nonce text (ChaCha20)
    #[serde(default)]
    pub nonce: Option<String>,
    /// Decimal block counter (ChaCha20); empty means the default of 1
    #[serde(default)]
    pub counter: Option<String>,
    /// ML-KEM level
    #[zeroize(skip)]
    #[serde(default)]
    pub key_size: Option<KeySizeMode>,
    /// Base32/Base64 alphabet
    #[zeroize(skip)]
    #[serde(default)]
    pub base: Option<BaseAlphabet>,
    /// SHA variant
    #[zeroize(skip)]
    #[serde(default)]
    pub hash_algorithm: Option<HashAlgorithm>,
    /// Base64 ML-KEM encapsulation key to import into the current level
    #[serde(default)]
    pub encapsulation_key: Option<String>,
    /// Base64 ML-KEM decapsulation key to import into the current level
    #[serde(default)]
    pub decapsulation_key: Option<String>,
}

impl TransformOptions {
    /// Options with every field absent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an options document
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Configuration`] for malformed JSON, unknown
    /// fields or unknown enum names.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Select the AES block mode
    #[must_use]
    pub fn with_cipher_mode(mut self, mode: CipherMode) -> Self {
        self.cipher_mode = Some(mode);
        self
    }

    /// Set key text
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set nonce text
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set counter text
    #[must_use]
    pub fn with_counter(mut self, counter: impl Into<String>) -> Self {
        self.counter = Some(counter.into());
        self
    }

    /// Select the ML-KEM level
    #[must_use]
    pub fn with_key_size(mut self, level: KeySizeMode) -> Self {
        self.key_size = Some(level);
        self
    }

    /// Select the Base32/Base64 alphabet
    #[must_use]
    pub fn with_base(mut self, alphabet: BaseAlphabet) -> Self {
        self.base = Some(alphabet);
        self
    }

    /// Select the SHA variant
    #[must_use]
    pub fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = Some(algorithm);
        self
    }

    /// Import a base64 encapsulation key into the current ML-KEM level
    #[must_use]
    pub fn with_encapsulation_key(mut self, key: impl Into<String>) -> Self {
        self.encapsulation_key = Some(key.into());
        self
    }

    /// Import a base64 decapsulation key into the current ML-KEM level
    #[must_use]
    pub fn with_decapsulation_key(mut self, key: impl Into<String>) -> Self {
        self.decapsulation_key = Some(key.into());
        self
    }

    /// Fields present in these options, in application order
    #[must_use]
    pub fn present_fields(&self) -> Vec<OptionField> {
        [
            (OptionField::CipherMode, self.cipher_mode.is_some()),
            (OptionField::Key, self.key.is_some()),
            (OptionField::Nonce, self.nonce.is_some()),
            (OptionField::Counter, self.counter.is_some()),
            (OptionField::KeySize, self.key_size.is_some()),
            (OptionField::Base, self.base.is_some()),
            (OptionField::HashAlgorithm, self.hash_algorithm.is_some()),
            (OptionField::EncapsulationKey, self.encapsulation_key.is_some()),
            (OptionField::DecapsulationKey, self.decapsulation_key.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}

impl fmt::Debug for TransformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("TransformOptions")
            .field("cipher_mode", &self.cipher_mode)
            .field("key", &redact(&self.key))
            .field("nonce", &redact(&self.nonce))
            .field("counter", &self.counter)
            .field("key_size", &self.key_size)
            .field("base", &self.base)
            .field("hash_algorithm", &self.hash_algorithm)
            .field("encapsulation_key", &self.encapsulation_key.as_ref().map(String::len))
            .field("decapsulation_key", &redact(&self.decapsulation_key))
            .finish()
    }
}

/// Outcome of applying one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Applied to the transform
    Accepted,
    /// Rejected; the transform refuses to execute until it is fixed
    Rejected(TransformError),
    /// The transform has no such setting; ignored
    NotApplicable,
}

/// Per-field results of a `configure` call, in application order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(OptionField, FieldStatus)>,
}

impl ValidationReport {
    pub(crate) fn record(&mut self, field: OptionField, status: FieldStatus) {
        self.entries.push((field, status));
    }

    pub(crate) fn record_result<T>(&mut self, field: OptionField, result: Result<T>) {
        let status = match result {
            Ok(_) => FieldStatus::Accepted,
            Err(err) => FieldStatus::Rejected(err),
        };
        self.record(field, status);
    }

    pub(crate) fn contains(&self, field: OptionField) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    /// Status recorded for `field`, if it was present in the options
    #[must_use]
    pub fn status(&self, field: OptionField) -> Option<&FieldStatus> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, status)| status)
    }

    /// All recorded entries
    #[must_use]
    pub fn entries(&self) -> &[(OptionField, FieldStatus)] {
        &self.entries
    }

    /// Rejected fields with their errors
    pub fn rejections(&self) -> impl Iterator<Item = (OptionField, &TransformError)> {
        self.entries.iter().filter_map(|(field, status)| match status {
            FieldStatus::Rejected(err) => Some((*field, err)),
            _ => None,
        })
    }

    /// Whether no field was rejected
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rejections().next().is_none()
    }

    /// First rejection, as a result
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected field.
    pub fn into_result(self) -> Result<()> {
        match self.rejections().next() {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
