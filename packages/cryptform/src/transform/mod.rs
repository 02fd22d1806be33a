//! The transform sum type and its execute contract
//!
//! Every transform is configured through [`Transform::configure`] and run
//! through [`Transform::execute`]. Configuration never runs a primitive, and
//! execution never mutates configuration.

mod aes;
mod chacha20;
mod codec;
mod hash;
mod mlkem;

pub use self::aes::AesCipher;
pub use self::chacha20::ChaCha20Cipher;
pub use self::codec::{Ascii85Codec, BaseCodec, HexCodec};
pub use self::hash::{Md5Hash, ShaHash};
pub use self::mlkem::MlKemTransform;

use crate::error::{OptionField, Result, TransformError};
use crate::options::{FieldStatus, TransformOptions, ValidationReport};
use cryptform_common::LoggingTransformer;
use cryptform_hashing::HashResult;
use cryptform_pqcrypto::{Encapsulation, KeySizeMode, SharedSecret};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

/// Which way a reversible transform runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Encode, encrypt or encapsulate
    #[default]
    Forward,
    /// Decode, decrypt or decapsulate
    Reverse,
}

impl Direction {
    /// The other direction
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Result of a successful execution
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutput {
    /// Text: codec encodings and base64 ciphertext
    Text(String),
    /// Raw bytes: codec decodings and recovered plaintext
    Bytes(Vec<u8>),
    /// Hash digest, rendered as lowercase hex
    Digest(HashResult),
    /// Fresh shared secret with the ciphertext that transports it
    Encapsulated(Encapsulation),
    /// Shared secret recovered by decapsulation
    SharedSecret(SharedSecret),
}

impl TransformOutput {
    /// Canonical text rendering
    ///
    /// Bytes are read as UTF-8 with replacement; digests and shared secrets
    /// are hex; an encapsulation renders as the hex secret and the base64
    /// ciphertext on separate lines.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Digest(digest) => digest.to_hex(),
            Self::Encapsulated(encapsulation) => format!(
                "{}\n{}",
                encapsulation.shared_secret.to_hex(),
                encapsulation.ciphertext_base64()
            ),
            Self::SharedSecret(secret) => secret.to_hex(),
        }
    }
}

/// Key material produced by `generate_key_material`
#[derive(Clone)]
pub enum KeyMaterial {
    /// Generated AES key text (installed as the transform's key)
    Aes {
        /// Key text
        key: Zeroizing<String>,
    },
    /// Generated ChaCha20 key and nonce text (both installed)
    ChaCha20 {
        /// Key text
        key: Zeroizing<String>,
        /// Nonce text
        nonce: String,
    },
    /// ML-KEM key pair of one level, as base64
    MlKem {
        /// Level the pair belongs to
        level: KeySizeMode,
        /// Encapsulation (public) key
        encapsulation_key: String,
        /// Decapsulation (private) key
        decapsulation_key: Zeroizing<String>,
    },
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aes { .. } => f.write_str("KeyMaterial::Aes { .. }"),
            Self::ChaCha20 { .. } => f.write_str("KeyMaterial::ChaCha20 { .. }"),
            Self::MlKem { level, .. } => write!(f, "KeyMaterial::MlKem {{ level: {level}, .. }}"),
        }
    }
}

/// Key material slot that remembers why it is unusable
#[derive(Clone, Debug)]
pub(crate) enum KeyState<T> {
    Missing,
    Invalid(TransformError),
    Valid(T),
}

impl<T> KeyState<T> {
    pub(crate) fn require(&self, field: OptionField) -> Result<&T> {
        match self {
            Self::Missing => Err(TransformError::required(field)),
            Self::Invalid(err) => Err(err.clone()),
            Self::Valid(value) => Ok(value),
        }
    }

    /// Store `result`, returning the error (if any) for the report
    pub(crate) fn set(&mut self, result: Result<T>) -> Result<()> {
        match result {
            Ok(value) => {
                *self = Self::Valid(value);
                Ok(())
            }
            Err(err) => {
                *self = Self::Invalid(err.clone());
                Err(err)
            }
        }
    }

    pub(crate) fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            _ => None,
        }
    }
}

/// One of the eight transforms
#[derive(Debug, Clone)]
pub enum Transform {
    /// Ascii85 codec
    Ascii85(Ascii85Codec),
    /// Base32/Base64 codec
    Base(BaseCodec),
    /// Hex codec
    Hex(HexCodec),
    /// MD5 digest
    Md5(Md5Hash),
    /// SHA-family digest
    Sha(ShaHash),
    /// AES in CBC, GCM or CTR mode
    Aes(AesCipher),
    /// Unauthenticated ChaCha20 stream cipher
    ChaCha20(ChaCha20Cipher),
    /// ML-KEM key encapsulation
    MlKem(MlKemTransform),
}

impl Transform {
    /// Display name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii85(_) => Ascii85Codec::NAME,
            Self::Base(_) => BaseCodec::NAME,
            Self::Hex(_) => HexCodec::NAME,
            Self::Md5(_) => Md5Hash::NAME,
            Self::Sha(_) => ShaHash::NAME,
            Self::Aes(_) => AesCipher::NAME,
            Self::ChaCha20(_) => ChaCha20Cipher::NAME,
            Self::MlKem(_) => MlKemTransform::NAME,
        }
    }

    /// Whether the transform has a reverse direction
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        !matches!(self, Self::Md5(_) | Self::Sha(_))
    }

    /// Labels for the forward and reverse directions; hashes have one
    #[must_use]
    pub fn direction_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Ascii85(_) | Self::Base(_) | Self::Hex(_) => &["Encode", "Decode"],
            Self::Md5(_) | Self::Sha(_) => &["Hash"],
            Self::Aes(_) | Self::ChaCha20(_) => &["Encrypt", "Decrypt"],
            Self::MlKem(_) => &["Encapsulate", "Decapsulate"],
        }
    }

    /// Label for `direction`
    #[must_use]
    pub fn direction_label(&self, direction: Direction) -> &'static str {
        let labels = self.direction_labels();
        match direction {
            Direction::Forward => labels[0],
            Direction::Reverse => labels[labels.len() - 1],
        }
    }

    /// Apply every present field of `options`
    ///
    /// Fields the transform has no use for are reported as
    /// [`FieldStatus::NotApplicable`]. A rejected key, nonce or counter
    /// replaces whatever was held before, so `execute` keeps failing with
    /// that rejection until a valid value is configured.
    pub fn configure(&mut self, options: &TransformOptions) -> ValidationReport {
        let mut report = ValidationReport::default();
        match self {
            Self::Ascii85(_) | Self::Hex(_) | Self::Md5(_) => {}
            Self::Base(codec) => codec.configure(options, &mut report),
            Self::Sha(hash) => hash.configure(options, &mut report),
            Self::Aes(cipher) => cipher.configure(options, &mut report),
            Self::ChaCha20(cipher) => cipher.configure(options, &mut report),
            Self::MlKem(kem) => kem.configure(options, &mut report),
        }

        for field in options.present_fields() {
            if !report.contains(field) {
                report.record(field, FieldStatus::NotApplicable);
            }
        }
        for (field, err) in report.rejections() {
            LoggingTransformer::log_rejected(self.name(), field.name(), err);
        }
        report
    }

    /// Run the transform on `input`
    ///
    /// Returns `Ok(None)` for empty input, which is a no-op rather than an
    /// error. Encapsulation takes no input and always runs. Hashes ignore
    /// `direction`.
    ///
    /// # Errors
    ///
    /// Any [`TransformError`]; on error no output is produced.
    pub fn execute(&self, direction: Direction, input: &[u8]) -> Result<Option<TransformOutput>> {
        let encapsulating = matches!((self, direction), (Self::MlKem(_), Direction::Forward));
        if input.is_empty() && !encapsulating {
            return Ok(None);
        }
        LoggingTransformer::log_operation(
            self.name(),
            self.direction_label(direction),
            input.len(),
        );

        let output = match (self, direction) {
            (Self::Ascii85(codec), Direction::Forward) => codec.encode(input),
            (Self::Ascii85(codec), Direction::Reverse) => codec.decode(input)?,
            (Self::Base(codec), Direction::Forward) => codec.encode(input),
            (Self::Base(codec), Direction::Reverse) => codec.decode(input)?,
            (Self::Hex(codec), Direction::Forward) => codec.encode(input),
            (Self::Hex(codec), Direction::Reverse) => codec.decode(input)?,
            (Self::Md5(hash), _) => hash.digest(input),
            (Self::Sha(hash), _) => hash.digest(input),
            (Self::Aes(cipher), Direction::Forward) => cipher.encrypt(input)?,
            (Self::Aes(cipher), Direction::Reverse) => cipher.decrypt(input)?,
            (Self::ChaCha20(cipher), Direction::Forward) => cipher.encrypt(input)?,
            (Self::ChaCha20(cipher), Direction::Reverse) => cipher.decrypt(input)?,
            (Self::MlKem(kem), Direction::Forward) => kem.encapsulate()?,
            (Self::MlKem(kem), Direction::Reverse) => kem.decapsulate(input)?,
        };
        Ok(Some(output))
    }

    /// Generate and install fresh key material
    ///
    /// AES gets new key text, ChaCha20 new key and nonce text, ML-KEM a new
    /// key pair for its current level. Codecs and hashes return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Randomness`] if OS randomness failed; the
    /// previous key material is kept.
    pub fn generate_key_material(&mut self) -> Result<Option<KeyMaterial>> {
        let material = match self {
            Self::Aes(cipher) => cipher.generate_key()?,
            Self::ChaCha20(cipher) => cipher.generate_key()?,
            Self::MlKem(kem) => kem.generate_key_pair(),
            Self::Ascii85(_) | Self::Base(_) | Self::Hex(_) | Self::Md5(_) | Self::Sha(_) => {
                return Ok(None);
            }
        };
        Ok(Some(material))
    }
}
