//! ML-KEM security levels

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// ML-KEM parameter set; each level owns an independent key-pair slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum KeySizeMode {
    /// ML-KEM-768 (NIST security level 3)
    /// Formerly known as Kyber768
    #[serde(rename = "ML-KEM-768")]
    #[default]
    MlKem768,

    /// ML-KEM-1024 (NIST security level 5)
    /// Formerly known as Kyber1024
    #[serde(rename = "ML-KEM-1024")]
    MlKem1024,
}

impl KeySizeMode {
    /// Canonical name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MlKem768 => "ML-KEM-768",
            Self::MlKem1024 => "ML-KEM-1024",
        }
    }

    /// Human-readable description, for presentation only
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::MlKem768 => "ML-KEM-768 - Recommended security level (NIST Level 3)",
            Self::MlKem1024 => "ML-KEM-1024 - Higher security level (NIST Level 5)",
        }
    }

    /// NIST security category
    #[must_use]
    pub fn security_level(self) -> u8 {
        match self {
            Self::MlKem768 => 3,
            Self::MlKem1024 => 5,
        }
    }

    /// Encapsulation (public) key size in bytes
    #[must_use]
    pub fn public_key_size(self) -> usize {
        match self {
            Self::MlKem768 => 1184,
            Self::MlKem1024 => 1568,
        }
    }

    /// Decapsulation (secret) key size in bytes
    #[must_use]
    pub fn secret_key_size(self) -> usize {
        match self {
            Self::MlKem768 => 2400,
            Self::MlKem1024 => 3168,
        }
    }

    /// Ciphertext size in bytes
    #[must_use]
    pub fn ciphertext_size(self) -> usize {
        match self {
            Self::MlKem768 => 1088,
            Self::MlKem1024 => 1568,
        }
    }

    /// Shared secret size in bytes (always 32 for ML-KEM)
    #[must_use]
    pub fn shared_secret_size(self) -> usize {
        32
    }

    /// Both levels in menu order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::MlKem768, Self::MlKem1024]
    }
}

impl fmt::Display for KeySizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeySizeMode {
    type Err = crate::PqCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "mlkem768" | "kem768" | "kyber768" | "768" => Ok(Self::MlKem768),
            "mlkem1024" | "kem1024" | "kyber1024" | "1024" => Ok(Self::MlKem1024),
            _ => Err(crate::PqCryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for KeySizeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
