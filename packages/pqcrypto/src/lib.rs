//! Post-quantum key encapsulation
//!
//! ML-KEM (Module-Lattice-based KEM, formerly CRYSTALS-Kyber) at two
//! parameter sets:
//! - ML-KEM-768 (NIST security level 3)
//! - ML-KEM-1024 (NIST security level 5)
//!
//! [`KeyPairSlots`] keeps one key slot per level. Keys can be generated
//! locally or imported from raw bytes, and are exported as base64 text.

#![forbid(unsafe_code)]

mod algorithm;
mod error;
mod kem;
mod key_pair;
mod shared_secret;

pub use self::algorithm::KeySizeMode;
pub use self::error::{PqCryptoError, Result};
pub use self::key_pair::{Encapsulation, KemKeys, KeyPairSlots};
pub use self::shared_secret::SharedSecret;
