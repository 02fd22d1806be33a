pub mod aes;
mod algorithm;
pub mod chacha20;
pub mod key_text;

pub use self::aes::{AesKey, AesKeySize};
pub use self::algorithm::{CipherMode, BLOCK_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};
pub use self::chacha20::{ChaChaKey, ChaChaNonce};
pub use self::key_text::generate_key_text;
