//! Configurable encoding, hashing, cipher and ML-KEM transforms
//!
//! Every transform is picked from a static catalog, configured with
//! [`TransformOptions`] and executed in a [`Direction`]:
//!
//! ```no_run
//! use cryptform::{Direction, TransformOptions};
//!
//! # fn main() -> cryptform::Result<()> {
//! let mut aes = cryptform::resolve("crypto", "aes")?;
//! aes.configure(&TransformOptions::new().with_key("0123456789abcdef"))
//!     .into_result()?;
//! let sealed = aes.execute(Direction::Forward, b"attack at dawn")?;
//! assert!(sealed.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! [`TransformSession`] runs the same calls on tokio's blocking pool.

#![forbid(unsafe_code)]

pub mod error;
pub mod options;
pub mod registry;
pub mod session;
pub mod transform;

pub use error::{OptionField, Result, TransformError};
pub use options::{FieldStatus, TransformOptions, ValidationReport};
pub use registry::{
    default_transform, list_categories, lookup, resolve, Category, CategoryListing, TransformKind,
};
pub use session::{ExecutionTask, TransformSession};
pub use transform::{Direction, KeyMaterial, Transform, TransformOutput};

pub use cryptform_cipher::{AesKeySize, CipherMode};
pub use cryptform_common::LoggingTransformer;
pub use cryptform_encoding::BaseAlphabet;
pub use cryptform_hashing::{HashAlgorithm, HashResult};
pub use cryptform_pqcrypto::{Encapsulation, KeySizeMode, SharedSecret};
