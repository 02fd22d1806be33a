//! Common infrastructure shared by every cryptform crate
//!
//! - OS-backed randomness with a typed failure ([`RandomnessError`])
//! - `env_logger` bootstrap and redacted key fingerprints for logs

#![forbid(unsafe_code)]

pub mod error;
pub mod logging;
pub mod random;

pub use error::RandomnessError;
pub use logging::LoggingTransformer;
pub use random::{fill_random, random_array};
