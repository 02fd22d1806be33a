//! Structured logging for transform operations
//!
//! Provides `env_logger`-based logging that never writes key material,
//! nonces, plaintext or shared secrets. Keys that need to be correlated
//! across log lines are reduced to a SHA-256 fingerprint.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points used by the transform crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels are configured through `RUST_LOG`, for example
    /// `RUST_LOG=cryptform_cipher=debug,cryptform=info`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("cryptform logging initialized");
        });
    }

    /// Initialize logging for tests; repeated calls are harmless
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log the start of an operation with its input size only
    pub fn log_operation(transform: &str, operation: &str, input_len: usize) {
        debug!("{transform}: {operation} (input_len: {input_len})");
    }

    /// Log input that was rejected before any primitive ran
    pub fn log_rejected(transform: &str, field: &str, reason: &dyn std::fmt::Display) {
        warn!("{transform}: rejected {field}: {reason}");
    }

    /// Log a failed cryptographic operation without exposing data
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Log installation of key material by fingerprint
    pub fn log_key_installed(transform: &str, slot: &str, key: &[u8]) {
        info!(
            "{transform}: installed {slot} (fingerprint: {})",
            Self::key_fingerprint(key)
        );
    }

    /// Fingerprint for key material: `#` followed by the first 12 hex
    /// characters of its SHA-256 digest
    #[must_use]
    pub fn key_fingerprint(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
