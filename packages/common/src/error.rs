//! Error type for randomness failures

use thiserror::Error;

/// The operating system could not provide random bytes.
///
/// Treated as fatal to the operation that requested them. Callers must not
/// retry with a weaker source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("random generation failed: {0}")]
pub struct RandomnessError(pub String);

impl From<getrandom::Error> for RandomnessError {
    fn from(err: getrandom::Error) -> Self {
        Self(err.to_string())
    }
}
