//! One-way digest transforms

use super::TransformOutput;
use crate::error::OptionField;
use crate::options::{FieldStatus, TransformOptions, ValidationReport};
use cryptform_hashing::HashAlgorithm;

/// MD5 digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hash;

impl Md5Hash {
    /// Display name
    pub const NAME: &'static str = "MD5";

    pub(crate) fn digest(self, input: &[u8]) -> TransformOutput {
        TransformOutput::Digest(cryptform_hashing::md5(input))
    }
}

/// SHA-family digest, SHA-1 until configured otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct ShaHash {
    algorithm: HashAlgorithm,
}

impl ShaHash {
    /// Display name
    pub const NAME: &'static str = "SHA";

    /// Selected variant
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Select the variant
    pub fn set_algorithm(&mut self, algorithm: HashAlgorithm) {
        self.algorithm = algorithm;
    }

    pub(crate) fn configure(&mut self, options: &TransformOptions, report: &mut ValidationReport) {
        if let Some(algorithm) = options.hash_algorithm {
            self.set_algorithm(algorithm);
            report.record(OptionField::HashAlgorithm, FieldStatus::Accepted);
        }
    }

    pub(crate) fn digest(&self, input: &[u8]) -> TransformOutput {
        TransformOutput::Digest(cryptform_hashing::sha(self.algorithm, input))
    }
}
