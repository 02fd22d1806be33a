//! # Cryptform Hashing
//!
//! One-way digests: MD5 and eleven SHA variants selected by
//! [`HashAlgorithm`]. Hashing never fails on byte input; the only error
//! path is parsing an unknown algorithm name.

#![forbid(unsafe_code)]

mod algorithm;
pub mod error;
pub mod hash_result;

pub use algorithm::HashAlgorithm;
pub use error::{HashError, Result};
pub use hash_result::HashResult;

use digest::Digest;

/// Compute the MD5 digest of `data`
#[must_use]
pub fn md5(data: &[u8]) -> HashResult {
    compute::<md5::Md5>(data)
}

/// Compute the digest of `data` with the selected SHA variant
#[must_use]
pub fn sha(algorithm: HashAlgorithm, data: &[u8]) -> HashResult {
    log::debug!("{algorithm}: hashing {} bytes", data.len());
    match algorithm {
        HashAlgorithm::Sha1 => compute::<sha1::Sha1>(data),
        HashAlgorithm::Sha224 => compute::<sha2::Sha224>(data),
        HashAlgorithm::Sha256 => compute::<sha2::Sha256>(data),
        HashAlgorithm::Sha3_224 => compute::<sha3::Sha3_224>(data),
        HashAlgorithm::Sha3_256 => compute::<sha3::Sha3_256>(data),
        HashAlgorithm::Sha3_384 => compute::<sha3::Sha3_384>(data),
        HashAlgorithm::Sha3_512 => compute::<sha3::Sha3_512>(data),
        HashAlgorithm::Sha512_224 => compute::<sha2::Sha512_224>(data),
        HashAlgorithm::Sha512_256 => compute::<sha2::Sha512_256>(data),
        HashAlgorithm::Sha384 => compute::<sha2::Sha384>(data),
        HashAlgorithm::Sha512 => compute::<sha2::Sha512>(data),
    }
}

fn compute<D: Digest>(data: &[u8]) -> HashResult {
    HashResult::new(D::digest(data).to_vec())
}
