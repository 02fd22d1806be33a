//! OS randomness for IVs, nonces and generated key text

use crate::RandomnessError;

/// Fill `dest` with bytes from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`RandomnessError`] if the OS source is unavailable.
pub fn fill_random(dest: &mut [u8]) -> Result<(), RandomnessError> {
    getrandom::fill(dest).map_err(|err| {
        log::error!("OS randomness unavailable for {} bytes: {err}", dest.len());
        RandomnessError::from(err)
    })
}

/// Produce a fixed-size array of random bytes.
///
/// # Errors
///
/// Returns [`RandomnessError`] if the OS source is unavailable.
pub fn random_array<const N: usize>() -> Result<[u8; N], RandomnessError> {
    let mut bytes = [0u8; N];
    fill_random(&mut bytes)?;
    Ok(bytes)
}
