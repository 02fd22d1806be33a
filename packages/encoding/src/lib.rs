//! # Cryptform Encoding
//!
//! Reversible byte-to-text codecs:
//!
//! - [`ascii85`]: btoa-style Ascii85 (`z` shorthand for zero groups, no delimiters)
//! - [`base`]: RFC 4648 Base32 and Base64 with padding, selected by [`BaseAlphabet`]
//! - [`hex`]: lowercase hexadecimal
//!
//! All codecs are total on encode; decode fails only on malformed text.

#![forbid(unsafe_code)]

pub mod ascii85;
pub mod base;
pub mod error;
pub mod hex;

pub use base::BaseAlphabet;
pub use error::{EncodingError, Result};
