//! Ascii85 (btoa flavour)
//!
//! Every 4 input bytes become 5 characters in `!`..=`u`. An all-zero full
//! group is written as a single `z`. A trailing group of `n` bytes is
//! written as `n + 1` characters. Encoded text carries no `<~ ~>`
//! delimiters; the decoder accepts and strips them if present.
//!
//! Decoding always flushes the final partial group (the "with terminator"
//! convention), so the output length is exact and never padded.

use crate::{EncodingError, Result};

const FIRST: u8 = b'!';
const LAST: u8 = b'u';
const ZERO_GROUP: u8 = b'z';

/// Upper bound on the encoded length for `len` input bytes
#[must_use]
pub fn max_encoded_len(len: usize) -> usize {
    len.div_ceil(4) * 5
}

/// Encode bytes as Ascii85 text
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(max_encoded_len(data.len()));

    for chunk in data.chunks(4) {
        if chunk == [0, 0, 0, 0] {
            out.push(char::from(ZERO_GROUP));
            continue;
        }

        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        let mut value = u32::from_be_bytes(group);

        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            // value % 85 < 85, always fits
            *digit = FIRST + (value % 85) as u8;
            value /= 85;
        }

        out.extend(digits[..=chunk.len()].iter().map(|&d| char::from(d)));
    }

    out
}

/// Decode Ascii85 text
///
/// Bytes at or below ASCII space are skipped. An optional `<~` prefix and
/// `~>` suffix are removed first.
///
/// # Errors
///
/// Returns [`EncodingError::Ascii85`] for characters outside the alphabet,
/// a `z` inside a group, a group whose value exceeds 32 bits, or a single
/// dangling character at the end.
pub fn decode(text: &[u8]) -> Result<Vec<u8>> {
    let (start, body) = strip_delimiters(text);
    let mut out = Vec::with_capacity(body.len() / 5 * 4 + 4);

    let mut value: u32 = 0;
    let mut count = 0usize;

    for (index, &byte) in body.iter().enumerate() {
        let offset = start + index;
        match byte {
            b if b <= b' ' => continue,
            ZERO_GROUP if count == 0 => out.extend_from_slice(&[0u8; 4]),
            ZERO_GROUP => {
                return Err(EncodingError::Ascii85 {
                    offset,
                    reason: "'z' inside a group",
                });
            }
            FIRST..=LAST => {
                value = push_digit(value, byte - FIRST, offset)?;
                count += 1;
                if count == 5 {
                    out.extend_from_slice(&value.to_be_bytes());
                    value = 0;
                    count = 0;
                }
            }
            _ => {
                return Err(EncodingError::Ascii85 {
                    offset,
                    reason: "character outside the alphabet",
                });
            }
        }
    }

    match count {
        0 => {}
        1 => {
            return Err(EncodingError::Ascii85 {
                offset: start + body.len(),
                reason: "dangling single character",
            });
        }
        _ => {
            let end = start + body.len();
            for _ in count..5 {
                value = push_digit(value, LAST - FIRST, end)?;
            }
            out.extend_from_slice(&value.to_be_bytes()[..count - 1]);
        }
    }

    Ok(out)
}

fn push_digit(value: u32, digit: u8, offset: usize) -> Result<u32> {
    value
        .checked_mul(85)
        .and_then(|v| v.checked_add(u32::from(digit)))
        .ok_or(EncodingError::Ascii85 {
            offset,
            reason: "group value exceeds 32 bits",
        })
}

fn strip_delimiters(text: &[u8]) -> (usize, &[u8]) {
    let mut start = 0;
    let mut body = text.trim_ascii();
    start += text.len() - text.trim_ascii_start().len();

    if let Some(rest) = body.strip_prefix(b"<~") {
        body = rest;
        start += 2;
    }
    if let Some(rest) = body.strip_suffix(b"~>") {
        body = rest;
    }
    (start, body)
}
