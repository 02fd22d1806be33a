//! Byte-to-text codec transforms

use super::TransformOutput;
use crate::error::{OptionField, Result};
use crate::options::{FieldStatus, TransformOptions, ValidationReport};
use cryptform_encoding::{ascii85, hex, BaseAlphabet};

/// Ascii85 codec
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii85Codec;

impl Ascii85Codec {
    /// Display name
    pub const NAME: &'static str = "Ascii85";

    pub(crate) fn encode(self, input: &[u8]) -> TransformOutput {
        TransformOutput::Text(ascii85::encode(input))
    }

    pub(crate) fn decode(self, input: &[u8]) -> Result<TransformOutput> {
        Ok(TransformOutput::Bytes(ascii85::decode(input)?))
    }
}

/// Base32 or Base64 codec, Base32 until configured otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseCodec {
    alphabet: BaseAlphabet,
}

impl BaseCodec {
    /// Display name
    pub const NAME: &'static str = "Base(32,64)";

    /// Codec using `alphabet`
    #[must_use]
    pub fn new(alphabet: BaseAlphabet) -> Self {
        Self { alphabet }
    }

    /// Selected alphabet
    #[must_use]
    pub fn alphabet(&self) -> BaseAlphabet {
        self.alphabet
    }

    /// Select the alphabet
    pub fn set_alphabet(&mut self, alphabet: BaseAlphabet) {
        self.alphabet = alphabet;
    }

    pub(crate) fn configure(&mut self, options: &TransformOptions, report: &mut ValidationReport) {
        if let Some(alphabet) = options.base {
            self.set_alphabet(alphabet);
            report.record(OptionField::Base, FieldStatus::Accepted);
        }
    }

    pub(crate) fn encode(&self, input: &[u8]) -> TransformOutput {
        TransformOutput::Text(self.alphabet.encode(input))
    }

    pub(crate) fn decode(&self, input: &[u8]) -> Result<TransformOutput> {
        Ok(TransformOutput::Bytes(
            self.alphabet.decode(input.trim_ascii())?,
        ))
    }
}

/// Hexadecimal codec
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCodec;

impl HexCodec {
    /// Display name
    pub const NAME: &'static str = "Hex";

    pub(crate) fn encode(self, input: &[u8]) -> TransformOutput {
        TransformOutput::Text(hex::encode(input))
    }

    pub(crate) fn decode(self, input: &[u8]) -> Result<TransformOutput> {
        Ok(TransformOutput::Bytes(hex::decode(input.trim_ascii())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;

    #[test]
    fn base_codec_starts_on_base32() {
        let codec = BaseCodec::default();
        assert_eq!(codec.alphabet(), BaseAlphabet::Base32);
        assert_eq!(codec.encode(b"f"), TransformOutput::Text("MY======".into()));
    }

    #[test]
    fn decode_ignores_surrounding_whitespace() {
        assert_eq!(
            HexCodec.decode(b" 6869\n").expect("valid hex"),
            TransformOutput::Bytes(b"hi".to_vec())
        );
        assert_eq!(
            BaseCodec::new(BaseAlphabet::Base64)
                .decode(b"aGk=\n")
                .expect("valid base64"),
            TransformOutput::Bytes(b"hi".to_vec())
        );
    }

    #[test]
    fn malformed_text_is_an_encoding_error() {
        assert!(matches!(
            Ascii85Codec.decode(b"9jqo^v"),
            Err(TransformError::InvalidEncoding(_))
        ));
        assert!(matches!(
            BaseCodec::default().decode(b"MY=====1"),
            Err(TransformError::InvalidEncoding(_))
        ));
    }
}
