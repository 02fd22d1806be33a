//! Static catalog of transforms, grouped by category

use crate::error::{Result, TransformError};
use crate::transform::{
    AesCipher, Ascii85Codec, BaseCodec, ChaCha20Cipher, HexCodec, Md5Hash, MlKemTransform,
    ShaHash, Transform,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Ciphers and key encapsulation
    Crypto,
    /// Reversible text encodings
    Encode,
    /// One-way digests
    Hash,
}

impl Category {
    /// Menu name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Crypto => "crypto",
            Self::Encode => "encode",
            Self::Hash => "hash",
        }
    }

    /// All categories in menu order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Crypto, Self::Encode, Self::Hash]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TransformError::NotFound {
                category: s.to_string(),
                name: String::new(),
            })
    }
}

/// Catalog entry; instantiates a fresh transform on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// AES cipher
    Aes,
    /// ChaCha20 cipher
    ChaCha20,
    /// ML-KEM encapsulation
    MlKem,
    /// Ascii85 codec
    Ascii85,
    /// Base32/Base64 codec
    Base,
    /// Hex codec
    Hex,
    /// MD5 digest
    Md5,
    /// SHA-family digest
    Sha,
}

impl TransformKind {
    /// Menu name used by [`resolve`]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes => "aes",
            Self::ChaCha20 => "chacha20",
            Self::MlKem => "ml-kem",
            Self::Ascii85 => "ascii85",
            Self::Base => "base",
            Self::Hex => "hex",
            Self::Md5 => "md5",
            Self::Sha => "sha",
        }
    }

    /// Category the entry is listed under
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Aes | Self::ChaCha20 | Self::MlKem => Category::Crypto,
            Self::Ascii85 | Self::Base | Self::Hex => Category::Encode,
            Self::Md5 | Self::Sha => Category::Hash,
        }
    }

    /// Fresh transform in its default configuration
    #[must_use]
    pub fn instantiate(self) -> Transform {
        match self {
            Self::Aes => Transform::Aes(AesCipher::default()),
            Self::ChaCha20 => Transform::ChaCha20(ChaCha20Cipher::default()),
            Self::MlKem => Transform::MlKem(MlKemTransform::default()),
            Self::Ascii85 => Transform::Ascii85(Ascii85Codec),
            Self::Base => Transform::Base(BaseCodec::default()),
            Self::Hex => Transform::Hex(HexCodec),
            Self::Md5 => Transform::Md5(Md5Hash),
            Self::Sha => Transform::Sha(ShaHash::default()),
        }
    }
}

/// One category and its entries, in menu order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    /// Category
    pub category: Category,
    /// Entries listed under it
    pub transforms: Vec<TransformKind>,
}

impl CategoryListing {
    /// Menu names of the entries
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|kind| kind.name()).collect()
    }
}

const ENTRIES: [TransformKind; 8] = [
    TransformKind::Aes,
    TransformKind::ChaCha20,
    TransformKind::MlKem,
    TransformKind::Ascii85,
    TransformKind::Base,
    TransformKind::Hex,
    TransformKind::Md5,
    TransformKind::Sha,
];

static CATALOG: Lazy<Vec<CategoryListing>> = Lazy::new(|| {
    Category::all()
        .iter()
        .map(|&category| CategoryListing {
            category,
            transforms: ENTRIES
                .iter()
                .copied()
                .filter(|kind| kind.category() == category)
                .collect(),
        })
        .collect()
});

/// Categories with their entries, in menu order
#[must_use]
pub fn list_categories() -> &'static [CategoryListing] {
    &CATALOG
}

/// Look up `name` under `category` (both case-insensitive)
///
/// # Errors
///
/// [`TransformError::NotFound`] if either the category or the name is unknown.
pub fn lookup(category: &str, name: &str) -> Result<TransformKind> {
    let not_found = || TransformError::NotFound {
        category: category.to_string(),
        name: name.to_string(),
    };
    let category = category.parse::<Category>().map_err(|_| not_found())?;
    CATALOG
        .iter()
        .find(|listing| listing.category == category)
        .and_then(|listing| {
            listing
                .transforms
                .iter()
                .copied()
                .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
        })
        .ok_or_else(not_found)
}

/// Fresh, independently owned transform for `name` under `category`
///
/// # Errors
///
/// [`TransformError::NotFound`] on a lookup miss.
pub fn resolve(category: &str, name: &str) -> Result<Transform> {
    let kind = lookup(category, name)?;
    log::debug!("resolved {}/{}", kind.category(), kind.name());
    Ok(kind.instantiate())
}

/// The transform selected before the caller chooses one: AES
#[must_use]
pub fn default_transform() -> Transform {
    TransformKind::Aes.instantiate()
}
