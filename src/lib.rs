#![no_std]

//! A decoder for the identification barcodes printed on Common Access Cards.
//!
//! A card carries two barcodes, each a flat string of fixed-width fields:
//!
//! - the 2D (PDF417) barcode on the front, decoded by [`pdf417`];
//! - the linear (Code 39) barcode on the back, decoded by [`code39`].
//!
//! Both decoders consume their input through the primitives in [`cursor`] and
//! resolve short codes to descriptions through the lookups in [`tables`]. If
//! the side of the card is not known in advance, [`Barcode::decode`] selects a
//! decoder from the input length.
//!
//! Input is the character string produced by a barcode scanner; optical
//! decoding is out of scope.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: implement `std` error traits in dependencies (default).

extern crate alloc;

use core::{fmt, str::FromStr};

use thiserror::Error;

pub mod code39;
pub mod cursor;
pub mod pdf417;
pub mod tables;

pub use code39::Code39Barcode;
pub use cursor::FieldError;
pub use pdf417::Pdf417Barcode;

/// Errors occurring while decoding a barcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input length does not match the format (or its version).
    #[error("Expected one of {expected:?} characters, found {found}.")]
    InvalidLength {
        found: usize,
        expected: &'static [usize],
    },
    /// The version tag is not one this decoder accepts.
    #[error("Unsupported barcode version ({0:?}).")]
    UnsupportedVersion(char),
    /// A numeric field holds a character outside the base-32 alphabet.
    #[error("Invalid base-32 digit ({0:?}).")]
    InvalidDigit(char),
    /// Too few characters remain for a field.
    #[error("Wanted {wanted} characters, {remaining} remaining.")]
    MalformedInput { wanted: usize, remaining: usize },
    /// A day count leaves the range of representable dates.
    #[error("Day count ({0}) is out of range.")]
    DateOutOfRange(u64),
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::MalformedInput { wanted, remaining } => {
                Self::MalformedInput { wanted, remaining }
            }
            FieldError::InvalidDigit(c) => Self::InvalidDigit(c),
            FieldError::DateOutOfRange(days) => Self::DateOutOfRange(days),
        }
    }
}

/// A decoded barcode of either format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Barcode {
    /// A 2D barcode from the front of a card.
    Pdf417(Pdf417Barcode),
    /// A linear barcode from the back of a card.
    Code39(Code39Barcode),
}

impl Barcode {
    /// Decode a barcode, choosing the format from the input length.
    pub fn decode(r: &str) -> Result<Self, Error> {
        match r.chars().count() {
            code39::LENGTH => Ok(Self::Code39(code39::decode(r)?)),
            pdf417::LENGTH_V1 | pdf417::LENGTH_VN => Ok(Self::Pdf417(pdf417::decode(r)?)),
            found => Err(Error::InvalidLength {
                found,
                expected: &[code39::LENGTH, pdf417::LENGTH_V1, pdf417::LENGTH_VN],
            }),
        }
    }

    /// The version tag.
    pub fn version(&self) -> char {
        match self {
            Self::Pdf417(b) => b.version(),
            Self::Code39(b) => b.version(),
        }
    }

    /// The personal designator identifier.
    pub fn pdi(&self) -> u64 {
        match self {
            Self::Pdf417(b) => b.pdi(),
            Self::Code39(b) => b.pdi(),
        }
    }

    /// The personal designator type code.
    pub fn pdt(&self) -> &str {
        match self {
            Self::Pdf417(b) => b.pdt(),
            Self::Code39(b) => b.pdt(),
        }
    }

    /// The description of the personal designator type.
    pub fn pdt_description(&self) -> &'static str {
        match self {
            Self::Pdf417(b) => b.pdt_description(),
            Self::Code39(b) => b.pdt_description(),
        }
    }

    /// The EDI person identifier.
    pub fn edipi(&self) -> u64 {
        match self {
            Self::Pdf417(b) => b.edipi(),
            Self::Code39(b) => b.edipi(),
        }
    }

    /// The personnel category code.
    pub fn pcc(&self) -> &str {
        match self {
            Self::Pdf417(b) => b.pcc(),
            Self::Code39(b) => b.pcc(),
        }
    }

    /// The description of the personnel category.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Pdf417(b) => b.category(),
            Self::Code39(b) => b.category(),
        }
    }

    /// The branch code.
    pub fn bc(&self) -> &str {
        match self {
            Self::Pdf417(b) => b.bc(),
            Self::Code39(b) => b.bc(),
        }
    }

    /// The description of the branch of service.
    pub fn branch(&self) -> &'static str {
        match self {
            Self::Pdf417(b) => b.branch(),
            Self::Code39(b) => b.branch(),
        }
    }

    /// The card instance identifier.
    pub fn instance_id(&self) -> &str {
        match self {
            Self::Pdf417(b) => b.instance_id(),
            Self::Code39(b) => b.instance_id(),
        }
    }
}

impl FromStr for Barcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf417(b) => fmt::Display::fmt(b, f),
            Self::Code39(b) => fmt::Display::fmt(b, f),
        }
    }
}
