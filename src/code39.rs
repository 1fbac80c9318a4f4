//! Decoder for the linear (Code 39) barcode on the back of a card.
//!
//! The barcode is 18 characters: version (`1`), PDI (6, base 32), PDT (1),
//! EDIPI (7, base 32), PCC (1), BC (1) and the card instance identifier (1).

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use crate::{
    Error,
    cursor::{take, take_base32},
    tables,
};

/// Length of a linear barcode.
pub const LENGTH: usize = 18;

/// A decoded linear barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code39Barcode {
    version: char,
    pdi: u64,
    pdt: String,
    pdt_description: &'static str,
    edipi: u64,
    pcc: String,
    category: &'static str,
    bc: String,
    branch: &'static str,
    instance_id: String,
}

/// Decode a linear barcode.
///
/// This method is also available as `Code39Barcode::decode`.
pub fn decode(r: &str) -> Result<Code39Barcode, Error> {
    let found = r.chars().count();
    if found != LENGTH {
        Err(Error::InvalidLength {
            found,
            expected: &[LENGTH],
        })?;
    }

    let (version, r) = take(r, 1)?;
    let version = version.chars().next().unwrap_or_default();
    if version != '1' {
        Err(Error::UnsupportedVersion(version))?;
    }

    let (pdi, r) = take_base32(r, 6)?;
    let (pdt, r) = take(r, 1)?;
    let (edipi, r) = take_base32(r, 7)?;
    let (pcc, r) = take(r, 1)?;
    let (bc, r) = take(r, 1)?;
    let (instance_id, _) = take(r, 1)?;

    Ok(Code39Barcode {
        version,
        pdi,
        pdt: pdt.to_string(),
        pdt_description: tables::pdt(pdt),
        edipi,
        pcc: pcc.to_string(),
        category: tables::category(pcc),
        bc: bc.to_string(),
        branch: tables::branch(bc),
        instance_id: instance_id.to_string(),
    })
}

impl Code39Barcode {
    /// Decode a linear barcode.
    ///
    /// This method is also available as `code39::decode`.
    pub fn decode(r: &str) -> Result<Self, Error> {
        decode(r)
    }

    /// The version tag, always `'1'`.
    pub fn version(&self) -> char {
        self.version
    }

    /// The personal designator identifier.
    pub fn pdi(&self) -> u64 {
        self.pdi
    }

    /// The personal designator type code.
    pub fn pdt(&self) -> &str {
        &self.pdt
    }

    /// The description of the personal designator type.
    pub fn pdt_description(&self) -> &'static str {
        self.pdt_description
    }

    /// The EDI person identifier.
    pub fn edipi(&self) -> u64 {
        self.edipi
    }

    /// The personnel category code.
    pub fn pcc(&self) -> &str {
        &self.pcc
    }

    /// The description of the personnel category.
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// The branch code.
    pub fn bc(&self) -> &str {
        &self.bc
    }

    /// The description of the branch of service.
    pub fn branch(&self) -> &'static str {
        self.branch
    }

    /// The card instance identifier.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
}

impl TryFrom<&str> for Code39Barcode {
    type Error = Error;

    fn try_from(r: &str) -> Result<Self, Self::Error> {
        decode(r)
    }
}

impl FromStr for Code39Barcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// A multi-line dump of every field, for inspection rather than parsing.
impl fmt::Display for Code39Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Barcode Version: {}", self.version)?;
        writeln!(f, "PDI: {}", self.pdi)?;
        writeln!(f, "PDT: {} : {}", self.pdt, self.pdt_description)?;
        writeln!(f, "EDIPI: {}", self.edipi)?;
        writeln!(f, "Category: {} : {}", self.pcc, self.category)?;
        writeln!(f, "Branch: {} ({})", self.branch, self.bc)?;
        write!(f, "InstanceID: {}", self.instance_id)
    }
}
