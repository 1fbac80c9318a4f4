//! Decoder for the 2D (PDF417) barcode on the front of a card.
//!
//! The barcode holds, in order:
//!
//! | Field                        | Width | Encoding            |
//! |------------------------------|-------|---------------------|
//! | Version (`1` or `N`)         | 1     | verbatim            |
//! | PDI                          | 6     | base 32             |
//! | PDT                          | 1     | [`tables::pdt`]      |
//! | EDIPI                        | 7     | base 32             |
//! | First name                   | 20    | blank-padded        |
//! | Last name                    | 26    | blank-padded        |
//! | Date of birth                | 4     | days since epoch    |
//! | PCC                          | 1     | [`tables::category`] |
//! | BC                           | 1     | [`tables::branch`]   |
//! | PECT                         | 2     | [`tables::pect`]     |
//! | Rank                         | 6     | blank-padded        |
//! | Pay plan code                | 2     | verbatim            |
//! | Pay plan grade code          | 2     | verbatim            |
//! | Issue date                   | 4     | days since epoch    |
//! | Expiration date              | 4     | days since epoch    |
//! | Card instance identifier     | 1     | verbatim            |
//! | Middle initial (`N` only)    | 1     | verbatim            |

use alloc::{
    format,
    string::{String, ToString},
};
use core::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::{
    Error,
    cursor::{take, take_base32, take_date},
    tables,
};

/// Length of a version `1` barcode.
pub const LENGTH_V1: usize = 88;
/// Length of a version `N` barcode, which appends a middle initial.
pub const LENGTH_VN: usize = 89;

/// A decoded 2D barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdf417Barcode {
    version: char,
    pdi: u64,
    pdt: String,
    pdt_description: &'static str,
    edipi: u64,
    first_name: String,
    last_name: String,
    middle_initial: String,
    full_name: String,
    date_of_birth: NaiveDate,
    pcc: String,
    category: &'static str,
    bc: String,
    branch: &'static str,
    pect: String,
    pect_description: &'static str,
    rank: String,
    pay_plan_code: String,
    pay_plan_grade_code: String,
    issue_date: NaiveDate,
    expiration_date: NaiveDate,
    instance_id: String,
}

/// Decode a 2D barcode.
///
/// This method is also available as `Pdf417Barcode::decode`.
pub fn decode(r: &str) -> Result<Pdf417Barcode, Error> {
    let found = r.chars().count();
    if found != LENGTH_V1 && found != LENGTH_VN {
        Err(Error::InvalidLength {
            found,
            expected: &[LENGTH_V1, LENGTH_VN],
        })?;
    }

    let (version, r) = take(r, 1)?;
    let version = version.chars().next().unwrap_or_default();

    let expected: &'static [usize] = match version {
        '1' => &[LENGTH_V1],
        'N' => &[LENGTH_VN],
        _ => Err(Error::UnsupportedVersion(version))?,
    };
    if found != expected[0] {
        Err(Error::InvalidLength { found, expected })?;
    }

    let (pdi, r) = take_base32(r, 6)?;
    let (pdt, r) = take(r, 1)?;
    let (edipi, r) = take_base32(r, 7)?;
    let (first_name, r) = take(r, 20)?;
    let (last_name, r) = take(r, 26)?;
    let (date_of_birth, r) = take_date(r)?;
    let (pcc, r) = take(r, 1)?;
    let (bc, r) = take(r, 1)?;
    let (pect, r) = take(r, 2)?;
    let (rank, r) = take(r, 6)?;
    let (pay_plan_code, r) = take(r, 2)?;
    let (pay_plan_grade_code, r) = take(r, 2)?;
    let (issue_date, r) = take_date(r)?;
    let (expiration_date, r) = take_date(r)?;
    let (instance_id, r) = take(r, 1)?;

    let (middle_initial, r) = match version {
        'N' => take(r, 1)?,
        _ => ("", r),
    };

    if !r.is_empty() {
        Err(Error::InvalidLength { found, expected })?;
    }

    let first_name = first_name.trim();
    let last_name = last_name.trim();

    // A blank initial is kept verbatim but left out of the full name.
    let full_name = if middle_initial.trim().is_empty() {
        format!("{first_name} {last_name}")
    } else {
        format!("{first_name} {middle_initial} {last_name}")
    };

    Ok(Pdf417Barcode {
        version,
        pdi,
        pdt: pdt.to_string(),
        pdt_description: tables::pdt(pdt),
        edipi,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_initial: middle_initial.to_string(),
        full_name,
        date_of_birth,
        pcc: pcc.to_string(),
        category: tables::category(pcc),
        bc: bc.to_string(),
        branch: tables::branch(bc),
        pect: pect.to_string(),
        pect_description: tables::pect(pect),
        rank: rank.trim().to_string(),
        pay_plan_code: pay_plan_code.to_string(),
        pay_plan_grade_code: pay_plan_grade_code.to_string(),
        issue_date,
        expiration_date,
        instance_id: instance_id.to_string(),
    })
}

impl Pdf417Barcode {
    /// Decode a 2D barcode.
    ///
    /// This method is also available as `pdf417::decode`.
    pub fn decode(r: &str) -> Result<Self, Error> {
        decode(r)
    }

    /// The version tag, `'1'` or `'N'`.
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

    /// The first name, with padding trimmed.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The last name, with padding trimmed.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The middle initial as printed, empty for version `1` barcodes.
    pub fn middle_initial(&self) -> &str {
        &self.middle_initial
    }

    /// First name, middle initial and last name, separated by single spaces.
    ///
    /// A blank middle initial is omitted.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
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

    /// The personnel entitlement condition type code.
    pub fn pect(&self) -> &str {
        &self.pect
    }

    /// The entitlement condition description, empty for unknown codes.
    pub fn pect_description(&self) -> &'static str {
        self.pect_description
    }

    /// The rank, with padding trimmed.
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// The pay plan code.
    pub fn pay_plan_code(&self) -> &str {
        &self.pay_plan_code
    }

    /// The pay plan grade code.
    pub fn pay_plan_grade_code(&self) -> &str {
        &self.pay_plan_grade_code
    }

    /// The date the card was issued.
    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    /// The date the card expires.
    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// The card instance identifier.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
}

impl TryFrom<&str> for Pdf417Barcode {
    type Error = Error;

    fn try_from(r: &str) -> Result<Self, Self::Error> {
        decode(r)
    }
}

impl FromStr for Pdf417Barcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// A multi-line dump of every field, for inspection rather than parsing.
impl fmt::Display for Pdf417Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Barcode Version: {}", self.version)?;
        writeln!(f, "PDI: {}", self.pdi)?;
        writeln!(f, "PDT: {} : {}", self.pdt, self.pdt_description)?;
        writeln!(f, "EDIPI: {}", self.edipi)?;
        writeln!(f, "Name: {}", self.full_name)?;
        writeln!(f, "DOB: {}", self.date_of_birth)?;
        writeln!(f, "Category: {} : {}", self.pcc, self.category)?;
        writeln!(f, "Branch: {} ({})", self.branch, self.bc)?;
        writeln!(f, "PECT: {} : {}", self.pect, self.pect_description)?;
        writeln!(f, "Rank: {}", self.rank)?;
        writeln!(f, "PayPlan: {}:{}", self.pay_plan_code, self.pay_plan_grade_code)?;
        writeln!(f, "Issued: {}", self.issue_date)?;
        writeln!(f, "Exp: {}", self.expiration_date)?;
        write!(f, "InstanceID: {}", self.instance_id)
    }
}
