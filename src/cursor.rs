//! Primitives consuming fixed-width fields from the head of a barcode.
//!
//! Each function takes the remaining input and returns the decoded field
//! along with whatever input follows it. Widths count characters, not bytes,
//! so names holding non-ASCII letters are sliced the same way a scanner
//! reports them.

use core::iter;

use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Day zero of every date field.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1000, 1, 1) {
    Some(date) => date,
    None => panic!(),
};

/// Width of a date field.
pub const DATE_WIDTH: usize = 4;

const RADIX: u32 = 32;

/// Errors occurring while consuming a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Fewer characters remain than the field occupies.
    #[error("Wanted {wanted} characters, {remaining} remaining.")]
    MalformedInput { wanted: usize, remaining: usize },
    /// Found a character outside `0-9` and `A-V`.
    #[error("Invalid base-32 digit ({0:?}).")]
    InvalidDigit(char),
    /// A day count leaves the range of representable dates.
    #[error("Day count ({0}) is out of range.")]
    DateOutOfRange(u64),
}

/// Take exactly `n` characters from the head of `r`.
///
/// Returns the taken characters and the remainder.
pub fn take(r: &str, n: usize) -> Result<(&str, &str), FieldError> {
    // Byte offsets of every character boundary, including the end.
    let mut boundaries = r.char_indices().map(|(i, _)| i).chain(iter::once(r.len()));

    let end = boundaries.nth(n).ok_or_else(|| FieldError::MalformedInput {
        wanted: n,
        remaining: r.chars().count(),
    })?;

    Ok(r.split_at(end))
}

/// Take `n` characters from the head of `r` and read them as a base-32
/// integer, most significant digit first.
///
/// Lowercase digits are accepted alongside uppercase ones.
pub fn take_base32(r: &str, n: usize) -> Result<(u64, &str), FieldError> {
    let (field, rest) = take(r, n)?;

    let value = field.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(RADIX).ok_or(FieldError::InvalidDigit(c))?;
        acc.checked_mul(RADIX as u64)
            .and_then(|acc| acc.checked_add(digit as u64))
            .ok_or(FieldError::InvalidDigit(c))
    })?;

    Ok((value, rest))
}

/// Take a date field from the head of `r`.
///
/// The field is a base-32 count of days since [`EPOCH`], counted in the
/// proleptic Gregorian calendar.
pub fn take_date(r: &str) -> Result<(NaiveDate, &str), FieldError> {
    let (days, rest) = take_base32(r, DATE_WIDTH)?;

    let date = EPOCH
        .checked_add_days(Days::new(days))
        .ok_or(FieldError::DateOutOfRange(days))?;

    Ok((date, rest))
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn take_splits_head() {
        assert_eq!(take("1ABC", 1), Ok(("1", "ABC")));
        assert_eq!(take("ABC", 3), Ok(("ABC", "")));
        assert_eq!(take("ABC", 0), Ok(("", "ABC")));
    }

    #[test]
    fn take_counts_characters() {
        assert_eq!(take("ÉLODIE X", 6), Ok(("ÉLODIE", " X")));
    }

    #[test]
    fn take_rejects_short_input() {
        assert_eq!(
            take("AB", 3),
            Err(FieldError::MalformedInput {
                wanted: 3,
                remaining: 2
            })
        );
    }

    #[test]
    fn base32_digits() {
        assert_eq!(take_base32("000001", 6), Ok((1, "")));
        assert_eq!(take_base32("00000V", 6), Ok((31, "")));
        assert_eq!(take_base32("000010", 6), Ok((32, "")));
        assert_eq!(take_base32("3LNJ8LS", 6), Ok((123_456_789, "S")));
        assert_eq!(take_base32("14pc0mi", 7), Ok((1_234_567_890, "")));
    }

    #[test]
    fn base32_rejects_outside_alphabet() {
        assert_eq!(take_base32("00000Z", 6), Err(FieldError::InvalidDigit('Z')));
        assert_eq!(take_base32("+00001", 6), Err(FieldError::InvalidDigit('+')));
        assert_eq!(take_base32(" 00001", 6), Err(FieldError::InvalidDigit(' ')));
    }

    #[test]
    fn date_at_epoch() {
        let (date, rest) = take_date("0000X").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1000, 1, 1).unwrap());
        assert_eq!(rest, "X");
    }

    #[test]
    fn date_after_365000_days() {
        // 365000 = 11 * 32^3 + 4 * 32^2 + 14 * 32 + 8
        let (date, _) = take_date("B4E8").unwrap();

        let expected = NaiveDate::from_num_days_from_ce_opt(EPOCH.num_days_from_ce() + 365_000);
        assert_eq!(Some(date), expected);
        assert_eq!(date, NaiveDate::from_ymd_opt(1999, 5, 4).unwrap());
    }

    #[test]
    fn date_at_largest_day_count() {
        let (date, _) = take_date("VVVV").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(3870, 11, 26).unwrap());
    }

    #[test]
    fn date_rejects_short_input() {
        assert_eq!(
            take_date("001"),
            Err(FieldError::MalformedInput {
                wanted: 4,
                remaining: 3
            })
        );
    }
}
