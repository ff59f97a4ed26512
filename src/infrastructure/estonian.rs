use crate::domain::ports::IdentityValidator;
use crate::error::{DecisionError, Result};
use chrono::{Datelike, Local, NaiveDate};

const CODE_LENGTH: usize = 11;
const FIRST_PASS_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Validates Estonian personal codes (`GYYMMDDSSSC`) and derives the holder's age.
///
/// `G` encodes sex and century, `YYMMDD` the birth date, `SSS` a sequence
/// number and `C` a mod-11 checksum. Ages are measured against a reference
/// date, which defaults to today.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianCodeValidator {
    reference_date: Option<NaiveDate>,
}

impl EstonianCodeValidator {
    /// Creates a validator that measures ages against the current local date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator pinned to a fixed reference date.
    pub fn as_of(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: Some(reference_date),
        }
    }

    fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parses the birth date out of a structurally valid code.
    pub fn birth_date(&self, personal_code: &str) -> Result<NaiveDate> {
        let digits = digits_of(personal_code)?;

        let expected = checksum(&digits[..CODE_LENGTH - 1]);
        if digits[CODE_LENGTH - 1] != expected {
            return Err(malformed(personal_code, "checksum mismatch"));
        }

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            _ => return Err(malformed(personal_code, "unknown century marker")),
        };
        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];

        let birth = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| malformed(personal_code, "no such birth date"))?;
        if birth > self.reference_date() {
            return Err(malformed(personal_code, "birth date is in the future"));
        }
        Ok(birth)
    }
}

impl IdentityValidator for EstonianCodeValidator {
    fn is_valid(&self, personal_code: &str) -> bool {
        self.birth_date(personal_code).is_ok()
    }

    fn age_in_months(&self, personal_code: &str) -> Result<u32> {
        let birth = self.birth_date(personal_code)?;
        let months = whole_months_between(birth, self.reference_date());
        u32::try_from(months).map_err(|_| malformed(personal_code, "negative age"))
    }
}

fn digits_of(personal_code: &str) -> Result<Vec<u32>> {
    if personal_code.len() != CODE_LENGTH {
        return Err(malformed(personal_code, "expected 11 digits"));
    }
    personal_code
        .chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| malformed(personal_code, "expected 11 digits"))
        })
        .collect()
}

fn checksum(digits: &[u32]) -> u32 {
    let weighted = |weights: &[u32; 10]| -> u32 {
        digits.iter().zip(weights).map(|(d, w)| d * w).sum::<u32>() % 11
    };

    match weighted(&FIRST_PASS_WEIGHTS) {
        10 => match weighted(&SECOND_PASS_WEIGHTS) {
            10 => 0,
            rest => rest,
        },
        rest => rest,
    }
}

/// Completed months from `from` to `to`; a month only counts once its day is reached.
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

fn malformed(personal_code: &str, reason: &str) -> DecisionError {
    DecisionError::MalformedPersonalCode(format!("{personal_code}: {reason}"))
}
