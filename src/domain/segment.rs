use crate::config::DecisionConstants;
use crate::error::{DecisionError, Result};

/// Applicant bucket derived from the last four digits of the personal code.
///
/// | tail        | segment    |
/// |-------------|------------|
/// | 0000..=2499 | Ineligible |
/// | 2500..=4999 | Segment1   |
/// | 5000..=7499 | Segment2   |
/// | 7500..=9999 | Segment3   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Ineligible,
    Segment1,
    Segment2,
    Segment3,
}

impl Segment {
    pub fn of(personal_code: &str) -> Result<Self> {
        let tail = personal_code
            .len()
            .checked_sub(4)
            .and_then(|start| personal_code.get(start..))
            .ok_or(DecisionError::InvalidPersonalCode)?;

        // Leading zeros are plain decimal digits here.
        if !tail.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecisionError::InvalidPersonalCode);
        }
        let tail: u16 = tail
            .parse()
            .map_err(|_| DecisionError::InvalidPersonalCode)?;

        Ok(match tail {
            0..2500 => Segment::Ineligible,
            2500..5000 => Segment::Segment1,
            5000..7500 => Segment::Segment2,
            _ => Segment::Segment3,
        })
    }

    /// Multiplier applied to the loan period to get the highest affordable amount.
    pub fn credit_modifier(self, constants: &DecisionConstants) -> u32 {
        match self {
            Segment::Ineligible => 0,
            Segment::Segment1 => constants.segment_1_credit_modifier,
            Segment::Segment2 => constants.segment_2_credit_modifier,
            Segment::Segment3 => constants.segment_3_credit_modifier,
        }
    }
}
