//! Read-only business constants consulted by every decision.
//!
//! The table is built once on first access and shared by reference for the
//! rest of the process. Nothing hands out a mutable handle to it.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Country assumed for every applicant until the identity collaborator reports one.
pub const DEFAULT_COUNTRY: CountryCode = CountryCode::EE;

/// Minimum age, in months, to be offered a loan.
pub const ADULT_AGE_MONTHS: u32 = 18 * 12;

static CONSTANTS: LazyLock<DecisionConstants> = LazyLock::new(DecisionConstants::baltic);

/// Returns the process-wide constants table.
pub fn constants() -> &'static DecisionConstants {
    &CONSTANTS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    EE,
    LV,
    LT,
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CountryCode::EE => "EE",
            CountryCode::LV => "LV",
            CountryCode::LT => "LT",
        };
        f.write_str(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country code '{0}'")]
pub struct UnknownCountry(pub String);

impl FromStr for CountryCode {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EE" => Ok(CountryCode::EE),
            "LV" => Ok(CountryCode::LV),
            "LT" => Ok(CountryCode::LT),
            other => Err(UnknownCountry(other.to_string())),
        }
    }
}

/// Loan limits, segment credit modifiers and per-country expected lifetimes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionConstants {
    pub minimum_loan_amount: u32,
    pub maximum_loan_amount: u32,
    /// Months.
    pub minimum_loan_period: u32,
    /// Months.
    pub maximum_loan_period: u32,
    pub segment_1_credit_modifier: u32,
    pub segment_2_credit_modifier: u32,
    pub segment_3_credit_modifier: u32,
    /// Expected lifetime in years, kept exact until converted to months.
    expected_lifetime_years: HashMap<CountryCode, Decimal>,
}

impl DecisionConstants {
    fn baltic() -> Self {
        let expected_lifetime_years = HashMap::from([
            (CountryCode::EE, dec!(76.74)),
            (CountryCode::LV, dec!(73.28)),
            (CountryCode::LT, dec!(74.34)),
        ]);

        Self {
            minimum_loan_amount: 2000,
            maximum_loan_amount: 10000,
            minimum_loan_period: 12,
            maximum_loan_period: 60,
            segment_1_credit_modifier: 100,
            segment_2_credit_modifier: 300,
            segment_3_credit_modifier: 1000,
            expected_lifetime_years,
        }
    }

    /// Expected lifetime in whole months (truncated), or 0 for a country
    /// without an entry.
    pub fn expected_lifetime_months(&self, country: CountryCode) -> u32 {
        self.expected_lifetime_years
            .get(&country)
            .and_then(|years| (years * dec!(12)).trunc().to_u32())
            .unwrap_or(0)
    }

    pub fn is_valid_amount(&self, amount: u32) -> bool {
        (self.minimum_loan_amount..=self.maximum_loan_amount).contains(&amount)
    }

    pub fn is_valid_period(&self, period: u32) -> bool {
        (self.minimum_loan_period..=self.maximum_loan_period).contains(&period)
    }
}
