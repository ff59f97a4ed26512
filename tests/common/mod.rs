#![allow(dead_code)]

use chrono::NaiveDate;
use loan_decision::application::engine::DecisionEngine;
use loan_decision::infrastructure::estonian::EstonianCodeValidator;

pub const DEBTOR: &str = "37605030299";
pub const SEGMENT_1: &str = "50307172740";
pub const SEGMENT_2: &str = "38411266610";
pub const SEGMENT_3: &str = "35006069515";
pub const UNDERAGE: &str = "50612017067";
/// Born 1950-06-06, past the Estonian lifetime limit on the reference date.
pub const TOO_OLD: &str = "35006069515";

pub const REFERENCE_DATE: &str = "2024-03-01";

pub fn reference_date() -> NaiveDate {
    REFERENCE_DATE.parse().unwrap()
}

pub fn engine() -> DecisionEngine {
    DecisionEngine::with_validator(EstonianCodeValidator::as_of(reference_date()))
}
