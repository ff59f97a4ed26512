use thiserror::Error;

/// Why an applicant's age rules them out.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeIneligibility {
    #[error("Person must be over 18 years of age!")]
    Underage,
    #[error("Person is too old to qualify for a loan!")]
    TooOld,
}

#[derive(Error, Debug)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidPersonalCode,
    #[error("Invalid loan amount!")]
    InvalidLoanAmount,
    #[error("Invalid loan period!")]
    InvalidLoanPeriod,
    #[error(transparent)]
    InvalidCustomerAge(#[from] AgeIneligibility),
    #[error("No valid loan found!")]
    NoValidLoan,
    #[error("Malformed personal code: {0}")]
    MalformedPersonalCode(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecisionError>;
