use serde::{Deserialize, Serialize};

/// Outcome of a loan application.
///
/// An approved decision carries an amount and a period and no error message;
/// a rejected one carries only the message. The fields are private so no other
/// combination can be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    approved_amount: Option<u32>,
    approved_period: Option<u32>,
    error_message: Option<String>,
}

impl Decision {
    pub fn approved(amount: u32, period: u32) -> Self {
        Self {
            approved_amount: Some(amount),
            approved_period: Some(period),
            error_message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            approved_amount: None,
            approved_period: None,
            error_message: Some(message.into()),
        }
    }

    pub fn approved_amount(&self) -> Option<u32> {
        self.approved_amount
    }

    /// Approved period in months.
    pub fn approved_period(&self) -> Option<u32> {
        self.approved_period
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.error_message.is_none()
    }
}

/// A single application as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoanRequest {
    pub personal_code: String,
    pub loan_amount: u32,
    /// Months.
    pub loan_period: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_decision_has_no_error() {
        let decision = Decision::approved(3600, 12);
        assert!(decision.is_approved());
        assert_eq!(decision.approved_amount(), Some(3600));
        assert_eq!(decision.approved_period(), Some(12));
        assert_eq!(decision.error_message(), None);
    }

    #[test]
    fn test_rejected_decision_has_no_amount() {
        let decision = Decision::rejected("No valid loan found!");
        assert!(!decision.is_approved());
        assert_eq!(decision.approved_amount(), None);
        assert_eq!(decision.approved_period(), None);
        assert_eq!(decision.error_message(), Some("No valid loan found!"));
    }
}
