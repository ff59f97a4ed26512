use crate::config::{ADULT_AGE_MONTHS, DEFAULT_COUNTRY, DecisionConstants, constants};
use crate::domain::decision::{Decision, LoanRequest};
use crate::domain::ports::IdentityValidator;
use crate::domain::segment::Segment;
use crate::error::{AgeIneligibility, DecisionError, Result};
use crate::infrastructure::estonian::EstonianCodeValidator;
use tracing::{debug, info};

/// Computes the largest loan amount and period the applicant qualifies for.
///
/// The engine keeps no state between calls: every figure it derives lives on
/// the stack of the call that needs it, so one engine can serve any number of
/// concurrent callers.
pub struct DecisionEngine<V: IdentityValidator = EstonianCodeValidator> {
    validator: V,
    constants: &'static DecisionConstants,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionEngine {
    /// Creates an engine backed by the Estonian validator, measuring ages against today.
    pub fn new() -> Self {
        Self::with_validator(EstonianCodeValidator::new())
    }
}

impl<V: IdentityValidator> DecisionEngine<V> {
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            constants: constants(),
        }
    }

    /// Decides on a request, reporting any failure inside the returned `Decision`.
    ///
    /// Nothing is raised from here: an invalid input, an ineligible age or a
    /// missing loan all come back as a rejected decision carrying the error's
    /// message.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        loan_amount: u32,
        loan_period: u32,
    ) -> Decision {
        let outcome = self
            .verify_inputs(personal_code, loan_amount, loan_period)
            .and_then(|()| self.verify_customer_age(personal_code))
            .and_then(|()| self.compute_loan_amount(personal_code, loan_period));

        match outcome {
            Ok(decision) => {
                info!(
                    amount = decision.approved_amount(),
                    period = decision.approved_period(),
                    "loan approved"
                );
                decision
            }
            Err(e) => {
                info!(reason = %e, "loan rejected");
                Decision::rejected(e.to_string())
            }
        }
    }

    /// Convenience wrapper over [`Self::calculate_approved_loan`].
    pub fn decide(&self, request: &LoanRequest) -> Decision {
        self.calculate_approved_loan(
            &request.personal_code,
            request.loan_amount,
            request.loan_period,
        )
    }

    /// Sizes the loan for the applicant's segment, lengthening the period when
    /// the requested one cannot reach the minimum amount.
    ///
    /// Unlike [`Self::calculate_approved_loan`] this raises its failures.
    pub fn compute_loan_amount(&self, personal_code: &str, loan_period: u32) -> Result<Decision> {
        let segment = Segment::of(personal_code)?;
        let credit_modifier = segment.credit_modifier(self.constants);
        debug!(?segment, credit_modifier, "segment resolved");

        if credit_modifier == 0 {
            return Err(DecisionError::NoValidLoan);
        }

        let required_period = self.constants.minimum_loan_amount.div_ceil(credit_modifier);
        let loan_period = loan_period.max(required_period);

        if !self.constants.is_valid_period(loan_period) {
            debug!(loan_period, "no period within limits reaches the minimum amount");
            return Err(DecisionError::NoValidLoan);
        }

        let highest_amount = credit_modifier.saturating_mul(loan_period);
        let amount = highest_amount.min(self.constants.maximum_loan_amount);
        Ok(Decision::approved(amount, loan_period))
    }

    /// Checks the request against the code validator and the amount and period limits.
    pub fn verify_inputs(
        &self,
        personal_code: &str,
        loan_amount: u32,
        loan_period: u32,
    ) -> Result<()> {
        if !self.validator.is_valid(personal_code) {
            return Err(DecisionError::InvalidPersonalCode);
        }
        if !self.constants.is_valid_amount(loan_amount) {
            return Err(DecisionError::InvalidLoanAmount);
        }
        if !self.constants.is_valid_period(loan_period) {
            return Err(DecisionError::InvalidLoanPeriod);
        }
        Ok(())
    }

    /// Rejects applicants under 18, and applicants whose expected remaining
    /// lifetime is shorter than the longest loan period on offer.
    pub fn verify_customer_age(&self, personal_code: &str) -> Result<()> {
        let age_months = self.validator.age_in_months(personal_code)?;
        if age_months < ADULT_AGE_MONTHS {
            return Err(AgeIneligibility::Underage.into());
        }

        // Country extraction is not wired into the validators yet.
        let country = self
            .validator
            .country_of(personal_code)
            .unwrap_or(DEFAULT_COUNTRY);
        let expected_lifetime = self.constants.expected_lifetime_months(country);
        debug!(age_months, %country, expected_lifetime, "age check");

        if age_months >= expected_lifetime.saturating_sub(self.constants.maximum_loan_period) {
            return Err(AgeIneligibility::TooOld.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountryCode;
    use crate::domain::ports::IdentityValidatorBox;

    /// Accepts every code and reports fixed facts about its holder.
    struct FixedIdentity {
        age_months: u32,
        country: Option<CountryCode>,
    }

    impl IdentityValidator for FixedIdentity {
        fn is_valid(&self, _personal_code: &str) -> bool {
            true
        }

        fn age_in_months(&self, _personal_code: &str) -> Result<u32> {
            Ok(self.age_months)
        }

        fn country_of(&self, _personal_code: &str) -> Option<CountryCode> {
            self.country
        }
    }

    fn engine_for(age_months: u32, country: Option<CountryCode>) -> DecisionEngine<FixedIdentity> {
        DecisionEngine::with_validator(FixedIdentity {
            age_months,
            country,
        })
    }

    #[test]
    fn test_period_is_extended_to_reach_minimum_amount() {
        let engine = engine_for(30 * 12, None);
        let decision = engine.compute_loan_amount("00000003000", 12).unwrap();
        assert_eq!(decision.approved_amount(), Some(2000));
        assert_eq!(decision.approved_period(), Some(20));
    }

    #[test]
    fn test_longer_period_than_required_is_kept() {
        let engine = engine_for(30 * 12, None);
        let decision = engine.compute_loan_amount("00000003000", 45).unwrap();
        assert_eq!(decision.approved_amount(), Some(4500));
        assert_eq!(decision.approved_period(), Some(45));
    }

    #[test]
    fn test_amount_is_capped_at_maximum() {
        let engine = engine_for(30 * 12, None);
        let decision = engine.compute_loan_amount("00000009999", 60).unwrap();
        assert_eq!(decision.approved_amount(), Some(10000));
        assert_eq!(decision.approved_period(), Some(60));
    }

    #[test]
    fn test_ineligible_segment_raises() {
        let engine = engine_for(30 * 12, None);
        assert!(matches!(
            engine.compute_loan_amount("00000002499", 60),
            Err(DecisionError::NoValidLoan)
        ));
    }

    #[test]
    fn test_period_below_minimum_is_rejected_by_core() {
        // Nothing lengthens a short request when the modifier already covers it.
        let engine = engine_for(30 * 12, None);
        assert!(matches!(
            engine.compute_loan_amount("00000009999", 6),
            Err(DecisionError::NoValidLoan)
        ));
    }

    #[test]
    fn test_lifetime_threshold_is_inclusive() {
        // EE: 920 months expected, minus the 60 month maximum period.
        let limit = 920 - 60;
        assert!(engine_for(limit - 1, None).verify_customer_age("x").is_ok());
        assert!(matches!(
            engine_for(limit, None).verify_customer_age("x"),
            Err(DecisionError::InvalidCustomerAge(AgeIneligibility::TooOld))
        ));
    }

    #[test]
    fn test_adult_threshold_is_inclusive() {
        assert!(engine_for(18 * 12, None).verify_customer_age("x").is_ok());
        assert!(matches!(
            engine_for(18 * 12 - 1, None).verify_customer_age("x"),
            Err(DecisionError::InvalidCustomerAge(AgeIneligibility::Underage))
        ));
    }

    #[test]
    fn test_reported_country_drives_lifetime() {
        // Below the EE limit of 860 months, above the LV limit of 819.
        let age = 830;
        assert!(matches!(
            engine_for(age, Some(CountryCode::LV)).verify_customer_age("x"),
            Err(DecisionError::InvalidCustomerAge(AgeIneligibility::TooOld))
        ));
        assert!(engine_for(age, Some(CountryCode::EE)).verify_customer_age("x").is_ok());
    }

    #[test]
    fn test_validation_order() {
        let engine = engine_for(30 * 12, None);
        assert!(matches!(
            engine.verify_inputs("00000009999", 1, 1),
            Err(DecisionError::InvalidLoanAmount)
        ));
        assert!(matches!(
            engine.verify_inputs("00000009999", 2000, 1),
            Err(DecisionError::InvalidLoanPeriod)
        ));
        assert!(engine.verify_inputs("00000009999", 2000, 12).is_ok());
    }

    #[test]
    fn test_no_valid_loan_is_reported_not_raised() {
        let engine = engine_for(30 * 12, None);
        let decision = engine.calculate_approved_loan("00000000001", 4000, 12);
        assert_eq!(decision, Decision::rejected("No valid loan found!"));
    }

    #[test]
    fn test_decide_forwards_request() {
        let engine = engine_for(30 * 12, None);
        let request = LoanRequest {
            personal_code: "00000005000".to_string(),
            loan_amount: 4000,
            loan_period: 12,
        };
        assert_eq!(engine.decide(&request), Decision::approved(3600, 12));
    }

    #[test]
    fn test_boxed_validator() {
        let validator: IdentityValidatorBox = Box::new(FixedIdentity {
            age_months: 17 * 12,
            country: None,
        });
        let engine = DecisionEngine::with_validator(validator);
        assert_eq!(
            engine.calculate_approved_loan("00000005000", 4000, 12),
            Decision::rejected("Person must be over 18 years of age!")
        );
    }
}
