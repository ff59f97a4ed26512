//! Application layer containing the loan decision procedure.
//!
//! `DecisionEngine` validates a request, checks the applicant's age against the
//! actuarial horizon and then sizes the largest affordable loan for the
//! applicant's segment.

pub mod engine;
