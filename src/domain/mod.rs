//! Domain types: the decision value object, applicant segments and the
//! identity collaborator port.

pub mod decision;
pub mod ports;
pub mod segment;
