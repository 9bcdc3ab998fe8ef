//! Pure authorization decision composition (no IO).
//!
//! Input: application checks built on [`Checker`].
//! Output: responses, aggregated response sets, and structured denial errors.

#![forbid(unsafe_code)]

pub mod assert;
pub mod checker;
pub mod error;
pub mod policy;
pub mod report;
pub mod response;
pub mod set;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use assert::{Assert, first_decision_response};
pub use checker::Checker;
pub use engine::{evaluate, evaluate_with};
pub use error::{DeniedError, Error, NoDecision, ResponseError, Result};
pub use kontrol_types::Decision;
pub use policy::{EvaluationPolicy, Strategy};
pub use response::{Denied, Granted, Issuer, Response};
pub use set::{DeniedSet, GrantedSet, ResponseSet};
