//! Composable authorization checks.
//!
//! Implement [`Checker`] on a type, write check methods that return a [`Response`] (or a
//! [`ResponseSet`] via [`Checker::can_all`]), and either branch on the value or call
//! [`Assert::assert`] to turn a denial into a [`DeniedError`].

#![forbid(unsafe_code)]

pub use kontrol_domain::{
    Assert, Checker, Decision, Denied, DeniedError, DeniedSet, Error, EvaluationPolicy, Granted,
    GrantedSet, Issuer, NoDecision, Response, ResponseError, ResponseSet, Result, Strategy,
    first_decision_response,
};

pub mod report {
    pub use kontrol_domain::report::{build_report, record};
    pub use kontrol_types::{DecisionCounts, DecisionReport, ResponseRecord, SCHEMA_DECISION_V1};
}

/// Everything a checker implementation usually needs.
pub mod prelude {
    pub use kontrol_domain::{
        Assert, Checker, DeniedError, NoDecision, Response, ResponseSet,
    };
}
