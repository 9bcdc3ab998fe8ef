use crate::response::Denied;
use crate::set::DeniedSet;
use kontrol_types::DecisionReport;
use thiserror::Error;

/// Malformed response or response set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("a response set cannot be empty")]
    Empty,
    #[error("a denied response set must contain at least one denied response")]
    NoDenial,
    #[error("a granted response set cannot contain a denied response")]
    UnexpectedDenial,
    #[error("denied response requires a non-empty message")]
    EmptyMessage,
    #[error("denied response requires a non-empty code")]
    EmptyCode,
}

/// Returned when an aggregate is asked to decide over zero checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("no decision has been taken")]
pub struct NoDecision;

/// A denial converted into an error by `assert`.
///
/// Wraps the whole denied set so no denial detail is lost. Every query reads the denied
/// responses only, in evaluation order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", .responses.headline().message())]
pub struct DeniedError {
    responses: DeniedSet,
}

impl DeniedError {
    pub fn new(responses: DeniedSet) -> Self {
        Self { responses }
    }

    /// First denial in evaluation order.
    pub fn first(&self) -> &Denied {
        self.responses.headline()
    }

    pub fn denied(&self) -> impl Iterator<Item = &Denied> {
        self.responses.denied()
    }

    pub fn has_error_code(&self, code: &str) -> bool {
        self.denied().any(|d| d.code() == code)
    }

    /// First denial carrying `code`, if any.
    pub fn error_code(&self, code: &str) -> Option<&Denied> {
        self.denied().find(|d| d.code() == code)
    }

    /// Every denial message in evaluation order. Duplicates are kept.
    pub fn messages(&self) -> Vec<&str> {
        self.denied().map(Denied::message).collect()
    }

    pub fn first_message(&self) -> &str {
        self.first().message()
    }

    pub fn responses(&self) -> &DeniedSet {
        &self.responses
    }

    pub fn into_responses(self) -> DeniedSet {
        self.responses
    }

    pub fn report(&self) -> DecisionReport {
        crate::report::build_report(self.responses.responses())
    }
}

impl From<Denied> for DeniedError {
    fn from(value: Denied) -> Self {
        Self::new(DeniedSet::from(value))
    }
}

impl From<DeniedSet> for DeniedError {
    fn from(value: DeniedSet) -> Self {
        Self::new(value)
    }
}

/// Umbrella error for callers that aggregate and assert in one function.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Denied(#[from] DeniedError),
    #[error(transparent)]
    NoDecision(#[from] NoDecision),
    #[error(transparent)]
    Response(#[from] ResponseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{denied, granted, set};

    fn scenario_error() -> DeniedError {
        let responses = set(vec![
            denied("KO", "ko"),
            granted(),
            denied("KO2", "ko2"),
            denied("KO", "ko"),
        ]);
        let crate::set::ResponseSet::Denied(denied_set) = responses else {
            panic!("expected a denied set");
        };
        DeniedError::new(denied_set)
    }

    #[test]
    fn queries_read_denials_in_order() {
        let err = scenario_error();
        assert_eq!(err.first().code(), "ko");
        assert_eq!(err.messages(), vec!["KO", "KO2", "KO"]);
        assert_eq!(err.first_message(), "KO");
        assert_eq!(err.to_string(), "KO");
    }

    #[test]
    fn error_code_lookup() {
        let err = scenario_error();
        assert!(err.has_error_code("ko"));
        assert!(err.has_error_code("ko2"));
        assert!(!err.has_error_code("missing"));
        assert_eq!(err.error_code("ko2").map(Denied::message), Some("KO2"));
        assert!(err.error_code("missing").is_none());
    }

    #[test]
    fn granted_codes_are_never_matched() {
        let responses = vec![
            crate::test_support::granted_with("fine", "shared"),
            denied("KO", "ko"),
        ];
        let denied_set = DeniedSet::new(responses).expect("has a denial");
        let err = DeniedError::from(denied_set);
        assert!(!err.has_error_code("shared"));
        assert_eq!(err.messages(), vec!["KO"]);
    }

    #[test]
    fn single_denial_is_promoted_to_a_set() {
        let d = crate::test_support::denial("fail", "F1");
        let err = DeniedError::from(d);
        assert_eq!(err.responses().len(), 1);
        assert_eq!(err.first().code(), "F1");
    }

    #[test]
    fn umbrella_error_wraps_sources() {
        let err: Error = NoDecision.into();
        assert_eq!(err.to_string(), "no decision has been taken");
        let err: Error = ResponseError::Empty.into();
        assert!(matches!(err, Error::Response(ResponseError::Empty)));
    }
}
