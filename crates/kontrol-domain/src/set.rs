//! Aggregates of responses produced by fanning one check out over several items.
//!
//! A set is never empty. Its flavor is decided once, at construction, from its content:
//! any denial makes it a [`DeniedSet`], otherwise it is a [`GrantedSet`].

use crate::error::ResponseError;
use crate::response::{Denied, Granted, Issuer, Response};
use kontrol_types::Decision;

/// Non-empty run of responses that are all granted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrantedSet {
    responses: Vec<Response>,
}

impl GrantedSet {
    pub fn new(responses: Vec<Response>) -> Result<Self, ResponseError> {
        if responses.is_empty() {
            return Err(ResponseError::Empty);
        }
        if responses.iter().any(Response::is_denied) {
            return Err(ResponseError::UnexpectedDenial);
        }
        Ok(Self { responses })
    }

    /// First response of the set.
    pub fn headline(&self) -> &Response {
        &self.responses[0]
    }

    pub fn granted(&self) -> impl Iterator<Item = &Granted> {
        self.responses.iter().filter_map(Response::as_granted)
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn into_responses(self) -> Vec<Response> {
        self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Non-empty run of responses containing at least one denial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeniedSet {
    responses: Vec<Response>,
    first_denied: usize,
}

impl DeniedSet {
    pub fn new(responses: Vec<Response>) -> Result<Self, ResponseError> {
        if responses.is_empty() {
            return Err(ResponseError::Empty);
        }
        let first_denied = responses
            .iter()
            .position(Response::is_denied)
            .ok_or(ResponseError::NoDenial)?;
        Ok(Self {
            responses,
            first_denied,
        })
    }

    /// First denial in evaluation order.
    pub fn headline(&self) -> &Denied {
        match &self.responses[self.first_denied] {
            Response::Denied(d) => d,
            Response::Granted(_) => unreachable!("first_denied always indexes a denial"),
        }
    }

    pub fn denied(&self) -> impl Iterator<Item = &Denied> {
        self.responses.iter().filter_map(Response::as_denied)
    }

    pub fn granted(&self) -> impl Iterator<Item = &Granted> {
        self.responses.iter().filter_map(Response::as_granted)
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn into_responses(self) -> Vec<Response> {
        self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl From<Denied> for DeniedSet {
    fn from(value: Denied) -> Self {
        Self {
            responses: vec![Response::Denied(value)],
            first_denied: 0,
        }
    }
}

/// Combined decision over several responses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseSet {
    Granted(GrantedSet),
    Denied(DeniedSet),
}

impl ResponseSet {
    /// Classify `responses`: a single denial makes the whole set denied.
    pub fn new(responses: Vec<Response>) -> Result<Self, ResponseError> {
        Self::from_vec(responses).ok_or(ResponseError::Empty)
    }

    /// `None` only for an empty input.
    pub(crate) fn from_vec(responses: Vec<Response>) -> Option<Self> {
        if responses.is_empty() {
            return None;
        }
        let set = match responses.iter().position(Response::is_denied) {
            Some(first_denied) => ResponseSet::Denied(DeniedSet {
                responses,
                first_denied,
            }),
            None => ResponseSet::Granted(GrantedSet { responses }),
        };
        Some(set)
    }

    pub fn decision(&self) -> Decision {
        match self {
            ResponseSet::Granted(_) => Decision::Granted,
            ResponseSet::Denied(_) => Decision::Denied,
        }
    }

    /// True iff no response in the set is denied.
    pub fn to_bool(&self) -> bool {
        self.decision().to_bool()
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, ResponseSet::Granted(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, ResponseSet::Denied(_))
    }

    /// The response that carries the set's decision: the first denial, else the first
    /// response.
    pub fn decisive(&self) -> &Response {
        match self {
            ResponseSet::Granted(set) => set.headline(),
            ResponseSet::Denied(set) => &set.responses[set.first_denied],
        }
    }

    pub fn issuer(&self) -> &Issuer {
        self.decisive().issuer()
    }

    pub fn message(&self) -> Option<&str> {
        self.decisive().message()
    }

    pub fn code(&self) -> Option<&str> {
        self.decisive().code()
    }

    pub fn granted_subset(&self) -> impl Iterator<Item = &Granted> {
        self.responses().iter().filter_map(Response::as_granted)
    }

    pub fn denied_subset(&self) -> impl Iterator<Item = &Denied> {
        self.responses().iter().filter_map(Response::as_denied)
    }

    pub fn responses(&self) -> &[Response] {
        match self {
            ResponseSet::Granted(set) => set.responses(),
            ResponseSet::Denied(set) => set.responses(),
        }
    }

    pub fn into_responses(self) -> Vec<Response> {
        match self {
            ResponseSet::Granted(set) => set.into_responses(),
            ResponseSet::Denied(set) => set.into_responses(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Response> {
        self.responses().iter()
    }

    pub fn len(&self) -> usize {
        self.responses().len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.responses().is_empty()
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ResponseSet {
    type Item = Response;
    type IntoIter = std::vec::IntoIter<Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_responses().into_iter()
    }
}

impl From<GrantedSet> for ResponseSet {
    fn from(value: GrantedSet) -> Self {
        ResponseSet::Granted(value)
    }
}

impl From<DeniedSet> for ResponseSet {
    fn from(value: DeniedSet) -> Self {
        ResponseSet::Denied(value)
    }
}
