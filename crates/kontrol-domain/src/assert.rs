//! Turning a denial into an error at the call site.

use crate::error::{DeniedError, NoDecision};
use crate::response::{Denied, Granted, Response};
use crate::set::{DeniedSet, GrantedSet, ResponseSet};
use tracing::debug;

/// Anything that carries a decision and can be asserted.
///
/// Check methods return data; callers that prefer control flow call `assert` and use `?`.
pub trait Assert: Sized {
    fn to_bool(&self) -> bool;

    /// `Ok(())` when granted, `Err` wrapping the full denial detail otherwise.
    fn assert(self) -> Result<(), DeniedError>;
}

impl Assert for Granted {
    fn to_bool(&self) -> bool {
        true
    }

    fn assert(self) -> Result<(), DeniedError> {
        Ok(())
    }
}

impl Assert for Denied {
    fn to_bool(&self) -> bool {
        false
    }

    fn assert(self) -> Result<(), DeniedError> {
        debug!(issuer = %self.issuer(), code = self.code(), "access denied");
        Err(DeniedError::from(self))
    }
}

impl Assert for Response {
    fn to_bool(&self) -> bool {
        Response::to_bool(self)
    }

    fn assert(self) -> Result<(), DeniedError> {
        match self {
            Response::Granted(g) => g.assert(),
            Response::Denied(d) => d.assert(),
        }
    }
}

impl Assert for GrantedSet {
    fn to_bool(&self) -> bool {
        true
    }

    fn assert(self) -> Result<(), DeniedError> {
        Ok(())
    }
}

impl Assert for DeniedSet {
    fn to_bool(&self) -> bool {
        false
    }

    fn assert(self) -> Result<(), DeniedError> {
        let first = self.headline();
        debug!(
            issuer = %first.issuer(),
            code = first.code(),
            denied = self.denied().count(),
            total = self.len(),
            "access denied"
        );
        Err(DeniedError::new(self))
    }
}

impl Assert for ResponseSet {
    fn to_bool(&self) -> bool {
        ResponseSet::to_bool(self)
    }

    fn assert(self) -> Result<(), DeniedError> {
        match self {
            ResponseSet::Granted(set) => set.assert(),
            ResponseSet::Denied(set) => set.assert(),
        }
    }
}

/// The response that decides a plain list: the first denial, else the first response.
pub fn first_decision_response(responses: &[Response]) -> Result<&Response, NoDecision> {
    responses
        .iter()
        .find(|r| r.is_denied())
        .or_else(|| responses.first())
        .ok_or(NoDecision)
}
