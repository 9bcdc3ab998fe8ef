use crate::assert::Assert;
use crate::engine;
use crate::error::{DeniedError, NoDecision};
use crate::policy::EvaluationPolicy;
use crate::response::{Denied, Granted, Issuer, Response};
use crate::set::ResponseSet;

/// Base for application-defined authorization checks.
///
/// Implementors write plain methods returning [`Response`] or [`ResponseSet`] and build
/// them with the helpers below:
///
/// ```
/// use kontrol_domain::{Checker, Response, ResponseSet, NoDecision};
///
/// struct Articles;
///
/// impl Checker for Articles {}
///
/// impl Articles {
///     fn can_edit(&self, author: &str, user: &str) -> Response {
///         if author == user {
///             self.granted(None, None)
///         } else {
///             self.denied("only the author can edit", "not_author")
///         }
///     }
///
///     fn can_edit_all(&self, authors: &[&str], user: &str) -> Result<ResponseSet, NoDecision> {
///         self.can_all(authors, |author| self.can_edit(author, user))
///     }
/// }
///
/// let set = Articles.can_edit_all(&["ann", "bob"], "ann").unwrap();
/// assert!(!set.to_bool());
/// ```
pub trait Checker {
    /// Identity stamped on every response this checker builds.
    fn issuer(&self) -> Issuer {
        Issuer::of::<Self>()
    }

    fn granted(&self, message: Option<&str>, code: Option<&str>) -> Response {
        let mut granted = Granted::new(self.issuer());
        if let Some(message) = message {
            granted = granted.with_message(message);
        }
        if let Some(code) = code {
            granted = granted.with_code(code);
        }
        Response::Granted(granted)
    }

    /// # Panics
    ///
    /// Panics if `message` or `code` is empty.
    fn denied(&self, message: &str, code: &str) -> Response {
        Response::Denied(Denied::new(self.issuer(), message, code))
    }

    /// Check every item and combine the results into one set.
    ///
    /// Empty input yields [`NoDecision`]: there is no meaningful answer to "do all of zero
    /// things pass?".
    fn can_all<T, I, F>(&self, items: I, check: F) -> Result<ResponseSet, NoDecision>
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Response,
    {
        engine::evaluate(items, check)
    }

    /// [`Checker::can_all`] with the walk strategy taken from `policy`.
    fn can_all_with<T, F>(
        &self,
        policy: &EvaluationPolicy,
        items: Vec<T>,
        check: F,
    ) -> Result<ResponseSet, NoDecision>
    where
        Self: Sized,
        T: Send,
        F: Fn(T) -> Response + Sync + Send,
    {
        engine::evaluate_with(policy, items, check)
    }

    /// Run `check` against this checker and assert its result.
    fn assert<R, F>(&self, check: F) -> Result<(), DeniedError>
    where
        Self: Sized,
        R: Assert,
        F: FnOnce(&Self) -> R,
    {
        check(self).assert()
    }
}
