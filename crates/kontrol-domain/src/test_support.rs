use crate::checker::Checker;
use crate::error::NoDecision;
use crate::response::{Denied, Granted, Issuer, Response};
use crate::set::ResponseSet;

pub fn issuer() -> Issuer {
    Issuer::new("Sample")
}

pub fn granted() -> Response {
    Granted::new(issuer()).into()
}

pub fn granted_with(message: &str, code: &str) -> Response {
    Granted::new(issuer())
        .with_message(message)
        .with_code(code)
        .into()
}

pub fn denial(message: &str, code: &str) -> Denied {
    Denied::new(issuer(), message, code)
}

pub fn denied(message: &str, code: &str) -> Response {
    denial(message, code).into()
}

pub fn set(responses: Vec<Response>) -> ResponseSet {
    ResponseSet::new(responses).expect("test sets are non-empty")
}

#[derive(Clone, Debug)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

/// Sample checker: only the "granted" document is visible, and only to a known user.
pub struct DocumentChecker;

impl Checker for DocumentChecker {}

impl DocumentChecker {
    pub fn can_view(&self, doc: &Document, user: Option<&User>) -> Response {
        match (doc.title.as_str(), user) {
            ("granted", Some(_)) => self.granted(Some("ok"), None),
            ("wrong2", _) => self.denied("KO2", "ko2"),
            _ => self.denied("KO", "ko"),
        }
    }

    pub fn can_view_all(
        &self,
        docs: &[Document],
        user: Option<&User>,
    ) -> Result<ResponseSet, NoDecision> {
        self.can_all(docs, |doc| self.can_view(doc, user))
    }
}
