use crate::error::ResponseError;
use kontrol_types::Decision;
use std::borrow::Cow;
use std::fmt;

/// Name of the checker that produced a response.
///
/// Diagnostic only: it tells a log reader which check spoke, it is never compared when
/// classifying decisions and never keeps the checker alive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Issuer(Cow<'static, str>);

impl Issuer {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Issuer named after a Rust type, with the module path stripped.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        Self(Cow::Borrowed(short_type_name(full)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    // Keep generic arguments intact: only strip the path before the first `<`.
    let head_end = full.find('<').unwrap_or(full.len());
    match full[..head_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

/// A granted decision. Message and code are optional context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Granted {
    issuer: Issuer,
    message: Option<String>,
    code: Option<String>,
}

impl Granted {
    pub fn new(issuer: Issuer) -> Self {
        Self {
            issuer,
            message: None,
            code: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn issuer(&self) -> &Issuer {
        &self.issuer
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// A denied decision. Message and code are both mandatory and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Denied {
    issuer: Issuer,
    message: String,
    code: String,
}

impl Denied {
    /// # Panics
    ///
    /// Panics if `message` or `code` is empty. Use [`Denied::try_new`] when the values come
    /// from outside the program.
    pub fn new(issuer: Issuer, message: impl Into<String>, code: impl Into<String>) -> Self {
        match Self::try_new(issuer, message, code) {
            Ok(denied) => denied,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(
        issuer: Issuer,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, ResponseError> {
        let message = message.into();
        let code = code.into();
        if message.is_empty() {
            return Err(ResponseError::EmptyMessage);
        }
        if code.is_empty() {
            return Err(ResponseError::EmptyCode);
        }
        Ok(Self {
            issuer,
            message,
            code,
        })
    }

    pub fn issuer(&self) -> &Issuer {
        &self.issuer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// The value every check returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Granted(Granted),
    Denied(Denied),
}

impl Response {
    pub fn decision(&self) -> Decision {
        match self {
            Response::Granted(_) => Decision::Granted,
            Response::Denied(_) => Decision::Denied,
        }
    }

    pub fn to_bool(&self) -> bool {
        self.decision().to_bool()
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Response::Granted(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Response::Denied(_))
    }

    pub fn issuer(&self) -> &Issuer {
        match self {
            Response::Granted(g) => g.issuer(),
            Response::Denied(d) => d.issuer(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Granted(g) => g.message(),
            Response::Denied(d) => Some(d.message()),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Response::Granted(g) => g.code(),
            Response::Denied(d) => Some(d.code()),
        }
    }

    pub fn as_granted(&self) -> Option<&Granted> {
        match self {
            Response::Granted(g) => Some(g),
            Response::Denied(_) => None,
        }
    }

    pub fn as_denied(&self) -> Option<&Denied> {
        match self {
            Response::Granted(_) => None,
            Response::Denied(d) => Some(d),
        }
    }
}

impl From<Granted> for Response {
    fn from(value: Granted) -> Self {
        Response::Granted(value)
    }
}

impl From<Denied> for Response {
    fn from(value: Denied) -> Self {
        Response::Denied(value)
    }
}
