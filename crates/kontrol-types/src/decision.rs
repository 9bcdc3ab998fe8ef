use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single authorization check.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Granted,
    Denied,
}

impl Decision {
    /// `Granted` projects to `true`, `Denied` to `false`.
    pub fn to_bool(self) -> bool {
        match self {
            Decision::Granted => true,
            Decision::Denied => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Granted => "GRANTED",
            Decision::Denied => "DENIED",
        }
    }
}

impl From<Decision> for bool {
    fn from(value: Decision) -> Self {
        value.to_bool()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
