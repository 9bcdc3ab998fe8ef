use crate::Decision;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for decision reports.
pub const SCHEMA_DECISION_V1: &str = "kontrol.decision.v1";

/// One evaluated response, in evaluation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseRecord {
    pub decision: Decision,
    /// Name of the checker that produced the response (diagnostics only).
    pub issuer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionCounts {
    pub granted: u32,
    pub denied: u32,
}

impl DecisionCounts {
    pub fn from_records(records: &[ResponseRecord]) -> Self {
        let mut counts = DecisionCounts::default();
        for r in records {
            match r.decision {
                Decision::Granted => counts.granted += 1,
                Decision::Denied => counts.denied += 1,
            }
        }
        counts
    }
}

/// Serializable summary of an aggregated decision.
///
/// The outer shape is stable; consumers key off `schema`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionReport {
    pub schema: String,
    pub decision: Decision,
    pub counts: DecisionCounts,
    pub responses: Vec<ResponseRecord>,
}

impl DecisionReport {
    pub fn new(responses: Vec<ResponseRecord>) -> Self {
        let counts = DecisionCounts::from_records(&responses);
        let decision = if counts.denied > 0 {
            Decision::Denied
        } else {
            Decision::Granted
        };
        Self {
            schema: SCHEMA_DECISION_V1.to_string(),
            decision,
            counts,
            responses,
        }
    }

    /// Denied records, in evaluation order.
    pub fn denials(&self) -> impl Iterator<Item = &ResponseRecord> {
        self.responses
            .iter()
            .filter(|r| r.decision == Decision::Denied)
    }
}
