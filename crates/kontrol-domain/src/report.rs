use crate::response::Response;
use kontrol_types::{DecisionReport, ResponseRecord};

/// Project responses into the stable, serializable report shape.
pub fn build_report(responses: &[Response]) -> DecisionReport {
    DecisionReport::new(responses.iter().map(record).collect())
}

pub fn record(response: &Response) -> ResponseRecord {
    ResponseRecord {
        decision: response.decision(),
        issuer: response.issuer().to_string(),
        message: response.message().map(str::to_string),
        code: response.code().map(str::to_string),
    }
}
