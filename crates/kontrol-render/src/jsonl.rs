use kontrol_types::DecisionReport;

/// One JSON object per response, in evaluation order, each line newline-terminated.
pub fn render_jsonl(report: &DecisionReport) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for record in &report.responses {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
