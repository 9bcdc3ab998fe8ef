use kontrol_types::{Decision, DecisionReport};

pub fn render_markdown(report: &DecisionReport) -> String {
    let mut out = String::new();

    out.push_str("# Kontrol decision\n\n");
    out.push_str(&format!(
        "- Decision: **{}**\n- Responses: {} granted / {} denied\n\n",
        report.decision, report.counts.granted, report.counts.denied
    ));

    if report.decision == Decision::Granted {
        out.push_str("No denials.\n");
        return out;
    }

    out.push_str("## Denials\n\n");

    for r in report.denials() {
        out.push_str(&format!(
            "- [DENIED] `{}` — {} ({})\n",
            r.code.as_deref().unwrap_or(""),
            r.message.as_deref().unwrap_or(""),
            r.issuer
        ));
    }

    out
}
