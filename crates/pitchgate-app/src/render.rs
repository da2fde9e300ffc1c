//! Markdown rendering of audit envelopes.

use pitchgate_types::AuditEnvelope;

pub fn render_markdown(envelope: &AuditEnvelope) -> String {
    let mut out = String::new();

    out.push_str("# Pitchgate permission audit\n");

    for summary in &envelope.summaries {
        out.push_str(&format!(
            "\n## {} (level {})\n\n",
            summary.role, summary.hierarchy_level
        ));
        out.push_str(&format!(
            "- Access grades: injury={}, contract={}, finance={}\n",
            summary.access_levels.injury,
            summary.access_levels.contract,
            summary.access_levels.finance
        ));
        out.push_str(&format!(
            "- Team actions: {}\n",
            join_or_none(summary.team_actions.iter().map(|a| a.as_str()))
        ));
        out.push_str(&format!(
            "- Exports: {}\n",
            join_or_none(summary.exportable_data_types.iter().map(|d| d.as_str()))
        ));
        out.push_str(&format!(
            "- Permissions ({}):\n",
            summary.effective_permissions.len()
        ));
        for permission in &summary.effective_permissions {
            out.push_str(&format!("  - `{}`\n", permission));
        }
    }

    out
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = items.collect();
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined.join(", ")
    }
}
