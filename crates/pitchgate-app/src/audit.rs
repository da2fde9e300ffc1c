//! The `audit` use case: resolve tables and summarize what each role can do.

use anyhow::Context;
use pitchgate_domain::PolicyEngine;
use pitchgate_types::{AuditEnvelope, Role, SCHEMA_AUDIT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Config file contents (empty string if not found; defaults apply).
    pub config_text: &'a str,
    /// Roles to summarize; `None` means every cataloged role, most senior
    /// first.
    pub roles: Option<Vec<Role>>,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub envelope: AuditEnvelope,
}

/// Run the audit use case: parse config, resolve tables, build one summary
/// per requested role.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        pitchgate_settings::PitchgateConfigV1::default()
    } else {
        pitchgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = pitchgate_settings::resolve_config(cfg).context("resolve config")?;
    let engine = PolicyEngine::new(resolved.tables);

    let roles = input
        .roles
        .unwrap_or_else(|| engine.tables().hierarchy.roles_by_seniority());

    let summaries = roles
        .iter()
        .map(|role| engine.permission_summary(*role))
        .collect();

    Ok(AuditOutput {
        envelope: AuditEnvelope {
            schema: SCHEMA_AUDIT_V1.to_string(),
            tool: ToolMeta {
                name: "pitchgate".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: OffsetDateTime::now_utc(),
            summaries,
        },
    })
}

pub fn serialize_envelope(envelope: &AuditEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(envelope).context("serialize envelope")?;
    out.push('\n');
    Ok(out)
}
