use crate::catalog::{AccessLevel, ExportDataType, Role, TeamAction};
use crate::token::Permission;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the audit summary envelope.
pub const SCHEMA_AUDIT_V1: &str = "pitchgate.audit.v1";

/// Access grades for the sensitive categories, one field per category so the
/// serialized shape is fixed and diffs stay readable in audit logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccessLevelSummary {
    pub injury: AccessLevel,
    pub contract: AccessLevel,
    pub finance: AccessLevel,
}

/// Everything the engine derives for a single role, flattened for audit
/// logging and capability-driven UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionSummary {
    pub role: Role,
    pub hierarchy_level: u32,
    /// Sorted; for the super-role this is the whole catalog.
    pub effective_permissions: Vec<Permission>,
    pub access_levels: AccessLevelSummary,
    pub team_actions: Vec<TeamAction>,
    pub exportable_data_types: Vec<ExportDataType>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope emitted by the audit use case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub summaries: Vec<PermissionSummary>,
}
