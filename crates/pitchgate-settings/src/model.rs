use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `pitchgate.toml` schema v1.
///
/// This is a *user-facing* config model: permissive strings everywhere so
/// forward-compat is easy. Normalization into the closed identifier sets
/// happens during resolution, which reports every problem at once.
///
/// Section semantics: a present, non-empty section replaces the corresponding
/// preset section wholesale; an absent or empty section keeps the preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PitchgateConfigV1 {
    /// Optional schema string for tooling (`pitchgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Role catalog: seniority levels and the super-role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<HierarchyConfig>,

    /// Permission catalog: domain name -> action names. Tokens are formed as
    /// `<domain>:<action>`.
    #[serde(default)]
    pub catalog: BTreeMap<String, Vec<String>>,

    /// Base policy: role name -> full permission tokens.
    #[serde(default)]
    pub policy: BTreeMap<String, Vec<String>>,

    /// Overlay registry: domain name -> overlay title -> tokens.
    #[serde(default)]
    pub overlays: BTreeMap<String, BTreeMap<String, Vec<String>>>,

    /// Tier gates: tier name -> tokens. Must cover every tier and form a
    /// superset chain along tier order.
    #[serde(default)]
    pub tiers: BTreeMap<String, Vec<String>>,

    /// Access matrices: category -> role name -> access level name.
    #[serde(default)]
    pub access: BTreeMap<String, BTreeMap<String, String>>,

    /// Team actions: action name -> any-of tokens.
    #[serde(default)]
    pub team_actions: BTreeMap<String, Vec<String>>,

    /// Exports: data type name -> all-of tokens.
    #[serde(default)]
    pub exports: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HierarchyConfig {
    /// Defaults to the preset's super-role when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_role: Option<String>,

    /// Role name -> seniority level. Empty keeps the preset levels.
    #[serde(default)]
    pub levels: BTreeMap<String, u32>,
}
