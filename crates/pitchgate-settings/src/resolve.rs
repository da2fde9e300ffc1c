use crate::model::{HierarchyConfig, PitchgateConfigV1};
use crate::presets;
use pitchgate_domain::{PermissionSet, PolicyTables, RoleHierarchy};
use pitchgate_types::{
    AccessLevel, Domain, ExportDataType, Permission, ResourceCategory, Role, TeamAction, Tier, ids,
};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// One validation problem. `code` is a stable identifier from
/// [`pitchgate_types::ids`]; `message` names the offending section and value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigIssue {
    pub code: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Aggregated validation failure. Resolution never fails fast: a
/// misconfiguration batch surfaces every issue at once so it can be fixed in
/// one pass.
#[derive(Debug, Error)]
#[error("{}", format_issues(.issues))]
pub struct ConfigError {
    pub issues: Vec<ConfigIssue>,
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    let mut out = format!("invalid pitchgate configuration ({} issues)", issues.len());
    for issue in issues {
        out.push_str("\n  - ");
        out.push_str(&issue.to_string());
    }
    out
}

/// Validated tables, ready for `PolicyEngine::new`. This is the only
/// production path that constructs [`PolicyTables`].
#[derive(Clone, Debug)]
pub struct ResolvedTables {
    pub tables: PolicyTables,
}

/// Resolve a config against the preset catalog and validate the result.
///
/// A present, non-empty section replaces the corresponding preset section;
/// absent sections keep the preset. All string inputs are normalized here,
/// so the engine never sees free text.
pub fn resolve_config(cfg: PitchgateConfigV1) -> Result<ResolvedTables, ConfigError> {
    let defaults = presets::default_tables();
    let mut issues: Vec<ConfigIssue> = Vec::new();

    let hierarchy = resolve_hierarchy(cfg.hierarchy.as_ref(), &defaults.hierarchy, &mut issues);
    let catalog = resolve_catalog(&cfg.catalog, &defaults.catalog, &mut issues);
    let base_policy = resolve_policy(&cfg.policy, &defaults.base_policy, &mut issues);
    let overlays = resolve_overlays(&cfg.overlays, &defaults.overlays, &mut issues);
    let tiers = resolve_tiers(&cfg.tiers, &defaults.tiers, &mut issues);
    let access = resolve_access(&cfg.access, &defaults.access, &mut issues);
    let team_actions = resolve_team_actions(&cfg.team_actions, &defaults.team_actions, &mut issues);
    let exports = resolve_exports(&cfg.exports, &defaults.exports, &mut issues);

    let tables = PolicyTables {
        hierarchy,
        catalog,
        base_policy,
        overlays,
        tiers,
        access,
        team_actions,
        exports,
    };

    validate_tables(&tables, &mut issues);

    if issues.is_empty() {
        Ok(ResolvedTables { tables })
    } else {
        issues.sort_by(|a, b| a.code.cmp(b.code).then_with(|| a.message.cmp(&b.message)));
        issues.dedup();
        Err(ConfigError { issues })
    }
}

fn push(issues: &mut Vec<ConfigIssue>, code: &'static str, message: String) {
    issues.push(ConfigIssue { code, message });
}

fn resolve_hierarchy(
    cfg: Option<&HierarchyConfig>,
    defaults: &RoleHierarchy,
    issues: &mut Vec<ConfigIssue>,
) -> RoleHierarchy {
    let Some(hc) = cfg else {
        return defaults.clone();
    };

    let levels = if hc.levels.is_empty() {
        defaults.levels.clone()
    } else {
        let mut levels = BTreeMap::new();
        for (name, level) in &hc.levels {
            match Role::parse(name) {
                Some(role) => {
                    levels.insert(role, *level);
                }
                None => push(
                    issues,
                    ids::CODE_UNKNOWN_ROLE,
                    format!("hierarchy.levels: unknown role '{name}'"),
                ),
            }
        }
        levels
    };

    let super_role = match hc.super_role.as_deref() {
        None => defaults.super_role,
        Some(name) => match Role::parse(name) {
            Some(role) => role,
            None => {
                push(
                    issues,
                    ids::CODE_UNKNOWN_SUPER_ROLE,
                    format!("hierarchy.super_role: unknown role '{name}'"),
                );
                defaults.super_role
            }
        },
    };

    RoleHierarchy { levels, super_role }
}

fn resolve_catalog(
    cfg: &BTreeMap<String, Vec<String>>,
    defaults: &PermissionSet,
    issues: &mut Vec<ConfigIssue>,
) -> PermissionSet {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut catalog = PermissionSet::new();
    for (domain_name, actions) in cfg {
        let Some(domain) = Domain::parse(domain_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_DOMAIN,
                format!("catalog: unknown domain '{domain_name}'"),
            );
            continue;
        };
        for action in actions {
            let action = action.trim().to_ascii_lowercase();
            if action.is_empty() || action.contains(':') {
                push(
                    issues,
                    ids::CODE_MALFORMED_PERMISSION,
                    format!("catalog.{domain}: malformed action '{action}'"),
                );
                continue;
            }
            let token = Permission::new(format!("{domain}:{action}"));
            if !catalog.insert(token.clone()) {
                push(
                    issues,
                    ids::CODE_DUPLICATE_PERMISSION,
                    format!("catalog: duplicate token '{token}'"),
                );
            }
        }
    }
    catalog
}

/// Shape check only; catalog membership is validated later over the final
/// tables so mixed preset/config sections are covered uniformly.
fn parse_token(raw: &str, section: &str, issues: &mut Vec<ConfigIssue>) -> Option<Permission> {
    let token = Permission::new(raw);
    if token.domain().is_none() || token.action().is_none() {
        push(
            issues,
            ids::CODE_MALFORMED_PERMISSION,
            format!("{section}: malformed token '{raw}'"),
        );
        return None;
    }
    Some(token)
}

fn parse_token_set(
    raw: &[String],
    section: &str,
    issues: &mut Vec<ConfigIssue>,
) -> PermissionSet {
    raw.iter()
        .filter_map(|t| parse_token(t, section, issues))
        .collect()
}

fn parse_token_list(
    raw: &[String],
    section: &str,
    issues: &mut Vec<ConfigIssue>,
) -> Vec<Permission> {
    raw.iter()
        .filter_map(|t| parse_token(t, section, issues))
        .collect()
}

fn resolve_policy(
    cfg: &BTreeMap<String, Vec<String>>,
    defaults: &BTreeMap<Role, PermissionSet>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeMap<Role, PermissionSet> {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut policy = BTreeMap::new();
    for (role_name, tokens) in cfg {
        let Some(role) = Role::parse(role_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_ROLE,
                format!("policy: unknown role '{role_name}'"),
            );
            continue;
        };
        let section = format!("policy.{role}");
        policy.insert(role, parse_token_set(tokens, &section, issues));
    }
    policy
}

fn resolve_overlays(
    cfg: &BTreeMap<String, BTreeMap<String, Vec<String>>>,
    defaults: &BTreeMap<Domain, BTreeMap<String, PermissionSet>>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeMap<Domain, BTreeMap<String, PermissionSet>> {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut overlays: BTreeMap<Domain, BTreeMap<String, PermissionSet>> = BTreeMap::new();
    for (domain_name, titles) in cfg {
        let Some(domain) = Domain::parse(domain_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_DOMAIN,
                format!("overlays: unknown domain '{domain_name}'"),
            );
            continue;
        };
        for (title, tokens) in titles {
            let title = title.trim().to_ascii_lowercase();
            let section = format!("overlays.{domain}.{title}");
            overlays
                .entry(domain)
                .or_default()
                .insert(title.clone(), parse_token_set(tokens, &section, issues));
        }
    }
    overlays
}

fn resolve_tiers(
    cfg: &BTreeMap<String, Vec<String>>,
    defaults: &BTreeMap<Tier, PermissionSet>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeMap<Tier, PermissionSet> {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut tiers = BTreeMap::new();
    for (tier_name, tokens) in cfg {
        let Some(tier) = Tier::parse(tier_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_TIER,
                format!("tiers: unknown tier '{tier_name}'"),
            );
            continue;
        };
        let section = format!("tiers.{tier}");
        tiers.insert(tier, parse_token_set(tokens, &section, issues));
    }
    tiers
}

fn resolve_access(
    cfg: &BTreeMap<String, BTreeMap<String, String>>,
    defaults: &BTreeMap<ResourceCategory, BTreeMap<Role, AccessLevel>>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeMap<ResourceCategory, BTreeMap<Role, AccessLevel>> {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut access: BTreeMap<ResourceCategory, BTreeMap<Role, AccessLevel>> = BTreeMap::new();
    for (category_name, grades) in cfg {
        let Some(category) = ResourceCategory::parse(category_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_CATEGORY,
                format!("access: unknown category '{category_name}'"),
            );
            continue;
        };
        for (role_name, level_name) in grades {
            let Some(role) = Role::parse(role_name) else {
                push(
                    issues,
                    ids::CODE_UNKNOWN_ROLE,
                    format!("access.{category}: unknown role '{role_name}'"),
                );
                continue;
            };
            let Some(level) = AccessLevel::parse(level_name) else {
                push(
                    issues,
                    ids::CODE_UNKNOWN_ACCESS_LEVEL,
                    format!("access.{category}.{role}: unknown access level '{level_name}'"),
                );
                continue;
            };
            access.entry(category).or_default().insert(role, level);
        }
    }
    access
}

fn resolve_team_actions(
    cfg: &BTreeMap<String, Vec<String>>,
    defaults: &BTreeMap<TeamAction, Vec<Permission>>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeMap<TeamAction, Vec<Permission>> {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut team_actions = BTreeMap::new();
    for (action_name, tokens) in cfg {
        let Some(action) = TeamAction::parse(action_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_TEAM_ACTION,
                format!("team_actions: unknown action '{action_name}'"),
            );
            continue;
        };
        let section = format!("team_actions.{action}");
        team_actions.insert(action, parse_token_list(tokens, &section, issues));
    }
    team_actions
}

fn resolve_exports(
    cfg: &BTreeMap<String, Vec<String>>,
    defaults: &BTreeMap<ExportDataType, Vec<Permission>>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeMap<ExportDataType, Vec<Permission>> {
    if cfg.is_empty() {
        return defaults.clone();
    }
    let mut exports = BTreeMap::new();
    for (data_name, tokens) in cfg {
        let Some(data_type) = ExportDataType::parse(data_name) else {
            push(
                issues,
                ids::CODE_UNKNOWN_EXPORT,
                format!("exports: unknown data type '{data_name}'"),
            );
            continue;
        };
        let section = format!("exports.{data_type}");
        exports.insert(data_type, parse_token_list(tokens, &section, issues));
    }
    exports
}

/// Cross-table checks over the fully assembled tables, whatever mixture of
/// preset and config sections produced them.
fn validate_tables(tables: &PolicyTables, issues: &mut Vec<ConfigIssue>) {
    let catalog = &tables.catalog;
    let roles = &tables.hierarchy.levels;

    if !roles.contains_key(&tables.hierarchy.super_role) {
        push(
            issues,
            ids::CODE_UNKNOWN_SUPER_ROLE,
            format!(
                "hierarchy: super-role '{}' is not in the role catalog",
                tables.hierarchy.super_role
            ),
        );
    }

    for role in tables.base_policy.keys() {
        if !roles.contains_key(role) {
            push(
                issues,
                ids::CODE_UNKNOWN_ROLE,
                format!("policy: role '{role}' is not in the role catalog"),
            );
        }
    }

    // Exhaustiveness: every cataloged role needs an explicit policy entry,
    // even an empty one.
    for role in roles.keys() {
        if !tables.base_policy.contains_key(role) {
            push(
                issues,
                ids::CODE_MISSING_ROLE_POLICY,
                format!("policy: no entry for role '{role}'"),
            );
        }
    }

    for (category, grades) in &tables.access {
        for role in grades.keys() {
            if !roles.contains_key(role) {
                push(
                    issues,
                    ids::CODE_UNKNOWN_ROLE,
                    format!("access.{category}: role '{role}' is not in the role catalog"),
                );
            }
        }
    }

    for tier in Tier::ALL {
        if !tables.tiers.contains_key(tier) {
            push(
                issues,
                ids::CODE_MISSING_TIER_ENTRY,
                format!("tiers: no entry for tier '{tier}'"),
            );
        }
    }

    // Monotonic superset chain along tier order; this is what makes ordinal
    // tier comparison sound.
    for window in Tier::ALL.windows(2) {
        let (lower, higher) = (window[0], window[1]);
        if let (Some(lower_set), Some(higher_set)) =
            (tables.tiers.get(&lower), tables.tiers.get(&higher))
        {
            if let Some(missing) = lower_set.difference(higher_set).next() {
                push(
                    issues,
                    ids::CODE_TIER_CHAIN_BROKEN,
                    format!(
                        "tiers: '{higher}' does not include '{missing}' granted by '{lower}'"
                    ),
                );
            }
        }
    }

    for (role, grants) in &tables.base_policy {
        check_cataloged(&format!("policy.{role}"), grants.iter(), catalog, issues);
    }
    for (domain, titles) in &tables.overlays {
        for (title, grants) in titles {
            check_cataloged(
                &format!("overlays.{domain}.{title}"),
                grants.iter(),
                catalog,
                issues,
            );
        }
    }
    for (tier, grants) in &tables.tiers {
        check_cataloged(&format!("tiers.{tier}"), grants.iter(), catalog, issues);
    }
    for (action, grants) in &tables.team_actions {
        check_cataloged(
            &format!("team_actions.{action}"),
            grants.iter(),
            catalog,
            issues,
        );
    }
    for (data_type, grants) in &tables.exports {
        check_cataloged(
            &format!("exports.{data_type}"),
            grants.iter(),
            catalog,
            issues,
        );
    }
}

fn check_cataloged<'a>(
    section: &str,
    tokens: impl Iterator<Item = &'a Permission>,
    catalog: &PermissionSet,
    issues: &mut Vec<ConfigIssue>,
) {
    for token in tokens {
        if !catalog.contains(token.as_str()) {
            push(
                issues,
                ids::CODE_UNKNOWN_PERMISSION,
                format!("{section}: token '{token}' is not in the catalog"),
            );
        }
    }
}
