use pitchgate_types::{
    AccessLevel, Domain, ExportDataType, Permission, ResourceCategory, Role, TeamAction, Tier,
};
use std::collections::{BTreeMap, BTreeSet};

pub type PermissionSet = BTreeSet<Permission>;

/// Role catalog with seniority levels and the distinguished super-role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleHierarchy {
    /// Integer seniority per cataloged role. Roles absent from the catalog
    /// rank at 0.
    pub levels: BTreeMap<Role, u32>,
    /// The one role whose permission set conceptually contains a wildcard.
    pub super_role: Role,
}

impl RoleHierarchy {
    pub fn level(&self, role: Role) -> u32 {
        self.levels.get(&role).copied().unwrap_or(0)
    }

    pub fn is_more_senior(&self, a: Role, b: Role) -> bool {
        self.level(a) > self.level(b)
    }

    /// The most senior role of the input, or `None` for an empty input.
    /// Ties resolve to the first role encountered in input order.
    pub fn highest_of(&self, roles: impl IntoIterator<Item = Role>) -> Option<Role> {
        let mut best: Option<(Role, u32)> = None;
        for role in roles {
            let level = self.level(role);
            match best {
                Some((_, best_level)) if level <= best_level => {}
                _ => best = Some((role, level)),
            }
        }
        best.map(|(role, _)| role)
    }

    /// Cataloged roles in descending seniority, ties in catalog order.
    pub fn roles_by_seniority(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.levels.keys().copied().collect();
        roles.sort_by_key(|r| std::cmp::Reverse(self.level(*r)));
        roles
    }
}

/// The complete static configuration the engine evaluates against.
///
/// Built once at startup (see `pitchgate-settings`) and never mutated; a
/// reconfiguration replaces the whole value. Fields are public so tests can
/// assemble fixture tables directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyTables {
    pub hierarchy: RoleHierarchy,

    /// Every known permission token. Only consulted for the super-role's
    /// effective set and for summaries; membership checks go through the
    /// per-role sets.
    pub catalog: PermissionSet,

    /// Role -> granted permissions. The primary authorization source.
    pub base_policy: BTreeMap<Role, PermissionSet>,

    /// domain -> overlay title -> additional permissions. Overlay titles are
    /// not roles: no seniority, additive only, meaningless without a base
    /// role.
    pub overlays: BTreeMap<Domain, BTreeMap<String, PermissionSet>>,

    /// Tier -> gated permissions. Validated as a monotonic superset chain
    /// along tier order.
    pub tiers: BTreeMap<Tier, PermissionSet>,

    /// category -> role -> grade. Sparse: a missing role reads as
    /// `AccessLevel::None`.
    pub access: BTreeMap<ResourceCategory, BTreeMap<Role, AccessLevel>>,

    /// Team action -> any-of permission list.
    pub team_actions: BTreeMap<TeamAction, Vec<Permission>>,

    /// Export data type -> all-of permission list.
    pub exports: BTreeMap<ExportDataType, Vec<Permission>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn level_defaults_to_zero_for_uncataloged_role() {
        let tables = test_support::fixture_tables();
        let mut hierarchy = tables.hierarchy;
        hierarchy.levels.remove(&Role::Supporter);
        assert_eq!(hierarchy.level(Role::Supporter), 0);
        assert!(hierarchy.is_more_senior(Role::Player, Role::Supporter));
    }

    #[test]
    fn highest_of_empty_is_none() {
        let tables = test_support::fixture_tables();
        assert_eq!(tables.hierarchy.highest_of([]), None);
    }

    #[test]
    fn highest_of_picks_max_level() {
        let tables = test_support::fixture_tables();
        assert_eq!(
            tables
                .hierarchy
                .highest_of([Role::Player, Role::Manager, Role::Coach]),
            Some(Role::Manager)
        );
    }

    #[test]
    fn highest_of_tie_keeps_first_in_input_order() {
        let tables = test_support::fixture_tables();
        let mut hierarchy = tables.hierarchy;
        hierarchy.levels.insert(Role::Guardian, 20);
        hierarchy.levels.insert(Role::Player, 20);
        assert_eq!(
            hierarchy.highest_of([Role::Player, Role::Guardian]),
            Some(Role::Player)
        );
        assert_eq!(
            hierarchy.highest_of([Role::Guardian, Role::Player]),
            Some(Role::Guardian)
        );
    }

    #[test]
    fn roles_by_seniority_descends() {
        let tables = test_support::fixture_tables();
        let roles = tables.hierarchy.roles_by_seniority();
        for pair in roles.windows(2) {
            assert!(tables.hierarchy.level(pair[0]) >= tables.hierarchy.level(pair[1]));
        }
    }
}
