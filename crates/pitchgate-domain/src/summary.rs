use crate::engine::PolicyEngine;
use pitchgate_types::{AccessLevelSummary, PermissionSummary, ResourceCategory, Role};

impl PolicyEngine {
    /// Aggregate view of everything the tables say about one role. Pure
    /// function of the static tables; intended for audit logs and
    /// capability-driven UI.
    pub fn permission_summary(&self, role: Role) -> PermissionSummary {
        PermissionSummary {
            role,
            hierarchy_level: self.level(role),
            effective_permissions: self
                .effective_permissions(role, None)
                .into_iter()
                .collect(),
            access_levels: AccessLevelSummary {
                injury: self.access_level(ResourceCategory::Injury, role),
                contract: self.access_level(ResourceCategory::Contract, role),
                finance: self.access_level(ResourceCategory::Finance, role),
            },
            team_actions: self.available_team_actions(role),
            exportable_data_types: self.exportable_data_types(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_tables;
    use pitchgate_types::{AccessLevel, ids};

    #[test]
    fn summary_agrees_with_the_individual_queries() {
        let engine = PolicyEngine::new(fixture_tables());
        for role in Role::ALL {
            let summary = engine.permission_summary(*role);
            assert_eq!(summary.hierarchy_level, engine.level(*role));
            assert_eq!(summary.team_actions, engine.available_team_actions(*role));
            assert_eq!(
                summary.exportable_data_types,
                engine.exportable_data_types(*role)
            );
            for perm in &summary.effective_permissions {
                assert!(engine.has_permission(*role, perm.as_str()));
            }
        }
    }

    #[test]
    fn super_role_summary_lists_the_whole_catalog() {
        let engine = PolicyEngine::new(fixture_tables());
        let summary = engine.permission_summary(Role::ClubAdmin);
        assert_eq!(
            summary.effective_permissions.len(),
            engine.tables().catalog.len()
        );
    }

    #[test]
    fn summary_permissions_are_sorted() {
        let engine = PolicyEngine::new(fixture_tables());
        let summary = engine.permission_summary(Role::Manager);
        let mut sorted = summary.effective_permissions.clone();
        sorted.sort();
        assert_eq!(summary.effective_permissions, sorted);
    }

    #[test]
    fn summary_access_levels_match_the_matrix() {
        let engine = PolicyEngine::new(fixture_tables());
        let summary = engine.permission_summary(Role::Player);
        assert_eq!(summary.access_levels.injury, AccessLevel::Limited);
        assert_eq!(
            summary.access_levels.finance,
            engine.access_level(ResourceCategory::Finance, Role::Player)
        );
        assert!(
            summary
                .effective_permissions
                .iter()
                .any(|p| p.as_str() == ids::PERM_TEAM_READ)
        );
    }
}
