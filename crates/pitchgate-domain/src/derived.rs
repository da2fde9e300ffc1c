//! Derived capability queries on top of the base tables.
//!
//! Team actions use any-of lists, data exports use all-of lists. The
//! asymmetry is deliberate: a team action is typically reachable through any
//! sufficiently senior capability, while an export always combines a read
//! grant with the distinct export grant.

use crate::engine::PolicyEngine;
use pitchgate_types::{ExportDataType, Role, TeamAction};

impl PolicyEngine {
    /// Any one permission from the action's list suffices. Actions absent
    /// from the table (or mapped to an empty list) are denied.
    pub fn can_perform_team_action(&self, role: Role, action: TeamAction) -> bool {
        self.tables()
            .team_actions
            .get(&action)
            .is_some_and(|perms| perms.iter().any(|p| self.has_permission(role, p.as_str())))
    }

    /// Exactly the actions `can_perform_team_action` accepts, in catalog
    /// order.
    pub fn available_team_actions(&self, role: Role) -> Vec<TeamAction> {
        TeamAction::ALL
            .iter()
            .copied()
            .filter(|action| self.can_perform_team_action(role, *action))
            .collect()
    }

    /// Every permission in the data type's list is required. A missing or
    /// empty requirement list denies: no data set is exportable by
    /// configuration accident.
    pub fn can_export_data(&self, role: Role, data_type: ExportDataType) -> bool {
        self.tables().exports.get(&data_type).is_some_and(|perms| {
            !perms.is_empty() && perms.iter().all(|p| self.has_permission(role, p.as_str()))
        })
    }

    pub fn exportable_data_types(&self, role: Role) -> Vec<ExportDataType> {
        ExportDataType::ALL
            .iter()
            .copied()
            .filter(|data_type| self.can_export_data(role, *data_type))
            .collect()
    }

    /// Public announcements are visible to everyone; an empty target list
    /// means unrestricted; otherwise the viewer's role must be targeted.
    pub fn can_view_announcement(
        &self,
        role: Role,
        target_roles: &[Role],
        is_public: bool,
    ) -> bool {
        is_public || target_roles.is_empty() || target_roles.contains(&role)
    }

    /// Roles an announcement author may address: everyone at or below the
    /// author's seniority. An organizational constraint, independent of the
    /// permission tables.
    pub fn targetable_roles(&self, creator: Role) -> Vec<Role> {
        let creator_level = self.level(creator);
        self.tables()
            .hierarchy
            .roles_by_seniority()
            .into_iter()
            .filter(|role| self.level(*role) <= creator_level)
            .collect()
    }
}
