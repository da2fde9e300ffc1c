//! Shared fixture tables for tests across the workspace.
//!
//! The fixture catalog is deliberately smaller than the production preset in
//! `pitchgate-settings` and is the ground truth the unit and property suites
//! assert against. Keep grants here minimal: every token a fixture role holds
//! is load-bearing for some test.

use crate::tables::{PermissionSet, PolicyTables, RoleHierarchy};
use pitchgate_types::{
    AccessLevel, Domain, ExportDataType, Permission, ResourceCategory, Role, TeamAction, Tier, ids,
};
use std::collections::BTreeMap;

pub fn set(tokens: &[&str]) -> PermissionSet {
    tokens.iter().map(Permission::new).collect()
}

pub fn perms(tokens: &[&str]) -> Vec<Permission> {
    tokens.iter().map(Permission::new).collect()
}

pub fn fixture_hierarchy() -> RoleHierarchy {
    RoleHierarchy {
        levels: BTreeMap::from([
            (Role::ClubAdmin, 100),
            (Role::Manager, 80),
            (Role::Coach, 60),
            (Role::Guardian, 30),
            (Role::Player, 20),
            (Role::Supporter, 10),
        ]),
        super_role: Role::ClubAdmin,
    }
}

pub fn fixture_tables() -> PolicyTables {
    let mut base_policy = BTreeMap::new();
    // The super-role's set stays empty: its grant is the wildcard, not a
    // table entry.
    base_policy.insert(Role::ClubAdmin, PermissionSet::new());
    base_policy.insert(
        Role::Manager,
        set(&[
            ids::PERM_USER_READ,
            ids::PERM_TEAM_READ,
            ids::PERM_TEAM_UPDATE,
            ids::PERM_PLAYER_READ,
            ids::PERM_PLAYER_REGISTER,
            ids::PERM_PLAYER_RELEASE,
            ids::PERM_MATCH_READ,
            ids::PERM_MATCH_SCHEDULE,
            ids::PERM_MATCH_RECORD_RESULT,
            ids::PERM_TRAINING_READ,
            ids::PERM_INJURY_READ,
            ids::PERM_CONTRACT_READ,
            ids::PERM_CONTRACT_MANAGE,
            ids::PERM_FINANCE_READ,
            ids::PERM_ANALYTICS_VIEW,
            ids::PERM_ANALYTICS_EXPORT,
            ids::PERM_ANNOUNCEMENT_READ,
            ids::PERM_ANNOUNCEMENT_CREATE,
            ids::PERM_ANNOUNCEMENT_MANAGE,
            ids::PERM_LEAGUE_READ,
            ids::PERM_LEAGUE_REGISTER,
        ]),
    );
    base_policy.insert(
        Role::Coach,
        set(&[
            ids::PERM_USER_READ,
            ids::PERM_TEAM_READ,
            ids::PERM_PLAYER_READ,
            ids::PERM_PLAYER_UPDATE,
            ids::PERM_MATCH_READ,
            ids::PERM_MATCH_SCHEDULE,
            ids::PERM_TRAINING_READ,
            ids::PERM_TRAINING_SCHEDULE,
            ids::PERM_TRAINING_UPDATE,
            ids::PERM_INJURY_READ,
            ids::PERM_INJURY_REPORT,
            ids::PERM_TACTICS_READ,
            ids::PERM_TACTICS_EDIT,
            ids::PERM_ANALYTICS_VIEW,
            ids::PERM_ANNOUNCEMENT_READ,
            ids::PERM_ANNOUNCEMENT_CREATE,
        ]),
    );
    base_policy.insert(
        Role::Guardian,
        set(&[
            ids::PERM_USER_READ,
            ids::PERM_PLAYER_READ,
            ids::PERM_INJURY_READ,
            ids::PERM_TRAINING_READ,
            ids::PERM_MATCH_READ,
            ids::PERM_ANNOUNCEMENT_READ,
        ]),
    );
    base_policy.insert(
        Role::Player,
        set(&[
            ids::PERM_USER_READ,
            ids::PERM_TEAM_READ,
            ids::PERM_PLAYER_READ,
            ids::PERM_MATCH_READ,
            ids::PERM_TRAINING_READ,
            ids::PERM_TACTICS_READ,
            ids::PERM_ANNOUNCEMENT_READ,
        ]),
    );
    base_policy.insert(
        Role::Supporter,
        set(&[
            ids::PERM_TEAM_READ,
            ids::PERM_MATCH_READ,
            ids::PERM_ANNOUNCEMENT_READ,
            ids::PERM_LEAGUE_READ,
        ]),
    );

    let catalog: PermissionSet = base_policy
        .values()
        .flatten()
        .cloned()
        .chain(set(&[
            ids::PERM_USER_UPDATE,
            ids::PERM_USER_MANAGE,
            ids::PERM_TEAM_CREATE,
            ids::PERM_TEAM_DELETE,
            ids::PERM_MATCH_UPDATE,
            ids::PERM_INJURY_MANAGE,
            ids::PERM_CONTRACT_NEGOTIATE,
            ids::PERM_FINANCE_UPDATE,
            ids::PERM_FINANCE_MANAGE,
            ids::PERM_ADMIN_SETTINGS,
            ids::PERM_ADMIN_ROLES,
        ]))
        .collect();

    let mut overlays: BTreeMap<Domain, BTreeMap<String, PermissionSet>> = BTreeMap::new();
    overlays.entry(Domain::Injury).or_default().insert(
        "physio".to_string(),
        set(&[
            ids::PERM_INJURY_READ,
            ids::PERM_INJURY_MANAGE,
            ids::PERM_PLAYER_READ,
        ]),
    );
    overlays.entry(Domain::Training).or_default().insert(
        "fitness_coach".to_string(),
        set(&[
            ids::PERM_TRAINING_SCHEDULE,
            ids::PERM_TRAINING_UPDATE,
            ids::PERM_ANALYTICS_VIEW,
        ]),
    );
    overlays.entry(Domain::Team).or_default().insert(
        "captain".to_string(),
        set(&[ids::PERM_ANNOUNCEMENT_CREATE, ids::PERM_TRAINING_SCHEDULE]),
    );
    overlays.entry(Domain::Finance).or_default().insert(
        "treasurer".to_string(),
        set(&[ids::PERM_FINANCE_READ, ids::PERM_FINANCE_UPDATE]),
    );

    // Tiers extend each other so the superset-chain invariant holds by
    // construction.
    let free = set(&[
        ids::PERM_TEAM_READ,
        ids::PERM_MATCH_READ,
        ids::PERM_ANNOUNCEMENT_READ,
    ]);
    let mut standard = free.clone();
    standard.extend(set(&[
        ids::PERM_TRAINING_READ,
        ids::PERM_PLAYER_READ,
        ids::PERM_LEAGUE_READ,
    ]));
    let mut premium = standard.clone();
    premium.extend(set(&[
        ids::PERM_ANALYTICS_VIEW,
        ids::PERM_TACTICS_READ,
        ids::PERM_INJURY_READ,
    ]));
    let mut elite = premium.clone();
    elite.extend(set(&[ids::PERM_ANALYTICS_EXPORT, ids::PERM_FINANCE_READ]));
    let tiers = BTreeMap::from([
        (Tier::Free, free),
        (Tier::Standard, standard),
        (Tier::Premium, premium),
        (Tier::Elite, elite),
    ]);

    let access = BTreeMap::from([
        (
            ResourceCategory::Injury,
            BTreeMap::from([
                (Role::ClubAdmin, AccessLevel::Manage),
                (Role::Manager, AccessLevel::Full),
                (Role::Coach, AccessLevel::Full),
                (Role::Guardian, AccessLevel::Limited),
                (Role::Player, AccessLevel::Limited),
            ]),
        ),
        (
            ResourceCategory::Contract,
            BTreeMap::from([
                (Role::ClubAdmin, AccessLevel::Manage),
                (Role::Manager, AccessLevel::Manage),
                (Role::Coach, AccessLevel::Limited),
                (Role::Player, AccessLevel::Limited),
            ]),
        ),
        (
            ResourceCategory::Finance,
            BTreeMap::from([
                (Role::ClubAdmin, AccessLevel::Manage),
                (Role::Manager, AccessLevel::Full),
            ]),
        ),
    ]);

    let team_actions = BTreeMap::from([
        (
            TeamAction::ManageLineup,
            perms(&[ids::PERM_TEAM_UPDATE, ids::PERM_TACTICS_EDIT]),
        ),
        (
            TeamAction::ScheduleTraining,
            perms(&[ids::PERM_TRAINING_SCHEDULE, ids::PERM_TEAM_UPDATE]),
        ),
        (
            TeamAction::ScheduleMatch,
            perms(&[ids::PERM_MATCH_SCHEDULE]),
        ),
        (
            TeamAction::RecordResult,
            perms(&[ids::PERM_MATCH_RECORD_RESULT, ids::PERM_MATCH_UPDATE]),
        ),
        (
            TeamAction::InvitePlayer,
            perms(&[ids::PERM_PLAYER_REGISTER, ids::PERM_TEAM_UPDATE]),
        ),
        (
            TeamAction::ReleasePlayer,
            perms(&[ids::PERM_PLAYER_RELEASE, ids::PERM_CONTRACT_MANAGE]),
        ),
        (
            TeamAction::PostAnnouncement,
            perms(&[ids::PERM_ANNOUNCEMENT_CREATE, ids::PERM_ANNOUNCEMENT_MANAGE]),
        ),
        (
            TeamAction::RegisterForLeague,
            perms(&[ids::PERM_LEAGUE_REGISTER, ids::PERM_TEAM_UPDATE]),
        ),
    ]);

    let exports = BTreeMap::from([
        (
            ExportDataType::PlayerList,
            perms(&[ids::PERM_PLAYER_READ, ids::PERM_ANALYTICS_EXPORT]),
        ),
        (
            ExportDataType::MatchHistory,
            perms(&[ids::PERM_MATCH_READ, ids::PERM_ANALYTICS_EXPORT]),
        ),
        (
            ExportDataType::TrainingLog,
            perms(&[ids::PERM_TRAINING_READ, ids::PERM_ANALYTICS_EXPORT]),
        ),
        (
            ExportDataType::InjuryLog,
            perms(&[ids::PERM_INJURY_READ, ids::PERM_ANALYTICS_EXPORT]),
        ),
        (
            ExportDataType::FinanceReport,
            perms(&[ids::PERM_FINANCE_READ, ids::PERM_ANALYTICS_EXPORT]),
        ),
    ]);

    PolicyTables {
        hierarchy: fixture_hierarchy(),
        catalog,
        base_policy,
        overlays,
        tiers,
        access,
        team_actions,
        exports,
    }
}
