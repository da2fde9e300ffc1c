//! Closed identifier sets: roles, tiers, domains, access grades.
//!
//! Every enum here offers `parse` (trimmed, case-insensitive) and `as_str`.
//! Parsing is a boundary concern: config resolution and the CLI call `parse`;
//! the engine itself only compares enum values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary organizational title of an actor.
///
/// Declaration order is descending seniority; the actual integer level per
/// role is table data, not hard-coded here.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ClubAdmin,
    Manager,
    Coach,
    Guardian,
    Player,
    Supporter,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::ClubAdmin,
        Role::Manager,
        Role::Coach,
        Role::Guardian,
        Role::Player,
        Role::Supporter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ClubAdmin => "club_admin",
            Role::Manager => "manager",
            Role::Coach => "coach",
            Role::Guardian => "guardian",
            Role::Player => "player",
            Role::Supporter => "supporter",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "club_admin" => Some(Role::ClubAdmin),
            "manager" => Some(Role::Manager),
            "coach" => Some(Role::Coach),
            "guardian" => Some(Role::Guardian),
            "player" => Some(Role::Player),
            "supporter" => Some(Role::Supporter),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscription tier. Declaration order is ascending rank, and the derived
/// `Ord` is what `meets_tier_requirement` compares; this is only sound because
/// the tier permission sets are validated as a superset chain at load time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Free,
    Standard,
    Premium,
    Elite,
}

impl Tier {
    pub const ALL: &'static [Tier] = &[Tier::Free, Tier::Standard, Tier::Premium, Tier::Elite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
            Tier::Elite => "elite",
        }
    }

    pub fn parse(s: &str) -> Option<Tier> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(Tier::Free),
            "standard" => Some(Tier::Standard),
            "premium" => Some(Tier::Premium),
            "elite" => Some(Tier::Elite),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered access grade for sensitive resource categories.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    None,
    Limited,
    Full,
    Manage,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Limited => "limited",
            AccessLevel::Full => "full",
            AccessLevel::Manage => "manage",
        }
    }

    pub fn parse(s: &str) -> Option<AccessLevel> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Some(AccessLevel::None),
            "limited" => Some(AccessLevel::Limited),
            "full" => Some(AccessLevel::Full),
            "manage" => Some(AccessLevel::Manage),
            _ => None,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource domain a permission token is scoped to (the part before `:`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    User,
    Team,
    Player,
    Match,
    Training,
    Injury,
    Contract,
    Finance,
    Analytics,
    Tactics,
    Announcement,
    League,
    Admin,
}

impl Domain {
    pub const ALL: &'static [Domain] = &[
        Domain::User,
        Domain::Team,
        Domain::Player,
        Domain::Match,
        Domain::Training,
        Domain::Injury,
        Domain::Contract,
        Domain::Finance,
        Domain::Analytics,
        Domain::Tactics,
        Domain::Announcement,
        Domain::League,
        Domain::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::User => "user",
            Domain::Team => "team",
            Domain::Player => "player",
            Domain::Match => "match",
            Domain::Training => "training",
            Domain::Injury => "injury",
            Domain::Contract => "contract",
            Domain::Finance => "finance",
            Domain::Analytics => "analytics",
            Domain::Tactics => "tactics",
            Domain::Announcement => "announcement",
            Domain::League => "league",
            Domain::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Domain> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Domain::User),
            "team" => Some(Domain::Team),
            "player" => Some(Domain::Player),
            "match" => Some(Domain::Match),
            "training" => Some(Domain::Training),
            "injury" => Some(Domain::Injury),
            "contract" => Some(Domain::Contract),
            "finance" => Some(Domain::Finance),
            "analytics" => Some(Domain::Analytics),
            "tactics" => Some(Domain::Tactics),
            "announcement" => Some(Domain::Announcement),
            "league" => Some(Domain::League),
            "admin" => Some(Domain::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sensitive resource categories graded by the access matrices.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Injury,
    Contract,
    Finance,
}

impl ResourceCategory {
    pub const ALL: &'static [ResourceCategory] = &[
        ResourceCategory::Injury,
        ResourceCategory::Contract,
        ResourceCategory::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Injury => "injury",
            ResourceCategory::Contract => "contract",
            ResourceCategory::Finance => "finance",
        }
    }

    pub fn parse(s: &str) -> Option<ResourceCategory> {
        match s.trim().to_ascii_lowercase().as_str() {
            "injury" => Some(ResourceCategory::Injury),
            "contract" => Some(ResourceCategory::Contract),
            "finance" => Some(ResourceCategory::Finance),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource kinds a subject can own outright (their own record).
///
/// This is the key type of the ownership override allow-list; see the engine
/// for the one place it can override an access matrix.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OwnedResource {
    Injury,
    Contract,
    Profile,
}

impl OwnedResource {
    /// The ownable counterpart of a sensitive category, if any. Finance
    /// records have no individual subject, so they never take the ownership
    /// path.
    pub fn from_category(category: ResourceCategory) -> Option<OwnedResource> {
        match category {
            ResourceCategory::Injury => Some(OwnedResource::Injury),
            ResourceCategory::Contract => Some(OwnedResource::Contract),
            ResourceCategory::Finance => None,
        }
    }

    /// The read permission consulted for non-owners. Profile records live in
    /// the `user` domain, so `profile` maps onto `user:read`.
    pub fn read_permission(&self) -> &'static str {
        match self {
            OwnedResource::Injury => crate::ids::PERM_INJURY_READ,
            OwnedResource::Contract => crate::ids::PERM_CONTRACT_READ,
            OwnedResource::Profile => crate::ids::PERM_USER_READ,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OwnedResource::Injury => "injury",
            OwnedResource::Contract => "contract",
            OwnedResource::Profile => "profile",
        }
    }

    pub fn parse(s: &str) -> Option<OwnedResource> {
        match s.trim().to_ascii_lowercase().as_str() {
            "injury" => Some(OwnedResource::Injury),
            "contract" => Some(OwnedResource::Contract),
            "profile" => Some(OwnedResource::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for OwnedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team-level actions gated by any-of permission lists.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TeamAction {
    ManageLineup,
    ScheduleTraining,
    ScheduleMatch,
    RecordResult,
    InvitePlayer,
    ReleasePlayer,
    PostAnnouncement,
    RegisterForLeague,
}

impl TeamAction {
    pub const ALL: &'static [TeamAction] = &[
        TeamAction::ManageLineup,
        TeamAction::ScheduleTraining,
        TeamAction::ScheduleMatch,
        TeamAction::RecordResult,
        TeamAction::InvitePlayer,
        TeamAction::ReleasePlayer,
        TeamAction::PostAnnouncement,
        TeamAction::RegisterForLeague,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamAction::ManageLineup => "manage_lineup",
            TeamAction::ScheduleTraining => "schedule_training",
            TeamAction::ScheduleMatch => "schedule_match",
            TeamAction::RecordResult => "record_result",
            TeamAction::InvitePlayer => "invite_player",
            TeamAction::ReleasePlayer => "release_player",
            TeamAction::PostAnnouncement => "post_announcement",
            TeamAction::RegisterForLeague => "register_for_league",
        }
    }

    pub fn parse(s: &str) -> Option<TeamAction> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manage_lineup" => Some(TeamAction::ManageLineup),
            "schedule_training" => Some(TeamAction::ScheduleTraining),
            "schedule_match" => Some(TeamAction::ScheduleMatch),
            "record_result" => Some(TeamAction::RecordResult),
            "invite_player" => Some(TeamAction::InvitePlayer),
            "release_player" => Some(TeamAction::ReleasePlayer),
            "post_announcement" => Some(TeamAction::PostAnnouncement),
            "register_for_league" => Some(TeamAction::RegisterForLeague),
            _ => None,
        }
    }
}

impl fmt::Display for TeamAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exportable data sets gated by all-of permission lists.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ExportDataType {
    PlayerList,
    MatchHistory,
    TrainingLog,
    InjuryLog,
    FinanceReport,
}

impl ExportDataType {
    pub const ALL: &'static [ExportDataType] = &[
        ExportDataType::PlayerList,
        ExportDataType::MatchHistory,
        ExportDataType::TrainingLog,
        ExportDataType::InjuryLog,
        ExportDataType::FinanceReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportDataType::PlayerList => "player_list",
            ExportDataType::MatchHistory => "match_history",
            ExportDataType::TrainingLog => "training_log",
            ExportDataType::InjuryLog => "injury_log",
            ExportDataType::FinanceReport => "finance_report",
        }
    }

    pub fn parse(s: &str) -> Option<ExportDataType> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player_list" => Some(ExportDataType::PlayerList),
            "match_history" => Some(ExportDataType::MatchHistory),
            "training_log" => Some(ExportDataType::TrainingLog),
            "injury_log" => Some(ExportDataType::InjuryLog),
            "finance_report" => Some(ExportDataType::FinanceReport),
            _ => None,
        }
    }
}

impl fmt::Display for ExportDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_normalizes_case_and_whitespace() {
        assert_eq!(Role::parse("  Club_Admin "), Some(Role::ClubAdmin));
        assert_eq!(Role::parse("MANAGER"), Some(Role::Manager));
        assert_eq!(Role::parse("physio"), None);
    }

    #[test]
    fn tier_order_is_ascending() {
        assert!(Tier::Free < Tier::Standard);
        assert!(Tier::Standard < Tier::Premium);
        assert!(Tier::Premium < Tier::Elite);
    }

    #[test]
    fn access_level_order_is_none_limited_full_manage() {
        assert!(AccessLevel::None < AccessLevel::Limited);
        assert!(AccessLevel::Limited < AccessLevel::Full);
        assert!(AccessLevel::Full < AccessLevel::Manage);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
        for tier in Tier::ALL {
            assert_eq!(Tier::parse(tier.as_str()), Some(*tier));
        }
        for domain in Domain::ALL {
            assert_eq!(Domain::parse(domain.as_str()), Some(*domain));
        }
        for action in TeamAction::ALL {
            assert_eq!(TeamAction::parse(action.as_str()), Some(*action));
        }
        for data in ExportDataType::ALL {
            assert_eq!(ExportDataType::parse(data.as_str()), Some(*data));
        }
    }

    #[test]
    fn owned_resource_read_permissions() {
        assert_eq!(OwnedResource::Injury.read_permission(), "injury:read");
        assert_eq!(OwnedResource::Contract.read_permission(), "contract:read");
        assert_eq!(OwnedResource::Profile.read_permission(), "user:read");
    }

    #[test]
    fn finance_records_are_never_individually_owned() {
        assert_eq!(
            OwnedResource::from_category(ResourceCategory::Injury),
            Some(OwnedResource::Injury)
        );
        assert_eq!(OwnedResource::from_category(ResourceCategory::Finance), None);
    }
}
