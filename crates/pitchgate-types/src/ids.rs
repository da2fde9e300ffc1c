//! Stable permission tokens and configuration issue codes.
//!
//! Tokens are `<domain>:<action>`. The catalog below is the full set the
//! default tables grant from; config files may register additional tokens as
//! long as the domain prefix is one of the closed domains.

// user
pub const PERM_USER_READ: &str = "user:read";
pub const PERM_USER_UPDATE: &str = "user:update";
pub const PERM_USER_MANAGE: &str = "user:manage";

// team
pub const PERM_TEAM_READ: &str = "team:read";
pub const PERM_TEAM_CREATE: &str = "team:create";
pub const PERM_TEAM_UPDATE: &str = "team:update";
pub const PERM_TEAM_DELETE: &str = "team:delete";

// player
pub const PERM_PLAYER_READ: &str = "player:read";
pub const PERM_PLAYER_REGISTER: &str = "player:register";
pub const PERM_PLAYER_UPDATE: &str = "player:update";
pub const PERM_PLAYER_RELEASE: &str = "player:release";

// match
pub const PERM_MATCH_READ: &str = "match:read";
pub const PERM_MATCH_SCHEDULE: &str = "match:schedule";
pub const PERM_MATCH_UPDATE: &str = "match:update";
pub const PERM_MATCH_RECORD_RESULT: &str = "match:record_result";

// training
pub const PERM_TRAINING_READ: &str = "training:read";
pub const PERM_TRAINING_SCHEDULE: &str = "training:schedule";
pub const PERM_TRAINING_UPDATE: &str = "training:update";

// injury
pub const PERM_INJURY_READ: &str = "injury:read";
pub const PERM_INJURY_REPORT: &str = "injury:report";
pub const PERM_INJURY_MANAGE: &str = "injury:manage";

// contract
pub const PERM_CONTRACT_READ: &str = "contract:read";
pub const PERM_CONTRACT_NEGOTIATE: &str = "contract:negotiate";
pub const PERM_CONTRACT_MANAGE: &str = "contract:manage";

// finance
pub const PERM_FINANCE_READ: &str = "finance:read";
pub const PERM_FINANCE_UPDATE: &str = "finance:update";
pub const PERM_FINANCE_MANAGE: &str = "finance:manage";

// analytics
pub const PERM_ANALYTICS_VIEW: &str = "analytics:view";
pub const PERM_ANALYTICS_EXPORT: &str = "analytics:export";

// tactics
pub const PERM_TACTICS_READ: &str = "tactics:read";
pub const PERM_TACTICS_EDIT: &str = "tactics:edit";

// announcement
pub const PERM_ANNOUNCEMENT_READ: &str = "announcement:read";
pub const PERM_ANNOUNCEMENT_CREATE: &str = "announcement:create";
pub const PERM_ANNOUNCEMENT_MANAGE: &str = "announcement:manage";

// league
pub const PERM_LEAGUE_READ: &str = "league:read";
pub const PERM_LEAGUE_REGISTER: &str = "league:register";

// admin
pub const PERM_ADMIN_SETTINGS: &str = "admin:settings";
pub const PERM_ADMIN_ROLES: &str = "admin:roles";

// Configuration issue codes (load-time validation).
pub const CODE_UNKNOWN_ROLE: &str = "unknown_role";
pub const CODE_UNKNOWN_SUPER_ROLE: &str = "unknown_super_role";
pub const CODE_UNKNOWN_TIER: &str = "unknown_tier";
pub const CODE_UNKNOWN_DOMAIN: &str = "unknown_domain";
pub const CODE_UNKNOWN_CATEGORY: &str = "unknown_category";
pub const CODE_UNKNOWN_ACCESS_LEVEL: &str = "unknown_access_level";
pub const CODE_UNKNOWN_TEAM_ACTION: &str = "unknown_team_action";
pub const CODE_UNKNOWN_EXPORT: &str = "unknown_export";
pub const CODE_MALFORMED_PERMISSION: &str = "malformed_permission";
pub const CODE_DUPLICATE_PERMISSION: &str = "duplicate_permission";
pub const CODE_UNKNOWN_PERMISSION: &str = "unknown_permission";
pub const CODE_MISSING_ROLE_POLICY: &str = "missing_role_policy";
pub const CODE_MISSING_TIER_ENTRY: &str = "missing_tier_entry";
pub const CODE_TIER_CHAIN_BROKEN: &str = "tier_chain_broken";
