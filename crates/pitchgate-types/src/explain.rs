//! Explain registry for permission domains.
//!
//! Maps a domain name or a full permission token to a human-readable
//! description of what permissions in that domain grant.

use crate::catalog::{Domain, Role};
use crate::token::Permission;

/// Explanation entry for a permission domain.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short display name.
    pub title: &'static str,
    /// What tokens in this domain control.
    pub description: &'static str,
    /// Who typically holds these grants in the default catalog.
    pub typical_holders: &'static str,
}

/// Look up an explanation by domain name (`injury`) or full token
/// (`injury:manage`). Returns `None` for unrecognized identifiers.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let domain = if identifier.contains(':') {
        Permission::new(identifier).domain()?
    } else {
        Domain::parse(identifier)?
    };
    Some(explain_domain(domain))
}

/// List all known domain names.
pub fn all_domains() -> Vec<&'static str> {
    Domain::ALL.iter().map(|d| d.as_str()).collect()
}

/// List all known role names.
pub fn all_roles() -> Vec<&'static str> {
    Role::ALL.iter().map(|r| r.as_str()).collect()
}

fn explain_domain(domain: Domain) -> Explanation {
    match domain {
        Domain::User => Explanation {
            title: "User accounts",
            description: "\
Reading and editing member profiles. `user:manage` additionally covers \
deactivating accounts and resetting credentials.",
            typical_holders: "club_admin (manage), manager (read), every member for their own profile via the ownership override",
        },
        Domain::Team => Explanation {
            title: "Teams",
            description: "\
Team records: rosters, kits, home ground. `team:update` is the broad \
team-administration grant several team actions accept as an alternative.",
            typical_holders: "club_admin, manager; read for everyone",
        },
        Domain::Player => Explanation {
            title: "Players",
            description: "\
Player registrations and profiles. `player:release` ends a registration and \
is deliberately separate from `player:update`.",
            typical_holders: "manager (full), coach (read/update)",
        },
        Domain::Match => Explanation {
            title: "Matches",
            description: "\
Fixtures and results. Scheduling and result recording are separate tokens so \
match-day staff can record without being able to reschedule.",
            typical_holders: "manager, coach (schedule/record)",
        },
        Domain::Training => Explanation {
            title: "Training",
            description: "Training sessions: viewing the plan, scheduling, editing drills.",
            typical_holders: "coach; fitness_coach overlay adds scheduling",
        },
        Domain::Injury => Explanation {
            title: "Injuries",
            description: "\
Injury reports. These are sensitive records: token checks combine with the \
injury access matrix, and subjects always reach their own reports.",
            typical_holders: "coach (report), physio overlay (manage)",
        },
        Domain::Contract => Explanation {
            title: "Contracts",
            description: "\
Player contracts. Negotiation and management are separate tokens; the \
contract access matrix grades how much of a record each role sees.",
            typical_holders: "manager; players see their own via the ownership override",
        },
        Domain::Finance => Explanation {
            title: "Finances",
            description: "Club budgets, fees, and payouts. Graded by the finance access matrix.",
            typical_holders: "club_admin (manage), manager (read/update), treasurer overlay",
        },
        Domain::Analytics => Explanation {
            title: "Analytics",
            description: "\
Performance dashboards and data export. `analytics:export` is required (in \
addition to the matching read token) for every bulk export.",
            typical_holders: "manager, performance_analyst overlay; premium tiers unlock viewing",
        },
        Domain::Tactics => Explanation {
            title: "Tactics",
            description: "Tactics boards and set-piece plans.",
            typical_holders: "coach (edit), player (read)",
        },
        Domain::Announcement => Explanation {
            title: "Announcements",
            description: "\
Club announcements. Visibility is decided per announcement (public flag and \
target roles), not by these tokens; the tokens gate authoring.",
            typical_holders: "manager (manage), coach and captain overlay (create)",
        },
        Domain::League => Explanation {
            title: "League",
            description: "League tables and team registration for competitions.",
            typical_holders: "manager (register); read widely held",
        },
        Domain::Admin => Explanation {
            title: "Administration",
            description: "Club-wide settings and role assignment. The most privileged domain.",
            typical_holders: "club_admin only",
        },
    }
}
