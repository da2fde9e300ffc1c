//! Property-based tests for the decision engine.
//!
//! These suites pin the invariants that make the engine safe to compose:
//! - fail-closed answers for unknown inputs
//! - OR/AND composition of permission lists
//! - the fixed point between action predicates and action listings
//! - tier chain monotonicity implications
//! - hierarchy-derived audience rules

use crate::engine::PolicyEngine;
use crate::test_support::fixture_tables;
use pitchgate_types::{AccessLevel, Domain, ResourceCategory, Role, TeamAction, Tier, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::ALL.to_vec())
}

fn arb_category() -> impl Strategy<Value = ResourceCategory> {
    prop::sample::select(ResourceCategory::ALL.to_vec())
}

/// Tokens the fixture tables actually grant somewhere.
fn arb_known_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        ids::PERM_USER_READ,
        ids::PERM_TEAM_READ,
        ids::PERM_TEAM_UPDATE,
        ids::PERM_PLAYER_READ,
        ids::PERM_MATCH_READ,
        ids::PERM_MATCH_SCHEDULE,
        ids::PERM_TRAINING_READ,
        ids::PERM_INJURY_READ,
        ids::PERM_CONTRACT_READ,
        ids::PERM_FINANCE_READ,
        ids::PERM_ANALYTICS_VIEW,
        ids::PERM_ANALYTICS_EXPORT,
        ids::PERM_TACTICS_EDIT,
        ids::PERM_ANNOUNCEMENT_CREATE,
        ids::PERM_LEAGUE_REGISTER,
        ids::PERM_ADMIN_SETTINGS,
    ])
}

/// Tokens with an unrecognized domain prefix; guaranteed absent from every
/// table.
fn arb_unknown_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("z[a-z]{2,10}:[a-z]{2,10}").unwrap()
}

fn arb_token_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            arb_known_token().prop_map(str::to_string),
            arb_unknown_token(),
        ],
        0..8,
    )
}

fn engine() -> PolicyEngine {
    PolicyEngine::new(fixture_tables())
}

// ============================================================================
// Fail-closed and wildcard behavior
// ============================================================================

proptest! {
    /// The super-role satisfies every token, cataloged or not.
    #[test]
    fn super_role_matches_any_token(token in arb_unknown_token()) {
        let engine = engine();
        prop_assert!(engine.has_permission(Role::ClubAdmin, &token));
    }

    /// Nobody but the super-role gets a token no table grants.
    #[test]
    fn unknown_tokens_are_denied(role in arb_role(), token in arb_unknown_token()) {
        let engine = engine();
        prop_assume!(role != Role::ClubAdmin);
        prop_assert!(!engine.has_permission(role, &token));
    }

    /// A non-super role holds a token iff its base set contains it.
    #[test]
    fn has_permission_is_base_set_membership(role in arb_role(), token in arb_known_token()) {
        let engine = engine();
        prop_assume!(role != Role::ClubAdmin);
        let in_set = engine.tables().base_policy[&role].contains(token);
        prop_assert_eq!(engine.has_permission(role, token), in_set);
    }

    /// Tier lookups are as fail-closed as role lookups.
    #[test]
    fn unknown_tokens_never_pass_tier_gates(tier in arb_tier(), token in arb_unknown_token()) {
        let engine = engine();
        prop_assert!(!engine.tier_allows(tier, &token));
    }
}

// ============================================================================
// OR/AND composition
// ============================================================================

proptest! {
    #[test]
    fn has_any_is_or_over_singles(role in arb_role(), tokens in arb_token_list()) {
        let engine = engine();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let expected = refs.iter().any(|t| engine.has_permission(role, t));
        prop_assert_eq!(engine.has_any_permission(role, &refs), expected);
    }

    #[test]
    fn has_all_is_and_over_singles(role in arb_role(), tokens in arb_token_list()) {
        let engine = engine();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let expected = refs.iter().all(|t| engine.has_permission(role, t));
        prop_assert_eq!(engine.has_all_permissions(role, &refs), expected);
    }
}

// ============================================================================
// Derived queries
// ============================================================================

proptest! {
    /// `available_team_actions` is exactly the set the predicate accepts.
    #[test]
    fn available_actions_fixed_point(role in arb_role()) {
        let engine = engine();
        let listed = engine.available_team_actions(role);
        for action in TeamAction::ALL {
            prop_assert_eq!(
                listed.contains(action),
                engine.can_perform_team_action(role, *action)
            );
        }
    }

    /// Exportability never exceeds what the AND of requirements allows.
    #[test]
    fn exports_require_all_listed_tokens(role in arb_role()) {
        let engine = engine();
        for data_type in engine.exportable_data_types(role) {
            let reqs = &engine.tables().exports[&data_type];
            prop_assert!(!reqs.is_empty());
            for req in reqs {
                prop_assert!(engine.has_permission(role, req.as_str()));
            }
        }
    }

    /// Public or untargeted announcements are visible to every role;
    /// targeted ones exactly to the targeted roles.
    #[test]
    fn announcement_visibility_rules(
        viewer in arb_role(),
        targets in prop::collection::vec(arb_role(), 0..4),
        is_public in any::<bool>(),
    ) {
        let engine = engine();
        let visible = engine.can_view_announcement(viewer, &targets, is_public);
        if is_public || targets.is_empty() {
            prop_assert!(visible);
        } else {
            prop_assert_eq!(visible, targets.contains(&viewer));
        }
    }

    /// The audience always includes the author and never a strict senior.
    #[test]
    fn targetable_roles_bounds(creator in arb_role()) {
        let engine = engine();
        let targets = engine.targetable_roles(creator);
        prop_assert!(targets.contains(&creator));
        for role in &targets {
            prop_assert!(!engine.is_more_senior(*role, creator));
        }
    }
}

// ============================================================================
// Tiers and hierarchy
// ============================================================================

proptest! {
    /// Monotone chain: anything a tier allows, every higher tier allows.
    #[test]
    fn tier_chain_is_monotone(token in arb_known_token()) {
        let engine = engine();
        for window in Tier::ALL.windows(2) {
            let (lower, higher) = (window[0], window[1]);
            if engine.tier_allows(lower, token) {
                prop_assert!(engine.tier_allows(higher, token));
            }
        }
    }

    /// Ordinal comparison agrees with position in the tier order.
    #[test]
    fn tier_requirement_matches_rank(user in arb_tier(), required in arb_tier()) {
        let engine = engine();
        let rank = |t: Tier| Tier::ALL.iter().position(|x| *x == t).unwrap();
        prop_assert_eq!(
            engine.meets_tier_requirement(user, required),
            rank(user) >= rank(required)
        );
    }

    /// NONE is a trivial lower bound for every role and category.
    #[test]
    fn access_level_none_always_met(role in arb_role(), category in arb_category()) {
        let engine = engine();
        prop_assert!(engine.has_access_level(role, category, AccessLevel::None));
    }

    /// `highest_of` returns a member of the input carrying the maximum level.
    #[test]
    fn highest_of_returns_a_maximum(roles in prop::collection::vec(arb_role(), 0..6)) {
        let engine = engine();
        match engine.highest_of(roles.clone()) {
            None => prop_assert!(roles.is_empty()),
            Some(best) => {
                prop_assert!(roles.contains(&best));
                for role in &roles {
                    prop_assert!(engine.level(*role) <= engine.level(best));
                }
            }
        }
    }

    /// Without an overlay the effective set is the base set; with one it can
    /// only grow.
    #[test]
    fn effective_permissions_only_grow(role in arb_role()) {
        let engine = engine();
        let base = engine.effective_permissions(role, None);
        if role != Role::ClubAdmin {
            prop_assert_eq!(&base, &engine.tables().base_policy[&role]);
        }
        let widened = engine.effective_permissions(role, Some((Domain::Injury, "physio")));
        prop_assert!(widened.is_superset(&base));
    }
}
