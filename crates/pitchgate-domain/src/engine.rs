use crate::actor::ActorContext;
use crate::tables::{PermissionSet, PolicyTables};
use pitchgate_types::{AccessLevel, Domain, OwnedResource, ResourceCategory, Role, Tier};

/// Resource kinds a subject (or their guardian) may always reach on their own
/// record. This is the single place where a blanket allow can override a
/// stricter access-matrix entry; keep it short and keep it here.
const OWN_RESOURCE_ALLOW: &[OwnedResource] = &[
    OwnedResource::Injury,
    OwnedResource::Contract,
    OwnedResource::Profile,
];

/// Roles acting on their own behalf (the resource's primary subject or their
/// guardian). Only these can take the ownership bypass above.
const SELF_SERVICE_ROLES: &[Role] = &[Role::Player, Role::Guardian];

/// The query surface over one immutable set of [`PolicyTables`].
///
/// Every method is a synchronous in-memory lookup; none returns an error.
/// Callers pass permission tokens as canonical `&str` (the `ids` constants or
/// already-normalized [`pitchgate_types::Permission`] values); anything else
/// simply fails closed.
#[derive(Clone, Debug)]
pub struct PolicyEngine {
    tables: PolicyTables,
}

impl PolicyEngine {
    pub fn new(tables: PolicyTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &PolicyTables {
        &self.tables
    }

    // --- role hierarchy ---

    pub fn level(&self, role: Role) -> u32 {
        self.tables.hierarchy.level(role)
    }

    pub fn is_more_senior(&self, a: Role, b: Role) -> bool {
        self.tables.hierarchy.is_more_senior(a, b)
    }

    /// See [`crate::tables::RoleHierarchy::highest_of`] for tie-breaking.
    pub fn highest_of(&self, roles: impl IntoIterator<Item = Role>) -> Option<Role> {
        self.tables.hierarchy.highest_of(roles)
    }

    // --- base permission resolution ---

    /// The super-role matches every token, including ones no table has heard
    /// of; everyone else needs the token in their base set.
    pub fn has_permission(&self, role: Role, permission: &str) -> bool {
        if role == self.tables.hierarchy.super_role {
            return true;
        }
        self.tables
            .base_policy
            .get(&role)
            .is_some_and(|set| set.contains(permission))
    }

    pub fn has_any_permission(&self, role: Role, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.has_permission(role, p))
    }

    pub fn has_all_permissions(&self, role: Role, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.has_permission(role, p))
    }

    // --- overlay composition ---

    /// The registered overlay set, or empty if unregistered. Overlays never
    /// satisfy a check on their own; they only widen a base role's set.
    pub fn overlay_permissions(&self, domain: Domain, title: &str) -> PermissionSet {
        self.tables
            .overlays
            .get(&domain)
            .and_then(|titles| titles.get(title))
            .cloned()
            .unwrap_or_default()
    }

    /// Base set union overlay set. For the super-role this is the whole
    /// catalog (the wildcard has no finite spelling; the catalog is the
    /// closest enumerable answer).
    pub fn effective_permissions(
        &self,
        role: Role,
        overlay: Option<(Domain, &str)>,
    ) -> PermissionSet {
        let mut set = if role == self.tables.hierarchy.super_role {
            self.tables.catalog.clone()
        } else {
            self.tables
                .base_policy
                .get(&role)
                .cloned()
                .unwrap_or_default()
        };
        if let Some((domain, title)) = overlay {
            if let Some(extra) = self
                .tables
                .overlays
                .get(&domain)
                .and_then(|titles| titles.get(title))
            {
                set.extend(extra.iter().cloned());
            }
        }
        set
    }

    /// Context-aware check: base role grant, or an overlay grant held by the
    /// same actor. No allocation on the hot path.
    pub fn allows(&self, ctx: &ActorContext, permission: &str) -> bool {
        if self.has_permission(ctx.role, permission) {
            return true;
        }
        match ctx.overlay_ref() {
            Some((domain, title)) => self
                .tables
                .overlays
                .get(&domain)
                .and_then(|titles| titles.get(title))
                .is_some_and(|set| set.contains(permission)),
            None => false,
        }
    }

    // --- tier gating ---

    /// Membership in the tier's gated set. Orthogonal to role permissions:
    /// the engine never ANDs the two axes implicitly; call sites pick the
    /// axis (or both) per feature.
    pub fn tier_allows(&self, tier: Tier, permission: &str) -> bool {
        self.tables
            .tiers
            .get(&tier)
            .is_some_and(|set| set.contains(permission))
    }

    /// Ordinal comparison, sound because the tier sets are validated as a
    /// monotonic superset chain at load time.
    pub fn meets_tier_requirement(&self, user_tier: Tier, required: Tier) -> bool {
        user_tier >= required
    }

    // --- sensitive-resource access grades ---

    pub fn access_level(&self, category: ResourceCategory, role: Role) -> AccessLevel {
        self.tables
            .access
            .get(&category)
            .and_then(|m| m.get(&role))
            .copied()
            .unwrap_or(AccessLevel::None)
    }

    pub fn has_access_level(
        &self,
        role: Role,
        category: ResourceCategory,
        required: AccessLevel,
    ) -> bool {
        self.access_level(category, role) >= required
    }

    /// Ownership override. Owners in a self-service role reach their own
    /// record for the allow-listed resource kinds unconditionally, bypassing
    /// the access matrix. Everyone else falls back to the resource's read
    /// permission.
    pub fn can_access_own_resource(
        &self,
        role: Role,
        resource: OwnedResource,
        is_owner: bool,
    ) -> bool {
        if is_owner && SELF_SERVICE_ROLES.contains(&role) && OWN_RESOURCE_ALLOW.contains(&resource)
        {
            return true;
        }
        self.has_permission(role, resource.read_permission())
    }

    /// Grade check for the context's claimed resource: the ownership override
    /// first, then the access matrix. Only meaningful when the request
    /// targets one concrete resource; a context without a claim fails closed.
    pub fn can_access_resource(&self, ctx: &ActorContext, required: AccessLevel) -> bool {
        let Some(claim) = ctx.resource else {
            return false;
        };
        if claim.is_owner
            && SELF_SERVICE_ROLES.contains(&ctx.role)
            && OwnedResource::from_category(claim.category)
                .is_some_and(|resource| OWN_RESOURCE_ALLOW.contains(&resource))
        {
            return true;
        }
        self.has_access_level(ctx.role, claim.category, required)
    }
}
