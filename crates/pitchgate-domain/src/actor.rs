use pitchgate_types::{Domain, ResourceCategory, Role, Tier};

/// Request-scoped description of the acting identity.
///
/// Built by the authenticated calling layer once per request and discarded
/// after; the engine never stores one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorContext {
    pub role: Role,
    pub tier: Tier,
    /// Secondary, domain-scoped title. Contributes permissions on top of the
    /// base role; carries no seniority.
    pub overlay: Option<(Domain, String)>,
    /// Present only when the request targets one concrete sensitive resource.
    pub resource: Option<ResourceClaim>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceClaim {
    pub category: ResourceCategory,
    pub is_owner: bool,
}

impl ActorContext {
    pub fn new(role: Role, tier: Tier) -> Self {
        Self {
            role,
            tier,
            overlay: None,
            resource: None,
        }
    }

    /// Overlay titles are normalized the same way permission tokens are:
    /// trimmed, ASCII lowercase.
    pub fn with_overlay(mut self, domain: Domain, title: impl AsRef<str>) -> Self {
        self.overlay = Some((domain, title.as_ref().trim().to_ascii_lowercase()));
        self
    }

    pub fn with_resource(mut self, category: ResourceCategory, is_owner: bool) -> Self {
        self.resource = Some(ResourceClaim { category, is_owner });
        self
    }

    pub fn overlay_ref(&self) -> Option<(Domain, &str)> {
        self.overlay.as_ref().map(|(d, t)| (*d, t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_title_is_normalized() {
        let ctx = ActorContext::new(Role::Coach, Tier::Standard)
            .with_overlay(Domain::Injury, "  Physio ");
        assert_eq!(ctx.overlay_ref(), Some((Domain::Injury, "physio")));
    }

    #[test]
    fn resource_claim_round_trip() {
        let ctx = ActorContext::new(Role::Player, Tier::Free)
            .with_resource(ResourceCategory::Injury, true);
        let claim = ctx.resource.expect("claim set");
        assert_eq!(claim.category, ResourceCategory::Injury);
        assert!(claim.is_owner);
    }
}
