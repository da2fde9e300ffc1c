//! Public facade over the pitchgate decision engine.
//!
//! Most consumers only need the engine, the context type, and the identifier
//! enums; pull in `pitchgate-settings` as well to construct validated tables
//! from configuration.

#![forbid(unsafe_code)]

pub use pitchgate_domain::{
    ActorContext, PermissionSet, PolicyEngine, PolicyTables, ResourceClaim, RoleHierarchy,
};
pub use pitchgate_types::{
    AccessLevel, AuditEnvelope, Domain, ExportDataType, OwnedResource, Permission,
    PermissionSummary, ResourceCategory, Role, TeamAction, Tier, ids,
};
