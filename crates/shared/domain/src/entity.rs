//! Behaviour shared by every persisted entity.

/// A persisted record with a server-assigned identifier.
///
/// Generic layers (repositories, services, REST resources) only need the
/// entity name and access to the identifier, so this is all the trait exposes.
pub trait DomainEntity {
    /// Singular entity name (`"building"`, `"floor"`, `"apartment"`)
    const ENTITY_NAME: &'static str;

    /// Server-assigned identifier, `None` until persisted
    fn id(&self) -> Option<i64>;

    /// Identity-based equality: only two persisted instances with the same id
    /// are equal. Unsaved instances are never equal to anything.
    fn same_identity(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}
