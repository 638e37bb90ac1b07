//! Ownership and role checks
//!
//! Cats may be changed by their owner or by an admin. Instead of branching in
//! every resolver, mutations build a [`CatFilter`] scoped to the caller: an
//! admin's filter matches on id alone, anyone else's also requires ownership.
//! A filter that matches nothing is a soft failure, not an authorization
//! error.

use uuid::Uuid;

use crate::models::cat::Cat;
use crate::models::user::AuthenticatedUser;

/// Whether `identity` may change a resource owned by `resource_owner_id`
pub fn can_modify(identity: &AuthenticatedUser, resource_owner_id: &str) -> bool {
    identity.is_admin() || identity.id == resource_owner_id
}

/// Selects a single cat on behalf of a caller
#[derive(Debug, Clone, Copy)]
pub struct CatFilter<'a> {
    pub id: Uuid,
    identity: &'a AuthenticatedUser,
}

impl<'a> CatFilter<'a> {
    /// Filter on `id`, restricted to the caller's own cats unless they are an admin
    pub fn scoped(id: Uuid, identity: &'a AuthenticatedUser) -> Self {
        Self { id, identity }
    }

    /// Owner the store must match, or `None` when any owner is acceptable
    pub fn owner(&self) -> Option<&'a str> {
        if self.identity.is_admin() {
            None
        } else {
            Some(self.identity.id.as_str())
        }
    }

    /// Whether the filter was built for an admin
    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }

    /// Check a stored cat against the filter
    pub fn matches(&self, cat: &Cat) -> bool {
        cat.id == self.id && can_modify(self.identity, &cat.owner)
    }

    /// Soft-fail message for an operation that matched nothing, e.g. "updated"
    pub fn miss_message(&self, verb: &str) -> String {
        if self.is_admin() {
            format!("Cat not {} by admin", verb)
        } else {
            format!("Cat not {}", verb)
        }
    }
}
