//! GraphQL guards for the cats API
//!
//! Guards run before a resolver body, so a rejected caller never reaches the
//! store.

mod role;

pub use role::RoleGuard;
