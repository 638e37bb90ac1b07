//! Role-based guard for GraphQL mutations

use async_graphql::{Context, ErrorExtensions, Guard};
use tracing::debug;

use crate::error::ApiError;
use crate::models::user::{UserData, UserRole};

/// Rejects callers that are anonymous or lack the required role
///
/// Both cases fail with `UNAUTHORIZED`.
///
/// # Example
///
/// ```ignore
/// #[Object]
/// impl UserMutation {
///     #[graphql(guard = "RoleGuard::new(UserRole::Admin)")]
///     async fn delete_user_as_admin(&self, ctx: &Context<'_>, id: ID) -> Result<UserResponse> {
///         // ...
///     }
/// }
/// ```
pub struct RoleGuard {
    role: UserRole,
}

impl RoleGuard {
    /// Create a new role guard
    pub fn new(role: UserRole) -> Self {
        Self { role }
    }
}

impl Guard for RoleGuard {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        match ctx.data_opt::<UserData>() {
            Some(data) if data.user.role == self.role => Ok(()),
            Some(data) => {
                debug!(
                    user_id = %data.user.id,
                    required = ?self.role,
                    actual = ?data.user.role,
                    "Role guard rejected caller"
                );
                Err(ApiError::Unauthorized.extend())
            }
            None => {
                debug!(required = ?self.role, "Role guard rejected anonymous caller");
                Err(ApiError::Unauthorized.extend())
            }
        }
    }
}
