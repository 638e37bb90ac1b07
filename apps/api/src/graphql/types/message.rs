//! Soft-fail payload

use async_graphql::SimpleObject;

/// Returned instead of a record when an operation found nothing to act on
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
