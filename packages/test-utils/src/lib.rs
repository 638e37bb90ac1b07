//! Shared test utilities for the cats API workspace
//!
//! Mock implementations of external services for testing without network
//! dependencies.
//!
//! # Mock Services
//!
//! - [`MockAuthServer`] - Mock authentication / user-management service
//!
//! # Example
//!
//! ```rust,ignore
//! use cats_test_utils::{MockAuthServer, UserFixture};
//!
//! #[tokio::test]
//! async fn test_with_mock_auth() {
//!     let auth = MockAuthServer::start().await;
//!     auth.mock_users(vec![UserFixture::user("u1", "tom")]).await;
//!
//!     // Use auth.url() as AUTH_URL
//! }
//! ```

mod auth;

pub use auth::{MockAuthServer, UserFixture};
