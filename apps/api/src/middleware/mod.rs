//! Request middleware for the cats API
//!
//! - `TokenVerifier`: turns a bearer token into the request's `UserData`

pub mod auth;

pub use auth::{extract_bearer_token, TokenVerifier};
