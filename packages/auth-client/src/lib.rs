//! Client for the external authentication / user-management service
//!
//! The service owns user accounts. This crate wraps the endpoints the API
//! consumes:
//! - `GET /users` and `GET /users/:id`
//! - `POST /users` (registration)
//! - `POST /auth/login`
//!
//! # Example
//!
//! ```rust,no_run
//! use cats_auth_client::{AuthClient, Credentials};
//! use cats_shared_config::AuthServiceConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthServiceConfig::with_url("http://localhost:3001/api/v1");
//! let client = AuthClient::new(&config)?;
//!
//! let users = client.get_users().await?;
//! for user in users {
//!     println!("{}: {}", user.id, user.user_name);
//! }
//!
//! let login = client
//!     .login(&Credentials::new("tom@example.com", "secret"))
//!     .await?;
//! println!("token: {}", login.token);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `AUTH_URL`: base URL of the auth service
//! - `AUTH_SERVICE_TIMEOUT`: request timeout in seconds (default: 10)

mod client;
mod error;
mod models;

pub use client::AuthClient;
pub use error::{AuthClientError, AuthClientResult};
pub use models::{Credentials, LoginResponse, NewUser, RegisterResponse, RemoteRole, RemoteUser};
