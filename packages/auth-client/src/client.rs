//! Auth service client implementation

use std::fmt;
use std::time::Duration;

use cats_shared_config::AuthServiceConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{AuthClientError, AuthClientResult};
use crate::models::{
    Credentials, ErrorResponse, LoginResponse, NewUser, RawLoginResponse, RawRegisterResponse,
    RawUser, RegisterResponse, RemoteUser,
};

/// Maximum error body size kept in error messages
const MAX_ERROR_BODY_SIZE: usize = 512;

/// Auth service client
///
/// No retries: every call is a single request bounded by the configured
/// timeouts.
#[derive(Clone)]
pub struct AuthClient {
    http_client: Client,
    config: AuthServiceConfig,
}

impl fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClient")
            .field("url", &self.config.url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}

impl AuthClient {
    /// Create a new client for the configured auth service
    pub fn new(config: &AuthServiceConfig) -> AuthClientResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(5)
            .user_agent("cats-api/0.1")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Base URL of the auth service
    pub fn base_url(&self) -> &str {
        &self.config.url
    }

    /// URL of a single user, with the id escaped as one path segment
    fn user_url(&self, id: &str) -> AuthClientResult<Url> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(AuthClientError::InvalidUserId(id.to_string()));
        }

        let mut url = Url::parse(&self.config.endpoint("users"))?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Send a request and decode a JSON body, mapping non-success statuses
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AuthClientResult<T> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                AuthClientError::Timeout
            } else {
                AuthClientError::Http(e)
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(AuthClientError::Http)?;

        if !status.is_success() {
            let message = Self::error_message(status, text);
            warn!(status = status.as_u16(), %message, "Auth service returned an error");
            return Err(AuthClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Prefer the service's `message` field, then the raw body, then the status text
    fn error_message(status: StatusCode, body: String) -> String {
        if let Ok(error) = serde_json::from_str::<ErrorResponse>(&body) {
            return error.message;
        }
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return status
                .canonical_reason()
                .unwrap_or("Auth service request failed")
                .to_string();
        }
        if trimmed.len() <= MAX_ERROR_BODY_SIZE {
            return trimmed.to_string();
        }
        let mut end = MAX_ERROR_BODY_SIZE;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated)", &trimmed[..end])
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> AuthClientResult<Vec<RemoteUser>> {
        debug!("Fetching users from auth service");

        let raw: Vec<RawUser> = self
            .send_json(self.http_client.get(self.config.endpoint("users")))
            .await?;

        let users: Vec<RemoteUser> = raw.into_iter().map(Into::into).collect();
        debug!(user_count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Fetch a single user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> AuthClientResult<RemoteUser> {
        debug!(user_id = %id, "Fetching user from auth service");

        let url = self.user_url(id)?;
        let raw: RawUser = self.send_json(self.http_client.get(url)).await?;
        Ok(raw.into())
    }

    /// Exchange credentials for a bearer token
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &Credentials) -> AuthClientResult<LoginResponse> {
        debug!("Logging in through auth service");

        let raw: RawLoginResponse = self
            .send_json(
                self.http_client
                    .post(self.config.endpoint("auth/login"))
                    .json(credentials),
            )
            .await?;
        Ok(raw.into())
    }

    /// Register a new account
    #[instrument(skip(self, user), fields(user_name = %user.user_name))]
    pub async fn register(&self, user: &NewUser) -> AuthClientResult<RegisterResponse> {
        debug!("Registering user through auth service");

        let raw: RawRegisterResponse = self
            .send_json(self.http_client.post(self.config.endpoint("users")).json(user))
            .await?;
        Ok(raw.into())
    }
}
