//! Mock authentication service for testing user resolvers
//!
//! Provides a [`MockAuthServer`] that simulates the auth service's user and
//! login endpoints without a real deployment.

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock auth service
///
/// Wraps a [`wiremock::MockServer`] with convenience methods for the
/// endpoints the API consumes: `GET /users`, `GET /users/:id`,
/// `POST /users` and `POST /auth/login`.
///
/// # Example
///
/// ```rust,ignore
/// use cats_test_utils::{MockAuthServer, UserFixture};
///
/// #[tokio::test]
/// async fn test_login() {
///     let server = MockAuthServer::start().await;
///     server.mock_login_success("jwt", UserFixture::user("u1", "tom")).await;
///
///     // Point the API's AUTH_URL at server.url()
/// }
/// ```
pub struct MockAuthServer {
    server: MockServer,
}

impl MockAuthServer {
    /// Start a new mock auth server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get the underlying wiremock server for custom mocks
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock for the user list
    pub async fn mock_users(&self, users: Vec<UserFixture>) {
        let users_json: Vec<serde_json::Value> = users.iter().map(UserFixture::to_json).collect();

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_json))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock returning a single user by id
    pub async fn mock_user(&self, user: UserFixture) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", user.id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(user.to_json()))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock answering 404 for any single-user lookup
    pub async fn mock_user_not_found(&self) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/users/[^/]+$"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "User not found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a successful login
    pub async fn mock_login_success(&self, token: &str, user: UserFixture) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "token": token,
                "user": user.to_json()
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for rejected credentials
    pub async fn mock_login_failure(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a successful registration
    pub async fn mock_register_success(&self, user: UserFixture) {
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "user created",
                "data": user.to_json()
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a rejected registration
    pub async fn mock_register_failure(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for server error on every endpoint
    pub async fn mock_server_error(&self, error_message: &str) {
        Mock::given(path_regex(r"^/(users|auth)"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": error_message
            })))
            .mount(&self.server)
            .await;
    }
}

/// Fixture for auth service user documents
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: String,
}

impl UserFixture {
    /// Create a regular user fixture
    pub fn user(id: &str, user_name: &str) -> Self {
        Self {
            id: id.to_string(),
            user_name: user_name.to_string(),
            email: format!("{}@example.com", user_name.to_lowercase()),
            role: "user".to_string(),
        }
    }

    /// Create an admin fixture
    pub fn admin(id: &str, user_name: &str) -> Self {
        Self {
            role: "admin".to_string(),
            ..Self::user(id, user_name)
        }
    }

    /// Convert to the JSON document the auth service returns
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "_id": self.id,
            "user_name": self.user_name,
            "email": self.email,
            "role": self.role
        })
    }
}
