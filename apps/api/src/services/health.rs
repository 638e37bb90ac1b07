//! Health check service for verifying external dependencies
//!
//! This service provides health checks for:
//! - PostgreSQL database (required)
//! - Auth service configuration (reported, never fails readiness)

use serde::Serialize;
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Status of an individual service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is healthy and responding
    Healthy,
    /// Service is unhealthy or unreachable
    Unhealthy,
    /// Service check was skipped (e.g., optional service not configured)
    Skipped,
}

/// Result of a single service health check
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    /// Name of the service
    pub name: &'static str,
    /// Current status
    pub status: ServiceStatus,
    /// Response time in milliseconds (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional details about the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceHealth {
    /// Create a healthy service result
    pub fn healthy(name: &'static str, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Healthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: None,
            details: None,
        }
    }

    /// Create a healthy service result with details
    pub fn healthy_with_details(
        name: &'static str,
        response_time: Duration,
        details: serde_json::Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::healthy(name, response_time)
        }
    }

    /// Create an unhealthy service result with response time
    pub fn unhealthy_with_time(
        name: &'static str,
        error: impl Into<String>,
        response_time: Duration,
    ) -> Self {
        Self {
            name,
            status: ServiceStatus::Unhealthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: Some(error.into()),
            details: None,
        }
    }

    /// Create a skipped service result (for optional services not configured)
    pub fn skipped(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            status: ServiceStatus::Skipped,
            response_time_ms: None,
            error: None,
            details: Some(serde_json::json!({ "reason": reason.into() })),
        }
    }
}

/// Aggregated health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Overall status (healthy only if all required services are healthy)
    pub status: ServiceStatus,
    /// Individual service health results
    pub services: Vec<ServiceHealth>,
    /// Total time to complete all health checks
    pub total_time_ms: u64,
    /// API version
    pub version: &'static str,
}

impl HealthCheckResponse {
    /// Create a new health check response from individual service results
    pub fn new(services: Vec<ServiceHealth>, total_time: Duration) -> Self {
        let status = if services
            .iter()
            .all(|s| s.status != ServiceStatus::Unhealthy)
        {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Unhealthy
        };

        Self {
            status,
            services,
            total_time_ms: total_time.as_millis() as u64,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Check if overall health is good
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Health check service for verifying external dependencies
#[derive(Debug, Clone)]
pub struct HealthService {
    pool: PgPool,
    auth_url: Option<String>,
}

impl HealthService {
    /// Create a new health service over the application's pool
    pub fn new(pool: PgPool, auth_url: Option<String>) -> Self {
        Self { pool, auth_url }
    }

    /// Check PostgreSQL database connectivity
    pub async fn check_database(&self) -> ServiceHealth {
        let start = Instant::now();

        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => {
                let elapsed = start.elapsed();
                let version = sqlx::query_scalar::<_, String>("SELECT version()")
                    .fetch_optional(&self.pool)
                    .await
                    .ok()
                    .flatten();

                match version {
                    Some(v) => ServiceHealth::healthy_with_details(
                        "database",
                        elapsed,
                        serde_json::json!({ "version": v }),
                    ),
                    None => ServiceHealth::healthy("database", elapsed),
                }
            }
            Err(e) => ServiceHealth::unhealthy_with_time(
                "database",
                format!("Query failed: {}", e),
                start.elapsed(),
            ),
        }
    }

    /// Report whether the auth service address is configured
    ///
    /// Resolvers that need it fail per request, so a missing address never
    /// makes the server unready.
    pub fn check_auth_service(&self) -> ServiceHealth {
        match &self.auth_url {
            Some(url) => ServiceHealth::healthy_with_details(
                "auth_service",
                Duration::ZERO,
                serde_json::json!({ "url": url }),
            ),
            None => ServiceHealth::skipped("auth_service", "AUTH_URL not set"),
        }
    }

    /// Run all health checks
    pub async fn check_all(&self) -> HealthCheckResponse {
        let start = Instant::now();

        let services = vec![self.check_database().await, self.check_auth_service()];

        HealthCheckResponse::new(services, start.elapsed())
    }
}
