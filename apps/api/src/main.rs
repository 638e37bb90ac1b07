use axum::http::{header, Method};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cats_api::config::Config;
use cats_api::graphql::SchemaBuilder;
use cats_api::middleware::TokenVerifier;
use cats_api::repositories::{CatRepository, SharedCatStore, SharedUserStore, UserRepository};
use cats_api::routes::{app_router, GraphQLState, HealthState};
use cats_api::services::HealthService;
use cats_auth_client::AuthClient;

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected (no origins allowed)
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
fn build_cors_layer(config: &Config) -> CorsLayer {
    let is_production = config.is_production();

    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([
                        header::AUTHORIZATION,
                        header::CONTENT_TYPE,
                        header::ACCEPT,
                        header::ORIGIN,
                    ])
                    .allow_credentials(true)
                    .max_age(Duration::from_secs(3600))
            }
        }
        _ if is_production => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(config.log_level())
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = %config.environment(),
        "Starting cats API server on port {}",
        config.port
    );

    // Initialize database pool
    let database = config.database();
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(Duration::from_secs(database.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(database.idle_timeout_secs))
        .connect(&database.url)
        .await?;

    tracing::info!("Database connection established");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations completed successfully");

    let cat_store: SharedCatStore = Arc::new(CatRepository::new(pool.clone()));
    let user_store: SharedUserStore = Arc::new(UserRepository::new(pool.clone()));

    // The auth service is optional at startup; resolvers that need it fail per request
    let mut schema_builder = SchemaBuilder::new(cat_store, user_store);
    let auth_url = match config.auth_service() {
        Some(auth_config) => {
            let client = AuthClient::new(auth_config)?;
            tracing::info!(url = %client.base_url(), "Auth service client initialized");
            let url = client.base_url().to_string();
            schema_builder = schema_builder.auth_client(client);
            Some(url)
        }
        None => {
            tracing::warn!("AUTH_URL not set, cat and user resolvers will fail until it is configured");
            None
        }
    };
    let schema = schema_builder.build();
    tracing::info!("GraphQL schema built");

    let verifier = config.jwt_secret.as_deref().map(TokenVerifier::new);
    if verifier.is_none() {
        tracing::warn!(
            "JWT_SECRET not set, all GraphQL requests will be anonymous. \
             This is only acceptable in development mode."
        );
    }

    let graphql_state = GraphQLState::new(schema, verifier);
    let health_state = HealthState::new(HealthService::new(pool.clone(), auth_url));

    let cors_layer = build_cors_layer(&config);

    let app = app_router(graphql_state, health_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL Playground available at http://{}:{}/graphql/playground",
        addr.ip(),
        addr.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
