//! Netendencia server binary.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use http::{header, HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use netendencia::adapters::auth::JwtSessions;
use netendencia::adapters::http::{app_router, AppState, HttpSettings, Sessions, Stores};
use netendencia::adapters::memory::InMemoryStore;
use netendencia::adapters::postgres::{
    PostgresDiagnosisRepository, PostgresInstitutionRepository, PostgresProfessionalRepository,
    PostgresReadModels, PostgresReflectionRepository, PostgresUserRepository, MIGRATOR,
};
use netendencia::config::{AppConfig, DatabaseConfig, ServerConfig};
use netendencia::domain::assessment::Classifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    tracing::info!(
        environment = ?config.server.environment,
        store = if config.database.is_memory() { "memory" } else { "postgres" },
        "configuration loaded"
    );

    let classifier_config = config
        .assessment
        .classifier_config()
        .context("failed to load assessment copy")?;
    let classifier = Arc::new(Classifier::new(classifier_config).context("invalid classifier")?);

    let stores = build_stores(&config.database).await?;
    let sessions = Sessions::shared(Arc::new(JwtSessions::new(
        &config.auth.secret_key,
        config.auth.session_ttl(),
    )));
    let settings = HttpSettings {
        reevaluation_days: config.assessment.reevaluation_days,
        secure_cookie: config.auth.secure_cookie(&config.server.environment),
        templates_dir: config.server.templates_dir.clone(),
    };

    let state = AppState::new(stores, sessions, classifier, settings);
    let app = with_transport_layers(app_router(state), &config.server);

    let addr = config.server.socket_addr().context("invalid bind address")?;
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn build_stores(db: &DatabaseConfig) -> anyhow::Result<Stores> {
    if db.is_memory() {
        tracing::warn!("using the in-memory store; data is lost on restart");
        return Ok(Stores::shared(Arc::new(InMemoryStore::new())));
    }

    let pool = PgPoolOptions::new()
        .min_connections(db.min_connections)
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout())
        .idle_timeout(db.idle_timeout())
        .connect(&db.url)
        .await
        .context("failed to connect to PostgreSQL")?;
    tracing::info!(max_connections = db.max_connections, "database pool ready");

    if db.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("migrations applied");
    }

    let reads = Arc::new(PostgresReadModels::new(pool.clone()));
    Ok(Stores {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        diagnoses: Arc::new(PostgresDiagnosisRepository::new(pool.clone())),
        families: reads.clone(),
        population: reads.clone(),
        questions: reads,
        reflections: Arc::new(PostgresReflectionRepository::new(pool.clone())),
        institutions: Arc::new(PostgresInstitutionRepository::new(pool.clone())),
        professionals: Arc::new(PostgresProfessionalRepository::new(pool)),
    })
}

fn with_transport_layers(app: Router, server: &ServerConfig) -> Router {
    let app = app
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http());

    match cors_layer(&server.cors_origins_list()) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

/// No origins means same-origin only. `*` allows any origin without
/// credentials; explicit origins may send the session cookie.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let methods = [Method::GET, Method::POST, Method::DELETE];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    if origins.iter().any(|o| o == "*") {
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(methods)
                .allow_headers(headers),
        );
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
    )
}
