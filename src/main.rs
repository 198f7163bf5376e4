//! Supersub API server.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use supersub::adapters::auth::{BcryptPasswordHasher, JwtTokenService, RedisTokenBlacklist};
use supersub::adapters::http::{app_router, AppState, SessionCookie};
use supersub::adapters::postgres::{
    run_migrations, seed_catalog, PostgresOfferRepository, PostgresUserRepository,
};
use supersub::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    info!(environment = ?config.server.environment, "Starting supersub on {}", addr);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied");
    }
    if config.database.seed_catalog {
        seed_catalog(&pool).await?;
    }

    let tokens = Arc::new(JwtTokenService::from_config(&config.auth));
    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        offers: Arc::new(PostgresOfferRepository::new(pool)),
        sessions: tokens.clone(),
        token_issuer: tokens,
        blacklist: Arc::new(RedisTokenBlacklist::new(&config.redis)?),
        password_hasher: Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost)),
        cookie: SessionCookie::from_config(&config.auth),
    };

    let app = app_router(state, &config.server);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
