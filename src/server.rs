//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, bootstrap admin
//! seeding, and the Axum server lifecycle.

use crate::application::services::{AccountService, HotelService, OfferService};
use crate::config::Config;
use crate::domain::password::PasswordHasher;
use crate::domain::repositories::{AccountRepository, HotelRepository, OfferRepository};
use crate::infrastructure::persistence::{
    PgAccountRepository, PgHotelRepository, PgOfferRepository,
};
use crate::infrastructure::security::Argon2Hasher;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the connection pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable within the connect timeout.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let db = &config.database;

    PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout)
        .idle_timeout(db.idle_timeout)
        .max_lifetime(db.max_lifetime)
        .connect(&db.url)
        .await
        .context("Failed to connect to database")
}

/// Builds repositories and services on top of `pool`.
pub fn build_state(pool: PgPool, top_hotels_limit: i64) -> AppState {
    let pool = Arc::new(pool);

    let accounts: Arc<dyn AccountRepository> = Arc::new(PgAccountRepository::new(pool.clone()));
    let hotels: Arc<dyn HotelRepository> = Arc::new(PgHotelRepository::new(pool.clone()));
    let offers: Arc<dyn OfferRepository> = Arc::new(PgOfferRepository::new(pool));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::default());

    AppState::new(
        Arc::new(AccountService::new(accounts, hasher)),
        Arc::new(HotelService::new(hotels.clone(), top_hotels_limit)),
        Arc::new(OfferService::new(offers, hotels)),
    )
}

/// Creates the configured bootstrap administrator if it is missing.
///
/// # Errors
///
/// Returns an error if the account lookup or insert fails.
pub async fn seed_admin(state: &AppState, config: &Config) -> Result<()> {
    let Some(admin) = &config.bootstrap_admin else {
        tracing::warn!(
            "BOOTSTRAP_ADMIN_PASSWORD not set, no admin seeded; ADMIN routes need an account from `admin account create-admin`"
        );
        return Ok(());
    };

    let created = state
        .account_service
        .ensure_admin(&admin.username, &admin.password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed bootstrap admin: {e}"))?;

    if created {
        tracing::info!(username = %admin.username, "Bootstrap admin created");
    } else {
        tracing::debug!(username = %admin.username, "Bootstrap admin already exists");
    }

    Ok(())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Services and the bootstrap admin
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let state = build_state(pool.clone(), config.top_hotels_limit);
    seed_admin(&state, &config).await?;

    let app = app_router(state, config.behind_proxy);

    let addr = config.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
