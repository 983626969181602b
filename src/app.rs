/*
 * Responsibility
 * - Load Config -> build dependencies -> assemble Router
 * - Apply middleware (identity pipeline, CORS, HTTP layers)
 * - Start serving via axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::handlers::health::health;
use crate::config::Config;
use crate::middleware;
use crate::services::{auth::AuthService, id_codec::IdCodec};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,bloglist_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched.)
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice
        // immediately. In production, prefer the default behavior.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let id_codec = IdCodec::new(config.sqids_min_length, &config.sqids_alphabet)?;

    // The verifier gets the secret here, once; nothing reads it ambiently.
    let auth = Arc::new(AuthService::new(&config.jwt_secret));

    Ok(AppState::new(db, id_codec, auth))
}

fn build_router(state: AppState, config: &Config) -> Router {
    // identity pipeline covers all of /api; each handler's guard decides
    // whether an absent identity matters
    let api = middleware::auth::identity::apply(api::routes(), state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}
