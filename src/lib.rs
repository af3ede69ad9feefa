//! # Themis - Questionnaire Mock Backend
//!
//! Themis serves a reproducible, randomly generated pool of compliance and
//! security questionnaires over a small read-only REST API, standing in for
//! the real backend during front-end development.
//!
//! ## Features
//!
//! - **Seeded generation**: one seed reproduces the whole pool and audit trail
//! - **Fixtures**: a fixed pool for demos and tests
//! - **Member directory**: roster lookup with configurable members
//! - **Health & Metrics**: Kubernetes-style health endpoints, Prometheus metrics
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use themis::application::MockBackend;
//! use themis::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let app = themis::create_app(MockBackend::from_settings(&settings)?);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: questionnaire model, member directory, date helpers, ports
//! - **Application**: startup wiring of the pool and handler context
//! - **Adapters**: generator, store, HTTP handlers
//! - **Config**: configuration management

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler;
use crate::application::MockBackend;
use axum::{routing::get, Router};

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(backend: MockBackend) -> Router {
    let MockBackend {
        state,
        health,
        metrics,
    } = backend;

    let ops_router = Router::new()
        .route("/health", get({
            let handler = health.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .route("/metrics", get({
            let handler = metrics.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }));

    let api_router = Router::new()
        .route("/questionnaires", get(api_handler::list_questionnaires))
        .route("/questionnaires/:id", get(api_handler::get_questionnaire))
        .route("/questionnaire-statuses", get(api_handler::list_statuses))
        .route("/members", get(api_handler::list_members))
        .route("/members/:id", get(api_handler::get_member))
        .with_state(state);

    ops_router.nest("/api", api_router).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
