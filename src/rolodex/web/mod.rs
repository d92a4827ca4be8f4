//! # Web Interface
//!
//! A small server-rendered UI over the same API facade the menu uses, plus
//! two JSON endpoints. Routes:
//!
//! ```text
//! GET  /                 contact list, ?search= filters, ?flash= shows a notice
//! GET  /add              blank contact form
//! POST /add              create; redirect home on success, re-render on failure
//! GET  /edit/:name       form pre-filled with the contact
//! POST /edit/:name       update; same contract as /add
//! POST /delete/:name     delete, then redirect home
//! GET  /api/contacts     JSON array, ?search= honored
//! GET  /api/stats        JSON stats object
//! ```
//!
//! The store handle is shared through [`AppState`] and locked for exactly one
//! operation per request. Success and error notices travel as `?flash=` query
//! parameters on the redirect rather than in a session.

use axum::routing::{get, post};
use axum::Router;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::api::RolodexApi;
use crate::error::Result;
use crate::store::fs::JsonStore;

pub mod handlers;
pub mod pages;

/// Shared state for all request handlers: the API facade behind a lock.
///
/// The book rewrites whole files, so one operation at a time is the intended
/// level of concurrency.
#[derive(Clone)]
pub struct AppState {
    api: Arc<Mutex<RolodexApi<JsonStore>>>,
}

impl AppState {
    pub fn new(api: RolodexApi<JsonStore>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }

    /// A poisoned lock means a previous request panicked mid-operation; the
    /// book on disk is still consistent, so keep serving.
    fn lock_api(&self) -> MutexGuard<'_, RolodexApi<JsonStore>> {
        self.api.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", get(handlers::add_form).post(handlers::add_submit))
        .route(
            "/edit/:name",
            get(handlers::edit_form).post(handlers::edit_submit),
        )
        .route("/delete/:name", post(handlers::delete_submit))
        .route("/api/contacts", get(handlers::api_contacts))
        .route("/api/stats", get(handlers::api_stats))
        .with_state(state)
}

/// Run the web interface until ctrl-c.
pub fn serve(api: RolodexApi<JsonStore>, addr: &str) -> Result<()> {
    let state = AppState::new(api);
    let app = build_router(state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("listening on http://{}", addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    })
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
