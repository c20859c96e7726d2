//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the portfolio page at
//! `/`, serves the WASM/CSS bundle under `/pkg`, and falls back to the static
//! assets directory for everything else (project images).

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not depend on Leptos.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Static file routes: `/pkg` from the site root, everything else from
/// `assets_dir`.
pub fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(assets_dir))
}

/// Full application built from the Leptos configuration on disk/env.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(site_router(conf.leptos_options, config.assets_dir.clone()))
}

/// Health check, Leptos SSR page, static assets. `assets_dir` defaults to
/// the Leptos site root.
pub fn site_router(leptos_options: LeptosOptions, assets_dir: Option<PathBuf>) -> Router {
    let routes = generate_route_list(portfolio_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_dir = assets_dir.unwrap_or_else(|| site_root.clone());
    tracing::debug!(site_root = %site_root.display(), assets_dir = %assets_dir.display(), "serving static files");

    base_routes()
        .merge(leptos_router)
        .merge(static_routes(&site_root, &assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
