//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders the page at `/` through `client::app::shell`, with the
//! runtime settings baked into each render. The compiled WASM/JS/CSS bundle
//! is served from `/pkg`, and `/healthz` answers liveness probes. Anything
//! else is a plain 404.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::settings::PortfolioSettings;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::SiteError;

/// Build the full application router.
///
/// # Errors
///
/// Returns [`SiteError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing `[[workspace.metadata.leptos]]` or `LEPTOS_*` variables).
pub fn app(settings: PortfolioSettings) -> Result<Router, SiteError> {
    let conf = get_configuration(None).map_err(|e| SiteError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let assets = asset_dir(&leptos_options.site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(assets = %assets.display(), "serving static bundle");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), settings.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(assets))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the built bundle, `<site_root>/<site_pkg_dir>`.
pub fn asset_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(site_pkg_dir)
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
