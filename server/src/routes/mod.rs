//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health probe together with Leptos SSR rendering
//! under a single Axum router. The hydration bundle (WASM, JS, CSS) is served
//! from the site root's `/pkg` directory. Auth is handled by the hosted
//! provider directly from the browser, so there are no API routes here.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Landing page SSR + static assets + `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.addr;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().as_ref().into();
    }
    tracing::debug!(site_root = %leptos_options.site_root, "leptos options loaded");
    Ok(router(leptos_options))
}

fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(&*leptos_options.site_pkg_dir);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
