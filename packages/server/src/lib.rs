#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Actix-Web API server for the school map dashboard.
//!
//! Serves the JSON API consumed by the map and chart collaborators and
//! renders the page routes server-side. The mock dataset is generated
//! exactly once at startup and injected into every handler as a shared
//! immutable value; no handler may mutate it and nothing regenerates it
//! for the lifetime of the process.

mod handlers;
mod pages;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use school_map_location_models::MockDataset;

/// Shared application state.
pub struct AppState {
    /// The immutable location collection, generated once at startup.
    pub dataset: Arc<MockDataset>,
}

/// Registers all routes on an actix app.
///
/// Split out of [`run_server`] so integration tests can build the same
/// app without binding a socket.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/locations", web::get().to(handlers::locations))
            .route("/map", web::get().to(handlers::map_view))
            .route("/stats", web::get().to(handlers::stats))
            .route(
                "/analytics/districts",
                web::get().to(handlers::district_chart),
            )
            .route("/analytics/history", web::get().to(handlers::history_chart))
            .route("/login", web::post().to(handlers::login))
            .route("/contact", web::post().to(handlers::contact)),
    )
    .route("/", web::get().to(pages::login))
    .route("/dashboard", web::get().to(pages::dashboard))
    .route("/map", web::get().to(pages::map))
    .route("/analytics", web::get().to(pages::analytics))
    .route("/settings", web::get().to(pages::settings))
    .route("/contact", web::get().to(pages::contact))
    .default_service(web::route().to(pages::not_found));
}

/// Starts the school map server.
///
/// Generates the mock dataset, then starts the Actix-Web HTTP server on
/// `BIND_ADDR`/`PORT` (default `127.0.0.1:8080`). This is a regular
/// async function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Generating mock dataset...");
    let dataset = Arc::new(school_map_generate::generate_default());
    log::info!(
        "Generated {} locations ({} schools, {} factories)",
        dataset.locations.len(),
        dataset.schools().count(),
        dataset.factories().count()
    );

    let state = web::Data::new(AppState {
        dataset: Arc::clone(&dataset),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
