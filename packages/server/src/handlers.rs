//! HTTP handler functions for the school map API.

use actix_web::{HttpResponse, web};

use school_map_analytics::{dashboard_stats, district_risk_series, pm25_history_series};
use school_map_location_models::{CAIRO_CENTER, DEFAULT_ZOOM};
use school_map_map::{FilterState, compose};
use school_map_pages::{CONTACT_DELAY, LOGIN_DELAY, Route};
use school_map_server_models::{
    ApiHealth, ApiMapView, ContactRequest, ContactResponse, LoginRequest, LoginResponse,
    MapQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/locations`
///
/// Returns the full immutable location collection.
pub async fn locations(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.dataset.locations)
}

/// `GET /api/map`
///
/// Composes the visible, decorated marker list for the current toggle
/// and range parameters. Omitted parameters fall back to the filter
/// defaults.
pub async fn map_view(
    state: web::Data<AppState>,
    params: web::Query<MapQueryParams>,
) -> HttpResponse {
    let defaults = FilterState::default();
    let filters = FilterState::new(
        params.show_schools.unwrap_or(defaults.show_schools),
        params.show_factories.unwrap_or(defaults.show_factories),
        params.range.unwrap_or(defaults.range_km),
    );

    let markers = compose(&state.dataset.locations, &filters);

    HttpResponse::Ok().json(ApiMapView {
        center_lat: CAIRO_CENTER.0,
        center_lng: CAIRO_CENTER.1,
        zoom: DEFAULT_ZOOM,
        markers,
    })
}

/// `GET /api/stats`
pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(dashboard_stats(&state.dataset))
}

/// `GET /api/analytics/districts`
pub async fn district_chart() -> HttpResponse {
    HttpResponse::Ok().json(district_risk_series())
}

/// `GET /api/analytics/history`
pub async fn history_chart() -> HttpResponse {
    HttpResponse::Ok().json(pm25_history_series())
}

/// `POST /api/login`
///
/// Always succeeds after the fixed login delay; no credential is
/// checked. Returns the route the client should navigate to.
pub async fn login(body: web::Json<LoginRequest>) -> HttpResponse {
    log::info!("Login submitted for {}", body.email);
    tokio::time::sleep(LOGIN_DELAY).await;

    HttpResponse::Ok().json(LoginResponse {
        redirect: Route::Dashboard.path().to_string(),
    })
}

/// `POST /api/contact`
///
/// Accepts any submission after the fixed contact delay; nothing is
/// persisted.
pub async fn contact(body: web::Json<ContactRequest>) -> HttpResponse {
    log::info!("Contact submission from {}", body.email);
    tokio::time::sleep(CONTACT_DELAY).await;

    HttpResponse::Ok().json(ContactResponse {
        confirmation: school_map_pages::CONTACT_CONFIRMATION.to_string(),
    })
}
