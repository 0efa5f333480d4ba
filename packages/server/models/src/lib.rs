#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! API request and response types for the school map server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the domain types to allow independent evolution of the
//! API contract.

use serde::{Deserialize, Serialize};

use school_map_map::MapMarker;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters for the map view endpoint.
///
/// Omitted parameters fall back to the filter defaults
/// (`showSchools=true`, `showFactories=true`, `range=5`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Whether to include school markers.
    pub show_schools: Option<bool>,
    /// Whether to include factory markers.
    pub show_factories: Option<bool>,
    /// Impact circle range in kilometers (`0..=20`).
    pub range: Option<f64>,
}

/// The composed map view handed to the map rendering collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapView {
    /// Map center latitude.
    pub center_lat: f64,
    /// Map center longitude.
    pub center_lng: f64,
    /// Map zoom level.
    pub zoom: u8,
    /// Decorated visible markers, input order preserved.
    pub markers: Vec<MapMarker>,
}

/// Login request body. No field is validated; login cannot fail.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email or phone entered on the form.
    pub email: String,
    /// Password entered on the form.
    pub password: String,
}

/// Login response, issued after the fixed submission delay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Route the client should navigate to.
    pub redirect: String,
}

/// Contact form request body. Accepted unconditionally, not persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Contact response carrying the confirmation notice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    /// Confirmation notice to show the user.
    pub confirmation: String,
}
