#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Map filter state and view composition.
//!
//! [`compose`] turns the immutable location collection plus the UI
//! toggle state into the flat decorated marker list handed to the map
//! rendering collaborator. It is a pure function of its inputs: output
//! order follows input order, and identical inputs yield identical
//! marker lists. Clustering of nearby markers is entirely the renderer's
//! concern.

use serde::{Deserialize, Serialize};

use school_map_location_models::{District, Location, LocationKind, RiskLevel};
use school_map_risk::{MarkerColor, factory_color, school_color};

/// Lower bound of the impact range slider, in kilometers.
pub const RANGE_MIN_KM: f64 = 0.0;

/// Upper bound of the impact range slider, in kilometers.
pub const RANGE_MAX_KM: f64 = 20.0;

/// Default impact range, in kilometers.
pub const DEFAULT_RANGE_KM: f64 = 5.0;

/// Impact circle radius per slider kilometer, in meters.
///
/// A fixed unit-conversion rule for the drawn overlay, not a physical
/// dispersion model.
pub const IMPACT_RADIUS_M_PER_KM: f64 = 100.0;

/// UI filter state for the map page.
///
/// Owned per page session, never persisted. The range only affects the
/// drawn factory impact circles; it never hides a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Whether school markers are shown.
    pub show_schools: bool,
    /// Whether factory markers are shown.
    pub show_factories: bool,
    /// Impact circle range in kilometers, clamped to `[0, 20]`.
    pub range_km: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            show_schools: true,
            show_factories: true,
            range_km: DEFAULT_RANGE_KM,
        }
    }
}

impl FilterState {
    /// Creates a filter state, clamping the range to `[0, 20]` km.
    #[must_use]
    pub fn new(show_schools: bool, show_factories: bool, range_km: f64) -> Self {
        Self {
            show_schools,
            show_factories,
            range_km: range_km.clamp(RANGE_MIN_KM, RANGE_MAX_KM),
        }
    }

    /// Sets the range, clamping it to `[0, 20]` km.
    pub fn set_range(&mut self, range_km: f64) {
        self.range_km = range_km.clamp(RANGE_MIN_KM, RANGE_MAX_KM);
    }

    /// Restores all three filter values to their defaults atomically.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns whether locations of the given kind are visible.
    #[must_use]
    pub const fn shows(&self, kind: LocationKind) -> bool {
        match kind {
            LocationKind::School => self.show_schools,
            LocationKind::Factory => self.show_factories,
        }
    }
}

/// Kind-specific marker decoration.
///
/// Each branch carries only the fields that drive its rendering:
/// schools their categorical risk, factories their PM2.5 reading and
/// the impact circle radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum MarkerDetail {
    /// A school marker.
    School {
        /// Categorical risk level, if assigned.
        risk_level: Option<RiskLevel>,
    },
    /// A factory marker with its impact circle.
    Factory {
        /// PM2.5 reading driving the marker color.
        pm25: Option<u32>,
        /// Impact circle radius in meters (`range_km * 100`).
        impact_radius_m: f64,
    },
}

impl MarkerDetail {
    /// Returns the icon variant for this marker.
    #[must_use]
    pub const fn icon(&self) -> LocationKind {
        match self {
            Self::School { .. } => LocationKind::School,
            Self::Factory { .. } => LocationKind::Factory,
        }
    }
}

/// One decorated entry in the map render list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    /// Stable location id.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// District the location belongs to.
    pub district: District,
    /// Display color category.
    pub color: MarkerColor,
    /// Kind-specific decoration.
    #[serde(flatten)]
    pub detail: MarkerDetail,
}

/// Composes the visible, decorated marker list for the map renderer.
///
/// A location is included iff its kind's toggle is on; nothing else
/// ever hides a location. Schools are colored by risk level, factories
/// by PM2.5, and factories additionally carry an impact circle of
/// `range_km * 100` meters. Input order is preserved.
#[must_use]
pub fn compose(locations: &[Location], filters: &FilterState) -> Vec<MapMarker> {
    locations
        .iter()
        .filter(|loc| filters.shows(loc.kind))
        .map(|loc| decorate(loc, filters.range_km))
        .collect()
}

fn decorate(location: &Location, range_km: f64) -> MapMarker {
    let (color, detail) = match location.kind {
        LocationKind::School => (
            school_color(location.risk_level),
            MarkerDetail::School {
                risk_level: location.risk_level,
            },
        ),
        LocationKind::Factory => (
            factory_color(location.pm25),
            MarkerDetail::Factory {
                pm25: location.pm25,
                impact_radius_m: range_km * IMPACT_RADIUS_M_PER_KM,
            },
        ),
    };

    MapMarker {
        id: location.id.clone(),
        name: location.name.clone(),
        lat: location.lat,
        lng: location.lng,
        district: location.district,
        color,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_map_generate::{GeneratorConfig, generate_seeded};

    fn school(id: &str, risk_level: Option<RiskLevel>) -> Location {
        Location {
            id: id.to_string(),
            name: format!("{id} name"),
            lat: 30.05,
            lng: 31.24,
            kind: LocationKind::School,
            district: District::Maadi,
            risk_level,
            pm25: Some(30),
            co2: Some(450),
            noise: Some(55),
            description: None,
        }
    }

    fn factory(id: &str, pm25: Option<u32>) -> Location {
        Location {
            id: id.to_string(),
            name: format!("{id} name"),
            lat: 30.01,
            lng: 31.30,
            kind: LocationKind::Factory,
            district: District::Downtown,
            risk_level: Some(RiskLevel::High),
            pm25,
            co2: Some(900),
            noise: Some(95),
            description: None,
        }
    }

    #[test]
    fn defaults_and_reset() {
        let mut filters = FilterState::default();
        assert!(filters.show_schools);
        assert!(filters.show_factories);
        assert!((filters.range_km - 5.0).abs() < f64::EPSILON);

        filters.show_schools = false;
        filters.show_factories = false;
        filters.set_range(18.0);
        filters.reset();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn range_is_clamped() {
        let mut filters = FilterState::new(true, true, 35.0);
        assert!((filters.range_km - RANGE_MAX_KM).abs() < f64::EPSILON);
        filters.set_range(-3.0);
        assert!((filters.range_km - RANGE_MIN_KM).abs() < f64::EPSILON);
    }

    #[test]
    fn both_toggles_off_yields_empty_list() {
        let locations = vec![school("school-0", None), factory("factory-0", Some(200))];
        let filters = FilterState::new(false, false, 5.0);
        assert!(compose(&locations, &filters).is_empty());
    }

    #[test]
    fn both_toggles_on_preserves_every_location_in_order() {
        let locations = vec![
            school("school-0", Some(RiskLevel::High)),
            factory("factory-0", Some(200)),
            school("school-1", None),
        ];
        let markers = compose(&locations, &FilterState::default());
        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["school-0", "factory-0", "school-1"]);
    }

    #[test]
    fn kind_fully_determines_visibility() {
        let locations = vec![
            school("school-0", Some(RiskLevel::High)),
            factory("factory-0", Some(200)),
        ];

        let schools_only = compose(&locations, &FilterState::new(true, false, 5.0));
        assert_eq!(schools_only.len(), 1);
        assert_eq!(schools_only[0].detail.icon(), LocationKind::School);

        let factories_only = compose(&locations, &FilterState::new(false, true, 5.0));
        assert_eq!(factories_only.len(), 1);
        assert_eq!(factories_only[0].detail.icon(), LocationKind::Factory);
    }

    #[test]
    fn school_color_keys_on_risk_level() {
        let locations = vec![
            school("school-0", Some(RiskLevel::High)),
            school("school-1", Some(RiskLevel::Medium)),
            school("school-2", None),
        ];
        let markers = compose(&locations, &FilterState::default());
        assert_eq!(markers[0].color, MarkerColor::Red);
        assert_eq!(markers[1].color, MarkerColor::Amber);
        assert_eq!(markers[2].color, MarkerColor::Green);
    }

    #[test]
    fn factory_marker_carries_circle_and_pm25_color() {
        let locations = vec![factory("factory-0", Some(300))];
        let markers = compose(&locations, &FilterState::new(true, true, 8.0));
        assert_eq!(markers[0].color, MarkerColor::DarkRed);
        match markers[0].detail {
            MarkerDetail::Factory {
                pm25,
                impact_radius_m,
            } => {
                assert_eq!(pm25, Some(300));
                assert!((impact_radius_m - 800.0).abs() < f64::EPSILON);
            }
            MarkerDetail::School { .. } => panic!("expected a factory marker"),
        }
    }

    #[test]
    fn school_markers_have_no_circle() {
        let locations = vec![school("school-0", Some(RiskLevel::Low))];
        let markers = compose(&locations, &FilterState::new(true, true, 20.0));
        assert!(matches!(markers[0].detail, MarkerDetail::School { .. }));
    }

    #[test]
    fn compose_is_idempotent() {
        let dataset = generate_seeded(&GeneratorConfig::default(), 99).unwrap();
        let filters = FilterState::new(true, true, 12.0);
        let a = compose(&dataset.locations, &filters);
        let b = compose(&dataset.locations, &filters);
        assert_eq!(a, b);
        assert_eq!(a.len(), dataset.locations.len());
    }

    #[test]
    fn marker_serializes_with_flattened_detail() {
        let markers = compose(&[factory("factory-0", Some(180))], &FilterState::default());
        let json = serde_json::to_value(&markers[0]).unwrap();
        assert_eq!(json["kind"], "factory");
        assert_eq!(json["color"], "red");
        assert_eq!(json["pm25"], 180);
        assert_eq!(json["impactRadiusM"], 500.0);
    }
}
