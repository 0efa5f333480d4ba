#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Monitored location types and district definitions.
//!
//! This crate defines the canonical shape of a monitored point (a school
//! or a factory) used across the entire school-map system. The location
//! collection is produced once at startup and is immutable afterwards;
//! every consumer holds a read-only view of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Reference map center: Cairo, Egypt (latitude, longitude).
pub const CAIRO_CENTER: (f64, f64) = (30.0444, 31.2357);

/// Default map zoom level for the city-wide view.
pub const DEFAULT_ZOOM: u8 = 11;

/// The kind of monitored point.
///
/// The kind is fixed at creation and determines which optional metric
/// fields are semantically meaningful.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationKind {
    /// An education institution whose exposure is being monitored.
    School,
    /// An industrial emission source.
    Factory,
}

impl LocationKind {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::School, Self::Factory]
    }
}

/// Categorical risk severity assigned to schools.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RiskLevel {
    /// No elevated exposure detected.
    Low,
    /// Elevated exposure, monitoring recommended.
    Medium,
    /// Sustained high exposure, intervention required.
    High,
}

impl RiskLevel {
    /// Returns the numeric value of this risk level (1-3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Creates a risk level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-3.
    pub const fn from_value(value: u8) -> Result<Self, InvalidRiskLevelError> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            _ => Err(InvalidRiskLevelError { value }),
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Error returned when attempting to create a [`RiskLevel`] from an
/// invalid numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRiskLevelError {
    /// The invalid risk value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidRiskLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid risk level value {}: expected 1-3", self.value)
    }
}

impl std::error::Error for InvalidRiskLevelError {}

/// The fixed set of monitored city districts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum District {
    /// Nasr City
    #[serde(rename = "Nasr City")]
    #[strum(serialize = "Nasr City")]
    NasrCity,
    /// Maadi
    Maadi,
    /// Zamalek
    Zamalek,
    /// Heliopolis
    Heliopolis,
    /// Downtown
    Downtown,
    /// Giza
    Giza,
    /// Dokki
    Dokki,
    /// New Cairo
    #[serde(rename = "New Cairo")]
    #[strum(serialize = "New Cairo")]
    NewCairo,
}

impl District {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::NasrCity,
            Self::Maadi,
            Self::Zamalek,
            Self::Heliopolis,
            Self::Downtown,
            Self::Giza,
            Self::Dokki,
            Self::NewCairo,
        ]
    }
}

/// One monitored point on the map.
///
/// For schools, `risk_level` drives the marker color and `pm25` is
/// purely descriptive; for factories, `pm25` drives the marker color
/// and `risk_level` is constant `High` at generation time. `co2` and
/// `noise` are descriptive metrics consumed by no classification
/// logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique stable identifier, e.g. `school-0` or `factory-3`.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Latitude, bounded around [`CAIRO_CENTER`] by the generator.
    pub lat: f64,
    /// Longitude, bounded around [`CAIRO_CENTER`] by the generator.
    pub lng: f64,
    /// Whether this point is a school or a factory.
    pub kind: LocationKind,
    /// District this point belongs to.
    pub district: District,
    /// Categorical risk severity; populated for schools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// PM2.5 particulate concentration in µg/m³.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm25: Option<u32>,
    /// CO₂ concentration in ppm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2: Option<u32>,
    /// Ambient noise level in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<u32>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The immutable location collection produced once at startup.
///
/// Schools precede factories in `locations`, and within each kind the
/// generation order is preserved. Consumers receive shared read-only
/// access; no create/update/delete operations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDataset {
    /// All monitored points, schools first.
    pub locations: Vec<Location>,
    /// When this dataset was generated.
    pub generated_at: DateTime<Utc>,
}

impl MockDataset {
    /// Iterates over the schools in the dataset.
    pub fn schools(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::School)
    }

    /// Iterates over the factories in the dataset.
    pub fn factories(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::Factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_from_value_roundtrip() {
        for level in RiskLevel::all() {
            assert_eq!(RiskLevel::from_value(level.value()), Ok(*level));
        }
        assert!(RiskLevel::from_value(0).is_err());
        assert!(RiskLevel::from_value(4).is_err());
    }

    #[test]
    fn district_display_names() {
        assert_eq!(District::NasrCity.to_string(), "Nasr City");
        assert_eq!(District::NewCairo.to_string(), "New Cairo");
        assert_eq!(District::Giza.to_string(), "Giza");
        assert_eq!(District::all().len(), 8);
    }

    #[test]
    fn location_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LocationKind::School).unwrap(),
            "\"school\""
        );
        assert_eq!(LocationKind::Factory.to_string(), "factory");
        assert_eq!("school".parse::<LocationKind>(), Ok(LocationKind::School));
    }

    #[test]
    fn location_serializes_camel_case_and_skips_absent_fields() {
        let loc = Location {
            id: "factory-0".to_string(),
            name: "Industrial Complex 1".to_string(),
            lat: 30.05,
            lng: 31.24,
            kind: LocationKind::Factory,
            district: District::Downtown,
            risk_level: Some(RiskLevel::High),
            pm25: Some(210),
            co2: None,
            noise: None,
            description: None,
        };
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["riskLevel"], "High");
        assert_eq!(json["district"], "Downtown");
        assert_eq!(json["kind"], "factory");
        assert!(json.get("co2").is_none());
        assert!(json.get("description").is_none());
    }
}
