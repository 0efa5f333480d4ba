#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Risk-to-color classification for map markers.
//!
//! Two total functions map a location's risk attributes to a display
//! color: schools are classified by their categorical risk level,
//! factories by their PM2.5 reading. Every input, including absent or
//! out-of-range values, maps to a defined color via a fallback — there
//! is no error path.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use school_map_location_models::RiskLevel;

/// Display color category for a map marker.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MarkerColor {
    /// No elevated risk.
    Green,
    /// Moderate risk.
    Amber,
    /// High risk.
    Red,
    /// Extreme pollution (factories only).
    DarkRed,
}

impl MarkerColor {
    /// Returns the CSS hex code rendered by the map collaborator.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Amber => "#f59e0b",
            Self::Red => "#ef4444",
            Self::DarkRed => "#7f1d1d",
        }
    }
}

/// Classifies a school marker color from its categorical risk level.
///
/// `High` maps to red and `Medium` to amber; anything else, including
/// an absent level, falls back to green.
#[must_use]
pub const fn school_color(risk_level: Option<RiskLevel>) -> MarkerColor {
    match risk_level {
        Some(RiskLevel::High) => MarkerColor::Red,
        Some(RiskLevel::Medium) => MarkerColor::Amber,
        _ => MarkerColor::Green,
    }
}

/// Classifies a factory marker color from its PM2.5 reading.
///
/// An absent or zero reading is treated as worst case (red), not as
/// unknown. Thresholds are strict and checked highest first: `>250`
/// dark red, `>150` red, `>100` amber, otherwise green.
#[must_use]
pub const fn factory_color(pm25: Option<u32>) -> MarkerColor {
    match pm25 {
        None | Some(0) => MarkerColor::Red,
        Some(v) if v > 250 => MarkerColor::DarkRed,
        Some(v) if v > 150 => MarkerColor::Red,
        Some(v) if v > 100 => MarkerColor::Amber,
        Some(_) => MarkerColor::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_color_falls_back_to_green() {
        assert_eq!(school_color(None), MarkerColor::Green);
        assert_eq!(school_color(Some(RiskLevel::Low)), MarkerColor::Green);
    }

    #[test]
    fn school_color_elevated_levels() {
        assert_eq!(school_color(Some(RiskLevel::Medium)), MarkerColor::Amber);
        assert_eq!(school_color(Some(RiskLevel::High)), MarkerColor::Red);
    }

    #[test]
    fn factory_color_absent_or_zero_is_worst_case() {
        assert_eq!(factory_color(None), MarkerColor::Red);
        assert_eq!(factory_color(Some(0)), MarkerColor::Red);
    }

    #[test]
    fn factory_color_thresholds() {
        assert_eq!(factory_color(Some(50)), MarkerColor::Green);
        assert_eq!(factory_color(Some(120)), MarkerColor::Amber);
        assert_eq!(factory_color(Some(200)), MarkerColor::Red);
        assert_eq!(factory_color(Some(300)), MarkerColor::DarkRed);
    }

    #[test]
    fn factory_color_boundaries_are_strict() {
        assert_eq!(factory_color(Some(100)), MarkerColor::Green);
        assert_eq!(factory_color(Some(101)), MarkerColor::Amber);
        assert_eq!(factory_color(Some(150)), MarkerColor::Amber);
        assert_eq!(factory_color(Some(151)), MarkerColor::Red);
        assert_eq!(factory_color(Some(250)), MarkerColor::Red);
        assert_eq!(factory_color(Some(251)), MarkerColor::DarkRed);
    }

    #[test]
    fn hex_codes_match_palette() {
        assert_eq!(MarkerColor::Green.hex(), "#10b981");
        assert_eq!(MarkerColor::Amber.hex(), "#f59e0b");
        assert_eq!(MarkerColor::Red.hex(), "#ef4444");
        assert_eq!(MarkerColor::DarkRed.hex(), "#7f1d1d");
    }
}
