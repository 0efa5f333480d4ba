#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Chart series and dashboard statistics.
//!
//! Builds the purely presentational `{category, value}` series consumed
//! by the chart collaborator and the stat-card numbers shown on the
//! dashboard. District risk scores and the six-month PM2.5 history are
//! static demo tables; the stat cards are computed from the generated
//! dataset.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use school_map_location_models::{District, MockDataset, RiskLevel};

/// Chart rendering variant understood by the chart collaborator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartVariant {
    /// Vertical bar chart.
    Bar,
    /// Filled area chart.
    Area,
}

/// One `{category, value}` pair in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Axis category label.
    pub category: String,
    /// Plotted value.
    pub value: f64,
}

/// A complete series handed to the chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Chart title.
    pub title: String,
    /// Rendering variant.
    pub variant: ChartVariant,
    /// Series color as a CSS hex code.
    pub color: String,
    /// Ordered data points.
    pub points: Vec<ChartPoint>,
}

/// Static per-district figures for the analytics pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictStat {
    /// District the figures apply to.
    pub district: District,
    /// Aggregate risk score, 0-100.
    pub risk_score: u32,
    /// Number of monitored schools in the district.
    pub school_count: u32,
}

/// Per-district risk scores and school counts (demo figures).
pub const DISTRICT_STATS: &[DistrictStat] = &[
    DistrictStat {
        district: District::NasrCity,
        risk_score: 65,
        school_count: 12,
    },
    DistrictStat {
        district: District::Maadi,
        risk_score: 30,
        school_count: 8,
    },
    DistrictStat {
        district: District::Zamalek,
        risk_score: 25,
        school_count: 5,
    },
    DistrictStat {
        district: District::Heliopolis,
        risk_score: 45,
        school_count: 10,
    },
    DistrictStat {
        district: District::Downtown,
        risk_score: 80,
        school_count: 6,
    },
    DistrictStat {
        district: District::Giza,
        risk_score: 70,
        school_count: 15,
    },
];

/// Monthly average PM2.5 readings for the trailing six months (demo
/// figures).
pub const PM25_HISTORY: &[(&str, u32)] = &[
    ("Jan", 45),
    ("Feb", 52),
    ("Mar", 48),
    ("Apr", 60),
    ("May", 55),
    ("Jun", 40),
];

/// Builds the per-district risk bar chart series.
#[must_use]
pub fn district_risk_series() -> ChartSeries {
    ChartSeries {
        title: "Pollution Risk by District".to_string(),
        variant: ChartVariant::Bar,
        color: "#10b981".to_string(),
        points: DISTRICT_STATS
            .iter()
            .map(|stat| ChartPoint {
                category: stat.district.to_string(),
                value: f64::from(stat.risk_score),
            })
            .collect(),
    }
}

/// Builds the historical PM2.5 area chart series.
#[must_use]
pub fn pm25_history_series() -> ChartSeries {
    ChartSeries {
        title: "Historical PM2.5 Trends".to_string(),
        variant: ChartVariant::Area,
        color: "#f59e0b".to_string(),
        points: PM25_HISTORY
            .iter()
            .map(|&(month, pm25)| ChartPoint {
                category: month.to_string(),
                value: f64::from(pm25),
            })
            .collect(),
    }
}

/// Returns the `n` highest-risk districts, highest first.
#[must_use]
pub fn top_at_risk_districts(n: usize) -> Vec<DistrictStat> {
    let mut stats = DISTRICT_STATS.to_vec();
    stats.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    stats.truncate(n);
    stats
}

/// Stat-card numbers for the dashboard, computed from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total monitored schools.
    pub total_schools: usize,
    /// Schools currently classified `High` risk.
    pub high_risk_schools: usize,
    /// Schools currently classified `Medium` risk.
    pub medium_risk_schools: usize,
    /// Active factories mapped.
    pub active_factories: usize,
    /// Number of monitored districts.
    pub districts_monitored: usize,
    /// Mean PM2.5 across all locations with a reading, in µg/m³.
    pub avg_pm25: f64,
}

/// Computes the dashboard stat cards from the dataset.
#[must_use]
pub fn dashboard_stats(dataset: &MockDataset) -> DashboardStats {
    let high_risk_schools = dataset
        .schools()
        .filter(|s| s.risk_level == Some(RiskLevel::High))
        .count();
    let medium_risk_schools = dataset
        .schools()
        .filter(|s| s.risk_level == Some(RiskLevel::Medium))
        .count();

    let readings: Vec<u32> = dataset.locations.iter().filter_map(|l| l.pm25).collect();
    let avg_pm25 = if readings.is_empty() {
        0.0
    } else {
        f64::from(readings.iter().sum::<u32>()) / readings.len() as f64
    };

    DashboardStats {
        total_schools: dataset.schools().count(),
        high_risk_schools,
        medium_risk_schools,
        active_factories: dataset.factories().count(),
        districts_monitored: District::all().len(),
        avg_pm25,
    }
}
