#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Mock environmental dataset generator.
//!
//! Produces the fixed-size in-memory location collection rendered by
//! the dashboard: 50 schools and 15 factories scattered around the
//! Cairo reference center with randomized risk metrics in bounded
//! ranges. The generator is parameterized by an explicit RNG so tests
//! can seed it; production entry points seed from OS entropy, so every
//! process start yields a different collection by design.

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use school_map_location_models::{
    CAIRO_CENTER, District, Location, LocationKind, MockDataset, RiskLevel,
};

/// Default number of generated schools.
pub const DEFAULT_SCHOOL_COUNT: usize = 50;

/// Default number of generated factories.
pub const DEFAULT_FACTORY_COUNT: usize = 15;

/// Coordinate spread in degrees for schools (~20 km diameter).
pub const SCHOOL_SPREAD: f64 = 0.20;

/// Coordinate spread in degrees for factories (~25 km diameter).
pub const FACTORY_SPREAD: f64 = 0.25;

const SCHOOL_DESCRIPTION: &str =
    "A primary education institution focused on environmental awareness.";
const FACTORY_DESCRIPTION: &str = "Large scale manufacturing plant.";

/// Configuration for the mock dataset generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of schools to generate.
    pub school_count: usize,
    /// Number of factories to generate.
    pub factory_count: usize,
    /// Reference center as (latitude, longitude).
    pub center: (f64, f64),
    /// Coordinate spread in degrees for schools.
    pub school_spread: f64,
    /// Coordinate spread in degrees for factories.
    pub factory_spread: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            school_count: DEFAULT_SCHOOL_COUNT,
            factory_count: DEFAULT_FACTORY_COUNT,
            center: CAIRO_CENTER,
            school_spread: SCHOOL_SPREAD,
            factory_spread: FACTORY_SPREAD,
        }
    }
}

/// Error returned for an invalid [`GeneratorConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorConfigError {
    /// The reference center has a non-finite coordinate.
    #[error("center ({0}, {1}) is not finite")]
    NonFiniteCenter(f64, f64),
    /// A coordinate spread is negative or non-finite.
    #[error("spread {0} must be finite and non-negative")]
    InvalidSpread(f64),
}

impl GeneratorConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is non-finite or a spread is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), GeneratorConfigError> {
        let (lat, lng) = self.center;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeneratorConfigError::NonFiniteCenter(lat, lng));
        }
        for spread in [self.school_spread, self.factory_spread] {
            if !spread.is_finite() || spread < 0.0 {
                return Err(GeneratorConfigError::InvalidSpread(spread));
            }
        }
        Ok(())
    }
}

/// Generates a mock dataset with the given configuration and RNG.
///
/// Schools come first in the output, then factories; within each kind
/// the generation order is preserved and ids are stable
/// (`school-0`..., `factory-0`...).
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<MockDataset, GeneratorConfigError> {
    config.validate()?;

    let mut locations = Vec::with_capacity(config.school_count + config.factory_count);

    for i in 0..config.school_count {
        locations.push(generate_school(config, rng, i));
    }
    for i in 0..config.factory_count {
        locations.push(generate_factory(config, rng, i));
    }

    Ok(MockDataset {
        locations,
        generated_at: Utc::now(),
    })
}

/// Generates a mock dataset from a fixed seed (`ChaCha8`).
///
/// Two calls with the same configuration and seed produce identical
/// locations.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate_seeded(
    config: &GeneratorConfig,
    seed: u64,
) -> Result<MockDataset, GeneratorConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(config, &mut rng)
}

/// Generates a mock dataset with the default configuration, seeded
/// from OS entropy.
///
/// # Panics
///
/// Never panics in practice: the default configuration is valid.
#[must_use]
pub fn generate_default() -> MockDataset {
    let mut rng = ChaCha8Rng::from_entropy();
    generate(&GeneratorConfig::default(), &mut rng)
        .expect("default generator configuration is valid")
}

fn generate_school<R: Rng>(config: &GeneratorConfig, rng: &mut R, index: usize) -> Location {
    let (lat, lng) = scatter(config.center, config.school_spread, rng);
    Location {
        id: format!("school-{index}"),
        name: format!("Green Valley School {}", index + 1),
        lat,
        lng,
        kind: LocationKind::School,
        district: pick_district(rng),
        risk_level: Some(draw_school_risk(rng)),
        pm25: Some(rng.gen_range(0..100)),
        co2: Some(400 + rng.gen_range(0..200)),
        noise: Some(40 + rng.gen_range(0..40)),
        description: Some(SCHOOL_DESCRIPTION.to_string()),
    }
}

fn generate_factory<R: Rng>(config: &GeneratorConfig, rng: &mut R, index: usize) -> Location {
    let (lat, lng) = scatter(config.center, config.factory_spread, rng);
    Location {
        id: format!("factory-{index}"),
        name: format!("Industrial Complex {}", index + 1),
        lat,
        lng,
        kind: LocationKind::Factory,
        district: pick_district(rng),
        risk_level: Some(RiskLevel::High),
        pm25: Some(150 + rng.gen_range(0..200)),
        co2: Some(800 + rng.gen_range(0..500)),
        noise: Some(80 + rng.gen_range(0..30)),
        description: Some(FACTORY_DESCRIPTION.to_string()),
    }
}

/// Offsets the center by `(uniform(0,1) - 0.5) * spread`, independently
/// per axis.
fn scatter<R: Rng>(center: (f64, f64), spread: f64, rng: &mut R) -> (f64, f64) {
    let lat = (rng.r#gen::<f64>() - 0.5).mul_add(spread, center.0);
    let lng = (rng.r#gen::<f64>() - 0.5).mul_add(spread, center.1);
    (lat, lng)
}

/// Draws a school risk level via two sequential uniform-threshold
/// checks: `>0.7` is `High`, otherwise a fresh draw `>0.4` is `Medium`,
/// else `Low`.
fn draw_school_risk<R: Rng>(rng: &mut R) -> RiskLevel {
    if rng.r#gen::<f64>() > 0.7 {
        RiskLevel::High
    } else if rng.r#gen::<f64>() > 0.4 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn pick_district<R: Rng>(rng: &mut R) -> District {
    let all = District::all();
    all[rng.gen_range(0..all.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_dataset() -> MockDataset {
        generate_seeded(&GeneratorConfig::default(), 42).unwrap()
    }

    #[test]
    fn generates_fixed_counts() {
        let dataset = seeded_dataset();
        assert_eq!(dataset.schools().count(), 50);
        assert_eq!(dataset.factories().count(), 15);
        assert_eq!(dataset.locations.len(), 65);
    }

    #[test]
    fn schools_precede_factories_with_stable_ids() {
        let dataset = seeded_dataset();
        for (i, loc) in dataset.locations.iter().take(50).enumerate() {
            assert_eq!(loc.id, format!("school-{i}"));
            assert_eq!(loc.kind, LocationKind::School);
        }
        for (i, loc) in dataset.locations.iter().skip(50).enumerate() {
            assert_eq!(loc.id, format!("factory-{i}"));
            assert_eq!(loc.kind, LocationKind::Factory);
        }
    }

    #[test]
    fn coordinates_stay_within_spread() {
        let config = GeneratorConfig::default();
        let dataset = generate_seeded(&config, 7).unwrap();
        for loc in &dataset.locations {
            let spread = match loc.kind {
                LocationKind::School => config.school_spread,
                LocationKind::Factory => config.factory_spread,
            };
            assert!(
                (loc.lat - config.center.0).abs() <= spread / 2.0,
                "{}",
                loc.id
            );
            assert!(
                (loc.lng - config.center.1).abs() <= spread / 2.0,
                "{}",
                loc.id
            );
        }
    }

    #[test]
    fn metrics_stay_within_bounds() {
        let dataset = seeded_dataset();
        for school in dataset.schools() {
            assert!(school.risk_level.is_some());
            assert!(school.pm25.unwrap() < 100);
            assert!((400..600).contains(&school.co2.unwrap()));
            assert!((40..80).contains(&school.noise.unwrap()));
        }
        for factory in dataset.factories() {
            assert_eq!(factory.risk_level, Some(RiskLevel::High));
            assert!((150..350).contains(&factory.pm25.unwrap()));
            assert!((800..1300).contains(&factory.co2.unwrap()));
            assert!((80..110).contains(&factory.noise.unwrap()));
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let config = GeneratorConfig::default();
        let a = generate_seeded(&config, 1234).unwrap();
        let b = generate_seeded(&config, 1234).unwrap();
        assert_eq!(a.locations, b.locations);
    }

    #[test]
    fn different_seeds_differ() {
        let config = GeneratorConfig::default();
        let a = generate_seeded(&config, 1).unwrap();
        let b = generate_seeded(&config, 2).unwrap();
        assert_ne!(a.locations, b.locations);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GeneratorConfig {
            school_spread: -0.1,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GeneratorConfigError::InvalidSpread(-0.1))
        );

        let config = GeneratorConfig {
            center: (f64::NAN, 31.0),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
