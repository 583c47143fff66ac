//! Normalized feature vector for the heuristic consequence model.
//!
//! Mirrors the eight inputs the consequence heuristics are keyed on, scaled
//! into comparable ranges.

use serde::Serialize;

use crate::types::{ImpactRequest, RockType};

/// Population density divisor used for normalization (people/km²).
pub const POPULATION_SCALE: f64 = 10_000.0;

/// Earthquake count divisor used for normalization.
pub const EARTHQUAKE_SCALE: f64 = 100.0;

/// Rock index assigned when the rock type is not one of the indexed kinds.
pub const UNKNOWN_ROCK_INDEX: f64 = 0.5;

/// Normalized model inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeatureVector {
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub angle_deg: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Population density / 10 000.
    pub population: f64,
    /// Recent earthquake count / 100.
    pub seismicity: f64,
    /// Rock type index / 5, or 0.5 when unknown.
    pub rock_index: f64,
}

impl FeatureVector {
    /// Build features for a request. Targets without geology use
    /// `default_population_density`, no earthquakes and an unknown rock type.
    pub fn from_request(request: &ImpactRequest, default_population_density: f64) -> Self {
        let target = &request.target;
        let (population_density, earthquakes, rock) = match target.geology() {
            Some(g) => (g.population_density, g.recent_earthquakes, g.rock_type),
            None => (default_population_density, 0, RockType::Unknown),
        };

        Self {
            diameter_km: request.projectile.diameter_km(),
            velocity_km_s: request.projectile.velocity_km_s(),
            angle_deg: request.angle_deg,
            latitude: target.latitude(),
            longitude: target.longitude(),
            population: population_density / POPULATION_SCALE,
            seismicity: f64::from(earthquakes) / EARTHQUAKE_SCALE,
            rock_index: rock_index(rock),
        }
    }

    /// Population density in people per km², undoing the normalization.
    pub fn population_density(&self) -> f64 {
        self.population * POPULATION_SCALE
    }

    pub fn as_array(&self) -> [f64; 8] {
        [
            self.diameter_km,
            self.velocity_km_s,
            self.angle_deg,
            self.latitude,
            self.longitude,
            self.population,
            self.seismicity,
            self.rock_index,
        ]
    }
}

/// Normalized rock index in [0, 1).
pub fn rock_index(rock: RockType) -> f64 {
    match rock.index() {
        Some(i) => i as f64 / RockType::INDEXED.len() as f64,
        None => UNKNOWN_ROCK_INDEX,
    }
}
