//! Casualty and economic-damage extrapolation.
//!
//! Two paths:
//! - Zone based: population and GDP densities integrated over the damage
//!   zones, weighted by each zone's rates.
//! - Heuristic: polynomial estimates keyed on diameter and population
//!   density, scaled by an injected [`Correction`].

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::perturbation::Correction;
use crate::physics::{DamageZone, ZoneAreaModel, zone_areas};
use crate::types::{ImpactError, require_non_negative};

/// People displaced per casualty.
pub const DISPLACEMENT_PER_CASUALTY: f64 = 5.0;

/// Which estimator feeds casualties and economic damage in a full prediction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasualtyModel {
    /// Integrate over damage zones. Deterministic.
    #[default]
    DamageZones,
    /// Polynomial heuristic scaled by the correction source.
    Heuristic,
}

/// Expected casualties over the damage zones, rounded to the nearest person.
///
/// # Arguments
/// * `zones` - Damage zones, innermost first
/// * `population_density` - People per km²
/// * `area_model` - Whether inner zones are subtracted from outer ones
pub fn estimate_casualties(
    zones: &[DamageZone],
    population_density: f64,
    area_model: ZoneAreaModel,
) -> Result<f64, ImpactError> {
    let density = require_non_negative("population density", population_density)?;

    let casualties: f64 = zones
        .iter()
        .zip(zone_areas(zones, area_model))
        .map(|(zone, area)| area * density * zone.kind.casualty_rate())
        .sum();

    Ok(casualties.round())
}

/// Economic damage over the damage zones in billions of USD, rounded to cents
/// of a billion (2 decimals).
pub fn estimate_economic_damage(
    zones: &[DamageZone],
    gdp_per_km2_billion: f64,
    area_model: ZoneAreaModel,
) -> Result<f64, ImpactError> {
    let gdp = require_non_negative("GDP density", gdp_per_km2_billion)?;

    let damage: f64 = zones
        .iter()
        .zip(zone_areas(zones, area_model))
        .map(|(zone, area)| area * gdp * zone.kind.economic_damage_rate())
        .sum();

    Ok((damage * 100.0).round() / 100.0)
}

/// Heuristic consequence estimates before any unit conversion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeuristicEstimate {
    pub casualties: f64,
    pub economic_damage_usd: f64,
    pub displacement: f64,
}

/// Polynomial consequence heuristics scaled by `correction`.
///
/// - casualties ≈ (d·10)²·ρ_pop·0.1
/// - economic damage ≈ (d·100)²·10⁶ USD
/// - displacement ≈ 5 × uncorrected casualties
///
/// with d in km. Every output is non-negative and, for a fixed correction,
/// non-decreasing in diameter and population density.
pub fn heuristic_estimate(features: &FeatureVector, correction: Correction) -> HeuristicEstimate {
    let diameter = features.diameter_km.max(0.0);
    let population_density = features.population_density().max(0.0);

    let base_casualties = (diameter * 10.0).powi(2) * population_density * 0.1;
    let base_economic = (diameter * 100.0).powi(2) * 1e6;
    let base_displacement = base_casualties * DISPLACEMENT_PER_CASUALTY;

    HeuristicEstimate {
        casualties: (base_casualties * correction.casualties).abs(),
        economic_damage_usd: (base_economic * correction.economic).abs(),
        displacement: (base_displacement * correction.displacement).abs(),
    }
}
