//! Kinetic energy, crater scaling and seismic magnitude.

use crate::types::{ImpactError, JOULES_PER_MEGATON, Projectile, require_positive};

/// Empirical constant in the crater scaling law D = k·(E/ρ)^¼.
const CRATER_SCALING_CONSTANT: f64 = 1.8;

/// Kinetic energy of a spherical impactor in megatons of TNT.
///
/// E = ½·m·v², with m = ⁴⁄₃·π·r³·ρ and r = diameter/2 in meters.
///
/// # Arguments
/// * `diameter_km` - Impactor diameter (km)
/// * `velocity_km_s` - Impact velocity (km/s)
/// * `density_kg_m3` - Bulk density (kg/m³)
///
/// # Errors
/// `InvalidInput` if any argument is zero, negative or non-finite.
pub fn kinetic_energy_megatons(
    diameter_km: f64,
    velocity_km_s: f64,
    density_kg_m3: f64,
) -> Result<f64, ImpactError> {
    let diameter_km = require_positive("diameter", diameter_km)?;
    let velocity_km_s = require_positive("velocity", velocity_km_s)?;
    let density_kg_m3 = require_positive("density", density_kg_m3)?;

    let radius_m = diameter_km * 500.0;
    let volume = 4.0 / 3.0 * std::f64::consts::PI * radius_m.powi(3);
    let mass = volume * density_kg_m3;
    let velocity_m_s = velocity_km_s * 1000.0;
    let energy_joules = 0.5 * mass * velocity_m_s * velocity_m_s;

    Ok(energy_joules / JOULES_PER_MEGATON)
}

/// Kinetic energy of an already-validated projectile (megatons TNT).
pub fn projectile_energy(projectile: &Projectile) -> Result<f64, ImpactError> {
    kinetic_energy_megatons(
        projectile.diameter_km(),
        projectile.velocity_km_s(),
        projectile.density_kg_m3(),
    )
}

/// Final crater diameter in meters.
///
/// D = 1.8·(E/ρ_target)^¼ with E in joules. Non-positive energy gives 0.
///
/// # Errors
/// `InvalidInput` if `target_density_kg_m3` is zero, negative or non-finite.
pub fn crater_diameter_meters(
    energy_megatons: f64,
    target_density_kg_m3: f64,
) -> Result<f64, ImpactError> {
    let target_density_kg_m3 = require_positive("target density", target_density_kg_m3)?;
    if energy_megatons <= 0.0 {
        return Ok(0.0);
    }
    let energy_joules = energy_megatons * JOULES_PER_MEGATON;
    Ok(CRATER_SCALING_CONSTANT * (energy_joules / target_density_kg_m3).powf(0.25))
}

/// Equivalent Richter magnitude of the impact.
///
/// M = ⅔·(log₁₀E − 4.8), clamped to ≥ 0. Energy ≤ 0 is magnitude 0.
pub fn seismic_magnitude(energy_megatons: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return 0.0;
    }
    let energy_joules = energy_megatons * JOULES_PER_MEGATON;
    let magnitude = (2.0 / 3.0) * (energy_joules.log10() - 4.8);
    magnitude.max(0.0)
}
