//! Impact consequence prediction.
//!
//! [`ImpactCalculator`] runs the whole pipeline for one request:
//! energy → damage zones → casualties / economic damage → secondary effects
//! → mitigation catalog. It holds only configuration, so a single instance
//! can serve any number of concurrent callers.

use bevy::log::debug;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::consequences::{
    CasualtyModel, DISPLACEMENT_PER_CASUALTY, estimate_casualties, estimate_economic_damage,
    heuristic_estimate,
};
use crate::features::FeatureVector;
use crate::mitigation::{MitigationScenario, mitigation_scenarios};
use crate::perturbation::{
    CorrectionSource, ImpactProbability, ImpactProbabilitySource, NotModeled, UnitCorrection,
};
use crate::physics::{
    DamageZone, ZoneAreaModel, crater_diameter_meters, damage_zones, projectile_energy,
    seismic_magnitude,
};
use crate::types::{
    DEFAULT_GDP_PER_KM2_BILLION, DEFAULT_POPULATION_DENSITY, DEFAULT_TARGET_DENSITY,
    ImpactError, ImpactRequest, Projectile, TargetLocation, USD_PER_BILLION, require_non_negative,
    require_positive,
};

/// Infrastructure damage multiplier for buildings.
const BUILDINGS_MULTIPLIER: f64 = 1.2;
/// Infrastructure damage multiplier for roads.
const ROADS_MULTIPLIER: f64 = 0.8;
/// Infrastructure damage multiplier for utilities.
const UTILITIES_MULTIPLIER: f64 = 1.0;
/// Infrastructure damage percent per megaton.
const INFRASTRUCTURE_PERCENT_PER_MT: f64 = 5.0;
/// Indirect economic losses per unit of direct damage.
const INDIRECT_DAMAGE_FACTOR: f64 = 1.5;
/// Dust cloud radius per unit of crater diameter.
const DUST_CLOUD_FACTOR: f64 = 10.0;

/// Tunable inputs of the calculator.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Target rock density for crater scaling (kg/m³).
    pub target_density_kg_m3: f64,
    /// Economic value density (billion USD per km²).
    pub gdp_per_km2_billion: f64,
    /// Population density used when the target has no geology (people/km²).
    pub default_population_density: f64,
    /// Estimator for casualties and economic damage.
    pub casualty_model: CasualtyModel,
    /// Area the zone rates apply to.
    pub zone_area_model: ZoneAreaModel,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            target_density_kg_m3: DEFAULT_TARGET_DENSITY,
            gdp_per_km2_billion: DEFAULT_GDP_PER_KM2_BILLION,
            default_population_density: DEFAULT_POPULATION_DENSITY,
            casualty_model: CasualtyModel::default(),
            zone_area_model: ZoneAreaModel::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<(), ImpactError> {
        require_positive("target density", self.target_density_kg_m3)?;
        require_non_negative("GDP density", self.gdp_per_km2_billion)?;
        require_non_negative("population density", self.default_population_density)?;
        Ok(())
    }
}

/// Primary impact zone summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactZone {
    pub latitude: f64,
    pub longitude: f64,
    /// Outermost damage radius (km).
    pub radius_km: f64,
    pub estimated_casualties: f64,
    pub economic_damage_usd: f64,
    pub population_displacement: f64,
}

/// Percent of each infrastructure category destroyed (0-100).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InfrastructureDamage {
    pub roads: f64,
    pub buildings: f64,
    pub utilities: f64,
}

impl InfrastructureDamage {
    /// min(100, E·5·multiplier) per category.
    pub fn from_energy(energy_megatons: f64) -> Self {
        let percent = |multiplier: f64| {
            (energy_megatons.max(0.0) * INFRASTRUCTURE_PERCENT_PER_MT * multiplier).min(100.0)
        };
        Self {
            roads: percent(ROADS_MULTIPLIER),
            buildings: percent(BUILDINGS_MULTIPLIER),
            utilities: percent(UTILITIES_MULTIPLIER),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EconomicImpact {
    pub direct_damage_usd: f64,
    pub indirect_damage_usd: f64,
    pub recovery_years: u32,
}

impl EconomicImpact {
    pub fn from_direct(direct_damage_usd: f64) -> Self {
        Self {
            direct_damage_usd,
            indirect_damage_usd: direct_damage_usd * INDIRECT_DAMAGE_FACTOR,
            recovery_years: recovery_years(direct_damage_usd),
        }
    }
}

/// Years to recover from `direct_damage_usd` of damage: ⌈log₁₀(D)/2⌉.
///
/// Zero for damage of 1 USD or less.
pub fn recovery_years(direct_damage_usd: f64) -> u32 {
    if direct_damage_usd.is_nan() || direct_damage_usd <= 1.0 {
        return 0;
    }
    let years = (direct_damage_usd.log10() / 2.0).ceil();
    if years.is_finite() { years.max(0.0) as u32 } else { 0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PopulationImpact {
    pub displacement: f64,
    pub casualties: f64,
    /// Area inside the outermost damage zone (km²).
    pub affected_area_km2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnvironmentalImpact {
    pub crater_diameter_m: f64,
    pub dust_cloud_radius_km: f64,
    /// Equivalent Richter magnitude.
    pub seismic_magnitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SecondaryEffects {
    pub infrastructure: InfrastructureDamage,
    pub economic: EconomicImpact,
    pub population: PopulationImpact,
    pub environmental: EnvironmentalImpact,
}

/// Full prediction for one request. Never mutated after it is returned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactPrediction {
    pub asteroid_id: String,
    pub impact_probability: ImpactProbability,
    pub kinetic_energy_mt: f64,
    pub damage_zones: [DamageZone; 4],
    pub impact_zone: ImpactZone,
    pub secondary_effects: SecondaryEffects,
    pub mitigation_scenarios: Vec<MitigationScenario>,
}

/// Compact simulation result for a projectile at a location.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactSimulation {
    pub projectile: Projectile,
    pub location: TargetLocation,
    pub impact_energy_mt: f64,
    pub crater_diameter_m: f64,
    /// Radius of the outermost damage zone (km).
    pub damage_radius_km: f64,
    pub damage_zones: [DamageZone; 4],
    pub casualties: f64,
    /// Billions of USD.
    pub economic_damage_billion: f64,
}

/// Stateless impact consequence calculator.
#[derive(Clone, Debug, Default)]
pub struct ImpactCalculator {
    config: CalculatorConfig,
}

impl ImpactCalculator {
    /// Create a calculator, rejecting an invalid configuration.
    pub fn new(config: CalculatorConfig) -> Result<Self, ImpactError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn population_density(&self, target: &TargetLocation) -> f64 {
        target
            .geology()
            .map_or(self.config.default_population_density, |g| g.population_density)
    }

    /// Energy, crater, zones and zone-based consequences for a projectile.
    pub fn simulate(
        &self,
        projectile: &Projectile,
        location: &TargetLocation,
    ) -> Result<ImpactSimulation, ImpactError> {
        let energy = projectile_energy(projectile)?;
        let zones = damage_zones(energy);
        let area_model = self.config.zone_area_model;

        let casualties =
            estimate_casualties(&zones, self.population_density(location), area_model)?;
        let economic =
            estimate_economic_damage(&zones, self.config.gdp_per_km2_billion, area_model)?;
        debug!(
            "Impact of {:.0} m body at ({:.3}, {:.3}): {energy:.3e} MT, radius {:.1} km",
            projectile.diameter_m(),
            location.latitude(),
            location.longitude(),
            zones[3].radius_km
        );

        Ok(ImpactSimulation {
            projectile: projectile.clone(),
            location: location.clone(),
            impact_energy_mt: energy,
            crater_diameter_m: crater_diameter_meters(energy, self.config.target_density_kg_m3)?,
            damage_radius_km: zones[3].radius_km,
            damage_zones: zones,
            casualties,
            economic_damage_billion: economic,
        })
    }

    /// Full prediction with injected probability and correction sources.
    ///
    /// The correction source is only consulted by [`CasualtyModel::Heuristic`].
    pub fn predict<P, C>(
        &self,
        request: &ImpactRequest,
        asteroid_id: &str,
        probability: &mut P,
        correction: &mut C,
    ) -> Result<ImpactPrediction, ImpactError>
    where
        P: ImpactProbabilitySource + ?Sized,
        C: CorrectionSource + ?Sized,
    {
        request.validate()?;

        let simulation = self.simulate(&request.projectile, &request.target)?;
        let energy = simulation.impact_energy_mt;
        let radius_km = simulation.damage_radius_km;

        let (casualties, economic_damage_usd, displacement) = match self.config.casualty_model {
            CasualtyModel::DamageZones => (
                simulation.casualties,
                // Simulation reports billions, predictions report USD
                simulation.economic_damage_billion * USD_PER_BILLION,
                simulation.casualties * DISPLACEMENT_PER_CASUALTY,
            ),
            CasualtyModel::Heuristic => {
                let features =
                    FeatureVector::from_request(request, self.config.default_population_density);
                let estimate = heuristic_estimate(&features, correction.correction(&features));
                // Whole people
                (
                    estimate.casualties.round(),
                    estimate.economic_damage_usd,
                    estimate.displacement.round(),
                )
            }
        };

        let target = &request.target;
        let crater_m = simulation.crater_diameter_m;

        let secondary_effects = SecondaryEffects {
            infrastructure: InfrastructureDamage::from_energy(energy),
            economic: EconomicImpact::from_direct(economic_damage_usd),
            population: PopulationImpact {
                displacement,
                casualties,
                affected_area_km2: std::f64::consts::PI * radius_km * radius_km,
            },
            environmental: EnvironmentalImpact {
                crater_diameter_m: crater_m,
                // Crater diameter in km scaled up
                dust_cloud_radius_km: crater_m / 1000.0 * DUST_CLOUD_FACTOR,
                seismic_magnitude: seismic_magnitude(energy),
            },
        };

        Ok(ImpactPrediction {
            asteroid_id: asteroid_id.to_string(),
            impact_probability: probability.impact_probability(request),
            kinetic_energy_mt: energy,
            damage_zones: simulation.damage_zones,
            impact_zone: ImpactZone {
                latitude: target.latitude(),
                longitude: target.longitude(),
                radius_km,
                estimated_casualties: casualties,
                economic_damage_usd,
                population_displacement: displacement,
            },
            secondary_effects,
            mitigation_scenarios: mitigation_scenarios(Some(target)),
        })
    }

    /// Prediction with no probability model and unit corrections.
    pub fn predict_deterministic(
        &self,
        request: &ImpactRequest,
        asteroid_id: &str,
    ) -> Result<ImpactPrediction, ImpactError> {
        self.predict(request, asteroid_id, &mut NotModeled, &mut UnitCorrection)
    }
}
